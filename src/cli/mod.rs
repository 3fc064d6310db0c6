//! CLI command handlers
//!
//! This module contains the interactive loop, bridging clap-parsed input
//! lines with the session.

pub mod repl;

pub use repl::{parse_line, ExportFormat, Flow, Repl, ReplCommand};
