//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display,
//! including tables, notifications, and the chat transcript.

pub mod catalog;
pub mod expense;
pub mod feed;
pub mod report;

pub use catalog::{format_category_list, format_currency_table};
pub use expense::{format_expense_line, format_expense_table};
pub use feed::{format_event, format_transcript};
