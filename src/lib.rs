//! Expense Tracker - personal finance tracking in the terminal
//!
//! This library provides the core of the expense tracker: an in-memory
//! session that records income and expenses, tracks per-category budgets,
//! raises threshold alerts and saver badges, and runs a scripted assistant
//! that answers chat messages after a delay.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, expenses, budgets, badges, ...)
//! - `services`: Ledger, budget tracker, notification policy, assistant
//! - `scheduler`: Injectable clock and deferred task queue
//! - `session`: The session object tying the services together
//! - `events`: Notifications emitted by session writes
//! - `reports`: Read-only summaries of a session
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML export
//! - `cli`: The interactive command loop
//!
//! # Example
//!
//! ```rust
//! use expense_tracker::config::Settings;
//! use expense_tracker::session::Session;
//!
//! let mut session = Session::new(Settings::default())?;
//! session.set_income("1000");
//! session.set_budget("Food", "100")?;
//! session.add_expense("85", "Food", "Groceries")?;
//!
//! assert_eq!(session.remaining_income().to_string(), "915.00");
//! assert_eq!(session.achievements().len(), 1);
//! # Ok::<(), expense_tracker::error::TrackerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod events;
pub mod export;
pub mod models;
pub mod reports;
pub mod scheduler;
pub mod services;
pub mod session;

pub use error::{TrackerError, TrackerResult};
pub use events::{EventLevel, TrackerEvent};
pub use session::Session;
