//! Service layer for the expense tracker
//!
//! Each service owns one slice of session state and validates the raw input
//! that reaches it. The session wires them together.

pub mod assistant;
pub mod budget;
pub mod ledger;
pub mod policy;

pub use assistant::{Assistant, AssistantState};
pub use budget::BudgetTracker;
pub use ledger::Ledger;
pub use policy::NotificationPolicy;
