//! Core data models for the expense tracker
//!
//! This module contains all the data structures that represent the tracking
//! domain: expenses, budgets, categories, badges, the chat transcript and
//! display currencies.

pub mod achievement;
pub mod budget;
pub mod category;
pub mod chat;
pub mod currency;
pub mod expense;
pub mod ids;
pub mod money;

pub use achievement::{AchievementSet, BadgeId};
pub use budget::{BudgetEntry, BudgetValidationError};
pub use category::{Category, CategoryParseError};
pub use chat::ChatMessage;
pub use currency::{Currency, CURRENCIES};
pub use expense::{Expense, ExpenseValidationError};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
