//! Notifications raised by session actions
//!
//! Every write to the session queues zero or more [`TrackerEvent`]s. The
//! front-end drains them after each action and shows them however it likes.
//! Amounts inside events are stored raw and only formatted on demand, so a
//! currency change never rewrites history.

use serde::Serialize;
use std::fmt;

use crate::models::{BadgeId, Category, Currency, Expense, Money};

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl fmt::Display for EventLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EventLevel::Info => "info",
            EventLevel::Success => "success",
            EventLevel::Warning => "warning",
            EventLevel::Error => "error",
        };
        f.write_str(s)
    }
}

/// Something the user should be told about
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TrackerEvent {
    ExpenseAdded {
        expense: Expense,
    },
    BudgetSet {
        category: Category,
        limit: Money,
    },
    IncomeSet {
        income: Money,
    },
    CurrencyChanged {
        code: String,
    },
    /// A write was rejected; nothing changed
    ValidationFailed {
        action: &'static str,
        reason: String,
    },
    BudgetExceeded {
        category: Category,
        overage: Money,
    },
    BudgetWarning {
        category: Category,
        percent: f64,
    },
    BadgeEarned {
        badge: BadgeId,
        category: Category,
    },
}

impl TrackerEvent {
    pub fn level(&self) -> EventLevel {
        match self {
            TrackerEvent::ExpenseAdded { .. }
            | TrackerEvent::BudgetSet { .. }
            | TrackerEvent::BadgeEarned { .. } => EventLevel::Success,
            TrackerEvent::IncomeSet { .. } | TrackerEvent::CurrencyChanged { .. } => {
                EventLevel::Info
            }
            TrackerEvent::BudgetWarning { .. } => EventLevel::Warning,
            TrackerEvent::BudgetExceeded { .. } | TrackerEvent::ValidationFailed { .. } => {
                EventLevel::Error
            }
        }
    }

    /// Short heading, e.g. "Budget Warning"
    pub fn title(&self) -> &'static str {
        match self {
            TrackerEvent::ExpenseAdded { .. } => "Expense Added",
            TrackerEvent::BudgetSet { .. } => "Budget Updated",
            TrackerEvent::IncomeSet { .. } => "Income Updated",
            TrackerEvent::CurrencyChanged { .. } => "Currency Changed",
            TrackerEvent::ValidationFailed { .. } => "Error",
            TrackerEvent::BudgetExceeded { .. } => "Budget Exceeded!",
            TrackerEvent::BudgetWarning { .. } => "Budget Warning",
            TrackerEvent::BadgeEarned { .. } => "Badge Earned!",
        }
    }

    /// Human-readable message, amounts formatted in `currency`
    pub fn message(&self, currency: &Currency) -> String {
        match self {
            TrackerEvent::ExpenseAdded { expense } => format!(
                "Added {} for {} ({})",
                currency.format(expense.amount),
                expense.label(),
                expense.category
            ),
            TrackerEvent::BudgetSet { category, limit } => {
                format!("{} budget set to {}", category, currency.format(*limit))
            }
            TrackerEvent::IncomeSet { income } => {
                format!("Monthly income set to {}", currency.format(*income))
            }
            TrackerEvent::CurrencyChanged { code } => format!("Now showing amounts in {}", code),
            TrackerEvent::ValidationFailed { action, reason } => {
                format!("Could not {}: {}", action, reason)
            }
            TrackerEvent::BudgetExceeded { category, overage } => format!(
                "You've exceeded your {} budget by {}",
                category,
                currency.format(*overage)
            ),
            TrackerEvent::BudgetWarning { category, percent } => format!(
                "You're approaching your {} budget limit ({:.1}% used)",
                category, percent
            ),
            TrackerEvent::BadgeEarned { category, .. } => format!(
                "{} Budget Saver - You're staying within your budget!",
                category
            ),
        }
    }
}
