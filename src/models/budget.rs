//! Budget entry model
//!
//! Tracks the monthly limit and spent-to-date for one category.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::money::Money;

/// A monthly budget for a single category
///
/// `spent` accumulates every expense recorded in the category after the
/// entry was created. Changing the limit leaves it untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetEntry {
    /// The category this budget covers
    pub category: Category,

    /// Monthly cap
    pub limit: Money,

    /// Running total spent in this category
    pub spent: Money,
}

impl BudgetEntry {
    /// Create a new budget with nothing spent
    pub fn new(category: Category, limit: Money) -> Self {
        Self {
            category,
            limit,
            spent: Money::zero(),
        }
    }

    /// Overwrite the limit, keeping spent as-is
    pub fn set_limit(&mut self, limit: Money) {
        self.limit = limit;
    }

    /// Add to the spent total
    pub fn add_spent(&mut self, amount: Money) {
        self.spent += amount;
    }

    /// Percentage of the limit used so far
    ///
    /// A zero limit yields `f64::INFINITY`.
    pub fn percent_used(&self) -> f64 {
        self.spent.percent_of(self.limit)
    }

    /// How much spending has gone past the limit (zero if within it)
    pub fn overage(&self) -> Money {
        if self.spent > self.limit {
            self.spent - self.limit
        } else {
            Money::zero()
        }
    }

    /// Limit minus spent (negative when over budget)
    pub fn remaining(&self) -> Money {
        self.limit - self.spent
    }

    /// Check whether spending has passed the limit
    pub fn is_over_budget(&self) -> bool {
        self.percent_used() > 100.0
    }

    /// Validate the entry
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.limit.is_negative() {
            return Err(BudgetValidationError::NegativeLimit);
        }
        Ok(())
    }
}

impl fmt::Display for BudgetEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} / {}", self.category, self.spent, self.limit)
    }
}

/// Validation errors for budget entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    NegativeLimit,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeLimit => write!(f, "Budget limit cannot be negative"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}
