//! Expense record model
//!
//! An expense is immutable once created: the ledger only ever appends them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::ExpenseId;
use super::money::Money;

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Amount spent (always positive)
    pub amount: Money,

    /// Spending category
    pub category: Category,

    /// Free-text description, empty when none was given
    #[serde(default)]
    pub description: String,

    /// Calendar date the expense was recorded
    pub date: NaiveDate,
}

impl Expense {
    /// Create a new expense with a fresh id
    pub fn new(
        amount: Money,
        category: Category,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            amount,
            category,
            description: description.into().trim().to_string(),
            date,
        }
    }

    /// Text to show for this expense: its description, or the category name
    pub fn label(&self) -> &str {
        if self.description.is_empty() {
            self.category.name()
        } else {
            &self.description
        }
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.amount.is_zero() {
            return Err(ExpenseValidationError::ZeroAmount);
        }
        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount);
        }
        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} ({})", self.date, self.label(), self.amount, self.category)
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    ZeroAmount,
    NegativeAmount,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroAmount => write!(f, "Expense amount must be greater than zero"),
            Self::NegativeAmount => write!(f, "Expense amount cannot be negative"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    #[test]
    fn test_new_expense() {
        let expense = Expense::new(Money::from_cents(1250), Category::Food, "  Lunch ", date());
        assert_eq!(expense.amount.cents(), 1250);
        assert_eq!(expense.category, Category::Food);
        assert_eq!(expense.description, "Lunch");
        assert_eq!(expense.date, date());
    }

    #[test]
    fn test_label_falls_back_to_category() {
        let expense = Expense::new(Money::from_cents(500), Category::Bills, "", date());
        assert_eq!(expense.label(), "Bills");

        let expense = Expense::new(Money::from_cents(500), Category::Bills, "Phone", date());
        assert_eq!(expense.label(), "Phone");
    }

    #[test]
    fn test_validation() {
        let mut expense = Expense::new(Money::from_cents(100), Category::Other, "", date());
        assert!(expense.validate().is_ok());

        expense.amount = Money::zero();
        assert_eq!(expense.validate(), Err(ExpenseValidationError::ZeroAmount));

        expense.amount = Money::from_cents(-1);
        assert_eq!(expense.validate(), Err(ExpenseValidationError::NegativeAmount));
    }

    #[test]
    fn test_serialization() {
        let expense = Expense::new(Money::from_cents(999), Category::Shopping, "Socks", date());
        let json = serde_json::to_string(&expense).unwrap();
        let deserialized: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(expense, deserialized);
    }
}
