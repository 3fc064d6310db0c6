//! Ledger service
//!
//! Owns the income figure and the append-only list of expenses, and turns
//! raw user input into validated records.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, Expense, Money};

/// Parse a user-entered amount into money
pub fn parse_amount(input: &str) -> TrackerResult<Money> {
    Money::parse(input).map_err(|e| TrackerError::Validation(e.to_string()))
}

/// Parse a user-entered category name
pub fn parse_category(input: &str) -> TrackerResult<Category> {
    Category::parse(input).map_err(|e| TrackerError::Validation(e.to_string()))
}

/// Income and expense records for one session
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    income: Money,
    expenses: Vec<Expense>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a new expense dated `date`
    ///
    /// Nothing is recorded when the amount is missing, unparsable or not
    /// positive, when the category is unknown, or when the running total
    /// would pass [`Money::MAX`].
    pub fn add_expense(
        &mut self,
        amount: &str,
        category: &str,
        description: &str,
        date: NaiveDate,
    ) -> TrackerResult<Expense> {
        let amount = parse_amount(amount)?;
        let category = parse_category(category)?;

        let expense = Expense::new(amount, category, description, date);
        expense
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        let within_max = self
            .total_expenses()
            .checked_add(amount)
            .is_some_and(|total| total <= Money::MAX);
        if !within_max {
            return Err(TrackerError::Validation(format!(
                "Total expenses cannot exceed {}",
                Money::MAX
            )));
        }

        debug!(id = %expense.id, amount = %expense.amount, %category, "expense recorded");
        self.expenses.push(expense.clone());
        Ok(expense)
    }

    /// Replace the income figure
    ///
    /// Input that does not parse as an amount is taken as zero.
    pub fn set_income(&mut self, input: &str) -> Money {
        self.income = Money::parse(input).unwrap_or_default();
        self.income
    }

    pub fn income(&self) -> Money {
        self.income
    }

    /// All expenses in the order they were recorded
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn expense_count(&self) -> usize {
        self.expenses.len()
    }

    pub fn total_expenses(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    /// Income minus total expenses; negative when overspent
    pub fn remaining_income(&self) -> Money {
        self.income - self.total_expenses()
    }

    pub fn category_total(&self, category: Category) -> Money {
        self.expenses
            .iter()
            .filter(|e| e.category == category)
            .map(|e| e.amount)
            .sum()
    }

    /// The `limit` most recent expenses, newest first
    pub fn recent(&self, limit: usize) -> Vec<&Expense> {
        self.expenses.iter().rev().take(limit).collect()
    }
}
