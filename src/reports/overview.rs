//! Overview report
//!
//! The three headline figures: income, what has been spent, and what is left.

use crate::models::{Currency, Money};
use crate::session::Session;

/// Headline totals for the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewReport {
    pub currency: Currency,
    pub income: Money,
    pub total_expenses: Money,
    pub remaining: Money,
    pub expense_count: usize,
}

impl OverviewReport {
    pub fn generate(session: &Session) -> Self {
        Self {
            currency: session.currency(),
            income: session.income(),
            total_expenses: session.total_expenses(),
            remaining: session.remaining_income(),
            expense_count: session.expense_count(),
        }
    }

    /// True while spending has not passed income
    pub fn is_within_budget(&self) -> bool {
        !self.remaining.is_negative()
    }

    pub fn status(&self) -> &'static str {
        if self.is_within_budget() {
            "Within budget"
        } else {
            "Over budget"
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let fmt = |m: Money| self.currency.format(m);
        let transactions = if self.expense_count == 1 {
            "1 transaction".to_string()
        } else {
            format!("{} transactions", self.expense_count)
        };

        let mut output = String::new();
        output.push_str(&format!("{:<16}{:>14}\n", "Total Income", fmt(self.income)));
        output.push_str(&format!(
            "{:<16}{:>14}  {}\n",
            "Total Expenses",
            fmt(self.total_expenses),
            transactions
        ));
        output.push_str(&format!(
            "{:<16}{:>14}  {}\n",
            "Remaining",
            fmt(self.remaining),
            self.status()
        ));
        output
    }
}
