//! Spending Report
//!
//! Breaks total spending down by category.

use crate::display::report::{format_bar, separator};
use crate::models::{Category, Currency, Money};
use crate::session::Session;

/// Spending in one category
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingByCategory {
    pub category: Category,
    /// Sum of the category's expenses
    pub total: Money,
    /// Number of expenses
    pub count: usize,
    /// Share of total spending (0 when nothing has been spent)
    pub percentage: f64,
}

/// Spending Report
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingReport {
    pub currency: Currency,
    /// Categories with spending, in category order
    pub categories: Vec<SpendingByCategory>,
    pub total_spending: Money,
    pub total_transactions: usize,
}

impl SpendingReport {
    pub fn generate(session: &Session) -> Self {
        let total_spending = session.total_expenses();

        let categories = Category::all()
            .iter()
            .filter_map(|&category| {
                let total = session.category_total(category);
                if total.is_zero() {
                    return None;
                }
                let count = session
                    .expenses()
                    .iter()
                    .filter(|e| e.category == category)
                    .count();
                let percentage = if total_spending.is_zero() {
                    0.0
                } else {
                    total.percent_of(total_spending)
                };
                Some(SpendingByCategory {
                    category,
                    total,
                    count,
                    percentage,
                })
            })
            .collect();

        Self {
            currency: session.currency(),
            categories,
            total_spending,
            total_transactions: session.expense_count(),
        }
    }

    /// Look up one category's row
    pub fn category(&self, category: Category) -> Option<&SpendingByCategory> {
        self.categories.iter().find(|c| c.category == category)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        if self.categories.is_empty() {
            return "No expenses recorded yet.\n".to_string();
        }

        let mut output = String::new();
        output.push_str("Spending Insights\n");
        output.push_str(&separator(60));
        output.push('\n');

        for row in &self.categories {
            output.push_str(&format!(
                "{:<15} {:>12} {:>6.1}%  {}\n",
                row.category.name(),
                self.currency.format(row.total),
                row.percentage,
                format_bar(row.percentage, 100.0, 20)
            ));
        }

        output.push_str(&separator(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<15} {:>12}  ({} expenses)\n",
            "Total",
            self.currency.format(self.total_spending),
            self.total_transactions
        ));
        output
    }
}
