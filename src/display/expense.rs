//! Expense display formatting
//!
//! Renders expense lists as tables for terminal output.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::report::truncate;
use crate::models::{Currency, Expense};

const DESCRIPTION_WIDTH: usize = 32;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl ExpenseRow {
    fn new(expense: &Expense, currency: &Currency) -> Self {
        Self {
            id: expense.id.to_string(),
            date: expense.date.format("%Y-%m-%d").to_string(),
            description: truncate(expense.label(), DESCRIPTION_WIDTH),
            category: expense.category.name().to_string(),
            amount: currency.format(expense.amount),
        }
    }
}

/// Format expenses as a table, in the order given
pub fn format_expense_table<'a, I>(expenses: I, currency: &Currency) -> String
where
    I: IntoIterator<Item = &'a Expense>,
{
    let rows: Vec<ExpenseRow> = expenses
        .into_iter()
        .map(|e| ExpenseRow::new(e, currency))
        .collect();

    if rows.is_empty() {
        return "No expenses recorded yet.".to_string();
    }

    Table::new(rows).with(Style::rounded()).to_string()
}

/// One-line summary of a single expense
pub fn format_expense_line(expense: &Expense, currency: &Currency) -> String {
    format!(
        "{}  {}  {} ({})",
        expense.id,
        currency.format(expense.amount),
        expense.label(),
        expense.category
    )
}
