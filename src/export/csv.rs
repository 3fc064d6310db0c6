//! CSV Export functionality
//!
//! Exports the expense list in a spreadsheet-friendly layout.

use serde::Serialize;
use std::io::Write;

use crate::error::TrackerResult;
use crate::models::Expense;

#[derive(Serialize)]
struct ExpenseRecord<'a> {
    id: String,
    date: String,
    category: &'static str,
    description: &'a str,
    amount: String,
}

/// Write every expense, oldest first, as CSV with a header row
///
/// Amounts are plain decimals without a currency symbol.
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> TrackerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    if expenses.is_empty() {
        csv_writer.write_record(["id", "date", "category", "description", "amount"])?;
    }

    for expense in expenses {
        csv_writer.serialize(ExpenseRecord {
            id: expense.id.to_string(),
            date: expense.date.format("%Y-%m-%d").to_string(),
            category: expense.category.name(),
            description: &expense.description,
            amount: expense.amount.to_string(),
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}
