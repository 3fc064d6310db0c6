//! Budget Overview Report
//!
//! How far each budgeted category is through its limit.

use crate::display::report::{format_bar, format_percentage, separator};
use crate::models::{BudgetEntry, Category, Currency, Money};
use crate::session::Session;

/// One budgeted category
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetReportRow {
    pub category: Category,
    pub spent: Money,
    pub limit: Money,
    /// `spent / limit × 100`; infinite for a zero limit
    pub percent_used: f64,
    pub over_budget: bool,
}

impl BudgetReportRow {
    fn from_entry(entry: &BudgetEntry) -> Self {
        Self {
            category: entry.category,
            spent: entry.spent,
            limit: entry.limit,
            percent_used: entry.percent_used(),
            over_budget: entry.is_over_budget(),
        }
    }

    /// Percent used, capped at 100 for progress bars
    pub fn progress(&self) -> f64 {
        self.percent_used.min(100.0)
    }
}

/// Budget Overview Report
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetOverviewReport {
    pub currency: Currency,
    /// Rows in the order budgets were first set
    pub rows: Vec<BudgetReportRow>,
    pub total_limit: Money,
    pub total_spent: Money,
}

impl BudgetOverviewReport {
    pub fn generate(session: &Session) -> Self {
        let rows: Vec<_> = session
            .budgets()
            .iter()
            .map(BudgetReportRow::from_entry)
            .collect();
        let total_limit = rows.iter().map(|r| r.limit).sum();
        let total_spent = rows.iter().map(|r| r.spent).sum();

        Self {
            currency: session.currency(),
            rows,
            total_limit,
            total_spent,
        }
    }

    pub fn over_budget_count(&self) -> usize {
        self.rows.iter().filter(|r| r.over_budget).count()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        if self.rows.is_empty() {
            return "No budgets set yet.\n".to_string();
        }

        let mut output = String::new();
        output.push_str("Budget Overview\n");
        output.push_str(&separator(70));
        output.push('\n');

        for row in &self.rows {
            let marker = if row.over_budget { "!" } else { " " };
            let used = if row.percent_used.is_infinite() {
                "no limit".to_string()
            } else {
                format!("{} used", format_percentage(row.percent_used))
            };
            output.push_str(&format!(
                "{}{:<15} {:>12} / {:<12} {}  {}\n",
                marker,
                row.category.name(),
                self.currency.format(row.spent),
                self.currency.format(row.limit),
                format_bar(row.progress(), 100.0, 20),
                used
            ));
        }

        let over = self.over_budget_count();
        if over > 0 {
            output.push('\n');
            let noun = if over == 1 { "category" } else { "categories" };
            output.push_str(&format!("{} {} over budget\n", over, noun));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[test]
    fn test_empty() {
        let session = Session::new(Settings::default()).unwrap();
        let report = BudgetOverviewReport::generate(&session);
        assert!(report.rows.is_empty());
        assert_eq!(report.format_terminal(), "No budgets set yet.\n");
    }

    #[test]
    fn test_rows() {
        let mut session = Session::new(Settings::default()).unwrap();
        session.set_budget("Food", "100").unwrap();
        session.set_budget("Bills", "50").unwrap();
        session.add_expense("120", "Food", "").unwrap();
        session.add_expense("10", "Bills", "").unwrap();

        let report = BudgetOverviewReport::generate(&session);
        assert_eq!(report.rows.len(), 2);

        let food = &report.rows[0];
        assert_eq!(food.category, Category::Food);
        assert!(food.over_budget);
        assert!((food.percent_used - 120.0).abs() < 1e-9);
        assert_eq!(food.progress(), 100.0);

        let bills = &report.rows[1];
        assert!(!bills.over_budget);
        assert!((bills.progress() - 20.0).abs() < 1e-9);

        assert_eq!(report.total_limit, Money::from_units(150, 0));
        assert_eq!(report.total_spent, Money::from_units(130, 0));
        assert_eq!(report.over_budget_count(), 1);
        assert!(report.format_terminal().contains("1 category over budget"));
    }

    #[test]
    fn test_zero_limit_row() {
        let mut session = Session::new(Settings::default()).unwrap();
        session.set_budget("Other", "0").unwrap();

        let report = BudgetOverviewReport::generate(&session);
        let row = &report.rows[0];
        assert!(row.percent_used.is_infinite());
        assert!(row.over_budget);
        assert_eq!(row.progress(), 100.0);
        assert!(report.format_terminal().contains("no limit"));
    }
}
