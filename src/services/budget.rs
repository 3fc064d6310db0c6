//! Budget tracker service
//!
//! Keeps one budget entry per category. Limits can be changed at any time;
//! the spent total only ever grows as expenses are recorded.

use tracing::debug;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{BudgetEntry, Category, Money};
use crate::services::ledger::{parse_amount, parse_category};

/// Per-category budgets for one session
#[derive(Debug, Clone, Default)]
pub struct BudgetTracker {
    entries: Vec<BudgetEntry>,
}

impl BudgetTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or update the budget for a category
    ///
    /// An existing entry keeps its spent total; only the limit changes.
    pub fn set_budget(&mut self, category: &str, limit: &str) -> TrackerResult<BudgetEntry> {
        let category = parse_category(category)?;
        let limit = parse_amount(limit)?;
        BudgetEntry::new(category, limit)
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        let entry = match self.entries.iter_mut().find(|e| e.category == category) {
            Some(entry) => {
                debug!(%category, old = %entry.limit, new = %limit, "budget limit updated");
                entry.set_limit(limit);
                entry.clone()
            }
            None => {
                let entry = BudgetEntry::new(category, limit);
                debug!(%category, %limit, "budget created");
                self.entries.push(entry.clone());
                entry
            }
        };

        Ok(entry)
    }

    /// Add an accepted expense to its category's budget
    ///
    /// Returns the updated entry, or `None` if the category has no budget.
    pub fn record_spend(&mut self, category: Category, amount: Money) -> Option<&BudgetEntry> {
        let entry = self.entries.iter_mut().find(|e| e.category == category)?;
        entry.add_spent(amount);
        Some(&*entry)
    }

    pub fn get(&self, category: Category) -> Option<&BudgetEntry> {
        self.entries.iter().find(|e| e.category == category)
    }

    /// Percent of the category's limit used, if it has a budget
    pub fn percent_used(&self, category: Category) -> Option<f64> {
        self.get(category).map(BudgetEntry::percent_used)
    }

    /// Entries in the order their categories were first budgeted
    pub fn entries(&self) -> &[BudgetEntry] {
        &self.entries
    }

    pub fn total_limit(&self) -> Money {
        self.entries.iter().map(|e| e.limit).sum()
    }

    pub fn total_spent(&self) -> Money {
        self.entries.iter().map(|e| e.spent).sum()
    }
}
