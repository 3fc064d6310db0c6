//! JSON Export functionality
//!
//! Exports a full snapshot of the session with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::TrackerResult;
use crate::models::{AchievementSet, BudgetEntry, ChatMessage, Expense, Money};
use crate::session::Session;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Everything in a session at one point in time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Display currency code
    pub currency: String,

    pub income: Money,

    pub expenses: Vec<Expense>,

    pub budgets: Vec<BudgetEntry>,

    pub badges: AchievementSet,

    pub transcript: Vec<ChatMessage>,

    pub totals: ExportTotals,
}

/// Derived figures, included for readers that don't recompute them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportTotals {
    pub total_expenses: Money,
    pub remaining_income: Money,
    pub expense_count: usize,
}

impl SessionExport {
    /// Capture the current state of a session
    pub fn from_session(session: &Session) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            currency: session.currency().code.to_string(),
            income: session.income(),
            expenses: session.expenses().to_vec(),
            budgets: session.budgets().to_vec(),
            badges: session.achievements().clone(),
            transcript: session.transcript().to_vec(),
            totals: ExportTotals {
                total_expenses: session.total_expenses(),
                remaining_income: session.remaining_income(),
                expense_count: session.expense_count(),
            },
        }
    }
}

/// Export the session to pretty-printed JSON
pub fn export_session_json<W: Write>(session: &Session, writer: &mut W) -> TrackerResult<()> {
    let export = SessionExport::from_session(session);
    serde_json::to_writer_pretty(&mut *writer, &export)?;
    writeln!(writer)?;
    Ok(())
}
