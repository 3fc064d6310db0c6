//! Reports module for the expense tracker
//!
//! Read-only views derived from a session: headline totals, spending by
//! category, budget progress, tips and badges.

pub mod advice;
pub mod budget_overview;
pub mod overview;
pub mod spending;

pub use advice::{badge_labels, format_badges, format_tips, FinancialTip, TipKind, FINANCIAL_TIPS};
pub use budget_overview::{BudgetOverviewReport, BudgetReportRow};
pub use overview::OverviewReport;
pub use spending::{SpendingByCategory, SpendingReport};
