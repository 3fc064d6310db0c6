//! YAML Export functionality
//!
//! The same snapshot as the JSON export, in a human-readable layout.

use std::io::Write;

use crate::error::TrackerResult;
use crate::export::json::SessionExport;
use crate::session::Session;

/// Export the session to YAML, preceded by a comment header
pub fn export_session_yaml<W: Write>(session: &Session, writer: &mut W) -> TrackerResult<()> {
    let export = SessionExport::from_session(session);

    writeln!(writer, "# Expense Tracker Session Export")?;
    writeln!(writer, "# Generated: {}", export.exported_at)?;
    writeln!(writer, "# App Version: {}", export.app_version)?;
    writeln!(writer)?;

    serde_yaml::to_writer(writer, &export)?;
    Ok(())
}
