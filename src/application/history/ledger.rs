//! In-session history ledger
//!
//! Append-only list of bill calculations for the running session. Records
//! are never persisted; they disappear on [`HistoryLedger::clear`] or when
//! the process exits. Export is the only way data leaves the ledger.

use std::path::Path;

use chrono::Local;
use tracing::info;

use crate::domain::history::{HistoryRecord, HistorySummary, NewHistoryRecord};
use crate::infrastructure::export::{export_csv_file, export_text_file, render_history_table};
use crate::support::errors::ExportError;

pub const DEFAULT_CURRENCY: &str = "₱";

/// What an export call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportStatus {
    /// Ledger was empty; nothing was written
    Empty,
    Written { records: usize },
}

#[derive(Debug, Clone)]
pub struct HistoryLedger {
    records: Vec<HistoryRecord>,
    currency: String,
}

impl Default for HistoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::with_currency(DEFAULT_CURRENCY)
    }

    /// Ledger whose text output prefixes amounts with `currency`
    pub fn with_currency(currency: impl Into<String>) -> Self {
        Self {
            records: Vec::new(),
            currency: currency.into(),
        }
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Stamp `fields` with the current time and append them
    pub fn add(&mut self, fields: NewHistoryRecord) -> &HistoryRecord {
        self.push(HistoryRecord::capture_now(fields))
    }

    fn push(&mut self, record: HistoryRecord) -> &HistoryRecord {
        self.records.push(record);
        let index = self.records.len() - 1;
        &self.records[index]
    }

    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn summary(&self) -> HistorySummary {
        HistorySummary::fold(&self.records)
    }

    pub fn summary_line(&self) -> String {
        self.summary().line(&self.currency)
    }

    /// Compact table for the history view
    pub fn render_table(&self) -> String {
        render_history_table(&self.records, &self.currency)
    }

    /// Write the fixed-width report to `path`. Does nothing on an empty ledger.
    pub fn export_text(&self, path: &Path) -> Result<ExportStatus, ExportError> {
        if self.is_empty() {
            return Ok(ExportStatus::Empty);
        }
        export_text_file(path, &self.records, Local::now().naive_local(), &self.currency)?;
        info!(path = %path.display(), records = self.len(), "History exported to text");
        Ok(ExportStatus::Written {
            records: self.len(),
        })
    }

    /// Write every record to `path` as CSV. Does nothing on an empty ledger.
    pub fn export_csv(&self, path: &Path) -> Result<ExportStatus, ExportError> {
        if self.is_empty() {
            return Ok(ExportStatus::Empty);
        }
        export_csv_file(path, &self.records)?;
        info!(path = %path.display(), records = self.len(), "History exported to CSV");
        Ok(ExportStatus::Written {
            records: self.len(),
        })
    }

    /// Drop every record. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.records.len();
        self.records.clear();
        if removed > 0 {
            info!(removed, "History cleared");
        }
        removed
    }
}

// ── Tests ──────────────────────────────────────────────────────
