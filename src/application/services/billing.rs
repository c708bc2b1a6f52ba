//! Billing session: drives one bill form and the session's history ledger

use std::path::{Path, PathBuf};

use chrono::Local;
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::application::dto::BillForm;
use crate::application::history::{ExportStatus, HistoryLedger};
use crate::application::ports::{BillDocument, SavePrompt, StatementRenderer};
use crate::application::services::statement::render_statement;
use crate::config::{AppConfig, ExportConfig, StatementFormat};
use crate::domain::{calculate_bill, BillResult, HistoryRecord, NewHistoryRecord};
use crate::infrastructure::export::default_file_name;
use crate::infrastructure::render::{JsonStatementRenderer, TextStatementRenderer};
use crate::shared::parse_usage;
use crate::support::errors::{AppError, ExportError};

pub const NO_HISTORY_NOTICE: &str = "No calculation history to export.";

/// Result of a user action that may write a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Written { path: PathBuf, records: usize },
    /// Nothing to do; the message is shown to the user as-is
    Notice(String),
    Cancelled,
}

/// A bill that was generated and recorded
#[derive(Debug, Clone)]
pub struct GeneratedBill {
    pub units: Decimal,
    pub bill: BillResult,
    pub statement: String,
    pub record: HistoryRecord,
}

/// Single-user billing session.
///
/// Owns the only [`HistoryLedger`] of the process and is driven from one
/// thread by the interactive shell.
pub struct BillingSession {
    ledger: HistoryLedger,
    renderer: Box<dyn StatementRenderer>,
    export: ExportConfig,
}

impl BillingSession {
    pub fn new(
        currency: impl Into<String>,
        renderer: Box<dyn StatementRenderer>,
        export: ExportConfig,
    ) -> Self {
        Self {
            ledger: HistoryLedger::with_currency(currency),
            renderer,
            export,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let currency = config.billing.currency_symbol.clone();
        let renderer: Box<dyn StatementRenderer> = match config.billing.statement_format {
            StatementFormat::Text => Box::new(TextStatementRenderer::new(currency.clone())),
            StatementFormat::Json => Box::new(JsonStatementRenderer),
        };
        Self::new(currency, renderer, config.export.clone())
    }

    pub fn ledger(&self) -> &HistoryLedger {
        &self.ledger
    }

    pub fn currency(&self) -> &str {
        self.ledger.currency()
    }

    /// Calculate without recording anything
    pub fn quote(&self, form: &BillForm) -> Result<(Decimal, BillResult), AppError> {
        let units = parse_usage(&form.usage).inspect_err(|e| {
            warn!(input = %form.usage, error = %e, "Rejected kWh input");
        })?;
        let bill = calculate_bill(units, form.customer_class, form.discount.is_senior());
        Ok((units, bill))
    }

    /// Calculate, render the statement and append the bill to history.
    ///
    /// Invalid usage aborts before anything is recorded.
    pub fn generate(&mut self, form: &BillForm) -> Result<GeneratedBill, AppError> {
        let (units, bill) = self.quote(form)?;
        let statement = render_statement(&BillDocument::new(form, units, &bill), self.currency());

        let record = self
            .ledger
            .add(NewHistoryRecord::from_bill(
                form.customer_name.clone(),
                form.account.clone(),
                units,
                form.customer_class,
                form.discount,
                form.billing_month.clone(),
                &bill,
            ))
            .clone();

        info!(
            account = %form.account,
            class = %form.customer_class,
            kwh = %units,
            total = %bill.total,
            "Bill generated"
        );

        Ok(GeneratedBill {
            units,
            bill,
            statement,
            record,
        })
    }

    /// Hand the current form's bill to the statement renderer. History is
    /// not touched.
    pub fn download_statement(
        &self,
        form: &BillForm,
        prompt: &dyn SavePrompt,
    ) -> Result<ActionOutcome, AppError> {
        let extension = self.renderer.extension();
        let suggested = format!("bill_{}.{}", sanitize(&form.account), extension);
        let Some(path) = prompt.ask_save_path(&suggested, extension) else {
            return Ok(ActionOutcome::Cancelled);
        };

        let (units, bill) = self.quote(form)?;
        self.renderer
            .render(&BillDocument::new(form, units, &bill), &path)
            .inspect_err(|e| warn!(path = %path.display(), error = %e, "Statement rendering failed"))?;

        Ok(ActionOutcome::Written { path, records: 1 })
    }

    pub fn export_csv(&self, prompt: &dyn SavePrompt) -> Result<ActionOutcome, AppError> {
        self.export_with(prompt, "csv", |ledger, path| ledger.export_csv(path))
    }

    pub fn export_text(&self, prompt: &dyn SavePrompt) -> Result<ActionOutcome, AppError> {
        self.export_with(prompt, "txt", |ledger, path| ledger.export_text(path))
    }

    fn export_with<F>(
        &self,
        prompt: &dyn SavePrompt,
        extension: &str,
        write: F,
    ) -> Result<ActionOutcome, AppError>
    where
        F: FnOnce(&HistoryLedger, &Path) -> Result<ExportStatus, ExportError>,
    {
        if self.ledger.is_empty() {
            return Ok(ActionOutcome::Notice(NO_HISTORY_NOTICE.to_string()));
        }

        let name = default_file_name(&self.export.file_prefix, Local::now().naive_local(), extension);
        let suggested = self.export.suggested_path(&name);
        let Some(path) = prompt.ask_save_path(&suggested.to_string_lossy(), extension) else {
            return Ok(ActionOutcome::Cancelled);
        };

        match write(&self.ledger, &path) {
            Ok(ExportStatus::Written { records }) => Ok(ActionOutcome::Written { path, records }),
            Ok(ExportStatus::Empty) => Ok(ActionOutcome::Notice(NO_HISTORY_NOTICE.to_string())),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "History export failed");
                Err(e.into())
            }
        }
    }

    /// Clear history once `confirm` agrees. An empty ledger is left alone
    /// without asking. Returns the number of removed records.
    pub fn clear_history(&mut self, confirm: impl FnOnce() -> bool) -> usize {
        if self.ledger.is_empty() || !confirm() {
            return 0;
        }
        self.ledger.clear()
    }

    pub fn history_view(&self) -> String {
        self.ledger.render_table()
    }

    pub fn summary_line(&self) -> String {
        self.ledger.summary_line()
    }
}

/// Keep a user-typed account number safe for use in a file name
fn sanitize(raw: &str) -> String {
    let cleaned: String = raw
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    if cleaned.is_empty() {
        "statement".to_string()
    } else {
        cleaned
    }
}

// ── Tests ──────────────────────────────────────────────────────
