//! Outbound ports: seams to the collaborators the core does not own
//!
//! [`StatementRenderer`] is where a PDF (or any other document) renderer
//! plugs in; [`SavePrompt`] stands in for the file-save dialog of whatever
//! shell drives the session.

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::Serialize;

use crate::application::dto::BillForm;
use crate::domain::{BillResult, CustomerClass};
use crate::support::errors::RenderError;

// ── BillDocument ───────────────────────────────────────────────

/// Flat mapping handed to a statement renderer: bill fields plus
/// customer identification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BillDocument {
    pub name: String,
    pub account: String,
    pub address: String,
    /// Title-case label, e.g. `Residential`
    #[serde(rename = "type")]
    pub customer_type: String,
    #[serde(skip)]
    pub customer_class: CustomerClass,
    pub discount: String,
    pub discount_amount: Decimal,
    pub month: String,
    pub kwh: Decimal,
    pub rate: Decimal,
    pub fixed: Decimal,
    pub base: Decimal,
    pub env: Decimal,
    pub vat: Decimal,
    pub total: Decimal,
}

impl BillDocument {
    pub fn new(form: &BillForm, kwh: Decimal, bill: &BillResult) -> Self {
        Self {
            name: form.customer_name.clone(),
            account: form.account.clone(),
            address: form.address.clone(),
            customer_type: form.customer_class.label().to_string(),
            customer_class: form.customer_class,
            discount: form.discount.label().to_string(),
            discount_amount: bill.discount,
            month: form.billing_month.clone(),
            kwh,
            rate: bill.applied_rate,
            fixed: bill.fixed_fee,
            base: bill.energy_charge,
            env: bill.environmental_fee,
            vat: bill.vat,
            total: bill.total,
        }
    }
}

// ── Ports ──────────────────────────────────────────────────────

/// Renders a bill document to a destination file.
pub trait StatementRenderer {
    /// File extension the renderer produces, without the dot
    fn extension(&self) -> &'static str;

    fn render(&self, document: &BillDocument, destination: &Path) -> Result<(), RenderError>;
}

/// Asks the user where to save a file.
///
/// Returns `None` when the user cancels.
pub trait SavePrompt {
    fn ask_save_path(&self, suggested_name: &str, extension: &str) -> Option<PathBuf>;
}

/// Prompt that always answers with a fixed path (scripted sessions and tests)
#[derive(Debug, Clone)]
pub struct FixedSavePath(pub Option<PathBuf>);

impl SavePrompt for FixedSavePath {
    fn ask_save_path(&self, _suggested_name: &str, _extension: &str) -> Option<PathBuf> {
        self.0.clone()
    }
}
