//! JSON statement file, the flat bill mapping as-is

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::application::ports::{BillDocument, StatementRenderer};
use crate::support::errors::RenderError;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonStatementRenderer;

impl StatementRenderer for JsonStatementRenderer {
    fn extension(&self) -> &'static str {
        "json"
    }

    fn render(&self, document: &BillDocument, destination: &Path) -> Result<(), RenderError> {
        let io_err = |source| RenderError::Io {
            path: destination.to_path_buf(),
            source,
        };

        let file = File::create(destination).map_err(io_err)?;
        let mut out = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut out, document)?;
        out.flush().map_err(io_err)?;

        info!(path = %destination.display(), account = %document.account, "Statement written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::BillForm;
    use crate::domain::{calculate_bill, CustomerClass, DiscountType};
    use rust_decimal_macros::dec;

    #[test]
    fn writes_flat_mapping() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bill.json");
        let form = BillForm {
            customer_name: "Juan".into(),
            account: "A-7".into(),
            discount: DiscountType::SeniorCitizen,
            billing_month: "October 2026".into(),
            ..BillForm::default()
        };
        let bill = calculate_bill(dec!(120), CustomerClass::Residential, true);
        let doc = BillDocument::new(&form, dec!(120), &bill);

        JsonStatementRenderer.render(&doc, &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let map = value.as_object().unwrap();
        let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "account", "address", "base", "discount", "discount_amount", "env", "fixed",
                "kwh", "month", "name", "rate", "total", "type", "vat"
            ]
        );
        assert_eq!(map["type"], "Residential");
        assert_eq!(map["discount"], "Senior Citizen (5%)");
        assert_eq!(map["total"], "821.79");
        assert_eq!(map["base"], "735.00");
        assert_eq!(map["fixed"], "40.00");
        assert_eq!(map["rate"], "8.0");
    }
}
