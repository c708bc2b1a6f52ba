//! History export writers

pub mod csv_report;
pub mod text_report;

use chrono::NaiveDateTime;

pub use csv_report::{export_csv_file, read_csv, read_csv_file, write_csv, CSV_HEADER};
pub use text_report::{export_text_file, render_history_table, write_text_report};

/// Default file name for an export made at `at`, e.g.
/// `electric_bill_history_20261019_101500.csv`
pub fn default_file_name(prefix: &str, at: NaiveDateTime, extension: &str) -> String {
    format!("{}_{}.{}", prefix, at.format("%Y%m%d_%H%M%S"), extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn default_file_name_embeds_timestamp() {
        let at = NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(10, 15, 0)
            .unwrap();
        assert_eq!(
            default_file_name("electric_bill_history", at, "txt"),
            "electric_bill_history_20261019_101500.txt"
        );
    }
}
