//! Fixed-width text rendering of the history ledger

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use chrono::NaiveDateTime;

use crate::domain::bill::round_money;
use crate::domain::history::{HistoryRecord, HistorySummary, TIMESTAMP_FORMAT};
use crate::support::errors::ExportError;

const BANNER_WIDTH: usize = 80;
const TABLE_RULE_WIDTH: usize = 120;
const VIEW_RULE_WIDTH: usize = 105;

pub const EMPTY_HISTORY_MESSAGE: &str =
    "No calculation history yet.\nGenerate some bills to see them here.";

/// First `max` characters of `s`
fn clip(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Write the full export report: banner, table, summary footer.
///
/// Columns: timestamp 19, name 20, account 15, kWh 8, cost 12, type 10,
/// discount 12, discount amount 10.
pub fn write_text_report<W: Write>(
    mut out: W,
    records: &[HistoryRecord],
    exported_at: NaiveDateTime,
    currency: &str,
) -> io::Result<()> {
    let banner = "=".repeat(BANNER_WIDTH);

    writeln!(out, "{banner}")?;
    writeln!(out, "ELECTRIC BILL CALCULATION HISTORY")?;
    writeln!(out, "{banner}")?;
    writeln!(out)?;
    writeln!(out, "Export Date: {}", exported_at.format(TIMESTAMP_FORMAT))?;
    writeln!(out, "Total Records: {}", records.len())?;
    writeln!(out, "{}", "-".repeat(BANNER_WIDTH))?;
    writeln!(out)?;

    writeln!(
        out,
        "{:19} {:20} {:15} {:>8} {:>12} {:>10} {:>12} {:>10}",
        "Timestamp", "Customer Name", "Account", "kWh", "Cost", "Type", "Discount", "Disc Amt"
    )?;
    writeln!(out, "{}", "-".repeat(TABLE_RULE_WIDTH))?;

    for r in records {
        writeln!(
            out,
            "{:19} {:20} {:15} {:>8.2} {currency}{:>10.2} {:>10} {:>12} {currency}{:>8.2}",
            r.formatted_timestamp(),
            clip(&r.customer_name, 18),
            clip(&r.account, 14),
            round_money(r.kwh_used),
            round_money(r.total_cost),
            clip(r.customer_class.as_str(), 8),
            clip(r.discount.label(), 10),
            round_money(r.discount_amount),
        )?;
    }

    let summary = HistorySummary::fold(records);
    writeln!(out)?;
    writeln!(out, "{banner}")?;
    writeln!(out, "SUMMARY")?;
    writeln!(out, "{banner}")?;
    writeln!(out, "Total Calculations: {}", summary.count)?;
    writeln!(out, "Total kWh Consumed: {:.2}", round_money(summary.total_usage))?;
    writeln!(out, "Total Amount: {currency}{:.2}", round_money(summary.total_cost))?;
    writeln!(out, "{banner}")?;
    Ok(())
}

/// Write the report to `path`, replacing any existing file
pub fn export_text_file(
    path: &Path,
    records: &[HistoryRecord],
    exported_at: NaiveDateTime,
    currency: &str,
) -> Result<(), ExportError> {
    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    write_text_report(&mut out, records, exported_at, currency).map_err(io_err)?;
    out.flush().map_err(io_err)
}

/// Compact table shown in the history view
pub fn render_history_table(records: &[HistoryRecord], currency: &str) -> String {
    if records.is_empty() {
        return EMPTY_HISTORY_MESSAGE.to_string();
    }

    let mut lines = Vec::with_capacity(records.len() + 2);
    lines.push(format!(
        "{:19} {:15} {:12} {:>6} {:>10} {:>10} {:>8} {:>10}",
        "Timestamp", "Name", "Account", "kWh", "Cost", "Type", "Disc", "Disc Amt"
    ));
    lines.push("-".repeat(VIEW_RULE_WIDTH));

    for r in records {
        let discount = if r.discount.is_senior() {
            clip(r.discount.label(), 5)
        } else {
            r.discount.label().to_string()
        };
        lines.push(format!(
            "{:19} {:15} {:12} {:>6.2} {currency}{:>9.2} {:>10} {:>8} {currency}{:>8.2}",
            r.formatted_timestamp(),
            clip(&r.customer_name, 14),
            clip(&r.account, 11),
            round_money(r.kwh_used),
            round_money(r.total_cost),
            clip(r.customer_class.as_str(), 8),
            discount,
            round_money(r.discount_amount),
        ));
    }

    lines.join("\n")
}
