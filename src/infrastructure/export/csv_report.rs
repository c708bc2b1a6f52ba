//! CSV export of the history ledger
//!
//! One header row plus one row per record, full field values, UTF-8.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::domain::bill::{round_money, DiscountType};
use crate::domain::history::{HistoryRecord, TIMESTAMP_FORMAT};
use crate::domain::tariff::CustomerClass;
use crate::support::errors::ExportError;

pub const CSV_HEADER: [&str; 9] = [
    "Timestamp",
    "Customer Name",
    "Account Number",
    "kWh Used",
    "Total Cost",
    "Customer Type",
    "Discount Type",
    "Discount Amount",
    "Billing Month",
];

fn to_row(r: &HistoryRecord) -> [String; 9] {
    [
        r.formatted_timestamp(),
        r.customer_name.clone(),
        r.account.clone(),
        r.kwh_used.to_string(),
        format!("{:.2}", round_money(r.total_cost)),
        r.customer_class.to_string(),
        r.discount.label().to_string(),
        format!("{:.2}", round_money(r.discount_amount)),
        r.billing_month.clone(),
    ]
}

pub fn write_csv<W: Write>(out: W, records: &[HistoryRecord]) -> Result<W, ExportError> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(CSV_HEADER)?;
    for r in records {
        writer.write_record(to_row(r))?;
    }
    writer
        .into_inner()
        .map_err(|e| ExportError::Csv(csv::Error::from(e.into_error())))
}

/// Write `records` to `path`, replacing any existing file
pub fn export_csv_file(path: &Path, records: &[HistoryRecord]) -> Result<(), ExportError> {
    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut file = write_csv(file, records)?;
    file.flush().map_err(io_err)
}

fn field<'r>(record: &'r csv::StringRecord, idx: usize, row: usize) -> Result<&'r str, ExportError> {
    record.get(idx).ok_or_else(|| ExportError::MalformedRow {
        row,
        reason: format!("missing column {:?}", CSV_HEADER[idx]),
    })
}

fn parse_field<T: FromStr>(
    record: &csv::StringRecord,
    idx: usize,
    row: usize,
) -> Result<T, ExportError>
where
    T::Err: std::fmt::Display,
{
    let raw = field(record, idx, row)?;
    raw.parse::<T>().map_err(|e| ExportError::MalformedRow {
        row,
        reason: format!("{}: {e}", CSV_HEADER[idx]),
    })
}

/// Parse an export back into records
pub fn read_csv<R: Read>(input: R) -> Result<Vec<HistoryRecord>, ExportError> {
    let mut reader = csv::Reader::from_reader(input);
    let mut records = Vec::new();

    for (i, row) in reader.records().enumerate() {
        let row = row?;
        let line = i + 1;
        let raw_ts = field(&row, 0, line)?;
        let timestamp = NaiveDateTime::parse_from_str(raw_ts, TIMESTAMP_FORMAT).map_err(|e| {
            ExportError::MalformedRow {
                row: line,
                reason: format!("Timestamp: {e}"),
            }
        })?;

        records.push(HistoryRecord {
            timestamp,
            customer_name: field(&row, 1, line)?.to_string(),
            account: field(&row, 2, line)?.to_string(),
            kwh_used: parse_field::<Decimal>(&row, 3, line)?,
            total_cost: parse_field::<Decimal>(&row, 4, line)?,
            customer_class: parse_field::<CustomerClass>(&row, 5, line)?,
            discount: parse_field::<DiscountType>(&row, 6, line)?,
            discount_amount: parse_field::<Decimal>(&row, 7, line)?,
            billing_month: field(&row, 8, line)?.to_string(),
        });
    }

    Ok(records)
}

pub fn read_csv_file(path: &Path) -> Result<Vec<HistoryRecord>, ExportError> {
    let file = File::open(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_csv(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::history::NewHistoryRecord;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn sample() -> Vec<HistoryRecord> {
        let ts = NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(8, 30, 5)
            .unwrap();
        vec![
            HistoryRecord::capture(
                NewHistoryRecord {
                    customer_name: "Santos, Maria \"Mia\"".into(),
                    account: "ACC-001".into(),
                    kwh_used: dec!(30),
                    total_cost: dec!(208.38),
                    customer_class: CustomerClass::Residential,
                    discount: DiscountType::None,
                    discount_amount: Decimal::ZERO,
                    billing_month: "October 2026".into(),
                },
                ts,
            ),
            HistoryRecord::capture(
                NewHistoryRecord {
                    customer_name: "Dela Cruz Hardware & Supply Co.".into(),
                    account: "COM-7781-22".into(),
                    kwh_used: dec!(612.5),
                    total_cost: dec!(4015.6),
                    customer_class: CustomerClass::Commercial,
                    discount: DiscountType::SeniorCitizen,
                    discount_amount: dec!(211.35),
                    billing_month: "10/19/26".into(),
                },
                ts,
            ),
        ]
    }

    fn to_string(records: &[HistoryRecord]) -> String {
        String::from_utf8(write_csv(Vec::new(), records).unwrap()).unwrap()
    }

    #[test]
    fn header_row() {
        let text = to_string(&[]);
        assert_eq!(
            text,
            "Timestamp,Customer Name,Account Number,kWh Used,Total Cost,Customer Type,Discount Type,Discount Amount,Billing Month\n"
        );
    }

    #[test]
    fn rows_keep_full_values() {
        let text = to_string(&sample());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[1],
            "2026-10-19 08:30:05,\"Santos, Maria \"\"Mia\"\"\",ACC-001,30,208.38,residential,None,0.00,October 2026"
        );
        assert_eq!(
            lines[2],
            "2026-10-19 08:30:05,Dela Cruz Hardware & Supply Co.,COM-7781-22,612.5,4015.60,commercial,Senior Citizen (5%),211.35,10/19/26"
        );
    }

    #[test]
    fn round_trip_reconstructs_records() {
        let records = sample();
        let text = to_string(&records);
        let parsed = read_csv(text.as_bytes()).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");
        export_csv_file(&path, &sample()).unwrap();
        assert_eq!(read_csv_file(&path).unwrap(), sample());
    }

    #[test]
    fn malformed_row_is_reported() {
        let text = format!("{}\n2026-10-19 08:30:05,A,B,lots,1.00,residential,None,0.00,Oct\n", CSV_HEADER.join(","));
        let err = read_csv(text.as_bytes()).unwrap_err();
        assert!(matches!(err, ExportError::MalformedRow { row: 1, .. }), "{err}");
    }
}
