//! History record entity

use chrono::{Local, NaiveDateTime, Timelike};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::bill::{round_money, BillResult, DiscountType};
use crate::domain::tariff::CustomerClass;

/// Timestamp layout used in the history view and both export formats
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One successful bill calculation captured during the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Capture time, second precision
    pub timestamp: NaiveDateTime,
    pub customer_name: String,
    pub account: String,
    pub kwh_used: Decimal,
    pub total_cost: Decimal,
    pub customer_class: CustomerClass,
    pub discount: DiscountType,
    pub discount_amount: Decimal,
    pub billing_month: String,
}

/// Caller-supplied fields of a record; the ledger stamps the time
#[derive(Debug, Clone)]
pub struct NewHistoryRecord {
    pub customer_name: String,
    pub account: String,
    pub kwh_used: Decimal,
    pub total_cost: Decimal,
    pub customer_class: CustomerClass,
    pub discount: DiscountType,
    pub discount_amount: Decimal,
    pub billing_month: String,
}

impl NewHistoryRecord {
    /// Record fields for a calculated bill
    pub fn from_bill(
        customer_name: impl Into<String>,
        account: impl Into<String>,
        kwh_used: Decimal,
        customer_class: CustomerClass,
        discount: DiscountType,
        billing_month: impl Into<String>,
        bill: &BillResult,
    ) -> Self {
        Self {
            customer_name: customer_name.into(),
            account: account.into(),
            kwh_used,
            total_cost: bill.total,
            customer_class,
            discount,
            discount_amount: bill.discount,
            billing_month: billing_month.into(),
        }
    }
}

impl HistoryRecord {
    pub fn capture(fields: NewHistoryRecord, timestamp: NaiveDateTime) -> Self {
        Self {
            timestamp: timestamp.with_nanosecond(0).unwrap_or(timestamp),
            customer_name: fields.customer_name,
            account: fields.account,
            kwh_used: fields.kwh_used,
            total_cost: fields.total_cost,
            customer_class: fields.customer_class,
            discount: fields.discount,
            discount_amount: fields.discount_amount,
            billing_month: fields.billing_month,
        }
    }

    pub fn capture_now(fields: NewHistoryRecord) -> Self {
        Self::capture(fields, Local::now().naive_local())
    }

    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Aggregate over every record in the ledger
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HistorySummary {
    pub count: usize,
    pub total_usage: Decimal,
    pub total_cost: Decimal,
}

impl HistorySummary {
    pub fn fold<'a>(records: impl IntoIterator<Item = &'a HistoryRecord>) -> Self {
        records.into_iter().fold(Self::default(), |acc, r| Self {
            count: acc.count + 1,
            total_usage: acc.total_usage + r.kwh_used,
            total_cost: acc.total_cost + r.total_cost,
        })
    }

    pub fn line(&self, currency: &str) -> String {
        format!(
            "Total Calculations: {} | Total kWh: {:.2} | Total Cost: {}{:.2}",
            self.count,
            round_money(self.total_usage),
            currency,
            round_money(self.total_cost)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn fields(kwh: Decimal, total: Decimal) -> NewHistoryRecord {
        NewHistoryRecord {
            customer_name: "Maria Santos".into(),
            account: "ACC-001".into(),
            kwh_used: kwh,
            total_cost: total,
            customer_class: CustomerClass::Residential,
            discount: DiscountType::None,
            discount_amount: Decimal::ZERO,
            billing_month: "October 2026".into(),
        }
    }

    #[test]
    fn capture_truncates_to_seconds() {
        let ts = NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_milli_opt(14, 3, 9, 750)
            .unwrap();
        let r = HistoryRecord::capture(fields(dec!(30), dec!(208.38)), ts);
        assert_eq!(r.formatted_timestamp(), "2026-10-19 14:03:09");
        assert_eq!(r.timestamp.nanosecond(), 0);
    }

    #[test]
    fn from_bill_copies_total_and_discount() {
        let bill = crate::domain::bill::calculate_bill(dec!(120), CustomerClass::Residential, true);
        let f = NewHistoryRecord::from_bill(
            "Juan",
            "A-1",
            dec!(120),
            CustomerClass::Residential,
            DiscountType::SeniorCitizen,
            "October 2026",
            &bill,
        );
        assert_eq!(f.total_cost, dec!(821.79));
        assert_eq!(f.discount_amount, dec!(43.25));
    }

    #[test]
    fn summary_of_nothing_is_zero() {
        let s = HistorySummary::fold(std::iter::empty());
        assert_eq!(s, HistorySummary::default());
        assert_eq!(s.line("₱"), "Total Calculations: 0 | Total kWh: 0.00 | Total Cost: ₱0.00");
    }

    #[test]
    fn summary_line_formats_two_decimals() {
        let now = Local::now().naive_local();
        let records = vec![
            HistoryRecord::capture(fields(dec!(30), dec!(208.38)), now),
            HistoryRecord::capture(fields(dec!(120.5), dec!(821.79)), now),
        ];
        let s = HistorySummary::fold(&records);
        assert_eq!(s.count, 2);
        assert_eq!(s.line("₱"), "Total Calculations: 2 | Total kWh: 150.50 | Total Cost: ₱1030.17");
    }
}
