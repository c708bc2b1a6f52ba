//! Bill domain types

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::support::errors::DomainError;

/// Discount selection on the bill form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiscountType {
    None,
    SeniorCitizen,
}

impl Default for DiscountType {
    fn default() -> Self {
        Self::None
    }
}

impl DiscountType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::SeniorCitizen => "Senior Citizen (5%)",
        }
    }

    pub fn is_senior(&self) -> bool {
        matches!(self, Self::SeniorCitizen)
    }
}

impl std::fmt::Display for DiscountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DiscountType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "none" => Ok(Self::None),
            "senior" | "senior citizen" | "senior citizen (5%)" => Ok(Self::SeniorCitizen),
            _ => Err(DomainError::UnknownDiscount(s.to_string())),
        }
    }
}

/// Itemized charges of one bill. Money fields are rounded to 2 decimal
/// places; the applied rate is the tier rate as listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillResult {
    /// Sum of the tiered charges
    pub energy_charge: Decimal,
    pub fixed_fee: Decimal,
    /// 12% of the energy charge
    pub vat: Decimal,
    /// 0.25% of the energy charge
    pub environmental_fee: Decimal,
    /// Rate of the last tier that consumed a non-zero amount
    pub applied_rate: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
}

impl BillResult {
    /// Total before the discount was taken off
    pub fn pre_discount_total(&self) -> Decimal {
        self.total + self.discount
    }
}

/// Round a monetary amount to cents, always carrying two decimal places
pub fn round_money(value: Decimal) -> Decimal {
    let mut cents = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    cents.rescale(2);
    cents
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn discount_labels() {
        assert_eq!(DiscountType::None.to_string(), "None");
        assert_eq!(DiscountType::SeniorCitizen.to_string(), "Senior Citizen (5%)");
    }

    #[test]
    fn discount_parse_accepts_labels_and_short_forms() {
        assert_eq!("Senior Citizen (5%)".parse::<DiscountType>().unwrap(), DiscountType::SeniorCitizen);
        assert_eq!("senior".parse::<DiscountType>().unwrap(), DiscountType::SeniorCitizen);
        assert_eq!("None".parse::<DiscountType>().unwrap(), DiscountType::None);
        assert!("student".parse::<DiscountType>().is_err());
    }

    #[test]
    fn round_money_half_away_from_zero() {
        assert_eq!(round_money(dec!(0.375)), dec!(0.38));
        assert_eq!(round_money(dec!(1.8375)), dec!(1.84));
        assert_eq!(round_money(dec!(43.251875)), dec!(43.25));
        assert_eq!(round_money(dec!(2.005)), dec!(2.01));
    }

    #[test]
    fn round_money_keeps_two_places() {
        assert_eq!(round_money(dec!(735.0)).to_string(), "735.00");
        assert_eq!(round_money(dec!(40)).to_string(), "40.00");
        assert_eq!(round_money(Decimal::ZERO).to_string(), "0.00");
        assert_eq!(round_money(dec!(0.375)).to_string(), "0.38");
    }

    #[test]
    fn pre_discount_total_adds_discount_back() {
        let bill = BillResult {
            energy_charge: dec!(735.00),
            fixed_fee: dec!(40.00),
            vat: dec!(88.20),
            environmental_fee: dec!(1.84),
            applied_rate: dec!(8.0),
            discount: dec!(43.25),
            total: dec!(821.79),
        };
        assert_eq!(bill.pre_discount_total(), dec!(865.04));
    }
}
