//! Rate table: tiered schedules for each customer class

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::support::errors::DomainError;

/// Customer class, each bound to its own tier schedule and fixed fee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerClass {
    Residential,
    Commercial,
}

impl Default for CustomerClass {
    fn default() -> Self {
        Self::Residential
    }
}

impl CustomerClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Residential => "residential",
            Self::Commercial => "commercial",
        }
    }

    /// Title-case label used on the bill statement
    pub fn label(&self) -> &'static str {
        match self {
            Self::Residential => "Residential",
            Self::Commercial => "Commercial",
        }
    }

    pub fn schedule(&self) -> RateSchedule {
        RateSchedule::for_class(*self)
    }
}

impl std::fmt::Display for CustomerClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CustomerClass {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "residential" | "r" => Ok(Self::Residential),
            "commercial" | "c" => Ok(Self::Commercial),
            _ => Err(DomainError::UnknownCustomerClass(s.to_string())),
        }
    }
}

/// How many units a tier may consume before the next one applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierLimit {
    UpTo(Decimal),
    Unbounded,
}

impl TierLimit {
    /// Units this tier takes out of `remaining`
    pub fn consume(&self, remaining: Decimal) -> Decimal {
        match self {
            Self::UpTo(width) => remaining.min(*width),
            Self::Unbounded => remaining,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateTier {
    pub limit: TierLimit,
    /// Price per kWh
    pub rate: Decimal,
}

impl RateTier {
    pub const fn new(limit: TierLimit, rate: Decimal) -> Self {
        Self { limit, rate }
    }
}

/// Ordered tiers plus the flat service charge of a customer class.
///
/// The last tier is always [`TierLimit::Unbounded`], so any usage is covered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateSchedule {
    pub class: CustomerClass,
    pub tiers: Vec<RateTier>,
    pub fixed_fee: Decimal,
}

impl RateSchedule {
    pub fn for_class(class: CustomerClass) -> Self {
        match class {
            CustomerClass::Residential => Self {
                class,
                tiers: vec![
                    RateTier::new(TierLimit::UpTo(dec!(50)), dec!(5.0)),
                    RateTier::new(TierLimit::UpTo(dec!(50)), dec!(6.5)),
                    RateTier::new(TierLimit::UpTo(dec!(100)), dec!(8.0)),
                    RateTier::new(TierLimit::Unbounded, dec!(10.0)),
                ],
                fixed_fee: dec!(40),
            },
            CustomerClass::Commercial => Self {
                class,
                tiers: vec![
                    RateTier::new(TierLimit::UpTo(dec!(100)), dec!(3.5)),
                    RateTier::new(TierLimit::UpTo(dec!(200)), dec!(5.0)),
                    RateTier::new(TierLimit::UpTo(dec!(500)), dec!(6.5)),
                    RateTier::new(TierLimit::Unbounded, dec!(7.5)),
                ],
                fixed_fee: dec!(100),
            },
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn residential_schedule() {
        let s = RateSchedule::for_class(CustomerClass::Residential);
        let rates: Vec<Decimal> = s.tiers.iter().map(|t| t.rate).collect();
        assert_eq!(rates, vec![dec!(5.0), dec!(6.5), dec!(8.0), dec!(10.0)]);
        assert_eq!(s.fixed_fee, dec!(40));
    }

    #[test]
    fn commercial_schedule_reaches_800_before_last_tier() {
        let s = RateSchedule::for_class(CustomerClass::Commercial);
        let bounded: Decimal = s
            .tiers
            .iter()
            .filter_map(|t| match t.limit {
                TierLimit::UpTo(w) => Some(w),
                TierLimit::Unbounded => None,
            })
            .sum();
        assert_eq!(bounded, dec!(800));
        assert_eq!(s.fixed_fee, dec!(100));
    }

    #[test]
    fn last_tier_is_unbounded() {
        for class in [CustomerClass::Residential, CustomerClass::Commercial] {
            let s = class.schedule();
            assert_eq!(s.tiers.last().map(|t| t.limit), Some(TierLimit::Unbounded));
        }
    }

    #[test]
    fn tier_limit_consume() {
        assert_eq!(TierLimit::UpTo(dec!(50)).consume(dec!(30)), dec!(30));
        assert_eq!(TierLimit::UpTo(dec!(50)).consume(dec!(80)), dec!(50));
        assert_eq!(TierLimit::Unbounded.consume(dec!(1234.5)), dec!(1234.5));
    }

    #[test]
    fn customer_class_parse() {
        assert_eq!("Residential".parse::<CustomerClass>().unwrap(), CustomerClass::Residential);
        assert_eq!(" COMMERCIAL ".parse::<CustomerClass>().unwrap(), CustomerClass::Commercial);
        assert_eq!("c".parse::<CustomerClass>().unwrap(), CustomerClass::Commercial);
        assert!(matches!(
            "industrial".parse::<CustomerClass>(),
            Err(DomainError::UnknownCustomerClass(_))
        ));
    }

    #[test]
    fn customer_class_display() {
        assert_eq!(CustomerClass::Residential.to_string(), "residential");
        assert_eq!(CustomerClass::Commercial.label(), "Commercial");
    }
}
