//! Tariff aggregate
//!
//! Contains the customer classes and their tiered rate schedules.

pub mod model;

pub use model::{CustomerClass, RateSchedule, RateTier, TierLimit};
