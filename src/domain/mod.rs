pub mod bill;
pub mod history;
pub mod tariff;

// Re-export commonly used types
pub use bill::{calculate_bill, BillResult, DiscountType};
pub use history::{HistoryRecord, HistorySummary, NewHistoryRecord};
pub use tariff::{CustomerClass, RateSchedule, RateTier, TierLimit};

// Re-export DomainError from support for convenience
pub use crate::support::errors::DomainError;
