//! History aggregate

pub mod model;

pub use model::{HistoryRecord, HistorySummary, NewHistoryRecord, TIMESTAMP_FORMAT};
