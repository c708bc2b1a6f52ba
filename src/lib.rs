//! # Electric Bill
//!
//! Tiered electricity bill calculator with an in-session history ledger.
//!
//! ## Architecture
//!
//! - **domain**: rate table, tiered bill calculation, history records
//! - **application**: history ledger, billing session, outbound ports
//! - **infrastructure**: text/CSV export writers, statement renderers
//! - **shared**: input validation at the form boundary
//! - **support**: error types

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;
pub mod shared;
pub mod support;

pub use config::{default_config_path, AppConfig};
pub use logging::init_tracing;

pub use application::{BillForm, BillingSession, HistoryLedger};
pub use domain::{calculate_bill, BillResult, CustomerClass, DiscountType};
pub use support::errors::AppError;
