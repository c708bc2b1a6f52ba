//! Application services

mod billing;
pub mod statement;

pub use billing::{ActionOutcome, BillingSession, GeneratedBill, NO_HISTORY_NOTICE};
pub use statement::render_statement;
