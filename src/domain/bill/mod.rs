//! Bill aggregate
//!
//! Bill result types and the tiered calculation.

pub mod calculator;
pub mod model;

pub use calculator::{calculate_bill, tiered_charge};
pub use model::{round_money, BillResult, DiscountType};
