//! Bill form input as collected by the interactive shell

use crate::domain::{CustomerClass, DiscountType};

/// Everything the user typed into the bill form.
///
/// `usage` stays raw text until [`crate::shared::parse_usage`] checks it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillForm {
    pub customer_name: String,
    pub account: String,
    pub address: String,
    pub customer_class: CustomerClass,
    pub discount: DiscountType,
    pub billing_month: String,
    pub usage: String,
}

impl BillForm {
    /// Reset every field to its default, keeping the billing month
    pub fn clear(&mut self) {
        let month = std::mem::take(&mut self.billing_month);
        *self = Self {
            billing_month: month,
            ..Self::default()
        };
    }
}
