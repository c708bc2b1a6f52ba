//! On-screen bill statement

use crate::application::ports::BillDocument;
use crate::domain::DiscountType;

const BANNER_WIDTH: usize = 50;
const RULE_WIDTH: usize = 40;

/// Render the bill statement shown after a bill is generated
pub fn render_statement(doc: &BillDocument, currency: &str) -> String {
    let banner = "=".repeat(BANNER_WIDTH);
    let rule = "-".repeat(RULE_WIDTH);

    let mut lines = vec![
        banner.clone(),
        "ELECTRIC BILL STATEMENT".to_string(),
        banner.clone(),
        String::new(),
        format!("Customer Name: {}", doc.name),
        format!("Account Number: {}", doc.account),
        format!("Address: {}", doc.address),
        format!("Consumer Type: {}", doc.customer_class.as_str()),
        format!("Discount Applied: {}", doc.discount),
        format!("Billing Month: {}", doc.month),
        rule.clone(),
        format!("Total kWh Used: {} kWh", doc.kwh),
        format!("kWh Rate: {currency}{}/kWh", doc.rate),
        format!("Fixed Fee: {currency}{:.2}", doc.fixed),
        format!("Base Charge: {currency}{:.2}", doc.base),
        format!("Environmental Fee: {currency}{:.2}", doc.env),
        format!("VAT (12%): {currency}{:.2}", doc.vat),
    ];
    if doc.discount == DiscountType::SeniorCitizen.label() {
        lines.push(format!(
            "Senior Discount (5%): -{currency}{:.2}",
            doc.discount_amount
        ));
    }
    lines.push(rule);
    lines.push(format!("TOTAL AMOUNT DUE: {currency}{:.2}", doc.total));
    lines.push(banner);

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
