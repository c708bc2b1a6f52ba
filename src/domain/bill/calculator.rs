//! Tiered bill calculation

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::model::{round_money, BillResult};
use crate::domain::tariff::{CustomerClass, RateSchedule};

pub const VAT_RATE: Decimal = dec!(0.12);
pub const ENVIRONMENTAL_FEE_RATE: Decimal = dec!(0.0025);
pub const SENIOR_DISCOUNT_RATE: Decimal = dec!(0.05);

/// Walk the tiers in order and return the energy charge together with the
/// rate of the last tier that consumed anything.
///
/// Stops as soon as nothing remains, so trailing tiers never touch the
/// applied rate. Non-positive usage yields `(0, 0)`.
pub fn tiered_charge(units: Decimal, schedule: &RateSchedule) -> (Decimal, Decimal) {
    let mut remaining = units;
    let mut charge = Decimal::ZERO;
    let mut applied_rate = Decimal::ZERO;

    for tier in &schedule.tiers {
        if remaining <= Decimal::ZERO {
            break;
        }
        let used = tier.limit.consume(remaining);
        charge += used * tier.rate;
        applied_rate = tier.rate;
        remaining -= used;
    }

    (charge, applied_rate)
}

/// Compute the itemized bill for `units` kWh.
///
/// Pure and total: callers validate the usage before getting here.
pub fn calculate_bill(
    units: Decimal,
    customer_class: CustomerClass,
    apply_senior_discount: bool,
) -> BillResult {
    let schedule = RateSchedule::for_class(customer_class);
    let (energy, applied_rate) = tiered_charge(units, &schedule);

    let vat = energy * VAT_RATE;
    let environmental_fee = energy * ENVIRONMENTAL_FEE_RATE;
    let mut total = energy + schedule.fixed_fee + vat + environmental_fee;

    let mut discount = Decimal::ZERO;
    if apply_senior_discount {
        discount = total * SENIOR_DISCOUNT_RATE;
        total -= discount;
    }

    BillResult {
        energy_charge: round_money(energy),
        fixed_fee: round_money(schedule.fixed_fee),
        vat: round_money(vat),
        environmental_fee: round_money(environmental_fee),
        applied_rate,
        discount: round_money(discount),
        total: round_money(total),
    }
}

// ── Tests ──────────────────────────────────────────────────────
