//! Input checks applied at the form boundary, before anything is calculated

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::support::errors::DomainError;

/// Parse the kWh field of the bill form.
///
/// Accepts plain decimals (`"120"`, `" 10.5 "`) and scientific notation
/// (`"1.2e2"`). Empty, non-numeric, non-finite and negative input is
/// rejected.
pub fn parse_usage(input: &str) -> Result<Decimal, DomainError> {
    let trimmed = input.trim();
    let value = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| DomainError::InvalidUsage(input.to_string()))?;

    if value.is_sign_negative() && !value.is_zero() {
        return Err(DomainError::NegativeUsage(trimmed.to_string()));
    }

    Ok(value.normalize())
}
