//! Fixed-point money amounts: at most 8 digits, 2 of them after the point.

use rust_decimal::Decimal;

use crate::validation::ValidationError;

pub const MAX_DIGITS: u32 = 8;
pub const DECIMAL_PLACES: u32 = 2;

/// Check digit limits and return the amount rescaled to two decimal places.
///
/// Trailing zeros do not count against the fractional limit (`10.000` is
/// accepted as `10.00`).
pub fn amount(field: &'static str, value: Decimal) -> Result<Decimal, ValidationError> {
    let normalized = value.normalize();
    let integer_limit = Decimal::from(10_i64.pow(MAX_DIGITS - DECIMAL_PLACES));
    if normalized.scale() > DECIMAL_PLACES || normalized.abs().trunc() >= integer_limit {
        return Err(ValidationError::DecimalDigits {
            field,
            max_digits: MAX_DIGITS,
            decimal_places: DECIMAL_PLACES,
        });
    }
    let mut scaled = normalized;
    scaled.rescale(DECIMAL_PLACES);
    Ok(scaled)
}

/// Like [`amount`], and additionally rejects values below zero.
pub fn non_negative_amount(
    field: &'static str,
    value: Decimal,
) -> Result<Decimal, ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::Negative { field });
    }
    amount(field, value)
}
