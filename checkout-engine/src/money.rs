//! Money calculation utilities using rust_decimal for precision
//!
//! All monetary figures are stored as `f64` in the shared types and
//! converted to `Decimal` for every calculation, then back for storage.
//! Rounding is 2 decimal places, half-up.

use rust_decimal::prelude::*;
use shared::error::ValidationError;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Maximum allowed payment or custom-share amount
const MAX_AMOUNT: f64 = 1_000_000.0;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round2(value).to_f64().unwrap_or_default()
}

/// Convert Decimal to f64 without rounding.
///
/// Used for equal-mode shares, which stay unrounded so that
/// N x share reconstructs the exact total; display layers round at
/// presentation time.
#[inline]
pub fn to_f64_raw(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

/// Round to 2 decimal places, half-up
#[inline]
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Compare two monetary values for equality (within 0.01 tolerance)
pub fn money_eq(a: f64, b: f64) -> bool {
    (to_decimal(a) - to_decimal(b)).abs() < MONEY_TOLERANCE
}

/// Validate that a f64 value is finite (not NaN, not Infinity)
#[inline]
fn require_finite(value: f64, field_name: &str) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteAmount(field_name.to_string()));
    }
    Ok(())
}

/// Validate a partial-payment amount: finite, strictly positive, bounded.
///
/// Non-positive amounts are rejected, never clamped.
pub fn validate_payment_amount(amount: f64) -> Result<(), ValidationError> {
    require_finite(amount, "payment amount")?;
    if amount <= 0.0 {
        return Err(ValidationError::InvalidAmount(amount));
    }
    if amount > MAX_AMOUNT {
        return Err(ValidationError::AmountTooLarge(amount));
    }
    Ok(())
}

/// Validate an operator-typed custom share: finite, non-negative, bounded
pub fn validate_custom_amount(amount: f64) -> Result<(), ValidationError> {
    require_finite(amount, "custom amount")?;
    if amount < 0.0 {
        return Err(ValidationError::InvalidAmount(amount));
    }
    if amount > MAX_AMOUNT {
        return Err(ValidationError::AmountTooLarge(amount));
    }
    Ok(())
}
