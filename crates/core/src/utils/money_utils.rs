use rust_decimal::Decimal;

use crate::constants::{MAX_MONEY_AMOUNT, MAX_MONEY_SCALE};
use crate::errors::{Error, Result, ValidationError};

/// Rejects amounts that are too large or too precise to be summed safely.
///
/// Trailing zeros do not count towards the scale, so `"12.500000"` passes.
pub fn check_money_bounds(value: Decimal) -> Result<()> {
    let max = Decimal::from(MAX_MONEY_AMOUNT);
    if value.abs() > max {
        return Err(ValidationError::AmountTooLarge { value, max }.into());
    }
    if value.normalize().scale() > MAX_MONEY_SCALE {
        return Err(ValidationError::TooManyDecimalPlaces {
            value,
            max_places: MAX_MONEY_SCALE,
        }
        .into());
    }
    Ok(())
}

pub fn add(lhs: Decimal, rhs: Decimal, what: &str) -> Result<Decimal> {
    lhs.checked_add(rhs)
        .ok_or_else(|| Error::Arithmetic(what.to_string()))
}

pub fn sub(lhs: Decimal, rhs: Decimal, what: &str) -> Result<Decimal> {
    lhs.checked_sub(rhs)
        .ok_or_else(|| Error::Arithmetic(what.to_string()))
}

/// `part / whole * 100`. `whole` must be non-zero.
pub fn percent_of(part: Decimal, whole: Decimal, what: &str) -> Result<Decimal> {
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or_else(|| Error::Arithmetic(what.to_string()))
}
