use rust_decimal::{
    Decimal,
    prelude::{FromPrimitive, ToPrimitive},
};

use crate::{error::RuntimeError, interpreter::store::EvalResult};

/// Converts a decimal to the nearest `f64`.
///
/// ## Errors
/// Returns `Overflow` if the value has no `f64` counterpart.
///
/// ## Example
/// ```
/// use rust_decimal::Decimal;
/// use starlight::util::num::decimal_to_f64;
///
/// assert_eq!(decimal_to_f64(Decimal::new(25, 1), 1).unwrap(), 2.5);
/// ```
pub fn decimal_to_f64(value: Decimal, line: usize) -> EvalResult<f64> {
    value.to_f64().ok_or(RuntimeError::Overflow { line })
}

/// Converts an `f64` back to a decimal.
///
/// ## Errors
/// Returns `Overflow` for NaN, infinities, and magnitudes outside the decimal
/// range.
///
/// ## Example
/// ```
/// use rust_decimal::Decimal;
/// use starlight::{error::RuntimeError, util::num::f64_to_decimal};
///
/// assert_eq!(f64_to_decimal(8.0, 1).unwrap(), Decimal::from(8));
///
/// let err = f64_to_decimal(f64::NAN, 4).unwrap_err();
/// assert!(matches!(err, RuntimeError::Overflow { line: 4 }));
/// ```
pub fn f64_to_decimal(value: f64, line: usize) -> EvalResult<Decimal> {
    if !value.is_finite() {
        return Err(RuntimeError::Overflow { line });
    }
    Decimal::from_f64(value).ok_or(RuntimeError::Overflow { line })
}

/// Applies an `f64` function to a decimal and converts the result back.
///
/// ## Errors
/// Returns `Overflow` if either conversion fails.
pub fn via_f64(value: Decimal, line: usize, f: impl FnOnce(f64) -> f64) -> EvalResult<Decimal> {
    f64_to_decimal(f(decimal_to_f64(value, line)?), line)
}

/// Adds two decimals.
///
/// ## Errors
/// Returns `Overflow` if the sum is out of range.
pub fn add(left: Decimal, right: Decimal, line: usize) -> EvalResult<Decimal> {
    left.checked_add(right).ok_or(RuntimeError::Overflow { line })
}

/// Subtracts `right` from `left`.
///
/// ## Errors
/// Returns `Overflow` if the difference is out of range.
pub fn sub(left: Decimal, right: Decimal, line: usize) -> EvalResult<Decimal> {
    left.checked_sub(right).ok_or(RuntimeError::Overflow { line })
}

/// Multiplies two decimals.
///
/// ## Errors
/// Returns `Overflow` if the product is out of range.
pub fn mul(left: Decimal, right: Decimal, line: usize) -> EvalResult<Decimal> {
    left.checked_mul(right).ok_or(RuntimeError::Overflow { line })
}

/// Divides `left` by `right`.
///
/// ## Errors
/// - `DivisionByZero` if `right` is zero.
/// - `Overflow` if the quotient is out of range.
///
/// ## Example
/// ```
/// use rust_decimal::Decimal;
/// use starlight::{error::RuntimeError, util::num::div};
///
/// assert_eq!(div(Decimal::from(4), Decimal::from(5), 1).unwrap(), Decimal::new(8, 1));
///
/// let err = div(Decimal::ONE, Decimal::ZERO, 2).unwrap_err();
/// assert!(matches!(err, RuntimeError::DivisionByZero { line: 2 }));
/// ```
pub fn div(left: Decimal, right: Decimal, line: usize) -> EvalResult<Decimal> {
    if right.is_zero() {
        return Err(RuntimeError::DivisionByZero { line });
    }
    left.checked_div(right).ok_or(RuntimeError::Overflow { line })
}

/// Returns the remainder of `left / right`, with the sign of `left`.
///
/// ## Errors
/// Returns `DivisionByZero` if `right` is zero.
pub fn rem(left: Decimal, right: Decimal, line: usize) -> EvalResult<Decimal> {
    if right.is_zero() {
        return Err(RuntimeError::DivisionByZero { line });
    }
    left.checked_rem(right).ok_or(RuntimeError::Overflow { line })
}

/// Raises `base` to `exponent`.
///
/// Both operands go through `f64` and the result is converted back, so very
/// large or very precise results carry the rounding of binary floating point.
///
/// ## Errors
/// Returns `Overflow` if the result is NaN, infinite or out of range.
///
/// ## Example
/// ```
/// use rust_decimal::Decimal;
/// use starlight::util::num::pow;
///
/// assert_eq!(pow(Decimal::from(2), Decimal::from(9), 1).unwrap(), Decimal::from(512));
/// assert_eq!(pow(Decimal::from(-3), Decimal::from(2), 1).unwrap(), Decimal::from(9));
/// ```
pub fn pow(base: Decimal, exponent: Decimal, line: usize) -> EvalResult<Decimal> {
    let exponent = decimal_to_f64(exponent, line)?;
    via_f64(base, line, |b| b.powf(exponent))
}

/// Maps a truth value to `1` or `0`.
#[must_use]
pub const fn truth(value: bool) -> Decimal {
    if value { Decimal::ONE } else { Decimal::ZERO }
}

/// Returns `true` for any non-zero value.
#[must_use]
pub fn is_truthy(value: Decimal) -> bool {
    !value.is_zero()
}
