use rust_decimal::Decimal;

use crate::{interpreter::store::EvalResult, util::num::via_f64};

/// Generates a builtin that applies an `f64` function to the first argument.
///
/// The argument is converted to `f64`, the host math function runs, and the
/// result is converted back to a decimal.
macro_rules! float_builtin {
    ($(#[$meta:meta])* $fname:ident, $float_fn:ident) => {
        $(#[$meta])*
        pub fn $fname(args: &[Decimal], line: usize) -> EvalResult<Decimal> {
            via_f64(args[0], line, f64::$float_fn)
        }
    };
}

float_builtin!(
    /// Sine of the first argument, in radians.
    ///
    /// # Panics
    /// If `args` is empty. The builtin table guarantees at least one argument.
    ///
    /// # Example
    /// ```
    /// use rust_decimal::Decimal;
    /// use starlight::interpreter::builtin::math::{cos, sin};
    ///
    /// assert_eq!(sin(&[Decimal::ZERO], 1).unwrap(), Decimal::ZERO);
    /// assert_eq!(cos(&[Decimal::ZERO], 1).unwrap(), Decimal::ONE);
    /// ```
    sin, sin
);
float_builtin!(
    /// Cosine of the first argument, in radians.
    ///
    /// # Panics
    /// If `args` is empty. The builtin table guarantees at least one argument.
    cos, cos
);
float_builtin!(
    /// Tangent of the first argument, in radians.
    ///
    /// # Panics
    /// If `args` is empty. The builtin table guarantees at least one argument.
    tan, tan
);

/// Returns the absolute value of the first argument.
///
/// # Panics
/// If `args` is empty. The builtin table guarantees at least one argument.
pub fn abs(args: &[Decimal], _line: usize) -> EvalResult<Decimal> {
    Ok(args[0].abs())
}

/// Rounds the first argument to an integer, halves going to the even
/// neighbour.
///
/// # Panics
/// If `args` is empty. The builtin table guarantees at least one argument.
///
/// # Example
/// ```
/// use rust_decimal::Decimal;
/// use starlight::interpreter::builtin::math::round;
///
/// assert_eq!(round(&[Decimal::new(25, 1)], 1).unwrap(), Decimal::from(2));
/// assert_eq!(round(&[Decimal::new(37, 1)], 1).unwrap(), Decimal::from(4));
/// ```
pub fn round(args: &[Decimal], _line: usize) -> EvalResult<Decimal> {
    Ok(args[0].round())
}

/// Returns the smallest integer not less than the first argument.
///
/// # Panics
/// If `args` is empty. The builtin table guarantees at least one argument.
pub fn ceil(args: &[Decimal], _line: usize) -> EvalResult<Decimal> {
    Ok(args[0].ceil())
}

/// Returns the largest integer not greater than the first argument.
///
/// # Panics
/// If `args` is empty. The builtin table guarantees at least one argument.
pub fn floor(args: &[Decimal], _line: usize) -> EvalResult<Decimal> {
    Ok(args[0].floor())
}
