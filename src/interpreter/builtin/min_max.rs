use rust_decimal::Decimal;

use crate::interpreter::store::EvalResult;

/// Computes the minimum or maximum over all arguments.
///
/// The operation is selected by the `name` parameter, which must be `"min"` or
/// `"max"`.
///
/// # Panics
/// If `args` is empty. The builtin table guarantees at least one argument.
///
/// # Example
/// ```
/// use rust_decimal::Decimal;
/// use starlight::interpreter::builtin::min_max::min_max;
///
/// let args = [Decimal::from(3), Decimal::from(-7), Decimal::new(25, 1)];
/// assert_eq!(min_max("min", &args, 1).unwrap(), Decimal::from(-7));
/// assert_eq!(min_max("max", &args, 1).unwrap(), Decimal::from(3));
/// ```
pub fn min_max(name: &str, args: &[Decimal], _line: usize) -> EvalResult<Decimal> {
    let first = args[0];
    let rest = args[1..].iter().copied();

    let value = if name == "min" {
        rest.fold(first, Decimal::min)
    } else {
        rest.fold(first, Decimal::max)
    };

    Ok(value)
}
