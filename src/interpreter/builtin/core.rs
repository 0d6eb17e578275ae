use rust_decimal::Decimal;

use crate::{
    error::RuntimeError,
    interpreter::{
        builtin::{intrinsic, math, min_max},
        store::EvalResult,
    },
};

/// Signature shared by every builtin.
///
/// Arguments arrive evaluated, in call order, together with the call site's
/// line. Dispatch has already checked them against the entry's minimum count.
type BuiltinFn = fn(&[Decimal], usize) -> EvalResult<Decimal>;

/// Expands `"name" => { min_args, func }` entries into the static
/// `BUILTIN_TABLE` used by [`call`] and the public `BUILTIN_FUNCTIONS` list.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                min_args: $min_args:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:     &'static str,
            min_args: usize,
            func:     BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, min_args: $min_args, func: $func },
            )*
        ];
        /// Names of every builtin, in table order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "ИЗЛУЧАТЬ"      => { min_args: 1, func: intrinsic::emit },
    "ПРИЕМ_СИГНАЛА" => { min_args: 0, func: intrinsic::receive },
    "abs"           => { min_args: 1, func: math::abs },
    "min"           => { min_args: 1, func: |args, line| min_max::min_max("min", args, line) },
    "max"           => { min_args: 1, func: |args, line| min_max::min_max("max", args, line) },
    "sin"           => { min_args: 1, func: math::sin },
    "cos"           => { min_args: 1, func: math::cos },
    "tan"           => { min_args: 1, func: math::tan },
    "round"         => { min_args: 1, func: math::round },
    "ceil"          => { min_args: 1, func: math::ceil },
    "floor"         => { min_args: 1, func: math::floor },
}

/// Calls a builtin by name.
///
/// Names are matched exactly. The entry's minimum argument count is checked
/// before the implementation runs; extra arguments are passed through.
///
/// # Errors
/// - `UnknownFunction` if no builtin has this name.
/// - `ArgumentCountMismatch` if fewer arguments than required are supplied.
/// - Any error raised by the implementation.
///
/// # Example
/// ```
/// use rust_decimal::Decimal;
/// use starlight::{error::RuntimeError, interpreter::builtin::call};
///
/// let r = call("max", &[Decimal::from(3), Decimal::from(7), Decimal::from(5)], 1).unwrap();
/// assert_eq!(r, Decimal::from(7));
///
/// let err = call("sqrt", &[Decimal::from(4)], 2).unwrap_err();
/// assert!(matches!(err, RuntimeError::UnknownFunction { line: 2, .. }));
/// ```
pub fn call(name: &str, args: &[Decimal], line: usize) -> EvalResult<Decimal> {
    let builtin = BUILTIN_TABLE.iter()
                               .find(|b| b.name == name)
                               .ok_or_else(|| RuntimeError::UnknownFunction { name: name.to_string(),
                                                                              line })?;

    if args.len() < builtin.min_args {
        return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                         expected: builtin.min_args,
                                                         found: args.len(),
                                                         line });
    }

    (builtin.func)(args, line)
}

/// Returns `true` if `name` is in the builtin table.
#[must_use]
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_TABLE.iter().any(|b| b.name == name)
}
