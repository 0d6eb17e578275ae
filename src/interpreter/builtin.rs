/// The dispatch table.
///
/// Maps function names to their minimum argument count and implementation,
/// and routes call sites through it.
pub mod core;
/// Single-argument numeric builtins.
///
/// Absolute value, trigonometry and rounding.
pub mod math;
/// `min` and `max` function implementations.
///
/// Returns the smallest or largest of all supplied arguments.
pub mod min_max;
/// Table entries for the print and input keywords.
pub mod intrinsic;

pub use self::core::{BUILTIN_FUNCTIONS, call, is_builtin};
