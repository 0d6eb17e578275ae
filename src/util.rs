/// Checked decimal arithmetic and float conversion helpers.
///
/// This module provides the arithmetic behind every operator of the language
/// and the bridge to `f64` used by exponentiation and the trigonometric
/// builtins. Every function reports overflow and division by zero as a
/// `RuntimeError` instead of panicking.
pub mod num;
