/// The parser state and its public entry points.
///
/// Holds the token cursor, the variable store, the results buffer and the
/// optional environment, and drives whole programs and single expressions.
pub mod core;

/// Statement forms.
///
/// Declarations, print and input statements, and statements that start with
/// an identifier. Each one is recognized and executed in the same step.
pub mod statement;

/// The assignment level and the left-associative binary levels.
///
/// Logical, equality, comparison, additive and multiplicative operators, from
/// lowest to highest precedence.
pub mod binary;

/// Prefix operators, exponentiation and primary expressions.
pub mod unary;

/// Token matching helpers shared by every grammar level.
pub mod utils;

pub use self::{
    core::{ParseResult, Parser},
    utils::ValueType,
};
