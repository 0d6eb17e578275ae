//! # starlight
//!
//! starlight is an interpreter for a small imperative language whose keywords
//! are written in Cyrillic. Programs declare variables and constants, read and
//! print numbers, and evaluate arithmetic, comparison and logical expressions
//! over a single base-10 decimal type.
//!
//! The interpreter evaluates while it parses: there is no syntax tree, and the
//! first error ends the run.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::{
    error::Error,
    interpreter::{environment::Environment, parser::Parser},
};

/// Errors that end a run.
///
/// Syntax errors are raised when tokens do not fit the grammar, runtime errors
/// while statements execute. Both carry the source line they were reported on
/// and render as user-facing diagnostics.
pub mod error;
/// The language runtime.
///
/// Source text flows from the scanner through the lexer into a token stream,
/// which the parser walks while evaluating. The parser owns the variable
/// store and talks to the outside world through an
/// [`Environment`](interpreter::environment::Environment).
pub mod interpreter;
/// Token counts by category.
///
/// Runs only the lexer and tallies keywords, identifiers, numeric literals,
/// operators and other lexemes.
pub mod stats;
/// Checked decimal arithmetic and conversions.
pub mod util;

/// The outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Execution {
    /// Every printed value, in order.
    pub results:   Vec<Decimal>,
    /// Every variable and its final value.
    pub variables: HashMap<String, Decimal>,
}

/// Runs one program against an environment.
///
/// Each call starts from an empty variable store. Print statements write to
/// `environment` and input statements read from it.
///
/// # Errors
/// - `EmptySource` if `source` is empty or only whitespace.
/// - The first syntax or runtime error of the run.
///
/// # Examples
/// ```
/// use rust_decimal::Decimal;
/// use starlight::{execute, interpreter::environment::FakeEnvironment};
///
/// let source = "ЗВЕЗДА
///     СВЕТ радиус : НОВА;
///     ПРИЕМ_СИГНАЛА(радиус);
///     ИЗЛУЧАТЬ(радиус * 2);
/// ЗАКРЫТАЯ_ЗВЕЗДА";
///
/// let mut env = FakeEnvironment::new([Decimal::from(5)]);
/// let run = execute(source, &mut env).unwrap();
///
/// assert_eq!(run.results, vec![Decimal::from(10)]);
/// assert_eq!(env.outputs(), &[Decimal::from(10)]);
///
/// // Using an undeclared name is an error.
/// let mut env = FakeEnvironment::default();
/// assert!(execute("ЗВЕЗДА ИЗЛУЧАТЬ(y); ЗАКРЫТАЯ_ЗВЕЗДА", &mut env).is_err());
/// ```
pub fn execute(source: &str, environment: &mut dyn Environment) -> Result<Execution, Error> {
    if source.trim().is_empty() {
        return Err(Error::EmptySource);
    }

    let mut parser = Parser::new(source).with_environment(environment);
    parser.parse_program()?;

    let results = parser.results().to_vec();
    Ok(Execution { results,
                   variables: parser.into_store().into_variables() })
}
