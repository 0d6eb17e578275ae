/// Syntax errors.
///
/// Defines every error raised when the token under the cursor does not fit the
/// grammar rule being matched, including lexical anomalies that reach the
/// grammar as error tokens.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the semantic and arithmetic failures raised while statements and
/// expressions are evaluated: declaration rule violations, unknown builtins,
/// division by zero, overflow, and I/O failures of the attached environment.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug)]
/// The single terminal failure of a parse/evaluate run.
pub enum Error {
    /// The token stream did not match the grammar.
    Syntax(ParseError),
    /// A statement or expression could not be evaluated.
    Runtime(RuntimeError),
    /// The program text was empty or contained only whitespace.
    EmptySource,
}

impl Error {
    /// Returns the source line the failure was reported on, if it has one.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::Syntax(e) => Some(e.line()),
            Self::Runtime(e) => Some(e.line()),
            Self::EmptySource => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
            Self::EmptySource => write!(f, "Source code cannot be empty."),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(e) => Some(e),
            Self::Runtime(e) => Some(e),
            Self::EmptySource => None,
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Syntax(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
