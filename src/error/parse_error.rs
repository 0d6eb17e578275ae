use crate::interpreter::token::{Token, TokenType};

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while matching tokens to the grammar.
pub enum ParseError {
    /// Found a token of a different kind than the grammar requires.
    UnexpectedToken {
        /// The token kind the grammar rule required.
        expected: TokenType,
        /// The token encountered instead.
        found:    Token,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An expression was required but the token cannot start one.
    ExpectedExpression {
        /// The token encountered.
        found: Token,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A type name was required after `:` in a declaration.
    ExpectedType {
        /// The token encountered.
        found: Token,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A statement was required but the token cannot start one.
    ExpectedStatement {
        /// The token encountered.
        found: Token,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The lexer could not classify a lexeme and the grammar reached it.
    InvalidLexeme {
        /// The raw text of the offending lexeme.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// Extra tokens remained after a complete expression.
    UnexpectedTrailingTokens {
        /// The first extra token.
        found: Token,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl ParseError {
    /// Returns the source line the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::ExpectedExpression { line, .. }
            | Self::ExpectedType { line, .. }
            | Self::ExpectedStatement { line, .. }
            | Self::InvalidLexeme { line, .. }
            | Self::UnexpectedTrailingTokens { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    line, } => write!(f,
                                                      "Error on line {line}: Unexpected lexeme {found} instead of expected {expected}."),

            Self::ExpectedExpression { found, line } => {
                write!(f, "Error on line {line}: Expected an expression, found {found}.")
            },

            Self::ExpectedType { found, line } => write!(f,
                                                         "Error on line {line}: Expected a type name (КВАЗАР, НОВА, ВАКУУМ or ГАЛАКТИКА), found {found}."),

            Self::ExpectedStatement { found, line } => {
                write!(f, "Error on line {line}: Expected a statement, found {found}.")
            },

            Self::InvalidLexeme { lexeme, line } => {
                write!(f, "Error on line {line}: Invalid lexeme '{lexeme}'.")
            },

            Self::UnexpectedTrailingTokens { found, line } => write!(f,
                                                                     "Error on line {line}: Extra tokens after expression, starting at {found}."),
        }
    }
}

impl std::error::Error for ParseError {}
