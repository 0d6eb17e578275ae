use rust_decimal::Decimal;

use crate::{
    error::{Error, ParseError},
    interpreter::{
        parser::core::{ParseResult, Parser},
        token::{Token, TokenType},
    },
};

/// The type names a declaration may carry.
///
/// The annotation is checked by the grammar but has no effect on the stored
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    /// `КВАЗАР`
    Integer,
    /// `НОВА`
    Float,
    /// `ВАКУУМ`
    Bool,
    /// `ГАЛАКТИКА`
    Generic,
}

impl ValueType {
    /// Maps a type keyword to its value type.
    #[must_use]
    pub const fn from_token(kind: TokenType) -> Option<Self> {
        match kind {
            TokenType::IntegerType => Some(Self::Integer),
            TokenType::FloatType => Some(Self::Float),
            TokenType::BoolType => Some(Self::Bool),
            TokenType::GenericType => Some(Self::Generic),
            _ => None,
        }
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::Integer => TokenType::IntegerType,
            Self::Float => TokenType::FloatType,
            Self::Bool => TokenType::BoolType,
            Self::Generic => TokenType::GenericType,
        };
        write!(f, "{}", kind.lexeme())
    }
}

impl Parser<'_> {
    /// Builds the error for the token under the cursor.
    ///
    /// An error token is always reported as `InvalidLexeme`, whatever the
    /// grammar expected at this position. Any other token is passed to
    /// `make` together with its line.
    pub(super) fn reject(&self, make: impl FnOnce(Token, usize) -> ParseError) -> Error {
        let found = self.tokens.peek().clone();
        let line = self.tokens.line();

        if found.kind == TokenType::Error {
            return ParseError::InvalidLexeme { lexeme: found.text().unwrap_or_default().to_string(),
                                               line }.into();
        }

        make(found, line).into()
    }

    /// Consumes the token under the cursor if it is of kind `expected`.
    ///
    /// # Returns
    /// The consumed token.
    ///
    /// # Errors
    /// - `InvalidLexeme` if the cursor is on an error token.
    /// - `UnexpectedToken` for any other mismatch.
    pub(super) fn expect(&mut self, expected: TokenType) -> ParseResult<Token> {
        if self.tokens.peek().kind != expected {
            return Err(self.reject(|found, line| ParseError::UnexpectedToken { expected,
                                                                                found,
                                                                                line }));
        }

        let token = self.tokens.peek().clone();
        self.tokens.advance();
        Ok(token)
    }

    /// Consumes an identifier and returns its name.
    pub(super) fn expect_identifier(&mut self) -> ParseResult<String> {
        let token = self.expect(TokenType::Identifier)?;
        Ok(token.text().unwrap_or_default().to_string())
    }

    /// Parses a type name after the `:` of a declaration.
    ///
    /// # Errors
    /// `ExpectedType` if the token is not one of the four type keywords.
    pub(super) fn parse_type(&mut self) -> ParseResult<ValueType> {
        let Some(value_type) = ValueType::from_token(self.tokens.peek().kind) else {
            return Err(self.reject(|found, line| ParseError::ExpectedType { found, line }));
        };
        self.tokens.advance();
        Ok(value_type)
    }

    /// Parses a parenthesized, comma-separated argument list.
    ///
    /// Each argument is evaluated in source order and handed to `each` before
    /// the next one is parsed, so side effects interleave with the
    /// arguments. `()` produces no arguments.
    ///
    /// Grammar: `args := "(" (expression ("," expression)*)? ")"`
    ///
    /// # Errors
    /// - `UnexpectedToken` if a parenthesis or comma is missing.
    /// - Any error raised by an argument or by `each`.
    pub(super) fn parse_argument_list(&mut self,
                                      mut each: impl FnMut(&mut Self, Decimal) -> ParseResult<()>)
                                      -> ParseResult<()> {
        self.expect(TokenType::OpenParenthesis)?;

        if self.tokens.peek().kind == TokenType::CloseParenthesis {
            self.tokens.advance();
            return Ok(());
        }

        loop {
            let value = self.parse_expression()?;
            each(self, value)?;

            if self.tokens.peek().kind == TokenType::Comma {
                self.tokens.advance();
                continue;
            }
            self.expect(TokenType::CloseParenthesis)?;
            return Ok(());
        }
    }

    /// Parses an argument list and collects the values.
    pub(super) fn parse_arguments(&mut self) -> ParseResult<Vec<Decimal>> {
        let mut args = Vec::new();
        self.parse_argument_list(|_, value| {
                args.push(value);
                Ok(())
            })?;
        Ok(args)
    }
}
