use rust_decimal::Decimal;

use crate::{
    error::{ParseError, RuntimeError},
    interpreter::{
        builtin,
        parser::core::{ParseResult, Parser},
        token::TokenType,
    },
    util::num::{is_truthy, pow, truth},
};

impl Parser<'_> {
    /// Parses prefix operators.
    ///
    /// Prefix operators may be stacked (`!-x`). The operand is parsed at the
    /// power level, so `-x ** 2` is `-(x ** 2)`. A negative literal such as
    /// `-3` is a single token and binds to the power operator directly.
    ///
    /// Grammar: `unary := ("+" | "-" | "!") unary | power`
    pub(super) fn parse_unary(&mut self) -> ParseResult<Decimal> {
        let op = self.tokens.peek().kind;
        if !matches!(op, TokenType::Plus | TokenType::Minus | TokenType::Not) {
            return self.parse_power();
        }

        self.tokens.advance();
        let value = self.parse_unary()?;

        Ok(match op {
            TokenType::Minus => -value,
            TokenType::Not => truth(!is_truthy(value)),
            _ => value,
        })
    }

    /// Parses exponentiation.
    ///
    /// The exponent is parsed at the unary level, which makes `**`
    /// right-associative: `2 ** 3 ** 2` is `2 ** 9`.
    ///
    /// Grammar: `power := primary ("**" unary)?`
    pub(super) fn parse_power(&mut self) -> ParseResult<Decimal> {
        let base = self.parse_primary()?;

        if self.tokens.peek().kind != TokenType::Exponentiation {
            return Ok(base);
        }

        let line = self.tokens.line();
        self.tokens.advance();
        let exponent = self.parse_unary()?;
        Ok(pow(base, exponent, line)?)
    }

    /// Parses a primary expression.
    ///
    /// Grammar:
    /// ```text
    /// primary := NUMBER | TRUE | FALSE
    ///          | IDENT | IDENT args
    ///          | "(" expression ")"
    /// ```
    ///
    /// # Errors
    /// - `UndeclaredVariable` if an identifier holds no value.
    /// - `UnknownFunction` or `ArgumentCountMismatch` from a call.
    /// - `UnsupportedExpression` if a print or input keyword is used as a
    ///   value.
    /// - `ExpectedExpression` if the token cannot start an expression.
    pub(super) fn parse_primary(&mut self) -> ParseResult<Decimal> {
        let token = self.tokens.peek().clone();
        let line = self.tokens.line();

        if let Some(value) = token.number() {
            self.tokens.advance();
            return Ok(value);
        }

        match token.kind {
            TokenType::True => {
                self.tokens.advance();
                Ok(Decimal::ONE)
            },
            TokenType::False => {
                self.tokens.advance();
                Ok(Decimal::ZERO)
            },
            TokenType::Identifier => {
                let name = self.expect_identifier()?;
                if self.tokens.peek().kind == TokenType::OpenParenthesis {
                    return self.parse_function_call(&name, line);
                }
                Ok(self.store.get(&name, line)?)
            },
            TokenType::OpenParenthesis => {
                self.tokens.advance();
                let value = self.parse_expression()?;
                self.expect(TokenType::CloseParenthesis)?;
                Ok(value)
            },
            TokenType::Emit | TokenType::Receive => {
                Err(RuntimeError::UnsupportedExpression { name: token.kind.lexeme().to_string(),
                                                          line }.into())
            },
            _ => Err(self.reject(|found, line| ParseError::ExpectedExpression { found, line })),
        }
    }

    /// Evaluates the arguments of a call and dispatches it to the builtin
    /// table.
    fn parse_function_call(&mut self, name: &str, line: usize) -> ParseResult<Decimal> {
        let args = self.parse_arguments()?;
        tracing::trace!(name, args = args.len(), line, "builtin call");
        Ok(builtin::call(name, &args, line)?)
    }
}
