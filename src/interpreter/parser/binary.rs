use rust_decimal::Decimal;

use crate::{
    interpreter::{
        parser::core::{ParseResult, Parser},
        store::EvalResult,
        token::TokenType,
    },
    util::num::{add, div, is_truthy, mul, pow, rem, sub, truth},
};

impl Parser<'_> {
    /// Parses the assignment level.
    ///
    /// An identifier followed by an assignment operator is an assignment; the
    /// check looks one token past the identifier on a forked cursor, so
    /// nothing is consumed unless the assignment is taken. Any other input
    /// falls through to the logical OR level unchanged.
    ///
    /// The right-hand side is parsed at this level, making assignment
    /// right-associative. Compound operators read the current value, or zero
    /// if the name holds none. The name does not have to be declared here,
    /// but a constant is never written.
    ///
    /// Grammar: `assignment := IDENT assign_op assignment | logical_or`
    ///
    /// # Errors
    /// - `AssignmentToConstant` if the target is a constant.
    /// - Any error from the right-hand side or the arithmetic.
    pub(super) fn parse_assignment(&mut self) -> ParseResult<Decimal> {
        if self.tokens.peek().kind == TokenType::Identifier {
            let mut lookahead = self.tokens.fork();
            lookahead.advance();
            let op = lookahead.peek().kind;

            if is_assignment_operator(op) {
                let line = self.tokens.line();
                let name = self.expect_identifier()?;
                tracing::trace!(name = %name, operator = %op, line, "assignment expression");
                self.tokens.advance();

                let rhs = self.parse_assignment()?;
                let value = compound(op, self.store.value_or_zero(&name), rhs, line)?;
                self.store.write(&name, value, line)?;
                return Ok(value);
            }
        }

        self.parse_logical_or()
    }

    /// Parses `||` chains.
    ///
    /// Grammar: `logical_or := logical_and ("||" logical_and)*`
    pub(super) fn parse_logical_or(&mut self) -> ParseResult<Decimal> {
        let mut left = self.parse_logical_and()?;
        while self.tokens.peek().kind == TokenType::Or {
            let line = self.tokens.line();
            self.tokens.advance();
            let right = self.parse_logical_and()?;
            left = apply_binary(TokenType::Or, left, right, line)?;
        }
        Ok(left)
    }

    /// Parses `&&` chains.
    ///
    /// Grammar: `logical_and := equality ("&&" equality)*`
    pub(super) fn parse_logical_and(&mut self) -> ParseResult<Decimal> {
        let mut left = self.parse_equality()?;
        while self.tokens.peek().kind == TokenType::And {
            let line = self.tokens.line();
            self.tokens.advance();
            let right = self.parse_equality()?;
            left = apply_binary(TokenType::And, left, right, line)?;
        }
        Ok(left)
    }

    /// Parses `==` and `!=`.
    ///
    /// Grammar: `equality := comparison (("==" | "!=") comparison)*`
    pub(super) fn parse_equality(&mut self) -> ParseResult<Decimal> {
        let mut left = self.parse_comparison()?;
        loop {
            let op = self.tokens.peek().kind;
            if !matches!(op, TokenType::Equals | TokenType::NotEquals) {
                break;
            }
            let line = self.tokens.line();
            self.tokens.advance();
            let right = self.parse_comparison()?;
            left = apply_binary(op, left, right, line)?;
        }
        Ok(left)
    }

    /// Parses ordering comparisons.
    ///
    /// Grammar: `comparison := additive ((">" | ">=" | "<" | "<=") additive)*`
    pub(super) fn parse_comparison(&mut self) -> ParseResult<Decimal> {
        let mut left = self.parse_additive()?;
        loop {
            let op = self.tokens.peek().kind;
            if !matches!(op,
                         TokenType::GreaterThan
                         | TokenType::GreaterOrEqual
                         | TokenType::LessThan
                         | TokenType::LessOrEqual)
            {
                break;
            }
            let line = self.tokens.line();
            self.tokens.advance();
            let right = self.parse_additive()?;
            left = apply_binary(op, left, right, line)?;
        }
        Ok(left)
    }

    /// Parses addition and subtraction.
    ///
    /// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
    ///
    /// A `-` written directly before a digit is lexed as part of a negative
    /// literal, so `5 -3` is two numbers rather than a subtraction.
    pub(super) fn parse_additive(&mut self) -> ParseResult<Decimal> {
        let mut left = self.parse_multiplicative()?;
        loop {
            let op = self.tokens.peek().kind;
            if !matches!(op, TokenType::Plus | TokenType::Minus) {
                break;
            }
            let line = self.tokens.line();
            self.tokens.advance();
            let right = self.parse_multiplicative()?;
            left = apply_binary(op, left, right, line)?;
        }
        Ok(left)
    }

    /// Parses multiplication, division and remainder.
    ///
    /// Grammar: `multiplicative := unary (("*" | "/" | "%") unary)*`
    pub(super) fn parse_multiplicative(&mut self) -> ParseResult<Decimal> {
        let mut left = self.parse_unary()?;
        loop {
            let op = self.tokens.peek().kind;
            if !matches!(op, TokenType::Multiply | TokenType::Divide | TokenType::Modulo) {
                break;
            }
            let line = self.tokens.line();
            self.tokens.advance();
            let right = self.parse_unary()?;
            left = apply_binary(op, left, right, line)?;
        }
        Ok(left)
    }
}

/// Returns `true` for `=` and the five compound assignment operators.
#[must_use]
pub const fn is_assignment_operator(kind: TokenType) -> bool {
    matches!(kind,
             TokenType::Assign
             | TokenType::PlusAssign
             | TokenType::MinusAssign
             | TokenType::MultiplyAssign
             | TokenType::DivideAssign
             | TokenType::ExponentiationAssign)
}

/// Computes the value an assignment operator stores.
///
/// `=` stores `rhs`; a compound operator combines `current` with `rhs`.
///
/// # Example
/// ```
/// use rust_decimal::Decimal;
/// use starlight::interpreter::{parser::binary::compound, token::TokenType};
///
/// let v = compound(TokenType::MinusAssign, Decimal::from(10), Decimal::from(4), 1).unwrap();
/// assert_eq!(v, Decimal::from(6));
/// ```
pub fn compound(op: TokenType, current: Decimal, rhs: Decimal, line: usize) -> EvalResult<Decimal> {
    match op {
        TokenType::PlusAssign => add(current, rhs, line),
        TokenType::MinusAssign => sub(current, rhs, line),
        TokenType::MultiplyAssign => mul(current, rhs, line),
        TokenType::DivideAssign => div(current, rhs, line),
        TokenType::ExponentiationAssign => pow(current, rhs, line),
        _ => Ok(rhs),
    }
}

/// Applies a binary operator.
///
/// Arithmetic is checked. Comparisons and logical operators yield `1` or `0`,
/// and treat any non-zero operand as true.
///
/// # Errors
/// `DivisionByZero` or `Overflow` from the arithmetic operators.
pub fn apply_binary(op: TokenType, left: Decimal, right: Decimal, line: usize) -> EvalResult<Decimal> {
    let value = match op {
        TokenType::Plus => add(left, right, line)?,
        TokenType::Minus => sub(left, right, line)?,
        TokenType::Multiply => mul(left, right, line)?,
        TokenType::Divide => div(left, right, line)?,
        TokenType::Modulo => rem(left, right, line)?,
        TokenType::Exponentiation => pow(left, right, line)?,
        TokenType::Equals => truth(left == right),
        TokenType::NotEquals => truth(left != right),
        TokenType::GreaterThan => truth(left > right),
        TokenType::GreaterOrEqual => truth(left >= right),
        TokenType::LessThan => truth(left < right),
        TokenType::LessOrEqual => truth(left <= right),
        TokenType::And => truth(is_truthy(left) && is_truthy(right)),
        TokenType::Or => truth(is_truthy(left) || is_truthy(right)),
        _ => right,
    };
    Ok(value)
}
