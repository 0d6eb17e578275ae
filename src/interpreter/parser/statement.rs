use rust_decimal::Decimal;

use crate::{
    error::{ParseError, RuntimeError},
    interpreter::{
        builtin,
        parser::{
            binary::{compound, is_assignment_operator},
            core::{ParseResult, Parser},
        },
        token::TokenType,
    },
};

impl Parser<'_> {
    /// Parses and executes one statement.
    ///
    /// A statement is one of:
    /// - a variable declaration (`СВЕТ`),
    /// - a constant declaration (`КОНСТЕЛЛАЦИЯ`),
    /// - a print statement (`ИЗЛУЧАТЬ`),
    /// - an input statement (`ПРИЕМ_СИГНАЛА`),
    /// - an assignment or call starting with an identifier.
    ///
    /// The first token selects the form.
    ///
    /// # Errors
    /// `ExpectedStatement` if no form starts with the current token, or any
    /// error raised by the selected form.
    pub(super) fn parse_statement(&mut self) -> ParseResult<()> {
        let kind = self.tokens.peek().kind;
        tracing::trace!(line = self.tokens.line(), token = %kind, "statement");

        match kind {
            TokenType::Let => self.parse_variable_declaration(),
            TokenType::Const => self.parse_constant_declaration(),
            TokenType::Emit => self.parse_print(),
            TokenType::Receive => self.parse_input(),
            TokenType::Identifier => self.parse_identifier_statement(),
            _ => Err(self.reject(|found, line| ParseError::ExpectedStatement { found, line })),
        }
    }

    /// Parses a variable declaration.
    ///
    /// Grammar: `var_decl := LET IDENT ":" type ("=" expression)? ";"`
    ///
    /// Without an initializer the variable starts at zero. The initializer is
    /// evaluated before the name is declared.
    ///
    /// # Errors
    /// `AlreadyDeclared` if the name was declared before.
    fn parse_variable_declaration(&mut self) -> ParseResult<()> {
        let line = self.tokens.line();
        self.expect(TokenType::Let)?;
        let name = self.expect_identifier()?;
        self.expect(TokenType::Colon)?;
        let value_type = self.parse_type()?;

        let value = if self.tokens.peek().kind == TokenType::Assign {
            self.tokens.advance();
            self.parse_expression()?
        } else {
            Decimal::ZERO
        };
        self.expect(TokenType::Semicolon)?;

        self.store.declare(&name, value, line)?;
        tracing::debug!(name = %name, value_type = %value_type, value = %value, line, "declared variable");
        Ok(())
    }

    /// Parses a constant declaration.
    ///
    /// Grammar: `const_decl := CONST IDENT ":" type "=" expression ";"`
    ///
    /// # Errors
    /// `AlreadyDeclared` if the name was declared before.
    fn parse_constant_declaration(&mut self) -> ParseResult<()> {
        let line = self.tokens.line();
        self.expect(TokenType::Const)?;
        let name = self.expect_identifier()?;
        self.expect(TokenType::Colon)?;
        let value_type = self.parse_type()?;
        self.expect(TokenType::Assign)?;
        let value = self.parse_expression()?;
        self.expect(TokenType::Semicolon)?;

        self.store.declare_const(&name, value, line)?;
        tracing::debug!(name = %name, value_type = %value_type, value = %value, line, "declared constant");
        Ok(())
    }

    /// Parses a print statement.
    ///
    /// Grammar: `print := EMIT "(" (expression ("," expression)*)? ")" ";"`
    ///
    /// Every argument is appended to the results buffer, and written to the
    /// environment if one is attached, as soon as it is evaluated.
    ///
    /// # Errors
    /// `OutputFailed` if the environment cannot write a value.
    fn parse_print(&mut self) -> ParseResult<()> {
        let line = self.tokens.line();
        self.expect(TokenType::Emit)?;
        self.parse_argument_list(|parser, value| parser.emit(value, line))?;
        self.expect(TokenType::Semicolon)?;
        Ok(())
    }

    fn emit(&mut self, value: Decimal, line: usize) -> ParseResult<()> {
        self.results.push(value);
        tracing::debug!(value = %value, line, "emit");

        if let Some(environment) = self.environment.as_deref_mut() {
            environment.write_number(value)
                       .map_err(|e| RuntimeError::OutputFailed { details: e.to_string(),
                                                                 line })?;
        }
        Ok(())
    }

    /// Parses an input statement.
    ///
    /// Grammar: `input := RECEIVE "(" IDENT ")" ";"`
    ///
    /// The target must be a declared variable. With an environment attached,
    /// the value it supplies is stored; without one the target keeps its
    /// value.
    ///
    /// # Errors
    /// - `UndeclaredVariable` if the target was never declared.
    /// - `AssignmentToConstant` if the target is a constant.
    /// - `InputUnavailable` if the environment has no more input.
    fn parse_input(&mut self) -> ParseResult<()> {
        self.expect(TokenType::Receive)?;
        self.expect(TokenType::OpenParenthesis)?;
        let line = self.tokens.line();
        let name = self.expect_identifier()?;
        self.expect(TokenType::CloseParenthesis)?;
        self.expect(TokenType::Semicolon)?;

        if !self.store.is_declared(&name) {
            return Err(RuntimeError::UndeclaredVariable { name, line }.into());
        }
        if self.store.is_constant(&name) {
            return Err(RuntimeError::AssignmentToConstant { name, line }.into());
        }

        let Some(environment) = self.environment.as_deref_mut() else {
            tracing::debug!(name = %name, line, "input without environment");
            return Ok(());
        };
        let value = environment.read_number()
                               .ok_or(RuntimeError::InputUnavailable { line })?;
        tracing::debug!(name = %name, value = %value, line, "received input");

        self.store.assign(&name, value, line)?;
        Ok(())
    }

    /// Parses a statement that starts with an identifier.
    ///
    /// Grammar: `ident_stmt := IDENT (assign_op expression | args) ";"`
    ///
    /// An assignment requires the name to be declared. A call is dispatched
    /// to the builtin table and its value is discarded.
    ///
    /// # Errors
    /// - `UndeclaredVariable` if an assignment target was never declared.
    /// - `AssignmentToConstant` if the target is a constant.
    /// - `UnexpectedToken` if neither an assignment operator nor `(` follows
    ///   the identifier.
    fn parse_identifier_statement(&mut self) -> ParseResult<()> {
        let line = self.tokens.line();
        let name = self.expect_identifier()?;
        let op = self.tokens.peek().kind;

        if op == TokenType::OpenParenthesis {
            let args = self.parse_arguments()?;
            let value = builtin::call(&name, &args, line)?;
            tracing::trace!(name = %name, value = %value, line, "discarded call result");
        } else if is_assignment_operator(op) {
            if !self.store.is_declared(&name) {
                return Err(RuntimeError::UndeclaredVariable { name, line }.into());
            }
            self.tokens.advance();
            let rhs = self.parse_expression()?;
            let value = compound(op, self.store.value_or_zero(&name), rhs, line)?;
            self.store.assign(&name, value, line)?;
            tracing::trace!(name = %name, value = %value, line, "assigned");
        } else {
            return Err(self.reject(|found, line| ParseError::UnexpectedToken { expected: TokenType::Assign,
                                                                                found,
                                                                                line }));
        }

        self.expect(TokenType::Semicolon)?;
        Ok(())
    }
}
