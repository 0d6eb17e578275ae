use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::{
    error::{Error, ParseError},
    interpreter::{
        environment::Environment,
        store::VariableStore,
        stream::TokenStream,
        token::TokenType,
    },
};

pub type ParseResult<T> = Result<T, Error>;

/// A single-pass interpreter.
///
/// Each grammar rule recognizes its syntax and evaluates it in the same step;
/// no tree is built. A failure anywhere ends the run. Side effects that
/// happened before the failure (variable writes, printed values) are kept.
///
/// # Example
/// ```
/// use rust_decimal::Decimal;
/// use starlight::interpreter::parser::Parser;
///
/// let mut parser = Parser::new("ЗВЕЗДА СВЕТ x : КВАЗАР = 6; ИЗЛУЧАТЬ(x * 7); ЗАКРЫТАЯ_ЗВЕЗДА");
/// parser.parse_program().unwrap();
///
/// assert_eq!(parser.results(), &[Decimal::from(42)]);
/// assert_eq!(parser.variables()["x"], Decimal::from(6));
/// ```
pub struct Parser<'env> {
    pub(super) tokens:      TokenStream,
    pub(super) store:       VariableStore,
    pub(super) results:     Vec<Decimal>,
    pub(super) environment: Option<&'env mut dyn Environment>,
}

impl std::fmt::Debug for Parser<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser")
         .field("tokens", &self.tokens)
         .field("store", &self.store)
         .field("results", &self.results)
         .field("environment", &self.environment.is_some())
         .finish()
    }
}

impl<'env> Parser<'env> {
    /// Creates a parser over `source` with an empty store.
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self::with_variables(source, HashMap::new())
    }

    /// Creates a parser over `source` whose store is seeded with `variables`.
    ///
    /// Seeded names count as declared.
    #[must_use]
    pub fn with_variables(source: &str, variables: HashMap<String, Decimal>) -> Self {
        Self { tokens:      TokenStream::new(source),
               store:       VariableStore::with_bindings(variables),
               results:     Vec::new(),
               environment: None, }
    }

    /// Attaches the environment used by print and input statements.
    #[must_use]
    pub fn with_environment(mut self, environment: &'env mut dyn Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Parses and executes a whole program.
    ///
    /// Grammar: `program := BEGIN statement* END`
    ///
    /// The results buffer is cleared first. Nothing but the end of input may
    /// follow `END`.
    ///
    /// # Errors
    /// The first syntax or runtime error encountered.
    pub fn parse_program(&mut self) -> ParseResult<()> {
        self.results.clear();
        tracing::info!(tokens = self.tokens.len(), "executing program");

        self.expect(TokenType::Begin)?;
        while !matches!(self.tokens.peek().kind, TokenType::End | TokenType::EndOfFile) {
            self.parse_statement()?;
        }
        self.expect(TokenType::End)?;
        self.expect(TokenType::EndOfFile)?;

        tracing::debug!(printed = self.results.len(), "program finished");
        Ok(())
    }

    /// Evaluates the input as one expression.
    ///
    /// Assignments inside the expression update the store.
    ///
    /// # Errors
    /// - Any syntax or runtime error raised by the expression.
    /// - `UnexpectedTrailingTokens` if input remains after the expression.
    ///
    /// # Example
    /// ```
    /// use rust_decimal::Decimal;
    /// use starlight::interpreter::parser::Parser;
    ///
    /// let mut parser = Parser::new("2 + 3 * (4 - 1) ** 2");
    /// assert_eq!(parser.evaluate_expression().unwrap(), Decimal::from(29));
    ///
    /// let mut parser = Parser::new("2 ** 3 ** 2");
    /// assert_eq!(parser.evaluate_expression().unwrap(), Decimal::from(512));
    /// ```
    pub fn evaluate_expression(&mut self) -> ParseResult<Decimal> {
        let value = self.parse_expression()?;

        if self.tokens.peek().kind != TokenType::EndOfFile {
            return Err(self.reject(|found, line| {
                               ParseError::UnexpectedTrailingTokens { found, line }
                           }));
        }

        Ok(value)
    }

    /// Parses a full expression.
    ///
    /// This is the entry point of the expression grammar. It starts at the
    /// assignment level, the lowest precedence.
    ///
    /// Grammar: `expression := assignment`
    pub(super) fn parse_expression(&mut self) -> ParseResult<Decimal> {
        self.parse_assignment()
    }

    /// Returns the values printed so far, in order.
    #[must_use]
    pub fn results(&self) -> &[Decimal] {
        &self.results
    }

    /// Returns every variable and its current value.
    #[must_use]
    pub const fn variables(&self) -> &HashMap<String, Decimal> {
        self.store.variables()
    }

    /// Returns the variable store.
    #[must_use]
    pub const fn store(&self) -> &VariableStore {
        &self.store
    }

    /// Consumes the parser, returning its variable store.
    #[must_use]
    pub fn into_store(self) -> VariableStore {
        self.store
    }
}
