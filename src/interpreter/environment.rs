use std::io::{self, BufRead, Write};

use rust_decimal::Decimal;

use crate::interpreter::lexer::parse_decimal;

/// The I/O capability a running program uses for its print and input
/// statements.
///
/// Implementations are called synchronously, at the point in source order
/// where the statement appears.
pub trait Environment {
    /// Supplies the value for an input statement.
    ///
    /// Returns `None` when no more input is available.
    fn read_number(&mut self) -> Option<Decimal>;

    /// Receives one value printed by a print statement.
    ///
    /// # Errors
    /// Any I/O error raised while emitting the value.
    fn write_number(&mut self, value: Decimal) -> io::Result<()>;
}

/// An environment backed by a line reader and a writer.
///
/// Each input request reads one line. Lines that do not parse as a number are
/// answered with a diagnostic and the next line is read, until one parses or
/// the reader runs dry.
///
/// # Example
/// ```
/// use rust_decimal::Decimal;
/// use starlight::interpreter::environment::{ConsoleEnvironment, Environment};
///
/// let mut output = Vec::new();
/// let mut env = ConsoleEnvironment::new("abc\n2.5\n".as_bytes(), &mut output);
///
/// assert_eq!(env.read_number(), Some(Decimal::new(25, 1)));
/// assert_eq!(env.read_number(), None);
/// drop(env);
///
/// assert_eq!(String::from_utf8(output).unwrap(), "Error! Enter a valid number:\n");
/// ```
#[derive(Debug)]
pub struct ConsoleEnvironment<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleEnvironment<R, W> {
    /// Creates an environment over the given reader and writer.
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl ConsoleEnvironment<io::StdinLock<'static>, io::Stdout> {
    /// Creates an environment bound to the process's standard input and
    /// output.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Environment for ConsoleEnvironment<R, W> {
    fn read_number(&mut self) -> Option<Decimal> {
        let mut line = String::new();
        loop {
            line.clear();
            match self.reader.read_line(&mut line) {
                Ok(0) | Err(_) => return None,
                Ok(_) => {},
            }

            if let Some(value) = parse_decimal(line.trim()) {
                return Some(value);
            }

            tracing::debug!(input = line.trim(), "rejected non-numeric input");
            if writeln!(self.writer, "Error! Enter a valid number:").is_err() {
                return None;
            }
            if self.writer.flush().is_err() {
                return None;
            }
        }
    }

    fn write_number(&mut self, value: Decimal) -> io::Result<()> {
        writeln!(self.writer, "{value}")?;
        self.writer.flush()
    }
}

/// An in-memory environment for tests and embedding.
///
/// Inputs are served from a queue in order; printed values are appended to a
/// log.
///
/// # Example
/// ```
/// use rust_decimal::Decimal;
/// use starlight::interpreter::environment::{Environment, FakeEnvironment};
///
/// let mut env = FakeEnvironment::new([Decimal::from(7)]);
/// assert_eq!(env.read_number(), Some(Decimal::from(7)));
/// assert_eq!(env.read_number(), None);
///
/// env.write_number(Decimal::ONE).unwrap();
/// assert_eq!(env.outputs(), &[Decimal::ONE]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FakeEnvironment {
    inputs:  std::collections::VecDeque<Decimal>,
    outputs: Vec<Decimal>,
}

impl FakeEnvironment {
    /// Creates an environment that will answer input requests with `inputs`,
    /// in order.
    pub fn new(inputs: impl IntoIterator<Item = Decimal>) -> Self {
        Self { inputs:  inputs.into_iter().collect(),
               outputs: Vec::new(), }
    }

    /// Returns every value written so far.
    #[must_use]
    pub fn outputs(&self) -> &[Decimal] {
        &self.outputs
    }

    /// Returns the number of inputs not yet consumed.
    #[must_use]
    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl Environment for FakeEnvironment {
    fn read_number(&mut self) -> Option<Decimal> {
        self.inputs.pop_front()
    }

    fn write_number(&mut self, value: Decimal) -> io::Result<()> {
        self.outputs.push(value);
        Ok(())
    }
}
