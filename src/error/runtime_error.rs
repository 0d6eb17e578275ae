#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating statements.
pub enum RuntimeError {
    /// Tried to declare a name that is already declared in this run.
    AlreadyDeclared {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to read, write or receive input into an undeclared name.
    UndeclaredVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to write to a constant after its declaration.
    AssignmentToConstant {
        /// The name of the constant.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a function that is not in the builtin table.
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A builtin received fewer arguments than it requires.
    ArgumentCountMismatch {
        /// The name of the builtin.
        name:     String,
        /// The minimum number of arguments.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A statement keyword was evaluated in expression position.
    UnsupportedExpression {
        /// The keyword that was used as an expression.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division or modulo by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The result does not fit the decimal type.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An input statement ran but the environment had no number to give.
    InputUnavailable {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The environment failed to write a printed value.
    OutputFailed {
        /// Details reported by the output sink.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl RuntimeError {
    /// Returns the source line the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::AlreadyDeclared { line, .. }
            | Self::UndeclaredVariable { line, .. }
            | Self::AssignmentToConstant { line, .. }
            | Self::UnknownFunction { line, .. }
            | Self::ArgumentCountMismatch { line, .. }
            | Self::UnsupportedExpression { line, .. }
            | Self::DivisionByZero { line }
            | Self::Overflow { line }
            | Self::InputUnavailable { line }
            | Self::OutputFailed { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyDeclared { name, line } => {
                write!(f, "Error on line {line}: Variable '{name}' is already declared.")
            },
            Self::UndeclaredVariable { name, line } => {
                write!(f, "Error on line {line}: Variable '{name}' is not declared.")
            },
            Self::AssignmentToConstant { name, line } => {
                write!(f, "Error on line {line}: Cannot modify constant '{name}'.")
            },
            Self::UnknownFunction { name, line } => {
                write!(f, "Error on line {line}: Unknown function '{name}'.")
            },
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          line, } => write!(f,
                                                            "Error on line {line}: Function {name} requires at least {expected} arguments, got {found}."),
            Self::UnsupportedExpression { name, line } => write!(f,
                                                                 "Error on line {line}: {name} can only be used as a statement."),
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Result is outside the range of the decimal type."),
            Self::InputUnavailable { line } => {
                write!(f, "Error on line {line}: No input available.")
            },
            Self::OutputFailed { details, line } => {
                write!(f, "Error on line {line}: Failed to write output: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
