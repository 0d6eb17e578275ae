/// Reads characters from the source text.
///
/// The scanner is a cursor over the characters of a program. It offers
/// bounded lookahead and counts lines as it moves.
pub mod scanner;
/// Token kinds, values and the keyword table.
///
/// Defines everything the lexer produces: the closed set of token kinds, the
/// literal payloads, and the categories used by lexical statistics.
pub mod token;
/// Splits source text into tokens.
///
/// Skips whitespace and comments, and turns each lexeme into a keyword,
/// identifier, numeric literal, operator or punctuation token. Lexemes it
/// cannot classify become error tokens instead of failing.
pub mod lexer;
/// A buffered, forkable token sequence.
///
/// The stream is what the parser walks. Each token is kept together with the
/// line it starts on.
pub mod stream;
/// Variables and constants of a running program.
pub mod store;
/// Builtin functions callable from expressions.
///
/// A fixed, case-sensitive table from name to minimum argument count and
/// implementation.
pub mod builtin;
/// The I/O collaborator used by print and input statements.
///
/// Defines the [`Environment`](environment::Environment) trait together with a
/// console implementation and an in-memory one for tests.
pub mod environment;
/// Recognizes and evaluates programs in one pass.
///
/// Every expression rule returns its value and every statement performs its
/// effect the moment it is recognized. Declaration rules are enforced through
/// the variable store.
pub mod parser;
