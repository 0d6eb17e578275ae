use std::{fmt, fs, io, path::Path};

use crate::interpreter::{
    lexer::Lexer,
    token::{Token, TokenCategory},
};

/// Token counts of a source text, by category.
///
/// The end-of-file token is not counted. Error tokens count as other lexemes.
///
/// # Example
/// ```
/// use starlight::stats::LexicalStats;
///
/// let stats = LexicalStats::collect("ЗВЕЗДА СВЕТ x : КВАЗАР = 1; ЗАКРЫТАЯ_ЗВЕЗДА");
/// assert_eq!(stats.keywords, 4);
/// assert_eq!(stats.identifiers, 1);
/// assert_eq!(stats.numeric_literals, 1);
/// assert_eq!(stats.operators, 1);
/// assert_eq!(stats.other, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LexicalStats {
    /// Keyword tokens.
    pub keywords:         usize,
    /// Identifier tokens.
    pub identifiers:      usize,
    /// Numeric literal tokens.
    pub numeric_literals: usize,
    /// Operator tokens.
    pub operators:        usize,
    /// Punctuation and error tokens.
    pub other:            usize,
}

impl LexicalStats {
    /// Lexes `source` and counts its tokens.
    #[must_use]
    pub fn collect(source: &str) -> Self {
        Lexer::new(source).map(|(token, _)| token)
                          .fold(Self::default(), |mut stats, token| {
                              stats.record(&token);
                              stats
                          })
    }

    /// Reads a file and counts its tokens.
    ///
    /// # Errors
    /// Any I/O error raised while reading the file.
    pub fn from_file(path: impl AsRef<Path>) -> io::Result<Self> {
        let source = fs::read_to_string(path)?;
        Ok(Self::collect(&source))
    }

    /// Adds one token to the counts.
    pub const fn record(&mut self, token: &Token) {
        match token.kind.category() {
            TokenCategory::Keyword => self.keywords += 1,
            TokenCategory::Identifier => self.identifiers += 1,
            TokenCategory::NumericLiteral => self.numeric_literals += 1,
            TokenCategory::Operator => self.operators += 1,
            TokenCategory::Other => self.other += 1,
        }
    }

    /// Returns the total number of tokens counted.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.keywords + self.identifiers + self.numeric_literals + self.operators + self.other
    }
}

impl fmt::Display for LexicalStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "keywords: {}", self.keywords)?;
        writeln!(f, "identifier: {}", self.identifiers)?;
        writeln!(f, "number literals: {}", self.numeric_literals)?;
        writeln!(f, "operators: {}", self.operators)?;
        write!(f, "other lexemes: {}", self.other)
    }
}
