/// A cursor over the characters of the source text.
///
/// The scanner has no knowledge of the language. It hands out characters by
/// offset from the cursor, moves the cursor forward, and counts the lines it
/// has moved past so tokens can be tagged with the line they start on.
///
/// # Example
/// ```
/// use starlight::interpreter::scanner::Scanner;
///
/// let mut scanner = Scanner::new("ab");
/// assert_eq!(scanner.peek(0), 'a');
/// assert_eq!(scanner.peek(1), 'b');
/// assert_eq!(scanner.peek(2), '\0');
///
/// scanner.advance(5);
/// assert!(scanner.is_end());
/// assert_eq!(scanner.position(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Scanner {
    chars:    Vec<char>,
    position: usize,
    line:     usize,
}

impl Scanner {
    /// Creates a scanner positioned at the first character of `text`.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self { chars:    text.chars().collect(),
               position: 0,
               line:     1, }
    }

    /// Returns the character `offset` places after the cursor, or `'\0'` past
    /// the end of the input.
    #[must_use]
    pub fn peek(&self, offset: usize) -> char {
        self.position
            .checked_add(offset)
            .and_then(|pos| self.chars.get(pos))
            .copied()
            .unwrap_or('\0')
    }

    /// Moves the cursor forward by `count` characters, stopping at the end of
    /// the input.
    pub fn advance(&mut self, count: usize) {
        let target = self.position.saturating_add(count).min(self.chars.len());
        self.line += self.chars[self.position..target].iter()
                                                      .filter(|&&c| c == '\n')
                                                      .count();
        self.position = target;
    }

    /// Returns `true` once the cursor has reached the end of the input.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.position >= self.chars.len()
    }

    /// Returns the cursor position, counted in characters.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the 1-based line the cursor is on.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }
}
