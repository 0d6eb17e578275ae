use std::rc::Rc;

use crate::interpreter::{
    lexer::Lexer,
    token::{Token, TokenType},
};

static END_OF_FILE: Token = Token::EOF;

/// A buffered token sequence with a cursor.
///
/// The stream drains a [`Lexer`] once, up to and including a single trailing
/// end-of-file token, and pairs each token with the line it starts on. The
/// sequence is shared and never modified; only the cursor moves.
///
/// Peeking past the end yields the end-of-file token, and advancing past the
/// end leaves the cursor where it is.
///
/// [`fork`](Self::fork) gives an independent cursor over the same tokens, which
/// is how the parser looks ahead without committing.
///
/// # Example
/// ```
/// use starlight::interpreter::{stream::TokenStream, token::TokenType};
///
/// let mut tokens = TokenStream::new("x += 1");
/// let mut lookahead = tokens.fork();
/// lookahead.advance();
/// assert_eq!(lookahead.peek().kind, TokenType::PlusAssign);
/// assert_eq!(tokens.peek().kind, TokenType::Identifier);
/// ```
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens:   Rc<[(Token, usize)]>,
    position: usize,
}

impl TokenStream {
    /// Lexes `source` to exhaustion and positions the cursor on the first
    /// token.
    #[must_use]
    pub fn new(source: &str) -> Self {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();

        loop {
            let token = lexer.next_token();
            let done = token.kind == TokenType::EndOfFile;
            tokens.push((token, lexer.line()));
            if done {
                break;
            }
        }

        Self::from_tokens(tokens, 0)
    }

    /// Builds a stream over an existing token sequence, with the cursor at
    /// `position` (clamped to the sequence length).
    #[must_use]
    pub fn from_tokens(tokens: impl Into<Rc<[(Token, usize)]>>, position: usize) -> Self {
        let tokens = tokens.into();
        let position = position.min(tokens.len());
        Self { tokens, position }
    }

    /// Returns an independent cursor at the same position over the same
    /// tokens.
    #[must_use]
    pub fn fork(&self) -> Self {
        Self::from_tokens(Rc::clone(&self.tokens), self.position)
    }

    /// Returns the token under the cursor without consuming it.
    #[must_use]
    pub fn peek(&self) -> &Token {
        self.tokens
            .get(self.position)
            .map_or(&END_OF_FILE, |(token, _)| token)
    }

    /// Returns the line of the token under the cursor.
    ///
    /// Past the end this is the line of the last buffered token.
    #[must_use]
    pub fn line(&self) -> usize {
        self.tokens
            .get(self.position)
            .or_else(|| self.tokens.last())
            .map_or(1, |(_, line)| *line)
    }

    /// Consumes the token under the cursor.
    pub fn advance(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
    }

    /// Returns the cursor position.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the number of buffered tokens, including the end-of-file token.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if nothing is buffered.
    ///
    /// A stream built from source is never empty, since it always holds the
    /// end-of-file token.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the buffered tokens.
    #[must_use]
    pub fn tokens(&self) -> &[(Token, usize)] {
        &self.tokens
    }
}
