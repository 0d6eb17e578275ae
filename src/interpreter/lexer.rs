use std::str::FromStr;

use rust_decimal::Decimal;

use crate::interpreter::{
    scanner::Scanner,
    token::{Token, TokenType},
};

/// Turns source text into tokens, one per call.
///
/// The lexer pulls characters from a [`Scanner`] and classifies them into
/// keywords, identifiers, numeric literals, operators and punctuation.
/// Whitespace, `// line` comments and `/* block */` comments are skipped.
/// An unterminated block comment swallows the rest of the input.
///
/// Lexemes that cannot be classified do not fail the lexer. They come back as
/// [`TokenType::Error`] tokens carrying the offending text, and only become
/// fatal when the grammar reaches them.
///
/// Iterating a lexer yields `(Token, line)` pairs and stops before the
/// end-of-file token.
///
/// # Example
/// ```
/// use starlight::interpreter::{
///     lexer::Lexer,
///     token::{Token, TokenType},
/// };
///
/// let mut lexer = Lexer::new("СВЕТ x");
/// assert_eq!(lexer.next_token(), Token::new(TokenType::Let));
/// assert_eq!(lexer.next_token(), Token::with_value(TokenType::Identifier, "x"));
/// assert_eq!(lexer.next_token(), Token::EOF);
/// assert_eq!(lexer.next_token(), Token::EOF);
/// ```
#[derive(Debug, Clone)]
pub struct Lexer {
    scanner: Scanner,
    line:    usize,
}

impl Lexer {
    /// Creates a lexer over `source`.
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self { scanner: Scanner::new(source),
               line:    1, }
    }

    /// Returns the 1-based line on which the most recently returned token
    /// starts.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Produces the next token.
    ///
    /// Once the input is exhausted every further call returns the
    /// end-of-file token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace_and_comments();
        self.line = self.scanner.line();

        if self.scanner.is_end() {
            return Token::EOF;
        }

        let c = self.scanner.peek(0);

        if c.is_alphabetic() || c == '_' {
            return self.lex_identifier_or_keyword();
        }

        if c.is_ascii_digit() || c == '.' || (c == '-' && self.scanner.peek(1).is_ascii_digit()) {
            return self.lex_numeric_literal();
        }

        self.lex_operator_or_punctuation()
    }

    /// Lexes a run of letters, digits and underscores.
    ///
    /// The text is looked up in the keyword table ignoring case; anything
    /// else becomes an identifier that keeps its original spelling.
    fn lex_identifier_or_keyword(&mut self) -> Token {
        let mut text = String::new();
        while !self.scanner.is_end() {
            let c = self.scanner.peek(0);
            if !(c.is_alphanumeric() || c == '_') {
                break;
            }
            text.push(c);
            self.scanner.advance(1);
        }

        TokenType::keyword(&text).map_or_else(|| Token::with_value(TokenType::Identifier, text),
                                              Token::new)
    }

    /// Lexes `-? digits ( . digits )? ( (e|E) (+|-)? digits )?`.
    ///
    /// Text that the decimal type cannot represent is returned as an error
    /// token.
    fn lex_numeric_literal(&mut self) -> Token {
        let mut text = String::new();

        if self.scanner.peek(0) == '-' {
            text.push('-');
            self.scanner.advance(1);
        }

        self.take_digits(&mut text);

        if self.scanner.peek(0) == '.' {
            text.push('.');
            self.scanner.advance(1);
            self.take_digits(&mut text);
        }

        if matches!(self.scanner.peek(0), 'e' | 'E') {
            text.push(self.scanner.peek(0));
            self.scanner.advance(1);

            if matches!(self.scanner.peek(0), '+' | '-') {
                text.push(self.scanner.peek(0));
                self.scanner.advance(1);
            }

            self.take_digits(&mut text);
        }

        match parse_decimal(&text) {
            Some(value) => Token::with_value(TokenType::NumericLiteral, value),
            None => Token::with_value(TokenType::Error, text),
        }
    }

    fn take_digits(&mut self, text: &mut String) {
        while self.scanner.peek(0).is_ascii_digit() {
            text.push(self.scanner.peek(0));
            self.scanner.advance(1);
        }
    }

    /// Lexes operators and punctuation.
    ///
    /// Characters that start a two or three character operator look ahead to
    /// pick the longest match. An unknown character, or a lone `&` or `|`,
    /// becomes an error token carrying that character.
    fn lex_operator_or_punctuation(&mut self) -> Token {
        let current = self.scanner.peek(0);
        self.scanner.advance(1);

        let kind = match current {
            ';' => TokenType::Semicolon,
            ',' => TokenType::Comma,
            ':' => TokenType::Colon,
            '(' => TokenType::OpenParenthesis,
            ')' => TokenType::CloseParenthesis,
            '[' => TokenType::OpenBracket,
            ']' => TokenType::CloseBracket,
            '{' => TokenType::OpenBrace,
            '}' => TokenType::CloseBrace,
            '%' => TokenType::Modulo,
            '+' => self.longest('=', TokenType::PlusAssign, TokenType::Plus),
            '-' => self.longest('=', TokenType::MinusAssign, TokenType::Minus),
            '/' => self.longest('=', TokenType::DivideAssign, TokenType::Divide),
            '=' => self.longest('=', TokenType::Equals, TokenType::Assign),
            '!' => self.longest('=', TokenType::NotEquals, TokenType::Not),
            '>' => self.longest('=', TokenType::GreaterOrEqual, TokenType::GreaterThan),
            '<' => self.longest('=', TokenType::LessOrEqual, TokenType::LessThan),
            '*' => {
                if self.scanner.peek(0) == '*' {
                    self.scanner.advance(1);
                    self.longest('=',
                                 TokenType::ExponentiationAssign,
                                 TokenType::Exponentiation)
                } else {
                    self.longest('=', TokenType::MultiplyAssign, TokenType::Multiply)
                }
            },
            '&' if self.scanner.peek(0) == '&' => {
                self.scanner.advance(1);
                TokenType::And
            },
            '|' if self.scanner.peek(0) == '|' => {
                self.scanner.advance(1);
                TokenType::Or
            },
            _ => return Token::with_value(TokenType::Error, current.to_string()),
        };

        Token::new(kind)
    }

    /// Consumes `next` and returns `long` if it follows, otherwise returns
    /// `short`.
    fn longest(&mut self, next: char, long: TokenType, short: TokenType) -> TokenType {
        if self.scanner.peek(0) == next {
            self.scanner.advance(1);
            long
        } else {
            short
        }
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            while !self.scanner.is_end() && self.scanner.peek(0).is_whitespace() {
                self.scanner.advance(1);
            }
            if !(self.skip_line_comment() || self.skip_block_comment()) {
                break;
            }
        }
    }

    fn skip_line_comment(&mut self) -> bool {
        if self.scanner.peek(0) != '/' || self.scanner.peek(1) != '/' {
            return false;
        }
        self.scanner.advance(2);
        while !self.scanner.is_end() && !matches!(self.scanner.peek(0), '\n' | '\r') {
            self.scanner.advance(1);
        }
        true
    }

    fn skip_block_comment(&mut self) -> bool {
        if self.scanner.peek(0) != '/' || self.scanner.peek(1) != '*' {
            return false;
        }
        self.scanner.advance(2);
        while !self.scanner.is_end() {
            if self.scanner.peek(0) == '*' && self.scanner.peek(1) == '/' {
                self.scanner.advance(2);
                return true;
            }
            self.scanner.advance(1);
        }
        true
    }
}

impl Iterator for Lexer {
    type Item = (Token, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.kind == TokenType::EndOfFile {
            return None;
        }
        Some((token, self.line))
    }
}

/// Parses the text of a numeric literal into a decimal.
///
/// A mantissa written as `.5` or `5.` is accepted. The exponent form is
/// applied by moving the decimal point in the text, so `1.2e5` and `120000`
/// parse alike. Digits beyond the 28th decimal place are rounded away, in
/// either form.
///
/// # Returns
/// - `Some(Decimal)`: The value of the literal.
/// - `None`: If the text is malformed or the integer part does not fit.
///
/// # Example
/// ```
/// use rust_decimal::Decimal;
/// use starlight::interpreter::lexer::parse_decimal;
///
/// assert_eq!(parse_decimal("-2.0E+3"), Some(Decimal::from(-2000)));
/// assert_eq!(parse_decimal(".5"), Some(Decimal::new(5, 1)));
/// assert_eq!(parse_decimal("1e-30"), Some(Decimal::ZERO));
/// assert_eq!(parse_decimal("1e29"), None);
/// assert_eq!(parse_decimal("1e"), None);
/// assert_eq!(parse_decimal("."), None);
/// ```
#[must_use]
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    let (mantissa, exponent) = match text.find(['e', 'E']) {
        Some(index) => (&text[..index], Some(&text[index + 1..])),
        None => (text, None),
    };

    let (sign, digits) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa.strip_prefix('+').unwrap_or(mantissa)),
    };
    let digits = digits.strip_suffix('.').unwrap_or(digits);
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits, ""));
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if (integer.is_empty() && fraction.is_empty()) || !all_digits(integer) || !all_digits(fraction) {
        return None;
    }

    let exponent = match exponent {
        Some(exponent) => parse_exponent(exponent)?,
        None => 0,
    };

    let plain = shift_point(integer, fraction, exponent)?;
    Decimal::from_str(&format!("{sign}{plain}")).ok()
}

/// The most integer digits a decimal can hold.
const MAX_INTEGER_DIGITS: i64 = 29;

/// Below this many places after the point every digit rounds away.
const MAX_LEADING_ZEROS: i64 = 64;

fn parse_exponent(text: &str) -> Option<i64> {
    let text = text.strip_prefix('+').unwrap_or(text);
    let magnitude = text.strip_prefix('-').unwrap_or(text);
    if magnitude.is_empty() || !magnitude.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Rewrites `integer.fraction * 10^exponent` as plain decimal text.
///
/// Returns `None` when the integer part is longer than a decimal can hold.
fn shift_point(integer: &str, fraction: &str, exponent: i64) -> Option<String> {
    let all = format!("{integer}{fraction}");
    let leading = all.bytes().take_while(|&b| b == b'0').count();
    let significant = &all[leading..];
    if significant.is_empty() {
        return Some("0".to_string());
    }

    let point = i64::try_from(integer.len()).ok()?
                                            .checked_add(exponent)?
                                            .checked_sub(i64::try_from(leading).ok()?)?;
    if point > MAX_INTEGER_DIGITS {
        return None;
    }
    if point < -MAX_LEADING_ZEROS {
        return Some("0".to_string());
    }

    let text = if point <= 0 {
        format!("0.{}{significant}", "0".repeat(usize::try_from(-point).ok()?))
    } else {
        let point = usize::try_from(point).ok()?;
        if point >= significant.len() {
            format!("{significant}{}", "0".repeat(point - significant.len()))
        } else {
            format!("{}.{}", &significant[..point], &significant[point..])
        }
    };
    Some(text)
}
