use rust_decimal::Decimal;

/// Classifies a token.
///
/// The enumeration is closed: eighteen keywords, identifiers, numeric
/// literals, operators, punctuation, end of file and the error kind the lexer
/// uses for lexemes it cannot classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// `ЗВЕЗДА`, opens a program.
    Begin,
    /// `ЗАКРЫТАЯ_ЗВЕЗДА`, closes a program.
    End,
    /// `СВЕТ`, declares a variable.
    Let,
    /// `КОНСТЕЛЛАЦИЯ`, declares a constant.
    Const,
    /// `ИЗЛУЧАТЬ`, prints values.
    Emit,
    /// `ПРИЕМ_СИГНАЛА`, reads a value.
    Receive,
    /// `ФОТОН`
    Function,
    /// `ВЕРНУТЬ`
    Return,
    /// `ЕСЛИ`
    If,
    /// `ИЛИ_НЕТ`
    Else,
    /// `ОРБИТА`
    Loop,
    /// `СПЕКТР`
    Spectrum,
    /// `КВАЗАР`, the integer type name.
    IntegerType,
    /// `НОВА`, the floating type name.
    FloatType,
    /// `ВАКУУМ`, the boolean type name.
    BoolType,
    /// `ГАЛАКТИКА`, the generic type name.
    GenericType,
    /// `ИСТИНА`
    True,
    /// `ЛОЖЬ`
    False,

    /// Variable or function names such as `x` or `счетчик`.
    Identifier,
    /// Numeric literals such as `42`, `-15`, `3.14` or `1.2e5`.
    NumericLiteral,

    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Modulo,
    /// `**`
    Exponentiation,

    /// `==`
    Equals,
    /// `!=`
    NotEquals,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterOrEqual,
    /// `<`
    LessThan,
    /// `<=`
    LessOrEqual,

    /// `&&`
    And,
    /// `||`
    Or,
    /// `!`
    Not,

    /// `=`
    Assign,
    /// `+=`
    PlusAssign,
    /// `-=`
    MinusAssign,
    /// `*=`
    MultiplyAssign,
    /// `/=`
    DivideAssign,
    /// `**=`
    ExponentiationAssign,

    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// `:`
    Colon,
    /// `(`
    OpenParenthesis,
    /// `)`
    CloseParenthesis,
    /// `[`
    OpenBracket,
    /// `]`
    CloseBracket,
    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,

    /// The end of the input.
    EndOfFile,
    /// A lexeme the lexer could not classify.
    Error,
}

/// Keyword spellings and their token kinds, in canonical upper case.
pub const KEYWORDS: &[(&str, TokenType)] = &[("ЗВЕЗДА", TokenType::Begin),
                                             ("ЗАКРЫТАЯ_ЗВЕЗДА", TokenType::End),
                                             ("СВЕТ", TokenType::Let),
                                             ("КОНСТЕЛЛАЦИЯ", TokenType::Const),
                                             ("ИЗЛУЧАТЬ", TokenType::Emit),
                                             ("ПРИЕМ_СИГНАЛА", TokenType::Receive),
                                             ("ФОТОН", TokenType::Function),
                                             ("ВЕРНУТЬ", TokenType::Return),
                                             ("ЕСЛИ", TokenType::If),
                                             ("ИЛИ_НЕТ", TokenType::Else),
                                             ("ОРБИТА", TokenType::Loop),
                                             ("СПЕКТР", TokenType::Spectrum),
                                             ("КВАЗАР", TokenType::IntegerType),
                                             ("НОВА", TokenType::FloatType),
                                             ("ВАКУУМ", TokenType::BoolType),
                                             ("ГАЛАКТИКА", TokenType::GenericType),
                                             ("ИСТИНА", TokenType::True),
                                             ("ЛОЖЬ", TokenType::False)];

/// The category a token is counted under in lexical statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenCategory {
    /// One of the eighteen keywords.
    Keyword,
    /// A user name.
    Identifier,
    /// A numeric literal.
    NumericLiteral,
    /// Arithmetic, comparison, logical and assignment operators.
    Operator,
    /// Punctuation, end of file and error tokens.
    Other,
}

impl TokenType {
    /// Looks up a keyword, ignoring case.
    ///
    /// The comparison upper-cases `text` with Unicode rules, so `звезда`,
    /// `Звезда` and `ЗВЕЗДА` all map to [`TokenType::Begin`].
    ///
    /// # Example
    /// ```
    /// use starlight::interpreter::token::TokenType;
    ///
    /// assert_eq!(TokenType::keyword("звезда"), Some(TokenType::Begin));
    /// assert_eq!(TokenType::keyword("звездочка"), None);
    /// ```
    #[must_use]
    pub fn keyword(text: &str) -> Option<Self> {
        let upper = text.to_uppercase();
        KEYWORDS.iter()
                .find(|(spelling, _)| *spelling == upper)
                .map(|(_, kind)| *kind)
    }

    /// Returns the statistics category of this kind.
    #[must_use]
    pub const fn category(self) -> TokenCategory {
        match self {
            Self::Begin
            | Self::End
            | Self::Let
            | Self::Const
            | Self::Emit
            | Self::Receive
            | Self::Function
            | Self::Return
            | Self::If
            | Self::Else
            | Self::Loop
            | Self::Spectrum
            | Self::IntegerType
            | Self::FloatType
            | Self::BoolType
            | Self::GenericType
            | Self::True
            | Self::False => TokenCategory::Keyword,
            Self::Identifier => TokenCategory::Identifier,
            Self::NumericLiteral => TokenCategory::NumericLiteral,
            Self::Plus
            | Self::Minus
            | Self::Multiply
            | Self::Divide
            | Self::Modulo
            | Self::Exponentiation
            | Self::Equals
            | Self::NotEquals
            | Self::GreaterThan
            | Self::GreaterOrEqual
            | Self::LessThan
            | Self::LessOrEqual
            | Self::And
            | Self::Or
            | Self::Not
            | Self::Assign
            | Self::PlusAssign
            | Self::MinusAssign
            | Self::MultiplyAssign
            | Self::DivideAssign
            | Self::ExponentiationAssign => TokenCategory::Operator,
            _ => TokenCategory::Other,
        }
    }

    /// Returns `true` for the eighteen keyword kinds.
    #[must_use]
    pub const fn is_keyword(self) -> bool {
        matches!(self.category(), TokenCategory::Keyword)
    }

    /// Returns the source spelling of the kind, or a description for kinds
    /// without a fixed spelling.
    #[must_use]
    pub fn lexeme(self) -> &'static str {
        if let Some((spelling, _)) = KEYWORDS.iter().find(|(_, kind)| *kind == self) {
            return *spelling;
        }
        match self {
            Self::Identifier => "identifier",
            Self::NumericLiteral => "numeric literal",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
            Self::Exponentiation => "**",
            Self::Equals => "==",
            Self::NotEquals => "!=",
            Self::GreaterThan => ">",
            Self::GreaterOrEqual => ">=",
            Self::LessThan => "<",
            Self::LessOrEqual => "<=",
            Self::And => "&&",
            Self::Or => "||",
            Self::Not => "!",
            Self::Assign => "=",
            Self::PlusAssign => "+=",
            Self::MinusAssign => "-=",
            Self::MultiplyAssign => "*=",
            Self::DivideAssign => "/=",
            Self::ExponentiationAssign => "**=",
            Self::Semicolon => ";",
            Self::Comma => ",",
            Self::Colon => ":",
            Self::OpenParenthesis => "(",
            Self::CloseParenthesis => ")",
            Self::OpenBracket => "[",
            Self::CloseBracket => "]",
            Self::OpenBrace => "{",
            Self::CloseBrace => "}",
            Self::EndOfFile => "end of file",
            _ => "invalid lexeme",
        }
    }
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier | Self::NumericLiteral | Self::EndOfFile | Self::Error => {
                write!(f, "{}", self.lexeme())
            },
            _ => write!(f, "'{}'", self.lexeme()),
        }
    }
}

/// The literal payload of a token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenValue {
    /// Identifier text, or the raw text of an error token.
    Text(String),
    /// The parsed value of a numeric literal.
    Number(Decimal),
    /// A boolean payload.
    Bool(bool),
}

impl std::fmt::Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{s}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(true) => write!(f, "истина"),
            Self::Bool(false) => write!(f, "ложь"),
        }
    }
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Decimal> for TokenValue {
    fn from(value: Decimal) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for TokenValue {
    fn from(value: i64) -> Self {
        Self::Number(Decimal::from(value))
    }
}

impl From<bool> for TokenValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// A lexical token: a kind plus an optional literal value.
///
/// Equality is structural. Source positions are kept next to the token by
/// [`TokenStream`](crate::interpreter::stream::TokenStream), never inside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// The token kind.
    pub kind:  TokenType,
    /// The literal payload for identifiers, numbers and error tokens.
    pub value: Option<TokenValue>,
}

impl Token {
    /// The end-of-file token.
    pub const EOF: Self = Self { kind:  TokenType::EndOfFile,
                                 value: None, };

    /// Creates a token without a value.
    #[must_use]
    pub const fn new(kind: TokenType) -> Self {
        Self { kind, value: None }
    }

    /// Creates a token carrying a value.
    ///
    /// # Example
    /// ```
    /// use starlight::interpreter::token::{Token, TokenType};
    ///
    /// let a = Token::with_value(TokenType::Identifier, "x");
    /// let b = Token::with_value(TokenType::Identifier, "x");
    /// assert_eq!(a, b);
    /// assert_ne!(a, Token::with_value(TokenType::Identifier, "y"));
    /// ```
    #[must_use]
    pub fn with_value(kind: TokenType, value: impl Into<TokenValue>) -> Self {
        Self { kind,
               value: Some(value.into()) }
    }

    /// Returns the identifier or error text carried by the token.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.value {
            Some(TokenValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    /// Returns the number carried by a numeric literal.
    #[must_use]
    pub const fn number(&self) -> Option<Decimal> {
        match &self.value {
            Some(TokenValue::Number(n)) => Some(*n),
            _ => None,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "'{value}'"),
            None => write!(f, "{}", self.kind),
        }
    }
}
