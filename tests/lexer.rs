use rust_decimal::Decimal;
use starlight::interpreter::{
    lexer::Lexer,
    stream::TokenStream,
    lexer::parse_decimal,
    token::{KEYWORDS, Token, TokenType},
};

fn d(text: &str) -> Decimal {
    text.parse().unwrap()
}

fn kinds(src: &str) -> Vec<TokenType> {
    Lexer::new(src).map(|(token, _)| token.kind).collect()
}

fn tokens(src: &str) -> Vec<Token> {
    Lexer::new(src).map(|(token, _)| token).collect()
}

#[test]
fn numeric_literals_in_every_form() {
    let numbers: Vec<Decimal> = tokens("42 -15 3.1416 1.2e5 -2.0E+3").iter()
                                                                     .map(|t| t.number().unwrap())
                                                                     .collect();
    assert_eq!(numbers,
               vec![d("42"), d("-15"), d("3.1416"), d("120000"), d("-2000")]);

    assert_eq!(tokens(".5")[0].number(), Some(d("0.5")));
    assert_eq!(tokens("5.")[0].number(), Some(d("5")));
    assert_eq!(tokens("2.5e-2")[0].number(), Some(d("0.025")));
}

#[test]
fn exponent_literals_round_past_the_last_decimal_place() {
    assert_eq!(tokens("1e-30")[0].number(), Some(Decimal::ZERO));
    assert_eq!(tokens("123456789012345678901234567890e-5")[0].number(),
               Some(d("1234567890123456789012345.6789")));
    assert_eq!(tokens("0.000000000000000000000000000012345e30")[0].number(),
               Some(d("12.345")));

    assert_eq!(parse_decimal("1e28"), Some(d("10000000000000000000000000000")));
    assert_eq!(parse_decimal("1e29"), None);
    assert_eq!(parse_decimal("0e99999"), Some(Decimal::ZERO));
    assert_eq!(parse_decimal("1e-99999"), Some(Decimal::ZERO));
    assert_eq!(parse_decimal("1.2.3"), None);
}

#[test]
fn minus_before_a_digit_is_part_of_the_literal() {
    assert_eq!(kinds("5 -3"),
               vec![TokenType::NumericLiteral, TokenType::NumericLiteral]);
    assert_eq!(kinds("5 - 3"),
               vec![TokenType::NumericLiteral, TokenType::Minus, TokenType::NumericLiteral]);
    assert_eq!(kinds("-x"), vec![TokenType::Minus, TokenType::Identifier]);
}

#[test]
fn malformed_exponent_becomes_an_error_token() {
    let toks = tokens("1e");
    assert_eq!(toks.len(), 1);
    assert_eq!(toks[0], Token::with_value(TokenType::Error, "1e"));
}

#[test]
fn keywords_ignore_case() {
    assert_eq!(kinds("ЗВЕЗДА звезда Звезда закрытая_звезда"),
               vec![TokenType::Begin, TokenType::Begin, TokenType::Begin, TokenType::End]);
    assert_eq!(kinds("квазар НОВА Вакуум галактика истина ЛОЖЬ"),
               vec![TokenType::IntegerType,
                    TokenType::FloatType,
                    TokenType::BoolType,
                    TokenType::GenericType,
                    TokenType::True,
                    TokenType::False]);
    assert_eq!(kinds("ФОТОН ВЕРНУТЬ ЕСЛИ ИЛИ_НЕТ ОРБИТА СПЕКТР"),
               vec![TokenType::Function,
                    TokenType::Return,
                    TokenType::If,
                    TokenType::Else,
                    TokenType::Loop,
                    TokenType::Spectrum]);
}

#[test]
fn only_keyword_kinds_are_keywords() {
    assert!(KEYWORDS.iter().all(|(_, kind)| kind.is_keyword()));
    for kind in [TokenType::Identifier,
                 TokenType::NumericLiteral,
                 TokenType::Plus,
                 TokenType::Semicolon,
                 TokenType::Error,
                 TokenType::EndOfFile]
    {
        assert!(!kind.is_keyword(), "{kind:?} is not a keyword");
    }
}

#[test]
fn cyrillic_identifiers_keep_their_spelling() {
    let toks = tokens("счетчик _tmp x1 Площадь");
    let names: Vec<&str> = toks.iter().map(|t| t.text().unwrap()).collect();
    assert_eq!(names, vec!["счетчик", "_tmp", "x1", "Площадь"]);
    assert!(toks.iter().all(|t| t.kind == TokenType::Identifier));
}

#[test]
fn operators_take_the_longest_match() {
    assert_eq!(kinds("+ += - -= * *= ** **= / /= %"),
               vec![TokenType::Plus,
                    TokenType::PlusAssign,
                    TokenType::Minus,
                    TokenType::MinusAssign,
                    TokenType::Multiply,
                    TokenType::MultiplyAssign,
                    TokenType::Exponentiation,
                    TokenType::ExponentiationAssign,
                    TokenType::Divide,
                    TokenType::DivideAssign,
                    TokenType::Modulo]);
    assert_eq!(kinds("= == ! != > >= < <= && ||"),
               vec![TokenType::Assign,
                    TokenType::Equals,
                    TokenType::Not,
                    TokenType::NotEquals,
                    TokenType::GreaterThan,
                    TokenType::GreaterOrEqual,
                    TokenType::LessThan,
                    TokenType::LessOrEqual,
                    TokenType::And,
                    TokenType::Or]);
    assert_eq!(kinds("; , : ( ) [ ] { }"),
               vec![TokenType::Semicolon,
                    TokenType::Comma,
                    TokenType::Colon,
                    TokenType::OpenParenthesis,
                    TokenType::CloseParenthesis,
                    TokenType::OpenBracket,
                    TokenType::CloseBracket,
                    TokenType::OpenBrace,
                    TokenType::CloseBrace]);
}

#[test]
fn unknown_characters_become_error_tokens() {
    assert_eq!(tokens("a @ b"),
               vec![Token::with_value(TokenType::Identifier, "a"),
                    Token::with_value(TokenType::Error, "@"),
                    Token::with_value(TokenType::Identifier, "b")]);
    assert_eq!(tokens("&")[0], Token::with_value(TokenType::Error, "&"));
    assert_eq!(tokens("|")[0], Token::with_value(TokenType::Error, "|"));
}

#[test]
fn comments_and_whitespace_are_skipped() {
    assert!(tokens("").is_empty());
    assert!(tokens("  \t\r\n ").is_empty());
    assert!(tokens("// Это комментарий\n/*\n Многострочный\n комментарий\n*/").is_empty());
    assert_eq!(kinds("x // y\nz"),
               vec![TokenType::Identifier, TokenType::Identifier]);
    assert_eq!(kinds("x /* y */ z"),
               vec![TokenType::Identifier, TokenType::Identifier]);
}

#[test]
fn unterminated_block_comment_swallows_the_rest() {
    assert_eq!(kinds("x /* y z"), vec![TokenType::Identifier]);
}

#[test]
fn end_of_file_repeats() {
    let mut lexer = Lexer::new("x");
    lexer.next_token();
    for _ in 0..3 {
        assert_eq!(lexer.next_token(), Token::EOF);
    }
}

#[test]
fn tokens_carry_their_starting_line() {
    let stream = TokenStream::new("ЗВЕЗДА\n  x\n/* a\nb */ 1\n");
    let lines: Vec<usize> = stream.tokens().iter().map(|(_, line)| *line).collect();
    assert_eq!(lines, vec![1, 2, 4, 5]);
}

#[test]
fn stream_ends_with_exactly_one_end_of_file() {
    let mut stream = TokenStream::new("a b");
    assert_eq!(stream.len(), 3);
    assert_eq!(stream.tokens().last().map(|(t, _)| t.kind), Some(TokenType::EndOfFile));

    for _ in 0..10 {
        stream.advance();
    }
    assert_eq!(stream.peek(), &Token::EOF);
    assert_eq!(stream.position(), 3);
}

#[test]
fn forked_stream_moves_independently() {
    let stream = TokenStream::new("a b c");
    let mut fork = stream.fork();
    fork.advance();
    fork.advance();

    assert_eq!(stream.peek(), &Token::with_value(TokenType::Identifier, "a"));
    assert_eq!(fork.peek(), &Token::with_value(TokenType::Identifier, "c"));

    let restored = TokenStream::from_tokens(stream.tokens().to_vec(), 1);
    assert_eq!(restored.peek(), &Token::with_value(TokenType::Identifier, "b"));
}
