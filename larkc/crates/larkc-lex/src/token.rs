//! Token definitions and the fixed lookup tables of the Lark grammar.
//!
//! A [`Token`] is a tagged value: punctuation and reserved words carry no
//! payload, literals and names carry exactly one. [`TokenKind`] is the
//! payload-free tag, useful when only the shape of a token stream matters.

use std::fmt;

use larkc_util::Symbol;

/// A classified unit of Lark source text.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    /// Floating-point literal, e.g. `15.41`, `-.5`
    Float(f64),
    /// Integer literal, e.g. `42`, `-7`
    Int(i64),
    /// Identifier, kept exactly as written
    Name(Symbol),
    /// String literal with escapes already decoded
    String(String),

    /// `(`
    OParen,
    /// `)`
    CParen,
    /// `{`
    OBrace,
    /// `}`
    CBrace,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `.`
    Period,

    /// `def`
    Def,
    /// `if`
    If,
    /// `fun`
    Fun,
    /// `not`
    Not,
    /// `and`
    And,
    /// `or`
    Or,

    /// Input that could not be lexed. Holds the rest of the source from the
    /// failure point on; nothing follows it in a token stream.
    Invalid(String),
}

/// The payload-free tag of a [`Token`]. Variants mirror the token variants.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Float,
    Int,
    Name,
    String,
    OParen,
    CParen,
    OBrace,
    CBrace,
    Comma,
    Semicolon,
    Period,
    Def,
    If,
    Fun,
    Not,
    And,
    Or,
    Invalid,
}

/// Reserved words, keyed by their lowercase spelling.
///
/// Matching is case-insensitive: `IF`, `If` and `if` are all [`Token::If`].
pub static RESERVED_WORDS: [(&str, Token); 6] = [
    ("def", Token::Def),
    ("if", Token::If),
    ("fun", Token::Fun),
    ("not", Token::Not),
    ("and", Token::And),
    ("or", Token::Or),
];

/// Single-character punctuation.
pub static PUNCTUATION: [(char, Token); 7] = [
    ('(', Token::OParen),
    (')', Token::CParen),
    ('{', Token::OBrace),
    ('}', Token::CBrace),
    (',', Token::Comma),
    (';', Token::Semicolon),
    ('.', Token::Period),
];

/// Looks up a reserved word, ignoring case.
///
/// ```
/// use larkc_lex::{keyword_from_ident, Token};
///
/// assert_eq!(keyword_from_ident("FUN"), Some(Token::Fun));
/// assert_eq!(keyword_from_ident("fund"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<Token> {
    // `upper` holds no ASCII lowercase, so an ASCII case fold against the
    // lowercase table is an exact match on the uppercased spelling.
    let upper = ident.to_uppercase();
    RESERVED_WORDS
        .iter()
        .find(|(word, _)| upper.eq_ignore_ascii_case(word))
        .map(|(_, token)| token.clone())
}

/// Looks up a punctuation character.
pub fn punctuation_from_char(c: char) -> Option<Token> {
    PUNCTUATION
        .iter()
        .find(|(p, _)| *p == c)
        .map(|(_, token)| token.clone())
}

/// Whitespace recognised by the scanner: space, tab, CR and LF only.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Characters allowed to end a number, identifier or string literal.
#[inline]
pub fn is_delimiter(c: char) -> bool {
    is_whitespace(c) || PUNCTUATION.iter().any(|(p, _)| *p == c)
}

/// True when `rest` is empty or starts with a delimiter.
#[inline]
pub fn at_delimiter(rest: &str) -> bool {
    rest.chars().next().map_or(true, is_delimiter)
}

impl Token {
    /// The payload-free tag of this token.
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Float(_) => TokenKind::Float,
            Token::Int(_) => TokenKind::Int,
            Token::Name(_) => TokenKind::Name,
            Token::String(_) => TokenKind::String,
            Token::OParen => TokenKind::OParen,
            Token::CParen => TokenKind::CParen,
            Token::OBrace => TokenKind::OBrace,
            Token::CBrace => TokenKind::CBrace,
            Token::Comma => TokenKind::Comma,
            Token::Semicolon => TokenKind::Semicolon,
            Token::Period => TokenKind::Period,
            Token::Def => TokenKind::Def,
            Token::If => TokenKind::If,
            Token::Fun => TokenKind::Fun,
            Token::Not => TokenKind::Not,
            Token::And => TokenKind::And,
            Token::Or => TokenKind::Or,
            Token::Invalid(_) => TokenKind::Invalid,
        }
    }

    /// Returns true for [`Token::Invalid`].
    #[inline]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Token::Invalid(_))
    }
}

/// Renders a lexeme that scans back to an equal token.
///
/// Floats always keep a decimal point and strings are re-escaped, so
/// joining the rendered tokens with spaces and scanning the result yields
/// the same kinds and values. A `/` after `*` inside a string is written
/// as `\/`, so a rendered literal never closes a block comment opened by
/// an earlier `/*` name.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Float(value) => {
                let text = value.to_string();
                if text.contains('.') {
                    f.write_str(&text)
                } else {
                    write!(f, "{}.0", text)
                }
            },
            Token::Int(value) => write!(f, "{}", value),
            Token::Name(name) => f.write_str(name.as_str()),
            Token::String(text) => {
                f.write_str("\"")?;
                let mut after_star = false;
                for c in text.chars() {
                    match c {
                        '\n' => f.write_str("\\n")?,
                        '"' => f.write_str("\\\"")?,
                        '\\' => f.write_str("\\\\")?,
                        '/' if after_star => f.write_str("\\/")?,
                        c => write!(f, "{}", c)?,
                    }
                    after_star = c == '*';
                }
                f.write_str("\"")
            },
            Token::Invalid(text) => f.write_str(text),
            other => {
                if let Some((c, _)) = PUNCTUATION.iter().find(|(_, t)| t == other) {
                    write!(f, "{}", c)
                } else if let Some((word, _)) = RESERVED_WORDS.iter().find(|(_, t)| t == other) {
                    f.write_str(word)
                } else {
                    Ok(())
                }
            },
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Float => "FLOAT",
            TokenKind::Int => "INT",
            TokenKind::Name => "NAME",
            TokenKind::String => "STRING",
            TokenKind::OParen => "OPAREN",
            TokenKind::CParen => "CPAREN",
            TokenKind::OBrace => "OBRACE",
            TokenKind::CBrace => "CBRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Period => "PERIOD",
            TokenKind::Def => "DEF",
            TokenKind::If => "IF",
            TokenKind::Fun => "FUN",
            TokenKind::Not => "NOT",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Invalid => "INVALID",
        };
        f.write_str(name)
    }
}
