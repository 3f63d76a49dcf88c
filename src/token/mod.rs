pub mod codec;
mod error;

use compact_str::CompactString;
pub use error::{CodecError, CodecErrorKind};
use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;
use std::sync::LazyLock;

/// The hashmap for keywords that map directly onto a token kind.
///
/// `using` and `var` are absent on purpose: the lexer rewrites both.
pub static KEYWORD_HASHMAP: LazyLock<HashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    map.insert("true", TokenKind::Boolean);
    map.insert("false", TokenKind::Boolean);
    map.insert("print", TokenKind::KeywordPrint);
    map.insert("if", TokenKind::KeywordIf);
    map.insert("else", TokenKind::KeywordElse);
    map.insert("elseif", TokenKind::KeywordElseIf);
    map.insert("for", TokenKind::KeywordFor);
    map.insert("while", TokenKind::KeywordWhile);
    map
});

/// A location in a source file or token stream.
///
/// A column of zero means the column is unknown, which is the case for every
/// token read back from a persisted stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    pub const fn line_only(line: u32) -> Self {
        Self { line, column: 0 }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.column == 0 {
            write!(f, "line {}", self.line)
        } else {
            write!(f, "{}:{}", self.line, self.column)
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords
    KeywordVar,
    KeywordPrint,
    KeywordIf,
    KeywordElse,
    KeywordElseIf,
    KeywordFor,
    KeywordWhile,

    // Operators and punctuation
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Equal,
    Semicolon,
    Dot,
    LeftParenthesis,
    RightParenthesis,

    // Imports
    Using,

    // Literals
    Ident,
    NumericLiteral,
    FloatLiteral,
    Boolean,
    CharLiteral,
    StringLiteral,

    // End of file.
    Eof,
}

impl TokenKind {
    pub const ALL: [TokenKind; 25] = [
        TokenKind::KeywordVar,
        TokenKind::KeywordPrint,
        TokenKind::KeywordIf,
        TokenKind::KeywordElse,
        TokenKind::KeywordElseIf,
        TokenKind::KeywordFor,
        TokenKind::KeywordWhile,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::Percent,
        TokenKind::Equal,
        TokenKind::Semicolon,
        TokenKind::Dot,
        TokenKind::LeftParenthesis,
        TokenKind::RightParenthesis,
        TokenKind::Using,
        TokenKind::Ident,
        TokenKind::NumericLiteral,
        TokenKind::FloatLiteral,
        TokenKind::Boolean,
        TokenKind::CharLiteral,
        TokenKind::StringLiteral,
        TokenKind::Eof,
    ];

    /// The tag used for this kind in a persisted token stream.
    pub const fn name(&self) -> &'static str {
        match self {
            TokenKind::KeywordVar => "VAR",
            TokenKind::KeywordPrint => "PRINT",
            TokenKind::KeywordIf => "IF",
            TokenKind::KeywordElse => "ELSE",
            TokenKind::KeywordElseIf => "ELSEIF",
            TokenKind::KeywordFor => "FOR",
            TokenKind::KeywordWhile => "WHILE",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "STAR",
            TokenKind::Slash => "SLASH",
            TokenKind::Percent => "PERCENT",
            TokenKind::Equal => "EQUAL",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Dot => "DOT",
            TokenKind::LeftParenthesis => "LPAREN",
            TokenKind::RightParenthesis => "RPAREN",
            TokenKind::Using => "USING",
            TokenKind::Ident => "IDENTIFIER",
            TokenKind::NumericLiteral => "NUMBER",
            TokenKind::FloatLiteral => "FLOAT",
            TokenKind::Boolean => "BOOLEAN",
            TokenKind::CharLiteral => "CHAR",
            TokenKind::StringLiteral => "STRING",
            TokenKind::Eof => "EOF",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for TokenKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenKind::ALL
            .iter()
            .find(|kind| kind.name() == s)
            .copied()
            .ok_or(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: CompactString,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<CompactString>, position: Position) -> Self {
        Self {
            kind,
            literal: literal.into(),
            position,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// True for an identifier with exactly the given text.
    pub fn is_ident(&self, name: &str) -> bool {
        self.kind == TokenKind::Ident && self.literal == name
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}('{}') at {}", self.kind, self.literal, self.position)
    }
}
