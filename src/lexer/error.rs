use crate::token::Position;
use std::ops::Range;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LexicalErrorKind {
    #[error("Unterminated string literal")]
    UnclosedString,
    #[error("Unterminated escape sequence in string literal")]
    DanglingEscape,
    #[error("Empty character literal")]
    EmptyChar,
    #[error("Unterminated character literal")]
    UnclosedChar,
    #[error("Invalid character '{0}' in type declaration")]
    InvalidTypeCharacter(char),
    #[error("Expected closing ')' in variable declaration")]
    UnclosedTypeAnnotation,
}

#[derive(Debug, Error, Clone, PartialEq)]
#[error("{kind}")]
pub struct LexicalError {
    #[source]
    pub kind: LexicalErrorKind,
    pub position: Position,
    /// Byte range into the source text.
    pub span: Range<usize>,
}

impl LexicalError {
    pub fn code(&self) -> &'static str {
        match self.kind {
            LexicalErrorKind::UnclosedString => "LX001",
            LexicalErrorKind::DanglingEscape => "LX002",
            LexicalErrorKind::EmptyChar => "LX003",
            LexicalErrorKind::UnclosedChar => "LX004",
            LexicalErrorKind::InvalidTypeCharacter(_) => "LX005",
            LexicalErrorKind::UnclosedTypeAnnotation => "LX006",
        }
    }
}
