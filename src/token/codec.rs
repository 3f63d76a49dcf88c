//! The persisted token stream.
//!
//! Each token is written as one line of the form `KIND('escaped-literal')`.
//! Reading is lazy so that the interpreter can consume the stream one line at
//! a time.

use super::{CodecError, CodecErrorKind, Position, Token, TokenKind};
use crate::string::{escape, unescape};
use std::io::{self, Write};
use std::str::Lines;

/// Formats a single token as a stream line, without the line terminator.
pub fn encode_token(token: &Token) -> String {
    format!("{}('{}')", token.kind, escape(&token.literal))
}

/// Formats a whole token sequence, one token per line.
pub fn encode_tokens(tokens: &[Token]) -> String {
    let mut buffer = String::new();
    for token in tokens {
        buffer.push_str(&encode_token(token));
        buffer.push('\n');
    }
    buffer
}

pub fn write_tokens<W: Write>(writer: &mut W, tokens: &[Token]) -> io::Result<()> {
    for token in tokens {
        writeln!(writer, "{}", encode_token(token))?;
    }
    writer.flush()
}

/// Decodes one stream line. `line` is the 1-based line number the token is
/// positioned at.
pub fn decode_line(text: &str, line: u32) -> Result<Token, CodecError> {
    let malformed = || CodecError {
        kind: CodecErrorKind::MalformedLine(text.into()),
        line,
    };

    let (kind, rest) = text.split_once("('").ok_or_else(malformed)?;
    let payload = rest.strip_suffix("')").ok_or_else(malformed)?;
    let kind: TokenKind = kind.parse().map_err(|_| CodecError {
        kind: CodecErrorKind::UnknownKind(kind.into()),
        line,
    })?;

    let payload = match kind {
        TokenKind::StringLiteral => payload
            .strip_prefix('"')
            .and_then(|p| p.strip_suffix('"'))
            .unwrap_or(payload),
        _ => payload,
    };

    Ok(Token::new(kind, unescape(payload), Position::line_only(line)))
}

/// Lazily decodes a persisted token stream, skipping blank lines.
pub struct TokenStreamReader<'src> {
    lines: Lines<'src>,
    line: u32,
}

impl<'src> TokenStreamReader<'src> {
    pub fn new(stream: &'src str) -> Self {
        Self {
            lines: stream.lines(),
            line: 0,
        }
    }
}

impl<'src> Iterator for TokenStreamReader<'src> {
    type Item = Result<Token, CodecError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let text = self.lines.next()?;
            self.line += 1;
            let text = text.trim();
            if text.is_empty() {
                continue;
            }
            return Some(decode_line(text, self.line));
        }
    }
}

/// Eagerly decodes a whole stream.
pub fn decode_tokens(stream: &str) -> Result<Vec<Token>, CodecError> {
    TokenStreamReader::new(stream).collect()
}
