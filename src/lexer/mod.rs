mod cursor;
mod error;
pub mod formatter;

use crate::report::Reporter;
use crate::token::{Position, Token, TokenKind, KEYWORD_HASHMAP};
use compact_str::CompactString;
use cursor::SourceChar;
pub use error::{LexicalError, LexicalErrorKind};
use std::iter::Peekable;
use std::str::CharIndices;

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[derive(Debug)]
pub struct Lexer<'src> {
    source: &'src str,
    chars: Peekable<CharIndices<'src>>,
    line: u32,
    column: u32,
    // `var` emits the upper-cased type name right after itself.
    pending: Option<Token>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            line: 1,
            column: 1,
            pending: None,
        }
    }

    /// Lexes the whole source. The last token is always EOF.
    pub fn tokenize<R: Reporter + ?Sized>(
        mut self,
        reporter: &mut R,
    ) -> Result<Vec<Token>, LexicalError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token(reporter)?;
            let is_eof = token.is(TokenKind::Eof);
            tokens.push(token);
            if is_eof {
                return Ok(tokens);
            }
        }
    }

    pub fn next_token<R: Reporter + ?Sized>(
        &mut self,
        reporter: &mut R,
    ) -> Result<Token, LexicalError> {
        if let Some(token) = self.pending.take() {
            return Ok(token);
        }

        loop {
            let Some(c) = self.next_char() else {
                return Ok(Token::new(TokenKind::Eof, "", self.here()));
            };

            let just = |kind: TokenKind| -> Result<Token, LexicalError> {
                Ok(Token::new(kind, c.value.to_string(), c.position))
            };

            return match c.value {
                // Single character tokens
                '+' => just(TokenKind::Plus),
                '-' => just(TokenKind::Minus),
                '*' => just(TokenKind::Star),
                '/' => just(TokenKind::Slash),
                '%' => just(TokenKind::Percent),
                '=' => just(TokenKind::Equal),
                ';' => just(TokenKind::Semicolon),
                '.' => just(TokenKind::Dot),
                '(' => just(TokenKind::LeftParenthesis),
                ')' => just(TokenKind::RightParenthesis),
                '"' => self.lex_string(c, reporter),
                '\'' => self.lex_char(c),
                v if v.is_whitespace() => continue,
                v if v.is_ascii_digit() => Ok(self.lex_number(c)),
                v if is_ident_start(v) => self.lex_word(c),
                v => {
                    reporter.warning(&format!("Unknown character: '{v}'"), Some(c.position));
                    continue;
                }
            };
        }
    }
}

// Cursor
impl<'src> Lexer<'src> {
    fn next_char(&mut self) -> Option<SourceChar> {
        let (offset, value) = self.chars.next()?;
        let c = SourceChar {
            value,
            offset,
            position: self.here(),
        };
        if value == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    fn offset(&mut self) -> usize {
        self.chars
            .peek()
            .map(|&(offset, _)| offset)
            .unwrap_or(self.source.len())
    }

    fn here(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.next_char();
        }
    }

    /// Consumes identifier characters and returns the word starting at `start`.
    fn read_word(&mut self, start: usize) -> &'src str {
        while self.peek().is_some_and(is_ident_continue) {
            self.next_char();
        }
        let end = self.offset();
        &self.source[start..end]
    }

    fn error(&mut self, kind: LexicalErrorKind, start: SourceChar) -> LexicalError {
        LexicalError {
            kind,
            position: start.position,
            span: start.offset..self.offset().max(start.next_offset()),
        }
    }
}

// Literals and words
impl<'src> Lexer<'src> {
    fn lex_string<R: Reporter + ?Sized>(
        &mut self,
        open: SourceChar,
        reporter: &mut R,
    ) -> Result<Token, LexicalError> {
        let mut value = CompactString::default();
        loop {
            let Some(c) = self.next_char() else {
                return Err(self.error(LexicalErrorKind::UnclosedString, open));
            };
            match c.value {
                '"' => return Ok(Token::new(TokenKind::StringLiteral, value, open.position)),
                '\\' => {
                    let Some(escaped) = self.next_char() else {
                        return Err(self.error(LexicalErrorKind::DanglingEscape, open));
                    };
                    match escaped.value {
                        'n' => value.push('\n'),
                        't' => value.push('\t'),
                        'r' => value.push('\r'),
                        '"' => value.push('"'),
                        '\\' => value.push('\\'),
                        other => {
                            reporter.warning(
                                &format!("Unknown escape sequence \\{other} in string literal"),
                                Some(escaped.position),
                            );
                            value.push('\\');
                            value.push(other);
                        }
                    }
                }
                other => value.push(other),
            }
        }
    }

    fn lex_char(&mut self, open: SourceChar) -> Result<Token, LexicalError> {
        let value = match self.next_char() {
            Some(c) if c.value != '\'' => c.value,
            _ => return Err(self.error(LexicalErrorKind::EmptyChar, open)),
        };
        match self.next_char() {
            Some(close) if close.value == '\'' => Ok(Token::new(
                TokenKind::CharLiteral,
                value.to_string(),
                open.position,
            )),
            _ => Err(self.error(LexicalErrorKind::UnclosedChar, open)),
        }
    }

    fn lex_number(&mut self, first: SourceChar) -> Token {
        let mut has_point = false;
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.next_char();
            } else if c == '.' && !has_point {
                has_point = true;
                self.next_char();
            } else {
                break;
            }
        }
        let end = self.offset();
        let lexeme = &self.source[first.offset..end];
        let kind = if has_point {
            TokenKind::FloatLiteral
        } else {
            TokenKind::NumericLiteral
        };
        Token::new(kind, lexeme, first.position)
    }

    fn lex_word(&mut self, first: SourceChar) -> Result<Token, LexicalError> {
        let word = self.read_word(first.offset);
        match word {
            "using" => Ok(self.lex_using(first)),
            "var" => self.lex_var(first),
            _ => {
                let kind = KEYWORD_HASHMAP
                    .get(word)
                    .copied()
                    .unwrap_or(TokenKind::Ident);
                Ok(Token::new(kind, word, first.position))
            }
        }
    }

    /// `using Name` becomes a single USING token carrying `Name`.
    fn lex_using(&mut self, first: SourceChar) -> Token {
        self.skip_whitespace();
        match self.peek() {
            Some(c) if is_ident_start(c) => {
                let start = self.offset();
                let library = self.read_word(start);
                Token::new(TokenKind::Using, library, first.position)
            }
            _ => Token::new(TokenKind::Using, "using", first.position),
        }
    }

    /// `var(type)` and `var type` both emit VAR followed by an IDENTIFIER
    /// holding the upper-cased type name.
    fn lex_var(&mut self, first: SourceChar) -> Result<Token, LexicalError> {
        let var = Token::new(TokenKind::KeywordVar, "var", first.position);
        self.skip_whitespace();
        match self.peek() {
            Some('(') => {
                let Some(open) = self.next_char() else {
                    return Ok(var);
                };
                let position = self.here();
                let mut type_name = String::new();
                loop {
                    let Some(c) = self.next_char() else {
                        return Err(self.error(LexicalErrorKind::UnclosedTypeAnnotation, open));
                    };
                    match c.value {
                        ')' => break,
                        v if v.is_alphabetic() => type_name.push(v),
                        v => {
                            return Err(
                                self.error(LexicalErrorKind::InvalidTypeCharacter(v), c)
                            );
                        }
                    }
                }
                self.pending = Some(Token::new(
                    TokenKind::Ident,
                    type_name.to_uppercase(),
                    position,
                ));
            }
            Some(c) if is_ident_start(c) => {
                let position = self.here();
                let start = self.offset();
                let type_name = self.read_word(start).to_uppercase();
                self.pending = Some(Token::new(TokenKind::Ident, type_name, position));
            }
            _ => {}
        }
        Ok(var)
    }
}
