use super::{LexicalError, Token};
use crate::token::codec::encode_token;
use crate::string::escape;
use ariadne::{Color, Label, Report, ReportKind, Source};
use std::path::Path;

/// Interface for creating new token formatters.
pub trait TokenFormatter {
    /// Formats a token into a string.
    fn format(&self, token: &Token) -> String;
    /// Formats a lexer error into a string.
    fn format_lexical_error(&self, error: &LexicalError) -> String;
}

/// `line:column KIND literal`, one token per line.
pub struct BasicFormatter;

impl TokenFormatter for BasicFormatter {
    fn format(&self, token: &Token) -> String {
        format!(
            "{} {} {}",
            token.position,
            token.kind,
            escape(&token.literal)
        )
    }

    fn format_lexical_error(&self, error: &LexicalError) -> String {
        format!("[{}] Error: {}", error.position, error)
    }
}

pub struct DebugFormatter;

impl TokenFormatter for DebugFormatter {
    fn format(&self, token: &Token) -> String {
        format!("{token:?}")
    }

    fn format_lexical_error(&self, error: &LexicalError) -> String {
        format!("{error:?}")
    }
}

/// Prints tokens exactly as they are persisted and renders lexical errors
/// against the source text.
pub struct PrettyFormatter<'src> {
    text: &'src str,
    path: &'src Path,
}

impl<'src> PrettyFormatter<'src> {
    pub fn new(text: &'src str, path: &'src Path) -> Self {
        Self { text, path }
    }
}

impl<'src> TokenFormatter for PrettyFormatter<'src> {
    fn format(&self, token: &Token) -> String {
        encode_token(token)
    }

    fn format_lexical_error(&self, error: &LexicalError) -> String {
        let path = self.path.to_string_lossy();
        let path: &str = &path;
        let mut output = std::io::Cursor::new(Vec::new());
        let span = error.span.start.min(self.text.len())..error.span.end.min(self.text.len());
        let written = Report::build(ReportKind::Error, (path, span.clone()))
            .with_code(error.code())
            .with_message(error.to_string())
            .with_label(
                Label::new((path, span))
                    .with_message(format!("at {}", error.position))
                    .with_color(Color::BrightRed),
            )
            .finish()
            .write((path, Source::from(self.text)), &mut output);
        match written {
            Ok(()) => String::from_utf8_lossy(&output.into_inner()).into_owned(),
            Err(_) => BasicFormatter.format_lexical_error(error),
        }
    }
}
