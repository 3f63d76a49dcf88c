mod formatter;

use crate::token::Position;
pub use formatter::{format_diagnostic, Timestamp};
use owo_colors::OwoColorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warning,
    Fatal,
}

impl Level {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Fatal => "fatal",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Receives diagnostics from the lexer, the checker and the interpreter.
///
/// Reporting a fatal message does not stop anything by itself: the caller
/// reports and then returns its error.
pub trait Reporter {
    fn report(&mut self, level: Level, message: &str, position: Option<Position>);

    fn info(&mut self, message: &str, position: Option<Position>) {
        self.report(Level::Info, message, position);
    }

    fn warning(&mut self, message: &str, position: Option<Position>) {
        self.report(Level::Warning, message, position);
    }

    fn fatal(&mut self, message: &str, position: Option<Position>) {
        self.report(Level::Fatal, message, position);
    }

    fn debug(&mut self, message: &str, position: Option<Position>) {
        self.report(Level::Debug, message, position);
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, level: Level, message: &str, position: Option<Position>) {
        (**self).report(level, message, position);
    }
}

/// Writes timestamped diagnostics to standard error.
pub struct StderrReporter {
    colored: bool,
    show_debug: bool,
}

impl StderrReporter {
    pub fn new(colored: bool, show_debug: bool) -> Self {
        Self {
            colored,
            show_debug,
        }
    }

    fn level_tag(&self, level: Level) -> String {
        let tag = format!("[{level}]");
        if !self.colored {
            return tag;
        }
        match level {
            Level::Debug => tag.cyan().to_string(),
            Level::Info => tag.green().to_string(),
            Level::Warning => tag.yellow().to_string(),
            Level::Fatal => tag.red().bold().to_string(),
        }
    }
}

impl Default for StderrReporter {
    fn default() -> Self {
        Self::new(true, false)
    }
}

impl Reporter for StderrReporter {
    fn report(&mut self, level: Level, message: &str, position: Option<Position>) {
        if level == Level::Debug && !self.show_debug {
            return;
        }
        let timestamp = Timestamp::now();
        let line = format_diagnostic(&timestamp, &self.level_tag(level), message, position);
        eprintln!("{line}");
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
    pub position: Option<Position>,
}

/// Keeps every diagnostic in memory.
#[derive(Debug, Default)]
pub struct BufferedReporter {
    diagnostics: Vec<Diagnostic>,
}

impl BufferedReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn at_level(&self, level: Level) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.level == level)
    }

    pub fn into_data(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl Reporter for BufferedReporter {
    fn report(&mut self, level: Level, message: &str, position: Option<Position>) {
        self.diagnostics.push(Diagnostic {
            level,
            message: message.to_string(),
            position,
        });
    }
}
