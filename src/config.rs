//! Language constants and the interpreter's behaviour switches.

/// Language name
pub const LANG_NAME: &str = "CapyCode";

/// Source file extension
pub const SOURCE_EXTENSION: &str = "cy";

/// Persisted token stream extension
pub const STREAM_EXTENSION: &str = "cyc";

/// Name of the console library enabled by `using Output`
pub const OUTPUT_LIBRARY: &str = "Output";

/// Version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// What the interpreter does with a statement whose shape it does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownStatementPolicy {
    /// Skip it silently.
    #[default]
    Ignore,
    /// Abort the run.
    Fatal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineConfig {
    pub unknown_statements: UnknownStatementPolicy,
    /// Report every dispatched statement at debug level.
    pub trace: bool,
}

impl EngineConfig {
    pub fn strict() -> Self {
        Self {
            unknown_statements: UnknownStatementPolicy::Fatal,
            ..Self::default()
        }
    }
}
