use compact_str::CompactString;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CodecErrorKind {
    #[error("Unknown token kind '{0}'")]
    UnknownKind(CompactString),
    #[error("Malformed token line '{0}'")]
    MalformedLine(CompactString),
}

#[derive(Debug, Error, Clone, PartialEq)]
#[error("{kind}")]
pub struct CodecError {
    #[source]
    pub kind: CodecErrorKind,
    /// 1-based line of the token stream.
    pub line: u32,
}
