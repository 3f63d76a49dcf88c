use super::value::ValueError;
use crate::token::{CodecError, Position};
use compact_str::CompactString;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RuntimeErrorKind {
    #[error("Variable '{0}' is already declared")]
    AlreadyDeclared(CompactString),
    #[error("Expected '=' after declaration of variable '{0}'")]
    MissingEqual(CompactString),
    #[error("Malformed variable declaration")]
    MalformedDeclaration,
    #[error("Unknown type '{0}'")]
    UnknownType(CompactString),
    #[error("Variable '{0}' is not declared")]
    Undeclared(CompactString),
    #[error("Undefined variable: {0}")]
    UndefinedReference(CompactString),
    #[error("Type mismatch: variable '{name}' is of type {expected}, but tried to assign {actual}")]
    TypeMismatch {
        name: CompactString,
        expected: &'static str,
        actual: &'static str,
    },
    #[error("Library '{0}' not imported. Use `using {0};`")]
    NotImported(&'static str),
    #[error("Invalid use of '{0}' as variable in expression")]
    LibraryAsValue(&'static str),
    #[error("Unsupported input type: {0}")]
    UnsupportedInputType(CompactString),
    #[error("Invalid integer input '{0}'")]
    InvalidIntegerInput(CompactString),
    #[error("No input line available")]
    InputExhausted,
    #[error("Console I/O failed: {0}")]
    Console(CompactString),
    #[error("Invalid integer literal '{0}'")]
    InvalidIntegerLiteral(CompactString),
    #[error("Invalid floating literal '{0}'")]
    InvalidFloatLiteral(CompactString),
    #[error("Empty expression")]
    EmptyExpression,
    #[error("Operator '{0}' is missing an operand")]
    MissingOperand(char),
    #[error("Malformed expression: {0} values left")]
    DanglingOperands(usize),
    #[error("Runtime error: {0}")]
    Evaluation(#[from] ValueError),
    #[error("Unknown statement starting with {0}")]
    UnknownStatement(CompactString),
    #[error("Malformed token stream: {0}")]
    Codec(#[from] CodecError),
}

#[derive(Debug, Error, Clone, PartialEq)]
#[error("{kind}")]
pub struct RuntimeError {
    #[source]
    pub kind: RuntimeErrorKind,
    pub position: Option<Position>,
}

impl RuntimeError {
    pub fn new(kind: RuntimeErrorKind, position: Position) -> Self {
        Self {
            kind,
            position: Some(position),
        }
    }
}

impl From<CodecError> for RuntimeError {
    fn from(error: CodecError) -> Self {
        let position = Position::line_only(error.line);
        Self::new(RuntimeErrorKind::Codec(error), position)
    }
}
