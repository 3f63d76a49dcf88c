use crate::token::Position;
use compact_str::CompactString;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SemanticErrorKind {
    #[error("Incomplete variable declaration: expected format 'var(type) name = value'")]
    IncompleteDeclaration,
    #[error("Invalid syntax in variable declaration")]
    InvalidDeclaration,
    #[error("Variable '{0}' is already declared")]
    AlreadyDeclared(CompactString),
    #[error("Variable '{0}' is not declared")]
    Undeclared(CompactString),
}

#[derive(Debug, Error, Clone, PartialEq)]
#[error("{kind}")]
pub struct SemanticError {
    #[source]
    pub kind: SemanticErrorKind,
    pub position: Position,
}

impl SemanticError {
    pub fn code(&self) -> &'static str {
        match self.kind {
            SemanticErrorKind::IncompleteDeclaration => "SM001",
            SemanticErrorKind::InvalidDeclaration => "SM002",
            SemanticErrorKind::AlreadyDeclared(_) => "SM003",
            SemanticErrorKind::Undeclared(_) => "SM004",
        }
    }
}
