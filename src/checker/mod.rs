mod error;

use crate::report::Reporter;
use crate::token::{Token, TokenKind};
use compact_str::CompactString;
pub use error::{SemanticError, SemanticErrorKind};
use std::collections::HashSet;

/// Static declare-before-use pass over a token sequence.
///
/// Only token adjacency is inspected; no expression is evaluated.
#[derive(Debug, Default)]
pub struct SemanticChecker {
    declared: HashSet<CompactString>,
}

impl SemanticChecker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check<R: Reporter + ?Sized>(
        mut self,
        tokens: &[Token],
        reporter: &mut R,
    ) -> Result<(), SemanticError> {
        if let Err(error) = self.scan(tokens) {
            reporter.fatal(&error.to_string(), Some(error.position));
            return Err(error);
        }
        reporter.info("Semantic analysis completed successfully", None);
        Ok(())
    }

    fn scan(&mut self, tokens: &[Token]) -> Result<(), SemanticError> {
        let mut index = 0;
        while index < tokens.len() {
            let token = &tokens[index];
            match token.kind {
                TokenKind::KeywordVar => {
                    self.declare(token, &tokens[index + 1..])?;
                    // VAR, type, name, EQUAL
                    index += 4;
                    continue;
                }
                TokenKind::Ident => {
                    let assigns = tokens
                        .get(index + 1)
                        .is_some_and(|next| next.is(TokenKind::Equal));
                    if assigns && !self.declared.contains(&token.literal) {
                        return Err(SemanticError {
                            kind: SemanticErrorKind::Undeclared(token.literal.clone()),
                            position: token.position,
                        });
                    }
                }
                _ => {}
            }
            index += 1;
        }
        Ok(())
    }

    /// `rest` starts right after the VAR token.
    fn declare(&mut self, var: &Token, rest: &[Token]) -> Result<(), SemanticError> {
        let [ty, name, equal, _, ..] = rest else {
            return Err(SemanticError {
                kind: SemanticErrorKind::IncompleteDeclaration,
                position: var.position,
            });
        };
        if !ty.is(TokenKind::Ident) || !name.is(TokenKind::Ident) || !equal.is(TokenKind::Equal) {
            return Err(SemanticError {
                kind: SemanticErrorKind::InvalidDeclaration,
                position: name.position,
            });
        }
        if !self.declared.insert(name.literal.clone()) {
            return Err(SemanticError {
                kind: SemanticErrorKind::AlreadyDeclared(name.literal.clone()),
                position: name.position,
            });
        }
        Ok(())
    }
}
