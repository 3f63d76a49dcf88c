use super::library::OutputMethod;
use crate::config::OUTPUT_LIBRARY;
use crate::token::{Token, TokenKind};

/// One `;`-terminated statement, recognised by the kinds of its tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement<'t> {
    /// `var(type) name = expr`
    Declaration {
        ty: &'t Token,
        name: &'t Token,
        separator: &'t Token,
        value: &'t [Token],
    },
    /// `name = Output.input("prompt")(TYPE)`
    PromptedAssignment {
        name: &'t Token,
        library: &'t Token,
        prompt: &'t Token,
        input_type: &'t Token,
    },
    /// `name = expr`
    Assignment { name: &'t Token, value: &'t [Token] },
    /// `Output.print(arg)` and `Output.println(arg)`
    LibraryCall {
        library: &'t Token,
        method: OutputMethod,
        argument: &'t Token,
    },
    /// `print value`
    LegacyPrint { value: &'t Token },
    Unrecognized(&'t Token),
}

impl<'t> Statement<'t> {
    /// Returns `None` for an empty statement.
    pub fn classify(tokens: &'t [Token]) -> Option<Self> {
        use TokenKind as K;

        let statement = match tokens {
            [] => return None,
            [var, ty, name, separator, value @ ..]
                if var.is(K::KeywordVar) && !value.is_empty() =>
            {
                Statement::Declaration {
                    ty,
                    name,
                    separator,
                    value,
                }
            }
            [name, equal, library, dot, input, open, prompt, close, type_open, input_type, type_close]
                if name.is(K::Ident)
                    && equal.is(K::Equal)
                    && library.is_ident(OUTPUT_LIBRARY)
                    && dot.is(K::Dot)
                    && input.is_ident("input")
                    && open.is(K::LeftParenthesis)
                    && prompt.is(K::StringLiteral)
                    && close.is(K::RightParenthesis)
                    && type_open.is(K::LeftParenthesis)
                    && input_type.is(K::Ident)
                    && type_close.is(K::RightParenthesis) =>
            {
                Statement::PromptedAssignment {
                    name,
                    library,
                    prompt,
                    input_type,
                }
            }
            [name, equal, value @ ..]
                if name.is(K::Ident) && equal.is(K::Equal) && !value.is_empty() =>
            {
                Statement::Assignment { name, value }
            }
            [library, dot, method, open, argument, close]
                if library.is_ident(OUTPUT_LIBRARY)
                    && dot.is(K::Dot)
                    // `print` lexes as the PRINT keyword.
                    && matches!(method.kind, K::Ident | K::KeywordPrint)
                    && open.is(K::LeftParenthesis)
                    && close.is(K::RightParenthesis) =>
            {
                match OutputMethod::from_name(&method.literal) {
                    Some(method) => Statement::LibraryCall {
                        library,
                        method,
                        argument,
                    },
                    None => Statement::Unrecognized(library),
                }
            }
            [print, value] if print.is(K::KeywordPrint) => Statement::LegacyPrint { value },
            [first, ..] => Statement::Unrecognized(first),
        };
        Some(statement)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Statement::Declaration { .. } => "declaration",
            Statement::PromptedAssignment { .. } => "prompted assignment",
            Statement::Assignment { .. } => "assignment",
            Statement::LibraryCall { .. } => "library call",
            Statement::LegacyPrint { .. } => "print",
            Statement::Unrecognized(_) => "unrecognized",
        }
    }
}
