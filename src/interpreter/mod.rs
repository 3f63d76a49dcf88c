pub mod context;
pub mod environment;
pub mod error;
mod expression;
pub mod library;
pub mod statement;
pub mod types;
pub mod value;

use crate::config::{EngineConfig, UnknownStatementPolicy};
use crate::report::Reporter;
use crate::string;
use crate::token::codec::TokenStreamReader;
use crate::token::{CodecError, Position, Token, TokenKind};
use environment::Environment;
use error::{RuntimeError, RuntimeErrorKind};
pub use expression::ExpressionEvaluator;
use library::{Imports, Library, OutputMethod};
use statement::Statement;
use std::io;
use types::DeclaredType;
use value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramState {
    Run,
    Terminate,
}

/// Console seen by a running program.
pub trait SystemContext {
    /// Writes without a line terminator.
    fn write(&mut self, text: &str) -> io::Result<()>;
    fn writeln(&mut self, text: &str) -> io::Result<()>;
    /// One line without its terminator, or `None` once input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Executes a persisted token stream one token at a time, dispatching every
/// `;`-terminated statement as soon as it is complete.
pub struct Interpreter<C, R> {
    environment: Environment,
    imports: Imports,
    pending: Vec<Token>,
    context: C,
    reporter: R,
    config: EngineConfig,
}

impl<C: SystemContext, R: Reporter> Interpreter<C, R> {
    pub fn new(context: C, reporter: R, config: EngineConfig) -> Self {
        Self {
            environment: Environment::new(),
            imports: Imports::new(),
            pending: Vec::new(),
            context,
            reporter,
            config,
        }
    }

    /// Runs a whole persisted stream. The first fatal error is reported once
    /// and returned; output written before it stays.
    pub fn run(&mut self, stream: &str) -> Result<(), RuntimeError> {
        self.run_tokens(TokenStreamReader::new(stream))
    }

    pub fn run_tokens<I>(&mut self, tokens: I) -> Result<(), RuntimeError>
    where
        I: IntoIterator<Item = Result<Token, CodecError>>,
    {
        match self.drive(tokens) {
            Ok(()) => Ok(()),
            Err(error) => {
                self.reporter.fatal(&error.to_string(), error.position);
                Err(error)
            }
        }
    }

    fn drive<I>(&mut self, tokens: I) -> Result<(), RuntimeError>
    where
        I: IntoIterator<Item = Result<Token, CodecError>>,
    {
        for token in tokens {
            if self.step(token?)? == ProgramState::Terminate {
                break;
            }
        }
        Ok(())
    }

    /// Feeds a single token.
    pub fn step(&mut self, token: Token) -> Result<ProgramState, RuntimeError> {
        match token.kind {
            TokenKind::Eof => {
                self.pending.clear();
                Ok(ProgramState::Terminate)
            }
            TokenKind::Using => {
                if self.config.trace {
                    self.reporter.debug(
                        &format!("Importing library {}", token.literal),
                        Some(token.position),
                    );
                }
                self.imports.import(&token.literal);
                Ok(ProgramState::Run)
            }
            TokenKind::Semicolon => {
                let tokens = std::mem::take(&mut self.pending);
                self.execute_statement(&tokens)?;
                Ok(ProgramState::Run)
            }
            _ => {
                self.pending.push(token);
                Ok(ProgramState::Run)
            }
        }
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn into_context(self) -> C {
        self.context
    }

    pub fn into_parts(self) -> (C, R) {
        (self.context, self.reporter)
    }
}

// Statements
impl<C: SystemContext, R: Reporter> Interpreter<C, R> {
    fn execute_statement(&mut self, tokens: &[Token]) -> Result<(), RuntimeError> {
        let Some(statement) = Statement::classify(tokens) else {
            return Ok(());
        };
        if self.config.trace {
            let position = tokens.first().map(|token| token.position);
            self.reporter
                .debug(&format!("Executing {}", statement.name()), position);
        }

        match statement {
            Statement::Declaration {
                ty,
                name,
                separator,
                value,
            } => self.declare(ty, name, separator, value),
            Statement::PromptedAssignment {
                name,
                library,
                prompt,
                input_type,
            } => self.prompted_assign(name, library, prompt, input_type),
            Statement::Assignment { name, value } => self.assign(name, value),
            Statement::LibraryCall {
                library,
                method,
                argument,
            } => self.library_call(library, method, argument),
            Statement::LegacyPrint { value } => self.legacy_print(value),
            Statement::Unrecognized(first) => match self.config.unknown_statements {
                UnknownStatementPolicy::Ignore => Ok(()),
                UnknownStatementPolicy::Fatal => Err(RuntimeError::new(
                    RuntimeErrorKind::UnknownStatement(first.kind.name().into()),
                    first.position,
                )),
            },
        }
    }

    fn declare(
        &mut self,
        ty: &Token,
        name: &Token,
        separator: &Token,
        value: &[Token],
    ) -> Result<(), RuntimeError> {
        if !ty.is(TokenKind::Ident) || !name.is(TokenKind::Ident) {
            return Err(RuntimeError::new(
                RuntimeErrorKind::MalformedDeclaration,
                name.position,
            ));
        }
        if self.environment.contains(&name.literal) {
            return Err(RuntimeError::new(
                RuntimeErrorKind::AlreadyDeclared(name.literal.clone()),
                name.position,
            ));
        }
        if !separator.is(TokenKind::Equal) {
            return Err(RuntimeError::new(
                RuntimeErrorKind::MissingEqual(name.literal.clone()),
                separator.position,
            ));
        }

        let value = self.evaluate(value)?;
        let declared: DeclaredType = ty.literal.parse().map_err(|_| {
            RuntimeError::new(
                RuntimeErrorKind::UnknownType(ty.literal.clone()),
                ty.position,
            )
        })?;
        Self::check_type(name, declared, &value)?;
        self.environment.declare(&name.literal, declared, value);
        Ok(())
    }

    fn assign(&mut self, name: &Token, value: &[Token]) -> Result<(), RuntimeError> {
        let declared = self.declared_type(name)?;
        let value = self.evaluate(value)?;
        Self::check_type(name, declared, &value)?;
        self.store(name, value)
    }

    fn prompted_assign(
        &mut self,
        name: &Token,
        library: &Token,
        prompt: &Token,
        input_type: &Token,
    ) -> Result<(), RuntimeError> {
        let declared = self.declared_type(name)?;
        self.require(Library::Output, library)?;

        let position = prompt.position;
        console(self.context.write(&format!("{} ", prompt.literal)), position)?;
        let line = console(self.context.read_line(), position)?
            .ok_or_else(|| RuntimeError::new(RuntimeErrorKind::InputExhausted, position))?;

        let value = match input_type.literal.to_ascii_uppercase().as_str() {
            "INT" => line.parse::<i32>().map(Value::Int).map_err(|_| {
                RuntimeError::new(
                    RuntimeErrorKind::InvalidIntegerInput(line.as_str().into()),
                    input_type.position,
                )
            })?,
            "STRING" => Value::Text(line.into()),
            _ => {
                return Err(RuntimeError::new(
                    RuntimeErrorKind::UnsupportedInputType(input_type.literal.clone()),
                    input_type.position,
                ))
            }
        };
        Self::check_type(name, declared, &value)?;
        self.store(name, value)
    }

    fn library_call(
        &mut self,
        library: &Token,
        method: OutputMethod,
        argument: &Token,
    ) -> Result<(), RuntimeError> {
        self.require(Library::Output, library)?;

        let text = match argument.kind {
            TokenKind::StringLiteral => argument.literal.to_string(),
            TokenKind::Ident if argument.literal != Library::Output.name() => self
                .environment
                .value(&argument.literal)
                .map(Value::to_string)
                .ok_or_else(|| {
                    RuntimeError::new(
                        RuntimeErrorKind::UndefinedReference(argument.literal.clone()),
                        argument.position,
                    )
                })?,
            _ => self.evaluate(std::slice::from_ref(argument))?.to_string(),
        };

        let text = self.interpolate(&text);
        let written = match method {
            OutputMethod::Print => self.context.write(&text),
            OutputMethod::Println => self.context.writeln(&text),
        };
        console(written, library.position)
    }

    fn legacy_print(&mut self, value: &Token) -> Result<(), RuntimeError> {
        let text = match self.environment.value(&value.literal) {
            Some(stored) => stored.to_string(),
            None => value.literal.to_string(),
        };
        let text = self.interpolate(&text);
        console(self.context.writeln(&text), value.position)
    }
}

// Helpers
impl<C: SystemContext, R: Reporter> Interpreter<C, R> {
    fn evaluate(&self, tokens: &[Token]) -> Result<Value, RuntimeError> {
        ExpressionEvaluator::evaluate(tokens, &self.environment, &self.imports)
    }

    fn interpolate(&self, text: &str) -> String {
        string::interpolate(text, |name| {
            self.environment.value(name).map(Value::to_string)
        })
    }

    fn require(&self, library: Library, token: &Token) -> Result<(), RuntimeError> {
        if self.imports.contains(library) {
            return Ok(());
        }
        Err(RuntimeError::new(
            RuntimeErrorKind::NotImported(library.name()),
            token.position,
        ))
    }

    fn declared_type(&self, name: &Token) -> Result<DeclaredType, RuntimeError> {
        self.environment
            .access(&name.literal)
            .map(|variable| variable.ty)
            .ok_or_else(|| {
                RuntimeError::new(
                    RuntimeErrorKind::Undeclared(name.literal.clone()),
                    name.position,
                )
            })
    }

    fn check_type(name: &Token, declared: DeclaredType, value: &Value) -> Result<(), RuntimeError> {
        if declared.accepts(value) {
            return Ok(());
        }
        Err(RuntimeError::new(
            RuntimeErrorKind::TypeMismatch {
                name: name.literal.clone(),
                expected: declared.name(),
                actual: value.type_name(),
            },
            name.position,
        ))
    }

    fn store(&mut self, name: &Token, value: Value) -> Result<(), RuntimeError> {
        self.environment.assign(&name.literal, value).map_err(|()| {
            RuntimeError::new(
                RuntimeErrorKind::Undeclared(name.literal.clone()),
                name.position,
            )
        })
    }
}

fn console<T>(result: io::Result<T>, position: Position) -> Result<T, RuntimeError> {
    result.map_err(|error| {
        RuntimeError::new(
            RuntimeErrorKind::Console(error.to_string().into()),
            position,
        )
    })
}
