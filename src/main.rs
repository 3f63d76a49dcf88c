use capycode::checker::SemanticChecker;
use capycode::config::{
    EngineConfig, UnknownStatementPolicy, LANG_NAME, SOURCE_EXTENSION, STREAM_EXTENSION, VERSION,
};
use capycode::interpreter::context::StdioContext;
use capycode::interpreter::error::RuntimeErrorKind;
use capycode::interpreter::Interpreter;
use capycode::lexer::formatter::{BasicFormatter, DebugFormatter, PrettyFormatter, TokenFormatter};
use capycode::lexer::Lexer;
use capycode::report::{Reporter, StderrReporter};
use capycode::token::codec::write_tokens;
use capycode::token::{Token, TokenKind};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};
use std::fs::{read_to_string, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const EXIT_DATA_ERROR: u8 = 65;
const EXIT_RUNTIME_ERROR: u8 = 70;

#[derive(Debug, Parser)]
#[clap(name = "capycode", version = VERSION, about = "Compiler and interpreter for CapyCode")]
pub struct CLArgs {
    /// Print diagnostics without colour.
    #[clap(long, global = true)]
    pub no_color: bool,
    #[clap(subcommand)]
    pub routine: Option<CapyCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CapyCommand {
    /// Compile a source file into a token stream file.
    #[clap(short_flag = 'c')]
    Compile {
        path: PathBuf,
        /// Defaults to the source path with the stream extension.
        #[clap(long, short)]
        output: Option<PathBuf>,
        /// Run the semantic checker before writing.
        #[clap(long)]
        check: bool,
    },
    /// Execute a token stream file.
    #[clap(short_flag = 'r')]
    Run {
        path: PathBuf,
        /// Abort on statements of unknown shape.
        #[clap(long)]
        strict: bool,
        /// Report every executed statement.
        #[clap(long)]
        trace: bool,
    },
    /// Print the tokens of a source file.
    Tokenize {
        path: PathBuf,
        #[clap(long = "format", value_enum, default_value = "basic")]
        format: TokenFormat,
    },
    /// Lex a source file and run the semantic checker.
    Check { path: PathBuf },
}

#[derive(Debug, Clone, ValueEnum)]
pub enum TokenFormat {
    Debug,
    Basic,
    Stream,
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    // Any invocation that does not name a command prints usage and succeeds.
    let args = match CLArgs::try_parse() {
        Ok(args) => args,
        Err(error) if matches!(error.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            error.print()?;
            return Ok(ExitCode::SUCCESS);
        }
        Err(error) => {
            eprintln!("{LANG_NAME}: {}", error.kind());
            CLArgs::command().print_help()?;
            return Ok(ExitCode::SUCCESS);
        }
    };
    let colored = !args.no_color;

    let Some(routine) = args.routine else {
        CLArgs::command().print_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    match routine {
        CapyCommand::Compile {
            path,
            output,
            check,
        } => {
            let output = output.unwrap_or_else(|| path.with_extension(STREAM_EXTENSION));
            let mut reporter = StderrReporter::new(colored, false);
            warn_on_extension(&path, SOURCE_EXTENSION, &mut reporter);
            compile(&path, &output, check, reporter)
        }
        CapyCommand::Run {
            path,
            strict,
            trace,
        } => {
            let config = EngineConfig {
                unknown_statements: if strict {
                    UnknownStatementPolicy::Fatal
                } else {
                    UnknownStatementPolicy::Ignore
                },
                trace,
            };
            let mut reporter = StderrReporter::new(colored, trace);
            warn_on_extension(&path, STREAM_EXTENSION, &mut reporter);
            run(&path, config, reporter)
        }
        CapyCommand::Tokenize { path, format } => tokenize(&path, &format, colored),
        CapyCommand::Check { path } => {
            let mut reporter = StderrReporter::new(colored, false);
            let src = read_source(&path)?;
            let Some(tokens) = lex(&src, &mut reporter) else {
                return Ok(ExitCode::from(EXIT_DATA_ERROR));
            };
            match SemanticChecker::new().check(&tokens, &mut reporter) {
                Ok(()) => Ok(ExitCode::SUCCESS),
                Err(_) => Ok(ExitCode::from(EXIT_DATA_ERROR)),
            }
        }
    }
}

fn warn_on_extension<R: Reporter>(path: &Path, expected: &str, reporter: &mut R) {
    if path.extension().is_some_and(|extension| extension == expected) {
        return;
    }
    reporter.warning(
        &format!("Expected a .{expected} file, got {}", path.display()),
        None,
    );
}

fn read_source(path: &Path) -> Result<String> {
    read_to_string(path).wrap_err_with(|| format!("Failed to read {}", path.display()))
}

/// Lexes `src`, reporting the lexical error if there is one.
fn lex<R: Reporter>(src: &str, reporter: &mut R) -> Option<Vec<Token>> {
    match Lexer::new(src).tokenize(reporter) {
        Ok(tokens) => Some(tokens),
        Err(error) => {
            reporter.fatal(&error.to_string(), Some(error.position));
            None
        }
    }
}

fn compile<R: Reporter>(
    path: &Path,
    output: &Path,
    check: bool,
    mut reporter: R,
) -> Result<ExitCode> {
    let src = read_source(path)?;
    let Some(tokens) = lex(&src, &mut reporter) else {
        return Ok(ExitCode::from(EXIT_DATA_ERROR));
    };
    if check && SemanticChecker::new().check(&tokens, &mut reporter).is_err() {
        return Ok(ExitCode::from(EXIT_DATA_ERROR));
    }

    let file = File::create(output)
        .wrap_err_with(|| format!("Failed to create {}", output.display()))?;
    write_tokens(&mut BufWriter::new(file), &tokens)
        .wrap_err_with(|| format!("Failed to write {}", output.display()))?;

    reporter.info(
        &format!("Wrote token stream file: {}", output.display()),
        None,
    );
    reporter.info("Compilation complete.", None);
    Ok(ExitCode::SUCCESS)
}

fn run<R: Reporter>(path: &Path, config: EngineConfig, reporter: R) -> Result<ExitCode> {
    let stream = read_source(path)?;
    let mut interpreter = Interpreter::new(StdioContext, reporter, config);
    match interpreter.run(&stream) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(error) if matches!(error.kind, RuntimeErrorKind::Codec(_)) => {
            Ok(ExitCode::from(EXIT_DATA_ERROR))
        }
        Err(_) => Ok(ExitCode::from(EXIT_RUNTIME_ERROR)),
    }
}

fn tokenize(path: &Path, format: &TokenFormat, colored: bool) -> Result<ExitCode> {
    let src = read_source(path)?;
    let formatter: Box<dyn TokenFormatter + '_> = match format {
        TokenFormat::Debug => Box::new(DebugFormatter),
        TokenFormat::Basic => Box::new(BasicFormatter),
        TokenFormat::Stream => Box::new(PrettyFormatter::new(&src, path)),
    };

    let mut reporter = StderrReporter::new(colored, false);
    let mut lexer = Lexer::new(&src);
    loop {
        match lexer.next_token(&mut reporter) {
            Ok(token) => {
                println!("{}", formatter.format(&token));
                if token.is(TokenKind::Eof) {
                    return Ok(ExitCode::SUCCESS);
                }
            }
            Err(error) => {
                eprintln!("{}", formatter.format_lexical_error(&error));
                eprintln!("{LANG_NAME}: tokenizing {} failed", path.display());
                return Ok(ExitCode::from(EXIT_DATA_ERROR));
            }
        }
    }
}
