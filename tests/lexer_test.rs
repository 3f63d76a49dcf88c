use capycode::lexer::formatter::{BasicFormatter, TokenFormatter};
use capycode::lexer::{LexicalErrorKind, Lexer};
use capycode::report::{BufferedReporter, Level};
use capycode::token::{Position, Token, TokenKind};
use color_eyre::eyre::{eyre, Result};
use proptest::prelude::*;

fn lex(input: &str) -> Result<(Vec<Token>, BufferedReporter)> {
    let mut reporter = BufferedReporter::new();
    let tokens = Lexer::new(input)
        .tokenize(&mut reporter)
        .map_err(|error| eyre!("{error}"))?;
    Ok((tokens, reporter))
}

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|token| token.kind).collect()
}

fn literals(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|token| token.literal.as_str()).collect()
}

#[test]
fn smoke_test() -> Result<()> {
    let (tokens, reporter) = lex("")?;
    assert_eq!(kinds(&tokens), vec![TokenKind::Eof]);
    assert_eq!(tokens[0].position, Position::new(1, 1));
    assert!(reporter.diagnostics().is_empty());
    Ok(())
}

#[test]
fn test_declaration_with_parenthesised_type() -> Result<()> {
    let (tokens, _) = lex("var(int) x = 2 + 3;")?;
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::KeywordVar,
            TokenKind::Ident,
            TokenKind::Ident,
            TokenKind::Equal,
            TokenKind::NumericLiteral,
            TokenKind::Plus,
            TokenKind::NumericLiteral,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
    assert_eq!(
        literals(&tokens),
        vec!["var", "INT", "x", "=", "2", "+", "3", ";", ""]
    );
    Ok(())
}

#[test]
fn test_declaration_with_bare_type() -> Result<()> {
    let (tokens, _) = lex("var string s = \"a\";")?;
    assert_eq!(
        literals(&tokens),
        vec!["var", "STRING", "s", "=", "a", ";", ""]
    );
    assert_eq!(tokens[1].kind, TokenKind::Ident);
    assert_eq!(tokens[4].kind, TokenKind::StringLiteral);
    Ok(())
}

#[test]
fn test_using_carries_library_name() -> Result<()> {
    let (tokens, _) = lex("using   Output;")?;
    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::Using, TokenKind::Semicolon, TokenKind::Eof]
    );
    assert_eq!(tokens[0].literal, "Output");

    let (tokens, _) = lex("using;")?;
    assert_eq!(tokens[0].kind, TokenKind::Using);
    assert_eq!(tokens[0].literal, "using");
    Ok(())
}

#[test]
fn test_keywords_and_booleans() -> Result<()> {
    let (tokens, _) = lex("print if else elseif for while true false other")?;
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::KeywordPrint,
            TokenKind::KeywordIf,
            TokenKind::KeywordElse,
            TokenKind::KeywordElseIf,
            TokenKind::KeywordFor,
            TokenKind::KeywordWhile,
            TokenKind::Boolean,
            TokenKind::Boolean,
            TokenKind::Ident,
            TokenKind::Eof,
        ]
    );
    Ok(())
}

#[test]
fn test_positions_track_lines_and_columns() -> Result<()> {
    let (tokens, _) = lex("x = 1;\n  y = 22;")?;
    assert_eq!(tokens[0].position, Position::new(1, 1));
    assert_eq!(tokens[2].position, Position::new(1, 5));
    assert_eq!(tokens[4].position, Position::new(2, 3));
    assert_eq!(tokens[6].position, Position::new(2, 7));
    assert_eq!(tokens[8].position, Position::new(2, 10));
    Ok(())
}

#[test]
fn test_string_escapes() -> Result<()> {
    let (tokens, reporter) = lex(r#""a\tb\n\"q\"\\""#)?;
    assert_eq!(tokens[0].literal, "a\tb\n\"q\"\\");
    assert!(reporter.diagnostics().is_empty());
    Ok(())
}

#[test]
fn test_unknown_escape_is_kept_with_warning() -> Result<()> {
    let (tokens, reporter) = lex(r#""a\qb""#)?;
    assert_eq!(tokens[0].literal, "a\\qb");
    assert_eq!(reporter.at_level(Level::Warning).count(), 1);
    Ok(())
}

#[test]
fn test_unknown_character_is_skipped_with_warning() -> Result<()> {
    let (tokens, reporter) = lex("x # 1")?;
    assert_eq!(
        kinds(&tokens),
        vec![TokenKind::Ident, TokenKind::NumericLiteral, TokenKind::Eof]
    );
    let warnings: Vec<_> = reporter.at_level(Level::Warning).collect();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].message, "Unknown character: '#'");
    assert_eq!(warnings[0].position, Some(Position::new(1, 3)));
    Ok(())
}

#[test]
fn test_char_and_percent() -> Result<()> {
    let (tokens, _) = lex("'c' 7 % 2")?;
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::CharLiteral,
            TokenKind::NumericLiteral,
            TokenKind::Percent,
            TokenKind::NumericLiteral,
            TokenKind::Eof,
        ]
    );
    assert_eq!(tokens[0].literal, "c");
    Ok(())
}

fn lexical_error(input: &str) -> LexicalErrorKind {
    let mut reporter = BufferedReporter::new();
    match Lexer::new(input).tokenize(&mut reporter) {
        Ok(tokens) => panic!("expected a lexical error, got {tokens:?}"),
        Err(error) => error.kind,
    }
}

#[test]
fn test_fatal_lexical_errors() {
    assert_eq!(lexical_error("\"open"), LexicalErrorKind::UnclosedString);
    assert_eq!(lexical_error("\"open\\"), LexicalErrorKind::DanglingEscape);
    assert_eq!(lexical_error("''"), LexicalErrorKind::EmptyChar);
    assert_eq!(lexical_error("'ab'"), LexicalErrorKind::UnclosedChar);
    assert_eq!(
        lexical_error("var(in7) x = 1;"),
        LexicalErrorKind::InvalidTypeCharacter('7')
    );
    assert_eq!(
        lexical_error("var(int x = 1;"),
        LexicalErrorKind::InvalidTypeCharacter(' ')
    );
    assert_eq!(
        lexical_error("var(int"),
        LexicalErrorKind::UnclosedTypeAnnotation
    );
}

#[test]
fn test_basic_formatter() -> Result<()> {
    let (tokens, _) = lex("s = \"a\nb\";")?;
    let formatted: Vec<String> = tokens
        .iter()
        .map(|token| BasicFormatter.format(token))
        .collect();
    assert_eq!(formatted[0], "1:1 IDENTIFIER s");
    assert_eq!(formatted[2], "1:5 STRING a\\nb");
    assert_eq!(formatted[3], "2:3 SEMICOLON ;");
    Ok(())
}

// Property-based tests

fn integer_strategy() -> impl Strategy<Value = String> {
    "[0-9]{1,9}"
}

fn decimal_strategy() -> impl Strategy<Value = String> {
    "[0-9]{1,6}\\.[0-9]{0,6}"
}

fn identifier_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]{0,12}".prop_filter("reserved words lex differently", |s| {
        !matches!(
            s.as_str(),
            "var" | "using" | "print" | "if" | "else" | "elseif" | "for" | "while" | "true"
                | "false"
        )
    })
}

proptest! {
    #[test]
    fn digits_without_point_lex_as_number(input in integer_strategy()) {
        let (tokens, _) = lex(&input).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(kinds(&tokens), vec![TokenKind::NumericLiteral, TokenKind::Eof]);
        prop_assert_eq!(tokens[0].literal.as_str(), input.as_str());
    }

    #[test]
    fn digits_with_one_point_lex_as_float(input in decimal_strategy()) {
        let (tokens, _) = lex(&input).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(kinds(&tokens), vec![TokenKind::FloatLiteral, TokenKind::Eof]);
        prop_assert_eq!(tokens[0].literal.as_str(), input.as_str());
    }

    #[test]
    fn whitespace_separated_words_lex_one_token_each(
        words in prop::collection::vec(identifier_strategy(), 1..40)
    ) {
        let input = words.join(" \n ");
        let (tokens, reporter) = lex(&input).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(tokens.len(), words.len() + 1);
        prop_assert!(reporter.diagnostics().is_empty());
        for (token, word) in tokens.iter().zip(&words) {
            prop_assert_eq!(token.kind, TokenKind::Ident);
            prop_assert_eq!(token.literal.as_str(), word.as_str());
        }
    }
}
