use capycode::checker::{SemanticChecker, SemanticErrorKind};
use capycode::lexer::Lexer;
use capycode::report::{BufferedReporter, Level};
use capycode::token::Position;
use color_eyre::eyre::{eyre, Result};

fn check(source: &str) -> Result<(Option<SemanticErrorKind>, BufferedReporter)> {
    let mut reporter = BufferedReporter::new();
    let tokens = Lexer::new(source)
        .tokenize(&mut reporter)
        .map_err(|error| eyre!("{error}"))?;
    let result = SemanticChecker::new().check(&tokens, &mut reporter);
    Ok((result.err().map(|error| error.kind), reporter))
}

#[test]
fn test_valid_program() -> Result<()> {
    let (error, reporter) = check(
        "using Output;\nvar(int) x = 1;\nx = x + 1;\nOutput.println(\"{x}\");\n",
    )?;
    assert_eq!(error, None);
    let infos: Vec<_> = reporter.at_level(Level::Info).collect();
    assert_eq!(infos.len(), 1);
    assert_eq!(infos[0].message, "Semantic analysis completed successfully");
    Ok(())
}

#[test]
fn test_assignment_before_declaration() -> Result<()> {
    let (error, reporter) = check("y = 2;\nvar(int) y = 1;")?;
    assert_eq!(error, Some(SemanticErrorKind::Undeclared("y".into())));

    let fatals: Vec<_> = reporter.at_level(Level::Fatal).collect();
    assert_eq!(fatals.len(), 1);
    assert_eq!(fatals[0].message, "Variable 'y' is not declared");
    assert_eq!(fatals[0].position, Some(Position::new(1, 1)));
    assert_eq!(reporter.at_level(Level::Info).count(), 0);
    Ok(())
}

#[test]
fn test_duplicate_declaration() -> Result<()> {
    let (error, reporter) = check("var(int) x = 1;\nvar(string) x = \"a\";")?;
    assert_eq!(error, Some(SemanticErrorKind::AlreadyDeclared("x".into())));
    let fatal = reporter
        .at_level(Level::Fatal)
        .next()
        .ok_or_else(|| eyre!("no fatal diagnostic"))?;
    assert_eq!(fatal.position, Some(Position::new(2, 13)));
    Ok(())
}

#[test]
fn test_invalid_declaration() -> Result<()> {
    let (error, _) = check("var(int) x 1 1;")?;
    assert_eq!(error, Some(SemanticErrorKind::InvalidDeclaration));

    let (error, _) = check("var(int) 5 = 1;")?;
    assert_eq!(error, Some(SemanticErrorKind::InvalidDeclaration));
    Ok(())
}

#[test]
fn test_incomplete_declaration() -> Result<()> {
    let (error, _) = check("var(int)")?;
    assert_eq!(error, Some(SemanticErrorKind::IncompleteDeclaration));

    let (error, _) = check("var(int) x")?;
    assert_eq!(error, Some(SemanticErrorKind::IncompleteDeclaration));
    Ok(())
}

#[test]
fn test_reads_of_undeclared_names_are_not_checked() -> Result<()> {
    let (error, _) = check("var(int) x = y + 1;")?;
    assert_eq!(error, None);
    Ok(())
}
