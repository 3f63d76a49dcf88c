use capycode::report::{format_diagnostic, BufferedReporter, Level, Reporter, Timestamp};
use capycode::token::Position;

#[test]
fn test_timestamp_is_time_of_day() {
    let timestamp = Timestamp::from_epoch_seconds(3 * 86_400 + 9 * 3600 + 5 * 60 + 7);
    assert_eq!(timestamp.to_string(), "09:05:07");
    assert_eq!(Timestamp::from_epoch_seconds(0).to_string(), "00:00:00");
}

#[test]
fn test_diagnostic_layout() {
    let timestamp = Timestamp::from_epoch_seconds(13 * 3600 + 37 * 60);
    assert_eq!(
        format_diagnostic(&timestamp, "[fatal]", "boom", Some(Position::new(3, 9))),
        "[13:37:00][fatal] (boom at 3:9)"
    );
    assert_eq!(
        format_diagnostic(&timestamp, "[info]", "done", None),
        "[13:37:00][info] (done)"
    );
    assert_eq!(
        format_diagnostic(&timestamp, "[fatal]", "bad", Some(Position::line_only(4))),
        "[13:37:00][fatal] (bad at line 4)"
    );
    assert_eq!(
        format_diagnostic(&timestamp, "[warning]", "odd", Some(Position::default())),
        "[13:37:00][warning] (odd)"
    );
}

#[test]
fn test_buffered_reporter_filters_by_level() {
    let mut reporter = BufferedReporter::new();
    reporter.info("a", None);
    reporter.warning("b", Some(Position::new(1, 2)));
    reporter.fatal("c", None);
    reporter.warning("d", None);

    let warnings: Vec<_> = reporter
        .at_level(Level::Warning)
        .map(|diagnostic| diagnostic.message.as_str())
        .collect();
    assert_eq!(warnings, vec!["b", "d"]);
    assert_eq!(reporter.diagnostics().len(), 4);
    assert_eq!(Level::Fatal.to_string(), "fatal");
}
