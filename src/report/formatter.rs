use crate::token::Position;
use std::time::{SystemTime, UNIX_EPOCH};

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Wall-clock time of day, as shown in front of every diagnostic.
///
/// Always UTC: the standard library exposes no local offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl Timestamp {
    pub fn now() -> Self {
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self::from_epoch_seconds(since_epoch)
    }

    pub fn from_epoch_seconds(seconds: u64) -> Self {
        let of_day = seconds % SECONDS_PER_DAY;
        Self {
            hours: (of_day / 3600) as u8,
            minutes: (of_day % 3600 / 60) as u8,
            seconds: (of_day % 60) as u8,
        }
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// `[HH:MM:SS][level] (message at line:column)`, with the time in UTC.
pub fn format_diagnostic(
    timestamp: &Timestamp,
    level_tag: &str,
    message: &str,
    position: Option<Position>,
) -> String {
    match position {
        Some(position) if position.line > 0 => {
            format!("[{timestamp}]{level_tag} ({message} at {position})")
        }
        _ => format!("[{timestamp}]{level_tag} ({message})"),
    }
}
