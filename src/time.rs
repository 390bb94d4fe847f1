//! Timestamps and human-facing date formatting.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ISO-8601 UTC timestamp with millisecond precision.
///
/// Kept in rendered string form so snapshots round-trip byte-for-byte.
/// The fixed-width rendering makes lexicographic order agree with
/// chronological order, which the derived `Ord` relies on.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(String);

impl Timestamp {
    /// The current instant.
    pub fn now() -> Self {
        Self::from_instant(Utc::now())
    }

    /// An instant `days` days before now. Used by the demo seed datasets.
    pub fn days_ago(days: i64) -> Self {
        Self::from_instant(Utc::now() - Duration::days(days))
    }

    /// Wrap a pre-rendered timestamp (snapshots, fixtures).
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    fn from_instant(instant: DateTime<Utc>) -> Self {
        Self(instant.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn parse(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.0)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Format a timestamp for display, e.g. "March 4, 2026".
///
/// Unparseable input is returned verbatim rather than dropped.
pub fn format_date(timestamp: &Timestamp) -> String {
    match timestamp.parse() {
        Some(instant) => instant.format("%B %-d, %Y").to_string(),
        None => timestamp.as_str().to_string(),
    }
}

/// Describe how far in the past a timestamp lies, in coarse buckets:
/// today, yesterday, then days, weeks, months, and years ago.
pub fn relative_time(timestamp: &Timestamp) -> String {
    let Some(instant) = timestamp.parse() else {
        return timestamp.as_str().to_string();
    };
    let days = (Utc::now() - instant).num_days().abs();

    if days == 0 {
        "today".to_string()
    } else if days == 1 {
        "yesterday".to_string()
    } else if days < 7 {
        format!("{days} days ago")
    } else if days < 30 {
        plural(days / 7, "week")
    } else if days < 365 {
        plural(days / 30, "month")
    } else {
        plural(days / 365, "year")
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}
