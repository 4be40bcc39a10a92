//! Trip duration derived from the two free-form date strings

use chrono::NaiveDate;
use std::fmt::{self, Display};
use tracing::debug;

/// Date format accepted for start and end dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Duration reported when either date fails to parse
pub const DEFAULT_TRIP_DAYS: i64 = 3;

/// Inclusive day count, tagged with how it was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedDuration {
    /// Both dates parsed; `end - start + 1`, which may be zero or negative
    Derived(i64),
    /// At least one date was malformed
    Defaulted(i64),
}

impl ParsedDuration {
    /// Derive the duration. A trip from day D to day D lasts one day.
    #[must_use]
    pub fn derive(start_date: &str, end_date: &str) -> Self {
        let start = parse_date(start_date);
        let end = parse_date(end_date);

        match (start, end) {
            (Some(start), Some(end)) => ParsedDuration::Derived((end - start).num_days() + 1),
            (start, end) => {
                debug!(
                    start_ok = start.is_some(),
                    end_ok = end.is_some(),
                    "Unparseable trip dates, using default duration"
                );
                ParsedDuration::Defaulted(DEFAULT_TRIP_DAYS)
            }
        }
    }

    #[must_use]
    pub fn days(&self) -> i64 {
        match self {
            ParsedDuration::Derived(days) | ParsedDuration::Defaulted(days) => *days,
        }
    }

    #[must_use]
    pub fn is_defaulted(&self) -> bool {
        matches!(self, ParsedDuration::Defaulted(_))
    }
}

/// Parse a `YYYY-MM-DD` date. The year must be exactly four digits; month
/// and day may be one or two. No sign or surrounding whitespace.
fn parse_date(text: &str) -> Option<NaiveDate> {
    let mut parts = text.split('-');
    let well_formed = [4..=4, 1..=2, 1..=2].into_iter().all(|width| {
        parts.next().is_some_and(|part| {
            width.contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
        })
    }) && parts.next().is_none();

    if !well_formed {
        return None;
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT).ok()
}

impl Display for ParsedDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}天", self.days())
    }
}
