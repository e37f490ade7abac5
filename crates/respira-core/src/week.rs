use crate::error::RespiraError;
use chrono::{NaiveDate, Weekday};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// "51.KT 2025", "1.kt 2026", "7KT2024" anywhere inside a filename.
static FILENAME_KT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([0-9]+)\.?\s*KT\s*([0-9]{4})").unwrap());

/// A complete Czech week label and nothing else.
static KT_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)\.KT\s+([0-9]{4})$").unwrap());

static ISO_WEEK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{4})-W([0-9]{2,})$").unwrap());

/// Year and week number of a weekly report, rendered as `YYYY-Www`.
///
/// The week number comes from the report's own numbering (KT, "kalendářní
/// týden"), so it is not range-checked against the ISO calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekId {
    pub year: i32,
    pub week: u32,
}

impl WeekId {
    pub fn new(year: i32, week: u32) -> Self {
        WeekId { year, week }
    }

    /// Convert a bare Czech calendar-week label such as `"1.KT 2026"`.
    pub fn from_kt_label(label: &str) -> Result<WeekId, RespiraError> {
        let caps = KT_LABEL
            .captures(label.trim())
            .ok_or_else(|| RespiraError::InvalidWeek(label.to_string()))?;
        week_from_parts(&caps[2], &caps[1])
            .ok_or_else(|| RespiraError::InvalidWeek(label.to_string()))
    }

    /// Monday of this ISO-8601 week, if the week exists in that year.
    pub fn monday(&self) -> Option<NaiveDate> {
        NaiveDate::from_isoywd_opt(self.year, self.week, Weekday::Mon)
    }
}

impl fmt::Display for WeekId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{:02}", self.year, self.week)
    }
}

impl FromStr for WeekId {
    type Err = RespiraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = ISO_WEEK
            .captures(s)
            .ok_or_else(|| RespiraError::InvalidWeek(s.to_string()))?;
        week_from_parts(&caps[1], &caps[2])
            .ok_or_else(|| RespiraError::InvalidWeek(s.to_string()))
    }
}

/// Extract the report week from a filename like `"Výsledky-viry 51.KT 2025.pdf"`.
///
/// Returns None if the filename carries no `<week>.KT <year>` marker.
pub fn parse_week_from_filename(filename: &str) -> Option<WeekId> {
    let caps = FILENAME_KT.captures(filename)?;
    week_from_parts(&caps[2], &caps[1])
}

fn week_from_parts(year: &str, week: &str) -> Option<WeekId> {
    Some(WeekId {
        year: year.parse().ok()?,
        week: week.parse().ok()?,
    })
}
