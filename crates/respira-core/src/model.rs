use crate::week::WeekId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Written in place of the week when the filename has no KT marker.
pub const UNKNOWN_WEEK: &str = "UNKNOWN";

/// Week column of a report: a parsed week or the `UNKNOWN` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekLabel {
    Known(WeekId),
    Unknown,
}

impl fmt::Display for WeekLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekLabel::Known(week) => write!(f, "{week}"),
            WeekLabel::Unknown => f.write_str(UNKNOWN_WEEK),
        }
    }
}

impl From<Option<WeekId>> for WeekLabel {
    fn from(week: Option<WeekId>) -> Self {
        week.map_or(WeekLabel::Unknown, WeekLabel::Known)
    }
}

impl Serialize for WeekLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for WeekLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        if s == UNKNOWN_WEEK {
            return Ok(WeekLabel::Unknown);
        }
        s.parse()
            .map(WeekLabel::Known)
            .map_err(serde::de::Error::custom)
    }
}

/// A row of the weekly report table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    InfluenzaA,
    InfluenzaB,
    Rsv,
    Adenovirus,
    Rhinovirus,
    Parainfluenza,
    Coronavirus,
    Total,
}

impl Category {
    /// Column name used in CSV and JSON output.
    pub fn field_name(&self) -> &'static str {
        match self {
            Category::InfluenzaA => "influenzaA",
            Category::InfluenzaB => "influenzaB",
            Category::Rsv => "rsv",
            Category::Adenovirus => "adenovirus",
            Category::Rhinovirus => "rhinovirus",
            Category::Parainfluenza => "parainfluenza",
            Category::Coronavirus => "coronavirus",
            Category::Total => "totalTests",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// Virus detection counts for one surveillance week.
///
/// Field order is the output column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyReport {
    pub week: WeekLabel,
    pub influenza_a: u64,
    pub influenza_b: u64,
    pub rsv: u64,
    pub adenovirus: u64,
    pub rhinovirus: u64,
    pub parainfluenza: u64,
    pub coronavirus: u64,
    pub total_tests: u64,
}

impl WeeklyReport {
    pub fn new(week: WeekLabel, counts: VirusCounts) -> Self {
        WeeklyReport {
            week,
            influenza_a: counts.influenza_a,
            influenza_b: counts.influenza_b,
            rsv: counts.rsv,
            adenovirus: counts.adenovirus,
            rhinovirus: counts.rhinovirus,
            parainfluenza: counts.parainfluenza,
            coronavirus: counts.coronavirus,
            total_tests: counts.total_tests,
        }
    }
}

/// Counts collected by the table scanner, before a week is attached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VirusCounts {
    pub influenza_a: u64,
    pub influenza_b: u64,
    pub rsv: u64,
    pub adenovirus: u64,
    pub rhinovirus: u64,
    pub parainfluenza: u64,
    pub coronavirus: u64,
    pub total_tests: u64,
}

impl VirusCounts {
    pub fn set(&mut self, category: Category, value: u64) {
        let slot = match category {
            Category::InfluenzaA => &mut self.influenza_a,
            Category::InfluenzaB => &mut self.influenza_b,
            Category::Rsv => &mut self.rsv,
            Category::Adenovirus => &mut self.adenovirus,
            Category::Rhinovirus => &mut self.rhinovirus,
            Category::Parainfluenza => &mut self.parainfluenza,
            Category::Coronavirus => &mut self.coronavirus,
            Category::Total => &mut self.total_tests,
        };
        *slot = value;
    }

    /// Sum of the seven virus counts (everything except the total).
    pub fn detections(&self) -> u64 {
        [
            self.influenza_a,
            self.influenza_b,
            self.rsv,
            self.adenovirus,
            self.rhinovirus,
            self.parainfluenza,
            self.coronavirus,
        ]
        .iter()
        .fold(0u64, |acc, v| acc.saturating_add(*v))
    }
}
