use std::fmt;

use crate::core::source::LineRange;

/// Share of documented declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Percentage {
    /// Whole percent in `0..=100`.
    Value(u32),
    /// Nothing to document: the total is zero.
    NotApplicable,
}

impl Percentage {
    /// `round(documented / total * 100)`, halves rounding up.
    pub fn of(documented: usize, total: usize) -> Self {
        if total == 0 {
            return Percentage::NotApplicable;
        }
        let ratio = documented as f64 / total as f64;
        Percentage::Value((ratio * 100.0).round() as u32)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Percentage::Value(value) => write!(f, "{}%", value),
            Percentage::NotApplicable => f.write_str("N/A"),
        }
    }
}

/// Coverage of a single source unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageRecord {
    pub file_path: String,
    pub total: usize,
    pub documented: usize,
    /// Line ranges of declarations without a valid doc comment, in collection order.
    pub undocumented: Vec<LineRange>,
}

impl CoverageRecord {
    pub fn percentage(&self) -> Percentage {
        Percentage::of(self.documented, self.total)
    }

    /// Undocumented ranges joined as `"1-3, 7-9"`.
    pub fn undocumented_lines(&self) -> String {
        self.undocumented
            .iter()
            .map(|range| range.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Totals across all source units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregateRecord {
    pub total: usize,
    pub documented: usize,
}

impl AggregateRecord {
    pub fn percentage(&self) -> Percentage {
        Percentage::of(self.documented, self.total)
    }
}

/// One row per source unit plus the totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageReport {
    pub files: Vec<CoverageRecord>,
    pub total: AggregateRecord,
}

impl CoverageReport {
    pub fn from_records(files: Vec<CoverageRecord>) -> Self {
        let total = files
            .iter()
            .fold(AggregateRecord::default(), |acc, record| AggregateRecord {
                total: acc.total + record.total,
                documented: acc.documented + record.documented,
            });
        Self { files, total }
    }
}
