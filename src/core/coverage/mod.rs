//! Documentation coverage tallying.
//!
//! - `leading_comments`: finds the comment in front of a declaration in raw text
//! - `tally`: classifies each declaration and builds a [`CoverageRecord`]
//! - `record`: per-unit and aggregate records, percentages

pub mod leading_comments;
pub mod record;
pub mod tally;

pub use record::{AggregateRecord, CoverageRecord, CoverageReport, Percentage};
pub use tally::{DocStatus, tally_source_unit};
