//! Core analysis engine.
//!
//! A `check` run goes through these steps:
//!
//! 1. **Scan**: `file_scanner` selects `.ts`/`.tsx` files outside `node_modules`
//! 2. **Parse**: `parsers` turns each file into an swc module
//! 3. **Collect**: `collect` picks out function-like declarations into a [`SourceUnit`]
//! 4. **Tally**: `coverage` checks the comment in front of each declaration with a
//!    `tsdoc` validator and aggregates the counts
//!
//! [`CheckContext`] drives the steps for one working directory.

pub mod collect;
pub mod context;
pub mod coverage;
pub mod file_scanner;
pub mod parsers;
pub mod source;
pub mod tsdoc;

pub use context::CheckContext;
pub use coverage::{AggregateRecord, CoverageRecord, CoverageReport, Percentage};
pub use source::{Declaration, DeclarationKind, LineRange, SourceUnit};
