use std::{fs, path::Path};

use anyhow::{Context as _, Result};
use colored::Colorize;
use rayon::prelude::*;

use crate::{
    config::ScanConfig,
    core::{
        collect::DeclarationCollector,
        coverage::{CoverageReport, tally_source_unit},
        file_scanner::{ScannedFile, scan_files},
        parsers::typescript::parse_typescript_source,
        source::SourceUnit,
        tsdoc::DocCommentValidator,
    },
};

/// Analysis context for one `check` run.
///
/// Construction scans the file system; [`CheckContext::load_units`] reads and
/// parses every selected file, and [`CheckContext::coverage`] runs the full
/// pipeline.
pub struct CheckContext {
    /// Selected source files, in report order.
    pub files: Vec<ScannedFile>,
}

impl CheckContext {
    /// Scan `root_dir` for source files.
    ///
    /// # Errors
    ///
    /// Returns an error if `root_dir` cannot be resolved.
    pub fn new(root_dir: &Path, config: &ScanConfig) -> Result<Self> {
        let scan_result = scan_files(root_dir, config)?;

        if scan_result.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) skipped due to access errors",
                "warning:".bold().yellow(),
                scan_result.skipped_count,
            );
        }

        Ok(Self { files: scan_result.files })
    }

    /// Read and parse every selected file.
    ///
    /// Files are processed in parallel; the result keeps the scan order. The
    /// first file that cannot be read or parsed fails the whole load.
    pub fn load_units(&self) -> Result<Vec<SourceUnit>> {
        self.files.par_iter().map(load_source_unit).collect()
    }

    /// Run the collect, tally and aggregate pipeline.
    pub fn coverage(&self, validator: &dyn DocCommentValidator) -> Result<CoverageReport> {
        let units = self.load_units()?;
        let records = units
            .iter()
            .map(|unit| tally_source_unit(unit, validator))
            .collect();
        Ok(CoverageReport::from_records(records))
    }
}

/// Read, parse and collect declarations for one file.
pub fn load_source_unit(file: &ScannedFile) -> Result<SourceUnit> {
    let content = fs::read_to_string(&file.path)
        .with_context(|| format!("Failed to read file: {}", file.display_path))?;
    let text = match content.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => content,
    };

    let parsed = parse_typescript_source(&text, Path::new(&file.display_path))
        .with_context(|| format!("Failed to parse file: {}", file.display_path))?;
    let declarations = DeclarationCollector::new(&parsed, &text).collect();

    Ok(SourceUnit {
        path: file.display_path.clone(),
        text,
        declarations,
    })
}
