use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use glob::MatchOptions;
use walkdir::{DirEntry, WalkDir};

use crate::config::ScanConfig;

/// A source file selected for checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    /// Path used to read the file.
    pub path: PathBuf,
    /// Path relative to the scan root, with `/` separators. Used in the report.
    pub display_path: String,
}

/// Result of scanning files.
pub struct ScanResult {
    /// Selected files, sorted by display path.
    pub files: Vec<ScannedFile>,
    pub skipped_count: usize,
}

/// Wildcards never match a leading `.`, so dot files and dot directories are
/// only selected by a pattern that spells the dot out.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: true,
};

/// Walk `base_dir` and collect every file matching the configured source patterns.
///
/// A file whose resolved absolute path contains the excluded name anywhere
/// (`node_modules/`, `my_node_modules_docs/`, `node_modules.ts`) is left out,
/// including the case where `base_dir` itself lives inside such a directory.
pub fn scan_files(base_dir: &Path, config: &ScanConfig) -> Result<ScanResult> {
    let patterns = config.compiled_patterns()?;
    let excluded = config.excluded_dir.as_str();

    let resolved_root = base_dir
        .canonicalize()
        .with_context(|| format!("Cannot resolve directory: {}", base_dir.display()))?;
    if contains_excluded(&resolved_root, excluded) {
        return Ok(ScanResult {
            files: Vec::new(),
            skipped_count: 0,
        });
    }

    let mut files = Vec::new();
    let mut skipped_count = 0;

    let walker = WalkDir::new(base_dir)
        .into_iter()
        .filter_entry(|entry| !is_excluded_dir(entry, excluded));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(base_dir).unwrap_or(path);
        if contains_excluded(&resolved_root.join(relative), excluded) {
            continue;
        }

        let display_path = to_display_path(relative);
        if patterns
            .iter()
            .any(|p| p.matches_with(&display_path, MATCH_OPTIONS))
        {
            files.push(ScannedFile {
                path: path.to_path_buf(),
                display_path,
            });
        }
    }

    files.sort_by(|a, b| a.display_path.cmp(&b.display_path));

    Ok(ScanResult {
        files,
        skipped_count,
    })
}

/// Directories whose name contains the excluded name are not descended into.
fn is_excluded_dir(entry: &DirEntry, excluded: &str) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry.file_name().to_string_lossy().contains(excluded)
}

fn contains_excluded(path: &Path, excluded: &str) -> bool {
    path.to_string_lossy().contains(excluded)
}

fn to_display_path(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
