use anyhow::{Context, Result};
use glob::Pattern;

/// Source files that are scanned for declarations.
pub const SOURCE_FILE_PATTERNS: &[&str] = &["**/*.ts", "**/*.tsx"];

/// Directory name whose contents are never scanned, wherever it appears in a path.
pub const EXCLUDED_DIR_NAME: &str = "node_modules";

/// File selection settings used by the scanner.
///
/// There is no configuration file: `check` always runs with [`ScanConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub patterns: Vec<String>,
    pub excluded_dir: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            patterns: SOURCE_FILE_PATTERNS.iter().map(|p| p.to_string()).collect(),
            excluded_dir: EXCLUDED_DIR_NAME.to_string(),
        }
    }
}

impl ScanConfig {
    /// Compile the source patterns.
    ///
    /// Returns an error naming the first invalid pattern.
    pub fn compiled_patterns(&self) -> Result<Vec<Pattern>> {
        self.patterns
            .iter()
            .map(|p| {
                Pattern::new(p).with_context(|| format!("Invalid source file pattern: \"{}\"", p))
            })
            .collect()
    }
}
