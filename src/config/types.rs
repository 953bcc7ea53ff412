//! Configuration type definitions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// Top-level configuration file contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scan options.
    pub scan: ScanOptions,
}

/// Inputs to a scan besides the root directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanOptions {
    /// Extensions to collect, lowercase and without the leading dot.
    pub extensions: BTreeSet<String>,
    /// Read `.gitignore` / `.codegatherignore` in every visited directory.
    pub respect_ignore_files: bool,
    /// Extra exclusion patterns, applied from the scan root.
    pub additional_patterns: Vec<String>,
    /// Skip entries whose name starts with `.`.
    pub skip_hidden: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extensions: BTreeSet::new(),
            respect_ignore_files: true,
            additional_patterns: Vec::new(),
            skip_hidden: true,
        }
    }
}

impl ScanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the extension set. Entries are normalized (see [`normalize_extension`]).
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .filter_map(|ext| normalize_extension(ext.as_ref()))
            .collect();
        self
    }

    /// Append extra exclusion patterns.
    pub fn with_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.additional_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    pub fn with_respect_ignore_files(mut self, respect: bool) -> Self {
        self.respect_ignore_files = respect;
        self
    }

    pub fn with_skip_hidden(mut self, skip: bool) -> Self {
        self.skip_hidden = skip;
        self
    }

    /// Normalize extensions that were set directly or deserialized.
    pub fn normalized(mut self) -> Self {
        self.extensions = self
            .extensions
            .iter()
            .filter_map(|ext| normalize_extension(ext))
            .collect();
        self
    }

    /// Whether the file's extension (case-insensitive) is requested.
    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.contains(&ext.to_lowercase()))
    }
}

/// Trim, strip a leading `.`, and lowercase an extension. Blank input yields `None`.
pub fn normalize_extension(raw: &str) -> Option<String> {
    let ext = raw.trim().trim_start_matches('.').to_lowercase();
    (!ext.is_empty()).then_some(ext)
}
