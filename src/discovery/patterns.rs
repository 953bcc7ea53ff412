//! Exclusion rules consulted during a scan.
//!
//! The store is a plain union: a path is excluded when any default, additional
//! or ignore-file pattern matches it. Ignore-file patterns only apply beneath
//! the directory whose ignore file declared them, and are matched against the
//! path relative to that directory.

use super::record::relative_path;
use crate::glob::Pattern;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Built-in exclusions: VCS metadata, OS metadata files, dependency and
/// build-output directories, IDE project bundles.
pub const DEFAULT_PATTERNS: &[&str] = &[
    ".git/",
    ".svn/",
    ".hg/",
    ".DS_Store",
    "Thumbs.db",
    "desktop.ini",
    "node_modules/",
    "bower_components/",
    "Pods/",
    "dist/",
    ".build/",
    "DerivedData/",
    "target/",
    ".idea/",
    ".vscode/",
    "*.xcodeproj/",
    "*.xcworkspace/",
    "__pycache__/",
];

/// Normalize a raw pattern string.
///
/// A pattern that names a nested path (`components/ui`) without any glob
/// metacharacter becomes a directory pattern (`components/ui/`), so it also
/// excludes everything beneath that path wherever it occurs in the tree.
/// Everything else is only trimmed.
pub fn normalize_pattern(raw: &str) -> String {
    let pattern = raw.trim();
    if pattern.contains('/') && !pattern.ends_with('/') && !pattern.contains(['*', '?', '[']) {
        format!("{pattern}/")
    } else {
        pattern.to_string()
    }
}

#[derive(Debug, Clone)]
struct ScopedPatterns {
    directory: PathBuf,
    /// Relative path of `directory` from the scan root; empty for the root.
    prefix: String,
    patterns: Vec<Pattern>,
}

impl ScopedPatterns {
    fn relative_to_scope<'a>(&self, path: &'a str) -> Option<&'a str> {
        if self.prefix.is_empty() {
            return Some(path);
        }
        path.strip_prefix(self.prefix.as_str())
            .and_then(|rest| rest.strip_prefix('/'))
            .filter(|rest| !rest.is_empty())
    }

    fn matches(&self, path: &str) -> bool {
        self.relative_to_scope(path)
            .is_some_and(|sub| self.patterns.iter().any(|p| p.matches(sub)))
    }
}

/// Patterns in effect for one scan.
#[derive(Debug, Clone)]
pub struct PatternStore {
    root: PathBuf,
    defaults: Vec<Pattern>,
    scoped: Vec<ScopedPatterns>,
}

impl PatternStore {
    /// Create an empty store for a scan rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            defaults: Vec::new(),
            scoped: Vec::new(),
        }
    }

    /// Install the built-in patterns followed by `additional`.
    ///
    /// Replaces any previously installed defaults, so repeated calls with the
    /// same input leave the store unchanged.
    pub fn load_defaults(&mut self, additional: &[String]) {
        self.defaults = DEFAULT_PATTERNS
            .iter()
            .copied()
            .chain(additional.iter().map(String::as_str))
            .filter_map(prepare)
            .collect();
        debug!(
            count = self.defaults.len(),
            additional = additional.len(),
            "Loaded default patterns"
        );
    }

    /// Register patterns read from ignore files in `directory`.
    pub fn register_ignore_file_patterns(&mut self, directory: &Path, patterns: &[String]) {
        let compiled: Vec<Pattern> = patterns
            .iter()
            .map(String::as_str)
            .filter_map(prepare)
            .collect();
        if compiled.is_empty() {
            return;
        }
        debug!(
            directory = %directory.display(),
            count = compiled.len(),
            "Registered ignore-file patterns"
        );

        if let Some(scope) = self.scoped.iter_mut().find(|s| s.directory == directory) {
            scope.patterns.extend(compiled);
            return;
        }

        let prefix = relative_path(&self.root, directory).unwrap_or_else(|| {
            warn!(
                directory = %directory.display(),
                root = %self.root.display(),
                "Ignore file outside the scan root; scoping its patterns to the root"
            );
            String::new()
        });
        self.scoped.push(ScopedPatterns {
            directory: directory.to_path_buf(),
            prefix,
            patterns: compiled,
        });
    }

    /// Whether `relative_path` is excluded. The root itself (`""`) never is.
    pub fn should_ignore(&self, relative_path: &str) -> bool {
        if relative_path.is_empty() {
            return false;
        }
        self.defaults.iter().any(|p| p.matches(relative_path))
            || self.scoped.iter().any(|scope| scope.matches(relative_path))
    }

    /// Normalized default and additional patterns, in installation order.
    pub fn default_patterns(&self) -> Vec<&str> {
        self.defaults.iter().map(Pattern::as_str).collect()
    }

    /// Ignore-file patterns per declaring directory, in discovery order.
    pub fn scoped_patterns(&self) -> Vec<(&Path, Vec<&str>)> {
        self.scoped
            .iter()
            .map(|scope| {
                (
                    scope.directory.as_path(),
                    scope.patterns.iter().map(Pattern::as_str).collect(),
                )
            })
            .collect()
    }

    /// Every normalized pattern currently stored.
    pub fn patterns(&self) -> Vec<&str> {
        self.defaults
            .iter()
            .chain(self.scoped.iter().flat_map(|scope| scope.patterns.iter()))
            .map(Pattern::as_str)
            .collect()
    }
}

fn prepare(raw: &str) -> Option<Pattern> {
    let normalized = normalize_pattern(raw);
    if normalized.is_empty() {
        return None;
    }
    if normalized.starts_with('!') {
        debug!(pattern = %normalized, "Skipping negated pattern; re-inclusion is not supported");
        return None;
    }
    Some(Pattern::new(normalized))
}
