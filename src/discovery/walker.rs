//! Recursive, cycle-safe directory traversal.

use super::ignore_file::load_ignore_files_at;
use super::patterns::PatternStore;
use super::record::{FileRecord, relative_path};
use super::visited::VisitedDirs;
use crate::config::ScanOptions;
use crate::error::{GatherError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};
use walkdir::{DirEntry, WalkDir};

/// Walks a directory tree and collects files by extension, pruning
/// everything the pattern store excludes.
#[derive(Debug, Clone, Default)]
pub struct DirectoryWalker {
    options: ScanOptions,
}

impl DirectoryWalker {
    pub fn new(options: ScanOptions) -> Self {
        Self {
            options: options.normalized(),
        }
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Scan `root` and return the selected files sorted by relative path.
    ///
    /// # Errors
    ///
    /// Fails only when `root` is not a readable directory. Every other
    /// problem (unreadable subdirectory, broken symlink, unreadable ignore
    /// file) is logged and the affected entry skipped.
    pub fn scan(&self, root: &Path) -> Result<Vec<FileRecord>> {
        if !root.is_dir() {
            return Err(GatherError::NotADirectory(root.to_path_buf()));
        }
        let root = root
            .canonicalize()
            .map_err(|source| GatherError::RootUnreadable {
                path: root.to_path_buf(),
                source,
            })?;
        debug!(root = %root.display(), extensions = ?self.options.extensions, "Starting scan");

        let mut state = ScanState::new(&root, &self.options);
        let mut records = Vec::new();

        let entries = WalkDir::new(&root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| state.admit(entry));

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.loop_ancestor().is_some() => {
                    trace!(path = ?err.path(), "Symlink cycle; not descending");
                    continue;
                }
                Err(err) if err.depth() == 0 => {
                    return Err(GatherError::RootUnreadable {
                        path: root.clone(),
                        source: err.into(),
                    });
                }
                Err(err) => {
                    warn!(path = ?err.path(), error = %err, "Skipping unreadable entry");
                    continue;
                }
            };

            if entry.depth() == 0 || !entry.file_type().is_file() {
                continue;
            }
            if !self.options.matches_extension(entry.path()) {
                continue;
            }
            if let Some(relative) = relative_path(&root, entry.path()) {
                records.push(FileRecord::new(entry.path(), relative));
            }
        }

        records.sort_by(|a, b| a.relative_path().cmp(b.relative_path()));
        debug!(
            files = records.len(),
            directories = state.visited_count(),
            "Scan complete"
        );
        Ok(records)
    }
}

/// Scan `root` with `options`.
pub fn scan(root: &Path, options: &ScanOptions) -> Result<Vec<FileRecord>> {
    DirectoryWalker::new(options.clone()).scan(root)
}

/// Per-scan mutable state: patterns discovered so far and directories entered.
struct ScanState<'a> {
    root: PathBuf,
    options: &'a ScanOptions,
    store: PatternStore,
    visited: VisitedDirs,
}

impl<'a> ScanState<'a> {
    fn new(root: &Path, options: &'a ScanOptions) -> Self {
        let mut store = PatternStore::new(root);
        store.load_defaults(&options.additional_patterns);
        Self {
            root: root.to_path_buf(),
            options,
            store,
            visited: VisitedDirs::new(),
        }
    }

    fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Decide whether walkdir should yield `entry` and, for directories,
    /// descend into it.
    fn admit(&mut self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            self.enter_directory(entry.path());
            return true;
        }

        if self.options.skip_hidden && is_hidden(entry) {
            trace!(path = %entry.path().display(), "Skipping hidden entry");
            return false;
        }

        let Some(relative) = relative_path(&self.root, entry.path()) else {
            return false;
        };
        if self.store.should_ignore(&relative) {
            debug!(path = %relative, "Excluded by ignore pattern");
            return false;
        }

        if entry.file_type().is_dir() {
            return self.enter_directory(entry.path());
        }
        true
    }

    fn enter_directory(&mut self, dir: &Path) -> bool {
        match self.visited.insert(dir) {
            Ok(true) => {}
            Ok(false) => {
                trace!(path = %dir.display(), "Directory already visited");
                return false;
            }
            Err(e) => {
                warn!(error = %e, "Skipping directory");
                return false;
            }
        }

        if self.options.respect_ignore_files {
            let patterns = load_ignore_files_at(dir);
            if !patterns.is_empty() {
                self.store.register_ignore_file_patterns(dir, &patterns);
            }
        }
        true
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().as_encoded_bytes().first() == Some(&b'.')
}
