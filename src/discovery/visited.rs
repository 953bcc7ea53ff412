//! Canonical directory set used to break symlink cycles.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CanonicalError {
    #[error("Failed to canonicalize {}: {source}", path.display())]
    CanonicalizeFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Directories entered during one scan, keyed by their symlink-resolved path.
///
/// Two routes to the same directory (a symlink and its target, or two
/// symlinks) resolve to the same key, so only the first route is walked.
#[derive(Debug, Clone, Default)]
pub struct VisitedDirs {
    paths: HashSet<PathBuf>,
}

impl VisitedDirs {
    pub fn new() -> Self {
        Self {
            paths: HashSet::new(),
        }
    }

    /// Record `path`, returning `Ok(false)` if it was already visited.
    ///
    /// # Errors
    ///
    /// Fails when the path cannot be canonicalized. The path is not recorded
    /// in that case.
    pub fn insert(&mut self, path: impl AsRef<Path>) -> Result<bool, CanonicalError> {
        let canonical = canonicalize(path.as_ref())?;
        Ok(self.paths.insert(canonical))
    }

    /// Whether `path` resolves to an already visited directory.
    #[cfg(test)]
    pub fn contains(&self, path: impl AsRef<Path>) -> Result<bool, CanonicalError> {
        let canonical = canonicalize(path.as_ref())?;
        Ok(self.paths.contains(&canonical))
    }

    /// Number of distinct directories entered.
    pub(crate) fn len(&self) -> usize {
        self.paths.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

fn canonicalize(path: &Path) -> Result<PathBuf, CanonicalError> {
    path.canonicalize()
        .map_err(|source| CanonicalError::CanonicalizeFailed {
            path: path.to_path_buf(),
            source,
        })
}
