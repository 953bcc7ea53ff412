//! Collected files and root-relative paths.

use serde::Serialize;
use std::borrow::Cow;
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// A file selected by a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    path: PathBuf,
    relative_path: String,
}

impl FileRecord {
    pub fn new(path: impl Into<PathBuf>, relative_path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            relative_path: relative_path.into(),
        }
    }

    /// Absolute location of the file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Location relative to the scan root, `/`-separated.
    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }
}

/// Express `path` relative to `root` with `/` separators and no leading or
/// trailing separator. The root itself yields `""`.
///
/// Returns `None` when `path` is not beneath `root`.
pub fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let rest = path.strip_prefix(root).ok()?;
    let segments: Vec<_> = rest
        .components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(segment_text(name, path)),
            _ => None,
        })
        .collect();
    Some(segments.join("/"))
}

/// Non-UTF-8 names are replaced lossily; patterns then match the replaced text.
fn segment_text<'a>(name: &'a OsStr, path: &Path) -> Cow<'a, str> {
    match name.to_str() {
        Some(text) => Cow::Borrowed(text),
        None => {
            debug!(path = %path.display(), "Non-UTF-8 file name; relative path is lossy");
            name.to_string_lossy()
        }
    }
}
