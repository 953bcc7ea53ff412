//! Reading `.gitignore`-style files.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{trace, warn};

/// Ignore files recognised in every visited directory, read in this order.
pub const IGNORE_FILE_NAMES: [&str; 2] = [".gitignore", ".codegatherignore"];

/// Raw patterns from every recognised ignore file in `directory`.
///
/// Missing files contribute nothing. Unreadable files are logged and also
/// contribute nothing.
pub fn load_ignore_files_at(directory: &Path) -> Vec<String> {
    IGNORE_FILE_NAMES
        .iter()
        .flat_map(|name| read_ignore_file(&directory.join(name)))
        .collect()
}

/// Raw patterns from a single ignore file.
pub fn read_ignore_file(path: &Path) -> Vec<String> {
    match fs::read_to_string(path) {
        Ok(content) => {
            let patterns = parse_ignore_content(&content);
            trace!(path = %path.display(), count = patterns.len(), "Read ignore file");
            patterns
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read ignore file");
            Vec::new()
        }
    }
}

/// One pattern per line; blank lines and `#` comments are dropped.
pub fn parse_ignore_content(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
