//! File discovery.
//!
//! This module handles:
//! - Directory traversal with symlink-cycle suppression
//! - Exclusion patterns (built-in, additional, `.gitignore`, `.codegatherignore`)
//! - Extension-based file selection

pub mod ignore_file;
pub mod patterns;
pub mod record;
pub mod visited;
pub mod walker;

pub use ignore_file::{IGNORE_FILE_NAMES, load_ignore_files_at, parse_ignore_content};
pub use patterns::{DEFAULT_PATTERNS, PatternStore, normalize_pattern};
pub use record::{FileRecord, relative_path};
pub use visited::{CanonicalError, VisitedDirs};
pub use walker::{DirectoryWalker, scan};
