//! Gitignore-aware source file collection.
//!
//! [`DirectoryWalker::scan`] walks a root directory, prunes everything
//! excluded by built-in patterns, caller-supplied patterns and
//! `.gitignore` / `.codegatherignore` files, and returns the remaining files
//! with a requested extension, sorted by their path relative to the root.
//!
//! ```no_run
//! use codegather::{ScanOptions, scan};
//! use std::path::Path;
//!
//! let options = ScanOptions::new()
//!     .with_extensions(["tsx", "js"])
//!     .with_patterns(["components/ui"]);
//! for record in scan(Path::new("."), &options)? {
//!     println!("{}", record.relative_path());
//! }
//! # Ok::<(), codegather::GatherError>(())
//! ```

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod glob;
pub mod handlers;
pub mod logging;

pub use cli::{Cli, OutputFormat};
pub use config::{Config, ConfigError, ScanOptions};
pub use discovery::{DirectoryWalker, FileRecord, PatternStore, scan};
pub use error::{GatherError, Result};
pub use glob::Pattern;
