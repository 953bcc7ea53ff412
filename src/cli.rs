use crate::config::ScanOptions;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// One relative path per line
    #[default]
    Text,
    /// JSON array of file records
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "codegather",
    version,
    about = "Collect source files from a directory tree, honouring ignore rules",
    long_about = "codegather walks a directory, skips everything excluded by built-in patterns, \
                  --exclude patterns, .gitignore and .codegatherignore files, and lists the \
                  remaining files whose extension was requested."
)]
pub struct Cli {
    /// Root directory to scan
    pub root: PathBuf,

    /// File extensions to collect, without the leading dot (repeatable or comma-separated)
    #[arg(short = 'e', long = "ext", value_delimiter = ',')]
    pub extensions: Vec<String>,

    /// Additional ignore pattern (repeatable)
    #[arg(short = 'x', long = "exclude")]
    pub exclude: Vec<String>,

    /// Do not read .gitignore / .codegatherignore files
    #[arg(long)]
    pub no_ignore_files: bool,

    /// Descend into entries whose name starts with a dot
    #[arg(long)]
    pub include_hidden: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Configuration file (defaults to .codegather.* in the root)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbose diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Apply command-line flags on top of options from a config file.
    ///
    /// Extensions given on the command line replace configured ones; exclude
    /// patterns are appended.
    pub fn scan_options(&self, base: ScanOptions) -> ScanOptions {
        let mut options = base;
        if !self.extensions.is_empty() {
            options = options.with_extensions(&self.extensions);
        }
        options = options.with_patterns(self.exclude.iter().cloned());
        if self.no_ignore_files {
            options.respect_ignore_files = false;
        }
        if self.include_hidden {
            options.skip_hidden = false;
        }
        options
    }
}
