//! Scan handler.

use crate::{Cli, Config, DirectoryWalker, FileRecord, GatherError, OutputFormat, ScanOptions};
use std::process::ExitCode;
use tracing::{debug, info};

/// Run a scan and print the result to stdout.
pub fn run_gather(cli: &Cli) -> ExitCode {
    let records = match gather(cli) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };
    debug!(files = records.len(), "Formatting output");

    match format_records(cli.format, &records) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: failed to serialize output: {}", e);
            ExitCode::from(2)
        }
    }
}

fn gather(cli: &Cli) -> crate::Result<Vec<FileRecord>> {
    let options = resolve_options(cli)?;
    info!(root = %cli.root.display(), "Starting scan");
    DirectoryWalker::new(options).scan(&cli.root)
}

/// Merge the config file (explicit `--config`, or discovered in the root) with CLI flags.
pub fn resolve_options(cli: &Cli) -> crate::Result<ScanOptions> {
    let config = match cli.config {
        Some(ref path) => Config::from_file(path)?,
        None => Config::load(Some(cli.root.as_path())),
    };

    let options = cli.scan_options(config.scan);
    if options.extensions.is_empty() {
        return Err(GatherError::NoExtensions);
    }
    Ok(options)
}

/// Render records in the requested format.
pub fn format_records(
    format: OutputFormat,
    records: &[FileRecord],
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(records
            .iter()
            .map(|record| format!("{}\n", record.relative_path()))
            .collect()),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(records)?;
            json.push('\n');
            Ok(json)
        }
    }
}
