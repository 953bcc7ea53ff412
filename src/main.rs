use clap::Parser;
use codegather::{Cli, handlers::run_gather, logging::init_logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run_gather(&cli)
}
