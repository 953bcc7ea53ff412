//! CLI command handlers.
//!
//! Kept out of main.rs so they can be unit tested.

mod scan;

pub use scan::{format_records, resolve_options, run_gather};
