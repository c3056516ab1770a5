//! Reporting utilities: formatted terminal output for summaries and tables.
//!
//! We keep formatting code in one place so:
//! - the series/pipeline code stays clean and testable
//! - output changes are localized (important for future snapshot tests)

pub mod format;

pub use format::{format_joined_table, format_run_summary, format_series_table};
