//! Command-line parsing for the cycle dashboards.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the series/pipeline code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::Country;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "mcy", version, about = "Inflation / output-gap cycle dashboards (US, CN)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the run summary, joined scatter pairs, and an ASCII cycle plot.
    Report(ReportArgs),
    /// Print the raw series tables (inflation and output gap).
    Table(TableArgs),
    /// Export joined pairs to CSV and/or a cycle JSON file.
    Export(ExportArgs),
    /// Launch the interactive TUI.
    ///
    /// This uses the same underlying pipeline as `mcy report`, but renders the
    /// cycle chart, line charts, and tables in a terminal UI using Ratatui.
    Tui(TuiArgs),
}

/// Common options for the report view.
#[derive(Debug, Parser, Clone)]
pub struct ReportArgs {
    /// Country dashboard to compute (us, cn).
    #[arg(short = 'c', long, value_enum, default_value_t = Country::Us)]
    pub country: Country,

    /// Number of recent months on the cycle chart.
    #[arg(short = 'w', long, default_value_t = 24)]
    pub window: usize,

    /// Render an ASCII cycle plot in the terminal (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,
}

/// Options for the raw-table view.
#[derive(Debug, Parser)]
pub struct TableArgs {
    /// Country dashboard to print (us, cn).
    #[arg(short = 'c', long, value_enum, default_value_t = Country::Us)]
    pub country: Country,

    /// Limit each table to its most recent N rows.
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

/// Options for exports.
#[derive(Debug, Parser)]
pub struct ExportArgs {
    /// Country dashboard to export (us, cn).
    #[arg(short = 'c', long, value_enum, default_value_t = Country::Us)]
    pub country: Country,

    /// Number of recent months to join.
    #[arg(short = 'w', long, default_value_t = 24)]
    pub window: usize,

    /// Write joined pairs to a CSV file.
    #[arg(long, value_name = "CSV")]
    pub csv: Option<PathBuf>,

    /// Write a cycle JSON file (metadata + joined pairs).
    #[arg(long, value_name = "JSON")]
    pub json: Option<PathBuf>,
}

/// Options for the TUI.
#[derive(Debug, Parser, Clone)]
pub struct TuiArgs {
    /// Country dashboard to open first (us, cn).
    #[arg(short = 'c', long, value_enum, default_value_t = Country::Us)]
    pub country: Country,

    /// Initial cycle-chart window (months).
    #[arg(short = 'w', long, default_value_t = 24)]
    pub window: usize,
}
