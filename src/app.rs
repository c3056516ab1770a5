//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the per-country data pipeline
//! - prints reports/tables/plots
//! - writes optional exports
//! - launches the TUI

use clap::Parser;

use crate::cli::{Command, ExportArgs, ReportArgs, TableArgs};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `mcy` binary.
pub fn run() -> Result<(), AppError> {
    // We want `mcy` and `mcy -c cn` to behave like `mcy tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing. This preserves a clean clap structure
    // while retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Report(args) => handle_report(args),
        Command::Table(args) => handle_table(args),
        Command::Export(args) => handle_export(args),
        Command::Tui(args) => crate::tui::run(args),
    }
}

fn handle_report(args: ReportArgs) -> Result<(), AppError> {
    let run = pipeline::run_country(args.country);
    let joined = run.joined(args.window);

    println!("{}", crate::report::format_run_summary(&run, args.window));
    println!("{}", crate::report::format_joined_table(&joined));

    if args.plot && !args.no_plot {
        let plot =
            crate::plot::render_cycle_plot(&joined, &run.config.bounds, args.width, args.height);
        println!("{plot}");
    }

    Ok(())
}

fn handle_table(args: TableArgs) -> Result<(), AppError> {
    let run = pipeline::run_country(args.country);

    println!(
        "{}",
        crate::report::format_series_table(run.config.inflation_label, &run.inflation, args.limit)
    );
    println!(
        "{}",
        crate::report::format_series_table(run.config.gap_label, &run.gap_raw, args.limit)
    );

    Ok(())
}

fn handle_export(args: ExportArgs) -> Result<(), AppError> {
    if args.csv.is_none() && args.json.is_none() {
        return Err(AppError::new(
            2,
            "Nothing to export: pass --csv <path> and/or --json <path>.",
        ));
    }

    let run = pipeline::run_country(args.country);
    let joined = run.joined(args.window);

    if let Some(path) = &args.csv {
        crate::io::export::write_cycle_csv(path, &joined)?;
    }
    if let Some(path) = &args.json {
        crate::io::export::write_cycle_json(path, &run, args.window, &joined)?;
    }

    Ok(())
}

/// Rewrite argv so `mcy` defaults to `mcy tui`.
///
/// Rules:
/// - `mcy`                      -> `mcy tui`
/// - `mcy -c cn ...`            -> `mcy tui -c cn ...`
/// - `mcy --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "report" | "table" | "export" | "tui");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_defaults_to_tui() {
        assert_eq!(rewrite_args(args(&["mcy"])), args(&["mcy", "tui"]));
        assert_eq!(
            rewrite_args(args(&["mcy", "-c", "cn"])),
            args(&["mcy", "tui", "-c", "cn"])
        );
    }

    #[test]
    fn subcommands_and_help_pass_through() {
        assert_eq!(
            rewrite_args(args(&["mcy", "report"])),
            args(&["mcy", "report"])
        );
        assert_eq!(
            rewrite_args(args(&["mcy", "--help"])),
            args(&["mcy", "--help"])
        );
    }
}
