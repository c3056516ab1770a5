//! Formatted terminal output: run summary, series tables, joined pairs.

use crate::app::pipeline::CountryRun;
use crate::domain::{JoinedPoint, Series};

/// Format the full run summary (dataset ranges + pipeline configuration).
pub fn format_run_summary(run: &CountryRun, window: usize) -> String {
    let config = &run.config;
    let mut out = String::new();

    out.push_str(&format!(
        "=== mcy - {} inflation / output-gap cycle ===\n",
        config.country.display_name()
    ));
    out.push_str(&format!(
        "Inflation: n={} | {}\n",
        run.inflation.len(),
        fmt_range(&run.inflation)
    ));
    out.push_str(&format!(
        "Gap (raw): n={} | {} | cadence={}mo\n",
        run.gap_raw.len(),
        fmt_range(&run.gap_raw),
        config.cadence_months
    ));
    out.push_str(&format!(
        "Gap (filled): n={} | {}\n",
        run.gap.len(),
        fmt_range(&run.gap)
    ));
    if let Some(anchors) = &config.trend {
        out.push_str(&format!(
            "Potential trend: {:.1} @ {} -> {:.1} @ {}\n",
            anchors.base.level, anchors.base.month, anchors.later.level, anchors.later.month
        ));
    }
    out.push_str(&format!(
        "Window: last {window} months | joined pairs: {}\n",
        run.joined(window).len()
    ));

    out
}

/// Format one raw series as a two-column table (month, value), newest first.
///
/// `limit` caps the row count; `None` prints the whole series.
pub fn format_series_table(title: &str, series: &Series, limit: Option<usize>) -> String {
    let mut out = String::new();

    out.push_str(title);
    out.push('\n');
    out.push_str(&format!("{:<10} {:>10}\n", "Year-Month", "%"));
    out.push_str(&format!("{:-<10} {:-<10}\n", "", ""));

    let rows = limit.unwrap_or(series.len());
    for p in series.window(rows) {
        out.push_str(&format!("{:<10} {:>10.2}\n", p.month.to_string(), p.value));
    }

    out
}

/// Format the joined scatter pairs, newest first.
pub fn format_joined_table(points: &[JoinedPoint]) -> String {
    let mut out = String::new();

    out.push_str("Cycle pairs (newest first):\n");
    out.push_str(&format!(
        "{:<10} {:>14} {:>14}\n",
        "Year-Month", "inflation (x)", "gap (y)"
    ));
    out.push_str(&format!("{:-<10} {:-<14} {:-<14}\n", "", "", ""));

    for p in points {
        out.push_str(&format!(
            "{:<10} {:>14.2} {:>14.2}\n",
            p.month.to_string(),
            p.x,
            p.y
        ));
    }

    out
}

fn fmt_range(series: &Series) -> String {
    match (series.earliest(), series.latest()) {
        (Some(first), Some(last)) => format!("{} .. {}", first.month, last.month),
        _ => "-".to_string(),
    }
}
