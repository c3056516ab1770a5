//! Shared pipeline logic used by both CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! normalize -> estimate gap -> fill monthly -> join scatter pairs
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).
//! Everything here is a pure transformation of the embedded datasets; the two
//! country runs share no state and are recomputed in full on demand.

use crate::data;
use crate::domain::{Country, CountryConfig, JoinedPoint, Series};
use crate::series::{fill, join, normalize, trend};

/// All computed series for one country dashboard.
#[derive(Debug, Clone)]
pub struct CountryRun {
    pub config: CountryConfig,
    /// Monthly core inflation, descending.
    pub inflation: Series,
    /// The output source after normalization: a level (CN) or an
    /// already-derived gap (US), at its native cadence.
    pub output_raw: Series,
    /// Gap at native cadence — the estimator's result when anchors are
    /// configured, otherwise `output_raw` as-is.
    pub gap_raw: Series,
    /// Gap-filled monthly series consumed by the joiner.
    pub gap: Series,
    /// Potential-output overlay for the line chart; present only when the
    /// output source is a level series.
    pub potential: Option<Series>,
}

impl CountryRun {
    /// Scatter pairs for the most recent `window` months.
    pub fn joined(&self, window: usize) -> Vec<JoinedPoint> {
        join::join_cycle(&self.inflation, &self.gap, window)
    }
}

/// Execute the full data-preparation pipeline for one country.
pub fn run_country(country: Country) -> CountryRun {
    let config = data::config(country);

    // 1) Normalize both raw sources.
    let inflation = normalize::parse(&config.inflation);
    let output_raw = normalize::parse(&config.output);

    // 2) Derive the gap when the source is a level series.
    let gap_raw = match &config.trend {
        Some(anchors) => trend::estimate_gap(&output_raw, anchors),
        None => output_raw.clone(),
    };

    // 3) Fill to a gapless monthly grid, padded through the inflation
    //    series' latest month so every scatter window month can be joined.
    let until = inflation
        .latest()
        .or_else(|| gap_raw.latest())
        .map(|p| p.month);
    let gap = match until {
        Some(until) => fill::fill(&gap_raw, until, config.cadence_months),
        None => Series::default(),
    };

    // 4) Potential overlay for the output line chart.
    let potential = config
        .trend
        .as_ref()
        .map(|anchors| trend::potential_series(anchors, &output_raw));

    CountryRun {
        config,
        inflation,
        output_raw,
        gap_raw,
        gap,
        potential,
    }
}
