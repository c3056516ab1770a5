//! Monthly gap filling for sparse series.
//!
//! The output-gap sources arrive at a quarterly cadence while the inflation
//! series is monthly. `fill` produces a complete monthly series over the
//! sparse series' observed range, then extends it forward to `until` with
//! flat-carry padding so the joiner always finds an entry at or before any
//! inflation month in the display window.

use crate::domain::{MonthKey, ObservedPoint, Series};

/// Fill every missing month inside the observed range by linear
/// interpolation, then pad `(latest, until]` with the last filled value when
/// the series ends before `until`. The recent end is never truncated: when
/// `until` is at or before the latest observation the padding step is skipped
/// and the observed range is returned in full.
///
/// `cadence_months` is the native spacing of the sparse series and is used as
/// the interpolation divisor. The division reproduces exact linear
/// interpolation only when consecutive observations are exactly
/// `cadence_months` apart — a modeling assumption inherited from the source
/// datasets, kept explicit here rather than hard-coded.
pub fn fill(series: &Series, until: MonthKey, cadence_months: u32) -> Series {
    let (Some(earliest), Some(latest)) = (series.earliest(), series.latest()) else {
        return Series::default();
    };
    let earliest_month = earliest.month;
    let latest_month = latest.month;

    let mut out: Vec<ObservedPoint> = Vec::new();

    // Observed range, walked chronologically.
    let mut m = earliest_month;
    while m <= latest_month {
        let value = match series.value_at(m) {
            Some(observed) => observed,
            None => interpolate(series, m, cadence_months),
        };
        out.push(ObservedPoint { month: m, value });
        m = m.plus_months(1);
    }

    // Flat carry toward `until`. The loop above emitted at least one entry,
    // so `last()` cannot fail here.
    if latest_month < until {
        if let Some(carry) = out.last().map(|p| p.value) {
            let mut m = latest_month.plus_months(1);
            while m <= until {
                out.push(ObservedPoint { month: m, value: carry });
                m = m.plus_months(1);
            }
        }
    }

    Series::from_points(out)
}

/// Linear fill value for an unobserved month strictly inside the observed
/// range.
///
/// Scanning the descending series, the first entry at-or-before `m` is the
/// nearest earlier observation (`last`); the entry just before it in scan
/// order is the nearest later one (`next`). The fill walks
/// `months-from-last / cadence` of the way between their values.
fn interpolate(series: &Series, m: MonthKey, cadence_months: u32) -> f64 {
    let points = series.points();
    let Some(k) = points.iter().position(|p| p.month <= m) else {
        return f64::NAN;
    };
    if k == 0 {
        // `m` would be at or past the latest observation; the fill loop never
        // asks for that, but degrade rather than index out of bounds.
        return f64::NAN;
    }
    let next = points[k - 1];
    let last = points[k];
    let d = m.months_since(last.month) as f64;
    last.value + (next.value - last.value) * d / cadence_months as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(s: &str) -> MonthKey {
        s.parse().unwrap()
    }

    fn quarterly(pairs: &[(&str, f64)]) -> Series {
        Series::from_points(
            pairs
                .iter()
                .map(|&(m, v)| ObservedPoint {
                    month: ym(m),
                    value: v,
                })
                .collect(),
        )
    }

    #[test]
    fn filled_series_is_total_over_range_and_padding() {
        let s = quarterly(&[("2023-03", 1.0), ("2023-06", 2.0), ("2023-09", 0.5)]);
        let filled = fill(&s, ym("2023-12"), 3);

        // 2023-03 .. 2023-12 inclusive: 10 months, each exactly once.
        assert_eq!(filled.len(), 10);
        let mut expect = ym("2023-12");
        for p in filled.iter() {
            assert_eq!(p.month, expect);
            expect = expect.plus_months(-1);
        }
    }

    #[test]
    fn interpolation_is_exact_at_quarter_cadence() {
        let s = quarterly(&[("2024-01", 100.0), ("2024-04", 106.0)]);
        let filled = fill(&s, ym("2024-04"), 3);

        assert_eq!(filled.value_at(ym("2024-01")), Some(100.0));
        assert_eq!(filled.value_at(ym("2024-02")), Some(102.0));
        assert_eq!(filled.value_at(ym("2024-03")), Some(104.0));
        assert_eq!(filled.value_at(ym("2024-04")), Some(106.0));
    }

    #[test]
    fn observed_months_pass_through_unchanged() {
        let s = quarterly(&[("2022-03", -1.5), ("2022-06", -0.3)]);
        let filled = fill(&s, ym("2022-06"), 3);
        assert_eq!(filled.value_at(ym("2022-03")), Some(-1.5));
        assert_eq!(filled.value_at(ym("2022-06")), Some(-0.3));
    }

    #[test]
    fn flat_padding_carries_the_latest_value() {
        let s = quarterly(&[("2024-01", 3.0), ("2024-04", 1.0)]);
        let filled = fill(&s, ym("2025-06"), 3);

        // 14 synthetic months after 2024-04, all exactly 1.0.
        let mut m = ym("2024-05");
        let mut padded = 0;
        while m <= ym("2025-06") {
            assert_eq!(filled.value_at(m), Some(1.0), "month {m}");
            padded += 1;
            m = m.plus_months(1);
        }
        assert_eq!(padded, 14);
    }

    #[test]
    fn until_at_or_before_latest_skips_padding_without_truncation() {
        let s = quarterly(&[("2024-01", 3.0), ("2024-04", 1.0)]);

        let filled = fill(&s, ym("2024-02"), 3);
        // No months beyond the observed range, and none removed either.
        assert_eq!(filled.latest().unwrap().month, ym("2024-04"));
        assert_eq!(filled.earliest().unwrap().month, ym("2024-01"));
        assert_eq!(filled.len(), 4);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let filled = fill(&Series::default(), ym("2024-01"), 3);
        assert!(filled.is_empty());
    }

    #[test]
    fn single_observation_pads_flat() {
        let s = quarterly(&[("2024-06", 2.5)]);
        let filled = fill(&s, ym("2024-09"), 3);
        assert_eq!(filled.len(), 4);
        for p in filled.iter() {
            assert_eq!(p.value, 2.5);
        }
    }

    #[test]
    fn nan_observations_propagate_into_fill() {
        let s = quarterly(&[("2024-01", f64::NAN), ("2024-04", 106.0)]);
        let filled = fill(&s, ym("2024-04"), 3);
        assert!(filled.value_at(ym("2024-02")).unwrap().is_nan());
        assert_eq!(filled.value_at(ym("2024-04")), Some(106.0));
    }
}
