//! Scatter-pair construction.
//!
//! Pairs each inflation month in the display window with the output-gap value
//! at the same or nearest-earlier month — a backward-nearest-neighbor join,
//! never forward-looking.

use crate::domain::{JoinedPoint, Series};

/// Join the most recent `window` inflation months against a gap-filled
/// series.
///
/// Inflation months that predate all gap data are skipped entirely, so the
/// result may be shorter than `window`. Ordering follows the inputs: newest
/// first. Month labels belong to the joined points themselves, which keeps
/// values and labels index-aligned by construction.
pub fn join_cycle(inflation: &Series, gap: &Series, window: usize) -> Vec<JoinedPoint> {
    let mut out = Vec::new();
    for p in inflation.window(window) {
        let Some(g) = gap.at_or_before(p.month) else {
            continue;
        };
        out.push(JoinedPoint {
            month: p.month,
            x: p.value,
            y: g.value,
        });
    }
    out
}

/// `YYYY-MM` labels for a joined dataset, index-aligned with `points`.
pub fn labels(points: &[JoinedPoint]) -> Vec<String> {
    points.iter().map(|p| p.month.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MonthKey, ObservedPoint};

    fn series(pairs: &[(&str, f64)]) -> Series {
        Series::from_points(
            pairs
                .iter()
                .map(|&(m, v)| ObservedPoint {
                    month: m.parse().unwrap(),
                    value: v,
                })
                .collect(),
        )
    }

    fn ym(s: &str) -> MonthKey {
        s.parse().unwrap()
    }

    #[test]
    fn joins_same_month_when_present_else_nearest_earlier() {
        let inflation = series(&[("2024-03", 3.0), ("2024-02", 3.2), ("2024-01", 3.4)]);
        let gap = series(&[("2024-02", -0.5), ("2023-11", -1.0)]);

        let joined = join_cycle(&inflation, &gap, 3);
        assert_eq!(joined.len(), 3);

        // 2024-03 has no gap entry; the nearest earlier one (2024-02) is used.
        assert_eq!(joined[0].month, ym("2024-03"));
        assert_eq!(joined[0].x, 3.0);
        assert_eq!(joined[0].y, -0.5);

        assert_eq!(joined[1].month, ym("2024-02"));
        assert_eq!(joined[1].y, -0.5);

        assert_eq!(joined[2].month, ym("2024-01"));
        assert_eq!(joined[2].y, -1.0);
    }

    #[test]
    fn months_before_all_gap_data_are_skipped() {
        let inflation = series(&[("2024-02", 3.2), ("2024-01", 3.4), ("2023-12", 3.6)]);
        let gap = series(&[("2024-01", -0.5)]);

        let joined = join_cycle(&inflation, &gap, 3);

        // 2023-12 predates all gap data: dropped, and the labels shrink with it.
        assert_eq!(joined.len(), 2);
        assert_eq!(labels(&joined), ["2024-02", "2024-01"]);
    }

    #[test]
    fn window_larger_than_series_is_not_an_error() {
        let inflation = series(&[("2024-01", 3.4)]);
        let gap = series(&[("2023-12", -1.0)]);

        let joined = join_cycle(&inflation, &gap, 24);
        assert_eq!(joined.len(), 1);
    }

    #[test]
    fn empty_gap_series_joins_nothing() {
        let inflation = series(&[("2024-01", 3.4)]);
        let joined = join_cycle(&inflation, &Series::default(), 24);
        assert!(joined.is_empty());
    }
}
