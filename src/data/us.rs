//! US datasets: core inflation (monthly, year-row table) and output gap
//! (quarterly, epoch-millisecond pairs, already expressed in gap units —
//! no trend estimation needed).

use crate::domain::{AxisBounds, Country, CountryConfig, RawSource};

/// Core CPI inflation, year-over-year %. One row per year, one column per
/// month, `" \t"`-separated; the header row is skipped by the parser.
const CORE_INFLATION: &str = concat!(
    "Year \tJan \tFeb \tMar \tApr \tMay \tJun \tJul \tAug \tSep \tOct \tNov \tDec\n",
    "2025 \t3.1 \t3.1 \t2.8 \t2.8 \t2.8 \t2.9\n",
    "2024 \t3.9 \t3.8 \t3.8 \t3.6 \t3.4 \t3.3 \t3.2 \t3.2 \t3.3 \t3.3 \t3.3 \t3.2\n",
    "2023 \t5.6 \t5.5 \t5.6 \t5.5 \t5.3 \t4.8 \t4.7 \t4.3 \t4.1 \t4.0 \t4.0 \t3.9\n",
    "2022 \t6.0 \t6.4 \t6.5 \t6.2 \t6.0 \t5.9 \t5.9 \t6.3 \t6.6 \t6.3 \t6.0 \t5.7\n",
    "2021 \t1.4 \t1.3 \t1.6 \t3.0 \t3.8 \t4.5 \t4.3 \t4.0 \t4.0 \t4.6 \t4.9 \t5.5\n",
    "2020 \t2.3 \t2.4 \t2.1 \t1.4 \t1.2 \t1.2 \t1.6 \t1.7 \t1.7 \t1.6 \t1.6 \t1.6\n",
    "2019 \t2.2 \t2.1 \t2.0 \t2.1 \t2.0 \t2.1 \t2.2 \t2.4 \t2.4 \t2.3 \t2.3 \t2.3\n",
);

/// Output gap, % of potential GDP, quarterly. `(epoch_millis, value)` rows,
/// timestamps at mid-quarter-month UTC.
const OUTPUT_GAP: &[(i64, f64)] = &[
    (1547510400000, 0.5),  // 2019-01
    (1555286400000, 0.7),  // 2019-04
    (1563148800000, 0.8),  // 2019-07
    (1571097600000, 0.9),  // 2019-10
    (1579046400000, 1.0),  // 2020-01
    (1586908800000, -9.9), // 2020-04
    (1594771200000, -3.8), // 2020-07
    (1602720000000, -2.6), // 2020-10
    (1610668800000, -2.0), // 2021-01
    (1618444800000, -0.9), // 2021-04
    (1626307200000, -0.7), // 2021-07
    (1634256000000, -0.1), // 2021-10
    (1642204800000, -0.6), // 2022-01
    (1649980800000, -0.5), // 2022-04
    (1657843200000, -0.2), // 2022-07
    (1665792000000, 0.2),  // 2022-10
    (1673740800000, 0.3),  // 2023-01
    (1681516800000, 0.4),  // 2023-04
    (1689379200000, 0.9),  // 2023-07
    (1697328000000, 1.3),  // 2023-10
    (1705276800000, 1.2),  // 2024-01
    (1713139200000, 1.1),  // 2024-04
    (1721001600000, 1.0),  // 2024-07
    (1728950400000, 0.8),  // 2024-10
    (1736899200000, 0.6),  // 2025-01
    (1744675200000, 0.4),  // 2025-04
];

pub fn config() -> CountryConfig {
    CountryConfig {
        country: Country::Us,
        inflation: RawSource::YearRows(CORE_INFLATION),
        output: RawSource::EpochPairs(OUTPUT_GAP),
        // The source is already a gap series; no potential trend to subtract.
        trend: None,
        cadence_months: 3,
        bounds: AxisBounds {
            x: [-3.0, 7.0],
            y: [-10.0, 6.0],
            x_ref: 2.0,
            y_ref: 0.0,
        },
        inflation_label: "US Core Inflation Rate (%)",
        gap_label: "US output gap (%)",
        default_window: 24,
    }
}

#[cfg(test)]
mod tests {
    use crate::series::normalize;

    #[test]
    fn us_sources_parse_cleanly() {
        let config = super::config();
        let inflation = normalize::parse(&config.inflation);
        let gap = normalize::parse(&config.output);

        assert_eq!(inflation.latest().unwrap().month.to_string(), "2025-06");
        assert_eq!(inflation.earliest().unwrap().month.to_string(), "2019-01");
        assert!(inflation.iter().all(|p| p.value.is_finite()));

        assert_eq!(gap.latest().unwrap().month.to_string(), "2025-04");
        assert_eq!(gap.len(), 26);
        // Quarterly cadence throughout.
        for pair in gap.points().windows(2) {
            assert_eq!(pair[0].month.months_since(pair[1].month), 3);
        }
    }
}
