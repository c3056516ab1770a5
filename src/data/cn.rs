//! CN datasets: core inflation (monthly) and real output (quarterly index,
//! 2019Q4 = 100). Both arrive as `(date, value)` string rows.
//!
//! Unlike the US source, the CN output series is a *level*, so the pipeline
//! subtracts a linear potential-output trend anchored at 100 (2019-12) and
//! 127 (2024-06) to obtain the gap.

use crate::domain::{
    AxisBounds, Country, CountryConfig, MonthKey, RawSource, TrendAnchor, TrendAnchors,
};

/// Core CPI inflation, year-over-year %.
const CORE_INFLATION: &[(&str, &str)] = &[
    ("2021-01-31", "-0.3"),
    ("2021-02-28", "0.0"),
    ("2021-03-31", "0.3"),
    ("2021-04-30", "0.7"),
    ("2021-05-31", "0.9"),
    ("2021-06-30", "0.9"),
    ("2021-07-31", "1.3"),
    ("2021-08-31", "1.2"),
    ("2021-09-30", "1.2"),
    ("2021-10-31", "1.3"),
    ("2021-11-30", "1.2"),
    ("2021-12-31", "1.2"),
    ("2022-01-31", "1.2"),
    ("2022-02-28", "1.1"),
    ("2022-03-31", "1.1"),
    ("2022-04-30", "0.9"),
    ("2022-05-31", "0.9"),
    ("2022-06-30", "1.0"),
    ("2022-07-31", "0.8"),
    ("2022-08-31", "0.8"),
    ("2022-09-30", "0.6"),
    ("2022-10-31", "0.6"),
    ("2022-11-30", "0.6"),
    ("2022-12-31", "0.7"),
    ("2023-01-31", "1.0"),
    ("2023-02-28", "0.6"),
    ("2023-03-31", "0.7"),
    ("2023-04-30", "0.7"),
    ("2023-05-31", "0.6"),
    ("2023-06-30", "0.4"),
    ("2023-07-31", "0.8"),
    ("2023-08-31", "0.8"),
    ("2023-09-30", "0.8"),
    ("2023-10-31", "0.6"),
    ("2023-11-30", "0.6"),
    ("2023-12-31", "0.6"),
    ("2024-01-31", "0.4"),
    ("2024-02-29", "1.2"),
    ("2024-03-31", "0.6"),
    ("2024-04-30", "0.7"),
    ("2024-05-31", "0.6"),
    ("2024-06-30", "0.6"),
    ("2024-07-31", "0.4"),
    ("2024-08-31", "0.3"),
    ("2024-09-30", "0.1"),
    ("2024-10-31", "0.2"),
    ("2024-11-30", "0.3"),
    ("2024-12-31", "0.4"),
    ("2025-01-31", "0.6"),
    ("2025-02-28", "-0.1"),
    ("2025-03-31", "0.5"),
    ("2025-04-30", "0.5"),
    ("2025-05-31", "0.6"),
    ("2025-06-30", "0.7"),
];

/// Real output, seasonally adjusted index (2019Q4 = 100), quarterly.
const OUTPUT: &[(&str, &str)] = &[
    ("2019-12-31", "100.0"),
    ("2020-03-31", "92.0"),
    ("2020-06-30", "99.0"),
    ("2020-09-30", "102.5"),
    ("2020-12-31", "105.2"),
    ("2021-03-31", "107.2"),
    ("2021-06-30", "109.4"),
    ("2021-09-30", "109.9"),
    ("2021-12-31", "111.8"),
    ("2022-03-31", "112.8"),
    ("2022-06-30", "111.6"),
    ("2022-09-30", "114.7"),
    ("2022-12-31", "115.6"),
    ("2023-03-31", "118.1"),
    ("2023-06-30", "120.0"),
    ("2023-09-30", "121.3"),
    ("2023-12-31", "122.5"),
    ("2024-03-31", "123.6"),
    ("2024-06-30", "124.8"),
    ("2024-09-30", "125.9"),
    ("2024-12-31", "127.1"),
    ("2025-03-31", "128.2"),
];

pub fn config() -> CountryConfig {
    CountryConfig {
        country: Country::Cn,
        inflation: RawSource::DateRows(CORE_INFLATION),
        output: RawSource::DateRows(OUTPUT),
        trend: Some(TrendAnchors {
            base: TrendAnchor {
                month: MonthKey::at(2019, 12),
                level: 100.0,
            },
            later: TrendAnchor {
                month: MonthKey::at(2024, 6),
                level: 127.0,
            },
        }),
        cadence_months: 3,
        bounds: AxisBounds {
            x: [0.0, 3.0],
            y: [-6.0, 6.0],
            x_ref: 1.3,
            y_ref: 0.0,
        },
        inflation_label: "CN Core Inflation Rate (%)",
        gap_label: "Estimated CN output gap (2019Q4=100) (%)",
        default_window: 24,
    }
}

#[cfg(test)]
mod tests {
    use crate::series::{normalize, trend};

    #[test]
    fn cn_sources_parse_cleanly() {
        let config = super::config();
        let inflation = normalize::parse(&config.inflation);
        let output = normalize::parse(&config.output);

        assert_eq!(inflation.latest().unwrap().month.to_string(), "2025-06");
        assert_eq!(inflation.len(), 54);
        assert!(inflation.iter().all(|p| p.value.is_finite()));

        assert_eq!(output.earliest().unwrap().month.to_string(), "2019-12");
        assert_eq!(output.latest().unwrap().month.to_string(), "2025-03");
    }

    #[test]
    fn cn_gap_is_zero_at_the_trend_base() {
        let config = super::config();
        let output = normalize::parse(&config.output);
        let anchors = config.trend.unwrap();
        let gap = trend::estimate_gap(&output, &anchors);

        // 2019-12 is the 100-index base and the trend's base anchor.
        assert_eq!(gap.value_at("2019-12".parse().unwrap()), Some(0.0));
        // The recent end of the series sits below potential.
        assert!(gap.latest().unwrap().value < 0.0);
    }
}
