//! Raw-source parsing and normalization.
//!
//! This module turns each embedded raw dataset shape into a `Series`
//! (descending by month, deduped).
//!
//! Error policy: a malformed *numeric* field coerces to NaN rather than being
//! rejected — there is no downstream validation, so NaN flows into
//! interpolation and charts. That is the documented failure mode, and
//! `coerce_numeric` is the single place where it happens. Rows whose *date*
//! cannot be parsed are dropped instead; there is no month to attach a NaN to.

use chrono::{DateTime, Datelike, NaiveDate};

use crate::domain::{MonthKey, ObservedPoint, RawSource, Series};

/// Parse any raw source into a normalized series.
pub fn parse(source: &RawSource) -> Series {
    match *source {
        RawSource::YearRows(text) => parse_year_rows(text),
        RawSource::MonthRows(text) => parse_month_rows(text),
        RawSource::EpochPairs(rows) => parse_epoch_pairs(rows),
        RawSource::DateRows(rows) => parse_date_rows(rows),
    }
}

/// Coerce a raw numeric field: trim whitespace, strip one trailing `%`,
/// parse as f64. Malformed input yields NaN.
pub fn coerce_numeric(raw: &str) -> f64 {
    let trimmed = raw.trim();
    let trimmed = trimmed
        .strip_suffix('%')
        .map(str::trim_end)
        .unwrap_or(trimmed);
    trimmed.parse().unwrap_or(f64::NAN)
}

/// Header line, then one row per year: `YEAR` followed by up to 12 monthly
/// values. Column i (1-based) of a row is month i of that row's year.
fn parse_year_rows(text: &str) -> Series {
    let mut points = Vec::new();
    for row in text.lines().skip(1) {
        let cols: Vec<&str> = row
            .split(" \t")
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .collect();
        let Some((year_col, values)) = cols.split_first() else {
            continue;
        };
        let Ok(year) = year_col.parse::<i32>() else {
            continue;
        };
        for (i, raw) in values.iter().take(12).enumerate() {
            points.push(ObservedPoint {
                month: MonthKey::at(year, i as u32 + 1),
                value: coerce_numeric(raw),
            });
        }
    }
    Series::from_points(points)
}

/// One row per month: a `MMMM dd, yyyy` date column and a `%`-suffixed value
/// column. Non-date rows (e.g. the header) are dropped by the date parse.
fn parse_month_rows(text: &str) -> Series {
    let mut points = Vec::new();
    for row in text.lines() {
        let mut cols = row.split(" \t");
        let (Some(date_col), Some(value_col)) = (cols.next(), cols.next()) else {
            continue;
        };
        let Ok(date) = NaiveDate::parse_from_str(date_col.trim(), "%B %d, %Y") else {
            continue;
        };
        points.push(ObservedPoint {
            month: MonthKey::at(date.year(), date.month()),
            value: coerce_numeric(value_col),
        });
    }
    Series::from_points(points)
}

/// `(epoch_millis, value)` rows. The timestamp resolves to its UTC month.
fn parse_epoch_pairs(rows: &[(i64, f64)]) -> Series {
    let mut points = Vec::new();
    for &(millis, value) in rows {
        let Some(ts) = DateTime::from_timestamp_millis(millis) else {
            continue;
        };
        let date = ts.date_naive();
        points.push(ObservedPoint {
            month: MonthKey::at(date.year(), date.month()),
            value,
        });
    }
    Series::from_points(points)
}

/// `(date, value)` string rows; the month is the ISO date's `YYYY-MM` prefix.
fn parse_date_rows(rows: &[(&str, &str)]) -> Series {
    let mut points = Vec::new();
    for &(date, value) in rows {
        let Some(prefix) = date.trim().get(..7) else {
            continue;
        };
        let Ok(month) = prefix.parse::<MonthKey>() else {
            continue;
        };
        points.push(ObservedPoint {
            month,
            value: coerce_numeric(value),
        });
    }
    Series::from_points(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_descending(series: &Series) {
        for pair in series.points().windows(2) {
            assert!(
                pair[0].month > pair[1].month,
                "series not strictly descending at {} / {}",
                pair[0].month,
                pair[1].month
            );
        }
    }

    #[test]
    fn coerce_numeric_handles_percent_and_garbage() {
        assert_eq!(coerce_numeric(" 2.3% "), 2.3);
        assert_eq!(coerce_numeric("2.3 %"), 2.3);
        assert_eq!(coerce_numeric("-0.5"), -0.5);
        assert!(coerce_numeric("n/a").is_nan());
        assert!(coerce_numeric("").is_nan());
    }

    #[test]
    fn year_rows_map_columns_to_months() {
        let raw = concat!(
            "Year \tJan \tFeb \tMar\n",
            "2023 \t5.6 \t5.5 \t5.6\n",
            "2024 \t3.9 \t3.8\n",
        );
        let s = parse(&RawSource::YearRows(raw));

        assert_descending(&s);
        assert_eq!(s.len(), 5);
        assert_eq!(s.latest().unwrap().month.to_string(), "2024-02");
        assert_eq!(s.value_at("2023-02".parse().unwrap()), Some(5.5));
        assert_eq!(s.value_at("2024-01".parse().unwrap()), Some(3.9));
    }

    #[test]
    fn year_rows_malformed_value_becomes_nan() {
        let raw = "Year \tJan\n2023 \tx.y\n";
        let s = parse(&RawSource::YearRows(raw));
        assert_eq!(s.len(), 1);
        assert!(s.latest().unwrap().value.is_nan());
    }

    #[test]
    fn month_rows_parse_long_dates_and_percents() {
        let raw = concat!(
            "Date \tValue\n",
            "March 31, 2021 \t1.8%\n",
            "February 28, 2021 \t1.6%\n",
        );
        let s = parse(&RawSource::MonthRows(raw));

        assert_descending(&s);
        assert_eq!(s.len(), 2);
        assert_eq!(s.latest().unwrap().month.to_string(), "2021-03");
        assert_eq!(s.latest().unwrap().value, 1.8);
    }

    #[test]
    fn epoch_pairs_resolve_to_utc_months() {
        // 2020-01-15 and 2019-10-15, out of order on purpose.
        let rows: &[(i64, f64)] = &[(1571097600000, -0.4), (1579046400000, 1.0)];
        let s = parse(&RawSource::EpochPairs(rows));

        assert_descending(&s);
        assert_eq!(s.latest().unwrap().month.to_string(), "2020-01");
        assert_eq!(s.earliest().unwrap().month.to_string(), "2019-10");
        assert_eq!(s.earliest().unwrap().value, -0.4);
    }

    #[test]
    fn date_rows_scenario() {
        let rows: &[(&str, &str)] = &[("2023-01-15", "3.1"), ("2023-02-15", "2.9")];
        let s = parse(&RawSource::DateRows(rows));

        let got: Vec<(String, f64)> = s
            .iter()
            .map(|p| (p.month.to_string(), p.value))
            .collect();
        assert_eq!(
            got,
            vec![("2023-02".to_string(), 2.9), ("2023-01".to_string(), 3.1)]
        );
    }

    #[test]
    fn date_rows_drop_unparseable_dates() {
        let rows: &[(&str, &str)] = &[("not-a-date", "1.0"), ("2023-05-31", "0.6")];
        let s = parse(&RawSource::DateRows(rows));
        assert_eq!(s.len(), 1);
        assert_eq!(s.latest().unwrap().month.to_string(), "2023-05");
    }
}
