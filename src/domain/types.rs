//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory by the series pipeline
//! - exported to JSON/CSV
//! - rendered by the report/TUI layers without further conversion

use clap::ValueEnum;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A calendar month.
///
/// Stored as a single month count (`year * 12 + month - 1`) so that ordering
/// and month arithmetic are plain integer operations. The `YYYY-MM` string
/// form exists only at the boundary: parsing, display, and serde.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey(i32);

impl MonthKey {
    /// Validating constructor; `month` must be 1–12.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self(year * 12 + month as i32 - 1))
        } else {
            None
        }
    }

    /// Const constructor for compile-time tables. Callers pass `month` 1–12;
    /// other values wrap into adjacent years rather than being rejected.
    pub const fn at(year: i32, month: u32) -> Self {
        Self(year * 12 + month as i32 - 1)
    }

    pub fn year(self) -> i32 {
        self.0.div_euclid(12)
    }

    /// 1-based month component (1–12).
    pub fn month(self) -> u32 {
        (self.0.rem_euclid(12) + 1) as u32
    }

    /// Signed number of calendar months from `other` to `self`.
    pub fn months_since(self, other: MonthKey) -> i32 {
        self.0 - other.0
    }

    pub fn plus_months(self, n: i32) -> MonthKey {
        MonthKey(self.0 + n)
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl std::fmt::Debug for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MonthKey({self})")
    }
}

/// Error returned when a `YYYY-MM` string does not name a valid month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMonthKeyError;

impl std::fmt::Display for ParseMonthKeyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid month key (expected YYYY-MM)")
    }
}

impl std::error::Error for ParseMonthKeyError {}

impl std::str::FromStr for MonthKey {
    type Err = ParseMonthKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s.split_once('-').ok_or(ParseMonthKeyError)?;
        let year: i32 = year.parse().map_err(|_| ParseMonthKeyError)?;
        let month: u32 = month.parse().map_err(|_| ParseMonthKeyError)?;
        MonthKey::new(year, month).ok_or(ParseMonthKeyError)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// One indicator reading for one month.
///
/// `value` may be NaN when the raw field was malformed; NaN propagates through
/// the pipeline rather than being rejected (see `series::normalize`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObservedPoint {
    pub month: MonthKey,
    pub value: f64,
}

/// An ordered sequence of monthly observations, newest first.
///
/// Construction sorts descending by month and drops duplicate months (first
/// occurrence in input order wins), so every consumer can rely on index 0
/// being the latest month and months strictly decreasing from there.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Series {
    points: Vec<ObservedPoint>,
}

impl Series {
    pub fn from_points(mut points: Vec<ObservedPoint>) -> Self {
        // Stable sort keeps duplicate months in input order, so dedup below
        // retains the first occurrence.
        points.sort_by(|a, b| b.month.cmp(&a.month));
        points.dedup_by_key(|p| p.month);
        Self { points }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> &[ObservedPoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ObservedPoint> {
        self.points.iter()
    }

    /// Most recent observation (index 0).
    pub fn latest(&self) -> Option<&ObservedPoint> {
        self.points.first()
    }

    /// Oldest observation (last index).
    pub fn earliest(&self) -> Option<&ObservedPoint> {
        self.points.last()
    }

    /// Exact-month lookup.
    pub fn value_at(&self, month: MonthKey) -> Option<f64> {
        self.points
            .iter()
            .find(|p| p.month == month)
            .map(|p| p.value)
    }

    /// First entry at or before `month` — the backward-nearest-neighbor
    /// lookup used by the joiner. Never looks forward in time.
    pub fn at_or_before(&self, month: MonthKey) -> Option<&ObservedPoint> {
        self.points.iter().find(|p| p.month <= month)
    }

    /// The most recent `n` observations (fewer if the series is shorter).
    pub fn window(&self, n: usize) -> &[ObservedPoint] {
        &self.points[..n.min(self.points.len())]
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a ObservedPoint;
    type IntoIter = std::slice::Iter<'a, ObservedPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// An inflation value paired with a time-aligned output-gap value.
///
/// Consumed by the scatter/cycle chart. Month labels are derived from the
/// points themselves so labels and values cannot drift out of alignment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JoinedPoint {
    pub month: MonthKey,
    /// Inflation rate (%).
    pub x: f64,
    /// Output gap (%).
    pub y: f64,
}

/// One anchor of the potential-output trend line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendAnchor {
    pub month: MonthKey,
    pub level: f64,
}

/// Two-point definition of the linear potential-output trend.
///
/// `later.month` must be after `base.month`; the trend passes through both
/// anchors and is extended linearly in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendAnchors {
    pub base: TrendAnchor,
    pub later: TrendAnchor,
}

/// Fixed scatter-chart bounds plus the reference cross-hair position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    /// Inflation axis `[min, max]`.
    pub x: [f64; 2],
    /// Gap axis `[min, max]`.
    pub y: [f64; 2],
    /// X position of the vertical reference line (the "neutral" inflation rate).
    pub x_ref: f64,
    /// Y position of the horizontal reference line (zero gap).
    pub y_ref: f64,
}

/// A raw embedded dataset, tagged with its source shape.
///
/// One variant per parser in `series::normalize`.
#[derive(Debug, Clone, Copy)]
pub enum RawSource {
    /// Header line, then rows of `YEAR` followed by up to 12 monthly values,
    /// `" \t"`-separated.
    YearRows(&'static str),
    /// One row per month: a `MMMM dd, yyyy` date and a `%`-suffixed value,
    /// `" \t"`-separated.
    MonthRows(&'static str),
    /// `(epoch_millis, value)` rows; timestamps resolve to UTC months.
    EpochPairs(&'static [(i64, f64)]),
    /// `(date, value)` string rows; the month is the ISO date's `YYYY-MM` prefix.
    DateRows(&'static [(&'static str, &'static str)]),
}

/// Dashboard country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Country {
    Us,
    Cn,
}

impl Country {
    pub const ALL: [Country; 2] = [Country::Us, Country::Cn];

    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            Country::Us => "US",
            Country::Cn => "CN",
        }
    }

    pub fn next(self) -> Country {
        match self {
            Country::Us => Country::Cn,
            Country::Cn => Country::Us,
        }
    }
}

/// Everything country-specific the pipeline needs.
///
/// The two dashboards run the same parse/estimate/fill/join stages; only this
/// configuration differs between them.
#[derive(Debug, Clone, Copy)]
pub struct CountryConfig {
    pub country: Country,
    /// Raw core-inflation dataset (monthly).
    pub inflation: RawSource,
    /// Raw output dataset (sparser cadence; a level or an already-derived gap).
    pub output: RawSource,
    /// Present when `output` is a level series that needs the gap estimator;
    /// absent when the source already carries gap values.
    pub trend: Option<TrendAnchors>,
    /// Native spacing (months) between consecutive observations of `output`.
    /// Used as the interpolation divisor in `series::fill`.
    pub cadence_months: u32,
    pub bounds: AxisBounds,
    pub inflation_label: &'static str,
    pub gap_label: &'static str,
    /// Scatter window: how many recent months to show by default.
    pub default_window: usize,
}

/// A saved cycle file (JSON): the joined scatter pairs plus run metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleFile {
    pub tool: String,
    pub country: Country,
    pub window: usize,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<JoinedPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(year: i32, month: u32) -> MonthKey {
        MonthKey::new(year, month).unwrap()
    }

    #[test]
    fn month_key_parse_format_round_trip() {
        let m: MonthKey = "2019-12".parse().unwrap();
        assert_eq!(m.year(), 2019);
        assert_eq!(m.month(), 12);
        assert_eq!(m.to_string(), "2019-12");

        // Single-digit months keep the zero padding.
        assert_eq!(ym(2023, 1).to_string(), "2023-01");
    }

    #[test]
    fn month_key_rejects_invalid() {
        assert!("2019-13".parse::<MonthKey>().is_err());
        assert!("2019-00".parse::<MonthKey>().is_err());
        assert!("2019".parse::<MonthKey>().is_err());
        assert!("19-1x".parse::<MonthKey>().is_err());
        assert!(MonthKey::new(2019, 0).is_none());
    }

    #[test]
    fn month_key_ordering_and_arithmetic() {
        assert!(ym(2019, 12) < ym(2020, 1));
        assert_eq!(ym(2024, 6).months_since(ym(2019, 12)), 54);
        assert_eq!(ym(2019, 12).plus_months(1), ym(2020, 1));
        assert_eq!(ym(2020, 1).plus_months(-1), ym(2019, 12));
    }

    #[test]
    fn series_sorts_descending_and_dedupes() {
        let s = Series::from_points(vec![
            ObservedPoint { month: ym(2023, 1), value: 1.0 },
            ObservedPoint { month: ym(2023, 3), value: 3.0 },
            // Duplicate month: the first occurrence wins.
            ObservedPoint { month: ym(2023, 3), value: 99.0 },
            ObservedPoint { month: ym(2023, 2), value: 2.0 },
        ]);

        let months: Vec<String> = s.iter().map(|p| p.month.to_string()).collect();
        assert_eq!(months, ["2023-03", "2023-02", "2023-01"]);
        assert_eq!(s.value_at(ym(2023, 3)), Some(3.0));
        assert_eq!(s.latest().unwrap().month, ym(2023, 3));
        assert_eq!(s.earliest().unwrap().month, ym(2023, 1));
    }

    #[test]
    fn series_backward_lookup_never_looks_forward() {
        let s = Series::from_points(vec![
            ObservedPoint { month: ym(2023, 1), value: 1.0 },
            ObservedPoint { month: ym(2023, 4), value: 4.0 },
        ]);

        assert_eq!(s.at_or_before(ym(2023, 3)).unwrap().month, ym(2023, 1));
        assert_eq!(s.at_or_before(ym(2023, 4)).unwrap().month, ym(2023, 4));
        assert!(s.at_or_before(ym(2022, 12)).is_none());
    }

    #[test]
    fn series_window_is_bounded() {
        let s = Series::from_points(vec![
            ObservedPoint { month: ym(2023, 1), value: 1.0 },
            ObservedPoint { month: ym(2023, 2), value: 2.0 },
        ]);
        assert_eq!(s.window(1).len(), 1);
        assert_eq!(s.window(1)[0].month, ym(2023, 2));
        assert_eq!(s.window(10).len(), 2);
    }
}
