//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the calendar-month key and observation types (`MonthKey`, `ObservedPoint`, `Series`)
//! - scatter pairs (`JoinedPoint`) and the cycle export schema (`CycleFile`)
//! - per-country pipeline configuration (`Country`, `CountryConfig`, `TrendAnchors`)

pub mod types;

pub use types::*;
