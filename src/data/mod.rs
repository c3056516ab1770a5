//! Embedded static datasets and per-country pipeline configuration.
//!
//! The raw series are compiled into the binary — the tool does no network or
//! file I/O to obtain data. Each country module owns its raw blobs (in their
//! native source shapes) and the `CountryConfig` describing how the shared
//! pipeline should treat them.

mod cn;
mod us;

use crate::domain::{Country, CountryConfig};

/// Pipeline configuration (including raw datasets) for a country.
pub fn config(country: Country) -> CountryConfig {
    match country {
        Country::Us => us::config(),
        Country::Cn => cn::config(),
    }
}
