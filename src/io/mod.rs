//! File exports.
//!
//! All dataset input is embedded in the binary; the only file I/O in the
//! crate is writing exports on request.

pub mod export;
