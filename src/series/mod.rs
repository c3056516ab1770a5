//! The data-preparation pipeline.
//!
//! Stages, leaf-first: `normalize` (raw formats → monthly series), `trend`
//! (output level → gap), `fill` (sparse → gapless monthly), `join` (inflation
//! × gap → scatter pairs). Each stage is a pure function over in-memory
//! series; `app::pipeline` wires them together per country.

pub mod fill;
pub mod join;
pub mod normalize;
pub mod trend;
