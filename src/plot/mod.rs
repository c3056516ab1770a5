//! Terminal plotting.

pub mod ascii;

pub use ascii::render_cycle_plot;
