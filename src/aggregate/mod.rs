//! Statistics aggregation for the video report.
//!
//! Turns the loaded tables into binned distributions, coverage curves,
//! composition charts, reference markers, and a correlation matrix.
//! Everything here is a pure function over immutable input; the UI
//! re-invokes these on every toggle.

pub mod binning;
pub mod chart;
pub mod composition;
pub mod correlation;
pub mod coverage;
pub mod markers;
pub mod metric;
pub mod summary;
pub mod utility;
