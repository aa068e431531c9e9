//! Reference marker configuration.
//!
//! One per-level value per scalar metric, attached to a chart when the
//! "show medians" toggle is on. The values were computed offline against
//! the full historical video catalog, not the shipped sample, and are
//! treated as supplied configuration: render time never recomputes them.
//! `summary` logs a warning when a marker drifts away from the loaded
//! sample's median.

use super::chart::Marker;
use super::metric::Metric;
use crate::records::Level;

/// Per-level reference values, indexed in `Level::ALL` order
/// (Complete Beginner, Beginner, Intermediate, Advanced).
static REFERENCE_MARKERS: &[(Metric, [f64; 4])] = &[
    (Metric::Wpm, [75.0, 91.0, 124.0, 149.0]),
    (Metric::SyllablesPerSecond, [2.9, 3.4, 3.9, 4.3]),
    (Metric::SentenceLength, [5.6, 7.8, 10.4, 12.9]),
    (Metric::Repetition, [0.74, 0.69, 0.64, 0.58]),
    (Metric::Rareness, [7.1, 7.8, 8.5, 9.2]),
    (Metric::VocabSize98, [340.0, 730.0, 1520.0, 2740.0]),
];

/// Markers for a metric, in level order. Empty for metrics without
/// reference values (the composition groups).
pub fn markers_for(metric: Metric) -> Vec<Marker> {
    REFERENCE_MARKERS
        .iter()
        .find(|(m, _)| *m == metric)
        .map(|(_, values)| {
            Level::ALL
                .iter()
                .zip(values)
                .map(|(&level, &value)| Marker { level, value })
                .collect()
        })
        .unwrap_or_default()
}
