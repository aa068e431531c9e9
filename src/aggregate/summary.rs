//! Per-metric chart summaries.

use tracing::warn;

use super::binning::histogram;
use super::chart::{ChartData, ChartSpec, Marker};
use super::composition;
use super::markers::markers_for;
use super::metric::Metric;
use super::utility::median;
use crate::records::VideoRecord;

/// Builds the chart for one metric.
///
/// Scalar metrics become per-level histograms; the composition groups
/// become per-level median-share charts. Reference markers are attached
/// only when `show_reference_markers` is set and the metric carries
/// them. Pure: identical inputs always yield identical output.
pub fn summarize(
    records: &[VideoRecord],
    metric: Metric,
    show_reference_markers: bool,
) -> ChartData {
    let rows = match metric {
        Metric::Grammar => composition::grammar_rows(records),
        Metric::WordOrigin => composition::word_origin_rows(records),
        _ => histogram(records, metric),
    };

    let markers = if show_reference_markers {
        let markers = markers_for(metric);
        flag_marker_divergence(records, metric, &markers);
        markers
    } else {
        Vec::new()
    };

    ChartSpec::new(metric.title(), metric.x_title(), metric.y_title()).build(rows, markers)
}

/// The reference values were computed offline from the full catalog, so
/// the loaded sample's medians can drift from them. Flag the gap; never
/// substitute the recomputed value.
fn flag_marker_divergence(records: &[VideoRecord], metric: Metric, markers: &[Marker]) {
    for marker in markers {
        let values: Vec<f64> = records
            .iter()
            .filter(|r| r.level == marker.level)
            .filter_map(|r| metric.value(r))
            .collect();
        let Some(observed) = median(&values) else {
            continue;
        };
        if marker.value != 0.0 && ((observed - marker.value) / marker.value).abs() > 0.10 {
            warn!(
                metric = metric.key(),
                level = %marker.level,
                reference = marker.value,
                observed,
                "reference marker diverges from loaded sample median"
            );
        }
    }
}
