//! Equal-width histograms with bin edges shared across levels.

use std::collections::HashMap;

use super::chart::ChartRow;
use super::metric::Metric;
use crate::records::{Level, VideoRecord};

/// Bins a scalar metric into per-level counts.
///
/// Bin edges come from the GLOBAL min/max of the metric across all
/// levels, never per level, so the level histograms stay visually
/// comparable. A level with no records contributes no rows; composition
/// metrics and empty input produce an empty chart.
pub fn histogram(records: &[VideoRecord], metric: Metric) -> Vec<ChartRow> {
    let Some(bins) = metric.bin_count() else {
        return Vec::new();
    };

    let values: Vec<(Level, f64)> = records
        .iter()
        .filter_map(|r| metric.value(r).map(|v| (r.level, v)))
        .collect();
    if values.is_empty() {
        return Vec::new();
    }

    let min = values.iter().map(|(_, v)| *v).fold(f64::INFINITY, f64::min);
    let max = values
        .iter()
        .map(|(_, v)| *v)
        .fold(f64::NEG_INFINITY, f64::max);
    let width = (max - min) / bins as f64;

    let mut counts: HashMap<(Level, usize), usize> = HashMap::new();
    for (level, v) in &values {
        // A constant metric collapses into the first bin; the global max
        // belongs to the last bin rather than a phantom one past it.
        let idx = if width == 0.0 {
            0
        } else {
            (((v - min) / width) as usize).min(bins - 1)
        };
        *counts.entry((*level, idx)).or_default() += 1;
    }

    let mut rows = Vec::new();
    for level in Level::ALL {
        if !values.iter().any(|(l, _)| *l == level) {
            continue;
        }
        for bin in 0..bins {
            let lo = min + width * bin as f64;
            let hi = if bin + 1 == bins {
                max
            } else {
                min + width * (bin + 1) as f64
            };
            rows.push(ChartRow {
                x: (lo + hi) / 2.0,
                y: counts.get(&(level, bin)).copied().unwrap_or(0) as f64,
                level,
                label: format!("{lo:.2} to {hi:.2}"),
            });
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, level: Level, wpm: f64) -> VideoRecord {
        VideoRecord {
            id: id.to_string(),
            level,
            wpm,
            sps: 3.0,
            msl: 8.0,
            repetition: 0.6,
            sconj: 0.02,
            adv: 0.09,
            det: 0.03,
            noun: 0.3,
            aux: 0.11,
            num: 0.02,
            pron: 0.06,
            verb: 0.2,
            kango: 0.3,
            wago: 0.6,
            gairaigo: 0.1,
            rareness: 8.0,
            vocab98: 1000.0,
        }
    }

    fn four_levels() -> Vec<VideoRecord> {
        vec![
            record("v1", Level::CompleteBeginner, 70.0),
            record("v2", Level::Beginner, 90.0),
            record("v3", Level::Intermediate, 120.0),
            record("v4", Level::Advanced, 150.0),
        ]
    }

    #[test]
    fn test_binning_is_deterministic() {
        let records = four_levels();
        assert_eq!(
            histogram(&records, Metric::Wpm),
            histogram(&records, Metric::Wpm)
        );
    }

    #[test]
    fn test_each_record_lands_in_a_bin_containing_its_value() {
        let records = four_levels();
        let rows = histogram(&records, Metric::Wpm);

        let bins = Metric::Wpm.bin_count().unwrap();
        let width = (150.0 - 70.0) / bins as f64;

        for rec in &records {
            let hits: Vec<&ChartRow> = rows
                .iter()
                .filter(|row| row.level == rec.level && row.y > 0.0)
                .collect();
            // per-level counts sum to 1
            assert_eq!(hits.iter().map(|r| r.y).sum::<f64>(), 1.0);
            // and the occupied bin's range contains the value
            let row = hits[0];
            assert!((row.x - rec.wpm).abs() <= width / 2.0 + 1e-9);
        }
    }

    #[test]
    fn test_edges_are_global_not_per_level() {
        let rows = histogram(&four_levels(), Metric::Wpm);
        // every level shares the same bin centers
        let centers = |level: Level| -> Vec<f64> {
            rows.iter()
                .filter(|r| r.level == level)
                .map(|r| r.x)
                .collect()
        };
        assert_eq!(centers(Level::CompleteBeginner), centers(Level::Advanced));
    }

    #[test]
    fn test_global_max_lands_in_last_bin() {
        let rows = histogram(&four_levels(), Metric::Wpm);
        let last_bin = rows
            .iter()
            .filter(|r| r.level == Level::Advanced)
            .next_back()
            .unwrap();
        assert_eq!(last_bin.y, 1.0);
    }

    #[test]
    fn test_missing_level_contributes_no_rows() {
        let records = vec![
            record("v1", Level::CompleteBeginner, 70.0),
            record("v2", Level::Advanced, 150.0),
        ];
        let rows = histogram(&records, Metric::Wpm);
        assert!(rows.iter().all(|r| r.level != Level::Intermediate));
    }

    #[test]
    fn test_constant_metric_collapses_into_first_bin() {
        let records = vec![
            record("v1", Level::Beginner, 95.0),
            record("v2", Level::Beginner, 95.0),
        ];
        let rows = histogram(&records, Metric::Wpm);
        assert_eq!(rows[0].y, 2.0);
        assert!(rows[1..].iter().all(|r| r.y == 0.0));
    }

    #[test]
    fn test_empty_input_yields_empty_chart() {
        assert!(histogram(&[], Metric::Wpm).is_empty());
    }

    #[test]
    fn test_composition_metric_yields_empty_chart() {
        assert!(histogram(&four_levels(), Metric::Grammar).is_empty());
    }
}
