//! Vocabulary-coverage curves per level.

use super::chart::{ChartData, ChartRow, ChartSpec};
use crate::records::CoveragePoint;

/// Zoomed curves show only the high-coverage tail; the underlying data
/// is never altered, only the visible domain.
pub const ZOOM_THRESHOLD: f64 = 90.0;

/// Per-level (rank, coverage%) curve rows, with the word as tooltip.
///
/// With `zoom` set the rows are filtered to coverage >= 90%, producing a
/// subsequence of the unfiltered rows.
pub fn coverage_rows(points: &[CoveragePoint], zoom: bool) -> Vec<ChartRow> {
    points
        .iter()
        .filter(|p| !zoom || p.coverage >= ZOOM_THRESHOLD)
        .map(|p| ChartRow {
            x: p.rank as f64,
            y: p.coverage,
            level: p.level,
            label: p.word.clone(),
        })
        .collect()
}

pub fn coverage_chart(points: &[CoveragePoint], zoom: bool) -> ChartData {
    let title = if zoom {
        "Vocabulary coverage (90% and up)"
    } else {
        "Vocabulary coverage by frequency rank"
    };
    ChartSpec::new(title, "Word rank", "Coverage (%)").build(coverage_rows(points, zoom), Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::Level;

    fn curve() -> Vec<CoveragePoint> {
        let mut points = Vec::new();
        for (level, base) in [(Level::CompleteBeginner, 40.0), (Level::Advanced, 20.0)] {
            for rank in 1..=8u32 {
                points.push(CoveragePoint {
                    word: format!("w{rank}"),
                    rank,
                    coverage: (base + rank as f64 * 9.0).min(100.0),
                    level,
                });
            }
        }
        points
    }

    #[test]
    fn test_curves_non_decreasing_and_bounded() {
        let rows = coverage_rows(&curve(), false);
        for level in Level::ALL {
            let series: Vec<&ChartRow> = rows.iter().filter(|r| r.level == level).collect();
            for pair in series.windows(2) {
                assert!(pair[0].y <= pair[1].y);
            }
            for row in &series {
                assert!((0.0..=100.0).contains(&row.y));
            }
        }
    }

    #[test]
    fn test_zoom_is_a_subsequence_of_the_full_curve() {
        let points = curve();
        let full = coverage_rows(&points, false);
        let zoomed = coverage_rows(&points, true);

        assert!(!zoomed.is_empty());
        assert!(zoomed.iter().all(|r| r.y >= ZOOM_THRESHOLD));

        // every zoomed row appears in the full rows, in order
        let mut remaining = full.iter();
        for row in &zoomed {
            assert!(remaining.any(|r| r == row));
        }
    }

    #[test]
    fn test_zoom_titles_differ() {
        let points = curve();
        assert_ne!(
            coverage_chart(&points, false).title,
            coverage_chart(&points, true).title
        );
    }
}
