//! Pairwise Pearson correlation over the numeric table.

use serde::Serialize;

use super::utility::mean;
use crate::error::ReportError;
use crate::records::NumericTable;

/// Low-signal proportion columns dropped before computing correlation:
/// the closed-class grammatical categories whose share barely moves
/// across levels.
pub const EXCLUDED_COLUMNS: &[&str] = &["sconj", "det", "aux", "num", "pron"];

pub const LEVEL_COLUMN: &str = "Level";

/// Symmetric correlation matrix with 1.0 on the diagonal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

/// One column's correlation with the ordinal level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelCorrelation {
    pub column: String,
    pub r: f64,
}

/// Computes the full pairwise matrix after dropping the fixed exclusion
/// list. Degenerate columns (constant, or fewer than two rows) correlate
/// as 0.0 with everything; the diagonal is pinned to 1.0.
pub fn correlation_matrix(table: &NumericTable) -> CorrelationMatrix {
    let reduced = table.drop_columns(EXCLUDED_COLUMNS);

    let series: Vec<Vec<f64>> = (0..reduced.columns.len())
        .map(|i| reduced.rows.iter().map(|row| row[i]).collect())
        .collect();

    let n = series.len();
    let mut values = vec![vec![0.0; n]; n];
    for i in 0..n {
        values[i][i] = 1.0;
        for j in i + 1..n {
            let r = pearson(&series[i], &series[j]);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    CorrelationMatrix {
        columns: reduced.columns,
        values,
    }
}

/// Reduces the matrix to each column's correlation with `Level`,
/// optionally sorted by descending |r|.
pub fn level_correlations(
    matrix: &CorrelationMatrix,
    sort_by_magnitude: bool,
) -> Result<Vec<LevelCorrelation>, ReportError> {
    let level_idx = matrix
        .columns
        .iter()
        .position(|c| c == LEVEL_COLUMN)
        .ok_or_else(|| ReportError::UnknownColumn {
            column: LEVEL_COLUMN.to_string(),
        })?;

    let mut out: Vec<LevelCorrelation> = matrix
        .columns
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != level_idx)
        .map(|(i, column)| LevelCorrelation {
            column: column.clone(),
            r: matrix.values[level_idx][i],
        })
        .collect();

    if sort_by_magnitude {
        out.sort_by(|a, b| b.r.abs().total_cmp(&a.r.abs()));
    }
    Ok(out)
}

fn pearson(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() || x.len() < 2 {
        return 0.0;
    }
    let mean_x = mean(x);
    let mean_y = mean(y);

    let mut num = 0.0;
    let mut den_x = 0.0;
    let mut den_y = 0.0;
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        num += dx * dy;
        den_x += dx * dx;
        den_y += dy * dy;
    }

    let den = (den_x * den_y).sqrt();
    if den > 0.0 { num / den } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> NumericTable {
        NumericTable {
            columns: vec![
                "wpm".into(),
                "repetition".into(),
                "sconj".into(),
                "det".into(),
                "aux".into(),
                "num".into(),
                "pron".into(),
                "Level".into(),
            ],
            rows: vec![
                vec![70.0, 0.80, 0.01, 0.03, 0.12, 0.02, 0.06, 1.0],
                vec![92.0, 0.71, 0.02, 0.03, 0.11, 0.02, 0.06, 2.0],
                vec![121.0, 0.66, 0.03, 0.04, 0.10, 0.02, 0.05, 3.0],
                vec![148.0, 0.57, 0.04, 0.04, 0.10, 0.02, 0.05, 4.0],
            ],
        }
    }

    #[test]
    fn test_pearson_perfect_and_degenerate() {
        let x = [1.0, 2.0, 3.0];
        assert!((pearson(&x, &[1.0, 2.0, 3.0]) - 1.0).abs() < 1e-12);
        assert!((pearson(&x, &[3.0, 2.0, 1.0]) + 1.0).abs() < 1e-12);
        assert_eq!(pearson(&x, &[5.0, 5.0, 5.0]), 0.0);
        assert_eq!(pearson(&[1.0], &[1.0]), 0.0);
    }

    #[test]
    fn test_excluded_columns_are_exactly_removed() {
        let matrix = correlation_matrix(&table());
        assert_eq!(
            matrix.columns,
            vec!["wpm".to_string(), "repetition".into(), "Level".into()]
        );
    }

    #[test]
    fn test_matrix_symmetric_with_unit_diagonal() {
        let matrix = correlation_matrix(&table());
        let n = matrix.columns.len();
        for i in 0..n {
            assert_eq!(matrix.values[i][i], 1.0);
            for j in 0..n {
                assert_eq!(matrix.values[i][j], matrix.values[j][i]);
            }
        }
    }

    #[test]
    fn test_level_view_excludes_level_itself() {
        let matrix = correlation_matrix(&table());
        let view = level_correlations(&matrix, false).unwrap();
        let columns: Vec<&str> = view.iter().map(|c| c.column.as_str()).collect();
        assert_eq!(columns, vec!["wpm", "repetition"]);
        // wpm rises with level, repetition falls
        assert!(view[0].r > 0.9);
        assert!(view[1].r < -0.9);
    }

    #[test]
    fn test_level_view_sorted_by_magnitude() {
        let matrix = correlation_matrix(&table());
        let view = level_correlations(&matrix, true).unwrap();
        for pair in view.windows(2) {
            assert!(pair[0].r.abs() >= pair[1].r.abs());
        }
    }

    #[test]
    fn test_missing_level_column_is_an_error() {
        let matrix = CorrelationMatrix {
            columns: vec!["wpm".into()],
            values: vec![vec![1.0]],
        };
        assert!(level_correlations(&matrix, false).is_err());
    }
}
