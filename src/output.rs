//! Output formatting and persistence for chart data.
//!
//! The rendering front-end consumes one JSON file per chart plus an
//! index; rows can also be exported as TSV for ad-hoc inspection.

use std::fs;
use std::path::Path;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::aggregate::chart::ChartData;

/// Logs chart data using Rust's debug pretty-print format.
pub fn print_pretty(chart: &ChartData) {
    debug!("{:#?}", chart);
}

/// Logs any serializable value as pretty-printed JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Writes a serializable value as pretty-printed JSON, creating parent
/// directories as needed.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    debug!(path = %path.display(), "Writing JSON");
    fs::write(path, serde_json::to_string_pretty(value)?)?;
    Ok(())
}

/// Writes a chart's rows as a TSV table.
pub fn write_rows_tsv(path: &Path, chart: &ChartData) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut writer = csv::WriterBuilder::new().delimiter(b'\t').from_path(path)?;
    for row in &chart.rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Index entry for one written chart file.
#[derive(Debug, Serialize)]
pub struct ChartIndexEntry {
    pub file: String,
    pub title: String,
    pub rows: usize,
}

/// Top-level index of all written charts, served next to them as
/// `index.json`.
#[derive(Debug, Serialize)]
pub struct ReportIndex {
    pub generated_at: DateTime<Utc>,
    pub charts: Vec<ChartIndexEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::chart::{ChartRow, ChartSpec};
    use crate::records::Level;
    use std::env;

    fn chart() -> ChartData {
        ChartSpec::new("Words per minute", "WPM", "Videos").build(
            vec![ChartRow {
                x: 75.0,
                y: 3.0,
                level: Level::Beginner,
                label: "70.00 to 80.00".to_string(),
            }],
            vec![],
        )
    }

    fn temp_path(name: &str) -> std::path::PathBuf {
        env::temp_dir().join(format!("cij_stats_output_{name}"))
    }

    #[test]
    fn test_print_pretty_does_not_panic() {
        print_pretty(&chart());
    }

    #[test]
    fn test_print_json_does_not_panic() {
        print_json(&chart()).unwrap();
    }

    #[test]
    fn test_write_json_creates_parents() {
        let path = temp_path("json").join("nested").join("wpm.json");
        let _ = fs::remove_dir_all(temp_path("json")); // clean up any prior run

        write_json(&path, &chart()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("Words per minute"));

        fs::remove_dir_all(temp_path("json")).unwrap();
    }

    #[test]
    fn test_write_rows_tsv_one_line_per_row() {
        let path = temp_path("rows.tsv");
        let _ = fs::remove_file(&path);

        write_rows_tsv(&path, &chart()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        // 1 header + 1 data row
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("Beginner"));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_report_index_serializes_generated_at() {
        let index = ReportIndex {
            generated_at: Utc::now(),
            charts: vec![ChartIndexEntry {
                file: "wpm.json".to_string(),
                title: "Words per minute".to_string(),
                rows: 40,
            }],
        };
        let json = serde_json::to_string(&index).unwrap();
        assert!(json.contains("generated_at"));
        assert!(json.contains("wpm.json"));
    }
}
