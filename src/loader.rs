//! One-shot batch loader for the three report tables.
//!
//! All sources are tab-separated with a header row. Headers are checked
//! against the required column lists before any row is deserialized, so
//! a schema problem is reported by column name rather than as a row
//! parse failure.

use std::fs::File;
use std::path::Path;

use tracing::{debug, info};

use crate::error::ReportError;
use crate::records::{CoveragePoint, Dataset, NumericTable, VideoRecord};

pub const STATS_FILE: &str = "stats.tsv";
pub const COVERAGE_FILE: &str = "coverage.tsv";
pub const METRICS_FILE: &str = "metrics.tsv";

const STATS_COLUMNS: &[&str] = &[
    "id",
    "level",
    "wpm",
    "sps",
    "msl",
    "repetition",
    "sconj",
    "adv",
    "det",
    "noun",
    "aux",
    "num",
    "pron",
    "verb",
    "kango",
    "wago",
    "gairaigo",
    "rareness",
    "vocab98",
];

const COVERAGE_COLUMNS: &[&str] = &["word", "rank", "coverage", "level"];

/// Loads the per-video, coverage-curve, and numeric tables from a data
/// directory. Any failure is fatal to the whole render; there are no
/// retries.
pub fn load_dataset(dir: &Path) -> Result<Dataset, ReportError> {
    let videos = load_videos(&dir.join(STATS_FILE))?;
    let mut coverage = load_coverage(&dir.join(COVERAGE_FILE))?;
    let metrics = load_metrics(&dir.join(METRICS_FILE))?;

    // Curve logic downstream assumes rank order within each level.
    coverage.sort_by(|a, b| (a.level, a.rank).cmp(&(b.level, b.rank)));

    info!(
        videos = videos.len(),
        coverage_points = coverage.len(),
        metric_columns = metrics.columns.len(),
        "Dataset loaded"
    );

    Ok(Dataset {
        videos,
        coverage,
        metrics,
    })
}

fn open_reader(path: &Path) -> Result<csv::Reader<File>, ReportError> {
    debug!(path = %path.display(), "Opening table");
    let file = File::open(path).map_err(|e| data_unavailable(path, e))?;
    Ok(csv::ReaderBuilder::new().delimiter(b'\t').from_reader(file))
}

fn data_unavailable(path: &Path, err: impl Into<anyhow::Error>) -> ReportError {
    ReportError::DataUnavailable {
        path: path.to_path_buf(),
        source: err.into(),
    }
}

fn check_columns(
    rdr: &mut csv::Reader<File>,
    path: &Path,
    required: &[&str],
) -> Result<(), ReportError> {
    let headers = rdr.headers().map_err(|e| data_unavailable(path, e))?;
    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(ReportError::SchemaMismatch {
                table: path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string()),
                column: (*column).to_string(),
            });
        }
    }
    Ok(())
}

fn load_videos(path: &Path) -> Result<Vec<VideoRecord>, ReportError> {
    let mut rdr = open_reader(path)?;
    check_columns(&mut rdr, path, STATS_COLUMNS)?;

    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let record: VideoRecord = result.map_err(|e| data_unavailable(path, e))?;
        rows.push(record);
    }
    Ok(rows)
}

fn load_coverage(path: &Path) -> Result<Vec<CoveragePoint>, ReportError> {
    let mut rdr = open_reader(path)?;
    check_columns(&mut rdr, path, COVERAGE_COLUMNS)?;

    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let record: CoveragePoint = result.map_err(|e| data_unavailable(path, e))?;
        rows.push(record);
    }
    Ok(rows)
}

fn load_metrics(path: &Path) -> Result<NumericTable, ReportError> {
    let mut rdr = open_reader(path)?;
    check_columns(&mut rdr, path, &["Level"])?;

    let columns: Vec<String> = rdr
        .headers()
        .map_err(|e| data_unavailable(path, e))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|e| data_unavailable(path, e))?;
        let mut row = Vec::with_capacity(columns.len());
        for field in record.iter() {
            let value: f64 = field.trim().parse().map_err(|e| {
                data_unavailable(path, anyhow::anyhow!("bad numeric value `{field}`: {e}"))
            })?;
            row.push(value);
        }
        rows.push(row);
    }

    Ok(NumericTable { columns, rows })
}
