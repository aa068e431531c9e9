//! Data types for the loaded video-statistics tables.

use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// Ordinal difficulty category of a video.
///
/// The derived `Ord` follows the platform's level progression
/// (Complete Beginner < Beginner < Intermediate < Advanced) and is used
/// both for display sorting and for checking whether a metric orders the
/// levels monotonically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    #[serde(rename = "Complete Beginner")]
    CompleteBeginner,
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    /// All levels in display order.
    pub const ALL: [Level; 4] = [
        Level::CompleteBeginner,
        Level::Beginner,
        Level::Intermediate,
        Level::Advanced,
    ];

    /// 1-based ordinal, matching the `Level` column of the numeric table.
    pub fn ordinal(self) -> u8 {
        match self {
            Level::CompleteBeginner => 1,
            Level::Beginner => 2,
            Level::Intermediate => 3,
            Level::Advanced => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Level::CompleteBeginner => "Complete Beginner",
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single row deserialized from `stats.tsv`: one instructional video.
///
/// Grammatical-category and word-origin columns are stored as fractions
/// in [0,1]; percentage views are derived, never written back.
#[derive(Debug, Clone, Deserialize)]
pub struct VideoRecord {
    pub id: String,
    pub level: Level,

    /// Words per minute.
    pub wpm: f64,
    /// Syllables per second.
    pub sps: f64,
    /// Mean sentence length, in words.
    pub msl: f64,
    /// Average relative word-repetition rate.
    pub repetition: f64,

    // grammatical-category shares
    pub sconj: f64,
    pub adv: f64,
    pub det: f64,
    pub noun: f64,
    pub aux: f64,
    pub num: f64,
    pub pron: f64,
    pub verb: f64,

    // word-origin shares
    pub kango: f64,
    pub wago: f64,
    pub gairaigo: f64,

    /// 25th-percentile log frequency rank of the video's words.
    pub rareness: f64,
    /// Vocabulary size needed for 98% word coverage.
    pub vocab98: f64,
}

/// A single row of `coverage.tsv`: one (word, level) point on the
/// cumulative vocabulary-coverage curve.
#[derive(Debug, Clone, Deserialize)]
pub struct CoveragePoint {
    pub word: String,
    /// Frequency rank within the level, 1 = most frequent.
    pub rank: u32,
    /// Cumulative coverage percentage at this rank, within [0,100].
    pub coverage: f64,
    pub level: Level,
}

/// The numeric-only table used for correlation: ordered column names
/// plus one `f64` row per video, including a `Level` ordinal column.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

impl NumericTable {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Extracts one column by name.
    pub fn column(&self, name: &str) -> Result<Vec<f64>, ReportError> {
        let idx = self
            .column_index(name)
            .ok_or_else(|| ReportError::UnknownColumn {
                column: name.to_string(),
            })?;
        Ok(self.rows.iter().map(|r| r[idx]).collect())
    }

    /// Returns a new table without the named columns. Unknown names are
    /// ignored. The receiver is left untouched.
    pub fn drop_columns(&self, names: &[&str]) -> NumericTable {
        let keep: Vec<usize> = (0..self.columns.len())
            .filter(|&i| !names.contains(&self.columns[i].as_str()))
            .collect();

        NumericTable {
            columns: keep.iter().map(|&i| self.columns[i].clone()).collect(),
            rows: self
                .rows
                .iter()
                .map(|row| keep.iter().map(|&i| row[i]).collect())
                .collect(),
        }
    }

    /// Returns a new table with a `<name>_pct` column (value x 100)
    /// appended for each named fractional column. The source columns are
    /// carried over unchanged.
    pub fn with_percentage_columns(&self, names: &[&str]) -> Result<NumericTable, ReportError> {
        let mut indices = Vec::with_capacity(names.len());
        for name in names {
            let idx = self
                .column_index(name)
                .ok_or_else(|| ReportError::UnknownColumn {
                    column: name.to_string(),
                })?;
            indices.push(idx);
        }

        let mut columns = self.columns.clone();
        columns.extend(names.iter().map(|n| format!("{n}_pct")));

        let rows = self
            .rows
            .iter()
            .map(|row| {
                let mut out = row.clone();
                out.extend(indices.iter().map(|&i| row[i] * 100.0));
                out
            })
            .collect();

        Ok(NumericTable { columns, rows })
    }
}

/// All three loaded tables, immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub videos: Vec<VideoRecord>,
    pub coverage: Vec<CoveragePoint>,
    pub metrics: NumericTable,
}
