//! Error taxonomy for the batch report.
//!
//! Load failures are fatal; there are no retries. Empty per-level
//! partitions are not errors: aggregations degrade to empty series
//! instead.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// A source file is missing, unreadable, or has an unparsable row.
    #[error("data source unavailable: {path}")]
    DataUnavailable {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    /// A required column is absent from a table's header row.
    #[error("table {table} is missing required column `{column}`")]
    SchemaMismatch { table: String, column: String },

    /// An operation referenced a column the table does not carry.
    #[error("unknown column `{column}`")]
    UnknownColumn { column: String },
}
