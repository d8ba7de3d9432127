use std::path::PathBuf;

use thiserror::Error;

/// The input file could not be turned into a [`ComparisonData`]
/// snapshot. Terminal for the invocation; there is no partial-report
/// fallback.
///
/// [`ComparisonData`]: crate::types::ComparisonData
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid comparison data in {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The CSV export path could not be written.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
