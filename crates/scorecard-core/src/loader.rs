use std::fs;
use std::path::Path;

use log::debug;

use crate::error::DataError;
use crate::types::ComparisonData;

/// Read and parse the comparison result file. The document is returned
/// as-is; there is no validation beyond what deserialization requires,
/// so a missing or mistyped key surfaces here as a parse error.
pub fn load_comparison(path: &Path) -> Result<ComparisonData, DataError> {
    let content = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let data: ComparisonData =
        serde_json::from_str(&content).map_err(|source| DataError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    debug!("loaded {} models from {}", data.ai_models.len(), path.display());
    Ok(data)
}
