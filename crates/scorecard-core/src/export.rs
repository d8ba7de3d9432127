use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::ExportError;
use crate::types::{Category, ModelRecord};

pub const EXPORT_FILE_NAME: &str = "comparison_export.csv";

const HEADER: &str = "Rank,Model Name,Total Score,Problem Recognition,\
Technical Accuracy,Solution Quality,Completeness,No Hallucinations,\
Documentation Usage";

/// Write the full ranked set to `dir/comparison_export.csv`. Total
/// score keeps one decimal place; category scores are raw integers.
/// Returns the path written.
pub fn export_csv(ranked: &[&ModelRecord], dir: &Path) -> Result<PathBuf, ExportError> {
    let path = dir.join(EXPORT_FILE_NAME);

    let mut out = String::from(HEADER);
    out.push('\n');
    for (i, model) in ranked.iter().enumerate() {
        out.push_str(&format!(
            "{},{},{:.1}",
            i + 1,
            csv_field(&model.name),
            model.weighted_score
        ));
        for category in Category::ALL {
            out.push_str(&format!(",{}", model.scores.get(category)));
        }
        out.push('\n');
    }

    fs::write(&path, out).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;
    debug!("exported {} rows to {}", ranked.len(), path.display());
    Ok(path)
}

/// Quote a field if it would break the row.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
