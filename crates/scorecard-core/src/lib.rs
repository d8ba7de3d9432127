//! scorecard-core: load a pre-computed AI-model comparison result and
//! render it as terminal tables, bar charts, and a CSV export. All the
//! rendering returns plain strings; the CLI crate decides what to print.

pub mod error;
pub mod export;
pub mod grade;
pub mod loader;
pub mod report;
pub mod style;
pub mod types;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use error::{DataError, ExportError};
pub use export::{export_csv, EXPORT_FILE_NAME};
pub use grade::Grade;
pub use loader::load_comparison;
pub use style::{Color, Style};
pub use types::{
    Category, CategoryScores, ComparisonData, ModelRecord, QuizMetadata, SummaryStats,
};
