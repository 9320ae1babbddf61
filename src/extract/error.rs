use polars::prelude::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Dataset file {0} does not exist.")]
    FileNotFound(PathBuf),
    #[error("No data found in {0}.")]
    EmptyFile(PathBuf),
    #[error("Columns {missing:?} are not present in {path}.")]
    MissingColumns { path: PathBuf, missing: Vec<String> },
    #[error("Separator {0:?} is not a single ASCII character.")]
    InvalidSeparator(char),
    #[error("{count} dataset(s) failed to load: {names:?}")]
    DatasetsFailed { count: usize, names: Vec<String> },
    #[error(transparent)]
    Polars(#[from] PolarsError),
}
