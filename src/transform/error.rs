use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("Dataset '{0}' is not loaded. Check earlier errors while loading the data.")]
    MissingDataset(String),
    #[error(transparent)]
    Polars(#[from] PolarsError),
}
