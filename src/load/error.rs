use polars::prelude::PolarsError;
use rust_xlsxwriter::XlsxError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Dataset '{0}' not found.")]
    DatasetNotFound(String),
    #[error("Can't create directory {path}: {reason}")]
    NoStorage { path: PathBuf, reason: String },
    #[error("Can't store {path}: {reason}")]
    CantStore { path: PathBuf, reason: String },
    #[error(transparent)]
    Xlsx(#[from] XlsxError),
    #[error(transparent)]
    Polars(#[from] PolarsError),
}
