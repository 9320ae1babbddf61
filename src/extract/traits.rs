use crate::extract::error::ExtractionError;
use polars::prelude::DataFrame;

/// A trait for sources that can be read into a `DataFrame`.
pub trait Extractable: std::fmt::Debug {
    fn extract(&self) -> Result<DataFrame, ExtractionError>;
}
