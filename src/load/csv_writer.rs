use crate::load::error::LoadError;
use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use std::fs::File;
use std::path::Path;

/// Writes `data` as comma separated text with a header row.
pub(crate) fn write_csv(data: &DataFrame, path: &Path) -> Result<(), LoadError> {
    let mut file = File::create(path).map_err(|err| LoadError::CantStore {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;

    let mut data = data.clone();
    CsvWriter::new(&mut file)
        .include_header(true)
        .with_separator(b',')
        .finish(&mut data)?;
    Ok(())
}
