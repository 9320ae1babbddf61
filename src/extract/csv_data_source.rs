use crate::extract::error::ExtractionError;
use crate::extract::traits::Extractable;
use log::{debug, info};
use polars::io::SerReader;
use polars::prelude::{CsvReadOptions, DataFrame, PolarsError};
use std::path::PathBuf;
use std::sync::Arc;

/// Defines a delimited text file with a header row as a data source.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvDataSource {
    /// The resolved file path to the CSV source.
    pub source: PathBuf,
    /// The columns kept after reading, in the order they appear in the resulting DataFrame.
    pub columns: Vec<String>,
    /// The character used to separate fields (defaults to ',').
    pub separator: Option<char>,
}

impl CsvDataSource {
    pub fn new(source: PathBuf, columns: Vec<String>, separator: Option<char>) -> Self {
        Self {
            source,
            columns,
            separator,
        }
    }

    /// Column types are inferred from every row of the file.
    fn read_options(&self) -> Result<CsvReadOptions, ExtractionError> {
        let mut csv_read_options = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(None);

        if let Some(sep) = self.separator {
            let sep_byte = u8::try_from(sep)
                .ok()
                .filter(u8::is_ascii)
                .ok_or(ExtractionError::InvalidSeparator(sep))?;
            let new_parse_options = (*csv_read_options.parse_options)
                .clone()
                .with_separator(sep_byte);
            csv_read_options.parse_options = Arc::from(new_parse_options);
        }
        Ok(csv_read_options)
    }
}

impl Extractable for CsvDataSource {
    fn extract(&self) -> Result<DataFrame, ExtractionError> {
        info!("Attempting to extract CSV data from: {}", self.source.display());

        if !self.source.is_file() {
            return Err(ExtractionError::FileNotFound(self.source.clone()));
        }

        let csv_data = self
            .read_options()?
            .try_into_reader_with_file_path(Some(self.source.clone()))?
            .finish()
            .map_err(|err| match err {
                PolarsError::NoData(_) => ExtractionError::EmptyFile(self.source.clone()),
                other => ExtractionError::Polars(other),
            })?;
        if csv_data.width() == 0 {
            return Err(ExtractionError::EmptyFile(self.source.clone()));
        }

        let missing: Vec<String> = self
            .columns
            .iter()
            .filter(|col| csv_data.column(col.as_str()).is_err())
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(ExtractionError::MissingColumns {
                path: self.source.clone(),
                missing,
            });
        }

        let csv_data = csv_data.select(self.columns.iter().map(String::as_str))?;
        debug!(
            "Read {} rows with columns {:?} from {}",
            csv_data.height(),
            csv_data.get_column_names(),
            self.source.display()
        );

        info!("Extracted CSV data from {}", self.source.display());
        Ok(csv_data)
    }
}
