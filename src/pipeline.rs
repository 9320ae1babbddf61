use crate::constants::{DEFAULT_REPORT_FILE, PLAYER_SALARIES, PLAYER_STATS};
use crate::error::{ConstructionError, PipelineError};
use crate::extract::{DatasetLoader, LoadSummary};
use crate::load::{ExcelOptions, save_as_excel};
use crate::transform::build_salary_report;
use crate::transform::error::TransformError;
use log::info;
use polars::prelude::DataFrame;
use std::path::{Path, PathBuf};

/// Loads the configured datasets, builds the salary per minute report and writes it to Excel.
#[derive(Debug)]
pub struct Pipeline {
    loader: DatasetLoader,
    output: PathBuf,
    excel_options: ExcelOptions,
    strict: bool,
}

impl Pipeline {
    pub fn new(loader: DatasetLoader) -> Pipeline {
        Pipeline {
            loader,
            output: PathBuf::from(DEFAULT_REPORT_FILE),
            excel_options: ExcelOptions::default(),
            strict: false,
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_excel_options(mut self, excel_options: ExcelOptions) -> Self {
        self.excel_options = excel_options;
        self
    }

    /// When set, a dataset that fails to load aborts the run right after extraction.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn loader(&self) -> &DatasetLoader {
        &self.loader
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn run(&mut self) -> Result<PathBuf, PipelineError> {
        self.extract()?;
        let report = self.transform()?;
        self.load(&report)
    }

    pub fn extract(&mut self) -> Result<LoadSummary, PipelineError> {
        info!("Starting extract");
        let summary = self.loader.load_data();
        if self.strict {
            summary.ensure_complete()?;
        }
        Ok(summary)
    }

    pub fn transform(&self) -> Result<DataFrame, PipelineError> {
        info!("Starting transformation");
        let player_stats = self.required_dataset(PLAYER_STATS)?;
        let player_salaries = self.required_dataset(PLAYER_SALARIES)?;

        let report = build_salary_report(player_stats, player_salaries)?;
        info!("Concluded transformation");
        Ok(report)
    }

    pub fn load(&self, report: &DataFrame) -> Result<PathBuf, PipelineError> {
        let written = save_as_excel(report, &self.output, &self.excel_options)?;
        info!("Concluded loading");
        Ok(written)
    }

    fn required_dataset(&self, name: &str) -> Result<&DataFrame, TransformError> {
        self.loader
            .dataset(name)
            .ok_or_else(|| TransformError::MissingDataset(name.to_string()))
    }
}

impl TryFrom<PathBuf> for Pipeline {
    type Error = ConstructionError;

    fn try_from(config_file: PathBuf) -> Result<Self, Self::Error> {
        Ok(Pipeline::new(DatasetLoader::try_from(config_file)?))
    }
}

/// Generates `player_salary_report.xlsx` in the working directory from the datasets in
/// `config_file`.
///
/// Returns the path of the written report.
pub fn player_salary_on_play_time(
    config_file: impl Into<PathBuf>,
) -> Result<PathBuf, PipelineError> {
    info!("Generating player salary report based on play minutes...");
    let mut pipeline = Pipeline::try_from(config_file.into())?;
    pipeline.run()
}
