use crate::config::{ConfigLoader, ReportConfig};
use crate::constants::DEFAULT_DATASET_DIR;
use crate::error::ConstructionError;
use crate::extract::csv_data_source::CsvDataSource;
use crate::extract::error::ExtractionError;
use crate::extract::traits::Extractable;
use crate::load::csv_writer::write_csv;
use crate::load::error::LoadError;
use log::{debug, error, info};
use ordermap::OrderMap;
use polars::prelude::DataFrame;
use std::env;
use std::path::{Path, PathBuf};
use validator::Validate;

/// Outcome of [`DatasetLoader::load_data`], one entry per configured dataset.
#[derive(Debug, Default)]
pub struct LoadSummary {
    loaded: Vec<String>,
    failed: OrderMap<String, ExtractionError>,
}

impl LoadSummary {
    pub fn loaded(&self) -> &[String] {
        &self.loaded
    }

    pub fn failed(&self) -> &OrderMap<String, ExtractionError> {
        &self.failed
    }

    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Turns a partial load into an error naming every dataset that failed.
    pub fn ensure_complete(&self) -> Result<(), ExtractionError> {
        if self.is_complete() {
            return Ok(());
        }
        Err(ExtractionError::DatasetsFailed {
            count: self.failed.len(),
            names: self.failed.keys().cloned().collect(),
        })
    }
}

/// Loads the datasets named in a [`ReportConfig`] and keeps them by name.
///
/// Relative dataset paths are resolved against the dataset root, which is, in order of
/// precedence, the root given to [`DatasetLoader::with_dataset_root`], the configured
/// `dataset_root`, or `Datasets` next to the current working directory's parent.
#[derive(Debug)]
pub struct DatasetLoader {
    config: ReportConfig,
    dataset_root: PathBuf,
    datasets: OrderMap<String, DataFrame>,
}

impl DatasetLoader {
    pub fn new(config: ReportConfig) -> Self {
        let dataset_root = config
            .dataset_root
            .clone()
            .unwrap_or_else(default_dataset_root);
        Self {
            config,
            dataset_root,
            datasets: OrderMap::new(),
        }
    }

    pub fn with_dataset_root(mut self, dataset_root: impl Into<PathBuf>) -> Self {
        self.dataset_root = dataset_root.into();
        self
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    pub fn dataset_root(&self) -> &Path {
        &self.dataset_root
    }

    pub fn datasets(&self) -> &OrderMap<String, DataFrame> {
        &self.datasets
    }

    pub fn dataset(&self, name: &str) -> Option<&DataFrame> {
        self.datasets.get(name)
    }

    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.dataset_root.join(path)
        }
    }

    /// Reads every configured dataset.
    ///
    /// A dataset that can't be read is logged and left out of the collection; all remaining
    /// datasets are still attempted. The returned summary lists what was loaded and what failed.
    pub fn load_data(&mut self) -> LoadSummary {
        info!(
            "Loading {} dataset(s) from {}",
            self.config.datasets.len(),
            self.dataset_root.display()
        );
        let mut summary = LoadSummary::default();

        for (name, dataset_config) in &self.config.datasets {
            let source = CsvDataSource::new(
                self.resolve_path(&dataset_config.path),
                dataset_config.columns.clone(),
                dataset_config.separator,
            );
            debug!("Dataset '{name}' resolves to {}", source.source.display());

            match source.extract() {
                Ok(data) => {
                    self.datasets.insert(name.clone(), data);
                    summary.loaded.push(name.clone());
                }
                Err(err) => {
                    error!("An error occurred while loading dataset '{name}': {err}");
                    self.datasets.remove(name);
                    summary.failed.insert(name.clone(), err);
                }
            }
        }

        info!(
            "Concluded loading. Loaded {} of {} dataset(s)",
            summary.loaded.len(),
            self.config.datasets.len()
        );
        summary
    }

    /// Writes a loaded dataset to `save_path` as CSV with a header row and no index.
    pub fn save_dataset_csv(
        &self,
        dataset_name: &str,
        save_path: impl AsRef<Path>,
    ) -> Result<(), LoadError> {
        let save_path = save_path.as_ref();
        let Some(data) = self.datasets.get(dataset_name) else {
            error!("Dataset '{dataset_name}' not found.");
            return Err(LoadError::DatasetNotFound(dataset_name.to_string()));
        };

        write_csv(data, save_path).inspect_err(|err| {
            error!("Failed to save dataset '{dataset_name}': {err}");
        })?;
        info!("Dataset '{dataset_name}' saved to {}", save_path.display());
        Ok(())
    }
}

impl TryFrom<PathBuf> for DatasetLoader {
    type Error = ConstructionError;

    fn try_from(config_file: PathBuf) -> Result<Self, Self::Error> {
        let config: ReportConfig = ConfigLoader::load(config_file.clone())?;
        config.validate()?;
        info!(
            "DatasetLoader initialized with config file: {}",
            config_file.display()
        );
        Ok(DatasetLoader::new(config))
    }
}

/// `<cwd>/../Datasets`, or `<cwd>/Datasets` when the working directory has no parent.
pub fn default_dataset_root() -> PathBuf {
    match env::current_dir() {
        Ok(cwd) => cwd
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or(cwd)
            .join(DEFAULT_DATASET_DIR),
        Err(_) => PathBuf::from("..").join(DEFAULT_DATASET_DIR),
    }
}
