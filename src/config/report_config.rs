use crate::validation::report_config_validation::validate_datasets;
use ordermap::OrderMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use validator::Validate;

/// Everything needed to load the datasets of one report run.
///
/// Dataset entries live at the top level of the configuration file, keyed by dataset name.
/// The only reserved key is `dataset_root`, the directory relative dataset paths are resolved
/// against.
#[derive(Debug, Deserialize, Serialize, Validate, Clone, PartialEq, Default)]
pub struct ReportConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset_root: Option<PathBuf>,
    #[serde(flatten)]
    #[validate(custom(function = "validate_datasets"))]
    pub datasets: OrderMap<String, DatasetConfig>,
}

impl ReportConfig {
    pub fn new(datasets: OrderMap<String, DatasetConfig>) -> Self {
        Self {
            dataset_root: None,
            datasets,
        }
    }

    pub fn with_dataset_root(mut self, dataset_root: impl Into<PathBuf>) -> Self {
        self.dataset_root = Some(dataset_root.into());
        self
    }

    pub fn dataset(&self, name: &str) -> Option<&DatasetConfig> {
        self.datasets.get(name)
    }
}

#[derive(Debug, Deserialize, Clone, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DatasetConfig {
    /// Absolute path, or a path relative to the dataset root.
    pub path: PathBuf,
    /// Columns to keep, in output order.
    pub columns: Vec<String>,
    #[serde(default)]
    pub separator: Option<char>,
}

impl DatasetConfig {
    pub fn new(path: PathBuf, columns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            path,
            columns: columns.into_iter().map(Into::into).collect(),
            separator: None,
        }
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = Some(separator);
        self
    }
}
