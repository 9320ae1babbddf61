use crate::config::DatasetConfig;
use crate::validation::validation_utils::{
    fail_validation_on_duplicates, fail_validation_on_empty,
};
use ordermap::OrderMap;
use std::collections::HashSet;
use validator::ValidationError;

/// Every dataset has to keep at least one column and may name each column only once.
/// A configured separator has to be a single ASCII character.
pub fn validate_datasets(
    datasets: &OrderMap<String, DatasetConfig>,
) -> Result<(), ValidationError> {
    let without_columns: Vec<&str> = datasets
        .iter()
        .filter(|(_, dataset)| dataset.columns.is_empty())
        .map(|(name, _)| name.as_str())
        .collect();
    fail_validation_on_empty(
        &without_columns,
        "no_columns",
        "Datasets need to configure at least one column",
    )?;

    let mut duplicates: Vec<String> = vec![];
    for (name, dataset) in datasets {
        let mut seen: HashSet<&str> = HashSet::new();
        for column in &dataset.columns {
            if !seen.insert(column.as_str()) {
                duplicates.push(format!("{name}.{column}"));
            }
        }
    }
    fail_validation_on_duplicates(&duplicates, "duplicates", "Found duplicate dataset columns")?;

    let bad_separators: Vec<&str> = datasets
        .iter()
        .filter(|(_, dataset)| dataset.separator.is_some_and(|sep| !sep.is_ascii()))
        .map(|(name, _)| name.as_str())
        .collect();
    fail_validation_on_empty(
        &bad_separators,
        "non_ascii_separator",
        "Dataset separators need to be a single ASCII character",
    )
}
