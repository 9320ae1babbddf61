use crate::error::ConstructionError;
use config::{Config, ConfigError, File, FileFormat};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Reads the file at `file_path` and deserializes it into `T`.
    ///
    /// The format is picked from the file extension (`yaml`, `yml`, `json`, `toml`, `ron`).
    /// Environment variables written as `$VAR` or `${VAR}` are expanded before parsing.
    pub fn load<T: for<'de> Deserialize<'de>>(file_path: PathBuf) -> Result<T, ConstructionError> {
        let file_format = Self::file_format(&file_path)?;

        if !file_path.exists() {
            return Err(ConstructionError::NoConfigFileFound(file_path));
        }
        let config_str = fs::read_to_string(&file_path)?;

        let config_str_with_env_vars =
            shellexpand::env(&config_str).map_err(|err| ConstructionError::EnvExpansion {
                var_name: err.var_name,
                reason: err.cause.to_string(),
            })?;

        let config = Config::builder()
            .add_source(File::from_str(&config_str_with_env_vars, file_format))
            .build()?;

        let settings_struct: T = config.try_deserialize()?;
        Ok(settings_struct)
    }

    fn file_format(file_path: &Path) -> Result<FileFormat, ConfigError> {
        let Some(ext) = file_path.extension() else {
            return Err(ConfigError::NotFound(format!(
                "Could not find file extension on path {file_path:?}"
            )));
        };

        match ext.to_str() {
            Some("yaml") | Some("yml") => Ok(FileFormat::Yaml),
            Some("json") => Ok(FileFormat::Json),
            Some("toml") => Ok(FileFormat::Toml),
            Some("ron") => Ok(FileFormat::Ron),
            _ => Err(ConfigError::NotFound(format!(
                "Unsupported file format, use .yaml, .yml, .json, .toml or .ron: {file_path:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DatasetConfig, ReportConfig};
    use crate::test_suite::config::{
        JSON_CONFIG, RON_CONFIG, TOML_CONFIG, YAML_CONFIG, write_config,
    };
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};
    use std::str::FromStr;
    use tempfile::TempDir;

    #[fixture]
    fn temp_dir() -> TempDir {
        tempfile::tempdir().expect("Failed to create temporary directory")
    }

    #[rstest]
    #[case("yaml", YAML_CONFIG)]
    #[case("yml", YAML_CONFIG)]
    #[case("toml", TOML_CONFIG)]
    #[case("json", JSON_CONFIG)]
    #[case("ron", RON_CONFIG)]
    fn test_load_config_from_various_formats(
        temp_dir: TempDir,
        #[case] extension: &str,
        #[case] data: &[u8],
    ) {
        let file_path = write_config(temp_dir.path(), extension, data);

        let config: ReportConfig = ConfigLoader::load(file_path).unwrap();

        assert_eq!(
            config.datasets.get("player_stats"),
            Some(&DatasetConfig::new(
                PathBuf::from("stats.csv"),
                vec!["name", "team", "age", "nation", "position", "minutes"],
            ))
        );
        assert_eq!(
            config.datasets.get("player_salaries"),
            Some(&DatasetConfig::new(
                PathBuf::from("sal.csv"),
                vec!["Player", "Annual"]
            ))
        );
    }

    #[rstest]
    fn test_load_config_keeps_dataset_order(temp_dir: TempDir) {
        let file_path = write_config(temp_dir.path(), "yaml", YAML_CONFIG);

        let config: ReportConfig = ConfigLoader::load(file_path).unwrap();

        let names: Vec<&str> = config.datasets.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["player_stats", "player_salaries"]);
    }

    #[rstest]
    fn test_load_config_expands_env_vars(temp_dir: TempDir) {
        let data = br#"
player_stats:
  path: "${HOME}/stats.csv"
  columns: ["name"]
"#;
        let file_path = write_config(temp_dir.path(), "yaml", data);

        let config: ReportConfig = ConfigLoader::load(file_path).unwrap();

        let home = std::env::var("HOME").unwrap();
        assert_eq!(
            config.datasets["player_stats"].path,
            PathBuf::from(format!("{home}/stats.csv"))
        );
    }

    #[rstest]
    fn test_load_config_unknown_env_var(temp_dir: TempDir) {
        let data = br#"
player_stats:
  path: "$SURELY_NOT_A_SET_VARIABLE_4711/stats.csv"
  columns: ["name"]
"#;
        let file_path = write_config(temp_dir.path(), "yaml", data);

        let result: Result<ReportConfig, _> = ConfigLoader::load(file_path);

        assert!(matches!(
            result,
            Err(ConstructionError::EnvExpansion { .. })
        ));
    }

    #[rstest]
    fn test_load_config_unsupported_file_format() {
        let file_path = PathBuf::from_str("test/path/config.exe").unwrap();
        let result: Result<ReportConfig, _> = ConfigLoader::load(file_path);
        assert!(matches!(result, Err(ConstructionError::ConfigError(_))));
    }

    #[rstest]
    fn test_load_config_missing_file(temp_dir: TempDir) {
        let file_path = temp_dir.path().join("missing.yaml");
        let result: Result<ReportConfig, _> = ConfigLoader::load(file_path.clone());
        assert!(matches!(
            result,
            Err(ConstructionError::NoConfigFileFound(path)) if path == file_path
        ));
    }

    #[rstest]
    fn test_load_config_malformed(temp_dir: TempDir) {
        let file_path = write_config(temp_dir.path(), "yaml", b"player_stats: [unclosed");
        let result: Result<ReportConfig, _> = ConfigLoader::load(file_path);
        assert!(result.is_err());
    }
}
