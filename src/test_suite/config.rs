use crate::config::{DatasetConfig, ReportConfig};
use ordermap::OrderMap;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

pub(crate) static YAML_CONFIG: &[u8] = br#"
player_stats:
  path: "stats.csv"
  columns: ["name", "team", "age", "nation", "position", "minutes"]
player_salaries:
  path: "sal.csv"
  columns: ["Player", "Annual"]
"#;

pub(crate) static TOML_CONFIG: &[u8] = br#"
[player_stats]
path = "stats.csv"
columns = ["name", "team", "age", "nation", "position", "minutes"]

[player_salaries]
path = "sal.csv"
columns = ["Player", "Annual"]
"#;

pub(crate) static JSON_CONFIG: &[u8] = br#"
{
  "player_stats": {
    "path": "stats.csv",
    "columns": ["name", "team", "age", "nation", "position", "minutes"]
  },
  "player_salaries": {
    "path": "sal.csv",
    "columns": ["Player", "Annual"]
  }
}
"#;

pub(crate) static RON_CONFIG: &[u8] = br#"
(
  player_stats: (
    path: "stats.csv",
    columns: ["name", "team", "age", "nation", "position", "minutes"],
  ),
  player_salaries: (
    path: "sal.csv",
    columns: ["Player", "Annual"],
  ),
)
"#;

/// The configuration described by the `*_CONFIG` constants.
pub(crate) fn report_config() -> ReportConfig {
    ReportConfig::new(OrderMap::from([
        (
            "player_stats".to_string(),
            DatasetConfig::new(
                PathBuf::from("stats.csv"),
                ["name", "team", "age", "nation", "position", "minutes"],
            ),
        ),
        (
            "player_salaries".to_string(),
            DatasetConfig::new(PathBuf::from("sal.csv"), ["Player", "Annual"]),
        ),
    ]))
}

pub(crate) fn write_config(dir: &Path, extension: &str, data: &[u8]) -> PathBuf {
    let file_path = dir.join(format!("config.{extension}"));
    let mut file = File::create(&file_path).expect("Failed to create config file");
    file.write_all(data).expect("Failed to write config file");
    file_path
}
