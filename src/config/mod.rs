mod config_loader;
pub use self::config_loader::ConfigLoader;
pub mod report_config;
pub use self::report_config::{DatasetConfig, ReportConfig};
