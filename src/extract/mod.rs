pub mod csv_data_source;
pub use csv_data_source::CsvDataSource;
pub mod dataset_loader;
pub use dataset_loader::{DatasetLoader, LoadSummary};
pub mod error;
pub mod traits;
