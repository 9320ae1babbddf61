pub(crate) mod csv_writer;
pub mod error;
pub mod excel_exporter;
pub use excel_exporter::{ExcelOptions, save_as_excel};
