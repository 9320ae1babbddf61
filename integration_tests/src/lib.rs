use calamine::{Data, Range, Reader, Xlsx, open_workbook};
use rstest::fixture;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[fixture]
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

#[fixture]
pub fn tests_assets() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets")
}

pub fn read_report(path: &Path) -> Range<Data> {
    let mut workbook: Xlsx<BufReader<File>> =
        open_workbook(path).expect("Could not open report workbook");
    workbook
        .worksheet_range("Sheet1")
        .expect("Report has no sheet named Sheet1")
}

/// Cell value at an absolute position, `Data::Empty` when the cell was never written.
pub fn cell(range: &Range<Data>, row: u32, col: u32) -> Data {
    range.get_value((row, col)).cloned().unwrap_or(Data::Empty)
}

pub fn row_values(range: &Range<Data>, row: u32) -> Vec<Data> {
    (0..7).map(|col| cell(range, row, col)).collect()
}
