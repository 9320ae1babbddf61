use crate::constants::{DEFAULT_SHEET_NAME, EXCEL_EXTENSION};
use crate::load::error::LoadError;
use log::{debug, error, info};
use polars::prelude::{AnyValue, Column, DataFrame};
use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook, Worksheet, XlsxError};
use std::fs;
use std::path::{Path, PathBuf};

/// Options for [`save_as_excel`].
#[derive(Debug, Clone, PartialEq)]
pub struct ExcelOptions {
    /// Write the 0-based row position as a leading, unnamed column.
    pub index: bool,
    /// Write the column names as the first row.
    pub header: bool,
    pub sheet_name: String,
}

impl Default for ExcelOptions {
    fn default() -> Self {
        Self {
            index: false,
            header: true,
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
        }
    }
}

impl ExcelOptions {
    pub fn with_index(mut self, index: bool) -> Self {
        self.index = index;
        self
    }

    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    pub fn with_sheet_name(mut self, sheet_name: impl Into<String>) -> Self {
        self.sheet_name = sheet_name.into();
        self
    }
}

/// Replaces any extension other than `.xlsx` (case-insensitive) with `.xlsx`.
pub fn with_excel_extension(file_path: &Path) -> PathBuf {
    match file_path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case(EXCEL_EXTENSION) => file_path.to_path_buf(),
        _ => file_path.with_extension(EXCEL_EXTENSION),
    }
}

/// Saves `data` as a single sheet Excel workbook.
///
/// The file always ends up with an `.xlsx` extension and missing parent directories are created.
/// Failures are logged and returned. On success the path actually written is returned.
pub fn save_as_excel(
    data: &DataFrame,
    file_path: impl AsRef<Path>,
    options: &ExcelOptions,
) -> Result<PathBuf, LoadError> {
    let file_path = with_excel_extension(file_path.as_ref());

    match write_workbook(data, &file_path, options) {
        Ok(()) => {
            info!("Data saved to {}", file_path.display());
            Ok(file_path)
        }
        Err(err) => {
            error!("Failed to save data to Excel: {err}");
            Err(err)
        }
    }
}

fn write_workbook(
    data: &DataFrame,
    file_path: &Path,
    options: &ExcelOptions,
) -> Result<(), LoadError> {
    if let Some(parent) = file_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|err| LoadError::NoStorage {
            path: parent.to_path_buf(),
            reason: err.to_string(),
        })?;
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(&options.sheet_name)?;
    write_sheet(worksheet, data, options)?;

    debug!(
        "Writing {} rows and {} columns to {}",
        data.height(),
        data.width(),
        file_path.display()
    );
    workbook.save(file_path).map_err(|err| match err {
        XlsxError::IoError(io_err) => LoadError::CantStore {
            path: file_path.to_path_buf(),
            reason: io_err.to_string(),
        },
        other => LoadError::Xlsx(other),
    })?;
    Ok(())
}

fn write_sheet(
    worksheet: &mut Worksheet,
    data: &DataFrame,
    options: &ExcelOptions,
) -> Result<(), LoadError> {
    let header_format = Format::new().set_bold();
    let first_data_row: RowNum = if options.header { 1 } else { 0 };
    let first_data_col: ColNum = if options.index { 1 } else { 0 };

    if options.index {
        for idx in 0..data.height() {
            let row = first_data_row + to_row_num(idx)?;
            worksheet.write_number(row, 0, idx as f64)?;
        }
    }

    for (col_idx, column) in data.get_columns().iter().enumerate() {
        let col = first_data_col + to_col_num(col_idx)?;
        if options.header {
            worksheet.write_string_with_format(0, col, column.name().as_str(), &header_format)?;
        }
        write_column(worksheet, column, first_data_row, col)?;
    }
    Ok(())
}

fn write_column(
    worksheet: &mut Worksheet,
    column: &Column,
    first_row: RowNum,
    col: ColNum,
) -> Result<(), LoadError> {
    for idx in 0..column.len() {
        let row = first_row + to_row_num(idx)?;
        write_cell(worksheet, row, col, column.get(idx)?)?;
    }
    Ok(())
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: RowNum,
    col: ColNum,
    value: AnyValue,
) -> Result<(), XlsxError> {
    match value {
        AnyValue::Null => {}
        AnyValue::Boolean(b) => {
            worksheet.write_boolean(row, col, b)?;
        }
        AnyValue::String(s) => {
            worksheet.write_string(row, col, s)?;
        }
        AnyValue::StringOwned(s) => {
            worksheet.write_string(row, col, s.as_str())?;
        }
        AnyValue::Float64(f) => write_float(worksheet, row, col, f)?,
        AnyValue::Float32(f) => write_float(worksheet, row, col, f as f64)?,
        AnyValue::Int8(i) => write_float(worksheet, row, col, i as f64)?,
        AnyValue::Int16(i) => write_float(worksheet, row, col, i as f64)?,
        AnyValue::Int32(i) => write_float(worksheet, row, col, i as f64)?,
        AnyValue::Int64(i) => write_float(worksheet, row, col, i as f64)?,
        AnyValue::UInt8(i) => write_float(worksheet, row, col, i as f64)?,
        AnyValue::UInt16(i) => write_float(worksheet, row, col, i as f64)?,
        AnyValue::UInt32(i) => write_float(worksheet, row, col, i as f64)?,
        AnyValue::UInt64(i) => write_float(worksheet, row, col, i as f64)?,
        other => {
            worksheet.write_string(row, col, other.to_string())?;
        }
    }
    Ok(())
}

/// NaN becomes an empty cell and infinities the strings `inf` / `-inf`.
fn write_float(
    worksheet: &mut Worksheet,
    row: RowNum,
    col: ColNum,
    value: f64,
) -> Result<(), XlsxError> {
    if value.is_nan() {
        return Ok(());
    }
    if value.is_infinite() {
        let repr = if value.is_sign_positive() { "inf" } else { "-inf" };
        worksheet.write_string(row, col, repr)?;
        return Ok(());
    }
    worksheet.write_number(row, col, value)?;
    Ok(())
}

fn to_row_num(idx: usize) -> Result<RowNum, XlsxError> {
    RowNum::try_from(idx).map_err(|_| XlsxError::RowColumnLimitError)
}

fn to_col_num(idx: usize) -> Result<ColNum, XlsxError> {
    ColNum::try_from(idx).map_err(|_| XlsxError::RowColumnLimitError)
}
