//! Single-sheet xlsx downloads

use crate::{ApiError, ApiResult};

use std::panic::Location;

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use rust_xlsxwriter::{Format, Workbook, XlsxError};

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

pub struct Column {
    pub header: &'static str,
    pub width: f64,
}

pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

impl From<Option<String>> for Cell {
    fn from(value: Option<String>) -> Self {
        value.map(Cell::Text).unwrap_or(Cell::Empty)
    }
}

impl From<Option<f64>> for Cell {
    fn from(value: Option<f64>) -> Self {
        value.map(Cell::Number).unwrap_or(Cell::Empty)
    }
}

/// Build a workbook with one sheet: a bold header row, then `rows`
pub fn render(sheet_name: &str, columns: &[Column], rows: &[Vec<Cell>]) -> ApiResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    for (col, column) in (0u16..).zip(columns) {
        worksheet.set_column_width(col, column.width)?;
        worksheet.write_string_with_format(0, col, column.header, &bold)?;
    }

    for (row, cells) in (1u32..).zip(rows) {
        for (col, cell) in (0u16..).zip(cells) {
            match cell {
                Cell::Text(text) => {
                    worksheet.write_string(row, col, text)?;
                }
                Cell::Number(number) => {
                    worksheet.write_number(row, col, *number)?;
                }
                Cell::Empty => {}
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}

/// 200 response carrying `bytes` as a downloadable `filename`
pub fn attachment(filename: &str, bytes: Vec<u8>) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={filename}"),
            ),
        ],
        bytes,
    )
        .into_response()
}

impl From<XlsxError> for ApiError {
    #[track_caller]
    fn from(e: XlsxError) -> Self {
        log::error!("Spreadsheet export failed: {}", e);
        ApiError::Internal {
            message: "Export failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
