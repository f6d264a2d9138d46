use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use tracing::debug;

use crate::input::LoadError;
use crate::model::table::Cell;

/// Reads the first worksheet of an xlsx/xlsm/xlsb/xls/ods workbook as raw rows.
pub fn read_workbook(path: &Path) -> Result<Vec<Vec<Cell>>, LoadError> {
    let spreadsheet_err = |source| LoadError::Spreadsheet {
        path: path.to_path_buf(),
        source,
    };

    let mut workbook = open_workbook_auto(path).map_err(spreadsheet_err)?;
    let sheet_names = workbook.sheet_names();
    debug!(sheets = ?sheet_names, "workbook opened");

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| LoadError::NoWorksheet(path.to_path_buf()))?
        .map_err(spreadsheet_err)?;

    Ok(range
        .rows()
        .map(|row| row.iter().map(convert_cell).collect())
        .collect())
}

pub fn convert_cell(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::Int(v) => Cell::Number(*v as f64),
        Data::Float(v) if v.is_nan() => Cell::Empty,
        Data::Float(v) => Cell::Number(*v),
        Data::String(s) => Cell::from_text(s),
        Data::Bool(b) => Cell::Text(b.to_string()),
        other => Cell::from_text(&other.to_string()),
    }
}
