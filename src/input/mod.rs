use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

pub mod delimited;
pub mod workbook;

use crate::model::table::{Cell, Column, ObservationTable};
use delimited::read_delimited;
use workbook::read_workbook;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse spreadsheet {path}: {source}")]
    Spreadsheet {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },
    #[error("could not parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("spreadsheet {0} contains no worksheet")]
    NoWorksheet(PathBuf),
    #[error("spreadsheet contains no data: {0}")]
    Empty(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Workbook,
    Delimited,
}

pub fn detect_format(path: &Path) -> InputFormat {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("csv") | Some("tsv") | Some("txt") => InputFormat::Delimited,
        _ => InputFormat::Workbook,
    }
}

/// Reads the observation sheet at `path` and drops fully-empty rows and columns.
pub fn load_table(path: &Path) -> Result<ObservationTable, LoadError> {
    let format = detect_format(path);
    info!(input = %path.display(), ?format, "loading observation sheet");

    let grid = match format {
        InputFormat::Workbook => read_workbook(path)?,
        InputFormat::Delimited => read_delimited(path)?,
    };
    table_from_grid(grid)
}

/// Builds a table from raw rows. The first row with any content is the header.
pub fn table_from_grid(grid: Vec<Vec<Cell>>) -> Result<ObservationTable, LoadError> {
    let mut rows = grid.into_iter().skip_while(|r| r.iter().all(Cell::is_empty));
    let header = rows
        .next()
        .ok_or_else(|| LoadError::Empty("no header row".to_string()))?;
    let body: Vec<Vec<Cell>> = rows.collect();

    let width = body
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0);

    let names = header_names(&header, width);
    let mut columns: Vec<Column> = names
        .into_iter()
        .map(|name| Column::new(name, Vec::with_capacity(body.len())))
        .collect();
    for row in body {
        let mut cells = row.into_iter();
        for column in &mut columns {
            column.cells.push(cells.next().unwrap_or(Cell::Empty));
        }
    }

    let mut table = ObservationTable::new(columns);
    let (rows_dropped, cols_dropped) = table.drop_empty();
    debug!(rows_dropped, cols_dropped, "dropped empty rows and columns");
    debug!(columns = ?table.column_names(), "header");

    if table.n_rows() == 0 || table.n_columns() == 0 {
        return Err(LoadError::Empty("no data rows below the header".to_string()));
    }
    info!(
        rows = table.n_rows(),
        columns = table.n_columns(),
        "observation sheet loaded"
    );
    Ok(table)
}

/// Trimmed header names; blanks become `column_<n>`, repeats get a `.<k>` suffix.
fn header_names(header: &[Cell], width: usize) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(width);
    for idx in 0..width {
        let raw = header.get(idx).map(Cell::label).unwrap_or_default();
        let base = match raw.trim() {
            "" => format!("column_{}", idx + 1),
            name => name.to_string(),
        };
        let mut name = base.clone();
        let mut k = 1usize;
        while names.contains(&name) {
            name = format!("{base}.{k}");
            k += 1;
        }
        names.push(name);
    }
    names
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
