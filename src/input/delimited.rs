use std::fs;
use std::path::Path;

use crate::input::LoadError;
use crate::model::table::Cell;

/// Reads a CSV export. The delimiter is sniffed from the first line: tab,
/// semicolon (spreadsheet exports in German locales) or comma.
pub fn read_delimited(path: &Path) -> Result<Vec<Vec<Cell>>, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
    parse_delimited(text).map_err(|source| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_delimited(text: &str) -> Result<Vec<Vec<Cell>>, csv::Error> {
    let delimiter = sniff_delimiter(text);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    // Semicolon exports come from locales that write decimals with a comma.
    let to_cell: fn(&str) -> Cell = if delimiter == b';' {
        Cell::from_text_decimal_comma
    } else {
        Cell::from_text
    };
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(to_cell).collect());
    }
    Ok(rows)
}

pub fn sniff_delimiter(text: &str) -> u8 {
    let first = text.lines().find(|l| !l.trim().is_empty()).unwrap_or("");
    let count = |c: char| first.matches(c).count();
    let (tabs, semis, commas) = (count('\t'), count(';'), count(','));
    if tabs > semis && tabs > commas {
        b'\t'
    } else if semis > commas {
        b';'
    } else {
        b','
    }
}
