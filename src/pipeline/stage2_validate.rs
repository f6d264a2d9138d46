use thiserror::Error;

use crate::model::rater::RaterColumns;
use crate::model::table::{Cell, ObservationTable};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("missing required column '{0}'")]
    MissingColumn(String),
    #[error("missing or empty rating columns: {}", .0.join(", "))]
    MissingGroups(Vec<String>),
    #[error("column '{column}', data row {row}: '{value}' is not a numeric rating")]
    NonNumeric {
        column: String,
        row: usize,
        value: String,
    },
    #[error("column '{column}' is empty in data row {row}")]
    MissingIdentifier { column: String, row: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    pub peer_columns: Vec<String>,
    pub student_columns: Vec<String>,
}

/// Checks that the sheet carries every rating group the report needs.
///
/// All missing groups are reported together; nothing is repaired here.
pub fn validate(
    table: &ObservationTable,
    columns: &RaterColumns,
) -> Result<ValidationReport, ValidationError> {
    for required in [&columns.item, &columns.scale_name, &columns.scale_short] {
        if table.column_index(required).is_none() {
            return Err(ValidationError::MissingColumn(required.clone()));
        }
    }

    let has_values = |idx: usize| table.column_at(idx).has_numbers();
    let single_ok = |name: &str| table.column_index(name).is_some_and(has_values);
    let peer: Vec<usize> = columns
        .peer_columns(table)
        .into_iter()
        .filter(|&idx| has_values(idx))
        .collect();
    let student: Vec<usize> = columns
        .student_columns(table)
        .into_iter()
        .filter(|&idx| has_values(idx))
        .collect();

    let mut missing = Vec::new();
    if !single_ok(&columns.self_rating) {
        missing.push(columns.self_rating.clone());
    }
    if !single_ok(&columns.observer) {
        missing.push(columns.observer.clone());
    }
    if peer.is_empty() {
        missing.push(format!("{}*", columns.peer_prefix));
    }
    if student.is_empty() {
        missing.push(format!("{}*", columns.student_prefix));
    }
    if !missing.is_empty() {
        return Err(ValidationError::MissingGroups(missing));
    }

    for idx in columns.rating_columns(table) {
        let column = table.column_at(idx);
        if let Some((row, Cell::Text(value))) = column
            .cells
            .iter()
            .enumerate()
            .find(|(_, c)| matches!(c, Cell::Text(_)))
        {
            return Err(ValidationError::NonNumeric {
                column: column.name.clone(),
                row: row + 1,
                value: value.clone(),
            });
        }
    }

    for name in [&columns.item, &columns.scale_name] {
        let column = table
            .column(name)
            .ok_or_else(|| ValidationError::MissingColumn(name.clone()))?;
        if let Some(row) = column.cells.iter().position(Cell::is_empty) {
            return Err(ValidationError::MissingIdentifier {
                column: name.clone(),
                row: row + 1,
            });
        }
    }

    let names = |ids: Vec<usize>| -> Vec<String> {
        ids.into_iter()
            .map(|i| table.column_at(i).name.clone())
            .collect()
    };
    Ok(ValidationReport {
        peer_columns: names(peer),
        student_columns: names(student),
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_validate.rs"]
mod tests;
