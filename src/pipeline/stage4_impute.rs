use tracing::{debug, info};

use crate::model::aggregate::mean;
use crate::model::rater::RaterColumns;
use crate::model::table::{Cell, ObservationTable};

/// Fills blank peer and student cells with the mean of their own column.
///
/// Each column is imputed on its own; columns without any rating are left alone.
/// Returns the number of cells filled.
pub fn impute_group_means(table: &mut ObservationTable, columns: &RaterColumns) -> usize {
    let mut targets = columns.peer_columns(table);
    targets.extend(columns.student_columns(table));

    let mut filled = 0usize;
    for idx in targets {
        let column = table.column_at_mut(idx);
        let values: Vec<f64> = column.numbers().collect();
        let Some(fill) = mean(&values) else {
            debug!(column = %column.name, "no ratings to impute from");
            continue;
        };
        for cell in column.cells.iter_mut().filter(|c| c.is_empty()) {
            *cell = Cell::Number(fill);
            filled += 1;
        }
    }

    info!(cells = filled, "imputed missing peer/student ratings");
    filled
}

/// Adds `<peer>_mean` and `<student>_mean`: NaN-safe row means over each group.
pub fn compute_composite_means(table: &mut ObservationTable, columns: &RaterColumns) {
    for prefix in [&columns.peer_prefix, &columns.student_prefix] {
        let group = columns.group_columns(table, prefix);
        let cells = row_means(table, &group);
        table.set_column(&RaterColumns::composite_name(prefix), cells);
    }
}

fn row_means(table: &ObservationTable, group: &[usize]) -> Vec<Cell> {
    (0..table.n_rows())
        .map(|row| {
            let values: Vec<f64> = group
                .iter()
                .filter_map(|&col| table.cell(row, col).as_number())
                .collect();
            mean(&values).map_or(Cell::Empty, Cell::Number)
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_impute.rs"]
mod tests;
