use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::model::likert::LikertScale;
use crate::model::rater::RaterColumns;
use crate::model::table::{Cell, ObservationTable};

/// Items worded in the opposite direction of their scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReversalRule {
    pub items: Vec<String>,
}

impl Default for ReversalRule {
    fn default() -> Self {
        Self {
            items: vec!["S4".to_string(), "D3".to_string()],
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecodeSummary {
    pub rows: usize,
    pub cells: usize,
}

/// Mirrors every rating of a reversed item on the Likert scale.
///
/// Blank cells and exact zeros are "no response" and stay as they are. Values
/// outside the scale are not rejected; they go through the same formula.
pub fn recode_inverted_items(
    table: &mut ObservationTable,
    columns: &RaterColumns,
    rule: &ReversalRule,
    likert: &LikertScale,
) -> RecodeSummary {
    let Some(item_col) = table.column_index(&columns.item) else {
        return RecodeSummary::default();
    };
    let reversed: BTreeSet<&str> = rule.items.iter().map(|s| s.trim()).collect();
    let rows: Vec<usize> = (0..table.n_rows())
        .filter(|&row| reversed.contains(table.cell(row, item_col).label().as_str()))
        .collect();

    let mut summary = RecodeSummary {
        rows: rows.len(),
        cells: 0,
    };
    for col in columns.rating_columns(table) {
        for &row in &rows {
            let cell = table.cell_mut(row, col);
            if let Cell::Number(v) = *cell {
                if v == 0.0 {
                    continue;
                }
                if v < likert.min || v > likert.max {
                    debug!(row, value = v, "reversing a rating outside the scale");
                }
                *cell = Cell::Number(likert.reflect(v));
                summary.cells += 1;
            }
        }
    }

    info!(
        rows = summary.rows,
        cells = summary.cells,
        "recoded reversed items"
    );
    summary
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_recode.rs"]
mod tests;
