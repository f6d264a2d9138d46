use tracing::{info, warn};

use crate::model::aggregate::{GroupStat, ScaleAggregate};
use crate::model::rater::{RaterColumns, RaterGroup};
use crate::model::scale::{Scale, ScaleSeries};
use crate::model::table::ObservationTable;
use crate::render::RenderError;

#[derive(Debug, Clone)]
pub struct Stage5Output {
    pub series: Vec<ScaleSeries>,
    pub aggregates: Vec<ScaleAggregate>,
}

pub fn run_stage5(
    table: &ObservationTable,
    columns: &RaterColumns,
) -> Result<Stage5Output, RenderError> {
    let scales = group_by_scale(table, columns);
    let series = scales
        .iter()
        .map(|scale| scale_series(table, scale, columns))
        .collect();
    let aggregates = aggregate_scales(table, &scales, columns)?;
    info!(scales = scales.len(), "aggregated scales");
    Ok(Stage5Output { series, aggregates })
}

/// Scales in order of first appearance, each with its rows in table order.
/// The first non-empty short label of a scale wins; the full name stands in
/// when no short label is given.
pub fn group_by_scale(table: &ObservationTable, columns: &RaterColumns) -> Vec<Scale> {
    let Some(name_col) = table.column_index(&columns.scale_name) else {
        return Vec::new();
    };
    let short_col = table.column_index(&columns.scale_short);

    let mut scales: Vec<Scale> = Vec::new();
    for row in 0..table.n_rows() {
        let name = table.cell(row, name_col).label();
        if name.is_empty() {
            continue;
        }
        let short = short_col
            .map(|col| table.cell(row, col).label())
            .unwrap_or_default();

        match scales.iter().position(|s| s.name == name) {
            Some(idx) => {
                let scale = &mut scales[idx];
                if scale.short.is_empty() {
                    scale.short = short;
                } else if !short.is_empty() && short != scale.short {
                    warn!(
                        scale = %scale.name,
                        kept = %scale.short,
                        ignored = %short,
                        "conflicting short labels; keeping the first"
                    );
                }
                scale.rows.push(row);
            }
            None => scales.push(Scale {
                name,
                short,
                rows: vec![row],
            }),
        }
    }

    for scale in &mut scales {
        if scale.short.is_empty() {
            scale.short = scale.name.clone();
        }
    }
    scales
}

pub fn scale_series(
    table: &ObservationTable,
    scale: &Scale,
    columns: &RaterColumns,
) -> ScaleSeries {
    let item_col = table.column_index(&columns.item);
    let items = scale
        .rows
        .iter()
        .map(|&row| {
            item_col
                .map(|col| table.cell(row, col).label())
                .unwrap_or_default()
        })
        .collect();
    let values = |group: RaterGroup| group_values(table, scale, &columns.series_column(group));

    ScaleSeries {
        name: scale.name.clone(),
        items,
        self_rating: values(RaterGroup::SelfRating),
        observer: values(RaterGroup::Observer),
        peer: values(RaterGroup::Peer),
        student: values(RaterGroup::Student),
    }
}

/// Mean and standard error per rater group for every scale.
///
/// The sample size of each statistic is the number of non-missing values of
/// that column within the scale.
pub fn aggregate_scales(
    table: &ObservationTable,
    scales: &[Scale],
    columns: &RaterColumns,
) -> Result<Vec<ScaleAggregate>, RenderError> {
    if scales.is_empty() {
        return Err(RenderError::NoScales);
    }

    scales
        .iter()
        .map(|scale| {
            let stat = |group: RaterGroup| -> Result<GroupStat, RenderError> {
                let values: Vec<f64> = group_values(table, scale, &columns.series_column(group))
                    .into_iter()
                    .flatten()
                    .collect();
                GroupStat::from_values(&values).ok_or_else(|| RenderError::EmptyGroup {
                    scale: scale.name.clone(),
                    group,
                })
            };
            Ok(ScaleAggregate {
                name: scale.name.clone(),
                short: scale.short.clone(),
                items: scale.rows.len(),
                self_rating: stat(RaterGroup::SelfRating)?,
                observer: stat(RaterGroup::Observer)?,
                peer: stat(RaterGroup::Peer)?,
                student: stat(RaterGroup::Student)?,
            })
        })
        .collect()
}

fn group_values(table: &ObservationTable, scale: &Scale, column: &str) -> Vec<Option<f64>> {
    match table.column_index(column) {
        Some(col) => scale
            .rows
            .iter()
            .map(|&row| table.cell(row, col).as_number())
            .collect(),
        None => vec![None; scale.rows.len()],
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_scales.rs"]
mod tests;
