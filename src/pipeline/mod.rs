pub mod stage2_validate;
pub mod stage3_recode;
pub mod stage4_impute;
pub mod stage5_scales;
pub mod stage6_charts;
pub mod stage7_report;

use crate::config::ReportConfig;
use crate::error::AppError;
use crate::model::table::ObservationTable;
use stage2_validate::{ValidationReport, validate};
use stage3_recode::{RecodeSummary, recode_inverted_items};
use stage4_impute::{compute_composite_means, impute_group_means};
use stage5_scales::{Stage5Output, run_stage5};

/// Table after scoring, with what each step did to it.
#[derive(Debug, Clone)]
pub struct PreparedData {
    pub table: ObservationTable,
    pub validation: ValidationReport,
    pub recode: RecodeSummary,
    pub imputed_cells: usize,
    pub scales: Stage5Output,
}

/// Validation through aggregation; the table is consumed and mutated in place.
pub fn prepare(
    mut table: ObservationTable,
    config: &ReportConfig,
) -> Result<PreparedData, AppError> {
    let columns = &config.groups;
    let validation = validate(&table, columns)?;
    let recode = recode_inverted_items(&mut table, columns, &config.reversal, &config.likert);
    let imputed_cells = impute_group_means(&mut table, columns);
    compute_composite_means(&mut table, columns);
    let scales = run_stage5(&table, columns)?;
    Ok(PreparedData {
        table,
        validation,
        recode,
        imputed_cells,
        scales,
    })
}
