use serde::Serialize;

use crate::model::aggregate::ScaleAggregate;
use crate::report::ReportError;

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary<'a> {
    pub tool: &'static str,
    pub version: &'static str,
    pub input: String,
    pub recoded_rows: usize,
    pub recoded_cells: usize,
    pub imputed_cells: usize,
    pub scales: &'a [ScaleAggregate],
}

impl<'a> RunSummary<'a> {
    pub fn new(input: String, scales: &'a [ScaleAggregate]) -> Self {
        Self {
            tool: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            input,
            recoded_rows: 0,
            recoded_cells: 0,
            imputed_cells: 0,
            scales,
        }
    }
}

pub fn render_summary_json(summary: &RunSummary<'_>) -> Result<String, ReportError> {
    let mut out = serde_json::to_string_pretty(summary)?;
    out.push('\n');
    Ok(out)
}
