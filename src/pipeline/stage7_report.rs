use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::AppError;
use crate::pipeline::stage6_charts::Stage6Output;
use crate::report::json::{RunSummary, render_summary_json};
use crate::report::{HeaderFields, PageLayout, assemble_pdf};

pub const SUMMARY_FILE: &str = "summary.json";
pub const LINE_CHART_FILE: &str = "line_panels.png";
pub const BAR_CHART_FILE: &str = "bar_chart.png";

#[derive(Debug, Clone)]
pub struct Stage7Input<'a> {
    pub header: &'a HeaderFields,
    pub charts: &'a Stage6Output,
    pub layout: &'a PageLayout,
    pub summary: Option<RunSummary<'a>>,
    pub charts_dir: Option<&'a Path>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage7Output {
    pub pdf: PathBuf,
    pub summary: Option<PathBuf>,
    pub charts: Vec<PathBuf>,
}

/// Writes the report PDF and the optional side outputs.
///
/// Every byte is produced before the first file is created, so an assembly
/// failure leaves the output directory untouched.
pub fn write_reports(input: &Stage7Input<'_>, out_dir: &Path) -> Result<Stage7Output, AppError> {
    let pdf = assemble_pdf(input.header, &input.charts.line, &input.charts.bar, input.layout)?;
    let summary = input
        .summary
        .as_ref()
        .map(render_summary_json)
        .transpose()?;

    create_dir(out_dir)?;
    let pdf_path = out_dir.join(input.header.suggested_file_name());
    write_bytes(&pdf_path, &pdf)?;
    info!(path = %pdf_path.display(), bytes = pdf.len(), "wrote report");

    let summary_path = match summary {
        Some(json) => {
            let path = out_dir.join(SUMMARY_FILE);
            write_bytes(&path, json.as_bytes())?;
            Some(path)
        }
        None => None,
    };

    let mut charts = Vec::new();
    if let Some(dir) = input.charts_dir {
        create_dir(dir)?;
        for (name, image) in [
            (LINE_CHART_FILE, &input.charts.line),
            (BAR_CHART_FILE, &input.charts.bar),
        ] {
            let path = dir.join(name);
            image.save_png(&path).map_err(|source| AppError::ChartImage {
                path: path.clone(),
                source,
            })?;
            charts.push(path);
        }
        info!(dir = %dir.display(), "wrote chart images");
    }

    Ok(Stage7Output {
        pdf: pdf_path,
        summary: summary_path,
        charts,
    })
}

fn create_dir(dir: &Path) -> Result<(), AppError> {
    fs::create_dir_all(dir).map_err(|source| AppError::Output {
        path: dir.to_path_buf(),
        source,
    })
}

fn write_bytes(path: &Path, contents: &[u8]) -> Result<(), AppError> {
    let write = || -> std::io::Result<()> {
        let mut w = BufWriter::new(File::create(path)?);
        w.write_all(contents)?;
        w.flush()
    };
    write().map_err(|source| AppError::Output {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage7_report.rs"]
mod tests;
