mod config;
mod error;
mod input;
mod logging;
mod model;
mod pipeline;
mod render;
mod report;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::config::load_config;
use crate::error::AppError;
use crate::input::load_table;
use crate::pipeline::prepare;
use crate::pipeline::stage6_charts::run_stage6;
use crate::pipeline::stage7_report::{Stage7Input, write_reports};
use crate::render::font::enable_chart_text;
use crate::render::{ChartStyle, ChartTheme, Palette};
use crate::report::HeaderFields;
use crate::report::json::RunSummary;
use crate::report::text::render_scale_table;

#[derive(Debug, Parser)]
#[command(name = "lessonobs", version, about = "Classroom observation rating reports")]
struct Cli {
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Only warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build the PDF report from a rating sheet
    Run(RunArgs),
    /// Validate a rating sheet and print the per-scale summary
    Check(CheckArgs),
    /// List the named colour palettes
    Palettes,
}

#[derive(Debug, Args)]
struct RunArgs {
    #[arg(long)]
    input: PathBuf,
    #[arg(long)]
    out: PathBuf,
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    school: String,
    #[arg(long, default_value = "")]
    class_level: String,
    #[arg(long, default_value = "")]
    date_time: String,
    #[arg(long, default_value = "")]
    topic: String,
    #[arg(long, default_value = "darkgrid")]
    style: String,
    #[arg(long, default_value = "bright")]
    palette: String,
    #[arg(long)]
    config: Option<PathBuf>,
    /// TrueType font for chart labels
    #[arg(long)]
    font: Option<PathBuf>,
    /// Also write the chart images as PNG into this directory
    #[arg(long)]
    charts_dir: Option<PathBuf>,
    /// Also write summary.json next to the PDF
    #[arg(long)]
    summary_json: bool,
}

#[derive(Debug, Args)]
struct CheckArgs {
    #[arg(long)]
    input: PathBuf,
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);
    if let Err(err) = run(cli.command) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), AppError> {
    match command {
        Command::Run(args) => run_report(&args),
        Command::Check(args) => run_check(&args),
        Command::Palettes => {
            print!("{}", palette_listing());
            Ok(())
        }
    }
}

fn run_report(args: &RunArgs) -> Result<(), AppError> {
    let config = load_config(args.config.as_deref())?;
    // Theme errors surface before any input is read.
    let style = ChartStyle::parse(&args.style)?;
    let palette = Palette::resolve(&args.palette)?;

    let table = load_table(&args.input)?;
    let prepared = prepare(table, &config)?;

    let theme = ChartTheme::new(style, palette)
        .with_likert(config.likert)
        .with_geometry(config.charts.clone())
        .with_labels(config.labels.clone())
        .with_text(enable_chart_text(args.font.as_deref())?);
    let charts = run_stage6(&prepared.scales, &theme)?;

    let header = header_fields(args);
    let summary = args.summary_json.then(|| {
        let mut summary =
            RunSummary::new(display_name(&args.input), &prepared.scales.aggregates);
        summary.recoded_rows = prepared.recode.rows;
        summary.recoded_cells = prepared.recode.cells;
        summary.imputed_cells = prepared.imputed_cells;
        summary
    });
    let out = write_reports(
        &Stage7Input {
            header: &header,
            charts: &charts,
            layout: &config.layout,
            summary,
            charts_dir: args.charts_dir.as_deref(),
        },
        &args.out,
    )?;
    info!(
        pdf = %out.pdf.display(),
        summary = ?out.summary,
        charts = out.charts.len(),
        "done"
    );
    Ok(())
}

fn run_check(args: &CheckArgs) -> Result<(), AppError> {
    let config = load_config(args.config.as_deref())?;
    let table = load_table(&args.input)?;
    let prepared = prepare(table, &config)?;
    println!(
        "{}: {} rows, peer columns [{}], student columns [{}], {} reversed rows, {} imputed cells",
        display_name(&args.input),
        prepared.table.n_rows(),
        prepared.validation.peer_columns.join(", "),
        prepared.validation.student_columns.join(", "),
        prepared.recode.rows,
        prepared.imputed_cells,
    );
    print!(
        "{}",
        render_scale_table(&prepared.scales.aggregates, &config.labels)
    );
    Ok(())
}

fn header_fields(args: &RunArgs) -> HeaderFields {
    HeaderFields {
        name: args.name.clone(),
        school: args.school.clone(),
        class_level: args.class_level.clone(),
        date_time: args.date_time.clone(),
        topic: args.topic.clone(),
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn palette_listing() -> String {
    let mut out = String::new();
    for palette in Palette::catalogue() {
        let colors: Vec<String> = palette.colors().iter().map(|c| c.to_hex()).collect();
        out.push_str(&format!("{:<12} {}\n", palette.name(), colors.join(" ")));
    }
    out
}

#[cfg(test)]
#[path = "../tests/src_inline/fixtures.rs"]
mod fixtures;

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
