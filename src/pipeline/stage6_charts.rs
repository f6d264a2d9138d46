use tracing::info;

use crate::pipeline::stage5_scales::Stage5Output;
use crate::render::{ChartTheme, RasterImage, RenderError, render_bar_chart, render_line_panels};

#[derive(Debug, Clone)]
pub struct Stage6Output {
    pub line: RasterImage,
    pub bar: RasterImage,
}

pub fn run_stage6(stage5: &Stage5Output, theme: &ChartTheme) -> Result<Stage6Output, RenderError> {
    let line = render_line_panels(&stage5.series, theme)?;
    let bar = render_bar_chart(&stage5.aggregates, theme)?;
    info!(
        style = theme.style.name(),
        palette = theme.palette.name(),
        line = %format!("{}x{}", line.width(), line.height()),
        bar = %format!("{}x{}", bar.width(), bar.height()),
        "rendered charts"
    );
    Ok(Stage6Output { line, bar })
}
