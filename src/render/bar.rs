use plotters::prelude::*;

use crate::model::aggregate::ScaleAggregate;
use crate::model::rater::RaterGroup;
use crate::render::axis::FixedTicks;
use crate::render::palette::Rgb;
use crate::render::theme::{ChartTheme, FONT_FAMILY};
use crate::render::{RasterImage, RenderError, category_label, draw_err};

const BAR_MARGIN: u32 = 20;
/// Width of one bar in category units; a cluster spans four bars.
const BAR_WIDTH: f64 = 0.2;
const CAP_HALF_WIDTH: f64 = 0.04;

/// Grouped bar chart of per-scale means with standard-error whiskers.
pub fn render_bar_chart(
    aggregates: &[ScaleAggregate],
    theme: &ChartTheme,
) -> Result<RasterImage, RenderError> {
    if aggregates.is_empty() {
        return Err(RenderError::NoScales);
    }
    let (width, height) = (theme.geometry.bar_width, theme.geometry.bar_height);
    let mut image = RasterImage::blank(width, height);

    let cluster_offset = 1.5 * BAR_WIDTH;
    let x_keys: Vec<f64> = (0..aggregates.len())
        .map(|i| i as f64 + cluster_offset)
        .collect();
    let x_range = -BAR_WIDTH..aggregates.len() as f64 - BAR_WIDTH;
    let (y_lo, y_hi) = theme.likert.axis_range();
    let y_keys = theme.likert.ticks();
    let shorts: Vec<String> = aggregates.iter().map(|a| a.short.clone()).collect();

    {
        let root =
            BitMapBackend::with_buffer(image.pixels_mut(), (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let mut builder = ChartBuilder::on(&root);
        builder.margin(BAR_MARGIN);
        if theme.text {
            builder
                .caption(theme.labels.bar_title.as_str(), (FONT_FAMILY, theme.font_px(1.6)))
                .x_label_area_size(theme.font_px(3.0))
                .y_label_area_size(theme.font_px(3.5));
        }
        let mut chart = builder
            .build_cartesian_2d(
                FixedTicks::new(x_range, x_keys.clone()),
                FixedTicks::new(y_lo..y_hi, y_keys.clone()),
            )
            .map_err(draw_err)?;

        let grid = theme.style.grid().color();
        let x_right = aggregates.len() as f64 - BAR_WIDTH;
        chart
            .plotting_area()
            .fill(&theme.style.plot_background().color())
            .map_err(draw_err)?;
        chart
            .draw_series(y_keys.iter().map(|&y| {
                PathElement::new(vec![(-BAR_WIDTH, y), (x_right, y)], grid.stroke_width(2))
            }))
            .map_err(draw_err)?;

        if theme.text {
            let x_label = |x: &f64| category_label(&shorts, *x - cluster_offset);
            let y_label = |y: &f64| format!("{y:.0}");
            chart
                .configure_mesh()
                .disable_mesh()
                .x_labels(x_keys.len())
                .y_labels(y_keys.len().max(1))
                .x_label_formatter(&x_label)
                .y_label_formatter(&y_label)
                .x_desc(theme.labels.scale_axis.as_str())
                .y_desc(theme.labels.mean_axis.as_str())
                .label_style((FONT_FAMILY, theme.font_px(0.9)))
                .axis_desc_style((FONT_FAMILY, theme.font_px(1.0)))
                .draw()
                .map_err(draw_err)?;
        }

        for group in RaterGroup::ALL {
            let color = theme.series_color(group).color();
            let offset = group.index() as f64 * BAR_WIDTH;
            let series = chart
                .draw_series(aggregates.iter().enumerate().map(|(i, agg)| {
                    let center = i as f64 + offset;
                    let top = agg.stat(group).mean.clamp(y_lo, y_hi);
                    Rectangle::new(
                        [(center - BAR_WIDTH / 2.0, y_lo), (center + BAR_WIDTH / 2.0, top)],
                        color.filled(),
                    )
                }))
                .map_err(draw_err)?;
            series
                .label(theme.labels.group(group))
                .legend(move |(x, y)| {
                    Rectangle::new([(x, y - 8), (x + 20, y + 8)], color.filled())
                });
        }

        let whisker = Rgb::BLACK.color().stroke_width(2);
        let mut whiskers = Vec::with_capacity(aggregates.len() * RaterGroup::ALL.len() * 3);
        for (i, agg) in aggregates.iter().enumerate() {
            for group in RaterGroup::ALL {
                let x = i as f64 + group.index() as f64 * BAR_WIDTH;
                let stat = agg.stat(group);
                let lo = (stat.mean - stat.se).clamp(y_lo, y_hi);
                let hi = (stat.mean + stat.se).clamp(y_lo, y_hi);
                whiskers.push(PathElement::new(vec![(x, lo), (x, hi)], whisker));
                whiskers.push(PathElement::new(
                    vec![(x - CAP_HALF_WIDTH, lo), (x + CAP_HALF_WIDTH, lo)],
                    whisker,
                ));
                whiskers.push(PathElement::new(
                    vec![(x - CAP_HALF_WIDTH, hi), (x + CAP_HALF_WIDTH, hi)],
                    whisker,
                ));
            }
        }
        chart.draw_series(whiskers).map_err(draw_err)?;

        if theme.text {
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::UpperLeft)
                .background_style(WHITE.mix(0.85))
                .border_style(RGBColor(204, 204, 204))
                .label_font((FONT_FAMILY, theme.font_px(0.9)))
                .draw()
                .map_err(draw_err)?;
        }
        root.present().map_err(draw_err)?;
    }
    Ok(image)
}

#[cfg(test)]
#[path = "../../tests/src_inline/render/bar.rs"]
mod tests;
