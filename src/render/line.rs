use plotters::coord::Shift;
use plotters::prelude::*;

use crate::model::rater::RaterGroup;
use crate::model::scale::ScaleSeries;
use crate::render::axis::FixedTicks;
use crate::render::theme::{ChartTheme, FONT_FAMILY};
use crate::render::{RasterImage, RenderError, category_label, draw_err};

const PANEL_MARGIN: u32 = 12;
const MARKER_RADIUS: i32 = 5;

/// One stacked panel per scale with the four rater series plotted per item.
///
/// The image grows with the number of scales (`panel_height` per scale).
pub fn render_line_panels(
    scales: &[ScaleSeries],
    theme: &ChartTheme,
) -> Result<RasterImage, RenderError> {
    if scales.is_empty() {
        return Err(RenderError::NoScales);
    }
    let width = theme.geometry.line_width;
    let height = theme.geometry.panel_height * scales.len() as u32;
    let mut image = RasterImage::blank(width, height);
    {
        let root =
            BitMapBackend::with_buffer(image.pixels_mut(), (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;
        for (panel, scale) in root.split_evenly((scales.len(), 1)).iter().zip(scales) {
            draw_panel(panel, scale, theme)?;
        }
        root.present().map_err(draw_err)?;
    }
    Ok(image)
}

fn draw_panel(
    panel: &DrawingArea<BitMapBackend<'_>, Shift>,
    scale: &ScaleSeries,
    theme: &ChartTheme,
) -> Result<(), RenderError> {
    let (panel_width, _) = panel.dim_in_pixel();
    let (plot_area, legend_area) = if theme.text {
        let legend_width = theme.geometry.legend_width.min(panel_width / 3);
        let (plot, legend) = panel.split_horizontally((panel_width - legend_width) as i32);
        (plot, Some(legend))
    } else {
        (panel.clone(), None)
    };

    let x_keys: Vec<f64> = (0..scale.items.len()).map(|i| i as f64).collect();
    let x_max = scale.items.len().max(1) as f64 - 0.5;
    let (y_lo, y_hi) = theme.likert.axis_range();
    let y_keys = theme.likert.ticks();

    let mut builder = ChartBuilder::on(&plot_area);
    builder.margin(PANEL_MARGIN);
    if theme.text {
        builder
            .caption(&scale.name, (FONT_FAMILY, theme.font_px(1.2)))
            .x_label_area_size(theme.font_px(2.2))
            .y_label_area_size(theme.font_px(3.2));
    }
    let mut chart = builder
        .build_cartesian_2d(
            FixedTicks::new(-0.5..x_max, x_keys.clone()),
            FixedTicks::new(y_lo..y_hi, y_keys.clone()),
        )
        .map_err(draw_err)?;

    let grid = theme.style.grid().color();
    chart
        .plotting_area()
        .fill(&theme.style.plot_background().color())
        .map_err(draw_err)?;
    chart
        .draw_series(
            y_keys
                .iter()
                .map(|&y| PathElement::new(vec![(-0.5, y), (x_max, y)], grid.stroke_width(2))),
        )
        .map_err(draw_err)?;
    chart
        .draw_series(
            x_keys
                .iter()
                .map(|&x| PathElement::new(vec![(x, y_lo), (x, y_hi)], grid.stroke_width(2))),
        )
        .map_err(draw_err)?;

    if theme.text {
        let items = &scale.items;
        let x_label = |x: &f64| category_label(items, *x);
        let y_label = |y: &f64| format!("{y:.0}");
        chart
            .configure_mesh()
            .disable_mesh()
            .x_labels(x_keys.len().max(1))
            .y_labels(y_keys.len().max(1))
            .x_label_formatter(&x_label)
            .y_label_formatter(&y_label)
            .x_desc(theme.labels.item_axis.as_str())
            .y_desc(theme.labels.rating_axis.as_str())
            .label_style((FONT_FAMILY, theme.font_px(0.8)))
            .axis_desc_style((FONT_FAMILY, theme.font_px(0.9)))
            .draw()
            .map_err(draw_err)?;
    }

    for group in RaterGroup::ALL {
        let color = theme.series_color(group).color();
        // Out-of-range ratings are pinned to the axis edge.
        let points: Vec<(f64, f64)> = scale
            .points(group)
            .into_iter()
            .map(|(x, y)| (x, y.clamp(y_lo, y_hi)))
            .collect();
        chart
            .draw_series(LineSeries::new(points.clone(), color.stroke_width(3)))
            .map_err(draw_err)?;
        chart
            .draw_series(
                points
                    .iter()
                    .map(|&p| Circle::new(p, MARKER_RADIUS, color.filled())),
            )
            .map_err(draw_err)?;
    }

    if let Some(legend_area) = legend_area {
        let top = (PANEL_MARGIN + theme.font_px(1.8)) as i32;
        draw_outside_legend(&legend_area, theme, top)?;
    }
    Ok(())
}

/// Legend box whose upper-left corner sits at the plot's upper-right edge.
fn draw_outside_legend(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    theme: &ChartTheme,
    top: i32,
) -> Result<(), RenderError> {
    let font_px = theme.font_px(0.8);
    let step = font_px as i32 + 10;
    let (width, _) = area.dim_in_pixel();
    let right = width as i32 - 8;
    let bottom = top + step * RaterGroup::ALL.len() as i32 + 6;

    area.draw(&Rectangle::new([(4, top), (right, bottom)], WHITE.filled()))
        .map_err(draw_err)?;
    area.draw(&Rectangle::new(
        [(4, top), (right, bottom)],
        RGBColor(204, 204, 204).stroke_width(1),
    ))
    .map_err(draw_err)?;

    for (i, group) in RaterGroup::ALL.into_iter().enumerate() {
        let color = theme.series_color(group).color();
        let y = top + 4 + step * i as i32 + step / 2;
        area.draw(&PathElement::new(vec![(12, y), (40, y)], color.stroke_width(3)))
            .map_err(draw_err)?;
        area.draw(&Circle::new((26, y), MARKER_RADIUS, color.filled()))
            .map_err(draw_err)?;
        area.draw(&Text::new(
            theme.labels.group(group),
            (48, y - font_px as i32 / 2),
            (FONT_FAMILY, font_px),
        ))
        .map_err(draw_err)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/render/line.rs"]
mod tests;
