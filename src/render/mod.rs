pub mod axis;
pub mod bar;
pub mod font;
pub mod line;
pub mod palette;
pub mod theme;

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::rater::RaterGroup;

pub use bar::render_bar_chart;
pub use line::render_line_panels;
pub use palette::Palette;
pub use theme::{ChartGeometry, ChartLabels, ChartStyle, ChartTheme};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("unknown colour palette '{0}' (use a named palette or a list like #1f77b4,#ff7f0e)")]
    UnknownPalette(String),
    #[error("unknown chart style '{0}' (use darkgrid or whitegrid)")]
    UnknownStyle(String),
    #[error("no scales to chart")]
    NoScales,
    #[error("scale '{scale}' has no {group} ratings")]
    EmptyGroup { scale: String, group: RaterGroup },
    #[error("cannot use font {}: {reason}", path.display())]
    Font { path: PathBuf, reason: String },
    #[error("chart drawing failed: {0}")]
    Draw(String),
}

pub(crate) fn draw_err<E: std::fmt::Display>(err: E) -> RenderError {
    RenderError::Draw(err.to_string())
}

/// Tick label for a categorical axis position; off-category positions get none.
pub(crate) fn category_label(labels: &[String], x: f64) -> String {
    let idx = x.round();
    if idx < 0.0 || (x - idx).abs() > 0.25 {
        return String::new();
    }
    labels.get(idx as usize).cloned().unwrap_or_default()
}

/// In-memory RGB8 raster produced by the chart renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RasterImage {
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![255; width as usize * height as usize * 3],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    pub fn save_png(&self, path: &Path) -> Result<(), image::ImageError> {
        image::save_buffer(
            path,
            &self.pixels,
            self.width,
            self.height,
            image::ColorType::Rgb8,
        )
    }
}

#[cfg(test)]
impl RasterImage {
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let at = (y as usize * self.width as usize + x as usize) * 3;
        [self.pixels[at], self.pixels[at + 1], self.pixels[at + 2]]
    }

    pub fn contains_color(&self, rgb: palette::Rgb) -> bool {
        self.pixels
            .chunks_exact(3)
            .any(|p| p == [rgb.0, rgb.1, rgb.2])
    }
}
