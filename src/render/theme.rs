use serde::{Deserialize, Serialize};

use crate::model::likert::LikertScale;
use crate::model::rater::RaterGroup;
use crate::render::RenderError;
use crate::render::palette::{Palette, Rgb};

/// Family name chart text is registered and looked up under.
pub const FONT_FAMILY: &str = "sans-serif";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartStyle {
    DarkGrid,
    WhiteGrid,
}

impl ChartStyle {
    pub fn parse(name: &str) -> Result<Self, RenderError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "darkgrid" | "grid-on-dark" => Ok(ChartStyle::DarkGrid),
            "whitegrid" | "grid-on-light" => Ok(ChartStyle::WhiteGrid),
            _ => Err(RenderError::UnknownStyle(name.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ChartStyle::DarkGrid => "darkgrid",
            ChartStyle::WhiteGrid => "whitegrid",
        }
    }

    pub fn plot_background(self) -> Rgb {
        match self {
            ChartStyle::DarkGrid => Rgb(234, 234, 242),
            ChartStyle::WhiteGrid => Rgb::WHITE,
        }
    }

    pub fn grid(self) -> Rgb {
        match self {
            ChartStyle::DarkGrid => Rgb::WHITE,
            ChartStyle::WhiteGrid => Rgb(204, 204, 204),
        }
    }
}

/// Pixel geometry of the rendered charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartGeometry {
    pub line_width: u32,
    pub panel_height: u32,
    pub legend_width: u32,
    pub bar_width: u32,
    pub bar_height: u32,
    pub font_size: u32,
}

impl Default for ChartGeometry {
    fn default() -> Self {
        Self {
            line_width: 1400,
            panel_height: 300,
            legend_width: 170,
            bar_width: 1560,
            bar_height: 1080,
            font_size: 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartLabels {
    pub self_rating: String,
    pub observer: String,
    pub peer: String,
    pub student: String,
    pub item_axis: String,
    pub rating_axis: String,
    pub bar_title: String,
    pub scale_axis: String,
    pub mean_axis: String,
}

impl Default for ChartLabels {
    fn default() -> Self {
        Self {
            self_rating: "Selbst".to_string(),
            observer: "BLK".to_string(),
            peer: "PK".to_string(),
            student: "SUS".to_string(),
            item_axis: "Item".to_string(),
            rating_axis: "Bewertung".to_string(),
            bar_title: "Mittelwerte je Merkmal".to_string(),
            scale_axis: "Merkmal".to_string(),
            mean_axis: "Mittelwert".to_string(),
        }
    }
}

impl ChartLabels {
    pub fn group(&self, group: RaterGroup) -> &str {
        match group {
            RaterGroup::SelfRating => &self.self_rating,
            RaterGroup::Observer => &self.observer,
            RaterGroup::Peer => &self.peer,
            RaterGroup::Student => &self.student,
        }
    }
}

/// Everything the renderers need, passed explicitly to every draw call.
#[derive(Debug, Clone)]
pub struct ChartTheme {
    pub style: ChartStyle,
    pub palette: Palette,
    pub likert: LikertScale,
    pub geometry: ChartGeometry,
    pub labels: ChartLabels,
    /// Whether a label font is registered; without one charts carry no text.
    pub text: bool,
}

impl ChartTheme {
    pub fn new(style: ChartStyle, palette: Palette) -> Self {
        Self {
            style,
            palette,
            likert: LikertScale::default(),
            geometry: ChartGeometry::default(),
            labels: ChartLabels::default(),
            text: false,
        }
    }

    pub fn with_likert(mut self, likert: LikertScale) -> Self {
        self.likert = likert;
        self
    }

    pub fn with_geometry(mut self, geometry: ChartGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn with_labels(mut self, labels: ChartLabels) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_text(mut self, text: bool) -> Self {
        self.text = text;
        self
    }

    pub fn series_color(&self, group: RaterGroup) -> Rgb {
        self.palette.color(group.index())
    }

    pub fn font_px(&self, scale: f64) -> u32 {
        ((self.geometry.font_size as f64) * scale).round().max(1.0) as u32
    }
}
