use serde::{Deserialize, Serialize};

/// Axis-aligned box in PDF points, origin at the lower-left page corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAnchor {
    Top,
    Center,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn contains(&self, other: &Rect) -> bool {
        const EPS: f32 = 1e-3;
        other.x >= self.x - EPS
            && other.y >= self.y - EPS
            && other.right() <= self.right() + EPS
            && other.top() <= self.top() + EPS
    }

    /// Largest placement of an `img_w` x `img_h` raster inside this box that
    /// keeps its aspect ratio. Horizontally centred; vertically per `anchor`.
    pub fn fit(&self, img_w: u32, img_h: u32, anchor: VerticalAnchor) -> Rect {
        if img_w == 0 || img_h == 0 || self.width <= 0.0 || self.height <= 0.0 {
            return Rect::new(self.x, self.y, 0.0, 0.0);
        }
        let scale = (self.width / img_w as f32).min(self.height / img_h as f32);
        let width = img_w as f32 * scale;
        let height = img_h as f32 * scale;
        let x = self.x + (self.width - width) / 2.0;
        let y = match anchor {
            VerticalAnchor::Top => self.top() - height,
            VerticalAnchor::Center => self.y + (self.height - height) / 2.0,
        };
        Rect::new(x, y, width, height)
    }
}

/// Page geometry of the two-page report, in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageLayout {
    pub page_width: f32,
    pub page_height: f32,
    pub header_x: f32,
    pub line_spacing: f32,
    pub font_size: f32,
    /// Space between the last header baseline and the line chart box.
    pub header_gap: f32,
    pub top_margin: f32,
    pub line_chart_box: Rect,
    pub bar_chart_width: f32,
    pub bar_chart_height: f32,
    pub bar_padding_right: f32,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            page_width: 612.0,
            page_height: 792.0,
            header_x: 100.0,
            line_spacing: 20.0,
            font_size: 12.0,
            header_gap: 10.0,
            top_margin: 36.0,
            line_chart_box: Rect::new(0.0, 50.0, 600.0, 600.0),
            bar_chart_width: 790.0,
            bar_chart_height: 450.0,
            bar_padding_right: 5.0,
        }
    }
}

impl PageLayout {
    /// (width, height) of the first page.
    pub fn portrait(&self) -> (f32, f32) {
        (self.page_width, self.page_height)
    }

    /// (width, height) of the second page.
    pub fn landscape(&self) -> (f32, f32) {
        (self.page_height, self.page_width)
    }

    /// Line chart box, lowered from the top when the header would not fit above it.
    pub fn line_chart_frame(&self, header_lines: usize) -> Rect {
        let header_height =
            self.header_gap + header_lines.saturating_sub(1) as f32 * self.line_spacing;
        let max_top = self.page_height - self.top_margin - header_height;
        let mut frame = self.line_chart_box;
        if frame.top() > max_top {
            frame.height = (max_top - frame.y).max(0.0);
        }
        frame
    }

    /// Baselines of the header lines, top line first, stacked directly above `chart_top`.
    pub fn header_baselines(&self, header_lines: usize, chart_top: f32) -> Vec<f32> {
        let last = chart_top + self.header_gap;
        (0..header_lines)
            .map(|i| last + (header_lines - 1 - i) as f32 * self.line_spacing)
            .collect()
    }

    /// Bar chart box on the landscape page, centred and nudged by the right padding.
    pub fn bar_chart_frame(&self) -> Rect {
        let (page_w, page_h) = self.landscape();
        let width = self.bar_chart_width.min(page_w);
        let height = self.bar_chart_height.min(page_h);
        let x = ((page_w - width - self.bar_padding_right) / 2.0).max(0.0);
        let y = ((page_h - height) / 2.0).max(0.0);
        Rect::new(x, y, width.min(page_w - x), height)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/layout.rs"]
mod tests;
