use plotters::style::RGBColor;

use crate::render::RenderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    const fn from_hex(v: u32) -> Self {
        Rgb((v >> 16) as u8, (v >> 8) as u8, v as u8)
    }

    /// Parses `#RRGGBB` (the leading `#` is optional).
    pub fn parse_hex(raw: &str) -> Option<Self> {
        let hex = raw.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(hex, 16).ok().map(Self::from_hex)
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }

    pub fn color(self) -> RGBColor {
        RGBColor(self.0, self.1, self.2)
    }
}

/// Curated palettes; the first four colours map to self, observer, peer, student.
const CATALOGUE: &[(&str, [u32; 4])] = &[
    ("bright", [0x023EFF, 0xFF7C00, 0x1AC938, 0xE8000B]),
    ("deep", [0x4C72B0, 0xDD8452, 0x55A868, 0xC44E52]),
    ("muted", [0x4878D0, 0xEE854A, 0x6ACC64, 0xD65F5F]),
    ("pastel", [0xA1C9F4, 0xFFB482, 0x8DE5A1, 0xFF9F9B]),
    ("dark", [0x001C7F, 0xB1400D, 0x12711C, 0x8C0800]),
    ("colorblind", [0x0173B2, 0xDE8F05, 0x029E73, 0xD55E00]),
    ("husl", [0xF77189, 0x97A431, 0x36ADA4, 0xA48CF4]),
    ("Set2", [0x66C2A5, 0xFC8D62, 0x8DA0CB, 0xE78AC3]),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    name: String,
    colors: Vec<Rgb>,
}

impl Palette {
    /// Resolves a catalogue name (case-insensitive) or a literal
    /// comma-separated list of hex colours. Anything else is rejected.
    pub fn resolve(id: &str) -> Result<Self, RenderError> {
        let trimmed = id.trim();
        if let Some((name, colors)) = CATALOGUE
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(trimmed))
        {
            return Ok(Self {
                name: (*name).to_string(),
                colors: colors.iter().map(|&c| Rgb::from_hex(c)).collect(),
            });
        }

        let literal: Option<Vec<Rgb>> = trimmed.split(',').map(Rgb::parse_hex).collect();
        match literal {
            Some(colors) if !colors.is_empty() => Ok(Self {
                name: trimmed.to_string(),
                colors,
            }),
            _ => Err(RenderError::UnknownPalette(id.to_string())),
        }
    }

    pub fn catalogue() -> Vec<Palette> {
        CATALOGUE
            .iter()
            .map(|(name, colors)| Self {
                name: (*name).to_string(),
                colors: colors.iter().map(|&c| Rgb::from_hex(c)).collect(),
            })
            .collect()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Colour of series `idx`; short literal lists repeat.
    pub fn color(&self, idx: usize) -> Rgb {
        self.colors[idx % self.colors.len()]
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/render/palette.rs"]
mod tests;
