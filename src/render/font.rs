use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use plotters::style::{FontStyle, register_font};
use tracing::{debug, warn};

use crate::render::RenderError;
use crate::render::theme::FONT_FAMILY;

const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

static SYSTEM_TEXT: OnceLock<bool> = OnceLock::new();

/// Registers the chart label font and reports whether charts can carry text.
///
/// An `explicit` font must load. Without one, the system font search runs
/// once per process and falls back to text-free charts.
pub fn enable_chart_text(explicit: Option<&Path>) -> Result<bool, RenderError> {
    match explicit {
        Some(path) => {
            load_font(path)?;
            Ok(true)
        }
        None => Ok(*SYSTEM_TEXT.get_or_init(system_font_text)),
    }
}

fn system_font_text() -> bool {
    let Some(path) = find_system_font() else {
        warn!("no TrueType font found; charts are rendered without labels (use --font)");
        return false;
    };
    match load_font(&path) {
        Ok(()) => true,
        Err(err) => {
            warn!(error = %err, "charts are rendered without labels");
            false
        }
    }
}

pub(crate) fn load_font(path: &Path) -> Result<(), RenderError> {
    let bytes = std::fs::read(path).map_err(|err| RenderError::Font {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;
    // plotters keeps registered fonts for the life of the process.
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
    register_font(FONT_FAMILY, FontStyle::Normal, bytes).map_err(|_| RenderError::Font {
        path: path.to_path_buf(),
        reason: "not a usable TrueType font".to_string(),
    })?;
    debug!(font = %path.display(), "registered chart font");
    Ok(())
}

pub(crate) fn find_system_font() -> Option<PathBuf> {
    SYSTEM_FONTS
        .iter()
        .map(PathBuf::from)
        .find(|p| p.is_file())
}

#[cfg(test)]
#[path = "../../tests/src_inline/render/font.rs"]
mod tests;
