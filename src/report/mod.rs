pub mod header;
pub mod json;
pub mod layout;
pub mod pdf;
pub mod text;

use thiserror::Error;

pub use header::HeaderFields;
pub use layout::PageLayout;
pub use pdf::assemble_pdf;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("PDF assembly failed: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("image encoding failed: {0}")]
    Encode(#[from] std::io::Error),
    #[error("invalid chart image: {0}")]
    InvalidImage(String),
    #[error("summary serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// `mean ± se` with two decimals, as printed in summaries.
pub fn format_mean_se(mean: f64, se: f64) -> String {
    format!("{mean:.2} ± {se:.2}")
}
