use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::input::LoadError;
use crate::pipeline::stage2_validate::ValidationError;
use crate::render::RenderError;
use crate::report::ReportError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("could not write chart image {path}: {source}")]
    ChartImage {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("could not write {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
