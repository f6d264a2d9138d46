use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::model::likert::LikertScale;
use crate::model::rater::RaterColumns;
use crate::pipeline::stage3_recode::ReversalRule;
use crate::render::{ChartGeometry, ChartLabels};
use crate::report::PageLayout;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Tunables of a report run. Every section and field falls back to its default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    pub reversal: ReversalRule,
    pub likert: LikertScale,
    pub groups: RaterColumns,
    pub charts: ChartGeometry,
    pub layout: PageLayout,
    pub labels: ChartLabels,
}

impl ReportConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.likert.is_valid() {
            return Err(ConfigError::Invalid(format!(
                "likert range {}..{} is empty",
                self.likert.min, self.likert.max
            )));
        }
        if self.groups.peer_prefix.is_empty() || self.groups.student_prefix.is_empty() {
            return Err(ConfigError::Invalid(
                "group prefixes must not be empty".to_string(),
            ));
        }
        let c = &self.charts;
        if c.line_width == 0 || c.panel_height == 0 || c.bar_width == 0 || c.bar_height == 0 {
            return Err(ConfigError::Invalid(
                "chart dimensions must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Reads the JSON config at `path`, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<ReportConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(ReportConfig::default());
    };
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: ReportConfig = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate()?;
    info!(config = %path.display(), "loaded config");
    Ok(config)
}

#[cfg(test)]
#[path = "../tests/src_inline/config.rs"]
mod tests;
