//! Output settings for rendered figures.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// Physical size and framing of the output document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Document width in centimetres; the height follows the content's aspect ratio.
    pub width_cm: f64,
    /// Margin around the content, as a fraction of the content's horizontal extent.
    pub margin_fraction: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width_cm: 20.0,
            margin_fraction: 0.01,
        }
    }
}

impl RenderConfig {
    /// Default framing at a different width.
    pub fn with_width(width_cm: f64) -> Self {
        Self {
            width_cm,
            ..Self::default()
        }
    }

    /// Content edge to edge, no margin.
    pub fn tight() -> Self {
        Self {
            margin_fraction: 0.0,
            ..Self::default()
        }
    }

    pub fn from_json(text: &str) -> Result<Self, RenderError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, RenderError> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> Result<(), RenderError> {
        if !(self.width_cm.is_finite() && self.width_cm > 0.0) {
            return Err(RenderError::InvalidConfig {
                reason: format!("width_cm must be positive, got {}", self.width_cm),
            });
        }
        if !(self.margin_fraction.is_finite() && self.margin_fraction >= 0.0) {
            return Err(RenderError::InvalidConfig {
                reason: format!("margin_fraction must be non-negative, got {}", self.margin_fraction),
            });
        }
        Ok(())
    }
}
