use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chain::DEFAULT_TICKS_PER_SECOND;
use crate::error::{HudError, HudResult};
use crate::math::Vec2;

/// Scene-wide settings, loadable from TOML
///
/// Every field has a default, so a partial file (or an empty one) is valid.
///
/// ```toml
/// ticks_per_second = 20.0
/// pointer_y_scale = 0.5
/// viewport = [854.0, 480.0]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    /// Converts animation durations in seconds to host ticks
    pub ticks_per_second: f32,
    /// Factor applied once to the raw pointer Y to correct host display scaling
    pub pointer_y_scale: f32,
    /// Layout extent used when the canvas reports an empty viewport
    pub viewport: [f32; 2],
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            ticks_per_second: DEFAULT_TICKS_PER_SECOND,
            pointer_y_scale: 0.5,
            viewport: [854.0, 480.0],
        }
    }
}

impl HudConfig {
    pub fn from_toml_str(text: &str) -> HudResult<Self> {
        let config: HudConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> HudResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| HudError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        log::info!("Loaded overlay config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> HudResult<()> {
        if !(self.ticks_per_second > 0.0 && self.ticks_per_second.is_finite()) {
            return Err(HudError::InvalidConfig(format!(
                "ticks_per_second must be positive and finite, got {}",
                self.ticks_per_second
            )));
        }
        if !(self.pointer_y_scale > 0.0 && self.pointer_y_scale.is_finite()) {
            return Err(HudError::InvalidConfig(format!(
                "pointer_y_scale must be positive and finite, got {}",
                self.pointer_y_scale
            )));
        }
        if !self.viewport.iter().all(|extent| *extent > 0.0 && extent.is_finite()) {
            return Err(HudError::InvalidConfig(format!(
                "viewport must be positive and finite, got {:?}",
                self.viewport
            )));
        }
        Ok(())
    }

    pub fn viewport_extent(&self) -> Vec2 {
        Vec2::from(self.viewport)
    }
}
