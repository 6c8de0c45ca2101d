//! Blur configuration.
//!
//! Configurations can be built in code or loaded from TOML / JSON. Missing
//! fields fall back to their defaults, so `radius = 2.0` is a complete
//! document.
//!
//! ```toml
//! radius = 2.5
//! passes = 4
//! parallel = false
//! ```

use crate::core::error::{ConfigError, ConfigResult};
use crate::filters::blur::DEFAULT_PASSES;
use serde::{Deserialize, Serialize};

/// Parameters of a fast blur.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlurConfig {
    /// Standard deviation of the approximated Gaussian.
    pub radius: f32,
    /// Box passes per axis. More passes approximate a Gaussian more closely.
    pub passes: u32,
    /// Blur rows on the rayon thread pool.
    pub parallel: bool,
}

impl Default for BlurConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            passes: DEFAULT_PASSES,
            parallel: true,
        }
    }
}

impl BlurConfig {
    /// Create a configuration with parallel row processing enabled.
    pub fn new(radius: f32, passes: u32) -> Self {
        Self {
            radius,
            passes,
            ..Self::default()
        }
    }

    /// Set the blur radius.
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Set the number of passes per axis.
    pub fn with_passes(mut self, passes: u32) -> Self {
        self.passes = passes;
        self
    }

    /// Enable or disable parallel row processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Check that the configuration can drive a blur.
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(ConfigError::Invalid {
                field: "radius".to_string(),
                reason: format!("must be positive and finite, got {}", self.radius),
            });
        }
        if self.passes == 0 {
            return Err(ConfigError::Invalid {
                field: "passes".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        log::debug!("Loaded blur config from TOML: {:?}", config);
        Ok(config)
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(source: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        log::debug!("Loaded blur config from JSON: {:?}", config);
        Ok(config)
    }

    /// Serialize to TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string(self)?)
    }
}
