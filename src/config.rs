//! Editor session configuration.
//!
//! `EditorConfig` holds the values a session starts from. It is read from
//! TOML; every field is optional and falls back to [`EditorConfig::default`].
//!
//! ```toml
//! degree = 4
//! uniform = false
//! sampling_step = 0.02
//! handle_size = 8.0
//! seed_points = [[100.0, 100.0], [200.0, 150.0]]
//! ```

use crate::curves::{Degree, DEFAULT_SAMPLING_STEP};
use crate::error::EditorError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Half-size of the square grab handle around each control point.
pub const DEFAULT_HANDLE_SIZE: f64 = 10.0;

/// Control points a fresh session starts with, around the centre of a
/// 600 x 500 canvas.
pub const DEFAULT_SEED_POINTS: [[f64; 2]; 3] = [[250.0, 200.0], [320.0, 200.0], [370.0, 300.0]];

/// Initial state and tuning for a [`SplineEditor`](crate::SplineEditor).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Spline degree (2 to 6).
    pub degree: Degree,
    /// Uniform knot spacing when true, clamped otherwise.
    pub uniform: bool,
    /// Parametric increment between curve samples.
    pub sampling_step: f64,
    /// Half-size of the hit-test square around a control point.
    pub handle_size: f64,
    /// Control points added when the session is created.
    pub seed_points: Vec<[f64; 2]>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            degree: Degree::default(),
            uniform: true,
            sampling_step: DEFAULT_SAMPLING_STEP,
            handle_size: DEFAULT_HANDLE_SIZE,
            seed_points: DEFAULT_SEED_POINTS.to_vec(),
        }
    }
}

impl EditorConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, EditorError> {
        let config: Self =
            toml::from_str(content).map_err(|e| EditorError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String, EditorError> {
        toml::to_string_pretty(self).map_err(|e| EditorError::InvalidConfig(e.to_string()))
    }

    /// Reads and parses a configuration file.
    pub fn load(path: &Path) -> Result<Self, EditorError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| EditorError::InvalidConfig(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_toml_str(&content)?;
        log::info!("Loaded editor config from {}", path.display());
        Ok(config)
    }

    /// Reads a configuration file, falling back to defaults on any error.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Using default editor config: {}", e);
                Self::default()
            }
        }
    }

    /// Checks values that the type system does not constrain.
    pub fn validate(&self) -> Result<(), EditorError> {
        if !(self.sampling_step.is_finite() && self.sampling_step > 0.0) {
            return Err(EditorError::InvalidSamplingStep);
        }
        if !(self.handle_size.is_finite() && self.handle_size >= 0.0) {
            return Err(EditorError::InvalidConfig(format!(
                "handle_size must be a non-negative number, got {}",
                self.handle_size
            )));
        }
        if let Some(p) = self.seed_points.iter().find(|p| !p.iter().all(|c| c.is_finite())) {
            return Err(EditorError::InvalidConfig(format!(
                "seed point {:?} is not finite",
                p
            )));
        }
        Ok(())
    }
}
