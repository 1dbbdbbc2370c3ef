// Pipeline configuration
// Replaces the hardcoded entry-point constants with one explicit structure

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::render::RenderSettings;

/// Environment variable naming an optional JSON configuration file
pub const CONFIG_ENV_VAR: &str = "VOWEL_TRIANGLE_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Parameters for one load → smooth → extract → render run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PipelineConfig {
    /// WAV file to analyze
    pub input_path: PathBuf,

    /// Width of the centered moving-average window in samples
    pub smoothing_interval: usize,

    /// First sample index of the scan window (inclusive)
    pub scan_start: usize,

    /// Last sample index of the scan window (exclusive)
    pub scan_end: usize,

    /// Pixels per unit of normalized v1
    pub render_scale_x: f32,

    /// Pixels per unit of normalized v2
    pub render_scale_y: f32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            input_path: PathBuf::from("sukunas-ryoiki-tenkai.wav"),
            smoothing_interval: 5,
            scan_start: 200,
            scan_end: 700,
            render_scale_x: 300.0,
            render_scale_y: 300.0,
        }
    }
}

impl PipelineConfig {
    /// Read a (possibly partial) JSON config; missing keys keep their defaults
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: PipelineConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the file named by `VOWEL_TRIANGLE_CONFIG`, or use defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                log::info!("Loading configuration from {}", Path::new(&path).display());
                Self::from_json_file(Path::new(&path))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, scale) in [
            ("renderScaleX", self.render_scale_x),
            ("renderScaleY", self.render_scale_y),
        ] {
            if !scale.is_finite() || scale <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{} must be a positive number, got {}",
                    name, scale
                )));
            }
        }

        if self.scan_start > self.scan_end {
            return Err(ConfigError::Invalid(format!(
                "scanStart ({}) must not exceed scanEnd ({})",
                self.scan_start, self.scan_end
            )));
        }

        Ok(())
    }

    /// Same numeric parameters, different input file
    pub fn with_input_path(&self, input_path: impl Into<PathBuf>) -> Self {
        PipelineConfig {
            input_path: input_path.into(),
            ..self.clone()
        }
    }

    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            scale_x: self.render_scale_x,
            scale_y: self.render_scale_y,
            ..RenderSettings::default()
        }
    }
}
