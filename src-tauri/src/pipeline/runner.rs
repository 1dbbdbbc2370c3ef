// Pipeline runner
// Each stage runs to completion before the next; the first failure ends the run

use thiserror::Error;

use crate::analysis::{self, FeatureSet};
use crate::audio::{self, AudioError};
use crate::config::{ConfigError, PipelineConfig};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Audio(#[from] AudioError),
}

/// Result of one successful pipeline run
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Samples in the loaded (first-channel) signal
    pub sample_count: usize,

    /// Normalized feature pairs, possibly empty
    pub features: FeatureSet,
}

/// Run the full analysis for `config`
pub fn analyze(config: &PipelineConfig) -> Result<Analysis, PipelineError> {
    config.validate()?;

    let audio = audio::load_wav(&config.input_path)?;

    let smoothed = analysis::smooth_signal(&audio.samples, config.smoothing_interval);

    let mut features = analysis::extract_features(&smoothed, config.scan_start, config.scan_end);
    features.log_diagnostics("raw");

    features.normalize();
    features.log_diagnostics("normalized");

    if features.is_empty() {
        log::warn!("No feature pairs extracted, nothing to plot");
    } else {
        log::info!("Extracted {} feature pairs", features.len());
    }

    Ok(Analysis {
        sample_count: audio.samples.len(),
        features,
    })
}

/// Resolve the configuration from the environment, then analyze
pub fn load_and_analyze() -> Result<(PipelineConfig, Analysis), PipelineError> {
    let config = PipelineConfig::from_env()?;
    let analysis = analyze(&config)?;
    Ok((config, analysis))
}
