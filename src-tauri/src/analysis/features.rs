// Difference-feature extraction
// Scans the smoothed signal in 3-sample strides and normalizes the two channels

use serde::{Deserialize, Serialize};

/// Samples consumed per feature pair
pub const STRIDE: usize = 3;

/// Pairs reported by `log_diagnostics`
const DIAGNOSTIC_PAIRS: usize = 10;

/// Two consecutive absolute first-differences within one stride
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeaturePair {
    /// |signal[i + 1] - signal[i]|
    pub v1: f32,

    /// |signal[i + 2] - signal[i + 1]|
    pub v2: f32,
}

/// Ordered feature pairs from one scan window
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureSet {
    pub pairs: Vec<FeaturePair>,
}

impl FeatureSet {
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Largest v1 and v2 across the set, (0, 0) when empty
    pub fn maxima(&self) -> (f32, f32) {
        self.pairs.iter().fold((0.0f32, 0.0f32), |(m1, m2), p| {
            (m1.max(p.v1), m2.max(p.v2))
        })
    }

    /// Divide each channel by its maximum so both peak at 1
    /// A zero maximum is replaced by 1, leaving that channel at zero
    pub fn normalize(&mut self) {
        if self.pairs.is_empty() {
            return;
        }

        let (max_v1, max_v2) = self.maxima();
        let max_v1 = if max_v1 == 0.0 { 1.0 } else { max_v1 };
        let max_v2 = if max_v2 == 0.0 { 1.0 } else { max_v2 };

        for pair in &mut self.pairs {
            pair.v1 /= max_v1;
            pair.v2 /= max_v2;
        }
    }

    /// Log the first few pairs at debug level
    pub fn log_diagnostics(&self, label: &str) {
        for (index, pair) in self.pairs.iter().take(DIAGNOSTIC_PAIRS).enumerate() {
            log::debug!("{} pair {}: v1={:.6}, v2={:.6}", label, index, pair.v1, pair.v2);
        }
    }
}

/// Extract raw (unnormalized) feature pairs from `signal[start..end]`
///
/// Strides start at `start, start + 3, ...` while a full stride fits before
/// `end`. `end` is clamped to the signal length; a window shorter than one
/// stride produces an empty set.
pub fn extract_features(signal: &[f32], start: usize, end: usize) -> FeatureSet {
    let end = if end > signal.len() {
        log::warn!(
            "Scan window end {} exceeds signal length {}, clamping",
            end,
            signal.len()
        );
        signal.len()
    } else {
        end
    };

    if start >= end || end - start < STRIDE {
        log::warn!("Scan window [{}, {}) holds no full stride", start, end);
        return FeatureSet::default();
    }

    let pairs = signal[start..end]
        .chunks_exact(STRIDE)
        .map(|s| FeaturePair {
            v1: (s[1] - s[0]).abs(),
            v2: (s[2] - s[1]).abs(),
        })
        .collect();

    log::info!("Feature extraction complete");

    FeatureSet { pairs }
}
