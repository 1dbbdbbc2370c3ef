// Signal analysis module
// Smoothing and difference-feature extraction over the loaded samples

pub mod features;
pub mod smoothing;

pub use features::{extract_features, FeaturePair, FeatureSet};
pub use smoothing::smooth_signal;
