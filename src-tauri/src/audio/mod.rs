// Audio processing module
// Handles WAV file loading and mono reduction

pub mod ingest;

pub use ingest::{load_wav, AudioData, AudioError};
