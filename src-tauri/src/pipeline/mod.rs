// Pipeline execution module
// Runs load -> smooth -> extract -> normalize as one linear pass

pub mod runner;

pub use runner::{analyze, load_and_analyze, Analysis, PipelineError};
