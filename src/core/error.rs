// Error handling for the behavioral analysis core

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalysisError>;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Sample sequence is empty")]
    EmptySamples,

    #[error("Total duration must be positive, got {0}")]
    InvalidDuration(f64),

    #[error("Aggregation interval must be positive, got {0}")]
    InvalidInterval(f64),

    #[error("Empty chunk at index {0}")]
    EmptyChunk(usize),
}
