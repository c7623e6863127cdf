//! Error types for the beam diagram engine

use thiserror::Error;

/// Main error type for diagram operations
#[derive(Error, Debug)]
pub enum DiagramError {
    #[error("Sample count must be at least 2, got {0}")]
    TooFewSamples(usize),

    #[error("Polynomial load requires at least one coefficient")]
    EmptyCoefficients,

    #[error("Load extent is inverted: lower edge {lower} > upper edge {upper}")]
    InvertedExtent { lower: f64, upper: f64 },

    #[error("Step duration must be positive, got {0}")]
    InvalidStepDuration(f64),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for diagram operations
pub type DiagramResult<T> = Result<T, DiagramError>;
