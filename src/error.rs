//! Error types shared by the whole crate
//!
//! Every fallible operation returns [`SorptionResult`]. All failures are
//! terminal for the run that triggered them: nothing is retried.

use thiserror::Error;

/// Errors raised while configuring, integrating or preprocessing
#[derive(Error, Debug)]
pub enum SorptionError {
    /// Invalid parameter value, time step or duration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A parameter required by the selected kinetic variant is absent
    #[error("Missing parameter '{parameter}' required by the {variant} model")]
    MissingParameter {
        variant: &'static str,
        parameter: &'static str,
    },

    /// Malformed row in a measured-data file (`line` is 1-based, header included)
    #[error("Parse error at line {line}: {message}")]
    Parse { line: u64, message: String },

    /// Not enough samples left in the experimental window to interpolate
    #[error("Insufficient data: {retained} sample(s) retained in the window, at least 2 required")]
    InsufficientData { retained: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SorptionResult<T> = Result<T, SorptionError>;
