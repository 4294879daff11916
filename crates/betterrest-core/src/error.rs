//! Core error types for betterrest-core.
//!
//! One thiserror enum per concern, unified under [`CoreError`] for callers
//! that do not care which layer failed.

use std::path::PathBuf;
use thiserror::Error;

/// Fixed user-facing message shown whenever the predictive model fails.
///
/// The raw model fault is never surfaced to the user; it stays available
/// as the error `source` for diagnostics.
pub const ESTIMATION_UNAVAILABLE_MESSAGE: &str =
    "Sorry, there was a problem with our calculations";

/// Core error type for betterrest-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Model loading or inference errors
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Estimation failures
    #[error("{0}")]
    Estimate(#[from] EstimateError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from the predictive model boundary.
#[derive(Error, Debug)]
pub enum ModelError {
    /// Failed to read a model weights artifact
    #[error("Failed to load model from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Artifact exists but is not valid TOML for [`crate::ModelWeights`]
    #[error("Failed to parse model weights: {0}")]
    ParseFailed(String),

    /// A weight is NaN or infinite
    #[error("Model weight '{name}' is not finite")]
    NonFiniteWeight { name: &'static str },

    /// The model produced a prediction that cannot be a sleep duration
    #[error("Model produced an unusable prediction: {value}")]
    UnusablePrediction { value: f64 },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown dot-path key in get/set
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Value cannot be parsed for the key's type
    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Home/config directory could not be resolved or created
    #[error("Failed to resolve configuration directory: {0}")]
    DirUnavailable(String),
}

/// Input-layer validation errors.
///
/// The estimator itself performs no range checks; these are raised by the
/// input types in [`crate::inputs`] and by CLI argument parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Value outside the permitted range
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Sleep amounts move in quarter-hour steps
    #[error("sleep amount must be a multiple of 0.25 hours, got {value}")]
    NotQuarterStep { value: f64 },

    /// Unparseable time-of-day string
    #[error("'{input}' is not a valid time of day (expected HH:MM or H:MM AM/PM)")]
    InvalidTimeOfDay { input: String },
}

/// The single estimator-boundary failure kind.
///
/// Displays as the fixed user-facing message regardless of the underlying
/// model fault.
#[derive(Error, Debug)]
pub enum EstimateError {
    #[error("{}", ESTIMATION_UNAVAILABLE_MESSAGE)]
    Unavailable {
        #[source]
        source: ModelError,
    },
}

impl EstimateError {
    /// The generic message suitable for direct display.
    pub fn user_message(&self) -> &'static str {
        ESTIMATION_UNAVAILABLE_MESSAGE
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_error_displays_fixed_message() {
        let err = EstimateError::Unavailable {
            source: ModelError::UnusablePrediction { value: f64::NAN },
        };
        assert_eq!(err.to_string(), ESTIMATION_UNAVAILABLE_MESSAGE);
        assert_eq!(err.user_message(), ESTIMATION_UNAVAILABLE_MESSAGE);
    }

    #[test]
    fn estimate_error_keeps_model_fault_as_source() {
        use std::error::Error;

        let err = EstimateError::Unavailable {
            source: ModelError::NonFiniteWeight { name: "coffee" },
        };
        let source = err.source().expect("source should be preserved");
        assert!(source.to_string().contains("coffee"));
    }
}
