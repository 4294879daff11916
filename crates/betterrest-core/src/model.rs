//! Predictive model boundary.
//!
//! The estimator only sees [`SleepPredictor`]; the shipped implementation is
//! [`RegressionModel`], a linear model whose weights were exported from the
//! trained sleep regressor. Weights live in a small TOML artifact so a
//! retrained model can be dropped in without a rebuild.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ModelError;

/// Output of a prediction: the sleep the user actually needs, in hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub actual_sleep_hours: f64,
}

/// Opaque predictive function mapping (wake time, desired sleep, coffee)
/// to required sleep duration.
///
/// Implementations must be deterministic; the estimator performs no retries.
pub trait SleepPredictor {
    fn predict(
        &self,
        wake_seconds: f64,
        estimated_sleep_hours: f64,
        coffee_cups: f64,
    ) -> Result<Prediction, ModelError>;
}

/// Serializable regression weights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelWeights {
    /// Base sleep need in hours.
    pub intercept: f64,
    /// Per-second-of-wake-time contribution.
    pub wake: f64,
    /// Per-desired-hour contribution.
    pub estimated_sleep: f64,
    /// Per-cup contribution.
    pub coffee: f64,
}

impl Default for ModelWeights {
    fn default() -> Self {
        // Exported from the bundled pre-trained regressor.
        Self {
            intercept: 0.3491,
            wake: 0.0000124,
            estimated_sleep: 0.8872,
            coffee: 0.0793,
        }
    }
}

impl ModelWeights {
    fn check_finite(&self) -> Result<(), ModelError> {
        let named = [
            ("intercept", self.intercept),
            ("wake", self.wake),
            ("estimated_sleep", self.estimated_sleep),
            ("coffee", self.coffee),
        ];
        for (name, value) in named {
            if !value.is_finite() {
                return Err(ModelError::NonFiniteWeight { name });
            }
        }
        Ok(())
    }
}

/// Linear regression model over the three form inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionModel {
    weights: ModelWeights,
}

impl RegressionModel {
    /// Build from in-memory weights, rejecting non-finite values.
    pub fn from_weights(weights: ModelWeights) -> Result<Self, ModelError> {
        weights.check_finite()?;
        Ok(Self { weights })
    }

    /// Load a TOML weights artifact from disk.
    pub fn from_path(path: &Path) -> Result<Self, ModelError> {
        let content = std::fs::read_to_string(path).map_err(|e| ModelError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let weights: ModelWeights =
            toml::from_str(&content).map_err(|e| ModelError::ParseFailed(e.to_string()))?;
        Self::from_weights(weights)
    }

    /// The bundled pre-trained weights.
    pub fn bundled() -> Self {
        Self {
            weights: ModelWeights::default(),
        }
    }

    pub fn weights(&self) -> ModelWeights {
        self.weights
    }
}

impl SleepPredictor for RegressionModel {
    fn predict(
        &self,
        wake_seconds: f64,
        estimated_sleep_hours: f64,
        coffee_cups: f64,
    ) -> Result<Prediction, ModelError> {
        let w = &self.weights;
        let actual = w.intercept
            + w.wake * wake_seconds
            + w.estimated_sleep * estimated_sleep_hours
            + w.coffee * coffee_cups;

        if !actual.is_finite() || actual <= 0.0 {
            return Err(ModelError::UnusablePrediction { value: actual });
        }
        Ok(Prediction {
            actual_sleep_hours: actual,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn bundled_model_predicts_plausible_sleep() {
        let model = RegressionModel::bundled();
        let prediction = model.predict(7.0 * 3600.0, 8.0, 1.0).unwrap();
        // Around the desired eight hours, never wildly off.
        assert!(prediction.actual_sleep_hours > 6.0);
        assert!(prediction.actual_sleep_hours < 10.0);
    }

    #[test]
    fn more_coffee_means_more_sleep_needed() {
        let model = RegressionModel::bundled();
        let one = model.predict(25_200.0, 8.0, 1.0).unwrap();
        let ten = model.predict(25_200.0, 8.0, 10.0).unwrap();
        assert!(ten.actual_sleep_hours > one.actual_sleep_hours);
    }

    #[test]
    fn rejects_non_finite_weights() {
        let weights = ModelWeights {
            coffee: f64::INFINITY,
            ..ModelWeights::default()
        };
        assert!(matches!(
            RegressionModel::from_weights(weights),
            Err(ModelError::NonFiniteWeight { name: "coffee" })
        ));
    }

    #[test]
    fn load_from_toml_artifact() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "intercept = 1.0\nwake = 0.0\nestimated_sleep = 1.0\ncoffee = 0.1"
        )
        .unwrap();

        let model = RegressionModel::from_path(file.path()).unwrap();
        let prediction = model.predict(0.0, 8.0, 2.0).unwrap();
        assert!((prediction.actual_sleep_hours - 9.2).abs() < 1e-9);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = RegressionModel::from_path(Path::new("/nonexistent/weights.toml"))
            .unwrap_err();
        assert!(matches!(err, ModelError::LoadFailed { .. }));
    }

    #[test]
    fn load_reports_malformed_artifact() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "intercept = \"lots\"").unwrap();
        let err = RegressionModel::from_path(file.path()).unwrap_err();
        assert!(matches!(err, ModelError::ParseFailed(_)));
    }

    #[test]
    fn weights_round_trip_through_toml() {
        let weights = ModelWeights::default();
        let serialized = toml::to_string_pretty(&weights).unwrap();
        let parsed: ModelWeights = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed, weights);
    }
}
