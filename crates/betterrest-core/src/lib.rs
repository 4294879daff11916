//! # BetterRest Core Library
//!
//! Core logic for the BetterRest bedtime recommender. It implements a
//! CLI-first philosophy: everything the application does is available from
//! this library, with the CLI binary being a thin layer over it.
//!
//! ## Architecture
//!
//! - **Estimator**: the bedtime-calculation contract -- wake time to seconds
//!   since midnight, one call into the predictive model, a wrapping
//!   subtraction, a clock-string rendering
//! - **Model**: the predictive function behind the [`SleepPredictor`] trait,
//!   shipped as a linear regression with a TOML weights artifact
//! - **Inputs**: range-validated form values; the estimator itself trusts
//!   its caller
//! - **Session**: recompute-on-change holder of the current inputs and the
//!   latest outcome
//! - **Storage**: TOML-based configuration of the default inputs and the
//!   model artifact path
//!
//! ## Key Components
//!
//! - [`BedtimeEstimator`]: the estimation contract
//! - [`RegressionModel`]: the shipped predictive model
//! - [`PlanSession`]: reactive input holder
//! - [`Config`]: application configuration management

pub mod clock;
pub mod error;
pub mod estimator;
pub mod inputs;
pub mod model;
pub mod session;
pub mod storage;

pub use error::{
    ConfigError, CoreError, EstimateError, ModelError, ValidationError,
    ESTIMATION_UNAVAILABLE_MESSAGE,
};
pub use estimator::{BedtimeEstimator, Recommendation};
pub use inputs::{CoffeeCount, SleepAmount, SleepPlan};
pub use model::{ModelWeights, Prediction, RegressionModel, SleepPredictor};
pub use session::{EstimationOutcome, PlanSession};
pub use storage::{Config, ModelConfig};
