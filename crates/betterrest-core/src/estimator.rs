//! Bedtime estimation.
//!
//! The one deterministic contract of the application: convert the wake time
//! to seconds since midnight, ask the predictive model how much sleep is
//! actually needed, and rewind the wake time by that amount.
//!
//! The estimator trusts its caller: range enforcement for sleep amount and
//! coffee count happens in the input layer (see [`crate::inputs`]). It has
//! no side effects -- no logging, no I/O, no retries.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::clock;
use crate::error::EstimateError;
use crate::inputs::SleepPlan;
use crate::model::SleepPredictor;

/// A successful estimation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Recommended bedtime, possibly on the previous day.
    pub bedtime: NaiveTime,
    /// Hour-and-minute clock rendering of the bedtime, e.g. "10:48 PM".
    pub formatted: String,
    /// The model's predicted required sleep, in hours.
    pub predicted_sleep_hours: f64,
}

/// Bedtime estimator over a pluggable predictive model.
#[derive(Debug, Clone)]
pub struct BedtimeEstimator<P: SleepPredictor> {
    predictor: P,
}

impl<P: SleepPredictor> BedtimeEstimator<P> {
    pub fn new(predictor: P) -> Self {
        Self { predictor }
    }

    /// Estimate the bedtime for a wake time, desired sleep and coffee intake.
    ///
    /// Any predictor failure is reported as [`EstimateError::Unavailable`],
    /// whose display is the fixed user-facing message; the raw fault is never
    /// surfaced.
    pub fn estimate(
        &self,
        wake: NaiveTime,
        sleep_amount_hours: f64,
        coffee_cups: u32,
    ) -> Result<Recommendation, EstimateError> {
        let wake_seconds = clock::seconds_since_midnight(wake) as f64;
        let prediction = self
            .predictor
            .predict(wake_seconds, sleep_amount_hours, coffee_cups as f64)
            .map_err(|source| EstimateError::Unavailable { source })?;

        let bedtime = clock::rewind_hours(wake, prediction.actual_sleep_hours);
        Ok(Recommendation {
            bedtime,
            formatted: clock::format_clock(bedtime),
            predicted_sleep_hours: prediction.actual_sleep_hours,
        })
    }

    /// Estimate from a validated [`SleepPlan`].
    pub fn estimate_plan(&self, plan: &SleepPlan) -> Result<Recommendation, EstimateError> {
        self.estimate(plan.wake, plan.sleep_amount.hours(), plan.coffee.cups())
    }

    pub fn into_predictor(self) -> P {
        self.predictor
    }
}
