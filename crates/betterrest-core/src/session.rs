//! Recompute-on-change plan session.
//!
//! The GUI original re-derived the bedtime whenever any form field changed.
//! [`PlanSession`] is that pattern without the GUI: a caller-driven holder of
//! the three inputs plus the last outcome. Every mutation re-invokes the
//! estimator and overwrites the stored outcome, so there is only ever one
//! result and no reconciliation to do. No internal threads.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::estimator::{BedtimeEstimator, Recommendation};
use crate::inputs::{CoffeeCount, SleepAmount, SleepPlan};
use crate::model::SleepPredictor;

/// The current display value: a recommendation or the fixed error message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum EstimationOutcome {
    Ready(Recommendation),
    Unavailable { message: String },
}

impl EstimationOutcome {
    /// Text suitable for direct display.
    pub fn display_text(&self) -> String {
        match self {
            EstimationOutcome::Ready(rec) => {
                format!("Your ideal bedtime is {}", rec.formatted)
            }
            EstimationOutcome::Unavailable { message } => message.clone(),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, EstimationOutcome::Ready(_))
    }
}

/// Session over a plan: mutate inputs, read the latest outcome.
#[derive(Debug, Clone)]
pub struct PlanSession<P: SleepPredictor> {
    estimator: BedtimeEstimator<P>,
    plan: SleepPlan,
    outcome: EstimationOutcome,
}

impl<P: SleepPredictor> PlanSession<P> {
    /// Start a session with the given inputs and compute the initial outcome.
    pub fn new(predictor: P, plan: SleepPlan) -> Self {
        let estimator = BedtimeEstimator::new(predictor);
        let outcome = Self::compute(&estimator, &plan);
        Self {
            estimator,
            plan,
            outcome,
        }
    }

    /// Start a session from the form's default inputs.
    pub fn with_defaults(predictor: P) -> Self {
        Self::new(predictor, SleepPlan::default())
    }

    fn compute(estimator: &BedtimeEstimator<P>, plan: &SleepPlan) -> EstimationOutcome {
        match estimator.estimate_plan(plan) {
            Ok(rec) => EstimationOutcome::Ready(rec),
            Err(err) => EstimationOutcome::Unavailable {
                message: err.user_message().to_string(),
            },
        }
    }

    fn recompute(&mut self) {
        self.outcome = Self::compute(&self.estimator, &self.plan);
    }

    pub fn plan(&self) -> &SleepPlan {
        &self.plan
    }

    /// The latest outcome; replaced on every input change.
    pub fn outcome(&self) -> &EstimationOutcome {
        &self.outcome
    }

    /// The latest recommendation, if estimation succeeded.
    pub fn recommendation(&self) -> Option<&Recommendation> {
        match &self.outcome {
            EstimationOutcome::Ready(rec) => Some(rec),
            EstimationOutcome::Unavailable { .. } => None,
        }
    }

    pub fn set_wake(&mut self, wake: NaiveTime) {
        self.plan.wake = wake;
        self.recompute();
    }

    pub fn set_sleep_amount(&mut self, sleep_amount: SleepAmount) {
        self.plan.sleep_amount = sleep_amount;
        self.recompute();
    }

    pub fn set_coffee(&mut self, coffee: CoffeeCount) {
        self.plan.coffee = coffee;
        self.recompute();
    }

    pub fn step_sleep_up(&mut self) {
        self.plan.sleep_amount = self.plan.sleep_amount.step_up();
        self.recompute();
    }

    pub fn step_sleep_down(&mut self) {
        self.plan.sleep_amount = self.plan.sleep_amount.step_down();
        self.recompute();
    }

    pub fn step_coffee_up(&mut self) {
        self.plan.coffee = self.plan.coffee.step_up();
        self.recompute();
    }

    pub fn step_coffee_down(&mut self) {
        self.plan.coffee = self.plan.coffee.step_down();
        self.recompute();
    }
}
