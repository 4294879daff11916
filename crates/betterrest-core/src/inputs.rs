//! Input-layer domain types.
//!
//! Range enforcement lives here, at the edge where values enter, not in the
//! estimator. [`SleepAmount`] and [`CoffeeCount`] mirror the steppers of the
//! original form: clamped bounds, fixed increments.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::clock;
use crate::error::ValidationError;

/// Desired sleep duration in hours: 4.0 to 12.0 in 0.25 steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct SleepAmount(f64);

impl SleepAmount {
    pub const MIN_HOURS: f64 = 4.0;
    pub const MAX_HOURS: f64 = 12.0;
    pub const STEP_HOURS: f64 = 0.25;

    /// Validate a raw hours value.
    pub fn try_new(hours: f64) -> Result<Self, ValidationError> {
        if !hours.is_finite() || hours < Self::MIN_HOURS || hours > Self::MAX_HOURS {
            return Err(ValidationError::OutOfRange {
                field: "sleep amount",
                value: hours,
                min: Self::MIN_HOURS,
                max: Self::MAX_HOURS,
            });
        }
        let quarters = hours / Self::STEP_HOURS;
        if (quarters - quarters.round()).abs() > 1e-9 {
            return Err(ValidationError::NotQuarterStep { value: hours });
        }
        Ok(Self(hours))
    }

    pub fn hours(self) -> f64 {
        self.0
    }

    /// One stepper increment up, clamped at the maximum.
    pub fn step_up(self) -> Self {
        Self((self.0 + Self::STEP_HOURS).min(Self::MAX_HOURS))
    }

    /// One stepper increment down, clamped at the minimum.
    pub fn step_down(self) -> Self {
        Self((self.0 - Self::STEP_HOURS).max(Self::MIN_HOURS))
    }
}

impl Default for SleepAmount {
    fn default() -> Self {
        Self(8.0)
    }
}

impl TryFrom<f64> for SleepAmount {
    type Error = ValidationError;

    fn try_from(hours: f64) -> Result<Self, Self::Error> {
        Self::try_new(hours)
    }
}

impl From<SleepAmount> for f64 {
    fn from(amount: SleepAmount) -> f64 {
        amount.0
    }
}

/// Daily coffee intake in cups: 1 to 20.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct CoffeeCount(u32);

impl CoffeeCount {
    pub const MIN_CUPS: u32 = 1;
    pub const MAX_CUPS: u32 = 20;

    /// Validate a raw cup count.
    pub fn try_new(cups: u32) -> Result<Self, ValidationError> {
        if !(Self::MIN_CUPS..=Self::MAX_CUPS).contains(&cups) {
            return Err(ValidationError::OutOfRange {
                field: "coffee count",
                value: cups as f64,
                min: Self::MIN_CUPS as f64,
                max: Self::MAX_CUPS as f64,
            });
        }
        Ok(Self(cups))
    }

    pub fn cups(self) -> u32 {
        self.0
    }

    /// Stepper label: "1 cup" / "N cups".
    pub fn label(self) -> String {
        if self.0 == 1 {
            "1 cup".to_string()
        } else {
            format!("{} cups", self.0)
        }
    }

    pub fn step_up(self) -> Self {
        Self((self.0 + 1).min(Self::MAX_CUPS))
    }

    pub fn step_down(self) -> Self {
        Self(self.0.saturating_sub(1).max(Self::MIN_CUPS))
    }
}

impl Default for CoffeeCount {
    fn default() -> Self {
        Self(1)
    }
}

impl TryFrom<u32> for CoffeeCount {
    type Error = ValidationError;

    fn try_from(cups: u32) -> Result<Self, Self::Error> {
        Self::try_new(cups)
    }
}

impl From<CoffeeCount> for u32 {
    fn from(count: CoffeeCount) -> u32 {
        count.0
    }
}

/// The three current inputs of the form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SleepPlan {
    /// Desired wake time (next occurrence; no date semantics).
    pub wake: NaiveTime,
    pub sleep_amount: SleepAmount,
    pub coffee: CoffeeCount,
}

impl SleepPlan {
    pub fn new(wake: NaiveTime, sleep_amount: SleepAmount, coffee: CoffeeCount) -> Self {
        Self {
            wake,
            sleep_amount,
            coffee,
        }
    }
}

impl Default for SleepPlan {
    /// The original form's initial state: wake 10:30, 8 hours, 1 cup.
    fn default() -> Self {
        Self {
            wake: clock::default_wake_time(),
            sleep_amount: SleepAmount::default(),
            coffee: CoffeeCount::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sleep_amount_accepts_quarter_steps_in_range() {
        assert!(SleepAmount::try_new(4.0).is_ok());
        assert!(SleepAmount::try_new(8.25).is_ok());
        assert!(SleepAmount::try_new(12.0).is_ok());
    }

    #[test]
    fn sleep_amount_rejects_out_of_range() {
        assert!(SleepAmount::try_new(3.75).is_err());
        assert!(SleepAmount::try_new(12.25).is_err());
        assert!(SleepAmount::try_new(f64::NAN).is_err());
    }

    #[test]
    fn sleep_amount_rejects_off_step_values() {
        assert!(matches!(
            SleepAmount::try_new(8.1),
            Err(ValidationError::NotQuarterStep { .. })
        ));
    }

    #[test]
    fn sleep_amount_steps_clamp_at_bounds() {
        let max = SleepAmount::try_new(12.0).unwrap();
        assert_eq!(max.step_up().hours(), 12.0);

        let min = SleepAmount::try_new(4.0).unwrap();
        assert_eq!(min.step_down().hours(), 4.0);

        let mid = SleepAmount::default();
        assert_eq!(mid.step_up().hours(), 8.25);
        assert_eq!(mid.step_down().hours(), 7.75);
    }

    #[test]
    fn coffee_count_bounds() {
        assert!(CoffeeCount::try_new(0).is_err());
        assert!(CoffeeCount::try_new(1).is_ok());
        assert!(CoffeeCount::try_new(20).is_ok());
        assert!(CoffeeCount::try_new(21).is_err());
    }

    #[test]
    fn coffee_count_label_pluralizes() {
        assert_eq!(CoffeeCount::try_new(1).unwrap().label(), "1 cup");
        assert_eq!(CoffeeCount::try_new(3).unwrap().label(), "3 cups");
    }

    #[test]
    fn coffee_count_steps_clamp_at_bounds() {
        let max = CoffeeCount::try_new(20).unwrap();
        assert_eq!(max.step_up().cups(), 20);

        let min = CoffeeCount::try_new(1).unwrap();
        assert_eq!(min.step_down().cups(), 1);
    }

    #[test]
    fn serde_round_trip_validates() {
        let amount: SleepAmount = serde_json::from_str("7.5").unwrap();
        assert_eq!(amount.hours(), 7.5);
        assert!(serde_json::from_str::<SleepAmount>("2.0").is_err());

        let cups: CoffeeCount = serde_json::from_str("4").unwrap();
        assert_eq!(cups.cups(), 4);
        assert!(serde_json::from_str::<CoffeeCount>("30").is_err());
    }

    #[test]
    fn default_plan_matches_form_initial_state() {
        let plan = SleepPlan::default();
        assert_eq!(plan.wake, NaiveTime::from_hms_opt(10, 30, 0).unwrap());
        assert_eq!(plan.sleep_amount.hours(), 8.0);
        assert_eq!(plan.coffee.cups(), 1);
    }
}
