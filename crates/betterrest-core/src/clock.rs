//! Time-of-day arithmetic and formatting.
//!
//! Bedtimes are pure times of day. Subtracting a sleep duration from a wake
//! time may cross midnight into the previous day; callers only ever see a
//! valid clock reading.

use chrono::{Duration, NaiveTime, Timelike};

use crate::error::ValidationError;

/// Default wake time shown before the user touches anything (10:30).
pub fn default_wake_time() -> NaiveTime {
    NaiveTime::from_hms_opt(10, 30, 0).unwrap_or_default()
}

/// Seconds elapsed since midnight for a time of day.
pub fn seconds_since_midnight(time: NaiveTime) -> u32 {
    time.num_seconds_from_midnight()
}

/// Subtract a fractional number of hours from a time of day.
///
/// Wraps across midnight: rewinding 07:00 by 8.2 hours lands on 22:48 of
/// the previous day, returned as the plain time-of-day 22:48.
pub fn rewind_hours(time: NaiveTime, hours: f64) -> NaiveTime {
    let seconds = (hours * 3600.0).round() as i64;
    let (rewound, _days) = time.overflowing_sub_signed(Duration::seconds(seconds));
    rewound
}

/// Format a time of day as a 12-hour clock string, e.g. "10:48 PM".
///
/// Hour and minute only: no seconds, no date, no leading zero on the hour.
pub fn format_clock(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// Parse a CLI-supplied time of day.
///
/// Accepts 24-hour "HH:MM" and 12-hour "H:MM AM/PM" forms.
pub fn parse_clock(input: &str) -> Result<NaiveTime, ValidationError> {
    let trimmed = input.trim();
    for fmt in ["%H:%M", "%I:%M %p", "%I:%M%p"] {
        if let Ok(time) = NaiveTime::parse_from_str(trimmed, fmt) {
            return Ok(time);
        }
    }
    Err(ValidationError::InvalidTimeOfDay {
        input: input.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_seconds_since_midnight() {
        let seven = NaiveTime::from_hms_opt(7, 0, 0).unwrap();
        assert_eq!(seconds_since_midnight(seven), 7 * 3600);

        let half_past_six = NaiveTime::from_hms_opt(6, 30, 0).unwrap();
        assert_eq!(seconds_since_midnight(half_past_six), 6 * 3600 + 30 * 60);
    }

    #[test]
    fn test_rewind_within_same_day() {
        let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        assert_eq!(
            rewind_hours(noon, 2.5),
            NaiveTime::from_hms_opt(9, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_rewind_wraps_to_previous_day() {
        let seven = NaiveTime::from_hms_opt(7, 0, 0).unwrap();
        assert_eq!(
            rewind_hours(seven, 8.2),
            NaiveTime::from_hms_opt(22, 48, 0).unwrap()
        );
    }

    #[test]
    fn test_format_clock_no_leading_zero() {
        assert_eq!(
            format_clock(NaiveTime::from_hms_opt(22, 48, 0).unwrap()),
            "10:48 PM"
        );
        assert_eq!(
            format_clock(NaiveTime::from_hms_opt(21, 30, 0).unwrap()),
            "9:30 PM"
        );
        assert_eq!(
            format_clock(NaiveTime::from_hms_opt(0, 5, 0).unwrap()),
            "12:05 AM"
        );
    }

    #[test]
    fn test_parse_clock_formats() {
        let expected = NaiveTime::from_hms_opt(7, 0, 0).unwrap();
        assert_eq!(parse_clock("07:00").unwrap(), expected);
        assert_eq!(parse_clock("7:00 AM").unwrap(), expected);
        assert_eq!(parse_clock("07:00 am").unwrap(), expected);
        assert!(parse_clock("25:00").is_err());
        assert!(parse_clock("bedtime").is_err());
    }

    #[test]
    fn test_default_wake_time() {
        assert_eq!(default_wake_time(), NaiveTime::from_hms_opt(10, 30, 0).unwrap());
    }

    proptest! {
        // Rewinding by any plausible sleep duration always yields a valid
        // hour:minute rendering, even when the result crosses midnight.
        #[test]
        fn rewind_always_formats_to_valid_clock(
            secs in 0u32..86_400,
            hours in 0.0f64..24.0,
        ) {
            let time = NaiveTime::from_num_seconds_from_midnight_opt(secs, 0).unwrap();
            let bedtime = rewind_hours(time, hours);
            let formatted = format_clock(bedtime);

            let (clock, meridiem) = formatted.split_once(' ').unwrap();
            let (h, m) = clock.split_once(':').unwrap();
            let h: u32 = h.parse().unwrap();
            let m: u32 = m.parse().unwrap();
            prop_assert!((1..=12).contains(&h));
            prop_assert!(m < 60);
            prop_assert!(meridiem == "AM" || meridiem == "PM");
        }

        #[test]
        fn rewind_round_trips_modulo_day(
            secs in 0u32..86_400,
            quarter_hours in 0i64..96,
        ) {
            let time = NaiveTime::from_num_seconds_from_midnight_opt(secs, 0).unwrap();
            let hours = quarter_hours as f64 * 0.25;
            let rewound = rewind_hours(time, hours);
            let (restored, _) = rewound
                .overflowing_add_signed(Duration::seconds((hours * 3600.0) as i64));
            prop_assert_eq!(restored, time);
        }
    }
}
