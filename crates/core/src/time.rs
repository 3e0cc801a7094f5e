use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use thiserror::Error;

/// 24-hour clock text: hour 0-23 with an optional leading zero, two-digit minutes.
static TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(2[0-3]|[01]?[0-9]):([0-5][0-9])$").expect("time pattern is valid")
});

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    #[error("time must use the HH:MM format, got {raw:?}")]
    InvalidFormat { raw: String },
}

/// Returns true when `text` is a valid `HH:MM` time of day.
#[must_use]
pub fn validate_time(text: &str) -> bool {
    TIME_PATTERN.is_match(text)
}

/// Minutes elapsed from `start` to `end`, both given as `HH:MM` text.
///
/// An `end` that is not later than `start` is read as falling on the next day,
/// so equal times span a full 1440 minutes.
///
/// # Errors
///
/// Returns `TimeError::InvalidFormat` if either input fails [`validate_time`].
pub fn compute_duration(start: &str, end: &str) -> Result<u32, TimeError> {
    let start = TimeOfDay::parse(start)?;
    let end = TimeOfDay::parse(end)?;
    Ok(start.minutes_until(&end))
}

/// A validated time of day that remembers the exact text it was parsed from.
///
/// Ordering and equality follow the entered text, not the clock value:
/// `"9:00"` sorts after `"10:00"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimeOfDay {
    text: String,
    time: NaiveTime,
}

impl TimeOfDay {
    /// Parse `HH:MM` text.
    ///
    /// # Errors
    ///
    /// Returns `TimeError::InvalidFormat` when the text does not match the pattern.
    pub fn parse(text: &str) -> Result<Self, TimeError> {
        let invalid = || TimeError::InvalidFormat {
            raw: text.to_owned(),
        };
        let captures = TIME_PATTERN.captures(text).ok_or_else(invalid)?;
        let hour: u32 = captures[1].parse().map_err(|_| invalid())?;
        let minute: u32 = captures[2].parse().map_err(|_| invalid())?;
        let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)?;

        Ok(Self {
            text: text.to_owned(),
            time,
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whole minutes until `end`, rolling `end` over to the next day when it is
    /// not later than `self`.
    #[must_use]
    pub fn minutes_until(&self, end: &TimeOfDay) -> u32 {
        let start = self.on_reference_day();
        let mut end = end.on_reference_day();
        if end <= start {
            end += Duration::days(1);
        }
        // Bounded to 1..=1440 by construction.
        u32::try_from((end - start).num_minutes()).unwrap_or(0)
    }

    fn on_reference_day(&self) -> NaiveDateTime {
        NaiveDate::default().and_time(self.time)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl PartialOrd for TimeOfDay {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimeOfDay {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.cmp(&other.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_two_digit_and_single_digit_hours() {
        assert!(validate_time("09:00"));
        assert!(validate_time("9:00"));
        assert!(validate_time("0:05"));
        assert!(validate_time("23:59"));
    }

    #[test]
    fn rejects_out_of_range_and_malformed_text() {
        assert!(!validate_time("24:00"));
        assert!(!validate_time("12:60"));
        assert!(!validate_time("09:60"));
        assert!(!validate_time(""));
        assert!(!validate_time("9:5"));
        assert!(!validate_time("09:00 "));
        assert!(!validate_time("009:00"));
    }

    #[test]
    fn duration_within_one_day() {
        assert_eq!(compute_duration("09:00", "10:30"), Ok(90));
        assert_eq!(compute_duration("9:15", "9:45"), Ok(30));
    }

    #[test]
    fn duration_rolls_over_midnight() {
        assert_eq!(compute_duration("23:00", "01:00"), Ok(120));
        assert_eq!(compute_duration("23:59", "00:00"), Ok(1));
    }

    // Equal times are read as a full day. Kept as-is; intake never lets it through.
    #[test]
    fn equal_times_span_a_full_day() {
        assert_eq!(compute_duration("09:00", "09:00"), Ok(1440));
    }

    #[test]
    fn duration_rejects_invalid_input() {
        assert_eq!(
            compute_duration("24:00", "01:00"),
            Err(TimeError::InvalidFormat {
                raw: "24:00".to_string()
            })
        );
    }

    #[test]
    fn ordering_is_textual() {
        let nine = TimeOfDay::parse("9:00").unwrap();
        let ten = TimeOfDay::parse("10:00").unwrap();
        assert!(nine > ten);
        assert_eq!(nine.to_string(), "9:00");
        assert_eq!(nine.minutes_until(&ten), 60);
    }
}
