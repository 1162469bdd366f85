//! Wall-clock `HH:MM` parsing and modular minute arithmetic.
//!
//! Times carry no date. Adding minutes past 23:59 wraps to 00:00, so a later
//! slot can show a clock time numerically before an earlier one.

use chrono::{Duration, NaiveTime, Timelike};

use crate::error::ValidationError;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Parse `H:MM` or `HH:MM` (24-hour).
///
/// Input longer than five bytes is rejected before any other work.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidValue`] for anything else, including
/// seconds, signs, whitespace and out-of-range fields.
pub fn parse_hhmm(input: &str) -> Result<NaiveTime, ValidationError> {
    let invalid = || {
        ValidationError::invalid(
            "wake_time",
            format!("'{}' is not a 24-hour HH:MM time", truncate_for_message(input)),
        )
    };

    if input.len() > 5 {
        return Err(invalid());
    }
    let (hour, minute) = input.split_once(':').ok_or_else(invalid)?;
    if hour.is_empty()
        || hour.len() > 2
        || minute.len() != 2
        || !hour.bytes().all(|b| b.is_ascii_digit())
        || !minute.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }

    let hour: u32 = hour.parse().map_err(|_| invalid())?;
    let minute: u32 = minute.parse().map_err(|_| invalid())?;
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)
}

/// Format as zero-padded `HH:MM`.
pub fn format_hhmm(time: NaiveTime) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

/// Add `minutes`, wrapping around midnight.
pub fn add_minutes(time: NaiveTime, minutes: u32) -> NaiveTime {
    let (wrapped, _) = time.overflowing_add_signed(Duration::minutes(i64::from(minutes % MINUTES_PER_DAY)));
    wrapped
}

fn truncate_for_message(input: &str) -> String {
    input.chars().take(16).collect()
}

/// Serde adapter storing a [`NaiveTime`] as `HH:MM`.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_hhmm(*time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_hhmm(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn parses_valid_times() {
        assert_eq!(parse_hhmm("06:30").unwrap(), t(6, 30));
        assert_eq!(parse_hhmm("6:05").unwrap(), t(6, 5));
        assert_eq!(parse_hhmm("00:00").unwrap(), t(0, 0));
        assert_eq!(parse_hhmm("23:59").unwrap(), t(23, 59));
    }

    #[test]
    fn rejects_malformed_times() {
        for bad in [
            "", ":", "24:00", "12:60", "12:5", "123:00", "12-30", "ab:cd", " 6:30", "6:30 ",
            "+6:30", "06:30:00", "12", "-1:30",
        ] {
            assert!(parse_hhmm(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn rejects_long_input_quickly() {
        let long = "1".repeat(1_000_000);
        let err = parse_hhmm(&long).unwrap_err();
        // message only echoes a prefix of the input
        assert!(err.to_string().len() < 100);
    }

    #[test]
    fn add_wraps_past_midnight() {
        assert_eq!(add_minutes(t(23, 30), 45), t(0, 15));
        assert_eq!(add_minutes(t(6, 30), 30), t(7, 0));
        assert_eq!(add_minutes(t(6, 30), MINUTES_PER_DAY), t(6, 30));
        assert_eq!(add_minutes(t(6, 30), u32::MAX), add_minutes(t(6, 30), u32::MAX % MINUTES_PER_DAY));
    }

    #[test]
    fn formats_zero_padded() {
        assert_eq!(format_hhmm(t(5, 7)), "05:07");
        assert_eq!(format_hhmm(t(23, 0)), "23:00");
    }
}
