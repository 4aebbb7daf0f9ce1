//! 12-hour clock values used by the availability picker
//!
//! Times travel through the form as `"hh:mm AM"` strings; [`TimeOfDay`]
//! parses them into a `chrono::NaiveTime` so two times can be compared.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Minutes offered by the picker
pub const PICKER_MINUTES: [&str; 4] = ["00", "15", "30", "45"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeParseError {
    #[error("time is empty")]
    Empty,
    #[error("missing AM/PM in '{0}'")]
    MissingMeridiem(String),
    #[error("'{0}' is not AM or PM")]
    BadMeridiem(String),
    #[error("hour '{0}' is outside 1..=12")]
    BadHour(String),
    #[error("minute '{0}' is outside 0..=59")]
    BadMinute(String),
    #[error("malformed time '{0}'")]
    Malformed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Meridiem {
    #[serde(rename = "AM")]
    Am,
    #[serde(rename = "PM")]
    Pm,
}

impl Meridiem {
    pub fn as_str(&self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }

    pub fn all() -> [Meridiem; 2] {
        [Meridiem::Am, Meridiem::Pm]
    }
}

impl FromStr for Meridiem {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "AM" => Ok(Meridiem::Am),
            "PM" => Ok(Meridiem::Pm),
            _ => Err(TimeParseError::BadMeridiem(s.to_string())),
        }
    }
}

/// A wall-clock time, ordered from midnight
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Parse `"hh:mm AM"` / `"h:mm pm"`.
    ///
    /// `12 AM` is midnight and `12 PM` is noon.
    pub fn parse(input: &str) -> Result<Self, TimeParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(TimeParseError::Empty);
        }

        let mut parts = trimmed.split_whitespace();
        let clock = parts
            .next()
            .ok_or_else(|| TimeParseError::Malformed(trimmed.to_string()))?;
        let meridiem: Meridiem = parts
            .next()
            .ok_or_else(|| TimeParseError::MissingMeridiem(trimmed.to_string()))?
            .parse()?;
        if parts.next().is_some() {
            return Err(TimeParseError::Malformed(trimmed.to_string()));
        }

        let (hour_str, minute_str) = clock
            .split_once(':')
            .ok_or_else(|| TimeParseError::Malformed(trimmed.to_string()))?;

        let hour = digits(hour_str, 1..=2)
            .filter(|h| (1..=12).contains(h))
            .ok_or_else(|| TimeParseError::BadHour(hour_str.to_string()))?;
        let minute = digits(minute_str, 2..=2)
            .filter(|m| *m < 60)
            .ok_or_else(|| TimeParseError::BadMinute(minute_str.to_string()))?;

        Self::from_clock(hour, minute, meridiem)
    }

    /// Build from 12-hour clock parts
    pub fn from_clock(hour: u32, minute: u32, meridiem: Meridiem) -> Result<Self, TimeParseError> {
        let hour24 = match (meridiem, hour) {
            (Meridiem::Am, 12) => 0,
            (Meridiem::Am, h) => h,
            (Meridiem::Pm, 12) => 12,
            (Meridiem::Pm, h) => h + 12,
        };
        NaiveTime::from_hms_opt(hour24, minute, 0)
            .map(TimeOfDay)
            .ok_or_else(|| TimeParseError::Malformed(format!("{}:{:02} {}", hour, minute, meridiem.as_str())))
    }

    pub fn minutes_since_midnight(&self) -> u32 {
        self.0.hour() * 60 + self.0.minute()
    }

    /// Hour on the 12-hour dial (1..=12)
    pub fn hour12(&self) -> u32 {
        self.0.hour12().1
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn meridiem(&self) -> Meridiem {
        if self.0.hour12().0 {
            Meridiem::Pm
        } else {
            Meridiem::Am
        }
    }

    /// Format back to `"hh:mm AM"`
    pub fn format(&self) -> String {
        format!("{:02}:{:02} {}", self.hour12(), self.minute(), self.meridiem().as_str())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeOfDay::parse(s)
    }
}

/// Plain ASCII digits of an allowed length; signs and other forms `u32`
/// would accept are rejected
fn digits(s: &str, len: std::ops::RangeInclusive<usize>) -> Option<u32> {
    if !len.contains(&s.len()) || !s.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Hours offered by the picker: "01" ..= "12"
pub fn picker_hours() -> Vec<String> {
    (1..=12).map(|h| format!("{:02}", h)).collect()
}

/// Compose picker selections into the form's string representation
pub fn compose_time(hour: &str, minute: &str, meridiem: Meridiem) -> String {
    format!("{}:{} {}", hour, minute, meridiem.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tod(s: &str) -> TimeOfDay {
        TimeOfDay::parse(s).unwrap()
    }

    #[test]
    fn test_parse_and_format() {
        assert_eq!(tod("09:00 AM").format(), "09:00 AM");
        assert_eq!(tod("5:30 pm").format(), "05:30 PM");
        assert_eq!(tod("  12:15 AM ").minutes_since_midnight(), 15);
        assert_eq!(tod("12:00 PM").minutes_since_midnight(), 12 * 60);
        assert_eq!(tod("11:45 PM").minutes_since_midnight(), 23 * 60 + 45);
    }

    #[test]
    fn test_ordering_around_noon_and_midnight() {
        assert!(tod("12:00 AM") < tod("12:30 AM"));
        assert!(tod("12:30 AM") < tod("11:59 AM"));
        assert!(tod("11:59 AM") < tod("12:00 PM"));
        assert!(tod("12:00 PM") < tod("01:00 PM"));
        assert!(tod("09:00 AM") < tod("05:00 PM"));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(TimeOfDay::parse(""), Err(TimeParseError::Empty));
        assert!(matches!(
            TimeOfDay::parse("09:00"),
            Err(TimeParseError::MissingMeridiem(_))
        ));
        assert!(matches!(
            TimeOfDay::parse("09:00 XM"),
            Err(TimeParseError::BadMeridiem(_))
        ));
        assert!(matches!(
            TimeOfDay::parse("13:00 PM"),
            Err(TimeParseError::BadHour(_))
        ));
        assert!(matches!(
            TimeOfDay::parse("00:10 AM"),
            Err(TimeParseError::BadHour(_))
        ));
        assert!(matches!(
            TimeOfDay::parse("09:60 AM"),
            Err(TimeParseError::BadMinute(_))
        ));
        assert!(matches!(
            TimeOfDay::parse("0900 AM"),
            Err(TimeParseError::Malformed(_))
        ));
    }

    #[test]
    fn test_parse_rejects_loose_digits() {
        for input in ["+9:00 AM", "009:00 AM", " 9 :00 AM"] {
            assert!(TimeOfDay::parse(input).is_err(), "{input} should not parse");
        }
        assert!(matches!(
            TimeOfDay::parse("09:+5 AM"),
            Err(TimeParseError::BadMinute(_))
        ));
        assert!(matches!(
            TimeOfDay::parse("9:5 AM"),
            Err(TimeParseError::BadMinute(_))
        ));
        assert!(matches!(
            TimeOfDay::parse("09:005 AM"),
            Err(TimeParseError::BadMinute(_))
        ));
        assert!(matches!(
            TimeOfDay::parse("+9:00 AM"),
            Err(TimeParseError::BadHour(_))
        ));
        assert_eq!(tod("9:05 AM").format(), "09:05 AM");
    }

    #[test]
    fn test_picker_helpers() {
        let hours = picker_hours();
        assert_eq!(hours.len(), 12);
        assert_eq!(hours.first().map(String::as_str), Some("01"));
        assert_eq!(hours.last().map(String::as_str), Some("12"));
        assert_eq!(compose_time("07", "45", Meridiem::Pm), "07:45 PM");
        assert_eq!(tod(&compose_time("07", "45", Meridiem::Pm)).minutes_since_midnight(), 19 * 60 + 45);
    }

    #[test]
    fn test_clock_parts() {
        let t = tod("12:30 AM");
        assert_eq!(t.hour12(), 12);
        assert_eq!(t.minute(), 30);
        assert_eq!(t.meridiem(), Meridiem::Am);
        assert_eq!(tod("12:05 PM").meridiem(), Meridiem::Pm);
    }
}
