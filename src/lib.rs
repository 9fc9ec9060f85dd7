mod config;
mod consts;
mod duration;
mod format;
mod grid;
mod picker;
mod prelude;
mod range;
mod time;
mod types;

pub use config::{PickerConfig, Size, Theme, Variant};
pub use consts::*;
pub use duration::format_duration;
pub use format::{
    FormattedDate, OutputFormat, end_of_day_utc, format_date, instant, parse_display,
    start_of_day_utc, to_display, to_simple,
};
pub use grid::{CalendarCell, YearMonth};
pub use picker::{DatePickerState, InputError};
pub use range::{
    DateRangeOutput, DateRangeSelection, DateTimeOutput, DateTimeRangeOutput,
    DateTimeRangeSelection, DateTimeSelection, is_disabled, validate_date_range,
    validate_date_time_range,
};
pub use time::{
    ClockFormat, ClockParts, Period, SelectorColumn, TimeError, TimeOfDay, TimePickerState,
    TimeSelect, TimeStep, selector_column,
};
pub use types::{Day, Month, Year, days_in_month, is_leap_year};

use crate::prelude::*;
use std::str::FromStr;
use types::{civil_day_number, weekday};

/// A fully-specified Gregorian calendar date at day granularity.
/// Valid by construction (no invalid day-of-month can exist), ordered
/// lexicographically on (year, month, day), and displayed as the canonical
/// `YYYY-MM-DD` string that all other representations derive from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year: Year,
    month: Month,
    day: Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CalendarDate {
    /// Creates a date from raw components, validating each in turn.
    ///
    /// # Errors
    /// Returns the matching `ParseError` variant for the first invalid
    /// component (year, then month, then day-of-month).
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year_t = Year::new(year)?;
        let month_t = Month::new(month)?;
        let day_t = Day::new(day, year, month)?;
        Ok(Self {
            year: year_t,
            month: month_t,
            day: day_t,
        })
    }

    /// Creates a date from already-validated components
    pub const fn from_parts(year: Year, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    /// Returns the year component
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month component (1-based)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day-of-month component
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// The year-month this date falls in, used as the grid cursor.
    pub const fn year_month(&self) -> YearMonth {
        YearMonth::from_parts(self.year, self.month)
    }

    /// The next calendar day, rolling over month and year boundaries.
    /// Returns `None` past 9999-12-31.
    pub fn succ(&self) -> Option<Self> {
        let (y, m, d) = (self.year(), self.month(), self.day());
        if d < days_in_month(y, m) {
            Self::new(y, m, d + 1).ok()
        } else if m < DECEMBER {
            Self::new(y, m + 1, MIN_DAY).ok()
        } else if y < MAX_YEAR {
            Self::new(y + 1, JANUARY, MIN_DAY).ok()
        } else {
            None
        }
    }

    /// The previous calendar day, rolling back month and year boundaries.
    /// Returns `None` before 0001-01-01.
    pub fn pred(&self) -> Option<Self> {
        let (y, m, d) = (self.year(), self.month(), self.day());
        if d > MIN_DAY {
            Self::new(y, m, d - 1).ok()
        } else if m > JANUARY {
            Self::new(y, m - 1, days_in_month(y, m - 1)).ok()
        } else if y > 1 {
            Self::new(y - 1, DECEMBER, days_in_month(y - 1, DECEMBER)).ok()
        } else {
            None
        }
    }

    /// Days since 1970-01-01 (negative for earlier dates)
    pub(crate) const fn civil_day(&self) -> i64 {
        civil_day_number(self.year(), self.month(), self.day())
    }

    /// Weekday of this date, 0 = Sunday .. 6 = Saturday
    pub(crate) const fn weekday(&self) -> u8 {
        weekday(self.year(), self.month(), self.day())
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    /// Parses the canonical `YYYY-MM-DD` form. Display-formatted text typed
    /// into an input field goes through `parse_display` instead.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(CANONICAL_SEPARATOR).map(|p| p.trim()).collect();
        if parts.len() != 3 {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()));
        }

        let year = parse_u16(parts[0])?;
        let month = parse_u8(parts[1])?;
        let day = parse_u8(parts[2])?;
        Self::new(year, month, day)
    }
}

/// Helper to parse u16 with better error messages
pub(crate) fn parse_u16(s: &str) -> Result<u16, ParseError> {
    s.parse::<u16>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

/// Helper to parse u8 with better error messages
pub(crate) fn parse_u8(s: &str) -> Result<u8, ParseError> {
    s.parse::<u8>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use crate::{CalendarDate, time::TimeOfDay};

    pub fn date(year: u16, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    pub fn time(hour: u8, minute: u8, second: u8) -> TimeOfDay {
        TimeOfDay::new(hour, minute, second).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_new_valid() {
        let d = CalendarDate::new(2025, 6, 10).unwrap();
        assert_eq!(d.year(), 2025);
        assert_eq!(d.month(), 6);
        assert_eq!(d.day(), 10);
    }

    #[test]
    fn test_new_rejects_invalid_components() {
        assert!(matches!(
            CalendarDate::new(0, 1, 1),
            Err(ParseError::InvalidYear(0))
        ));
        assert!(matches!(
            CalendarDate::new(2024, 13, 1),
            Err(ParseError::InvalidMonth(13))
        ));
        assert!(matches!(
            CalendarDate::new(2024, 2, 30),
            Err(ParseError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_leap_day_construction() {
        assert!(CalendarDate::new(2024, 2, 29).is_ok());
        assert!(CalendarDate::new(2023, 2, 29).is_err());
        assert!(CalendarDate::new(1900, 2, 29).is_err());
        assert!(CalendarDate::new(2000, 2, 29).is_ok());
    }

    #[test]
    fn test_display_zero_pads() {
        assert_eq!(date(2025, 3, 5).to_string(), "2025-03-05");
        assert_eq!(date(476, 1, 1).to_string(), "0476-01-01");
    }

    #[test]
    fn test_parse_canonical() {
        let d = "2025-06-10".parse::<CalendarDate>().unwrap();
        assert_eq!(d, date(2025, 6, 10));
    }

    #[test]
    fn test_parse_canonical_with_whitespace() {
        let d = " 2025-06-10 ".parse::<CalendarDate>().unwrap();
        assert_eq!(d, date(2025, 6, 10));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            "".parse::<CalendarDate>(),
            Err(ParseError::EmptyInput)
        ));
        assert!(matches!(
            "2025-06".parse::<CalendarDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2025-06-10-07".parse::<CalendarDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2025-XX-10".parse::<CalendarDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2025-02-30".parse::<CalendarDate>(),
            Err(ParseError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_ordering_is_day_granularity() {
        assert!(date(2025, 6, 10) < date(2025, 6, 11));
        assert!(date(2025, 6, 30) < date(2025, 7, 1));
        assert!(date(1999, 12, 31) < date(2000, 1, 1));
        assert_eq!(date(2025, 6, 10), date(2025, 6, 10));
    }

    #[test]
    fn test_succ_rollover() {
        assert_eq!(date(2024, 2, 28).succ(), Some(date(2024, 2, 29)));
        assert_eq!(date(2023, 2, 28).succ(), Some(date(2023, 3, 1)));
        assert_eq!(date(2025, 12, 31).succ(), Some(date(2026, 1, 1)));
        assert_eq!(date(9999, 12, 31).succ(), None);
    }

    #[test]
    fn test_pred_rollover() {
        assert_eq!(date(2024, 3, 1).pred(), Some(date(2024, 2, 29)));
        assert_eq!(date(2025, 1, 1).pred(), Some(date(2024, 12, 31)));
        assert_eq!(date(1, 1, 1).pred(), None);
    }

    #[test]
    fn test_succ_pred_inverse() {
        let d = date(2025, 6, 10);
        assert_eq!(d.succ().and_then(|n| n.pred()), Some(d));
    }

    #[test]
    fn test_serde_string_format() {
        let d = date(2025, 6, 10);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#""2025-06-10""#);

        let parsed: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(d, parsed);
    }

    #[test]
    fn test_serde_rejects_invalid() {
        assert!(serde_json::from_str::<CalendarDate>(r#""2024-02-30""#).is_err());
        assert!(serde_json::from_str::<CalendarDate>(r#""06/10/2025""#).is_err());
    }
}
