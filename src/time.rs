use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{
    HOURS_PER_PERIOD, MAX_HOUR, MAX_MINUTE, SECS_PER_HOUR, SECS_PER_MINUTE, TIME_SEPARATOR,
};
use crate::prelude::*;

/// Error type for time parsing and 12-hour recomposition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeError {
    /// Input is not `HH:MM` or `HH:MM:SS`.
    #[error("Invalid time format: {0}")]
    InvalidFormat(String),

    /// Hour outside 0-23.
    #[error("Invalid hour: {0} (must be 0-{MAX_HOUR})")]
    InvalidHour(u8),

    /// 12-hour clock-face hour outside 1-12.
    #[error("Invalid clock hour: {0} (must be 1-{HOURS_PER_PERIOD})")]
    InvalidClockHour(u8),

    /// Minute outside 0-59.
    #[error("Invalid minute: {0} (must be 0-{MAX_MINUTE})")]
    InvalidMinute(u8),

    /// Second outside 0-59.
    #[error("Invalid second: {0} (must be 0-{MAX_MINUTE})")]
    InvalidSecond(u8),

    /// A 12-hour recomposition needs an AM/PM period.
    #[error("Missing AM/PM period for 12-hour time")]
    MissingPeriod,
}

/// A wall-clock time of day at second granularity. Valid by construction and
/// displayed as the canonical 24-hour `HH:MM:SS` string; the 12-hour
/// representation is a view produced by `decompose`, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:02}:{:02}:{:02}", hour, minute, second)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
}

/// Half-day period selector for the 12-hour clock
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Period {
    #[default]
    #[display(fmt = "AM")]
    #[serde(rename = "AM")]
    Am,
    #[display(fmt = "PM")]
    #[serde(rename = "PM")]
    Pm,
}

/// Hour display convention; the canonical string is always 24-hour
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockFormat {
    #[serde(rename = "12")]
    H12,
    #[default]
    #[serde(rename = "24")]
    H24,
}

/// Selection granularity of the time picker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeStep {
    /// Seconds column shown; canonical string carries real seconds
    #[default]
    #[serde(rename = "1")]
    Seconds,
    /// Seconds truncated to `00` and hidden
    #[serde(rename = "60")]
    Minutes,
}

/// What the third selector column shows for a format/step combination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorColumn {
    Seconds,
    Period,
    Hidden,
}

/// UI-facing decomposition of a `TimeOfDay` under a display format.
/// `period` is present exactly when the 12-hour format is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockParts {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub period: Option<Period>,
}

impl TimeOfDay {
    /// Creates a time from raw components, validating each in turn.
    ///
    /// # Errors
    /// Returns the matching `TimeError` variant for the first invalid
    /// component.
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self, TimeError> {
        if hour > MAX_HOUR {
            return Err(TimeError::InvalidHour(hour));
        }
        if minute > MAX_MINUTE {
            return Err(TimeError::InvalidMinute(minute));
        }
        if second > MAX_MINUTE {
            return Err(TimeError::InvalidSecond(second));
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// Returns the hour (0-23)
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Returns the second
    pub const fn second(&self) -> u8 {
        self.second
    }

    /// Seconds elapsed since midnight, the total order used by every
    /// time-ordering check
    pub const fn seconds_since_midnight(&self) -> u32 {
        self.hour as u32 * SECS_PER_HOUR
            + self.minute as u32 * SECS_PER_MINUTE
            + self.second as u32
    }

    /// Splits into UI-facing fields under the given display format.
    /// 24-hour: the hour passes through and there is no period. 12-hour:
    /// 0 maps to 12 AM, 1-11 stay AM, 12 maps to 12 PM, 13-23 drop to
    /// 1-11 PM.
    pub const fn decompose(&self, format: ClockFormat) -> ClockParts {
        let (hour, period) = match format {
            ClockFormat::H24 => (self.hour, None),
            ClockFormat::H12 => {
                let period = if self.hour >= HOURS_PER_PERIOD {
                    Period::Pm
                } else {
                    Period::Am
                };
                let hour = match self.hour {
                    0 => HOURS_PER_PERIOD,
                    h if h > HOURS_PER_PERIOD => h - HOURS_PER_PERIOD,
                    h => h,
                };
                (hour, Some(period))
            }
        };
        ClockParts {
            hour,
            minute: self.minute,
            second: self.second,
            period,
        }
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeError;

    /// Parses `HH:MM:SS` or `HH:MM` (seconds default to 0).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(TimeError::InvalidFormat(s.to_owned()));
        }

        let parts: Vec<&str> = trimmed.split(TIME_SEPARATOR).collect();
        let (hour_s, minute_s, second_s) = match parts.as_slice() {
            [h, m] => (*h, *m, "0"),
            [h, m, sec] => (*h, *m, *sec),
            _ => return Err(TimeError::InvalidFormat(trimmed.to_owned())),
        };

        let hour = parse_component(hour_s)?;
        let minute = parse_component(minute_s)?;
        let second = parse_component(second_s)?;
        Self::new(hour, minute, second)
    }
}

fn parse_component(s: &str) -> Result<u8, TimeError> {
    s.parse::<u8>()
        .map_err(|_| TimeError::InvalidFormat(s.to_owned()))
}

impl serde::Serialize for TimeOfDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for TimeOfDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl ClockParts {
    /// Reassembles the canonical 24-hour time. Inverse of
    /// `TimeOfDay::decompose`: 12 AM maps to 00, 12 PM stays 12, other PM
    /// hours gain 12.
    ///
    /// # Errors
    /// Returns `TimeError::MissingPeriod` when a 12-hour recomposition lacks
    /// a period, or a range error for an out-of-range field.
    pub fn recompose(&self, format: ClockFormat) -> Result<TimeOfDay, TimeError> {
        let hour = match format {
            ClockFormat::H24 => self.hour,
            ClockFormat::H12 => {
                if self.hour < 1 || self.hour > HOURS_PER_PERIOD {
                    return Err(TimeError::InvalidClockHour(self.hour));
                }
                match (self.hour, self.period.ok_or(TimeError::MissingPeriod)?) {
                    (h, Period::Am) if h == HOURS_PER_PERIOD => 0,
                    (h, Period::Pm) if h == HOURS_PER_PERIOD => HOURS_PER_PERIOD,
                    (h, Period::Am) => h,
                    (h, Period::Pm) => h + HOURS_PER_PERIOD,
                }
            }
        };
        TimeOfDay::new(hour, self.minute, self.second)
    }

    /// The input-field text for these parts: `hh:mm`, with `:ss` under
    /// seconds step and a trailing ` AM`/` PM` in 12-hour mode.
    pub fn text(&self, step: TimeStep) -> String {
        let mut out = format!("{:02}:{:02}", self.hour, self.minute);
        if step == TimeStep::Seconds {
            out.push_str(&format!(":{:02}", self.second));
        }
        if let Some(period) = self.period {
            out.push_str(&format!(" {period}"));
        }
        out
    }
}

/// Content of the third selector column: seconds under seconds step,
/// otherwise the AM/PM period in 12-hour mode, otherwise nothing.
pub const fn selector_column(format: ClockFormat, step: TimeStep) -> SelectorColumn {
    match (step, format) {
        (TimeStep::Seconds, _) => SelectorColumn::Seconds,
        (TimeStep::Minutes, ClockFormat::H12) => SelectorColumn::Period,
        (TimeStep::Minutes, ClockFormat::H24) => SelectorColumn::Hidden,
    }
}

/// A single column pick in the time dropdown. Hour values follow the active
/// display format (1-12 clock-face hours in 12-hour mode, 0-23 otherwise).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSelect {
    Hour(u8),
    Minute(u8),
    Second(u8),
    Period(Period),
}

/// Local state of a time-picker widget: per-column selections that only
/// produce a canonical time once hour and minute are both chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimePickerState {
    hour: Option<u8>,
    minute: Option<u8>,
    second: Option<u8>,
    period: Period,
}

impl TimePickerState {
    /// Applies one column pick and returns the canonical time to emit, if
    /// the selection is complete. Seconds default to 0 and are truncated to
    /// 0 under minutes step.
    pub fn select(
        &mut self,
        pick: TimeSelect,
        format: ClockFormat,
        step: TimeStep,
    ) -> Option<TimeOfDay> {
        match pick {
            TimeSelect::Hour(h) => self.hour = Some(h),
            TimeSelect::Minute(m) => self.minute = Some(m),
            TimeSelect::Second(s) => self.second = Some(s),
            TimeSelect::Period(p) => self.period = p,
        }
        self.emit(format, step)
    }

    /// Resynchronizes the columns from an externally-set value
    pub fn sync(&mut self, value: Option<&TimeOfDay>, format: ClockFormat) {
        match value {
            Some(time) => {
                let parts = time.decompose(format);
                self.hour = Some(parts.hour);
                self.minute = Some(parts.minute);
                self.second = Some(parts.second);
                self.period = parts.period.unwrap_or_default();
            }
            None => self.clear(),
        }
    }

    /// Clears every column back to the unselected state
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// The input-field text for the current selection, empty until hour and
    /// minute are both chosen
    pub fn text(&self, format: ClockFormat, step: TimeStep) -> String {
        self.parts(format, step)
            .map(|parts| parts.text(step))
            .unwrap_or_default()
    }

    fn parts(&self, format: ClockFormat, step: TimeStep) -> Option<ClockParts> {
        let hour = self.hour?;
        let minute = self.minute?;
        let second = match step {
            TimeStep::Seconds => self.second.unwrap_or(0),
            TimeStep::Minutes => 0,
        };
        let period = match format {
            ClockFormat::H12 => Some(self.period),
            ClockFormat::H24 => None,
        };
        Some(ClockParts {
            hour,
            minute,
            second,
            period,
        })
    }

    fn emit(&self, format: ClockFormat, step: TimeStep) -> Option<TimeOfDay> {
        self.parts(format, step)?.recompose(format).ok()
    }
}
