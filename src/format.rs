use serde::{Deserialize, Serialize};

use crate::time::TimeOfDay;
use crate::{CalendarDate, ParseError, parse_u16, parse_u8};

/// Output shape requested by the embedding application for date callbacks.
/// `Canonical` is the fallback for unrecognized format names: the canonical
/// string passes through unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `YYYY{sep}MM{sep}DD`
    #[default]
    Simple,
    /// Start-of-day UTC instant
    Iso,
    /// `{start, end}` day-bound UTC instants
    Range,
    /// Canonical `YYYY-MM-DD` passthrough
    Canonical,
}

impl From<&str> for OutputFormat {
    fn from(name: &str) -> Self {
        match name {
            "simple" => Self::Simple,
            "iso" => Self::Iso,
            "range" => Self::Range,
            _ => Self::Canonical,
        }
    }
}

/// A formatted date value as delivered to a selection callback: either a
/// single string or a start/end pair of day-bound instants. Serializes to
/// the bare string or the `{"start": .., "end": ..}` object respectively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FormattedDate {
    Value(String),
    Bounds { start: String, end: String },
}

/// Formats a date for UI display: `MM{sep}DD{sep}YYYY`, zero-padded.
pub fn to_display(date: &CalendarDate, separator: char) -> String {
    format!(
        "{:02}{separator}{:02}{separator}{:04}",
        date.month(),
        date.day(),
        date.year()
    )
}

/// Formats a date in the "simple" output order: `YYYY{sep}MM{sep}DD`.
pub fn to_simple(date: &CalendarDate, separator: char) -> String {
    format!(
        "{:04}{separator}{:02}{separator}{:02}",
        date.year(),
        date.month(),
        date.day()
    )
}

/// Start-of-day UTC instant for the given calendar date.
/// Built from the calendar components directly, never through a local-time
/// conversion, so the rendered day matches the picked day in every runtime
/// timezone.
pub fn start_of_day_utc(date: &CalendarDate) -> String {
    format!("{date}T00:00:00.000Z")
}

/// End-of-day UTC instant (23:59:59.999) for the given calendar date.
pub fn end_of_day_utc(date: &CalendarDate) -> String {
    format!("{date}T23:59:59.999Z")
}

/// UTC instant combining a calendar date with a time of day and an explicit
/// millisecond component (0 for start values, 999 for end values).
pub fn instant(date: &CalendarDate, time: &TimeOfDay, millis: u16) -> String {
    debug_assert!(millis < 1000);
    format!("{date}T{time}.{millis:03}Z")
}

/// Produces the callback payload for a (possibly absent) selected date under
/// the active output format. Absent in, absent out.
pub fn format_date(
    date: Option<&CalendarDate>,
    format: OutputFormat,
    separator: char,
) -> Option<FormattedDate> {
    let date = date?;
    Some(match format {
        OutputFormat::Simple => FormattedDate::Value(to_simple(date, separator)),
        OutputFormat::Iso => FormattedDate::Value(start_of_day_utc(date)),
        OutputFormat::Range => FormattedDate::Bounds {
            start: start_of_day_utc(date),
            end: end_of_day_utc(date),
        },
        OutputFormat::Canonical => FormattedDate::Value(date.to_string()),
    })
}

/// Parses display-formatted text typed into a date input.
///
/// Strict policy: `M{sep}D{sep}YYYY` with 1-2 digit month and day, a 4-digit
/// year, and `/`, `-`, or the configured separator between components. The
/// reconstructed date is fully range-validated, so inputs like `02/30/2024`
/// are rejected rather than rolled over into March.
///
/// # Errors
/// Returns `ParseError::InvalidFormat` when the shape doesn't match, or the
/// component-specific variant when a field is out of range.
pub fn parse_display(text: &str, separator: char) -> Result<CalendarDate, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let parts: Vec<&str> = trimmed.split(['/', '-', separator]).collect();
    if parts.len() != 3 {
        return Err(ParseError::InvalidFormat(trimmed.to_owned()));
    }

    let (month_s, day_s, year_s) = (parts[0], parts[1], parts[2]);
    if !is_digits(month_s, 1, 2) || !is_digits(day_s, 1, 2) || !is_digits(year_s, 4, 4) {
        return Err(ParseError::InvalidFormat(trimmed.to_owned()));
    }

    let month = parse_u8(month_s)?;
    let day = parse_u8(day_s)?;
    let year = parse_u16(year_s)?;
    CalendarDate::new(year, month, day)
}

fn is_digits(s: &str, min_len: usize, max_len: usize) -> bool {
    (min_len..=max_len).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}
