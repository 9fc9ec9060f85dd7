use serde::Serialize;

use crate::CalendarDate;
use crate::duration::format_duration;
use crate::format::{OutputFormat, end_of_day_utc, instant, start_of_day_utc, to_simple};
use crate::time::TimeOfDay;

/// Whether a candidate date must be disabled in the calendar grid because it
/// falls outside the inclusive `[min, max]` range. A date equal to either
/// bound is never disabled; an absent bound leaves that side unbounded.
/// Comparison is at day granularity.
pub fn is_disabled(
    date: &CalendarDate,
    min: Option<&CalendarDate>,
    max: Option<&CalendarDate>,
) -> bool {
    min.is_some_and(|min| date < min) || max.is_some_and(|max| date > max)
}

/// A date range is valid once both endpoints exist and the end does not
/// precede the start (equal days allowed).
pub fn validate_date_range(start: Option<&CalendarDate>, end: Option<&CalendarDate>) -> bool {
    match (start, end) {
        (Some(start), Some(end)) => end >= start,
        _ => false,
    }
}

/// Combined date-time range validity. Both dates are required; once the
/// dates differ the times are irrelevant. On a same-day range a missing time
/// on either side is tolerated (partial input), and with both present the
/// end time must not precede the start time, compared as seconds since
/// midnight.
pub fn validate_date_time_range(
    start_date: Option<&CalendarDate>,
    end_date: Option<&CalendarDate>,
    start_time: Option<&TimeOfDay>,
    end_time: Option<&TimeOfDay>,
) -> bool {
    let (Some(start_date), Some(end_date)) = (start_date, end_date) else {
        return false;
    };
    if start_date != end_date {
        return true;
    }
    match (start_time, end_time) {
        (Some(start), Some(end)) => {
            end.seconds_since_midnight() >= start.seconds_since_midnight()
        }
        _ => true,
    }
}

/// Range-selection callback payload. `start`/`end` carry the formatted date
/// strings for the active output format, or null while unselected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeOutput {
    pub start: Option<String>,
    pub end: Option<String>,
    pub is_valid: bool,
}

/// Date-time callback payload for the single date + time widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateTimeOutput {
    pub date: Option<String>,
    pub time: Option<String>,
    pub is_valid: bool,
}

/// Combined date-time-range callback payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateTimeRangeOutput {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub is_valid: bool,
}

/// Formats one endpoint of a range for the callback payload. ISO outputs
/// merge the endpoint's time when one is set and otherwise fall back to the
/// day bound; end values use the end-of-day millisecond like the source
/// widgets do.
fn endpoint_string(
    date: &CalendarDate,
    time: Option<&TimeOfDay>,
    format: OutputFormat,
    separator: char,
    is_end: bool,
) -> String {
    match format {
        OutputFormat::Simple => to_simple(date, separator),
        OutputFormat::Canonical => date.to_string(),
        OutputFormat::Iso | OutputFormat::Range => match time {
            Some(time) => instant(date, time, if is_end { 999 } else { 0 }),
            None if is_end => end_of_day_utc(date),
            None => start_of_day_utc(date),
        },
    }
}

/// Selection state of a date-range picker pair. Transitions are pure with
/// respect to everything but the two owned fields, and each returns the
/// callback payload for the resulting state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRangeSelection {
    start: Option<CalendarDate>,
    end: Option<CalendarDate>,
}

impl DateRangeSelection {
    pub const fn new() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    pub const fn start(&self) -> Option<CalendarDate> {
        self.start
    }

    pub const fn end(&self) -> Option<CalendarDate> {
        self.end
    }

    /// Selects the start date. An end date now before the new start is
    /// cleared to force re-selection; the start always sticks.
    pub fn select_start(
        &mut self,
        date: CalendarDate,
        format: OutputFormat,
        separator: char,
    ) -> DateRangeOutput {
        self.start = Some(date);
        if self.end.is_some_and(|end| end < date) {
            self.end = None;
        }
        self.output(format, separator)
    }

    /// Selects the end date. The inverse of the start-side rule: an earlier
    /// end never clears the start, it only makes the range invalid.
    pub fn select_end(
        &mut self,
        date: CalendarDate,
        format: OutputFormat,
        separator: char,
    ) -> DateRangeOutput {
        self.end = Some(date);
        self.output(format, separator)
    }

    /// Clears the start date
    pub fn clear_start(&mut self, format: OutputFormat, separator: char) -> DateRangeOutput {
        self.start = None;
        self.output(format, separator)
    }

    /// Clears the end date
    pub fn clear_end(&mut self, format: OutputFormat, separator: char) -> DateRangeOutput {
        self.end = None;
        self.output(format, separator)
    }

    /// Effective maximum for the start field: the selected end date caps it,
    /// otherwise the externally-configured bound applies
    pub fn start_max(&self, external_max: Option<CalendarDate>) -> Option<CalendarDate> {
        self.end.or(external_max)
    }

    /// Effective minimum for the end field: the selected start date floors
    /// it, otherwise the externally-configured bound applies
    pub fn end_min(&self, external_min: Option<CalendarDate>) -> Option<CalendarDate> {
        self.start.or(external_min)
    }

    pub fn is_valid(&self) -> bool {
        validate_date_range(self.start.as_ref(), self.end.as_ref())
    }

    pub fn output(&self, format: OutputFormat, separator: char) -> DateRangeOutput {
        DateRangeOutput {
            start: self
                .start
                .as_ref()
                .map(|d| endpoint_string(d, None, format, separator, false)),
            end: self
                .end
                .as_ref()
                .map(|d| endpoint_string(d, None, format, separator, true)),
            is_valid: self.is_valid(),
        }
    }
}

/// Selection state of the single date + time widget. Valid whenever a date
/// is chosen; the time is optional throughout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateTimeSelection {
    date: Option<CalendarDate>,
    time: Option<TimeOfDay>,
}

impl DateTimeSelection {
    pub const fn new() -> Self {
        Self {
            date: None,
            time: None,
        }
    }

    pub const fn date(&self) -> Option<CalendarDate> {
        self.date
    }

    pub const fn time(&self) -> Option<TimeOfDay> {
        self.time
    }

    pub fn select_date(
        &mut self,
        date: Option<CalendarDate>,
        format: OutputFormat,
        separator: char,
    ) -> DateTimeOutput {
        self.date = date;
        self.output(format, separator)
    }

    pub fn set_time(
        &mut self,
        time: Option<TimeOfDay>,
        format: OutputFormat,
        separator: char,
    ) -> DateTimeOutput {
        self.time = time;
        self.output(format, separator)
    }

    pub fn output(&self, format: OutputFormat, separator: char) -> DateTimeOutput {
        DateTimeOutput {
            date: self
                .date
                .as_ref()
                .map(|d| endpoint_string(d, self.time.as_ref(), format, separator, false)),
            time: self.time.as_ref().map(ToString::to_string),
            is_valid: self.date.is_some(),
        }
    }
}

/// Selection state of the combined date-time-range widget: a date-range
/// pair plus optional start and end times with same-day ordering rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateTimeRangeSelection {
    dates: DateRangeSelection,
    start_time: Option<TimeOfDay>,
    end_time: Option<TimeOfDay>,
}

impl DateTimeRangeSelection {
    pub const fn new() -> Self {
        Self {
            dates: DateRangeSelection::new(),
            start_time: None,
            end_time: None,
        }
    }

    pub const fn dates(&self) -> &DateRangeSelection {
        &self.dates
    }

    pub const fn start_time(&self) -> Option<TimeOfDay> {
        self.start_time
    }

    pub const fn end_time(&self) -> Option<TimeOfDay> {
        self.end_time
    }

    pub fn select_start_date(
        &mut self,
        date: CalendarDate,
        format: OutputFormat,
        separator: char,
    ) -> DateTimeRangeOutput {
        self.dates.select_start(date, format, separator);
        self.output(format, separator)
    }

    pub fn select_end_date(
        &mut self,
        date: CalendarDate,
        format: OutputFormat,
        separator: char,
    ) -> DateTimeRangeOutput {
        self.dates.select_end(date, format, separator);
        self.output(format, separator)
    }

    /// Sets the start time. On a same-day range, an end time now before the
    /// new start time is cleared, mirroring the date-side auto-clear rule.
    pub fn select_start_time(
        &mut self,
        time: Option<TimeOfDay>,
        format: OutputFormat,
        separator: char,
    ) -> DateTimeRangeOutput {
        self.start_time = time;
        let conflict = self.same_day()
            && matches!(
                (time, self.end_time),
                (Some(start), Some(end))
                    if end.seconds_since_midnight() < start.seconds_since_midnight()
            );
        if conflict {
            self.end_time = None;
        }
        self.output(format, separator)
    }

    pub fn select_end_time(
        &mut self,
        time: Option<TimeOfDay>,
        format: OutputFormat,
        separator: char,
    ) -> DateTimeRangeOutput {
        self.end_time = time;
        self.output(format, separator)
    }

    pub fn is_valid(&self) -> bool {
        validate_date_time_range(
            self.dates.start().as_ref(),
            self.dates.end().as_ref(),
            self.start_time.as_ref(),
            self.end_time.as_ref(),
        )
    }

    /// Elapsed-duration display between the two endpoints
    pub fn duration(&self) -> String {
        format_duration(
            self.dates.start().as_ref(),
            self.dates.end().as_ref(),
            self.start_time.as_ref(),
            self.end_time.as_ref(),
        )
    }

    pub fn output(&self, format: OutputFormat, separator: char) -> DateTimeRangeOutput {
        DateTimeRangeOutput {
            start_date: self
                .dates
                .start()
                .as_ref()
                .map(|d| endpoint_string(d, self.start_time.as_ref(), format, separator, false)),
            end_date: self
                .dates
                .end()
                .as_ref()
                .map(|d| endpoint_string(d, self.end_time.as_ref(), format, separator, true)),
            start_time: self.start_time.as_ref().map(ToString::to_string),
            end_time: self.end_time.as_ref().map(ToString::to_string),
            is_valid: self.is_valid(),
        }
    }

    fn same_day(&self) -> bool {
        matches!(
            (self.dates.start(), self.dates.end()),
            (Some(start), Some(end)) if start == end
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, time};

    #[test]
    fn test_is_disabled_inclusive_bounds() {
        let min = date(2025, 6, 10);
        let max = date(2025, 6, 20);

        assert!(!is_disabled(&min, Some(&min), Some(&max)));
        assert!(!is_disabled(&max, Some(&min), Some(&max)));
        assert!(!is_disabled(&date(2025, 6, 15), Some(&min), Some(&max)));

        let before = min.pred().unwrap();
        assert!(is_disabled(&before, Some(&min), Some(&max)));
        let after = max.succ().unwrap();
        assert!(is_disabled(&after, Some(&min), Some(&max)));
    }

    #[test]
    fn test_is_disabled_unbounded_sides() {
        let d = date(1, 1, 1);
        assert!(!is_disabled(&d, None, None));
        assert!(!is_disabled(&d, None, Some(&date(2025, 1, 1))));
        assert!(is_disabled(&d, Some(&date(2025, 1, 1)), None));
    }

    #[test]
    fn test_validate_date_range_boundary() {
        let d10 = date(2025, 6, 10);
        let d11 = date(2025, 6, 11);
        assert!(validate_date_range(Some(&d10), Some(&d10)));
        assert!(validate_date_range(Some(&d10), Some(&d11)));
        assert!(!validate_date_range(Some(&d11), Some(&d10)));
    }

    #[test]
    fn test_validate_date_range_missing_side() {
        let d = date(2025, 6, 10);
        assert!(!validate_date_range(None, Some(&d)));
        assert!(!validate_date_range(Some(&d), None));
        assert!(!validate_date_range(None, None));
    }

    #[test]
    fn test_auto_clear_asymmetry() {
        let mut sel = DateRangeSelection::new();
        sel.select_start(date(2025, 5, 1), OutputFormat::Canonical, '/');
        sel.select_end(date(2025, 5, 10), OutputFormat::Canonical, '/');

        // A start after the current end clears the end
        let out = sel.select_start(date(2025, 5, 15), OutputFormat::Canonical, '/');
        assert_eq!(sel.end(), None);
        assert!(!out.is_valid);

        // An end before the current start does not clear the start
        let mut sel = DateRangeSelection::new();
        sel.select_start(date(2025, 5, 1), OutputFormat::Canonical, '/');
        sel.select_end(date(2025, 5, 10), OutputFormat::Canonical, '/');
        let out = sel.select_end(date(2025, 4, 1), OutputFormat::Canonical, '/');
        assert_eq!(sel.start(), Some(date(2025, 5, 1)));
        assert_eq!(sel.end(), Some(date(2025, 4, 1)));
        assert!(!out.is_valid);
    }

    #[test]
    fn test_derived_bounds_feed_paired_field() {
        let external_min = date(2025, 1, 1);
        let external_max = date(2025, 12, 31);

        let mut sel = DateRangeSelection::new();
        assert_eq!(sel.start_max(Some(external_max)), Some(external_max));
        assert_eq!(sel.end_min(Some(external_min)), Some(external_min));

        sel.select_start(date(2025, 5, 1), OutputFormat::Canonical, '/');
        sel.select_end(date(2025, 5, 10), OutputFormat::Canonical, '/');
        assert_eq!(sel.start_max(Some(external_max)), Some(date(2025, 5, 10)));
        assert_eq!(sel.end_min(Some(external_min)), Some(date(2025, 5, 1)));
    }

    #[test]
    fn test_range_output_iso_uses_day_bounds() {
        let mut sel = DateRangeSelection::new();
        sel.select_start(date(2025, 5, 1), OutputFormat::Iso, '/');
        let out = sel.select_end(date(2025, 5, 10), OutputFormat::Iso, '/');
        assert_eq!(out.start.as_deref(), Some("2025-05-01T00:00:00.000Z"));
        assert_eq!(out.end.as_deref(), Some("2025-05-10T23:59:59.999Z"));
        assert!(out.is_valid);
    }

    #[test]
    fn test_range_output_serde_shape() {
        let mut sel = DateRangeSelection::new();
        let out = sel.select_start(date(2025, 5, 1), OutputFormat::Canonical, '/');
        assert_eq!(
            serde_json::to_string(&out).unwrap(),
            r#"{"start":"2025-05-01","end":null,"isValid":false}"#
        );
    }

    #[test]
    fn test_validate_date_time_range_dates_differ() {
        // Times are irrelevant once the dates differ
        assert!(validate_date_time_range(
            Some(&date(2025, 6, 10)),
            Some(&date(2025, 6, 11)),
            Some(&time(23, 0, 0)),
            Some(&time(1, 0, 0)),
        ));
    }

    #[test]
    fn test_validate_date_time_range_same_day_ordering() {
        let d = date(2025, 6, 10);
        assert!(validate_date_time_range(
            Some(&d),
            Some(&d),
            Some(&time(9, 0, 0)),
            Some(&time(9, 0, 0)),
        ));
        assert!(!validate_date_time_range(
            Some(&d),
            Some(&d),
            Some(&time(9, 0, 1)),
            Some(&time(9, 0, 0)),
        ));
    }

    #[test]
    fn test_validate_date_time_range_partial_input() {
        let d = date(2025, 6, 10);
        // Missing times are tolerated on a same-day range
        assert!(validate_date_time_range(Some(&d), Some(&d), None, None));
        assert!(validate_date_time_range(
            Some(&d),
            Some(&d),
            Some(&time(9, 0, 0)),
            None
        ));
        // Missing dates are not
        assert!(!validate_date_time_range(
            Some(&d),
            None,
            Some(&time(9, 0, 0)),
            Some(&time(10, 0, 0)),
        ));
    }

    #[test]
    fn test_same_day_end_time_auto_clear() {
        let d = date(2025, 6, 10);
        let mut sel = DateTimeRangeSelection::new();
        sel.select_start_date(d, OutputFormat::Canonical, '/');
        sel.select_end_date(d, OutputFormat::Canonical, '/');
        sel.select_end_time(Some(time(10, 0, 0)), OutputFormat::Canonical, '/');

        // New start time after the current end time on the same day
        sel.select_start_time(Some(time(11, 0, 0)), OutputFormat::Canonical, '/');
        assert_eq!(sel.end_time(), None);
    }

    #[test]
    fn test_end_time_kept_when_dates_differ() {
        let mut sel = DateTimeRangeSelection::new();
        sel.select_start_date(date(2025, 6, 10), OutputFormat::Canonical, '/');
        sel.select_end_date(date(2025, 6, 11), OutputFormat::Canonical, '/');
        sel.select_end_time(Some(time(10, 0, 0)), OutputFormat::Canonical, '/');

        sel.select_start_time(Some(time(11, 0, 0)), OutputFormat::Canonical, '/');
        assert_eq!(sel.end_time(), Some(time(10, 0, 0)));
    }

    #[test]
    fn test_date_time_range_iso_merges_times() {
        let mut sel = DateTimeRangeSelection::new();
        sel.select_start_date(date(2025, 6, 10), OutputFormat::Iso, '/');
        sel.select_end_date(date(2025, 6, 11), OutputFormat::Iso, '/');
        sel.select_start_time(Some(time(9, 30, 0)), OutputFormat::Iso, '/');
        let out = sel.select_end_time(Some(time(17, 0, 0)), OutputFormat::Iso, '/');

        assert_eq!(out.start_date.as_deref(), Some("2025-06-10T09:30:00.000Z"));
        assert_eq!(out.end_date.as_deref(), Some("2025-06-11T17:00:00.999Z"));
        assert_eq!(out.start_time.as_deref(), Some("09:30:00"));
        assert_eq!(out.end_time.as_deref(), Some("17:00:00"));
        assert!(out.is_valid);
    }

    #[test]
    fn test_date_time_range_output_serde_shape() {
        let mut sel = DateTimeRangeSelection::new();
        sel.select_start_date(date(2025, 6, 10), OutputFormat::Canonical, '/');
        let out = sel.select_start_time(Some(time(9, 0, 0)), OutputFormat::Canonical, '/');
        assert_eq!(
            serde_json::to_string(&out).unwrap(),
            r#"{"startDate":"2025-06-10","endDate":null,"startTime":"09:00:00","endTime":null,"isValid":false}"#
        );
    }

    #[test]
    fn test_date_time_selection_valid_with_date_only() {
        let mut sel = DateTimeSelection::new();
        let out = sel.set_time(Some(time(9, 0, 0)), OutputFormat::Canonical, '/');
        assert!(!out.is_valid);

        let out = sel.select_date(Some(date(2025, 6, 10)), OutputFormat::Canonical, '/');
        assert!(out.is_valid);
        assert_eq!(out.date.as_deref(), Some("2025-06-10"));
        assert_eq!(out.time.as_deref(), Some("09:00:00"));
    }

    #[test]
    fn test_date_time_selection_simple_uses_separator() {
        let mut sel = DateTimeSelection::new();
        let out = sel.select_date(Some(date(2025, 6, 10)), OutputFormat::Simple, '-');
        assert_eq!(out.date.as_deref(), Some("2025-06-10"));

        let out = sel.select_date(Some(date(2025, 6, 10)), OutputFormat::Simple, '/');
        assert_eq!(out.date.as_deref(), Some("2025/06/10"));
    }
}
