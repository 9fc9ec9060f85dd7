use crate::CalendarDate;
use crate::consts::{SECS_PER_DAY, SECS_PER_HOUR, SECS_PER_MINUTE};
use crate::time::TimeOfDay;

/// Human-readable elapsed time between two date-time endpoints, as shown
/// next to the combined range widget.
///
/// The day count is the calendar-day gap and the hour/minute part is the
/// clock gap, wrapped across midnight when the end clock reads earlier than
/// the start clock. The two are reported side by side rather than collapsed
/// into one instant difference, so "Jan 1 23:30 to Jan 2 01:15" reads as one
/// day plus the 1h45m clock offset.
///
/// Returns `"N/A"` while any endpoint is missing and `"Invalid"` when the
/// end precedes the start (earlier end date, or an earlier end time on the
/// same day).
pub fn format_duration(
    start_date: Option<&CalendarDate>,
    end_date: Option<&CalendarDate>,
    start_time: Option<&TimeOfDay>,
    end_time: Option<&TimeOfDay>,
) -> String {
    let (Some(start_date), Some(end_date), Some(start_time), Some(end_time)) =
        (start_date, end_date, start_time, end_time)
    else {
        return "N/A".to_owned();
    };

    let days = end_date.civil_day() - start_date.civil_day();
    if days < 0 {
        return "Invalid".to_owned();
    }

    let clock_gap =
        i64::from(end_time.seconds_since_midnight()) - i64::from(start_time.seconds_since_midnight());
    if days == 0 && clock_gap < 0 {
        return "Invalid".to_owned();
    }
    let clock_gap = clock_gap.rem_euclid(SECS_PER_DAY);

    let hours = clock_gap / i64::from(SECS_PER_HOUR);
    let minutes = (clock_gap % i64::from(SECS_PER_HOUR)) / i64::from(SECS_PER_MINUTE);

    if days > 0 {
        format!("{days}d {hours}h {minutes}m")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes} minutes")
    }
}
