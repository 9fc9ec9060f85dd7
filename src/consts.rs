/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for grid and rollover arithmetic
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator in canonical `YYYY-MM-DD` strings
pub const CANONICAL_SEPARATOR: char = '-';
/// Default separator for display-formatted dates (`MM/DD/YYYY`)
pub const DISPLAY_SEPARATOR: char = '/';
/// Component separator in canonical `HH:MM:SS` time strings
pub const TIME_SEPARATOR: char = ':';

/// Columns in the rendered month grid (one per weekday, Sunday first)
pub const DAYS_PER_WEEK: u8 = 7;
/// Rows in the rendered month grid
pub const GRID_ROWS: u8 = 6;
/// Total cells in the rendered month grid; the 6x7 layout is a contract
/// external renderers depend on, regardless of month length
pub const GRID_CELLS: usize = (GRID_ROWS as usize) * (DAYS_PER_WEEK as usize);

/// Last hour of the 24-hour clock
pub const MAX_HOUR: u8 = 23;
/// Last minute of an hour (and last second of a minute)
pub const MAX_MINUTE: u8 = 59;
/// Hours on the 12-hour clock face
pub const HOURS_PER_PERIOD: u8 = 12;

pub(crate) const SECS_PER_MINUTE: u32 = 60;
pub(crate) const SECS_PER_HOUR: u32 = 60 * SECS_PER_MINUTE;
pub(crate) const SECS_PER_DAY: i64 = 24 * SECS_PER_HOUR as i64;
