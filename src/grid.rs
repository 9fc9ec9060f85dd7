use serde::Serialize;

use crate::consts::{DECEMBER, GRID_CELLS, JANUARY, MAX_YEAR, MIN_DAY};
use crate::prelude::*;
use crate::types::{Day, Month, Year, days_in_month, weekday};
use crate::{CalendarDate, ParseError};

/// Calendar month cursor backing the popup's visible page. Navigation rolls
/// over year boundaries and stops at the supported year range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{:04}-{:02}", "year.get()", "month.get()")]
pub struct YearMonth {
    year: Year,
    month: Month,
}

/// One of the 42 cells of a rendered month grid. Cells from the adjacent
/// months carry `is_current_month = false` so the renderer can dim them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarCell {
    pub date: CalendarDate,
    #[serde(rename = "isCurrentMonth")]
    pub is_current_month: bool,
}

impl YearMonth {
    /// Creates a cursor from raw components.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear`/`InvalidMonth` for out-of-range input.
    pub fn new(year: u16, month: u8) -> Result<Self, ParseError> {
        Ok(Self {
            year: Year::new(year)?,
            month: Month::new(month)?,
        })
    }

    /// Creates a cursor from already-validated components
    pub const fn from_parts(year: Year, month: Month) -> Self {
        Self { year, month }
    }

    /// Returns the year component
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month component (1-based)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// The following month, rolling into the next year after December.
    /// Returns `None` past December 9999.
    pub fn next(&self) -> Option<Self> {
        if self.month() == DECEMBER {
            if self.year() >= MAX_YEAR {
                None
            } else {
                Self::new(self.year() + 1, JANUARY).ok()
            }
        } else {
            Self::new(self.year(), self.month() + 1).ok()
        }
    }

    /// The preceding month, rolling into the previous year before January.
    /// Returns `None` before January 0001.
    pub fn prev(&self) -> Option<Self> {
        if self.month() == JANUARY {
            if self.year() <= 1 {
                None
            } else {
                Self::new(self.year() - 1, DECEMBER).ok()
            }
        } else {
            Self::new(self.year(), self.month() - 1).ok()
        }
    }

    /// Number of days in this month
    pub const fn day_count(&self) -> u8 {
        days_in_month(self.year(), self.month())
    }

    /// Weekday of the first of the month, 0 = Sunday
    pub const fn first_weekday(&self) -> u8 {
        weekday(self.year(), self.month(), MIN_DAY)
    }

    /// The date of the given day-of-month within this month.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` when the day doesn't exist here.
    pub fn date(&self, day: u8) -> Result<CalendarDate, ParseError> {
        let day = Day::new(day, self.year(), self.month())?;
        Ok(CalendarDate::from_parts(self.year, self.month, day))
    }

    /// Builds the month grid: exactly 42 cells laid out Sunday-first, with
    /// the lead-in filled from the tail of the previous month and the
    /// remainder from the head of the next. The constant 6x7 shape holds for
    /// every month regardless of its length or starting weekday.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` when an adjacent month falls outside
    /// the supported year range (January 0001 / December 9999 edges).
    pub fn grid(&self) -> Result<Vec<CalendarCell>, ParseError> {
        let mut cells = Vec::with_capacity(GRID_CELLS);

        let leading = self.first_weekday();
        if leading > 0 {
            let prev = self.prev().ok_or(ParseError::InvalidYear(0))?;
            let prev_days = prev.day_count();
            for offset in 0..leading {
                let day = prev_days - leading + 1 + offset;
                cells.push(CalendarCell {
                    date: prev.date(day)?,
                    is_current_month: false,
                });
            }
        }

        for day in MIN_DAY..=self.day_count() {
            cells.push(CalendarCell {
                date: self.date(day)?,
                is_current_month: true,
            });
        }

        if cells.len() < GRID_CELLS {
            let next = self.next().ok_or(ParseError::InvalidYear(MAX_YEAR + 1))?;
            let mut day = MIN_DAY;
            while cells.len() < GRID_CELLS {
                cells.push(CalendarCell {
                    date: next.date(day)?,
                    is_current_month: false,
                });
                day += 1;
            }
        }

        Ok(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    fn ym(year: u16, month: u8) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    #[test]
    fn test_grid_always_42_cells() {
        for (year, month) in [
            (2024, 2),
            (2025, 2),
            (2025, 6),
            (2025, 12),
            (2024, 9),
            (1999, 1),
        ] {
            let cells = ym(year, month).grid().unwrap();
            assert_eq!(cells.len(), 42, "{year}-{month:02}");
        }
    }

    #[test]
    fn test_grid_current_month_count_matches_day_count() {
        let cases = [
            (2024, 2, 29), // leap February
            (2025, 2, 28),
            (2025, 4, 30),
            (2025, 7, 31),
        ];
        for (year, month, expected) in cases {
            let cells = ym(year, month).grid().unwrap();
            let current = cells.iter().filter(|c| c.is_current_month).count();
            assert_eq!(current, expected, "{year}-{month:02}");
        }
    }

    #[test]
    fn test_grid_leading_cells_count_back_from_previous_month() {
        // February 2024 starts on a Thursday (weekday 4), so the grid leads
        // with January 28-31.
        let cells = ym(2024, 2).grid().unwrap();
        assert_eq!(cells[0].date, date(2024, 1, 28));
        assert!(!cells[0].is_current_month);
        assert_eq!(cells[3].date, date(2024, 1, 31));
        assert_eq!(cells[4].date, date(2024, 2, 1));
        assert!(cells[4].is_current_month);
    }

    #[test]
    fn test_grid_trailing_cells_continue_into_next_month() {
        let cells = ym(2024, 2).grid().unwrap();
        // 4 leading + 29 days ends at index 32; trailing cells are March 1-9.
        assert_eq!(cells[32].date, date(2024, 2, 29));
        assert_eq!(cells[33].date, date(2024, 3, 1));
        assert!(!cells[33].is_current_month);
        assert_eq!(cells[41].date, date(2024, 3, 9));
    }

    #[test]
    fn test_grid_month_starting_sunday_has_no_leading_cells() {
        // June 2025 starts on a Sunday.
        let cells = ym(2025, 6).grid().unwrap();
        assert_eq!(cells[0].date, date(2025, 6, 1));
        assert!(cells[0].is_current_month);
        assert_eq!(cells[30].date, date(2025, 7, 1));
        assert!(!cells[30].is_current_month);
    }

    #[test]
    fn test_grid_cells_are_consecutive_days() {
        let cells = ym(2025, 3).grid().unwrap();
        for pair in cells.windows(2) {
            assert_eq!(pair[0].date.succ(), Some(pair[1].date));
        }
    }

    #[test]
    fn test_next_prev_rollover() {
        assert_eq!(ym(2025, 12).next(), Some(ym(2026, 1)));
        assert_eq!(ym(2026, 1).prev(), Some(ym(2025, 12)));
        assert_eq!(ym(2025, 6).next(), Some(ym(2025, 7)));
        assert_eq!(ym(9999, 12).next(), None);
        assert_eq!(ym(1, 1).prev(), None);
    }

    #[test]
    fn test_date_within_month() {
        assert_eq!(ym(2024, 2).date(29).unwrap(), date(2024, 2, 29));
        assert!(ym(2023, 2).date(29).is_err());
    }

    #[test]
    fn test_cell_serde_shape() {
        let cell = CalendarCell {
            date: date(2025, 6, 1),
            is_current_month: true,
        };
        assert_eq!(
            serde_json::to_string(&cell).unwrap(),
            r#"{"date":"2025-06-01","isCurrentMonth":true}"#
        );
    }
}
