use crate::CalendarDate;
use crate::ParseError;
use crate::config::PickerConfig;
use crate::format::{FormattedDate, format_date, parse_display, to_display};
use crate::grid::YearMonth;
use crate::range::is_disabled;

/// Why a committed input field was rejected. The field text is reverted to
/// the last accepted value before this is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error(transparent)]
    Invalid(#[from] ParseError),

    /// Parsed fine but falls outside the configured min/max range
    #[error("Date out of range: {0}")]
    OutOfRange(CalendarDate),
}

/// State of one date-picker widget: the committed selection, the raw input
/// field text, the popup flag, and the month the popup is showing. Free text
/// only becomes a selection through `commit_input`; until then the field and
/// the selection can disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePickerState {
    selected: Option<CalendarDate>,
    input: String,
    open: bool,
    visible: YearMonth,
}

impl DatePickerState {
    /// Creates a closed, empty picker showing the given month
    pub const fn new(visible: YearMonth) -> Self {
        Self {
            selected: None,
            input: String::new(),
            open: false,
            visible,
        }
    }

    pub const fn selected(&self) -> Option<CalendarDate> {
        self.selected
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub const fn is_open(&self) -> bool {
        self.open
    }

    pub const fn visible(&self) -> YearMonth {
        self.visible
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Commits a date picked from the calendar grid. Disabled dates are
    /// ignored; an accepted pick refreshes the input text, closes the popup,
    /// and yields the formatted callback payload.
    pub fn select(
        &mut self,
        date: CalendarDate,
        config: &PickerConfig,
    ) -> Option<FormattedDate> {
        if is_disabled(&date, config.min_date.as_ref(), config.max_date.as_ref()) {
            return None;
        }
        self.selected = Some(date);
        self.visible = date.year_month();
        self.refresh_display(config);
        self.open = false;
        format_date(self.selected.as_ref(), config.format, config.separator)
    }

    /// Records in-progress typing without validating it
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Commits the typed input on blur or Enter.
    ///
    /// Empty text clears the selection. Otherwise the text must parse as a
    /// display-formatted date inside the configured range; an accepted date
    /// becomes the selection, moves the visible month to it, and yields the
    /// callback payload.
    ///
    /// # Errors
    /// Rejected text reverts the field to the last accepted value and
    /// returns the reason; the selection is untouched.
    pub fn commit_input(
        &mut self,
        config: &PickerConfig,
    ) -> Result<Option<FormattedDate>, InputError> {
        if self.input.trim().is_empty() {
            self.selected = None;
            self.input.clear();
            return Ok(None);
        }

        let date = match parse_display(&self.input, config.separator) {
            Ok(date) => date,
            Err(err) => {
                self.refresh_display(config);
                return Err(err.into());
            }
        };
        if is_disabled(&date, config.min_date.as_ref(), config.max_date.as_ref()) {
            self.refresh_display(config);
            return Err(InputError::OutOfRange(date));
        }

        self.selected = Some(date);
        self.visible = date.year_month();
        self.refresh_display(config);
        Ok(format_date(self.selected.as_ref(), config.format, config.separator))
    }

    /// Clears the selection and input field
    pub fn clear(&mut self) {
        self.selected = None;
        self.input.clear();
    }

    /// Moves the popup one month forward, stopping at December 9999
    pub fn next_month(&mut self) {
        if let Some(next) = self.visible.next() {
            self.visible = next;
        }
    }

    /// Moves the popup one month back, stopping at January 0001
    pub fn prev_month(&mut self) {
        if let Some(prev) = self.visible.prev() {
            self.visible = prev;
        }
    }

    /// Jumps the popup to the month containing the given date
    pub fn go_to(&mut self, date: &CalendarDate) {
        self.visible = date.year_month();
    }

    /// Rewrites the input field from the committed selection
    pub fn refresh_display(&mut self, config: &PickerConfig) {
        self.input = self
            .selected
            .as_ref()
            .map(|d| to_display(d, config.separator))
            .unwrap_or_default();
    }
}
