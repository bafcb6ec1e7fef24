//! State of the calendar page.

use chrono::{Days, NaiveDate};
use snvl_protocol::{next_month, prev_month};

/// Cursor and selection of the month grid.
///
/// The displayed month is always the month of the cursor, so moving the
/// cursor past either end of the month turns the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarState {
    /// The highlighted day.
    pub cursor: NaiveDate,
    /// The day whose events are listed in the side panel.
    pub selected: Option<NaiveDate>,
    /// The current date, used by [`CalendarState::today`].
    pub today: NaiveDate,
}

impl CalendarState {
    /// Creates a calendar showing the month of `today` with nothing selected.
    #[must_use]
    pub const fn new(today: NaiveDate) -> Self {
        Self {
            cursor: today,
            selected: None,
            today,
        }
    }

    /// Moves the cursor by `days` (negative for earlier days).
    pub fn move_days(&mut self, days: i64) {
        let delta = Days::new(days.unsigned_abs());
        let moved = if days < 0 {
            self.cursor.checked_sub_days(delta)
        } else {
            self.cursor.checked_add_days(delta)
        };
        if let Some(date) = moved {
            self.cursor = date;
        }
    }

    /// Shows the previous month, clamping the cursor day to its length.
    pub fn previous_month(&mut self) {
        self.cursor = prev_month(self.cursor);
        tracing::debug!(cursor = %self.cursor, "calendar month changed");
    }

    /// Shows the next month, clamping the cursor day to its length.
    pub fn next_month(&mut self) {
        self.cursor = next_month(self.cursor);
        tracing::debug!(cursor = %self.cursor, "calendar month changed");
    }

    /// Moves the cursor to the current date and selects it.
    pub fn today(&mut self) {
        self.cursor = self.today;
        self.selected = Some(self.today);
    }

    /// Selects the day under the cursor.
    pub fn select(&mut self) {
        self.selected = Some(self.cursor);
    }

    /// Clears the selection. Returns `true` if a day was selected.
    pub fn clear_selection(&mut self) -> bool {
        self.selected.take().is_some()
    }
}
