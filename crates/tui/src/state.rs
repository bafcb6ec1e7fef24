//! Application state management.
//!
//! [`AppState`] holds the in-memory records shown by the dashboard and the
//! transient view state of each page. Records outlive page switches; view
//! state does not.

use std::num::NonZeroUsize;

use chrono::NaiveDate;
use snvl_config::Theme;
use snvl_protocol::dummy::{mock_analytics, mock_board, mock_events, mock_users};
use snvl_protocol::{AnalyticsData, Event, KanbanBoard, Page, User};

use crate::analytics_state::AnalyticsState;
use crate::board_state::BoardState;
use crate::calendar_state::CalendarState;
use crate::table_state::TableState;

/// The records displayed by the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Rows of the data tables page.
    pub users: Vec<User>,
    /// Cards of the kanban page.
    pub board: KanbanBoard,
    /// Events of the calendar page.
    pub events: Vec<Event>,
    /// Figures of the analytics page.
    pub analytics: AnalyticsData,
}

impl Dataset {
    /// Returns the built-in sample records.
    ///
    /// # Examples
    ///
    /// ```
    /// use snvl_tui::Dataset;
    ///
    /// let data = Dataset::mock();
    /// assert_eq!(data.users.len(), 8);
    /// assert_eq!(data.board.total_tasks(), 5);
    /// ```
    #[must_use]
    pub fn mock() -> Self {
        Self {
            users: mock_users(),
            board: mock_board(),
            events: mock_events(),
            analytics: mock_analytics(),
        }
    }
}

/// The application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The records on display.
    pub data: Dataset,
    /// The page shown in the content area.
    pub page: Page,
    /// The active colour palette.
    pub theme: Theme,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// Analytics page state.
    pub analytics: AnalyticsState,
    /// Data tables page state.
    pub table: TableState,
    /// Calendar page state.
    pub calendar: CalendarState,
    /// Kanban page state.
    pub board: BoardState,
    page_size: NonZeroUsize,
}

impl AppState {
    /// Creates the state of a dashboard opened on `page`.
    ///
    /// `today` anchors the calendar; `page_size` is the number of table rows
    /// per page.
    #[must_use]
    pub fn new(
        data: Dataset,
        page: Page,
        theme: Theme,
        page_size: NonZeroUsize,
        today: NaiveDate,
    ) -> Self {
        Self {
            data,
            page,
            theme,
            help_visible: false,
            analytics: AnalyticsState::default(),
            table: TableState::new(page_size),
            calendar: CalendarState::new(today),
            board: BoardState::default(),
            page_size,
        }
    }

    /// Shows `page`, resetting the view state of the page being left.
    ///
    /// Returns `false` if `page` was already shown.
    pub fn go_to(&mut self, page: Page) -> bool {
        if page == self.page {
            return false;
        }
        self.reset_page(self.page);
        tracing::info!(from = %self.page, to = %page, "switched page");
        self.page = page;
        true
    }

    /// Toggles the help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Dismisses the help overlay if it is visible.
    ///
    /// Returns `true` if help was visible and has been dismissed.
    #[must_use]
    pub fn dismiss_help(&mut self) -> bool {
        std::mem::take(&mut self.help_visible)
    }

    /// Returns `true` if typed characters go to the table search box.
    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.page == Page::Tables && self.table.searching
    }

    fn reset_page(&mut self, page: Page) {
        match page {
            Page::Analytics => self.analytics = AnalyticsState::default(),
            Page::Tables => self.table = TableState::new(self.page_size),
            Page::Calendar => self.calendar = CalendarState::new(self.calendar.today),
            Page::Kanban => self.board = BoardState::default(),
        }
    }
}
