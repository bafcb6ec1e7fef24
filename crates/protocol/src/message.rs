//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the application state.

use serde::{Deserialize, Serialize};

use crate::page::Page;
use crate::user::UserField;

/// Messages that represent user actions in the TUI.
///
/// These messages are produced by the input handler and consumed by
/// the application state to update the UI.
///
/// # Examples
///
/// ```
/// use snvl_protocol::Message;
///
/// let msg = Message::NavigateRight;
/// assert!(matches!(msg, Message::NavigateRight));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Move left: previous tab, column or day.
    NavigateLeft,
    /// Move right: next tab, column or day.
    NavigateRight,
    /// Move up: previous row, card or week.
    NavigateUp,
    /// Move down: next row, card or week.
    NavigateDown,
    /// Open the details of the highlighted item.
    Select,
    /// Close an overlay or cancel the current action (contextual).
    Escape,
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,
    /// Switch between the dark and light palettes.
    ToggleTheme,
    /// Mouse click at coordinates (column, row).
    ClickAt {
        /// Column (x coordinate) of the click.
        column: u16,
        /// Row (y coordinate) of the click.
        row: u16,
    },

    // --- Shell messages ---
    /// Show the given page.
    GoTo {
        /// The page to show.
        page: Page,
    },
    /// Show the next page of the sidebar.
    NextView,
    /// Show the previous page of the sidebar.
    PreviousView,

    // --- Table messages ---
    /// Start typing a search term.
    StartSearch,
    /// Stop typing the search term, keeping it.
    EndSearch,
    /// Input a character into the search term.
    SearchInput {
        /// The character that was input.
        ch: char,
    },
    /// Delete the last character of the search term.
    SearchBackspace,
    /// Advance the status filter to its next value.
    CycleStatusFilter,
    /// Advance the role filter to its next value.
    CycleRoleFilter,
    /// Sort by a column, flipping the direction if it is already active.
    SortBy {
        /// The column to sort by.
        field: UserField,
    },
    /// Clear the search term and every filter.
    ClearFilters,
    /// Show the previous page of results.
    PagePrevious,
    /// Show the next page of results.
    PageNext,

    // --- Calendar messages ---
    /// Show the previous month.
    MonthPrevious,
    /// Show the next month.
    MonthNext,
    /// Jump to today's date.
    Today,

    // --- Board messages ---
    /// Pick up the focused card, or drop the carried card on the focused column.
    ToggleCarry,
}

impl Message {
    /// Returns `true` if this message is a navigation action.
    ///
    /// # Examples
    ///
    /// ```
    /// use snvl_protocol::Message;
    ///
    /// assert!(Message::NavigateLeft.is_navigation());
    /// assert!(Message::NextView.is_navigation());
    /// assert!(!Message::Select.is_navigation());
    /// ```
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::NavigateLeft
                | Self::NavigateRight
                | Self::NavigateUp
                | Self::NavigateDown
                | Self::GoTo { .. }
                | Self::NextView
                | Self::PreviousView
        )
    }

    /// Returns `true` if this message should terminate the application.
    ///
    /// # Examples
    ///
    /// ```
    /// use snvl_protocol::Message;
    ///
    /// assert!(Message::Quit.is_terminating());
    /// assert!(!Message::Escape.is_terminating());
    /// ```
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }

    /// Returns `true` if this message changes the table query.
    ///
    /// # Examples
    ///
    /// ```
    /// use snvl_protocol::{Message, UserField};
    ///
    /// assert!(Message::CycleRoleFilter.is_query());
    /// assert!(Message::SortBy { field: UserField::Email }.is_query());
    /// assert!(!Message::MonthNext.is_query());
    /// ```
    #[must_use]
    pub fn is_query(&self) -> bool {
        matches!(
            self,
            Self::SearchInput { .. }
                | Self::SearchBackspace
                | Self::CycleStatusFilter
                | Self::CycleRoleFilter
                | Self::SortBy { .. }
                | Self::ClearFilters
                | Self::PagePrevious
                | Self::PageNext
        )
    }
}
