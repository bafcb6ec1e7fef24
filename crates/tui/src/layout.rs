//! Centralized layout measurements for the TUI.
//!
//! Shared dimensions used both when rendering and when hit-testing mouse
//! clicks, so the two always agree.

/// Height of the header bar in rows.
///
/// The header displays the product name, the page title and the help cue.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the status bar in rows.
pub const STATUS_BAR_HEIGHT: u16 = 3;

/// Width of the navigation sidebar in columns.
///
/// Fits the longest entry ("4  Kanban Board") plus borders and the marker.
pub const SIDEBAR_WIDTH: u16 = 20;

/// Height of each kanban card in rows.
///
/// Borders (2 rows) plus title and assignee/priority lines.
pub const TASK_CARD_HEIGHT: u16 = 4;

/// Maximum number of events listed inside a calendar cell.
pub const MAX_EVENTS_PER_CELL: usize = 2;

/// Width of the selected-day panel on the calendar page.
pub const DAY_PANEL_WIDTH: u16 = 32;

/// Minimum terminal height for useful rendering (content area).
///
/// Below this height, we display a "terminal too small" message.
/// The table page needs the most rows: borders, header, five rows and
/// its footer, plus the status bar.
pub const MIN_HEIGHT: u16 = 16;

/// Minimum terminal height for rendering with header.
///
/// When terminal height is between `MIN_HEIGHT` and `MIN_HEIGHT_WITH_HEADER`,
/// we hide the header to reclaim 3 rows of content space.
pub const MIN_HEIGHT_WITH_HEADER: u16 = MIN_HEIGHT + HEADER_HEIGHT;

/// Minimum terminal width for useful rendering.
///
/// The sidebar plus four kanban columns of at least 12 characters.
pub const MIN_WIDTH: u16 = SIDEBAR_WIDTH + 48;
