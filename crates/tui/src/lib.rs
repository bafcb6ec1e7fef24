//! Terminal UI for the snvl dashboard.
//!
//! This crate provides a Ratatui-based interface with four pages reached
//! from a sidebar: analytics, a searchable user table, a month calendar and
//! a kanban board.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Main application struct and run loop
//! - [`state`]: Records and per-page view state
//! - [`analytics_state`], [`table_state`], [`calendar_state`], [`board_state`]: page state
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event handling and key mappings
//! - [`theme`]: Dark and light palettes
//! - [`widgets`]: Rendering functions
//!
//! # Example
//!
//! ```no_run
//! use snvl_tui::{App, Dataset, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let mut app = App::new(Dataset::mock());
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod analytics_state;
pub mod app;
pub mod board_state;
pub mod calendar_state;
pub mod event;
pub mod layout;
pub mod state;
pub mod table_state;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use analytics_state::{AnalyticsState, AnalyticsTab};
pub use app::App;
pub use board_state::BoardState;
pub use calendar_state::CalendarState;
pub use state::{AppState, Dataset};
pub use table_state::TableState;
