//! Widget components for the dashboard.
//!
//! Every widget is a plain function that draws borrowed state into a
//! [`Buffer`](ratatui::buffer::Buffer), so pages compose by splitting areas
//! and tests render into an in-memory buffer.
//!
//! # Modules
//!
//! - [`sidebar`]: page list on the left
//! - [`analytics`]: metric cards and charts
//! - [`table`]: the searchable, sortable user table
//! - [`calendar`]: month grid and day panel
//! - [`board`], [`lane`], [`task_card`]: the kanban board
//! - [`detail`], [`help`], [`popup`]: overlays
//! - [`status_bar`]: keybinding hints
//!
//! # Example
//!
//! ```
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//! use snvl_config::Theme;
//! use snvl_protocol::dummy::mock_board;
//! use snvl_tui::BoardState;
//! use snvl_tui::theme::Palette;
//! use snvl_tui::widgets;
//!
//! let area = Rect::new(0, 0, 80, 24);
//! let mut buf = Buffer::empty(area);
//!
//! widgets::render_board(
//!     &mock_board(),
//!     &BoardState::default(),
//!     &Palette::of(Theme::Dark),
//!     area,
//!     &mut buf,
//! );
//! ```

pub mod analytics;
pub mod board;
pub mod calendar;
pub mod detail;
pub mod help;
pub mod lane;
pub mod popup;
pub mod sidebar;
pub mod status_bar;
pub mod table;
pub mod task_card;

pub use analytics::render_analytics;
pub use board::{card_at, render_board};
pub use calendar::{date_at, render_calendar};
pub use detail::{render_task_detail, render_user_detail};
pub use help::render_help_overlay;
pub use lane::{LanePosition, render_lane};
pub use sidebar::{page_at, render_sidebar};
pub use status_bar::{hints_for, render_status_bar};
pub use table::render_user_table;
pub use task_card::{CardFocus, render_task_card};
