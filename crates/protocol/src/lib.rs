//! Shared protocol types for the snvl dashboard.
//!
//! This crate holds the data model and the pure logic behind every page:
//! the record view engine used by the data tables, the board partitioner
//! used by the kanban page, and the calendar grid builder. It also defines
//! the messages exchanged between the input layer and the application state.
//!
//! # Overview
//!
//! - [`record`]: the `Record` trait and typed field values
//! - [`view`]: search, filter, sort and pagination over records
//! - [`user`], [`task`], [`event`]: the record kinds
//! - [`board`]: partitioning tasks into columns and moving them
//! - [`calendar`]: month grids and month navigation
//! - [`analytics`]: series shown on the analytics page
//! - [`page`], [`message`]: navigation targets and TUI messages
//! - [`dummy`]: mock data seeded at startup
//! - [`error`]: error types for protocol operations
//!
//! # Examples
//!
//! Moving a task and reading the columns back:
//!
//! ```
//! use snvl_protocol::dummy::mock_board;
//! use snvl_protocol::TaskStatus;
//!
//! let mut board = mock_board();
//! board.move_task(1, TaskStatus::Done);
//!
//! let columns = board.lanes();
//! assert_eq!(columns[3].0, TaskStatus::Done);
//! assert_eq!(columns[3].1.len(), 2);
//! ```

pub mod analytics;
pub mod board;
pub mod calendar;
pub mod dummy;
pub mod error;
pub mod event;
pub mod message;
pub mod page;
pub mod record;
pub mod task;
pub mod user;
pub mod view;

// Re-export primary types at crate root for convenience
pub use analytics::{AnalyticsData, BehaviorStat, MetricCard, MonthlyTraffic, TrafficSource, Trend};
pub use board::{KanbanBoard, partition, reassign};
pub use calendar::{
    Dated, Day, WeekStart, build_grid, build_padded_grid, items_on, month_start, next_month,
    prev_month,
};
pub use error::{ProtocolError, Result};
pub use event::{Event, EventField, EventKind};
pub use message::Message;
pub use page::Page;
pub use record::{FieldValue, NEVER, Record, RecordId};
pub use task::{Priority, Task, TaskField, TaskId, TaskStatus};
pub use user::{Role, User, UserField, UserStatus};
pub use view::{Filter, RecordView, SortDirection, SortSpec, ViewQuery, matches, view};
