//! Task-related types for the Kanban board.
//!
//! This module defines the workflow status of a task, its priority, and the
//! task structure itself.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;
use crate::record::{FieldValue, Record, RecordId};

/// Identifier of a task.
pub type TaskId = RecordId;

/// The workflow status of a task, one per board column.
///
/// The order reflects the progression of work.
///
/// # Examples
///
/// ```
/// use snvl_protocol::TaskStatus;
///
/// let status = TaskStatus::InProgress;
/// assert_eq!(status.display_name(), "In Progress");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Not started yet.
    #[default]
    Todo,
    /// Being worked on.
    InProgress,
    /// Awaiting review.
    Review,
    /// Finished.
    Done,
}

impl TaskStatus {
    /// Returns all statuses in workflow order.
    ///
    /// # Examples
    ///
    /// ```
    /// use snvl_protocol::TaskStatus;
    ///
    /// let all = TaskStatus::all();
    /// assert_eq!(all.len(), 4);
    /// assert_eq!(all[0], TaskStatus::Todo);
    /// ```
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Todo, Self::InProgress, Self::Review, Self::Done]
    }

    /// Returns the column title for this status.
    ///
    /// # Examples
    ///
    /// ```
    /// use snvl_protocol::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::Todo.display_name(), "To Do");
    /// assert_eq!(TaskStatus::Review.display_name(), "Review");
    /// ```
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Review => "Review",
            Self::Done => "Done",
        }
    }

    /// Returns the machine name of this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Review => "review",
            Self::Done => "done",
        }
    }

    /// Returns the index of this status in the workflow (0-3).
    ///
    /// # Examples
    ///
    /// ```
    /// use snvl_protocol::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::Todo.index(), 0);
    /// assert_eq!(TaskStatus::Done.index(), 3);
    /// ```
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Todo => 0,
            Self::InProgress => 1,
            Self::Review => 2,
            Self::Done => 3,
        }
    }

    /// Creates a `TaskStatus` from its index.
    ///
    /// Returns `None` if the index is out of range (>= 4).
    ///
    /// # Examples
    ///
    /// ```
    /// use snvl_protocol::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::from_index(0), Some(TaskStatus::Todo));
    /// assert_eq!(TaskStatus::from_index(4), None);
    /// ```
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Todo),
            1 => Some(Self::InProgress),
            2 => Some(Self::Review),
            3 => Some(Self::Done),
            _ => None,
        }
    }

    /// Returns the next status in the workflow, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use snvl_protocol::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::Todo.next(), Some(TaskStatus::InProgress));
    /// assert_eq!(TaskStatus::Done.next(), None);
    /// ```
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Returns the previous status in the workflow, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use snvl_protocol::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::InProgress.previous(), Some(TaskStatus::Todo));
    /// assert_eq!(TaskStatus::Todo.previous(), None);
    /// ```
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self.index().checked_sub(1) {
            Some(idx) => Self::from_index(idx),
            None => None,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::all()
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| ProtocolError::UnknownStatus(s.to_string()))
    }
}

/// How urgent a task is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Can wait.
    Low,
    /// Normal urgency.
    #[default]
    Medium,
    /// Needs attention first.
    High,
}

impl Priority {
    /// Returns the badge text for this priority.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A task on the Kanban board.
///
/// # Examples
///
/// ```
/// use snvl_protocol::{Task, TaskStatus};
///
/// let task = Task::new(1, "Design Homepage", "Create wireframes");
/// assert_eq!(task.status, TaskStatus::Todo);
/// assert!(task.tags.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier for this task.
    pub id: TaskId,
    /// Short summary of the task.
    pub title: String,
    /// Detailed description of what needs to be done.
    pub description: String,
    /// The column this task currently sits in.
    pub status: TaskStatus,
    /// How urgent the task is.
    pub priority: Priority,
    /// Full name of the person working on the task.
    pub assignee: String,
    /// The day the task is due, if any.
    pub due_date: Option<NaiveDate>,
    /// Free-form labels.
    pub tags: Vec<String>,
}

impl Task {
    /// Creates an unassigned, medium-priority task in the `Todo` column.
    #[must_use]
    pub fn new(id: TaskId, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            status: TaskStatus::Todo,
            priority: Priority::Medium,
            assignee: String::new(),
            due_date: None,
            tags: Vec::new(),
        }
    }

    /// Returns the uppercase initials of the assignee.
    ///
    /// # Examples
    ///
    /// ```
    /// use snvl_protocol::Task;
    ///
    /// let mut task = Task::new(1, "Review", "");
    /// task.assignee = "Charlie Wilson".to_string();
    /// assert_eq!(task.initials(), "CW");
    /// ```
    #[must_use]
    pub fn initials(&self) -> String {
        self.assignee
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// The named fields of a [`Task`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskField {
    /// The task title.
    Title,
    /// The workflow status.
    Status,
    /// The priority.
    Priority,
    /// The assignee's name.
    Assignee,
    /// The due date.
    DueDate,
}

impl Record for Task {
    type Field = TaskField;

    fn id(&self) -> RecordId {
        self.id
    }

    fn searchable_text(&self) -> impl Iterator<Item = &str> {
        [self.title.as_str(), self.description.as_str()]
            .into_iter()
            .chain(self.tags.iter().map(String::as_str))
    }

    fn value(&self, field: TaskField) -> FieldValue<'_> {
        match field {
            TaskField::Title => FieldValue::Text(&self.title),
            TaskField::Status => FieldValue::Text(self.status.as_str()),
            TaskField::Priority => FieldValue::Text(self.priority.as_str()),
            TaskField::Assignee => FieldValue::Text(&self.assignee),
            TaskField::DueDate => FieldValue::Date(self.due_date),
        }
    }
}
