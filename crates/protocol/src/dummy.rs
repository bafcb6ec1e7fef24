//! Mock data seeded into the dashboard at startup.
//!
//! Everything here is static sample content; nothing is loaded from or
//! saved to disk.
//!
//! # Examples
//!
//! ```
//! use snvl_protocol::dummy::{mock_board, mock_users};
//!
//! assert_eq!(mock_users().len(), 8);
//! assert_eq!(mock_board().total_tasks(), 5);
//! ```

use chrono::{NaiveDate, NaiveTime};

use crate::analytics::{
    AnalyticsData, BehaviorStat, MetricCard, MonthlyTraffic, TrafficSource, Trend,
};
use crate::board::KanbanBoard;
use crate::event::{Event, EventKind};
use crate::record::RecordId;
use crate::task::{Priority, Task, TaskStatus};
use crate::user::{Role, User, UserStatus};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("mock dates are valid")
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("mock times are valid")
}

fn user(
    id: RecordId,
    name: &str,
    role: Role,
    status: UserStatus,
    join_date: NaiveDate,
    last_login: Option<NaiveDate>,
) -> User {
    let first = name.split_whitespace().next().unwrap_or(name).to_lowercase();
    User {
        id,
        name: name.to_string(),
        email: format!("{first}@example.com"),
        role,
        status,
        join_date,
        last_login,
    }
}

/// Returns the eight users of the data tables page.
#[must_use]
pub fn mock_users() -> Vec<User> {
    use Role::{Admin, Editor};
    use UserStatus::{Active, Inactive, Pending};

    vec![
        user(1, "John Doe", Admin, Active, ymd(2023, 1, 15), Some(ymd(2024, 1, 10))),
        user(2, "Jane Smith", Role::User, Active, ymd(2023, 3, 20), Some(ymd(2024, 1, 9))),
        user(3, "Bob Johnson", Editor, Inactive, ymd(2023, 2, 10), Some(ymd(2023, 12, 15))),
        user(4, "Alice Brown", Role::User, Pending, ymd(2024, 1, 5), None),
        user(5, "Charlie Wilson", Admin, Active, ymd(2022, 11, 30), Some(ymd(2024, 1, 8))),
        user(6, "Diana Miller", Editor, Active, ymd(2023, 6, 15), Some(ymd(2024, 1, 7))),
        user(7, "Edward Davis", Role::User, Inactive, ymd(2023, 4, 22), Some(ymd(2023, 11, 20))),
        user(8, "Fiona Garcia", Role::User, Active, ymd(2023, 8, 10), Some(ymd(2024, 1, 6))),
    ]
}

/// A builder for creating tasks with specific columns and metadata.
struct TaskBuilder {
    task: Task,
}

impl TaskBuilder {
    fn new(id: RecordId, title: &str, description: &str) -> Self {
        Self {
            task: Task::new(id, title, description),
        }
    }

    fn status(mut self, status: TaskStatus) -> Self {
        self.task.status = status;
        self
    }

    fn priority(mut self, priority: Priority) -> Self {
        self.task.priority = priority;
        self
    }

    fn assignee(mut self, assignee: &str) -> Self {
        self.task.assignee = assignee.to_string();
        self
    }

    fn due(mut self, date: NaiveDate) -> Self {
        self.task.due_date = Some(date);
        self
    }

    fn tags(mut self, tags: &[&str]) -> Self {
        self.task.tags = tags.iter().map(ToString::to_string).collect();
        self
    }

    fn build(self) -> Task {
        self.task
    }
}

/// Returns the five tasks of the kanban page, in board order.
#[must_use]
pub fn mock_tasks() -> Vec<Task> {
    vec![
        TaskBuilder::new(
            1,
            "Design Homepage",
            "Create wireframes and mockups for the new homepage",
        )
        .status(TaskStatus::Todo)
        .priority(Priority::High)
        .assignee("John Doe")
        .due(ymd(2024, 1, 20))
        .tags(&["Design", "UI/UX"])
        .build(),
        TaskBuilder::new(
            2,
            "Implement Authentication",
            "Add login and registration functionality",
        )
        .status(TaskStatus::InProgress)
        .priority(Priority::High)
        .assignee("Jane Smith")
        .due(ymd(2024, 1, 25))
        .tags(&["Backend", "Security"])
        .build(),
        TaskBuilder::new(
            3,
            "Write Unit Tests",
            "Create comprehensive test suite for API endpoints",
        )
        .status(TaskStatus::Todo)
        .priority(Priority::Medium)
        .assignee("Bob Johnson")
        .due(ymd(2024, 1, 30))
        .tags(&["Testing", "Backend"])
        .build(),
        TaskBuilder::new(4, "Code Review", "Review pull requests from the team")
            .status(TaskStatus::Review)
            .priority(Priority::Medium)
            .assignee("Alice Brown")
            .due(ymd(2024, 1, 18))
            .tags(&["Review", "Quality"])
            .build(),
        TaskBuilder::new(
            5,
            "Deploy to Production",
            "Deploy the latest version to production environment",
        )
        .status(TaskStatus::Done)
        .priority(Priority::High)
        .assignee("Charlie Wilson")
        .due(ymd(2024, 1, 15))
        .tags(&["DevOps", "Deployment"])
        .build(),
    ]
}

/// Returns the mock tasks on a board.
#[must_use]
pub fn mock_board() -> KanbanBoard {
    KanbanBoard::new(mock_tasks())
}

/// Returns the four calendar events, all in January 2024.
#[must_use]
pub fn mock_events() -> Vec<Event> {
    let event = |id, title: &str, description: &str, date, time, kind, location: Option<&str>| {
        Event {
            id,
            title: title.to_string(),
            description: description.to_string(),
            date,
            time,
            kind,
            location: location.map(str::to_string),
        }
    };

    vec![
        event(
            1,
            "Team Standup",
            "Daily team sync meeting",
            ymd(2024, 1, 15),
            hm(9, 0),
            EventKind::Meeting,
            Some("Conference Room A"),
        ),
        event(
            2,
            "Project Deadline",
            "Final submission for Q1 project",
            ymd(2024, 1, 20),
            hm(17, 0),
            EventKind::Deadline,
            None,
        ),
        event(
            3,
            "Company All-Hands",
            "Quarterly company meeting",
            ymd(2024, 1, 25),
            hm(14, 0),
            EventKind::Event,
            Some("Main Auditorium"),
        ),
        event(
            4,
            "Code Review",
            "Review pending pull requests",
            ymd(2024, 1, 18),
            hm(11, 0),
            EventKind::Meeting,
            None,
        ),
    ]
}

/// Returns the figures of the analytics page.
#[must_use]
pub fn mock_analytics() -> AnalyticsData {
    let metric = |title: &str, value: &str, change: &str, trend| MetricCard {
        title: title.to_string(),
        value: value.to_string(),
        change: change.to_string(),
        trend,
    };
    let month = |month: &str, page_views, unique_visitors, bounce_rate| MonthlyTraffic {
        month: month.to_string(),
        page_views,
        unique_visitors,
        bounce_rate,
    };
    let source = |source: &str, visitors, percentage| TrafficSource {
        source: source.to_string(),
        visitors,
        percentage,
    };
    let stat = |value: &str, label: &str| BehaviorStat {
        value: value.to_string(),
        label: label.to_string(),
    };

    AnalyticsData {
        metrics: vec![
            metric("Total Page Views", "1,234,567", "+12.5%", Trend::Up),
            metric("Unique Visitors", "456,789", "+8.2%", Trend::Up),
            metric("Bounce Rate", "42.3%", "-2.1%", Trend::Down),
            metric("Avg. Session Duration", "3m 24s", "+15.3%", Trend::Up),
        ],
        monthly: vec![
            month("Jan", 4000, 2400, 45),
            month("Feb", 3000, 1398, 42),
            month("Mar", 2000, 9800, 38),
            month("Apr", 2780, 3908, 35),
            month("May", 1890, 4800, 40),
            month("Jun", 2390, 3800, 43),
        ],
        sources: vec![
            source("Organic Search", 4500, 45),
            source("Direct", 2800, 28),
            source("Social Media", 1500, 15),
            source("Email", 800, 8),
            source("Referral", 400, 4),
        ],
        behavior: vec![
            stat("67%", "Return Visitors"),
            stat("4.2", "Avg. Pages/Session"),
            stat("89%", "Mobile Users"),
        ],
    }
}
