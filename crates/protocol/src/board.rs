//! Kanban board partitioning and task movement.
//!
//! The board keeps tasks in a single collection in their original order.
//! Columns are derived on demand with [`partition`], so the relative order
//! of tasks within a column always matches the collection order.

use serde::{Deserialize, Serialize};

use crate::task::{Task, TaskId, TaskStatus};

/// Groups `tasks` by status, in the order given by `statuses`.
///
/// Every returned group preserves the original relative order of its tasks.
/// Tasks whose status is not listed in `statuses` are omitted.
///
/// # Examples
///
/// ```
/// use snvl_protocol::{Task, TaskStatus, partition};
///
/// let mut a = Task::new(1, "A", "");
/// let b = Task::new(2, "B", "");
/// a.status = TaskStatus::Done;
/// let tasks = vec![a, b];
///
/// let groups = partition(&tasks, &[TaskStatus::Todo, TaskStatus::Done]);
/// assert_eq!(groups[0].0, TaskStatus::Todo);
/// assert_eq!(groups[0].1[0].id, 2);
/// assert_eq!(groups[1].1[0].id, 1);
/// ```
#[must_use]
pub fn partition<'a>(
    tasks: &'a [Task],
    statuses: &[TaskStatus],
) -> Vec<(TaskStatus, Vec<&'a Task>)> {
    statuses
        .iter()
        .map(|&status| {
            let group = tasks.iter().filter(|task| task.status == status).collect();
            (status, group)
        })
        .collect()
}

/// Returns a copy of `tasks` where the task with `id` has `new_status`.
///
/// Every other task, and every other field of the moved task, is unchanged.
/// If no task has `id`, the copy is identical to the input.
///
/// # Examples
///
/// ```
/// use snvl_protocol::{Task, TaskStatus, reassign};
///
/// let tasks = vec![Task::new(1, "A", ""), Task::new(2, "B", "")];
/// let moved = reassign(&tasks, 2, TaskStatus::Review);
///
/// assert_eq!(moved[0], tasks[0]);
/// assert_eq!(moved[1].status, TaskStatus::Review);
/// ```
#[must_use]
pub fn reassign(tasks: &[Task], id: TaskId, new_status: TaskStatus) -> Vec<Task> {
    tasks
        .iter()
        .map(|task| {
            if task.id == id {
                Task {
                    status: new_status,
                    ..task.clone()
                }
            } else {
                task.clone()
            }
        })
        .collect()
}

/// A Kanban board with the four fixed status columns.
///
/// # Examples
///
/// ```
/// use snvl_protocol::{KanbanBoard, Task, TaskStatus};
///
/// let mut board = KanbanBoard::new(vec![Task::new(1, "Design", "")]);
/// assert!(board.move_task(1, TaskStatus::InProgress));
/// assert_eq!(board.lane(TaskStatus::InProgress).len(), 1);
/// assert!(board.lane(TaskStatus::Todo).is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KanbanBoard {
    tasks: Vec<Task>,
}

impl KanbanBoard {
    /// Creates a board over `tasks`, keeping their order.
    #[must_use]
    pub const fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Returns every task in collection order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the tasks of one column, in collection order.
    #[must_use]
    pub fn lane(&self, status: TaskStatus) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.status == status)
            .collect()
    }

    /// Returns all four columns in workflow order.
    #[must_use]
    pub fn lanes(&self) -> Vec<(TaskStatus, Vec<&Task>)> {
        partition(&self.tasks, &TaskStatus::all())
    }

    /// Finds a task by ID.
    #[must_use]
    pub fn get_task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Moves a task to another column.
    ///
    /// Only the status of the matching task changes; its position in the
    /// collection is kept. Returns `true` if the task was found.
    pub fn move_task(&mut self, id: TaskId, to: TaskStatus) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return false;
        };
        task.status = to;
        true
    }

    /// Returns the total number of tasks across all columns.
    #[must_use]
    pub fn total_tasks(&self) -> usize {
        self.tasks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dummy::mock_tasks;

    fn ids(group: &[&Task]) -> Vec<TaskId> {
        group.iter().map(|task| task.id).collect()
    }

    #[test]
    fn partition_mock_tasks_by_column() {
        let tasks = mock_tasks();

        let groups = partition(&tasks, &TaskStatus::all());

        let summary: Vec<_> = groups
            .iter()
            .map(|(status, group)| (*status, ids(group)))
            .collect();
        insta::assert_debug_snapshot!(summary, @r"
        [
            (
                Todo,
                [
                    1,
                    3,
                ],
            ),
            (
                InProgress,
                [
                    2,
                ],
            ),
            (
                Review,
                [
                    4,
                ],
            ),
            (
                Done,
                [
                    5,
                ],
            ),
        ]
        ");
    }

    #[test]
    fn partition_follows_requested_order_and_omits_unlisted() {
        let tasks = mock_tasks();

        let groups = partition(&tasks, &[TaskStatus::Done, TaskStatus::Todo]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, TaskStatus::Done);
        assert_eq!(ids(&groups[1].1), vec![1, 3]);
    }

    #[test]
    fn reassign_changes_exactly_one_task() {
        let tasks = mock_tasks();

        let moved = reassign(&tasks, 1, TaskStatus::InProgress);

        assert_eq!(moved[0].status, TaskStatus::InProgress);
        assert_eq!(moved[0].title, tasks[0].title);
        assert_eq!(&moved[1..], &tasks[1..]);
    }

    #[test]
    fn reassign_missing_id_is_noop() {
        let tasks = mock_tasks();
        assert_eq!(reassign(&tasks, 999, TaskStatus::Done), tasks);
    }

    #[test]
    fn board_move_keeps_collection_order() {
        let mut board = KanbanBoard::new(mock_tasks());

        assert!(board.move_task(3, TaskStatus::Done));

        assert_eq!(ids(&board.lane(TaskStatus::Done)), vec![3, 5]);
        assert_eq!(ids(&board.lane(TaskStatus::Todo)), vec![1]);
        assert_eq!(board.total_tasks(), 5);
    }

    #[test]
    fn board_move_nonexistent_task() {
        let mut board = KanbanBoard::new(mock_tasks());
        let before = board.clone();

        assert!(!board.move_task(42, TaskStatus::Done));
        assert_eq!(board, before);
    }

    #[test]
    fn board_move_matches_reassign() {
        let tasks = mock_tasks();
        let mut board = KanbanBoard::new(tasks.clone());

        board.move_task(4, TaskStatus::Todo);

        assert_eq!(board.tasks(), reassign(&tasks, 4, TaskStatus::Todo).as_slice());
    }
}
