//! State of the kanban page.
//!
//! Cards are moved with a keyboard pick-up / drop: `Space` picks up the
//! focused card, the user walks to another column and `Space` drops it
//! there.

use snvl_protocol::{KanbanBoard, Task, TaskId, TaskStatus};

/// Focus, carried card and detail visibility of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardState {
    /// Index of the focused column (0-3, in workflow order).
    pub selected_lane: usize,
    /// Index of the focused card within the focused column, if any.
    pub selected_task: Option<usize>,
    /// The card picked up and waiting to be dropped.
    pub carried: Option<TaskId>,
    /// Whether the details of the focused card are shown.
    pub detail_visible: bool,
}

impl BoardState {
    /// Returns the status of the focused column.
    #[must_use]
    pub fn selected_status(&self) -> TaskStatus {
        TaskStatus::from_index(self.selected_lane).unwrap_or_default()
    }

    /// Returns the focused card.
    #[must_use]
    pub fn selected_task<'a>(&self, board: &'a KanbanBoard) -> Option<&'a Task> {
        let idx = self.selected_task?;
        board.lane(self.selected_status()).get(idx).copied()
    }

    /// Moves the focus to the column on the left, wrapping around.
    pub fn navigate_left(&mut self, board: &KanbanBoard) {
        let count = TaskStatus::all().len();
        self.selected_lane = (self.selected_lane + count - 1) % count;
        self.clamp_task_selection(board);
    }

    /// Moves the focus to the column on the right, wrapping around.
    pub fn navigate_right(&mut self, board: &KanbanBoard) {
        self.selected_lane = (self.selected_lane + 1) % TaskStatus::all().len();
        self.clamp_task_selection(board);
    }

    /// Focuses the previous card of the column, wrapping to the last.
    pub fn navigate_up(&mut self, board: &KanbanBoard) {
        let len = board.lane(self.selected_status()).len();
        self.selected_task = match (len, self.selected_task) {
            (0, _) => None,
            (_, Some(idx)) if idx > 0 => Some(idx - 1),
            (_, Some(_)) => Some(len - 1),
            (_, None) => Some(0),
        };
    }

    /// Focuses the next card of the column, wrapping to the first.
    pub fn navigate_down(&mut self, board: &KanbanBoard) {
        let len = board.lane(self.selected_status()).len();
        self.selected_task = match (len, self.selected_task) {
            (0, _) => None,
            (_, Some(idx)) if idx + 1 < len => Some(idx + 1),
            _ => Some(0),
        };
    }

    /// Picks up the focused card, or drops the carried card on the focused
    /// column. Dropping with nothing carried is a no-op.
    pub fn toggle_carry(&mut self, board: &mut KanbanBoard) {
        match self.carried {
            Some(id) => self.drop_on_selected(board, id),
            None => {
                self.carried = self.selected_task(board).map(|task| task.id);
                if let Some(id) = self.carried {
                    tracing::debug!(task = id, "picked up card");
                }
            }
        }
    }

    /// Puts the carried card back without moving it.
    ///
    /// Returns `true` if a card was being carried.
    pub fn cancel_carry(&mut self) -> bool {
        self.carried.take().is_some()
    }

    /// Toggles the details of the focused card.
    pub fn toggle_detail(&mut self, board: &KanbanBoard) {
        self.detail_visible = !self.detail_visible && self.selected_task(board).is_some();
    }

    fn drop_on_selected(&mut self, board: &mut KanbanBoard, id: TaskId) {
        self.carried = None;
        let to = self.selected_status();
        if board.move_task(id, to) {
            tracing::info!(task = id, status = %to, "moved card");
            // Keep the dropped card focused.
            self.selected_task = board.lane(to).iter().position(|task| task.id == id);
        }
    }

    /// Ensures the card selection is valid for the focused column.
    fn clamp_task_selection(&mut self, board: &KanbanBoard) {
        let len = board.lane(self.selected_status()).len();
        if len == 0 {
            self.selected_task = None;
        } else if let Some(idx) = self.selected_task
            && idx >= len
        {
            self.selected_task = Some(len - 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snvl_protocol::dummy::mock_board;

    fn titles(board: &KanbanBoard, status: TaskStatus) -> Vec<&str> {
        board
            .lane(status)
            .iter()
            .map(|task| task.title.as_str())
            .collect()
    }

    #[test]
    fn navigate_left_wraps_around() {
        let board = mock_board();
        let mut state = BoardState::default();

        state.navigate_left(&board);
        assert_eq!(state.selected_status(), TaskStatus::Done);

        state.navigate_left(&board);
        assert_eq!(state.selected_status(), TaskStatus::Review);
    }

    #[test]
    fn navigate_right_clamps_card_selection() {
        let board = mock_board();
        let mut state = BoardState::default();
        state.navigate_down(&board);
        state.navigate_down(&board);
        assert_eq!(state.selected_task, Some(1));

        state.navigate_right(&board);
        assert_eq!(state.selected_task, Some(0));
    }

    #[test]
    fn navigate_up_down_wraps() {
        let board = mock_board();
        let mut state = BoardState::default();

        state.navigate_down(&board);
        assert_eq!(state.selected_task, Some(0));
        state.navigate_down(&board);
        state.navigate_down(&board);
        assert_eq!(state.selected_task, Some(0));

        state.navigate_up(&board);
        assert_eq!(state.selected_task, Some(1));
    }

    #[test]
    fn navigate_in_empty_column_clears_selection() {
        let mut board = mock_board();
        board.move_task(5, TaskStatus::Todo);
        let mut state = BoardState {
            selected_lane: 3,
            ..BoardState::default()
        };

        state.navigate_down(&board);
        assert_eq!(state.selected_task, None);
    }

    #[test]
    fn pick_up_and_drop_moves_card() {
        let mut board = mock_board();
        let mut state = BoardState::default();
        state.navigate_down(&board);

        state.toggle_carry(&mut board);
        assert_eq!(state.carried, Some(1));

        state.navigate_right(&board);
        state.navigate_right(&board);
        state.toggle_carry(&mut board);

        assert_eq!(state.carried, None);
        assert_eq!(titles(&board, TaskStatus::Todo), vec!["Write Unit Tests"]);
        assert_eq!(
            titles(&board, TaskStatus::Review),
            vec!["Design Homepage", "Code Review"]
        );
        assert_eq!(state.selected_task, Some(0));
    }

    #[test]
    fn drop_without_carry_is_noop() {
        let mut board = mock_board();
        let before = board.clone();
        let mut state = BoardState {
            selected_lane: 2,
            ..BoardState::default()
        };

        state.toggle_carry(&mut board);

        assert_eq!(board, before);
        assert_eq!(state.carried, None);
    }

    #[test]
    fn cancel_carry_leaves_board_untouched() {
        let mut board = mock_board();
        let before = board.clone();
        let mut state = BoardState::default();
        state.navigate_down(&board);
        state.toggle_carry(&mut board);
        state.navigate_right(&board);

        assert!(state.cancel_carry());
        assert!(!state.cancel_carry());
        assert_eq!(board, before);
    }

    #[test]
    fn dropping_on_same_column_keeps_order() {
        let mut board = mock_board();
        let before = board.clone();
        let mut state = BoardState::default();
        state.navigate_down(&board);

        state.toggle_carry(&mut board);
        state.toggle_carry(&mut board);

        assert_eq!(board, before);
    }

    #[test]
    fn detail_requires_selected_card() {
        let board = mock_board();
        let mut state = BoardState::default();

        state.toggle_detail(&board);
        assert!(!state.detail_visible);

        state.navigate_down(&board);
        state.toggle_detail(&board);
        assert!(state.detail_visible);
        state.toggle_detail(&board);
        assert!(!state.detail_visible);
    }
}
