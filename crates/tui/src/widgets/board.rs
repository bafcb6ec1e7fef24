//! Kanban board rendering widget.
//!
//! The four workflow columns sit side by side with equal widths.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
};
use snvl_protocol::{KanbanBoard, TaskStatus};

use super::lane::{
    LaneFocus, LanePosition, calculate_scroll_offset, cards_area, lane_inner, render_lane,
    visible_cards,
};
use crate::board_state::BoardState;
use crate::layout::TASK_CARD_HEIGHT;
use crate::theme::Palette;

fn lane_areas(area: Rect) -> Vec<Rect> {
    let count = TaskStatus::all().len();
    Layout::horizontal((0..count).map(|_| Constraint::Ratio(1, count as u32)))
        .split(area)
        .to_vec()
}

fn lane_focus(state: &BoardState, idx: usize) -> LaneFocus {
    let focused = state.selected_lane == idx;
    LaneFocus {
        focused,
        prev_focused: idx > 0 && state.selected_lane == idx - 1,
        selected: if focused { state.selected_task } else { None },
        carried: state.carried,
    }
}

/// Renders the whole board with the focused column and card highlighted.
///
/// ```text
/// ╭To Do (2)─────┬In Progress (1)┬Review (1)────┬Done (1)─────╮
/// │╭───────────╮ │╭───────────╮  │╭──────────╮  │╭──────────╮ │
/// ││Design Home│ ││Implement..│  ││Code Rev..│  ││Deploy t..│ │
/// ```
pub fn render_board(
    board: &KanbanBoard,
    state: &BoardState,
    palette: &Palette,
    area: Rect,
    buf: &mut Buffer,
) {
    let lanes = board.lanes();
    let areas = lane_areas(area);
    for (idx, ((status, tasks), lane_area)) in lanes.iter().zip(areas.iter()).enumerate() {
        render_lane(
            *status,
            tasks,
            &lane_focus(state, idx),
            LanePosition::of(idx, lanes.len()),
            palette,
            *lane_area,
            buf,
        );
    }
}

/// Returns the column and card index under (`column`, `row`) of a board
/// drawn by [`render_board`] over `area`.
///
/// The card index is `None` when the click hits a column outside its cards.
#[must_use]
pub fn card_at(
    board: &KanbanBoard,
    state: &BoardState,
    area: Rect,
    column: u16,
    row: u16,
) -> Option<(usize, Option<usize>)> {
    let position = Position::new(column, row);
    let areas = lane_areas(area);
    let lane = areas.iter().position(|lane| lane.contains(position))?;
    let status = TaskStatus::from_index(lane)?;

    let focus = lane_focus(state, lane);
    let cards = cards_area(lane_inner(areas[lane], LanePosition::of(lane, areas.len())), &focus);
    if !cards.contains(position) {
        return Some((lane, None));
    }

    let total = board.lane(status).len();
    let visible = visible_cards(cards);
    let offset = calculate_scroll_offset(focus.selected, total, visible);
    let slot = usize::from((row - cards.y) / TASK_CARD_HEIGHT);
    let idx = offset + slot;
    Some((lane, (slot < visible && idx < total).then_some(idx)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use snvl_config::Theme;
    use snvl_protocol::dummy::mock_board;

    use crate::test_utils::render_to_string;

    fn render(board: &KanbanBoard, state: &BoardState) -> String {
        let palette = Palette::of(Theme::Dark);
        render_to_string(100, 20, |area, buf| {
            render_board(board, state, &palette, area, buf);
        })
    }

    #[test]
    fn board_shows_every_column_with_counts() {
        let content = render(&mock_board(), &BoardState::default());

        assert!(content.contains("To Do (2)"));
        assert!(content.contains("In Progress (1)"));
        assert!(content.contains("Review (1)"));
        assert!(content.contains("Done (1)"));
    }

    #[test]
    fn empty_board_shows_placeholders() {
        let content = render(&KanbanBoard::default(), &BoardState::default());
        assert_eq!(content.matches("No tasks").count(), 4);
    }

    #[test]
    fn moved_card_is_drawn_in_new_column() {
        let mut board = mock_board();
        board.move_task(1, TaskStatus::Done);

        let content = render(&board, &BoardState::default());

        assert!(content.contains("To Do (1)"));
        assert!(content.contains("Done (2)"));
    }

    #[test]
    fn narrow_board_does_not_panic() {
        let palette = Palette::of(Theme::Light);
        render_to_string(20, 5, |area, buf| {
            render_board(&mock_board(), &BoardState::default(), &palette, area, buf);
        });
    }

    #[test]
    fn card_at_maps_clicks_to_cards() {
        let board = mock_board();
        let state = BoardState::default();
        let area = Rect::new(0, 0, 100, 20);

        // First column spans x 0..25; its cards start below the top border.
        assert_eq!(card_at(&board, &state, area, 5, 2), Some((0, Some(0))));
        assert_eq!(card_at(&board, &state, area, 5, 1 + TASK_CARD_HEIGHT), Some((0, Some(1))));
        assert_eq!(card_at(&board, &state, area, 5, 1 + 2 * TASK_CARD_HEIGHT), Some((0, None)));
        assert_eq!(card_at(&board, &state, area, 80, 2), Some((3, Some(0))));
        assert_eq!(card_at(&board, &state, area, 30, 0), Some((1, None)));
        assert_eq!(card_at(&board, &state, area, 5, 30), None);
    }
}
