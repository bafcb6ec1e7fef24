//! Kanban column rendering widget.
//!
//! Adjacent columns share their borders: every column draws its left edge
//! and only the last one draws a right edge.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use snvl_protocol::{Task, TaskId, TaskStatus};

use super::task_card::{CardFocus, render_task_card};
use crate::layout::TASK_CARD_HEIGHT;
use crate::theme::{Palette, status_color};

/// Position of a column in the horizontal layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanePosition {
    /// Leftmost column: rounded corners on the left, no right border.
    First,
    /// Inner columns: T-connectors on the left, no right border.
    Middle,
    /// Rightmost column: T-connectors on the left, rounded on the right.
    Last,
}

impl LanePosition {
    /// Returns the position of column `idx` out of `count`.
    #[must_use]
    pub const fn of(idx: usize, count: usize) -> Self {
        if idx == 0 {
            Self::First
        } else if idx + 1 == count {
            Self::Last
        } else {
            Self::Middle
        }
    }

    const fn borders(self) -> Borders {
        match self {
            Self::First | Self::Middle => Borders::TOP.union(Borders::BOTTOM).union(Borders::LEFT),
            Self::Last => Borders::ALL,
        }
    }
}

const BORDER_SET_FIRST: border::Set = border::Set {
    top_left: "╭",
    top_right: "─",
    bottom_left: "╰",
    bottom_right: "─",
    vertical_left: "│",
    vertical_right: " ",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

const BORDER_SET_MIDDLE: border::Set = border::Set {
    top_left: "┬",
    top_right: "─",
    bottom_left: "┴",
    bottom_right: "─",
    vertical_left: "│",
    vertical_right: " ",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

const BORDER_SET_LAST: border::Set = border::Set {
    top_left: "┬",
    top_right: "╮",
    bottom_left: "┴",
    bottom_right: "╯",
    vertical_left: "│",
    vertical_right: "│",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// What a column needs to know about the board focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneFocus {
    /// Whether this column is focused.
    pub focused: bool,
    /// Whether the column on the left is focused; it shares our left border.
    pub prev_focused: bool,
    /// Index of the focused card, only set on the focused column.
    pub selected: Option<usize>,
    /// The card currently picked up, wherever it sits.
    pub carried: Option<TaskId>,
}

/// Returns the area inside the borders of a column drawn at `area`.
#[must_use]
pub fn lane_inner(area: Rect, position: LanePosition) -> Rect {
    Block::default().borders(position.borders()).inner(area)
}

/// Returns the area the cards of a column take, leaving room for the drop
/// hint while a card is carried onto it.
#[must_use]
pub fn cards_area(inner: Rect, focus: &LaneFocus) -> Rect {
    if focus.focused && focus.carried.is_some() {
        let [cards, _] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);
        cards
    } else {
        inner
    }
}

/// Returns how many cards fit in `area`.
#[must_use]
pub fn visible_cards(area: Rect) -> usize {
    usize::from((area.height / TASK_CARD_HEIGHT).max(1))
}

/// Renders one column: the header with its card count, then its cards.
///
/// ```text
/// ╭In Progress (1)──
/// │╭──────────────╮
/// ││Implement Auth│
/// ││● high      JS│
/// │╰──────────────╯
/// ╰─────────────────
/// ```
pub fn render_lane(
    status: TaskStatus,
    tasks: &[&Task],
    focus: &LaneFocus,
    position: LanePosition,
    palette: &Palette,
    area: Rect,
    buf: &mut Buffer,
) {
    let title_style = if focus.focused {
        Style::default()
            .fg(status_color(status))
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().fg(status_color(status))
    };
    let title = format!("{} ({})", status.display_name(), tasks.len());

    let border_set = match position {
        LanePosition::First => BORDER_SET_FIRST,
        LanePosition::Middle => BORDER_SET_MIDDLE,
        LanePosition::Last => BORDER_SET_LAST,
    };

    Block::default()
        .title(Span::styled(title, title_style))
        .borders(position.borders())
        .border_set(border_set)
        .border_style(palette.border(focus.focused))
        .render(area, buf);

    // The left border is shared with the previous column.
    if focus.prev_focused && !focus.focused && area.width > 0 {
        for y in area.y..area.y.saturating_add(area.height) {
            if let Some(cell) = buf.cell_mut((area.x, y)) {
                cell.set_style(palette.border(true));
            }
        }
    }

    let inner = lane_inner(area, position);
    let cards = cards_area(inner, focus);

    if cards.height < inner.height {
        let hint = Rect { y: cards.bottom(), height: 1, ..inner };
        Paragraph::new(Line::from(Span::styled(
            "▼ drop here (Space)",
            palette.key().add_modifier(Modifier::ITALIC),
        )))
        .render(hint, buf);
    }

    if tasks.is_empty() {
        Paragraph::new(Line::from(Span::styled(
            "No tasks",
            palette.muted().add_modifier(Modifier::ITALIC),
        )))
        .render(cards, buf);
        return;
    }

    let visible = visible_cards(cards);
    let offset = calculate_scroll_offset(focus.selected, tasks.len(), visible);
    let mut constraints: Vec<Constraint> = (0..visible)
        .map(|_| Constraint::Length(TASK_CARD_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0));
    let card_areas = Layout::vertical(constraints).split(cards);

    let shown = tasks.iter().skip(offset).zip(card_areas.iter().take(visible));
    for (i, (task, card_area)) in shown.enumerate() {
        let card_focus = if focus.carried == Some(task.id) {
            CardFocus::Carried
        } else if focus.selected == Some(offset + i) {
            CardFocus::Selected
        } else {
            CardFocus::None
        };
        render_task_card(task, card_focus, palette, *card_area, buf);
    }
}

/// Calculates the scroll offset that keeps the selected card visible.
#[must_use]
pub fn calculate_scroll_offset(selected: Option<usize>, total: usize, visible: usize) -> usize {
    let Some(selected) = selected else {
        return 0;
    };
    if total <= visible {
        return 0;
    }

    let max_offset = total.saturating_sub(visible);
    if selected < visible / 2 {
        0
    } else {
        selected.saturating_sub(visible / 2).min(max_offset)
    }
}
