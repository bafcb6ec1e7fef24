//! Status bar rendering widget.
//!
//! The footer shows the keybindings that matter on the current page, so the
//! hints change with the page and with the input mode.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use snvl_protocol::Page;

use crate::state::AppState;
use crate::theme::Palette;

/// A key and what it does.
pub type Hint = (&'static str, &'static str);

/// Returns the hints for the current page and mode of `state`.
///
/// # Examples
///
/// ```
/// use std::num::NonZeroUsize;
/// use chrono::NaiveDate;
/// use snvl_config::Theme;
/// use snvl_protocol::Page;
/// use snvl_tui::{AppState, Dataset};
/// use snvl_tui::widgets::status_bar::hints_for;
///
/// let mut state = AppState::new(
///     Dataset::mock(),
///     Page::Tables,
///     Theme::Dark,
///     NonZeroUsize::new(5).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
/// );
/// state.table.start_search();
///
/// assert_eq!(hints_for(&state)[0], ("Enter", "Done"));
/// ```
#[must_use]
pub fn hints_for(state: &AppState) -> Vec<Hint> {
    if state.is_searching() {
        return vec![("Enter", "Done"), ("Backspace", "Delete"), ("Esc", "Done")];
    }

    let mut hints = match state.page {
        Page::Analytics => vec![("←→", "Tabs")],
        Page::Tables if state.table.detail_visible => vec![("Esc", "Close")],
        Page::Tables => vec![
            ("/", "Search"),
            ("s", "Status"),
            ("o", "Role"),
            ("nerj", "Sort"),
            ("[]", "Page"),
            ("Enter", "Details"),
        ],
        Page::Calendar => vec![
            ("←→↑↓", "Day"),
            ("[]", "Month"),
            ("t", "Today"),
            ("Enter", "Select"),
        ],
        Page::Kanban if state.board.carried.is_some() => {
            vec![("←→", "Column"), ("Space", "Drop"), ("Esc", "Cancel")]
        }
        Page::Kanban => vec![
            ("←→↑↓", "Move"),
            ("Space", "Pick up"),
            ("Enter", "Details"),
        ],
    };
    hints.extend([("Tab", "Page"), ("?", "Help"), ("Ctrl+C", "Quit")]);
    hints
}

/// Renders the status bar with keybinding hints.
///
/// ```text
/// ╭──────────────────────────────────────────────────────╮
/// │ / Search  s Status  o Role ... ? Help  Ctrl+C Quit    │
/// ╰──────────────────────────────────────────────────────╯
/// ```
pub fn render_status_bar(hints: &[Hint], palette: &Palette, area: Rect, buf: &mut Buffer) {
    let spans: Vec<Span<'_>> = hints
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(format!(" {key}"), palette.key()),
                Span::styled(format!(" {action} "), palette.text()),
            ]
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border(false));

    Paragraph::new(Line::from(spans))
        .block(block)
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroUsize;

    use chrono::NaiveDate;
    use snvl_config::Theme;

    use crate::state::Dataset;
    use crate::test_utils::render_to_string;

    fn state(page: Page) -> AppState {
        AppState::new(
            Dataset::mock(),
            page,
            Theme::Dark,
            NonZeroUsize::new(5).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        )
    }

    #[test]
    fn render_status_bar_contains_hints() {
        let palette = Palette::of(Theme::Dark);
        let content = render_to_string(60, 3, |area, buf| {
            render_status_bar(&[("?", "Help"), ("Ctrl+C", "Quit")], &palette, area, buf);
        });

        assert!(content.contains("? Help"));
        assert!(content.contains("Ctrl+C Quit"));
    }

    #[test]
    fn hints_follow_the_page() {
        assert!(hints_for(&state(Page::Tables)).contains(&("/", "Search")));
        assert!(hints_for(&state(Page::Calendar)).contains(&("t", "Today")));
        assert!(!hints_for(&state(Page::Analytics)).contains(&("/", "Search")));
    }

    #[test]
    fn hints_show_drop_while_carrying() {
        let mut state = state(Page::Kanban);
        state.board.carried = Some(1);

        let hints = hints_for(&state);
        assert!(hints.contains(&("Space", "Drop")));
        assert!(hints.contains(&("Esc", "Cancel")));
    }

    #[test]
    fn search_mode_hides_global_hints() {
        let mut state = state(Page::Tables);
        state.table.start_search();

        assert!(!hints_for(&state).contains(&("?", "Help")));
    }
}
