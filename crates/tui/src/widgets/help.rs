//! Help overlay widget.
//!
//! Lists every keybinding when the user presses `?`.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
};

use super::popup::render_popup;
use crate::theme::Palette;

/// The width of the help overlay panel.
const HELP_WIDTH: u16 = 44;

/// Keybindings by section, in display order.
const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("1-4", "Go to page"),
            ("Tab", "Next page"),
            ("Shift+Tab", "Previous page"),
            ("←→↑↓", "Move"),
            ("Enter", "Open details"),
            ("Esc", "Close / cancel"),
        ],
    ),
    (
        "Data Tables",
        &[
            ("/", "Search"),
            ("s / o", "Cycle status / role filter"),
            ("n e r j", "Sort by name/email/role/join"),
            ("x", "Clear search and filters"),
            ("[ / ]", "Previous / next page"),
        ],
    ),
    (
        "Calendar",
        &[("[ / ]", "Previous / next month"), ("t", "Today")],
    ),
    ("Kanban Board", &[("Space", "Pick up / drop card")]),
    (
        "General",
        &[
            ("Shift+T", "Toggle theme"),
            ("Ctrl+C", "Quit"),
            ("?", "Toggle help"),
        ],
    ),
];

/// Renders a centered help overlay displaying all keybindings.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use snvl_config::Theme;
/// use snvl_tui::theme::Palette;
/// use snvl_tui::widgets::render_help_overlay;
///
/// let area = Rect::new(0, 0, 80, 40);
/// let mut buf = Buffer::empty(area);
///
/// render_help_overlay(&Palette::of(Theme::Dark), area, &mut buf);
/// ```
pub fn render_help_overlay(palette: &Palette, area: Rect, buf: &mut Buffer) {
    let lines = build_help_lines(palette);
    // Content plus the two border rows.
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    render_popup("Help", lines, (HELP_WIDTH, height), palette, area, buf);
}

/// Builds the lines of help content.
fn build_help_lines(palette: &Palette) -> Vec<Line<'static>> {
    let header_style = palette.key().add_modifier(Modifier::BOLD);
    let key_style = palette.key();
    let text_style = palette.text();
    let hint_style = palette.muted().add_modifier(Modifier::ITALIC);

    let mut lines = Vec::new();
    for (title, bindings) in SECTIONS {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(format!("  {title}"), header_style)));
        for (key, action) in *bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<11}"), key_style),
                Span::styled(*action, text_style),
            ]));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press any key to close",
        hint_style,
    )));
    lines
}
