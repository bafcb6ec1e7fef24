//! Kanban card rendering widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use snvl_protocol::Task;

use crate::theme::{Palette, priority_color};

/// How a card is drawn relative to the focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFocus {
    /// Neither focused nor carried.
    None,
    /// The focused card.
    Selected,
    /// The card picked up for a move.
    Carried,
}

/// Renders a kanban card to the buffer.
///
/// ```text
/// ╭──────────────────╮
/// │Design Homepage   │
/// │● high        JD  │
/// ╰──────────────────╯
/// ```
///
/// The border takes the priority colour; the focused card is bold and the
/// carried card has a double border.
pub fn render_task_card(
    task: &Task,
    focus: CardFocus,
    palette: &Palette,
    area: Rect,
    buf: &mut Buffer,
) {
    // Skip rendering if area is too small
    if area.width < 4 || area.height < 3 {
        return;
    }

    let priority = priority_color(task.priority);
    let (border_type, title_style) = match focus {
        CardFocus::None => (BorderType::Rounded, palette.text()),
        CardFocus::Selected => (
            BorderType::Thick,
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
        CardFocus::Carried => (
            BorderType::Double,
            Style::default()
                .fg(palette.key)
                .add_modifier(Modifier::BOLD | Modifier::ITALIC),
        ),
    };

    let inner_width = usize::from(area.width.saturating_sub(2));
    let initials = task.initials();
    let badge = format!("● {}", task.priority);
    let gap = inner_width.saturating_sub(badge.chars().count() + initials.chars().count());

    let content = vec![
        Line::from(Span::styled(truncate_string(&task.title, inner_width), title_style)),
        Line::from(vec![
            Span::styled(badge, Style::default().fg(priority)),
            Span::raw(" ".repeat(gap)),
            Span::styled(initials, palette.muted()),
        ]),
    ];

    Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(Style::default().fg(priority)),
        )
        .render(area, buf);
}

/// Truncates a string to fit within a given width, adding ellipsis if needed.
fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width > 3 {
        let truncated: String = s.chars().take(max_width - 3).collect();
        format!("{truncated}...")
    } else {
        s.chars().take(max_width).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snvl_config::Theme;
    use snvl_protocol::dummy::mock_tasks;

    use crate::test_utils::render_to_string;

    #[test]
    fn truncate_string_short() {
        assert_eq!(truncate_string("Hello", 10), "Hello");
        assert_eq!(truncate_string("Hello", 5), "Hello");
    }

    #[test]
    fn truncate_string_long() {
        assert_eq!(truncate_string("Hello, World!", 10), "Hello, ...");
        assert_eq!(truncate_string("Hello", 3), "Hel");
    }

    #[test]
    fn card_shows_priority_and_initials() {
        let task = &mock_tasks()[0];
        let palette = Palette::of(Theme::Dark);
        let content = render_to_string(22, 4, |area, buf| {
            render_task_card(task, CardFocus::None, &palette, area, buf);
        });

        insta::assert_snapshot!(content, @r"
        ╭────────────────────╮
        │Design Homepage     │
        │● high            JD│
        ╰────────────────────╯
        ");
    }

    #[test]
    fn carried_card_uses_double_border() {
        let task = &mock_tasks()[1];
        let palette = Palette::of(Theme::Dark);
        let content = render_to_string(30, 4, |area, buf| {
            render_task_card(task, CardFocus::Carried, &palette, area, buf);
        });

        assert!(content.starts_with('╔'));
        assert!(content.contains("Implement Authentication"));
    }

    #[test]
    fn tiny_area_renders_nothing() {
        let task = &mock_tasks()[0];
        let palette = Palette::of(Theme::Dark);
        let content = render_to_string(3, 2, |area, buf| {
            render_task_card(task, CardFocus::Selected, &palette, area, buf);
        });
        assert_eq!(content.trim(), "");
    }
}
