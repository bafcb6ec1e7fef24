//! Centered popups drawn over the page content.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::theme::Palette;

/// Clears a `width` x `height` rectangle centered in `area` and draws a
/// rounded block titled `title` containing `lines`.
pub fn render_popup(
    title: &str,
    lines: Vec<Line<'_>>,
    (width, height): (u16, u16),
    palette: &Palette,
    area: Rect,
    buf: &mut Buffer,
) {
    let popup_area = centered_rect(width, height, area);
    Clear.render(popup_area, buf);

    let block = Block::default()
        .title(Span::styled(format!(" {title} "), palette.title()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border(true));

    Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .render(popup_area, buf);
}

/// Creates a centered rectangle within a given area.
///
/// If the requested dimensions exceed the available area, the rectangle
/// will be clamped to fit.
#[must_use]
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;

    Rect::new(x, y, popup_width, popup_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::render_to_string;
    use snvl_config::Theme;

    #[test]
    fn centered_rect_positions_correctly() {
        let centered = centered_rect(20, 10, Rect::new(0, 0, 80, 24));
        assert_eq!(centered, Rect::new(30, 7, 20, 10));
    }

    #[test]
    fn centered_rect_respects_area_offset() {
        let centered = centered_rect(10, 4, Rect::new(20, 3, 40, 10));
        assert_eq!(centered, Rect::new(35, 6, 10, 4));
    }

    #[test]
    fn centered_rect_clamps_to_area() {
        let centered = centered_rect(100, 50, Rect::new(0, 0, 40, 12));
        assert_eq!(centered, Rect::new(0, 0, 40, 12));
    }

    #[test]
    fn popup_clears_content_below() {
        let palette = Palette::of(Theme::Dark);
        let content = render_to_string(30, 7, |area, buf| {
            buf.set_string(0, 3, "x".repeat(30), palette.text());
            render_popup(
                "Info",
                vec![Line::from("hello")],
                (20, 5),
                &palette,
                area,
                buf,
            );
        });

        assert!(content.contains("Info"));
        assert!(content.contains("hello"));
        let middle = content.lines().nth(3).unwrap_or_default();
        assert!(middle.starts_with("xxxxx│"), "{middle}");
    }
}
