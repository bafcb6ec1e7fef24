//! Rendering helpers shared by the widget tests.

use ratatui::{buffer::Buffer, layout::Rect};

/// Converts a ratatui [`Buffer`] to text, one line per row, with trailing
/// spaces trimmed.
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            if let Some(cell) = buf.cell((x, y)) {
                result.push_str(cell.symbol());
            }
        }
        let trimmed = result.trim_end_matches(' ');
        result.truncate(trimmed.len());
        result.push('\n');
    }
    result
}

/// Renders into a fresh `width` x `height` buffer and returns it as text.
pub(crate) fn render_to_string(
    width: u16,
    height: u16,
    render: impl FnOnce(Rect, &mut Buffer),
) -> String {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    render(area, &mut buf);
    buffer_to_string(&buf)
}
