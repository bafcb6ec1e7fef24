//! Navigation sidebar.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use snvl_protocol::Page;

use crate::theme::Palette;

/// Renders the page list with `active` highlighted.
///
/// ```text
/// ╭ Navigation ──────╮
/// │▶ 1 Analytics     │
/// │  2 Data Tables   │
/// │  3 Calendar      │
/// │  4 Kanban Board  │
/// ╰──────────────────╯
/// ```
pub fn render_sidebar(active: Page, palette: &Palette, area: Rect, buf: &mut Buffer) {
    let lines: Vec<Line<'_>> = Page::all()
        .into_iter()
        .map(|page| {
            let number = page.index() + 1;
            if page == active {
                Line::from(Span::styled(
                    format!("▶ {number} {}", page.title()),
                    palette.selected(),
                ))
            } else {
                Line::from(vec![
                    Span::styled(format!("  {number} "), palette.key()),
                    Span::styled(page.title(), palette.text()),
                ])
            }
        })
        .collect();

    let block = Block::default()
        .title(Span::styled(
            " Navigation ",
            palette.title().add_modifier(Modifier::DIM),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border(false));

    Paragraph::new(lines).block(block).render(area, buf);
}

/// Returns the page whose entry is drawn on `row` of a sidebar occupying
/// `area`.
#[must_use]
pub fn page_at(area: Rect, row: u16) -> Option<Page> {
    // Entries start below the top border.
    let offset = row.checked_sub(area.y + 1)?;
    if row >= area.bottom().saturating_sub(1) {
        return None;
    }
    Page::from_index(usize::from(offset))
}
