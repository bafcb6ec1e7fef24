//! The user management table.
//!
//! ```text
//! ╭ Filters ─────────────────────────────────────────────────╮
//! │ Search: jo▏          Status: active   Role: all           │
//! ╰──────────────────────────────────────────────────────────╯
//! ╭ Users ───────────────────────────────────────────────────╮
//! │ Name ↑        Email              Role    Status   Joined  │
//! │ John Doe      john@example.com   Admin   active   2023-.. │
//! │                                                          │
//! │ Showing 1 to 1 of 1 results                 ‹ [1] ›      │
//! ╰──────────────────────────────────────────────────────────╯
//! ```

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, Widget},
};
use snvl_protocol::{Record, RecordView, User, UserField};

use crate::table_state::TableState;
use crate::theme::{Palette, user_status_color};

/// Height of the filter bar.
const FILTER_BAR_HEIGHT: u16 = 3;

/// Columns of the table, with their widths.
const COLUMNS: [(UserField, Constraint); 6] = [
    (UserField::Name, Constraint::Fill(3)),
    (UserField::Email, Constraint::Fill(4)),
    (UserField::Role, Constraint::Length(8)),
    (UserField::Status, Constraint::Length(10)),
    (UserField::JoinDate, Constraint::Length(11)),
    (UserField::LastLogin, Constraint::Length(11)),
];

/// Renders the filter bar and the current page of `users`.
pub fn render_user_table(
    users: &[User],
    state: &TableState,
    palette: &Palette,
    area: Rect,
    buf: &mut Buffer,
) {
    let [filter_area, table_area] =
        Layout::vertical([Constraint::Length(FILTER_BAR_HEIGHT), Constraint::Min(0)]).areas(area);

    render_filter_bar(state, palette, filter_area, buf);

    let view = state.view(users);
    let block = Block::default()
        .title(Span::styled(" Users ", palette.title()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border(!state.searching));
    let inner = block.inner(table_area);
    block.render(table_area, buf);

    let [rows_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    if view.page.is_empty() {
        Paragraph::new(Line::from(Span::styled(
            "No users match the current search and filters",
            palette.muted().add_modifier(Modifier::ITALIC),
        )))
        .render(rows_area, buf);
    } else {
        render_rows(&view, state, palette, rows_area, buf);
    }

    render_footer(&view, palette, footer_area, buf);
}

fn render_filter_bar(state: &TableState, palette: &Palette, area: Rect, buf: &mut Buffer) {
    let search_style = if state.searching {
        Style::default().fg(palette.accent)
    } else {
        palette.text()
    };
    let cursor = if state.searching { "▏" } else { "" };
    let placeholder = state.query.search_text.is_empty() && !state.searching;
    let search = if placeholder {
        Span::styled("press / to search", palette.muted())
    } else {
        Span::styled(format!("{}{cursor}", state.query.search_text), search_style)
    };

    let status = state
        .status_filter()
        .map_or("all", |status| status.as_str());
    let role = state.role_filter().map_or("all", |role| role.as_str());

    let line = Line::from(vec![
        Span::styled(" Search: ", palette.muted()),
        search,
        Span::styled("   Status: ", palette.muted()),
        Span::styled(status, palette.text()),
        Span::styled("   Role: ", palette.muted()),
        Span::styled(role, palette.text()),
    ]);

    let block = Block::default()
        .title(Span::styled(" Filters ", palette.title()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border(state.searching));

    Paragraph::new(line).block(block).render(area, buf);
}

fn render_rows(
    view: &RecordView<'_, User>,
    state: &TableState,
    palette: &Palette,
    area: Rect,
    buf: &mut Buffer,
) {
    let sort = state.query.sort;
    let header = Row::new(COLUMNS.iter().map(|(field, _)| {
        let title = if sort.field == *field {
            format!("{} {}", field.header(), sort.direction.arrow())
        } else {
            field.header().to_string()
        };
        Cell::from(title)
    }))
    .style(palette.title());

    let rows = view.page.iter().enumerate().map(|(i, user)| {
        let cells = COLUMNS.iter().map(|(field, _)| {
            let value = user.value(*field).to_string();
            match field {
                UserField::Status => Cell::from(Span::styled(
                    value,
                    Style::default().fg(user_status_color(user.status)),
                )),
                _ => Cell::from(value),
            }
        });
        let style = if i == state.selected_row {
            palette.selected()
        } else {
            palette.text()
        };
        Row::new(cells).style(style)
    });

    Table::new(rows, COLUMNS.map(|(_, width)| width))
        .header(header)
        .column_spacing(1)
        .render(area, buf);
}

fn render_footer(view: &RecordView<'_, User>, palette: &Palette, area: Rect, buf: &mut Buffer) {
    let summary = match view.showing_range() {
        Some((first, last)) => format!(
            "Showing {first} to {last} of {} results",
            view.total_matches
        ),
        None => format!("Showing 0 of {} results", view.total_matches),
    };

    let mut pager = vec![Span::styled(
        "‹ Prev ",
        if view.has_previous() {
            palette.key()
        } else {
            palette.muted()
        },
    )];
    for number in 1..=view.total_pages {
        let style = if number == view.page_number {
            palette.selected()
        } else {
            palette.text()
        };
        pager.push(Span::styled(format!(" {number} "), style));
    }
    pager.push(Span::styled(
        " Next ›",
        if view.has_next() {
            palette.key()
        } else {
            palette.muted()
        },
    ));

    let pager_width = pager.iter().map(Span::width).sum::<usize>();
    let [summary_area, pager_area] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(u16::try_from(pager_width).unwrap_or(u16::MAX)),
    ])
    .areas(area);

    Paragraph::new(Span::styled(summary, palette.muted())).render(summary_area, buf);
    Paragraph::new(Line::from(pager)).render(pager_area, buf);
}
