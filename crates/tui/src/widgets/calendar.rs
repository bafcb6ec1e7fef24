//! Calendar page: the month grid and the selected-day panel.

use chrono::NaiveDate;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};
use snvl_protocol::{Day, Event, WeekStart, build_padded_grid, items_on};

use crate::calendar_state::CalendarState;
use crate::layout::{DAY_PANEL_WIDTH, MAX_EVENTS_PER_CELL};
use crate::theme::{Palette, event_color};

/// Renders the month of the cursor next to the events of the selected day.
pub fn render_calendar(
    events: &[Event],
    state: &CalendarState,
    week_start: WeekStart,
    palette: &Palette,
    area: Rect,
    buf: &mut Buffer,
) {
    let [grid_area, panel_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(DAY_PANEL_WIDTH)]).areas(area);

    render_month(events, state, week_start, palette, grid_area, buf);
    render_day_panel(events, state.selected, palette, panel_area, buf);
}

/// Returns the areas of the cells of a month grid drawn in `area`, row by
/// row, together with the header row.
fn grid_cells(area: Rect, weeks: usize) -> (Rect, Vec<Rect>) {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let [header, body] = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);
    let rows = Layout::vertical((0..weeks).map(|_| Constraint::Fill(1))).split(body);
    let cells = rows
        .iter()
        .flat_map(|row| Layout::horizontal([Constraint::Fill(1); 7]).split(*row).to_vec())
        .collect();
    (header, cells)
}

/// Returns the date drawn at (`column`, `row`) by [`render_calendar`] over
/// `area`, padding days included.
#[must_use]
pub fn date_at(
    area: Rect,
    state: &CalendarState,
    week_start: WeekStart,
    column: u16,
    row: u16,
) -> Option<NaiveDate> {
    let [grid_area, _] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(DAY_PANEL_WIDTH)]).areas(area);
    let grid = build_padded_grid::<Event>(state.cursor, &[], week_start);
    let (_, cells) = grid_cells(grid_area, grid.len() / 7);
    let position = (column, row).into();
    cells
        .iter()
        .position(|cell| cell.contains(position))
        .and_then(|idx| grid.get(idx))
        .map(|day| day.date)
}

fn month_block<'a>(title: &str, palette: &Palette) -> Block<'a> {
    Block::default()
        .title(Span::styled(format!(" {title} "), palette.title()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border(true))
}

fn render_month(
    events: &[Event],
    state: &CalendarState,
    week_start: WeekStart,
    palette: &Palette,
    area: Rect,
    buf: &mut Buffer,
) {
    let grid = build_padded_grid(state.cursor, events, week_start);
    let title = state.cursor.format("%B %Y").to_string();
    month_block(&title, palette).render(area, buf);

    let (header, cells) = grid_cells(area, grid.len() / 7);
    let columns = Layout::horizontal([Constraint::Fill(1); 7]).split(header);
    for (name, column) in week_start.headers().iter().zip(columns.iter()) {
        Paragraph::new(Span::styled(*name, palette.muted().add_modifier(Modifier::BOLD)))
            .render(*column, buf);
    }

    for (day, cell) in grid.iter().zip(cells) {
        render_cell(day, state, palette, cell, buf);
    }
}

fn render_cell(
    day: &Day<'_, Event>,
    state: &CalendarState,
    palette: &Palette,
    area: Rect,
    buf: &mut Buffer,
) {
    let mut number_style = if day.in_current_month {
        palette.text()
    } else {
        palette.muted()
    };
    if day.date == state.today {
        number_style = number_style
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    }
    if state.selected == Some(day.date) {
        number_style = number_style.add_modifier(Modifier::REVERSED);
    }
    if day.date == state.cursor {
        buf.set_style(area, Style::default().bg(palette.selection));
    }

    let mut lines = vec![Line::from(Span::styled(
        day.date.format("%e").to_string(),
        number_style,
    ))];
    lines.extend(day.items.iter().take(MAX_EVENTS_PER_CELL).map(|event| {
        Line::from(Span::styled(
            event.title.as_str(),
            Style::default().fg(event_color(event.kind)),
        ))
    }));
    let hidden = day.items.len().saturating_sub(MAX_EVENTS_PER_CELL);
    if hidden > 0 {
        lines.push(Line::from(Span::styled(
            format!("+{hidden} more"),
            palette.muted(),
        )));
    }

    Paragraph::new(lines).render(area, buf);
}

fn render_day_panel(
    events: &[Event],
    selected: Option<NaiveDate>,
    palette: &Palette,
    area: Rect,
    buf: &mut Buffer,
) {
    let Some(date) = selected else {
        let lines = vec![
            Line::from(Span::styled("Click on a date to view events", palette.muted())),
            Line::from(""),
            Line::from(Span::styled(
                "Select a date to view events",
                palette.muted().add_modifier(Modifier::ITALIC),
            )),
        ];
        Paragraph::new(lines)
            .block(month_block("Select a Date", palette).border_style(palette.border(false)))
            .wrap(Wrap { trim: true })
            .render(area, buf);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled("Events for this day", palette.muted())),
        Line::from(""),
    ];
    let day_events = items_on(events, date);
    if day_events.is_empty() {
        lines.push(Line::from(Span::styled(
            "No events scheduled",
            palette.muted().add_modifier(Modifier::ITALIC),
        )));
    }
    for event in day_events {
        lines.push(Line::from(vec![
            Span::styled(event.title.as_str(), palette.title()),
            Span::raw(" "),
            Span::styled(
                format!("[{}]", event.kind),
                Style::default().fg(event_color(event.kind)),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            event.description.as_str(),
            palette.text(),
        )));
        let mut meta = vec![Span::styled(
            event.time.format("%H:%M").to_string(),
            palette.muted(),
        )];
        if let Some(location) = &event.location {
            meta.push(Span::styled(format!("  @ {location}"), palette.muted()));
        }
        lines.push(Line::from(meta));
        lines.push(Line::from(""));
    }

    let title = date.format("%b %-d, %Y").to_string();
    Paragraph::new(lines)
        .block(month_block(&title, palette).border_style(palette.border(false)))
        .wrap(Wrap { trim: true })
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use snvl_config::Theme;
    use snvl_protocol::dummy::mock_events;

    use crate::test_utils::render_to_string;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn render(events: &[Event], state: &CalendarState) -> String {
        let palette = Palette::of(Theme::Dark);
        render_to_string(160, 40, |area, buf| {
            render_calendar(events, state, WeekStart::Sunday, &palette, area, buf);
        })
    }

    fn event_on(id: u32, title: &str, on: NaiveDate) -> Event {
        let mut event = mock_events()[0].clone();
        event.id = id;
        event.title = title.to_string();
        event.date = on;
        event
    }

    #[test]
    fn month_grid_shows_title_headers_and_events() {
        let content = render(&mock_events(), &CalendarState::new(date(2024, 1, 15)));

        assert!(content.contains("January 2024"));
        assert!(content.contains("Sun"));
        assert!(content.contains("Sat"));
        assert!(content.contains("Team Standup"));
        assert!(content.contains("Project Deadline"));
        assert!(content.contains("31"));
    }

    #[test]
    fn unselected_panel_shows_hint() {
        let content = render(&mock_events(), &CalendarState::new(date(2024, 1, 15)));

        assert!(content.contains("Select a Date"));
        assert!(content.contains("Select a date to view events"));
    }

    #[test]
    fn selected_day_lists_its_events() {
        let mut state = CalendarState::new(date(2024, 1, 15));
        state.select();

        let content = render(&mock_events(), &state);

        assert!(content.contains("Jan 15, 2024"));
        assert!(content.contains("Daily team sync meeting"));
        assert!(content.contains("09:00"));
        assert!(content.contains("@ Conference Room A"));
    }

    #[test]
    fn selected_day_without_events() {
        let mut state = CalendarState::new(date(2024, 1, 16));
        state.select();

        let content = render(&mock_events(), &state);
        assert!(content.contains("No events scheduled"));
    }

    #[test]
    fn crowded_day_shows_overflow_line() {
        let day = date(2024, 1, 10);
        let events = vec![
            event_on(1, "Alpha", day),
            event_on(2, "Bravo", day),
            event_on(3, "Charlie", day),
            event_on(4, "Delta", day),
        ];

        let content = render(&events, &CalendarState::new(day));

        assert!(content.contains("Alpha"));
        assert!(content.contains("Bravo"));
        assert!(!content.contains("Charlie"));
        assert!(content.contains("+2 more"));
    }

    #[test]
    fn date_at_hits_grid_cells() {
        let area = Rect::new(0, 0, 120, 40);
        let state = CalendarState::new(date(2024, 1, 15));
        let (_, cells) = grid_cells(
            Layout::horizontal([Constraint::Min(0), Constraint::Length(DAY_PANEL_WIDTH)])
                .split(area)[0],
            5,
        );

        // January 2024 starts on a Monday: the first Sunday cell is Dec 31.
        let first = cells[0];
        assert_eq!(
            date_at(area, &state, WeekStart::Sunday, first.x, first.y),
            Some(date(2023, 12, 31))
        );
        let fifteenth = cells[15];
        assert_eq!(
            date_at(area, &state, WeekStart::Sunday, fifteenth.x + 1, fifteenth.y + 1),
            Some(date(2024, 1, 15))
        );
        assert_eq!(date_at(area, &state, WeekStart::Sunday, 119, 5), None);
    }
}
