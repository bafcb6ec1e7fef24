//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages. Most keys mean the same thing on every page;
//! the few page-specific keys are looked up with the current [`Page`].

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind};
use snvl_protocol::{Message, Page, UserField};

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts an event (keyboard or mouse) to an application message for
/// the given page.
#[must_use]
pub fn event_to_message(event: &Event, page: Page) -> Option<Message> {
    match event {
        Event::Key(key) => key_to_message(*key, page),
        Event::Mouse(mouse) => mouse_to_message(mouse),
        _ => None,
    }
}

/// Converts a mouse event to an application message.
///
/// Only left-click press events are handled.
#[must_use]
fn mouse_to_message(mouse: &crossterm::event::MouseEvent) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Message::ClickAt {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

/// Converts a terminal key event to an application message.
///
/// # Key Bindings
///
/// | Key | Page | Action |
/// |-----|------|--------|
/// | `Ctrl+C` | all | Quit |
/// | `Esc` | all | Escape (close details, cancel pick-up, clear selection) |
/// | Arrows | all | Navigate |
/// | `Enter` | all | Select |
/// | `1`-`4` | all | Go to page |
/// | `Tab` / `Shift+Tab` | all | Next / previous page |
/// | `Shift+T` | all | Toggle theme |
/// | `?` | all | Toggle help |
/// | `/` | tables | Search |
/// | `s` / `o` | tables | Cycle status / role filter |
/// | `n` `e` `r` `j` | tables | Sort by name / email / role / join date |
/// | `x` | tables | Clear search and filters |
/// | `[` / `]` | tables | Previous / next page of results |
/// | `[` / `]` | calendar | Previous / next month |
/// | `t` | calendar | Today |
/// | `Space` | kanban | Pick up / drop card |
#[must_use]
pub fn key_to_message(key: KeyEvent, page: Page) -> Option<Message> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    if key.modifiers.contains(KeyModifiers::SHIFT) && key.code == KeyCode::Char('T') {
        return Some(Message::ToggleTheme);
    }

    let global = match key.code {
        KeyCode::Esc => Some(Message::Escape),
        KeyCode::Left => Some(Message::NavigateLeft),
        KeyCode::Right => Some(Message::NavigateRight),
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),
        KeyCode::Enter => Some(Message::Select),
        KeyCode::Tab => Some(Message::NextView),
        KeyCode::BackTab => Some(Message::PreviousView),
        KeyCode::Char('?') => Some(Message::ToggleHelp),
        KeyCode::Char(ch @ '1'..='4') => ch
            .to_digit(10)
            .and_then(|n| Page::from_index(n as usize - 1))
            .map(|page| Message::GoTo { page }),
        _ => None,
    };
    if global.is_some() {
        return global;
    }

    match page {
        Page::Analytics => None,
        Page::Tables => table_key(key.code),
        Page::Calendar => calendar_key(key.code),
        Page::Kanban => board_key(key.code),
    }
}

fn table_key(code: KeyCode) -> Option<Message> {
    let sort = |field| Some(Message::SortBy { field });
    match code {
        KeyCode::Char('/') => Some(Message::StartSearch),
        KeyCode::Char('s') => Some(Message::CycleStatusFilter),
        KeyCode::Char('o') => Some(Message::CycleRoleFilter),
        KeyCode::Char('n') => sort(UserField::Name),
        KeyCode::Char('e') => sort(UserField::Email),
        KeyCode::Char('r') => sort(UserField::Role),
        KeyCode::Char('j') => sort(UserField::JoinDate),
        KeyCode::Char('x') => Some(Message::ClearFilters),
        KeyCode::Char('[') => Some(Message::PagePrevious),
        KeyCode::Char(']') => Some(Message::PageNext),
        _ => None,
    }
}

fn calendar_key(code: KeyCode) -> Option<Message> {
    match code {
        KeyCode::Char('[') => Some(Message::MonthPrevious),
        KeyCode::Char(']') => Some(Message::MonthNext),
        KeyCode::Char('t') => Some(Message::Today),
        _ => None,
    }
}

fn board_key(code: KeyCode) -> Option<Message> {
    match code {
        KeyCode::Char(' ') => Some(Message::ToggleCarry),
        _ => None,
    }
}

/// Converts a key event to a search-box message.
///
/// Used while the table search box has focus: every printable character is
/// typed into the search text.
///
/// # Key Bindings (Search Mode)
///
/// | Key | Action |
/// |-----|--------|
/// | `Enter` or `Esc` | Leave search mode |
/// | `Backspace` | Delete the last character |
/// | Any char | Input |
#[must_use]
pub fn key_to_search_message(key: KeyEvent) -> Option<Message> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Enter | KeyCode::Esc => Some(Message::EndSearch),
        KeyCode::Backspace => Some(Message::SearchBackspace),
        KeyCode::Char(ch) => Some(Message::SearchInput { ch }),
        _ => None,
    }
}
