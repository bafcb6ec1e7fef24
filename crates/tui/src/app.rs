//! Main application struct and run loop.
//!
//! This module provides the `App` struct which owns the dashboard state,
//! turns messages into state changes and draws every frame.

use std::path::PathBuf;

use chrono::NaiveDate;
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};
use snvl_config::{Config, persistence};
use snvl_protocol::{Message, Page};

use crate::{
    AppState, Dataset,
    event::{event_to_message, key_to_search_message, poll_event},
    layout::{
        HEADER_HEIGHT, MIN_HEIGHT, MIN_HEIGHT_WITH_HEADER, MIN_WIDTH, SIDEBAR_WIDTH,
        STATUS_BAR_HEIGHT,
    },
    terminal::AppTerminal,
    theme::Palette,
    widgets::{
        card_at, date_at, hints_for, page_at, render_analytics, render_board, render_calendar,
        render_help_overlay, render_sidebar, render_status_bar, render_task_detail,
        render_user_detail, render_user_table,
    },
};

/// Screen regions of a frame, shared by rendering and click hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Regions {
    header: Option<Rect>,
    sidebar: Rect,
    /// The page body, below the page subtitle.
    page: Rect,
    subtitle: Rect,
    status_bar: Rect,
}

impl Regions {
    fn of(area: Rect, show_header: bool) -> Self {
        let [header, main, status_bar] = Layout::vertical([
            Constraint::Length(if show_header { HEADER_HEIGHT } else { 0 }),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .areas(area);
        let [sidebar, content] =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)]).areas(main);
        let [subtitle, page] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(content);

        Self {
            header: show_header.then_some(header),
            sidebar,
            page,
            subtitle,
            status_bar,
        }
    }
}

/// The main application struct.
///
/// Manages the application state and provides the main event loop.
#[derive(Debug)]
pub struct App {
    state: AppState,
    should_quit: bool,
    /// Last known terminal area, used for click hit-testing.
    last_area: Rect,
    /// Whether the header was shown in the last render (affects click hit-testing).
    header_visible: bool,
    /// The application configuration.
    config: Config,
    /// Where the configuration is written when the theme changes.
    save_path: Option<PathBuf>,
}

impl App {
    /// Creates an application over `data` with the default configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use snvl_protocol::Page;
    /// use snvl_tui::{App, Dataset};
    ///
    /// let app = App::new(Dataset::mock());
    /// assert_eq!(app.state().page, Page::Analytics);
    /// ```
    #[must_use]
    pub fn new(data: Dataset) -> Self {
        let today = chrono::Local::now().date_naive();
        Self::with_config(data, Config::default(), today)
    }

    /// Creates an application over `data` with the given configuration.
    ///
    /// `today` anchors the calendar page.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use snvl_config::Config;
    /// use snvl_protocol::Page;
    /// use snvl_tui::{App, Dataset};
    ///
    /// let mut config = Config::default();
    /// config.start_view = Page::Kanban;
    ///
    /// let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    /// let app = App::with_config(Dataset::mock(), config, today);
    /// assert_eq!(app.state().page, Page::Kanban);
    /// ```
    #[must_use]
    pub fn with_config(data: Dataset, config: Config, today: NaiveDate) -> Self {
        let state = AppState::new(
            data,
            config.start_view,
            config.theme,
            config.page_size(),
            today,
        );
        Self {
            state,
            should_quit: false,
            last_area: Rect::default(),
            header_visible: true,
            config,
            save_path: None,
        }
    }

    /// Saves the configuration to `path` whenever the theme is toggled.
    #[must_use]
    pub fn with_save_path(mut self, path: PathBuf) -> Self {
        self.save_path = Some(path);
        self
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns a reference to the application configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns whether the user asked to quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Updates the application state based on a message.
    ///
    /// When the help overlay is visible, most messages are intercepted to
    /// dismiss the help instead of their normal action. While the search box
    /// has focus only search messages and `Quit` are handled.
    pub fn update(&mut self, msg: Message) {
        // When help is visible, most keys should dismiss it
        if self.state.help_visible {
            match msg {
                Message::Quit => self.should_quit = true,
                Message::ToggleHelp | Message::Escape => self.state.toggle_help(),
                _ => {
                    let _ = self.state.dismiss_help();
                }
            }
            return;
        }

        if self.state.is_searching() {
            match msg {
                Message::Quit => self.should_quit = true,
                Message::EndSearch | Message::Escape => self.state.table.end_search(),
                Message::SearchInput { ch } => self.state.table.push_search(ch),
                Message::SearchBackspace => self.state.table.pop_search(),
                _ => {}
            }
            return;
        }

        match msg {
            Message::Quit => self.should_quit = true,
            Message::ToggleHelp => self.state.toggle_help(),
            Message::ToggleTheme => self.toggle_theme(),
            Message::GoTo { page } => {
                self.state.go_to(page);
            }
            Message::NextView => {
                self.state.go_to(self.state.page.cycle_next());
            }
            Message::PreviousView => {
                self.state.go_to(self.state.page.cycle_previous());
            }
            Message::ClickAt { column, row } => self.handle_click(column, row),
            msg => match self.state.page {
                Page::Analytics => self.update_analytics(&msg),
                Page::Tables => self.update_table(msg),
                Page::Calendar => self.update_calendar(&msg),
                Page::Kanban => self.update_board(&msg),
            },
        }
    }

    fn update_analytics(&mut self, msg: &Message) {
        match msg {
            Message::NavigateLeft => self.state.analytics.previous_tab(),
            Message::NavigateRight => self.state.analytics.next_tab(),
            _ => {}
        }
    }

    fn update_table(&mut self, msg: Message) {
        let users = &self.state.data.users;
        let table = &mut self.state.table;

        if table.detail_visible {
            if matches!(msg, Message::Escape | Message::Select) {
                table.close_detail();
            }
            return;
        }

        match msg {
            Message::NavigateUp => table.select_previous(),
            Message::NavigateDown => table.select_next(users),
            Message::NavigateLeft | Message::PagePrevious => table.previous_page(),
            Message::NavigateRight | Message::PageNext => table.next_page(users),
            Message::Select => table.open_detail(users),
            Message::StartSearch => table.start_search(),
            Message::CycleStatusFilter => table.cycle_status_filter(),
            Message::CycleRoleFilter => table.cycle_role_filter(),
            Message::SortBy { field } => table.sort_by(field, users),
            Message::ClearFilters => table.clear_filters(),
            _ => {}
        }
    }

    fn update_calendar(&mut self, msg: &Message) {
        let calendar = &mut self.state.calendar;
        match msg {
            Message::NavigateLeft => calendar.move_days(-1),
            Message::NavigateRight => calendar.move_days(1),
            Message::NavigateUp => calendar.move_days(-7),
            Message::NavigateDown => calendar.move_days(7),
            Message::Select => calendar.select(),
            Message::Escape => {
                calendar.clear_selection();
            }
            Message::MonthPrevious => calendar.previous_month(),
            Message::MonthNext => calendar.next_month(),
            Message::Today => calendar.today(),
            _ => {}
        }
    }

    fn update_board(&mut self, msg: &Message) {
        let board = &mut self.state.data.board;
        let state = &mut self.state.board;

        if state.detail_visible {
            if matches!(msg, Message::Escape | Message::Select) {
                state.toggle_detail(board);
            }
            return;
        }

        match msg {
            Message::NavigateLeft => state.navigate_left(board),
            Message::NavigateRight => state.navigate_right(board),
            Message::NavigateUp => state.navigate_up(board),
            Message::NavigateDown => state.navigate_down(board),
            Message::ToggleCarry => state.toggle_carry(board),
            Message::Select if state.carried.is_none() => state.toggle_detail(board),
            Message::Escape => {
                // Contextual escape: put the card back, or clear the focus
                if !state.cancel_carry() {
                    state.selected_task = None;
                }
            }
            _ => {}
        }
    }

    /// Switches the palette and saves the choice.
    ///
    /// A failed save is logged and otherwise ignored: the new palette stays
    /// in effect for this session.
    fn toggle_theme(&mut self) {
        self.config.theme = self.config.theme.toggled();
        self.state.theme = self.config.theme;
        tracing::info!(theme = %self.config.theme, "toggled theme");

        let Some(path) = &self.save_path else {
            return;
        };
        match persistence::store_theme(path, self.config.theme) {
            Ok(()) => tracing::debug!(path = %path.display(), "saved theme"),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to save theme");
            }
        }
    }

    /// Handles a mouse click at the given coordinates.
    ///
    /// Clicks on the sidebar switch pages; on the calendar they select a
    /// day; on the board they focus a card and open its details.
    fn handle_click(&mut self, column: u16, row: u16) {
        let regions = Regions::of(self.last_area, self.header_visible);
        let position = (column, row).into();

        if regions.sidebar.contains(position) {
            if let Some(page) = page_at(regions.sidebar, row) {
                self.state.go_to(page);
            }
            return;
        }
        if !regions.page.contains(position) {
            return;
        }

        match self.state.page {
            Page::Calendar => {
                let calendar = &mut self.state.calendar;
                let week_start = self.config.week_start;
                if let Some(date) = date_at(regions.page, calendar, week_start, column, row) {
                    calendar.cursor = date;
                    calendar.select();
                }
            }
            Page::Kanban if !self.state.board.detail_visible => {
                let board = &self.state.data.board;
                let state = &mut self.state.board;
                if let Some((lane, card)) = card_at(board, state, regions.page, column, row) {
                    state.selected_lane = lane;
                    state.selected_task = card;
                    if card.is_some() && state.carried.is_none() {
                        state.toggle_detail(board);
                    }
                }
            }
            _ => {}
        }
    }

    /// Renders the application UI to the given frame.
    ///
    /// Implements graceful degradation for small terminal sizes:
    /// - If terminal is below minimum dimensions, shows a "terminal too small" message.
    /// - If terminal is tight (below `MIN_HEIGHT_WITH_HEADER`), hides the header to reclaim space.
    /// - Otherwise, renders normally with header.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.last_area = area;

        // Check if terminal is too small for any useful rendering
        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            self.header_visible = false;
            render_terminal_too_small(area, frame.buffer_mut());
            return;
        }

        self.header_visible = area.height >= MIN_HEIGHT_WITH_HEADER;
        let regions = Regions::of(area, self.header_visible);
        let palette = Palette::of(self.state.theme);
        let buf = frame.buffer_mut();

        if let Some(header) = regions.header {
            self.render_header(&palette, header, buf);
        }
        render_sidebar(self.state.page, &palette, regions.sidebar, buf);
        Paragraph::new(Span::styled(
            format!(" {}", self.state.page.subtitle()),
            palette.muted().add_modifier(Modifier::ITALIC),
        ))
        .render(regions.subtitle, buf);
        self.render_page(&palette, regions.page, buf);
        render_status_bar(&hints_for(&self.state), &palette, regions.status_bar, buf);

        // Render help overlay on top if visible
        if self.state.help_visible {
            render_help_overlay(&palette, area, buf);
        }
    }

    fn render_page(&self, palette: &Palette, area: Rect, buf: &mut Buffer) {
        let data = &self.state.data;
        match self.state.page {
            Page::Analytics => {
                render_analytics(&data.analytics, &self.state.analytics, palette, area, buf);
            }
            Page::Tables => {
                let table = &self.state.table;
                render_user_table(&data.users, table, palette, area, buf);
                if table.detail_visible
                    && let Some(user) = table.selected_user(&data.users)
                {
                    render_user_detail(user, palette, area, buf);
                }
            }
            Page::Calendar => render_calendar(
                &data.events,
                &self.state.calendar,
                self.config.week_start,
                palette,
                area,
                buf,
            ),
            Page::Kanban => {
                let board = &self.state.board;
                render_board(&data.board, board, palette, area, buf);
                if board.detail_visible
                    && let Some(task) = board.selected_task(&data.board)
                {
                    render_task_detail(task, palette, area, buf);
                }
            }
        }
    }

    /// Renders the header bar with title and help cue.
    fn render_header(&self, palette: &Palette, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(palette.border(false));
        let inner = block.inner(area);
        block.render(area, buf);

        // Split inner area: title left, help cue right
        let [title_area, help_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(17), // "Press ? for help" = 16 chars + padding
        ])
        .areas(inner);

        Paragraph::new(Line::from(vec![
            Span::styled(
                "snvl",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled(self.state.page.title(), palette.text()),
        ]))
        .render(title_area, buf);

        Paragraph::new(Line::from(vec![
            Span::styled("Press ", palette.muted()),
            Span::styled("?", palette.key()),
            Span::styled(" for help", palette.muted()),
        ]))
        .alignment(Alignment::Right)
        .render(help_area, buf);
    }

    /// Runs the main application loop.
    ///
    /// This function blocks until the user quits the application.
    /// It polls for events, updates state, and renders the UI.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use snvl_tui::{App, Dataset, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new(Dataset::mock());
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        use crossterm::event::Event;

        loop {
            terminal.draw(|frame| self.view(frame))?;

            if let Some(event) = poll_event()? {
                // The search box swallows every printable key
                let msg = match event {
                    Event::Key(key) if self.state.is_searching() => key_to_search_message(key),
                    _ => event_to_message(&event, self.state.page),
                };

                if let Some(msg) = msg {
                    self.update(msg);
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }
}

/// Renders a message indicating the terminal is too small.
fn render_terminal_too_small(area: Rect, buf: &mut Buffer) {
    let message = format!(
        "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
        area.width, area.height, MIN_WIDTH, MIN_HEIGHT
    );

    // Center the message vertically
    let vertical_offset = area.height.saturating_sub(2) / 2;
    let centered_area = Rect {
        y: area.y + vertical_offset,
        height: area.height.saturating_sub(vertical_offset),
        ..area
    };

    Paragraph::new(message)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .render(centered_area, buf);
}
