//! Colour palettes for the dark and light themes.

use ratatui::style::{Color, Modifier, Style};
use snvl_config::Theme;
use snvl_protocol::{EventKind, Priority, TaskStatus, Trend, UserStatus};

/// The colours every widget draws with.
///
/// Widgets never hard-code colours for chrome; they take a `Palette` so that
/// toggling the theme repaints the whole dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Primary text.
    pub text: Color,
    /// Secondary text (descriptions, captions, padding days).
    pub muted: Color,
    /// Highlight for focused elements and the active page.
    pub accent: Color,
    /// Borders of unfocused blocks.
    pub border: Color,
    /// Key names in hints.
    pub key: Color,
    /// Background of the highlighted row or cell.
    pub selection: Color,
    /// Positive trends.
    pub positive: Color,
    /// Negative trends.
    pub negative: Color,
}

impl Palette {
    /// Returns the palette of `theme`.
    ///
    /// # Examples
    ///
    /// ```
    /// use snvl_config::Theme;
    /// use snvl_tui::theme::Palette;
    ///
    /// assert_ne!(Palette::of(Theme::Dark), Palette::of(Theme::Light));
    /// ```
    #[must_use]
    pub const fn of(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                text: Color::White,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                border: Color::DarkGray,
                key: Color::Yellow,
                selection: Color::Rgb(40, 44, 52),
                positive: Color::Green,
                negative: Color::Red,
            },
            Theme::Light => Self {
                text: Color::Black,
                muted: Color::Gray,
                accent: Color::Blue,
                border: Color::Gray,
                key: Color::Magenta,
                selection: Color::Rgb(225, 230, 240),
                positive: Color::Green,
                negative: Color::Red,
            },
        }
    }

    /// Style of primary text.
    #[must_use]
    pub fn text(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Style of secondary text.
    #[must_use]
    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style of block titles.
    #[must_use]
    pub fn title(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    /// Border style, highlighted when `focused`.
    #[must_use]
    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.border)
        }
    }

    /// Style of key names in hints.
    #[must_use]
    pub fn key(&self) -> Style {
        Style::default().fg(self.key)
    }

    /// Style of the selected row or cell.
    #[must_use]
    pub fn selected(&self) -> Style {
        Style::default()
            .bg(self.selection)
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Colour of a metric trend.
    #[must_use]
    pub const fn trend(&self, trend: Trend) -> Color {
        match trend {
            Trend::Up => self.positive,
            Trend::Down => self.negative,
        }
    }
}

/// Colour of a user status badge.
#[must_use]
pub const fn user_status_color(status: UserStatus) -> Color {
    match status {
        UserStatus::Active => Color::Green,
        UserStatus::Inactive => Color::Red,
        UserStatus::Pending => Color::Yellow,
    }
}

/// Colour of a calendar event by kind.
#[must_use]
pub const fn event_color(kind: EventKind) -> Color {
    match kind {
        EventKind::Meeting => Color::Blue,
        EventKind::Deadline => Color::Red,
        EventKind::Event => Color::Green,
        EventKind::Reminder => Color::Yellow,
    }
}

/// Colour of a task's priority.
///
/// # Examples
///
/// ```
/// use ratatui::style::Color;
/// use snvl_protocol::Priority;
/// use snvl_tui::theme::priority_color;
///
/// assert_eq!(priority_color(Priority::High), Color::Red);
/// ```
#[must_use]
pub const fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::Low => Color::Green,
        Priority::Medium => Color::Yellow,
        Priority::High => Color::Red,
    }
}

/// Colour of a kanban column header.
#[must_use]
pub const fn status_color(status: TaskStatus) -> Color {
    match status {
        TaskStatus::Todo => Color::Gray,
        TaskStatus::InProgress => Color::Blue,
        TaskStatus::Review => Color::Yellow,
        TaskStatus::Done => Color::Green,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focused_border_uses_accent() {
        let palette = Palette::of(Theme::Dark);
        assert_eq!(palette.border(true).fg, Some(Color::Cyan));
        assert_eq!(palette.border(false).fg, Some(Color::DarkGray));
    }

    #[test]
    fn light_theme_uses_dark_text() {
        assert_eq!(Palette::of(Theme::Light).text, Color::Black);
    }
}
