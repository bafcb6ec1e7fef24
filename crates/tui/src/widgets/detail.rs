//! Detail popups for a table row or a kanban card.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};
use snvl_protocol::{FieldValue, Record, Task, TaskField, User, UserField};

use super::popup::render_popup;
use crate::theme::{Palette, priority_color, status_color, user_status_color};

/// Width of the detail popups.
const DETAIL_WIDTH: u16 = 56;

/// Width of the label column.
const LABEL_WIDTH: usize = 12;

fn field<'a>(label: &str, value: impl Into<String>, style: Style, palette: &Palette) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!(" {label:<LABEL_WIDTH$}"), palette.muted()),
        Span::styled(value.into(), style),
    ])
}

/// Renders the details of a user over `area`.
///
/// Missing dates show as "Never".
pub fn render_user_detail(user: &User, palette: &Palette, area: Rect, buf: &mut Buffer) {
    let text = palette.text();
    let date = |f: UserField| user.value(f).to_string();
    let lines = vec![
        Line::from(""),
        field("Name", user.name.as_str(), palette.title(), palette),
        field("Email", user.email.as_str(), text, palette),
        field("Role", user.role.as_str(), text, palette),
        field(
            "Status",
            user.status.as_str(),
            Style::default().fg(user_status_color(user.status)),
            palette,
        ),
        field("Joined", date(UserField::JoinDate), text, palette),
        field("Last login", date(UserField::LastLogin), text, palette),
        Line::from(""),
        Line::from(Span::styled(" Esc to close", palette.muted())),
    ];
    render_popup("User", lines, (DETAIL_WIDTH, 11), palette, area, buf);
}

/// Renders the details of a kanban card over `area`.
pub fn render_task_detail(task: &Task, palette: &Palette, area: Rect, buf: &mut Buffer) {
    let text = palette.text();
    let due = match task.value(TaskField::DueDate) {
        FieldValue::Date(Some(date)) => date.format("%b %-d, %Y").to_string(),
        other => other.to_string(),
    };
    let lines = vec![
        Line::from(Span::styled(
            format!(" {}", task.title),
            palette.title().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(Span::styled(format!(" {}", task.description), text)),
        Line::from(""),
        field(
            "Status",
            task.status.display_name(),
            Style::default().fg(status_color(task.status)),
            palette,
        ),
        field(
            "Priority",
            task.priority.as_str(),
            Style::default().fg(priority_color(task.priority)),
            palette,
        ),
        field(
            "Assignee",
            format!("{} ({})", task.assignee, task.initials()),
            text,
            palette,
        ),
        field("Due", due, text, palette),
        field("Tags", task.tags.join(", "), palette.key(), palette),
        Line::from(""),
        Line::from(Span::styled(" Esc to close", palette.muted())),
    ];
    render_popup("Task", lines, (DETAIL_WIDTH, 13), palette, area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::render_to_string;
    use snvl_config::Theme;
    use snvl_protocol::dummy::{mock_tasks, mock_users};

    #[test]
    fn user_detail_shows_never_for_missing_login() {
        let users = mock_users();
        let alice = users.iter().find(|u| u.name == "Alice Brown").unwrap();
        let palette = Palette::of(Theme::Dark);

        let content = render_to_string(70, 20, |area, buf| {
            render_user_detail(alice, &palette, area, buf);
        });

        assert!(content.contains("alice@example.com"));
        assert!(content.contains("pending"));
        assert!(content.contains("Never"));
    }

    #[test]
    fn task_detail_lists_metadata() {
        let tasks = mock_tasks();
        let palette = Palette::of(Theme::Light);

        let content = render_to_string(70, 20, |area, buf| {
            render_task_detail(&tasks[0], &palette, area, buf);
        });

        assert!(content.contains("Design Homepage"));
        assert!(content.contains("To Do"));
        assert!(content.contains("John Doe (JD)"));
        assert!(content.contains("Jan 20, 2024"));
        assert!(content.contains("Design, UI/UX"));
    }
}
