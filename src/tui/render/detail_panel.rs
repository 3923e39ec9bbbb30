use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::model::LessonTask;
use crate::tui::app::App;

/// Rows reserved for the panel, borders included
pub const DETAIL_HEIGHT: u16 = 7;

/// Expanded view of one task: title, the three attributes, then the
/// description wrapped to the panel width.
pub fn render_detail_panel(frame: &mut Frame, app: &App, task: &LessonTask, area: Rect) {
    let bg = app.theme.background;
    let label = Style::default().fg(app.theme.dim).bg(bg);

    let mut lines = vec![
        Line::from(Span::styled(
            task.title.clone(),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Status: ", label),
            Span::styled(
                format!("{} {}", task.status.icon(), task.status),
                Style::default().fg(app.theme.status_color(task.status)).bg(bg),
            ),
            Span::styled("   Priority: ", label),
            Span::styled(
                task.priority.label(),
                Style::default()
                    .fg(app.theme.priority_color(task.priority))
                    .bg(bg),
            ),
            Span::styled("   Type: ", label),
            Span::styled(
                task.task_type.label(),
                Style::default().fg(app.theme.type_color(task.task_type)).bg(bg),
            ),
        ]),
    ];
    if task.description.is_empty() {
        lines.push(Line::from(Span::styled("No description.", label)));
    } else {
        lines.push(Line::from(Span::styled(
            task.description.clone(),
            Style::default().fg(app.theme.text).bg(bg),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .title(Span::styled(
            format!(" {} ", task.id),
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
