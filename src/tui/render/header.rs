use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

use super::helpers::pad_row;

/// Title row: app name, then the open topic as a breadcrumb
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let mut spans = vec![Span::styled(
        " lessonboard",
        Style::default()
            .fg(app.theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(topic) = app.current_topic() {
        spans.push(Span::styled(
            " \u{203A} ",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        spans.push(Span::styled(
            topic.name,
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
    }
    pad_row(&mut spans, area.width as usize, bg);
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
