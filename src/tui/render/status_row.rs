use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode, View};

use super::helpers::{pad_row, push_right_hint};

const HOME_HINT: &str = "j/k move  Enter open  / search  q quit";
const TOPIC_HINT: &str = "Enter details  Space toggle  / search  s/p/t filter  c clear  Esc back";
const SEARCH_HINT: &str = "Enter done  Esc clear";
const DROPDOWN_HINT: &str = "j/k choose  Enter apply  Esc cancel";

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let hint_style = Style::default().fg(app.theme.dim).bg(bg);

    let mut spans: Vec<Span> = Vec::new();
    if let Some(message) = &app.status_message {
        spans.push(Span::styled(
            format!(" {}", message),
            Style::default().fg(app.theme.yellow).bg(bg),
        ));
    }

    let hint = match app.mode {
        Mode::Search => Some(SEARCH_HINT),
        Mode::Dropdown => Some(DROPDOWN_HINT),
        Mode::Navigate if app.show_key_hints => Some(match app.view {
            View::Home => HOME_HINT,
            View::Topic(_) => TOPIC_HINT,
        }),
        Mode::Navigate => None,
    };
    if let Some(hint) = hint {
        push_right_hint(&mut spans, hint, width, hint_style, bg);
    }
    pad_row(&mut spans, width, bg);

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
