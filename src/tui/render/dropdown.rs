use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, FilterKind};
use crate::util::unicode::{display_width, fit_to_width};

/// Open filter dropdown, drawn under its button in the filter bar
pub fn render_dropdown(frame: &mut Frame, app: &App, area: Rect) {
    let Some(dropdown) = app.dropdown else {
        return;
    };
    let options = dropdown.kind.options();
    let current = dropdown.kind.current(&app.current_filter());
    let slot = FilterKind::ALL
        .iter()
        .position(|k| *k == dropdown.kind)
        .unwrap_or(0);

    // "✓ " marker + widest label, inside borders
    let inner_width = options.iter().map(|o| display_width(o)).max().unwrap_or(0) + 3;
    let width = (inner_width as u16 + 2).min(area.width);
    let height = (options.len() as u16 + 2).min(area.height);
    let x = app.filter_anchors[slot]
        .max(area.x)
        .min(area.right().saturating_sub(width));
    let popup = Rect::new(x, area.y + 1, width, height.min(area.height.saturating_sub(1)));

    let bg = app.theme.background;
    let lines: Vec<Line> = options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let selected = *option == current;
            let mark = if selected { "\u{2713} " } else { "  " };
            let mut style = Style::default().fg(app.theme.text_bright).bg(bg);
            if i == dropdown.cursor {
                style = style.bg(app.theme.selection_bg).add_modifier(Modifier::BOLD);
            }
            Line::from(Span::styled(
                format!("{}{}", mark, fit_to_width(option, inner_width - 2)),
                style,
            ))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .title(Span::styled(
            format!(" {} ", dropdown.kind.title()),
            Style::default().fg(app.theme.highlight).bg(bg),
        ));

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(block).style(Style::default().bg(bg)),
        popup,
    );
}
