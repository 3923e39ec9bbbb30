use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::catalog::Topic;
use crate::ops::filter::Completion;
use crate::tui::app::{App, Mode};
use crate::util::unicode::{display_width, fit_to_width, truncate_to_width};

use super::helpers::{pad_row, spans_width};
use super::push_highlighted_spans;

/// Render the topic list: search box, then one row per matching topic
pub fn render_home_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let search_re = app.active_search_re();
    let topics = app.visible_topics();

    let mut lines: Vec<Line> = Vec::new();
    lines.push(search_line(app, width));
    lines.push(Line::from(""));

    if topics.is_empty() {
        lines.push(Line::from(Span::styled(
            " No topics match your search.",
            Style::default().fg(app.theme.dim).bg(bg),
        )));
    }

    let name_width = topics
        .iter()
        .map(|t| display_width(t.name))
        .max()
        .unwrap_or(0);
    for (i, topic) in topics.iter().enumerate() {
        let progress = app.topic_progress(topic);
        lines.push(topic_line(
            app,
            topic,
            progress,
            i == app.home_cursor,
            name_width,
            width,
            search_re.as_ref(),
        ));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn search_line(app: &App, width: usize) -> Line<'static> {
    let bg = app.theme.background;
    let editing = app.mode == Mode::Search;
    let mut spans = vec![Span::styled(
        " Search: ",
        Style::default().fg(app.theme.dim).bg(bg),
    )];
    if app.topic_search.is_empty() && !editing {
        spans.push(Span::styled(
            "press / to find a topic",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    } else {
        spans.push(Span::styled(
            app.topic_search.clone(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
    }
    if editing {
        spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
    }
    pad_row(&mut spans, width, bg);
    Line::from(spans)
}

fn topic_line<'a>(
    app: &App,
    topic: &Topic,
    progress: Completion,
    is_cursor: bool,
    name_width: usize,
    width: usize,
    search_re: Option<&regex::Regex>,
) -> Line<'a> {
    let bg = if is_cursor {
        app.theme.selection_bg
    } else {
        app.theme.background
    };
    let hl_style = Style::default()
        .fg(app.theme.search_match_fg)
        .bg(app.theme.search_match_bg);

    let mut spans: Vec<Span> = Vec::new();
    let marker = if is_cursor { " \u{25B8} " } else { "   " };
    spans.push(Span::styled(
        marker,
        Style::default().fg(app.theme.highlight).bg(bg),
    ));

    let name_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    push_highlighted_spans(&mut spans, topic.name, name_style, hl_style, search_re);
    let pad = name_width.saturating_sub(display_width(topic.name));
    spans.push(Span::styled(" ".repeat(pad + 2), Style::default().bg(bg)));

    let complete = progress.total > 0 && progress.done == progress.total;
    let progress_color = if complete {
        app.theme.green
    } else {
        app.theme.cyan
    };
    spans.push(Span::styled(
        fit_to_width(&format!("{}/{}", progress.done, progress.total), 7),
        Style::default().fg(progress_color).bg(bg),
    ));

    // Description gets whatever room is left
    let room = width.saturating_sub(spans_width(&spans) + 1);
    if room > 0 {
        let desc = truncate_to_width(topic.description, room);
        let desc_style = Style::default().fg(app.theme.text).bg(bg);
        push_highlighted_spans(&mut spans, &desc, desc_style, hl_style, search_re);
    }

    if is_cursor {
        pad_row(&mut spans, width, bg);
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn lists_every_topic_with_seed_progress() {
        let (_tmp, app) = hydrated_app();
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_home_view(frame, &app, area);
        });
        for name in ["HTML", "CSS", "JavaScript", "Python", "Java", "Ruby"] {
            assert!(output.contains(name), "missing {name}:\n{output}");
        }
        assert!(output.contains("0/60"));
        assert!(output.contains("1/5"));
        assert!(output.contains("press / to find a topic"));
    }

    #[test]
    fn cursor_row_is_marked() {
        let (_tmp, mut app) = hydrated_app();
        app.home_cursor = 3;
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_home_view(frame, &app, area);
        });
        let marked: Vec<_> = output.lines().filter(|l| l.contains('\u{25B8}')).collect();
        assert_eq!(marked.len(), 1);
        assert!(marked[0].contains("Python"));
    }

    #[test]
    fn empty_search_result_says_so() {
        let (_tmp, mut app) = hydrated_app();
        app.topic_search = "haskell".into();
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_home_view(frame, &app, area);
        });
        assert!(output.contains("Search: haskell"));
        assert!(output.contains("No topics match your search."));
    }

    #[test]
    fn progress_follows_the_store() {
        let (_tmp, mut app) = hydrated_app();
        app.open_topic("css");
        app.session.store.toggle_task_status("css", "TASK-4521");
        app.go_home();
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_home_view(frame, &app, area);
        });
        let css = output.lines().find(|l| l.contains("CSS")).unwrap();
        assert!(css.contains("1/3"), "{css}");
    }
}
