use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use regex::Regex;

use crate::model::{FilterSpec, LessonTask};
use crate::ops::filter::Completion;
use crate::tui::app::{App, FilterKind, Mode};
use crate::util::unicode::{display_width, fit_to_width, truncate_to_width};

use super::detail_panel::{self, DETAIL_HEIGHT};
use super::helpers::{checkbox, pad_row, spans_width};
use super::push_highlighted_spans;

const TYPE_WIDTH: usize = 13;
/// Icon, space and the longest status label
const STATUS_WIDTH: usize = 13;
const PRIORITY_WIDTH: usize = 8;
const GAP: &str = "  ";

/// Render a topic: filter bar, column header, task rows, optional detail
/// panel and the completion footer.
pub fn render_topic_view(frame: &mut Frame, app: &mut App, key: &'static str, area: Rect) {
    let show_detail = app.expanded_visible_task().is_some();

    let mut constraints = vec![
        Constraint::Length(1), // filter bar
        Constraint::Length(1), // column header
        Constraint::Min(1),    // rows
    ];
    if show_detail {
        constraints.push(Constraint::Length(DETAIL_HEIGHT));
    }
    constraints.push(Constraint::Length(1)); // footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);
    let rows_area = chunks[2];
    let footer_area = chunks[chunks.len() - 1];

    // Keep the cursor row on screen
    let height = rows_area.height as usize;
    let state = app.topic_state(key);
    if state.cursor < state.scroll_offset {
        state.scroll_offset = state.cursor;
    } else if height > 0 && state.cursor >= state.scroll_offset + height {
        state.scroll_offset = state.cursor + 1 - height;
    }

    let spec = app.current_filter();
    let (bar, anchors) = filter_bar(app, &spec, chunks[0]);
    app.filter_anchors = anchors;

    let app = &*app;
    frame.render_widget(Paragraph::new(bar), chunks[0]);

    let tasks = app.visible_tasks();
    let id_width = tasks
        .iter()
        .map(|t| display_width(&t.id))
        .max()
        .unwrap_or(2)
        .max(2);
    frame.render_widget(
        Paragraph::new(column_header(app, id_width, area.width as usize)),
        chunks[1],
    );

    let search_re = app.active_search_re();
    let cursor = app.current_cursor();
    let scroll = app.topic_states.get(key).map_or(0, |s| s.scroll_offset);
    let expanded = app.session.store.expanded_task_id();
    let mut lines: Vec<Line> = Vec::new();
    if tasks.is_empty() {
        lines.push(Line::from(Span::styled(
            " No results.",
            Style::default().fg(app.theme.dim).bg(app.theme.background),
        )));
    }
    for (i, task) in tasks.iter().enumerate().skip(scroll).take(height) {
        lines.push(task_row(
            app,
            task,
            i == cursor,
            expanded == Some(task.id.as_str()),
            id_width,
            area.width as usize,
            search_re.as_ref(),
        ));
    }
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(app.theme.background)),
        rows_area,
    );

    if show_detail && let Some(task) = app.expanded_visible_task() {
        detail_panel::render_detail_panel(frame, app, task, chunks[3]);
    }

    let footer = Completion::of(tasks.iter().copied()).summary();
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {}", footer),
            Style::default().fg(app.theme.dim).bg(app.theme.background),
        ))),
        footer_area,
    );
}

/// Search box plus the three dropdown buttons. Also returns the screen x of
/// each button so the dropdown can open beneath it.
fn filter_bar(app: &App, spec: &FilterSpec, area: Rect) -> (Line<'static>, [u16; 3]) {
    let bg = app.theme.background;
    let editing = app.mode == Mode::Search;
    let mut spans = vec![Span::styled(
        " Search: ",
        Style::default().fg(app.theme.dim).bg(bg),
    )];
    if spec.search_term.is_empty() && !editing {
        spans.push(Span::styled(
            "Filter tasks...",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    } else {
        spans.push(Span::styled(
            spec.search_term.clone(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
    }
    if editing {
        spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
    }

    let mut anchors = [0u16; 3];
    for (slot, kind) in FilterKind::ALL.iter().enumerate() {
        spans.push(Span::styled("   ", Style::default().bg(bg)));
        anchors[slot] = area.x + spans_width(&spans) as u16;
        let value = kind.current(spec);
        let is_open = app.dropdown.is_some_and(|d| d.kind == *kind);
        let value_color = if value == crate::model::ALL_LABEL {
            app.theme.text
        } else {
            app.theme.highlight
        };
        let mut label_style = Style::default().fg(app.theme.dim).bg(bg);
        if is_open {
            label_style = label_style.add_modifier(Modifier::REVERSED);
        }
        spans.push(Span::styled(format!("{}: ", kind.title()), label_style));
        spans.push(Span::styled(
            format!("{} \u{25BE}", value),
            Style::default().fg(value_color).bg(bg),
        ));
    }

    pad_row(&mut spans, area.width as usize, bg);
    (Line::from(spans), anchors)
}

/// Widths of the fixed columns around the title
fn fixed_width(id_width: usize) -> usize {
    // " [x] " + id + gaps + type + status + priority
    5 + id_width + GAP.len() * 4 + TYPE_WIDTH + STATUS_WIDTH + PRIORITY_WIDTH
}

fn column_header(app: &App, id_width: usize, width: usize) -> Line<'static> {
    let title_width = width.saturating_sub(fixed_width(id_width));
    let text = format!(
        "     {}{GAP}{}{GAP}{}{GAP}{}{GAP}{}",
        fit_to_width("ID", id_width),
        fit_to_width("Type", TYPE_WIDTH),
        fit_to_width("Title", title_width),
        fit_to_width("Status", STATUS_WIDTH),
        fit_to_width("Priority", PRIORITY_WIDTH),
    );
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(app.theme.dim)
            .bg(app.theme.background)
            .add_modifier(Modifier::BOLD),
    ))
}

fn task_row<'a>(
    app: &App,
    task: &LessonTask,
    is_cursor: bool,
    is_expanded: bool,
    id_width: usize,
    width: usize,
    search_re: Option<&Regex>,
) -> Line<'a> {
    let bg = if is_cursor {
        app.theme.selection_bg
    } else {
        app.theme.background
    };
    let gap = || Span::styled(GAP, Style::default().bg(bg));
    let hl_style = Style::default()
        .fg(app.theme.search_match_fg)
        .bg(app.theme.search_match_bg);
    let done = task.is_done();

    let mut spans: Vec<Span> = Vec::new();
    let marker = if is_expanded { "\u{25BE}" } else { " " };
    spans.push(Span::styled(
        marker,
        Style::default().fg(app.theme.highlight).bg(bg),
    ));
    spans.push(Span::styled(
        checkbox(task.status),
        Style::default().fg(app.theme.status_color(task.status)).bg(bg),
    ));
    spans.push(Span::styled(" ", Style::default().bg(bg)));

    // ID (search can match it)
    let id_style = Style::default().fg(app.theme.dim).bg(bg);
    push_highlighted_spans(&mut spans, &task.id, id_style, hl_style, search_re);
    spans.push(Span::styled(
        " ".repeat(id_width.saturating_sub(display_width(&task.id))),
        Style::default().bg(bg),
    ));
    spans.push(gap());

    spans.push(Span::styled(
        fit_to_width(task.task_type.label(), TYPE_WIDTH),
        Style::default().fg(app.theme.type_color(task.task_type)).bg(bg),
    ));
    spans.push(gap());

    let title_width = width.saturating_sub(fixed_width(id_width));
    let title = truncate_to_width(&task.title, title_width);
    let mut title_style = Style::default().fg(app.theme.text_bright).bg(bg);
    if done {
        title_style = title_style.fg(app.theme.dim).add_modifier(Modifier::CROSSED_OUT);
    }
    push_highlighted_spans(&mut spans, &title, title_style, hl_style, search_re);
    spans.push(Span::styled(
        " ".repeat(title_width.saturating_sub(display_width(&title))),
        Style::default().bg(bg),
    ));
    spans.push(gap());

    spans.push(Span::styled(
        fit_to_width(
            &format!("{} {}", task.status.icon(), task.status.label()),
            STATUS_WIDTH,
        ),
        Style::default().fg(app.theme.status_color(task.status)).bg(bg),
    ));
    spans.push(gap());
    spans.push(Span::styled(
        fit_to_width(task.priority.label(), PRIORITY_WIDTH),
        Style::default().fg(app.theme.priority_color(task.priority)).bg(bg),
    ));

    if is_cursor {
        pad_row(&mut spans, width, bg);
    }
    Line::from(spans)
}
