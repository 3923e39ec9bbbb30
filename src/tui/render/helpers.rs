use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::model::TaskStatus;
use crate::util::unicode;

/// Completion checkbox for the first table column
pub(super) fn checkbox(status: TaskStatus) -> &'static str {
    if status == TaskStatus::Done {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum()
}

/// Fill the rest of a row with `bg` so highlighted rows span the full width
pub(super) fn pad_row(spans: &mut Vec<Span<'_>>, width: usize, bg: Color) {
    let used = spans_width(spans);
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(bg)));
    }
}

/// Right-align `hint` after `spans` if it fits in `width`
pub(super) fn push_right_hint<'a>(
    spans: &mut Vec<Span<'a>>,
    hint: &'a str,
    width: usize,
    style: Style,
    bg: Color,
) {
    let used = spans_width(spans);
    let hint_width = unicode::display_width(hint);
    if used + hint_width < width {
        spans.push(Span::styled(
            " ".repeat(width - used - hint_width),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(hint, style));
    }
}
