use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, FilterKind, Mode, View};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match app.view {
        View::Home => handle_home(app, key),
        View::Topic(_) => handle_topic(app, key),
    }
}

/// Keys shared by both lists
fn handle_list_motion(app: &mut App, code: KeyCode) -> bool {
    match code {
        KeyCode::Char('j') | KeyCode::Down => app.move_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_cursor(-1),
        KeyCode::Char('g') | KeyCode::Home => app.jump_cursor(false),
        KeyCode::Char('G') | KeyCode::End => app.jump_cursor(true),
        KeyCode::Char('/') => app.mode = Mode::Search,
        KeyCode::Char('q') => app.should_quit = true,
        _ => return false,
    }
    true
}

fn handle_home(app: &mut App, key: KeyEvent) {
    if handle_list_motion(app, key.code) {
        return;
    }
    match key.code {
        KeyCode::Enter => {
            if let Some(topic) = app.selected_topic_key() {
                app.open_topic(topic);
            }
        }
        KeyCode::Esc if !app.topic_search.is_empty() => app.edit_search(String::clear),
        _ => {}
    }
}

fn handle_topic(app: &mut App, key: KeyEvent) {
    if handle_list_motion(app, key.code) {
        return;
    }
    match key.code {
        KeyCode::Enter => app.toggle_expanded_selected(),
        KeyCode::Char(' ') | KeyCode::Char('x') => app.toggle_selected_status(),
        KeyCode::Char('s') => app.open_dropdown(FilterKind::Status),
        KeyCode::Char('p') => app.open_dropdown(FilterKind::Priority),
        KeyCode::Char('t') => app.open_dropdown(FilterKind::Type),
        KeyCode::Char('c') => app.clear_filters(),
        KeyCode::Esc => app.go_home(),
        _ => {}
    }
}
