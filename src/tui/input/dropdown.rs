use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

pub(super) fn handle_dropdown(app: &mut App, key: KeyEvent) {
    let Some(dropdown) = app.dropdown.as_mut() else {
        app.mode = Mode::Navigate;
        return;
    };
    let last = dropdown.kind.options().len().saturating_sub(1);
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => dropdown.cursor = (dropdown.cursor + 1).min(last),
        KeyCode::Char('k') | KeyCode::Up => dropdown.cursor = dropdown.cursor.saturating_sub(1),
        KeyCode::Enter | KeyCode::Char(' ') => app.apply_dropdown(),
        KeyCode::Esc => app.close_dropdown(),
        _ => {}
    }
}
