use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};
use crate::util::unicode::pop_grapheme;

/// Search box editing. Every keystroke re-filters immediately.
pub(super) fn handle_search(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.mode = Mode::Navigate,
        KeyCode::Esc => {
            app.edit_search(String::clear);
            app.mode = Mode::Navigate;
        }
        KeyCode::Backspace => app.edit_search(pop_grapheme),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.edit_search(|s| s.push(c));
        }
        _ => {}
    }
}
