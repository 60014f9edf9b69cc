use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

pub(super) fn handle_search(app: &mut App, key: KeyEvent, now: Instant) {
    match (key.modifiers, key.code) {
        // Cancel search
        (_, KeyCode::Esc) => {
            app.mode = Mode::Navigate;
            app.search_input.clear();
            app.result_cursor = 0;
        }

        // Jump to the selected result
        (_, KeyCode::Enter) => {
            app.jump_to_selected_result(now);
        }

        // Move the dropdown selection
        (_, KeyCode::Down) => {
            let count = app.results().len();
            if count > 0 {
                app.result_cursor = (app.result_cursor + 1).min(count - 1);
            }
        }
        (_, KeyCode::Up) => {
            app.result_cursor = app.result_cursor.saturating_sub(1);
        }

        // Copy the selected result's cmd without leaving search
        (KeyModifiers::CONTROL, KeyCode::Char('y')) => {
            let id = app
                .results()
                .get(app.result_cursor)
                .map(|h| h.command.id.clone());
            if let Some(id) = id {
                app.copy_command_text(&id);
            }
        }

        // Backspace (full character, not a byte)
        (_, KeyCode::Backspace) => {
            app.search_input.pop();
            app.result_cursor = 0;
        }

        // Type character
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            app.search_input.push(c);
            app.result_cursor = 0;
        }

        _ => {}
    }
}
