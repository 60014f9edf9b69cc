use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    let page = app.viewport_height.max(1) as isize;

    match (key.modifiers, key.code) {
        // Quit
        (_, KeyCode::Char('q')) | (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            app.should_quit = true;
        }

        // Enter search
        (_, KeyCode::Char('/')) => {
            app.mode = Mode::Search;
            app.search_input.clear();
            app.result_cursor = 0;
        }

        // Help overlay
        (_, KeyCode::Char('?')) => {
            app.show_help = true;
        }

        // Theme toggle
        (_, KeyCode::Char('t')) => {
            app.toggle_theme();
        }

        // Yank: copy the highlighted command's cmd text
        (_, KeyCode::Char('y')) => {
            if let Some(id) = app.navigator.highlighted().map(String::from) {
                app.copy_command_text(&id);
            } else {
                app.status_message = Some("jump to a command first (/)".to_string());
            }
        }

        // Line scrolling (implicit direction: scroll drives the active
        // category through the viewport observation)
        (_, KeyCode::Char('j') | KeyCode::Down) => app.scroll_by(1),
        (_, KeyCode::Char('k') | KeyCode::Up) => app.scroll_by(-1),

        // Page scrolling
        (KeyModifiers::CONTROL, KeyCode::Char('d')) => app.scroll_by(page / 2),
        (KeyModifiers::CONTROL, KeyCode::Char('u')) => app.scroll_by(-(page / 2)),
        (_, KeyCode::PageDown) => app.scroll_by(page),
        (_, KeyCode::PageUp) => app.scroll_by(-page),

        // Jump to extremes
        (_, KeyCode::Char('g') | KeyCode::Home) => app.scroll_to(0),
        (_, KeyCode::Char('G') | KeyCode::End) => {
            let bottom = app.max_scroll();
            app.scroll_to(bottom);
        }

        // Explicit category selection
        (_, KeyCode::Tab) => app.select_adjacent_category(1),
        (_, KeyCode::BackTab) => app.select_adjacent_category(-1),
        (_, KeyCode::Char(c @ '1'..='9')) => {
            let index = c as usize - '1' as usize;
            app.select_category_index(index);
        }

        _ => {}
    }
}
