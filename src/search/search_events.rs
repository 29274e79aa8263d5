//! Search input event handling
//!
//! The keyboard state machine over the selection cursor: arrows move it
//! with wrap-around, Enter activates, Escape blurs the input, and any
//! other key drops the selection before it reaches the text area.

use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, Focus};

pub fn handle_search_input_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // Blur only; the selection cursor is left as it was
        KeyCode::Esc => {
            app.focus = Focus::ContentPane;
        }

        KeyCode::Enter => {
            let link = app.search.selected_result().map(|r| r.link.clone());
            if let Some(link) = link {
                app.activate_link(link);
            }
        }

        KeyCode::Down => app.search.select_next(),
        KeyCode::Up => app.search.select_previous(),

        _ => {
            app.search.clear_selection();

            let before = app.search.query().to_string();
            app.search.textarea_mut().input(key);
            if app.search.query() != before {
                app.debouncer.schedule();
            }
        }
    }
}

#[cfg(test)]
#[path = "search_events_tests.rs"]
mod search_events_tests;
