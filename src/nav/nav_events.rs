//! Navigation pane event handling

use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, Focus};

use super::nav_state::NavCommand;

pub fn handle_nav_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.focus = Focus::ContentPane;
        }
        KeyCode::Down | KeyCode::Char('j') => app.nav.cursor_down(),
        KeyCode::Up | KeyCode::Char('k') => app.nav.cursor_up(),
        KeyCode::Enter | KeyCode::Char(' ') => match app.nav.activate_cursor() {
            Some(NavCommand::JumpToSection(section)) => {
                app.content.jump_to_section(section);
                app.sync_scrollspy();
            }
            Some(NavCommand::OpenLink(link)) => app.activate_link(link),
            None => {}
        },
        KeyCode::Char('y') => {
            let link = app.nav.link_at_cursor().map(str::to_string);
            if let Some(link) = link {
                app.copy_link(&link);
            }
        }
        _ => {}
    }
}
