use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::app_state::{App, Focus};
use crate::nav::nav_events;
use crate::search::search_events;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        if self.debouncer.should_execute() {
            self.run_filter();
            self.debouncer.mark_executed();
        }

        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Resize(_, _) => self.mark_dirty(),
                _ => {}
            }
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_key(key) {
            self.mark_dirty();
            return;
        }

        match self.focus {
            Focus::SearchInput => search_events::handle_search_input_key(self, key),
            Focus::NavPane => nav_events::handle_nav_key(self, key),
            Focus::ContentPane => self.handle_content_key(key),
        }
        self.mark_dirty();
    }

    /// Shortcuts that work regardless of focus. Plain characters are only
    /// claimed here when the search input is not focused, so typing stays
    /// unaffected.
    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let cmd = key.modifiers.contains(KeyModifiers::SUPER);

        if ctrl && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return true;
        }

        // `/` (outside the input) and Ctrl+K / Cmd+K jump into the search
        // input
        let slash = key.code == KeyCode::Char('/')
            && key.modifiers.is_empty()
            && self.focus != Focus::SearchInput;
        if slash || ((ctrl || cmd) && key.code == KeyCode::Char('k')) {
            self.focus_search();
            return true;
        }

        if ctrl && key.code == KeyCode::Char('t') {
            self.toggle_theme();
            return true;
        }

        if ctrl && key.code == KeyCode::Char('n') {
            self.nav.toggle_visible();
            if !self.nav.visible && self.focus != Focus::ContentPane {
                self.focus = Focus::ContentPane;
            }
            return true;
        }

        if key.code == KeyCode::Tab {
            self.cycle_focus();
            return true;
        }

        if self.focus != Focus::SearchInput && key.code == KeyCode::Char('q') {
            self.should_quit = true;
            return true;
        }

        false
    }

    fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::SearchInput if self.nav.visible => Focus::NavPane,
            Focus::SearchInput => Focus::ContentPane,
            Focus::NavPane => Focus::ContentPane,
            Focus::ContentPane if self.nav.visible => Focus::SearchInput,
            Focus::ContentPane => Focus::ContentPane,
        };
    }

    fn handle_content_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.content.scroll.scroll_down(1),
            KeyCode::Up | KeyCode::Char('k') => self.content.scroll.scroll_up(1),
            KeyCode::PageDown | KeyCode::Char(' ') => self.content.scroll.page_down(),
            KeyCode::PageUp => self.content.scroll.page_up(),
            KeyCode::Char('g') => self.content.scroll.jump_to_top(),
            KeyCode::Char('G') => self.content.scroll.jump_to_bottom(),
            KeyCode::Char('y') => {
                self.copy_active_section_link();
                return;
            }
            _ => return,
        }
        self.sync_scrollspy();
    }

    fn copy_active_section_link(&mut self) {
        let link = self
            .content
            .section_at_offset(self.content.scroll.offset)
            .and_then(|i| self.content.section_id(i))
            .map(|id| format!("#{}", id));
        if let Some(link) = link {
            self.copy_link(&link);
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
