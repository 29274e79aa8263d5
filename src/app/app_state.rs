use crate::config::{ClipboardBackend, Config};
use crate::content::ContentState;
use crate::index::DocIndex;
use crate::nav::NavState;
use crate::notification::NotificationState;
use crate::opener;
use crate::search::{run_filter, Debouncer, SearchState};
use crate::theme::{persist, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    SearchInput,
    NavPane,
    ContentPane,
}

pub struct App {
    pub index: DocIndex,
    pub search: SearchState,
    pub debouncer: Debouncer,
    pub nav: NavState,
    pub content: ContentState,
    pub theme: Theme,
    pub notification: NotificationState,
    pub focus: Focus,
    pub clipboard_backend: ClipboardBackend,
    /// --print: activation prints the link instead of opening it
    pub print_links: bool,
    pub should_quit: bool,
    /// Link printed by main once the terminal is restored
    pub pending_link: Option<String>,
    dirty: bool,
}

impl App {
    pub fn new(index: DocIndex, config: &Config, print_links: bool) -> Self {
        let dark = persist::load_dark_mode().unwrap_or(config.theme.dark);
        Self::with_dark_mode(index, config, print_links, dark)
    }

    pub fn with_dark_mode(
        index: DocIndex,
        config: &Config,
        print_links: bool,
        dark: bool,
    ) -> Self {
        let nav = NavState::new(&index.nav, &index.document);
        let content = ContentState::new(&index.document);

        Self {
            index,
            search: SearchState::new(),
            debouncer: Debouncer::new(config.search.debounce_ms),
            nav,
            content,
            theme: Theme::from_dark_flag(dark),
            notification: NotificationState::new(),
            focus: Focus::ContentPane,
            clipboard_backend: config.clipboard.backend,
            print_links,
            should_quit: false,
            pending_link: None,
            dirty: true,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn should_render(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn query(&self) -> &str {
        self.search.query()
    }

    /// Run the pending filter over the current query text.
    pub fn run_filter(&mut self) {
        let action = run_filter(&self.index, self.search.query());
        self.search.apply(action);
        self.mark_dirty();
    }

    /// Flip the palette and persist the preference.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        if let Err(e) = persist::store_dark_mode(self.theme.is_dark()) {
            self.notification
                .show_warning(&format!("Failed to save theme preference: {}", e));
        }
    }

    /// Move focus into the search input, revealing the pane that hosts it.
    pub fn focus_search(&mut self) {
        if !self.nav.visible {
            self.nav.visible = true;
        }
        self.focus = Focus::SearchInput;
    }

    /// Navigate to `link`: hand it to the system opener, or queue it for
    /// printing when `--print` was given or no opener exists.
    pub fn activate_link(&mut self, link: String) {
        if self.print_links {
            self.pending_link = Some(link);
            self.should_quit = true;
            return;
        }

        match opener::find_opener() {
            Some(command) => match opener::open_link(&command, &link) {
                Ok(()) => self.notification.show_info(&format!("Opening {}", link)),
                Err(e) => self
                    .notification
                    .show_warning(&format!("Failed to open {}: {}", link, e)),
            },
            None => {
                self.pending_link = Some(link);
                self.should_quit = true;
            }
        }
    }

    pub fn copy_link(&mut self, link: &str) {
        match crate::clipboard::copy_text(link, self.clipboard_backend) {
            Ok(()) => self.notification.show_info("Link copied"),
            Err(e) => self
                .notification
                .show_warning(&format!("Copy failed: {}", e)),
        }
    }

    /// Scroll-spy refresh after any content scroll.
    pub fn sync_scrollspy(&mut self) {
        self.nav
            .sync_active(self.content.scroll.offset, self.content.section_starts());
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
