use ratatui::style::{Modifier, Style};
use tui_textarea::TextArea;

use crate::scroll::ScrollState;

use super::filter::{FilterAction, ResultSet, SearchResult};

/// Creates a TextArea configured for the search input.
fn create_search_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    textarea
}

/// State of the search panel: the input field, the rendered result list,
/// and the selection cursor.
///
/// The cursor is `None` ("no selection") until an arrow key moves it; it
/// resets to `None` whenever the result list is replaced or a
/// non-navigation key is pressed.
pub struct SearchState {
    /// Query text input
    textarea: TextArea<'static>,
    /// Whether the results panel replaces the default navigation view
    visible: bool,
    /// Current result list, fully rebuilt on each filter run
    results: ResultSet,
    /// Selection cursor into `results`
    selected: Option<usize>,
    /// Result list viewport scroll
    pub scroll: ScrollState,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            textarea: create_search_textarea(),
            visible: false,
            results: ResultSet::default(),
            selected: None,
            scroll: ScrollState::new(),
        }
    }

    /// Returns the current query text
    pub fn query(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    pub fn textarea(&self) -> &TextArea<'static> {
        &self.textarea
    }

    pub fn textarea_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.textarea
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }

    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_result(&self) -> Option<&SearchResult> {
        self.selected.and_then(|i| self.results.results.get(i))
    }

    /// Apply a filter outcome to the panel.
    ///
    /// `Reset` clears and hides the panel; `Ignore` leaves it untouched;
    /// `Show` replaces the result list and drops the selection.
    pub fn apply(&mut self, action: FilterAction) {
        match action {
            FilterAction::Reset => {
                self.visible = false;
                self.results = ResultSet::default();
                self.selected = None;
                self.scroll.reset();
            }
            FilterAction::Ignore => {}
            FilterAction::Show(set) => {
                self.visible = true;
                self.results = set;
                self.selected = None;
                self.scroll.reset();
            }
        }
    }

    /// ArrowDown: wrap from the last result (or no selection) to the first.
    pub fn select_next(&mut self) {
        let count = self.results.len();
        if count == 0 {
            return;
        }
        let next = match self.selected {
            Some(i) if i < count - 1 => i + 1,
            _ => 0,
        };
        self.selected = Some(next);
        self.scroll_selection_into_view();
    }

    /// ArrowUp: wrap from the first result (or no selection) to the last.
    pub fn select_previous(&mut self) {
        let count = self.results.len();
        if count == 0 {
            return;
        }
        let previous = match self.selected {
            Some(i) if i > 0 => i - 1,
            _ => count - 1,
        };
        self.selected = Some(previous);
        self.scroll_selection_into_view();
    }

    /// Any non-navigation key drops the selection so it cannot go stale
    /// across content-changing keystrokes.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Display row of result `i`: the separator between the module group
    /// and the page group occupies a row of its own.
    pub fn display_row(&self, i: usize) -> u16 {
        let mut row = i;
        if self.results.has_separator() && i >= self.results.module_count {
            row += 1;
        }
        row.min(u16::MAX as usize) as u16
    }

    /// Total rendered rows, separator included.
    pub fn display_row_count(&self) -> u16 {
        let mut rows = self.results.len();
        if self.results.has_separator() {
            rows += 1;
        }
        rows.min(u16::MAX as usize) as u16
    }

    /// Keep the selected row visible, anchored to the trailing edge.
    fn scroll_selection_into_view(&mut self) {
        if let Some(i) = self.selected {
            let row = self.display_row(i);
            self.scroll.ensure_visible_end(row);
        }
    }
}

#[cfg(test)]
#[path = "search_state_tests.rs"]
mod search_state_tests;
