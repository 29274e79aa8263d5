//! Tests for the search input keyboard state machine

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Focus};
use crate::test_utils::test_helpers::test_app;

use super::handle_search_input_key;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// App with the search input focused and a filtered result list showing.
fn searching_app(query: &str) -> App {
    let mut app = test_app();
    app.focus = Focus::SearchInput;
    app.search.textarea_mut().insert_str(query);
    app.run_filter();
    app
}

#[test]
fn test_escape_blurs_without_touching_selection() {
    let mut app = searching_app("arr");
    handle_search_input_key(&mut app, key(KeyCode::Down));
    assert_eq!(app.search.selected(), Some(0));

    handle_search_input_key(&mut app, key(KeyCode::Esc));
    assert_eq!(app.focus, Focus::ContentPane);
    // Cursor state unaffected by blur
    assert_eq!(app.search.selected(), Some(0));
}

#[test]
fn test_arrow_down_selects_first() {
    let mut app = searching_app("arr");
    assert_eq!(app.search.selected(), None);

    handle_search_input_key(&mut app, key(KeyCode::Down));
    assert_eq!(app.search.selected(), Some(0));
}

#[test]
fn test_arrow_down_wraps_past_last() {
    let mut app = searching_app("arr");
    let count = app.search.results().len();
    assert_eq!(count, 2);

    for _ in 0..count {
        handle_search_input_key(&mut app, key(KeyCode::Down));
    }
    assert_eq!(app.search.selected(), Some(count - 1));

    handle_search_input_key(&mut app, key(KeyCode::Down));
    assert_eq!(app.search.selected(), Some(0));
}

#[test]
fn test_arrow_up_from_none_selects_last() {
    let mut app = searching_app("arr");

    handle_search_input_key(&mut app, key(KeyCode::Up));
    assert_eq!(app.search.selected(), Some(app.search.results().len() - 1));
}

#[test]
fn test_arrows_noop_without_results() {
    let mut app = test_app();
    app.focus = Focus::SearchInput;

    handle_search_input_key(&mut app, key(KeyCode::Down));
    assert_eq!(app.search.selected(), None);
    handle_search_input_key(&mut app, key(KeyCode::Up));
    assert_eq!(app.search.selected(), None);
}

#[test]
fn test_enter_without_selection_is_noop() {
    let mut app = searching_app("arr");
    assert!(app.search.has_results());

    handle_search_input_key(&mut app, key(KeyCode::Enter));
    assert!(!app.should_quit());
    assert!(app.pending_link.is_none());
}

#[test]
fn test_enter_activates_selected_link() {
    let mut app = searching_app("arr");
    handle_search_input_key(&mut app, key(KeyCode::Down));

    handle_search_input_key(&mut app, key(KeyCode::Enter));
    // --print mode: activation queues the link and quits
    assert!(app.should_quit());
    assert_eq!(app.pending_link.as_deref(), Some("arrays.html"));
}

#[test]
fn test_other_key_resets_selection() {
    let mut app = searching_app("arr");
    handle_search_input_key(&mut app, key(KeyCode::Down));
    assert_eq!(app.search.selected(), Some(0));

    handle_search_input_key(&mut app, key(KeyCode::Char('a')));
    assert_eq!(app.search.selected(), None);
}

#[test]
fn test_text_change_schedules_filter() {
    let mut app = searching_app("arr");
    app.debouncer.mark_executed();
    assert!(!app.debouncer.has_pending());

    handle_search_input_key(&mut app, key(KeyCode::Char('a')));
    assert_eq!(app.query(), "arra");
    assert!(app.debouncer.has_pending());
}

#[test]
fn test_non_editing_key_does_not_schedule() {
    let mut app = searching_app("arr");
    app.debouncer.mark_executed();

    // Home moves the cursor but leaves the text alone
    handle_search_input_key(&mut app, key(KeyCode::Home));
    assert_eq!(app.query(), "arr");
    assert!(!app.debouncer.has_pending());
}

#[test]
fn test_burst_filters_once_with_final_text() {
    let mut app = test_app();
    app.focus = Focus::SearchInput;

    // Five rapid keystrokes; the debouncer holds a single pending run
    for c in ['a', 'r', 'r', 'a', 'y'] {
        handle_search_input_key(&mut app, key(KeyCode::Char(c)));
    }
    assert!(app.debouncer.has_pending());
    assert!(!app.search.is_visible());

    // The quiet period elapses: one execution, over the final text
    app.run_filter();
    app.debouncer.mark_executed();

    assert_eq!(app.query(), "array");
    assert!(app.search.is_visible());
    assert_eq!(app.search.results().module_count, 1);
    assert!(!app.debouncer.has_pending());
}
