//! Event handling for the ratatui TUI
//!
//! Maps keyboard and mouse events to cursor movement or to [`Gesture`]s for
//! the session. Nothing here mutates the session directly.

use super::state::{AppState, Focus, Mode};
use crate::browse::{BrowseSession, Gesture};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use std::time::Duration;

/// Result of handling an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// View state changed; keep running
    Continue,
    /// Forward this gesture to the session
    Gesture(Gesture),
    /// Leave the app
    Exit,
    /// No action taken
    Ignored,
}

/// Number of rows in the focused column
fn focused_len(state: &AppState, session: &BrowseSession) -> usize {
    match state.focus {
        Focus::Categories => session.categories().len(),
        Focus::Items => session.visible_items().len(),
    }
}

/// Tap whatever is under the focused cursor
fn tap(state: &mut AppState, session: &BrowseSession) -> EventResult {
    match state.focus {
        Focus::Categories => match session.categories().get(state.category_cursor) {
            Some(category) => {
                state.focus = Focus::Items;
                state.item_cursor = 0;
                EventResult::Gesture(Gesture::CategoryTapped(Some(category.id)))
            }
            None => EventResult::Ignored,
        },
        Focus::Items => session
            .visible_items()
            .get(state.item_cursor)
            .map_or(EventResult::Ignored, |item| {
                EventResult::Gesture(Gesture::ItemTapped(item.id))
            }),
    }
}

/// Handle events in normal mode
pub(crate) fn handle_normal_mode(
    state: &mut AppState,
    session: &BrowseSession,
    key: KeyEvent,
) -> EventResult {
    match (key.code, key.modifiers) {
        // Exit
        (KeyCode::Esc | KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            state.should_exit = true;
            EventResult::Exit
        }

        // Navigation
        (KeyCode::Up | KeyCode::Char('k'), _) => {
            state.cursor_up();
            EventResult::Continue
        }
        (KeyCode::Down | KeyCode::Char('j'), _) => {
            state.cursor_down(focused_len(state, session));
            EventResult::Continue
        }
        (KeyCode::Home, _) => {
            state.jump_to_start();
            EventResult::Continue
        }
        (KeyCode::End, _) => {
            let len = focused_len(state, session);
            state.jump_to_end(len);
            EventResult::Continue
        }
        (KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right, _) => {
            if state.show_categories {
                state.toggle_focus();
                EventResult::Continue
            } else {
                EventResult::Ignored
            }
        }

        // Gestures
        (KeyCode::Enter | KeyCode::Char(' '), _) => tap(state, session),
        (KeyCode::Char('e'), _) => EventResult::Gesture(Gesture::EditButtonPressed),
        (KeyCode::Char('x'), _) => EventResult::Gesture(Gesture::DeleteButtonPressed),
        (KeyCode::Char('d') | KeyCode::Delete, _) => {
            if state.focus == Focus::Items && state.item_cursor < session.visible_items().len() {
                EventResult::Gesture(Gesture::SwipeDeleted([state.item_cursor].into_iter().collect()))
            } else {
                EventResult::Ignored
            }
        }

        // Search
        (KeyCode::Char('/'), _) => {
            if state.search_enabled {
                state.mode = Mode::Search;
                state.focus = Focus::Items;
                EventResult::Continue
            } else {
                EventResult::Ignored
            }
        }

        // Help overlay
        (KeyCode::F(1) | KeyCode::Char('?'), _) => {
            state.mode = Mode::Help;
            EventResult::Continue
        }

        _ => EventResult::Ignored,
    }
}

/// Handle events while the search bar has focus
pub(crate) fn handle_search_mode(state: &mut AppState, key: KeyEvent) -> EventResult {
    let changed = match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            state.should_exit = true;
            return EventResult::Exit;
        }
        (KeyCode::Esc | KeyCode::Enter | KeyCode::Down | KeyCode::Tab, _) => {
            state.mode = Mode::Normal;
            return EventResult::Continue;
        }
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            let had_text = !state.query.is_empty();
            state.query_clear();
            had_text
        }
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            state.query_push(c);
            true
        }
        (KeyCode::Backspace, _) => state.query_backspace(),
        (KeyCode::Left, _) => {
            state.query_cursor_left();
            return EventResult::Continue;
        }
        (KeyCode::Right, _) => {
            state.query_cursor_right();
            return EventResult::Continue;
        }
        _ => return EventResult::Ignored,
    };

    if changed {
        state.item_cursor = 0;
        EventResult::Gesture(Gesture::SearchTextChanged(state.query.clone()))
    } else {
        EventResult::Ignored
    }
}

/// Handle events in help mode
fn handle_help_mode(state: &mut AppState) -> EventResult {
    // Any key closes help
    state.mode = Mode::Normal;
    EventResult::Continue
}

/// Handle mouse events
fn handle_mouse(state: &mut AppState, session: &BrowseSession, mouse: MouseEvent) -> EventResult {
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            state.cursor_up();
            EventResult::Continue
        }
        MouseEventKind::ScrollDown => {
            state.cursor_down(focused_len(state, session));
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Route one key event by mode
pub fn handle_key(state: &mut AppState, session: &BrowseSession, key: KeyEvent) -> EventResult {
    match state.mode {
        Mode::Normal => handle_normal_mode(state, session, key),
        Mode::Search => handle_search_mode(state, key),
        Mode::Help => handle_help_mode(state),
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(
    state: &mut AppState,
    session: &BrowseSession,
    timeout: Duration,
) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Ignored);
    }

    let result = match event::read()? {
        Event::Key(key) if key.kind == event::KeyEventKind::Press => {
            handle_key(state, session, key)
        }
        Event::Mouse(mouse) => handle_mouse(state, session, mouse),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browse::Variant;
    use crate::model::{CategoryId, ItemId};
    use crate::testing::{lettered_store, positions, two_category_store};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn simple_session() -> BrowseSession {
        let mut session = BrowseSession::new(
            lettered_store(&["A", "B", "C"]),
            Variant::Simple.controller_config(true),
        );
        session.appear();
        session.tick();
        session
    }

    fn three_column_session() -> BrowseSession {
        let mut session = BrowseSession::new(
            two_category_store(),
            Variant::ThreeColumn.controller_config(true),
        );
        session.appear();
        session.tick();
        session
    }

    #[test]
    fn test_navigation_handling() {
        let session = simple_session();
        let mut state = AppState::for_session(&session);

        let result = handle_key(&mut state, &session, key(KeyCode::Down));
        assert_eq!(result, EventResult::Continue);
        assert_eq!(state.item_cursor, 1);

        handle_key(&mut state, &session, key(KeyCode::Char('j')));
        handle_key(&mut state, &session, key(KeyCode::Char('j')));
        assert_eq!(state.item_cursor, 2);

        handle_key(&mut state, &session, key(KeyCode::Char('k')));
        assert_eq!(state.item_cursor, 1);
    }

    #[test]
    fn test_enter_taps_item_under_cursor() {
        let session = simple_session();
        let mut state = AppState::for_session(&session);
        state.item_cursor = 1;

        assert_eq!(
            handle_key(&mut state, &session, key(KeyCode::Enter)),
            EventResult::Gesture(Gesture::ItemTapped(ItemId(2)))
        );
        assert_eq!(
            handle_key(&mut state, &session, key(KeyCode::Char(' '))),
            EventResult::Gesture(Gesture::ItemTapped(ItemId(2)))
        );
    }

    #[test]
    fn test_enter_on_category_moves_focus() {
        let session = three_column_session();
        let mut state = AppState::for_session(&session);
        state.category_cursor = 1;

        assert_eq!(
            handle_key(&mut state, &session, key(KeyCode::Enter)),
            EventResult::Gesture(Gesture::CategoryTapped(Some(CategoryId(2))))
        );
        assert_eq!(state.focus, Focus::Items);
    }

    #[test]
    fn test_toolbar_keys() {
        let session = simple_session();
        let mut state = AppState::for_session(&session);

        assert_eq!(
            handle_key(&mut state, &session, key(KeyCode::Char('e'))),
            EventResult::Gesture(Gesture::EditButtonPressed)
        );
        assert_eq!(
            handle_key(&mut state, &session, key(KeyCode::Char('x'))),
            EventResult::Gesture(Gesture::DeleteButtonPressed)
        );
    }

    #[test]
    fn test_swipe_delete_at_cursor() {
        let session = simple_session();
        let mut state = AppState::for_session(&session);
        state.item_cursor = 2;

        assert_eq!(
            handle_key(&mut state, &session, key(KeyCode::Char('d'))),
            EventResult::Gesture(Gesture::SwipeDeleted(positions(&[2])))
        );
    }

    #[test]
    fn test_swipe_delete_needs_item_focus() {
        let session = three_column_session();
        let mut state = AppState::for_session(&session);
        assert_eq!(state.focus, Focus::Categories);

        assert_eq!(
            handle_key(&mut state, &session, key(KeyCode::Char('d'))),
            EventResult::Ignored
        );
    }

    #[test]
    fn test_focus_switch_only_with_categories() {
        let session = simple_session();
        let mut state = AppState::for_session(&session);
        assert_eq!(handle_key(&mut state, &session, key(KeyCode::Tab)), EventResult::Ignored);

        let session = three_column_session();
        let mut state = AppState::for_session(&session);
        handle_key(&mut state, &session, key(KeyCode::Right));
        assert_eq!(state.focus, Focus::Items);
        handle_key(&mut state, &session, key(KeyCode::Left));
        assert_eq!(state.focus, Focus::Categories);
    }

    #[test]
    fn test_search_query_input() {
        let mut session = BrowseSession::for_variant(Variant::TwoColumn, None, true);
        session.appear();
        session.tick();
        let mut state = AppState::for_session(&session);

        assert_eq!(
            handle_key(&mut state, &session, key(KeyCode::Char('/'))),
            EventResult::Continue
        );
        assert_eq!(state.mode, Mode::Search);

        assert_eq!(
            handle_key(&mut state, &session, key(KeyCode::Char('b'))),
            EventResult::Gesture(Gesture::SearchTextChanged("b".to_string()))
        );
        // 'q' types instead of quitting while searching
        assert_eq!(
            handle_key(&mut state, &session, key(KeyCode::Char('q'))),
            EventResult::Gesture(Gesture::SearchTextChanged("bq".to_string()))
        );
        assert_eq!(
            handle_key(&mut state, &session, key(KeyCode::Backspace)),
            EventResult::Gesture(Gesture::SearchTextChanged("b".to_string()))
        );

        handle_key(&mut state, &session, key(KeyCode::Esc));
        assert_eq!(state.mode, Mode::Normal);
        assert_eq!(state.query, "b");
    }

    #[test]
    fn test_search_disabled_without_search_bar() {
        let session = simple_session();
        let mut state = AppState::for_session(&session);
        assert_eq!(
            handle_key(&mut state, &session, key(KeyCode::Char('/'))),
            EventResult::Ignored
        );
        assert_eq!(state.mode, Mode::Normal);
    }

    #[test]
    fn test_help_overlay_closes_on_any_key() {
        let session = simple_session();
        let mut state = AppState::for_session(&session);

        handle_key(&mut state, &session, key(KeyCode::Char('?')));
        assert_eq!(state.mode, Mode::Help);

        assert_eq!(
            handle_key(&mut state, &session, key(KeyCode::Char('q'))),
            EventResult::Continue
        );
        assert_eq!(state.mode, Mode::Normal);
        assert!(!state.should_exit);
    }

    #[test]
    fn test_exit() {
        let session = simple_session();
        let mut state = AppState::for_session(&session);

        let result = handle_key(
            &mut state,
            &session,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert_eq!(result, EventResult::Exit);
        assert!(state.should_exit);
    }
}
