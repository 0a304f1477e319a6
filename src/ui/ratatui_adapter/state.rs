//! Application state for the ratatui TUI
//!
//! View-only state: which column has focus, where the cursors are, the
//! search query being typed and transient status messages. Everything about
//! selection lives in the [`BrowseSession`]; this state only mirrors it.

use crate::browse::BrowseSession;
use crate::model::Item;
use crate::selection::Detail;
use crate::ui::output::MessageLevel;
use std::time::{Duration, Instant};

/// Current mode of the TUI application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Normal browsing mode
    #[default]
    Normal,
    /// Help overlay is visible
    Help,
    /// Keystrokes edit the search query
    Search,
}

/// Column that receives cursor movement and taps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Category sidebar (three-column layouts only)
    Categories,
    /// Item list
    #[default]
    Items,
}

/// A status message with timestamp for TTL-based expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// Message level (success, error, info)
    pub level: MessageLevel,
    /// Message text
    pub text: String,
    /// When the message was created
    pub created_at: Instant,
}

impl StatusMessage {
    /// Create a new status message
    #[must_use]
    pub fn new(level: MessageLevel, text: String) -> Self {
        Self {
            level,
            text,
            created_at: Instant::now(),
        }
    }

    /// Check if the message has expired based on TTL
    #[must_use]
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

/// Application state for the browser
#[derive(Debug)]
pub struct AppState {
    /// Column with keyboard focus
    pub focus: Focus,
    /// Cursor row in the category column
    pub category_cursor: usize,
    /// Cursor row in the item column
    pub item_cursor: usize,
    /// Search query as typed
    pub query: String,
    /// Byte offset of the cursor within the query
    pub query_cursor: usize,
    /// Current UI mode
    pub mode: Mode,
    /// Whether the layout has a category column
    pub show_categories: bool,
    /// Whether the layout has a search bar
    pub search_enabled: bool,
    /// Status messages
    pub messages: Vec<StatusMessage>,
    /// Message TTL for auto-expiry
    pub message_ttl: Duration,
    /// Whether the app should exit
    pub should_exit: bool,
}

impl AppState {
    /// Create state for a layout
    ///
    /// Focus starts on the category column when there is one.
    #[must_use]
    pub fn new(show_categories: bool, search_enabled: bool) -> Self {
        Self {
            focus: if show_categories {
                Focus::Categories
            } else {
                Focus::Items
            },
            category_cursor: 0,
            item_cursor: 0,
            query: String::new(),
            query_cursor: 0,
            mode: Mode::Normal,
            show_categories,
            search_enabled,
            messages: Vec::new(),
            message_ttl: Duration::from_secs(5),
            should_exit: false,
        }
    }

    /// Create state matching a session's layout
    #[must_use]
    pub fn for_session(session: &BrowseSession) -> Self {
        let config = session.controller().config();
        Self::new(config.categorized, config.search_enabled)
    }

    /// Move the focused cursor up
    pub const fn cursor_up(&mut self) {
        let cursor = self.focused_cursor_mut();
        *cursor = cursor.saturating_sub(1);
    }

    /// Move the focused cursor down, staying within `len` rows
    pub const fn cursor_down(&mut self, len: usize) {
        let cursor = self.focused_cursor_mut();
        if *cursor + 1 < len {
            *cursor += 1;
        }
    }

    /// Jump the focused cursor to the first row
    pub const fn jump_to_start(&mut self) {
        *self.focused_cursor_mut() = 0;
    }

    /// Jump the focused cursor to the last row
    pub const fn jump_to_end(&mut self, len: usize) {
        *self.focused_cursor_mut() = len.saturating_sub(1);
    }

    const fn focused_cursor_mut(&mut self) -> &mut usize {
        match self.focus {
            Focus::Categories => &mut self.category_cursor,
            Focus::Items => &mut self.item_cursor,
        }
    }

    /// Switch focus between columns; a no-op without a category column
    pub const fn toggle_focus(&mut self) {
        if !self.show_categories {
            return;
        }
        self.focus = match self.focus {
            Focus::Categories => Focus::Items,
            Focus::Items => Focus::Categories,
        };
    }

    /// Keep both cursors within the session's current lists
    pub fn clamp_cursors(&mut self, session: &BrowseSession) {
        let categories = session.categories().len();
        let items = session.visible_items().len();
        self.category_cursor = self.category_cursor.min(categories.saturating_sub(1));
        self.item_cursor = self.item_cursor.min(items.saturating_sub(1));
    }

    /// Move the cursors onto what the session currently shows
    ///
    /// The category cursor lands on the selected category and the item
    /// cursor on the item in the detail pane, if any.
    pub fn follow_selection(&mut self, session: &BrowseSession) {
        if let Some(selected) = session.snapshot().selected_category
            && let Some(row) = session.categories().iter().position(|c| c.id == selected)
        {
            self.category_cursor = row;
        }

        let visible = session.visible_items();
        if let Detail::Selected(item) = session.detail()
            && let Some(row) = row_of(&visible, &item)
        {
            self.item_cursor = row;
        }
        self.clamp_cursors(session);
    }

    /// Add a character to the query
    pub fn query_push(&mut self, c: char) {
        self.query.insert(self.query_cursor, c);
        self.query_cursor += c.len_utf8();
    }

    /// Remove a character from the query (backspace)
    ///
    /// Returns `false` if there was nothing to remove.
    pub fn query_backspace(&mut self) -> bool {
        if self.query_cursor == 0 {
            return false;
        }
        let prev_char_boundary = self.query[..self.query_cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i);
        self.query.remove(prev_char_boundary);
        self.query_cursor = prev_char_boundary;
        true
    }

    /// Move query cursor left
    pub fn query_cursor_left(&mut self) {
        if self.query_cursor > 0 {
            self.query_cursor = self.query[..self.query_cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
        }
    }

    /// Move query cursor right
    pub fn query_cursor_right(&mut self) {
        if self.query_cursor < self.query.len() {
            self.query_cursor = self.query[self.query_cursor..]
                .char_indices()
                .nth(1)
                .map_or(self.query.len(), |(i, _)| self.query_cursor + i);
        }
    }

    /// Clear the query
    pub fn query_clear(&mut self) {
        self.query.clear();
        self.query_cursor = 0;
    }

    /// Add a status message
    pub fn add_message(&mut self, level: MessageLevel, text: String) {
        self.messages.push(StatusMessage::new(level, text));
    }

    /// Get non-expired messages
    #[must_use]
    pub fn active_messages(&self) -> Vec<&StatusMessage> {
        self.messages
            .iter()
            .filter(|m| !m.is_expired(self.message_ttl))
            .collect()
    }

    /// Clean up expired messages
    pub fn cleanup_messages(&mut self) {
        self.messages.retain(|m| !m.is_expired(self.message_ttl));
    }
}

fn row_of(visible: &[Item], item: &Item) -> Option<usize> {
    visible.iter().position(|candidate| candidate.id == item.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browse::{Gesture, Variant};
    use crate::model::ItemId;
    use crate::testing::{lettered_store, two_category_store};

    #[test]
    fn test_initial_focus_follows_layout() {
        assert_eq!(AppState::new(true, false).focus, Focus::Categories);
        assert_eq!(AppState::new(false, true).focus, Focus::Items);
    }

    #[test]
    fn test_cursor_movement_is_bounded() {
        let mut state = AppState::new(false, false);

        state.cursor_up();
        assert_eq!(state.item_cursor, 0);

        state.cursor_down(3);
        state.cursor_down(3);
        state.cursor_down(3);
        assert_eq!(state.item_cursor, 2);

        state.jump_to_start();
        assert_eq!(state.item_cursor, 0);

        state.jump_to_end(3);
        assert_eq!(state.item_cursor, 2);
    }

    #[test]
    fn test_cursors_are_per_column() {
        let mut state = AppState::new(true, false);

        state.cursor_down(3);
        assert_eq!(state.category_cursor, 1);

        state.toggle_focus();
        assert_eq!(state.focus, Focus::Items);
        state.cursor_down(3);
        assert_eq!(state.item_cursor, 1);
        assert_eq!(state.category_cursor, 1);
    }

    #[test]
    fn test_toggle_focus_without_categories() {
        let mut state = AppState::new(false, true);
        state.toggle_focus();
        assert_eq!(state.focus, Focus::Items);
    }

    #[test]
    fn test_query_editing() {
        let mut state = AppState::new(false, true);

        for c in "cat".chars() {
            state.query_push(c);
        }
        assert_eq!(state.query, "cat");
        assert_eq!(state.query_cursor, 3);

        assert!(state.query_backspace());
        assert_eq!(state.query, "ca");

        state.query_cursor_left();
        state.query_push('o');
        assert_eq!(state.query, "coa");

        state.query_cursor_right();
        assert_eq!(state.query_cursor, 3);

        state.query_clear();
        assert!(!state.query_backspace());
        assert!(state.query.is_empty());
    }

    #[test]
    fn test_query_editing_multibyte() {
        let mut state = AppState::new(false, true);
        state.query_push('é');
        state.query_push('x');
        state.query_cursor_left();
        state.query_cursor_left();
        assert_eq!(state.query_cursor, 0);
        state.query_cursor_right();
        assert_eq!(state.query_cursor, 'é'.len_utf8());
    }

    #[test]
    fn test_follow_selection_after_auto_select() {
        let mut session =
            BrowseSession::new(two_category_store(), Variant::ThreeColumn.controller_config(true));
        session.appear();
        session.tick();

        let mut state = AppState::for_session(&session);
        state.item_cursor = 1;
        state.follow_selection(&session);
        assert_eq!(state.category_cursor, 0);
        assert_eq!(state.item_cursor, 0);

        session.dispatch(Gesture::CategoryTapped(Some(session.categories()[1].id)));
        session.tick();
        state.follow_selection(&session);
        assert_eq!(state.category_cursor, 1);
        assert_eq!(state.item_cursor, 0);
    }

    #[test]
    fn test_clamp_after_deletion() {
        let mut session = BrowseSession::new(
            lettered_store(&["A", "B", "C"]),
            Variant::Simple.controller_config(true),
        );
        session.appear();
        session.tick();
        session.dispatch(Gesture::ItemTapped(ItemId(3)));

        let mut state = AppState::for_session(&session);
        state.follow_selection(&session);
        assert_eq!(state.item_cursor, 2);

        session.dispatch(Gesture::SwipeDeleted([2].into_iter().collect()));
        state.clamp_cursors(&session);
        assert_eq!(state.item_cursor, 1);
    }

    #[test]
    fn test_messages_expire() {
        let mut state = AppState::new(false, false);
        state.add_message(MessageLevel::Success, "Deleted Cat".to_string());
        assert_eq!(state.active_messages().len(), 1);

        state.message_ttl = Duration::ZERO;
        std::thread::sleep(Duration::from_millis(2));
        assert!(state.active_messages().is_empty());
        state.cleanup_messages();
        assert!(state.messages.is_empty());
    }
}
