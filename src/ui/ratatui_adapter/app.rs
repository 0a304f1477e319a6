//! Ratatui master/detail application
//!
//! Owns the terminal and the event loop; all selection state stays in the
//! [`BrowseSession`].

use super::events::{EventResult, poll_and_handle};
use super::state::{AppState, Focus, Mode};
use super::theme::Theme;
use super::widgets::{
    CategoryList, DetailPane, HelpBar, HelpOverlay, ItemList, SearchBar, StatusBar,
};
use crate::browse::{BrowseSession, Gesture, GestureOutcome};
use crate::ui::error::{Result, UiError};
use crate::ui::output::MessageLevel;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
};
use std::io::{self, Stdout};
use std::time::Duration;

/// Terminal frontend for a [`BrowseSession`]
pub struct BrowseApp {
    theme: Theme,
    tick_rate: Duration,
}

impl BrowseApp {
    /// Create an app polling for input every `tick_rate`
    ///
    /// # Errors
    ///
    /// Returns `UiError::InvalidConfig` if `tick_rate` is zero.
    pub fn new(tick_rate: Duration) -> Result<Self> {
        if tick_rate.is_zero() {
            return Err(UiError::InvalidConfig(
                "tick rate must be positive".to_string(),
            ));
        }
        Ok(Self {
            theme: Theme::default(),
            tick_rate,
        })
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        Ok(())
    }

    /// Run until the user quits
    ///
    /// The terminal is restored even if the loop fails.
    ///
    /// # Errors
    ///
    /// Returns `UiError::IoError` if the terminal cannot be set up, drawn to
    /// or polled.
    pub fn run(&self, session: &mut BrowseSession) -> Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.run_loop(&mut terminal, session);
        Self::cleanup_terminal()?;
        result
    }

    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        session: &mut BrowseSession,
    ) -> Result<()> {
        let mut state = AppState::for_session(session);
        session.appear();

        loop {
            terminal.draw(|frame| Self::render(frame, session, &state, &self.theme))?;

            // Deferred work runs after the view has seen the new data
            if session.tick() {
                state.follow_selection(session);
                continue;
            }

            if state.should_exit {
                break;
            }
            state.cleanup_messages();

            match poll_and_handle(&mut state, session, self.tick_rate)? {
                EventResult::Gesture(gesture) => {
                    Self::apply(&mut state, session, gesture);
                }
                EventResult::Exit => break,
                EventResult::Continue | EventResult::Ignored => {}
            }
        }

        tracing::info!("browser closed");
        Ok(())
    }

    /// Dispatch a gesture and reflect the outcome in the view state
    pub fn apply(
        state: &mut AppState,
        session: &mut BrowseSession,
        gesture: Gesture,
    ) -> GestureOutcome {
        let outcome = session.dispatch(gesture);
        if let Some(summary) = outcome.summary() {
            state.add_message(MessageLevel::Success, summary);
        }
        state.clamp_cursors(session);
        outcome
    }

    /// Draw one frame
    pub fn render(frame: &mut Frame, session: &BrowseSession, state: &AppState, theme: &Theme) {
        let area = frame.area();

        let mut constraints = Vec::with_capacity(4);
        if state.search_enabled {
            constraints.push(Constraint::Length(3));
        }
        constraints.extend([
            Constraint::Min(5),    // Columns
            Constraint::Length(3), // Status bar
            Constraint::Length(1), // Help bar
        ]);
        let rows = Layout::vertical(constraints).split(area);
        let (search_area, rest) = if state.search_enabled {
            (Some(rows[0]), &rows[1..])
        } else {
            (None, &rows[..])
        };

        if let Some(search_area) = search_area {
            let search_bar = SearchBar::new(&state.query, state.query_cursor, theme)
                .focused(state.mode == Mode::Search);
            frame.render_widget(search_bar, search_area);
        }

        Self::render_columns(frame, session, state, theme, rest[0]);

        let snapshot = session.snapshot();
        let messages = state.active_messages();
        let status_bar = StatusBar::new(&messages, snapshot.mode, theme)
            .delete_button(snapshot.selected_ids.len(), session.delete_enabled());
        frame.render_widget(status_bar, rest[1]);

        let hints = HelpBar::hints_for(state.mode, state.show_categories, state.search_enabled);
        frame.render_widget(HelpBar::new(&hints, theme), rest[2]);

        if state.mode == Mode::Help {
            frame.render_widget(HelpOverlay::new(theme).with_search(state.search_enabled), area);
        }
    }

    fn render_columns(
        frame: &mut Frame,
        session: &BrowseSession,
        state: &AppState,
        theme: &Theme,
        area: Rect,
    ) {
        let snapshot = session.snapshot();
        let visible = session.visible_items();
        let detail = session.detail();

        let (category_area, item_area, detail_area) = if state.show_categories {
            let [categories, items, detail] = Layout::horizontal([
                Constraint::Percentage(25),
                Constraint::Percentage(35),
                Constraint::Percentage(40),
            ])
            .areas(area);
            (Some(categories), items, detail)
        } else {
            let [items, detail] =
                Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
                    .areas(area);
            (None, items, detail)
        };

        if let Some(category_area) = category_area {
            let categories = CategoryList::new(session.categories(), theme)
                .selected(snapshot.selected_category)
                .cursor(state.category_cursor)
                .focused(state.focus == Focus::Categories && state.mode != Mode::Search);
            frame.render_widget(categories, category_area);
        }

        let placeholder = (state.show_categories && snapshot.selected_category.is_none())
            .then_some("Please select a category");
        let items = ItemList::new(&visible, &snapshot.selected_ids, theme)
            .title(session.list_title())
            .mode(snapshot.mode)
            .cursor(state.item_cursor)
            .focused(state.focus == Focus::Items && state.mode != Mode::Search)
            .placeholder(placeholder);
        frame.render_widget(items, item_area);

        let detail_pane = DetailPane::new(&detail, theme).search_text(&snapshot.search_text);
        frame.render_widget(detail_pane, detail_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browse::Variant;
    use ratatui::backend::TestBackend;

    fn draw(session: &BrowseSession, state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(110, 40)).unwrap();
        terminal
            .draw(|frame| BrowseApp::render(frame, session, state, &Theme::default()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_zero_tick_rate_is_rejected() {
        let result = BrowseApp::new(Duration::ZERO);
        assert!(matches!(result, Err(UiError::InvalidConfig(_))));

        assert!(BrowseApp::new(Duration::from_millis(100)).is_ok());
    }

    fn started(variant: Variant) -> (BrowseSession, AppState) {
        let mut session = BrowseSession::for_variant(variant, None, true);
        session.appear();
        session.tick();
        let mut state = AppState::for_session(&session);
        state.follow_selection(&session);
        (session, state)
    }

    #[test]
    fn test_three_column_initial_frame() {
        let (session, state) = started(Variant::ThreeColumn);
        let screen = draw(&session, &state);

        assert!(screen.contains("Category"));
        assert!(screen.contains("Sports"));
        assert!(screen.contains("Animals"));
        assert!(screen.contains("Details for Football"));
        assert!(screen.contains("Really handy for playing football"));
        assert!(screen.contains("[browsing]"));
        assert!(!screen.contains("Search"));
    }

    #[test]
    fn test_category_placeholder_before_appear() {
        let session = BrowseSession::for_variant(Variant::ThreeColumn, None, true);
        let state = AppState::for_session(&session);
        let screen = draw(&session, &state);

        assert!(screen.contains("Please select a category"));
        assert!(screen.contains("Please select an item"));
    }

    #[test]
    fn test_editing_frame_shows_delete_button() {
        let (mut session, mut state) = started(Variant::Simple);
        BrowseApp::apply(&mut state, &mut session, Gesture::EditButtonPressed);
        let screen = draw(&session, &state);

        assert!(screen.contains("[editing]"));
        assert!(screen.contains("Delete (1)"));
        assert!(screen.contains("✓"));
        assert!(screen.contains("Editing"));
    }

    #[test]
    fn test_browsing_frame_hides_delete_button() {
        let (session, state) = started(Variant::Simple);
        let screen = draw(&session, &state);
        assert!(!screen.contains("Delete ("));
    }

    #[test]
    fn test_search_without_results() {
        let (mut session, mut state) = started(Variant::TwoColumn);
        state.query = "zzz".to_string();
        BrowseApp::apply(
            &mut state,
            &mut session,
            Gesture::SearchTextChanged("zzz".to_string()),
        );
        session.tick();
        let screen = draw(&session, &state);

        assert!(screen.contains("Search"));
        assert!(screen.contains("No results for \"zzz\""));
    }

    #[test]
    fn test_deletion_reports_in_status_bar() {
        let (mut session, mut state) = started(Variant::Simple);
        let first = session.visible_items()[0].clone();

        let outcome = BrowseApp::apply(
            &mut state,
            &mut session,
            Gesture::SwipeDeleted([0].into_iter().collect()),
        );
        assert!(matches!(outcome, GestureOutcome::Deleted(_)));

        let screen = draw(&session, &state);
        assert!(screen.contains(&format!("Deleted {}", first.name)));
    }

    #[test]
    fn test_cursor_follows_auto_selection_after_delete() {
        let (mut session, mut state) = started(Variant::Simple);
        let second = session.visible_items()[1].id;
        BrowseApp::apply(&mut state, &mut session, Gesture::ItemTapped(second));
        state.item_cursor = 1;

        BrowseApp::apply(
            &mut state,
            &mut session,
            Gesture::SwipeDeleted([1].into_iter().collect()),
        );
        assert!(session.tick());
        state.follow_selection(&session);

        assert_eq!(state.item_cursor, 0);
        assert_ne!(session.snapshot().selected_ids.first(), Some(&second));
    }

    #[test]
    fn test_help_overlay_frame() {
        let (session, mut state) = started(Variant::TwoColumn);
        state.mode = Mode::Help;
        let screen = draw(&session, &state);

        assert!(screen.contains("Help"));
        assert!(screen.contains("Focus search"));
        assert!(screen.contains("Press any key to close"));
    }
}
