//! Browse session management
//!
//! A `BrowseSession` is the single owner of the item store and the
//! selection controller. The view layer talks to nothing else: it forwards
//! gestures, renders from the session's accessors, and calls [`tick`] once
//! per loop iteration after drawing.
//!
//! # Workflow
//!
//! ```text
//! Session created
//!     ↓
//! appear() ── posts first-item selection
//!     ↓
//! ┌─→ render from session
//! │       ↓
//! │   tick() ── deferred selection runs against the fresh list
//! │       ↓
//! │   gesture? → dispatch() → controller (+ store on deletion)
//! └───────┘
//! ```
//!
//! [`tick`]: BrowseSession::tick

use super::gesture::{Gesture, GestureOutcome};
use super::variant::Variant;
use crate::model::{Category, Item};
use crate::selection::{ControllerConfig, Detail, SelectionController, SelectionSnapshot};
use crate::store::{ALL_ITEMS_TITLE, Catalog, ItemStore};

/// Store plus selection, driven by gestures
#[derive(Debug)]
pub struct BrowseSession {
    store: ItemStore,
    controller: SelectionController,
}

impl BrowseSession {
    /// Create a session over an existing store
    #[must_use]
    pub fn new(store: ItemStore, config: ControllerConfig) -> Self {
        Self {
            store,
            controller: SelectionController::new(config),
        }
    }

    /// Create a session for a layout preset
    ///
    /// Uses the variant's seed data unless a catalog is given. A flat
    /// catalog opened in a categorized layout becomes a single "All items"
    /// category.
    #[must_use]
    pub fn for_variant(
        variant: Variant,
        catalog: Option<Catalog>,
        auto_select_on_navigate: bool,
    ) -> Self {
        let config = variant.controller_config(auto_select_on_navigate);
        let mut catalog = catalog.unwrap_or_else(|| variant.default_catalog());
        if config.categorized && !catalog.is_categorized() {
            tracing::debug!(%variant, "grouping flat catalog under one category");
            catalog = catalog.into_grouped(ALL_ITEMS_TITLE);
        }

        let store = ItemStore::from_catalog(catalog);
        tracing::info!(%variant, items = store.total_items(), "browse session created");
        Self::new(store, config)
    }

    #[must_use]
    pub const fn store(&self) -> &ItemStore {
        &self.store
    }

    #[must_use]
    pub const fn controller(&self) -> &SelectionController {
        &self.controller
    }

    /// Register a callback for selection changes
    pub fn subscribe(&mut self, observer: impl FnMut(&SelectionSnapshot) + 'static) {
        self.controller.subscribe(observer);
    }

    /// Initial display
    pub fn appear(&mut self) {
        self.controller.appear(&self.store);
    }

    /// Apply a gesture
    pub fn dispatch(&mut self, gesture: Gesture) -> GestureOutcome {
        tracing::trace!(?gesture, "dispatch");
        let before = self.controller.snapshot();

        match gesture {
            Gesture::ItemTapped(id) => self.controller.tap_item(id),
            Gesture::SwipeDeleted(positions) => {
                let visible = self.visible_items();
                let removed = self
                    .controller
                    .delete_at(&mut self.store, &visible, &positions);
                return Self::deleted(removed);
            }
            Gesture::EditButtonPressed => self.controller.toggle_mode(),
            Gesture::DeleteButtonPressed => {
                if !self.controller.delete_enabled() {
                    return GestureOutcome::Ignored;
                }
                let visible = self.visible_items();
                let removed = self.controller.delete_selected(&mut self.store, &visible);
                return Self::deleted(removed);
            }
            Gesture::CategoryTapped(category) => {
                self.controller.select_category(&self.store, category);
            }
            Gesture::SearchTextChanged(text) => self.controller.set_search_text(text),
        }

        if self.controller.snapshot() == before {
            GestureOutcome::Ignored
        } else {
            GestureOutcome::Updated
        }
    }

    fn deleted(removed: Vec<Item>) -> GestureOutcome {
        if removed.is_empty() {
            GestureOutcome::Ignored
        } else {
            GestureOutcome::Deleted(removed)
        }
    }

    /// Run deferred selection tasks; call after each render pass
    ///
    /// Returns `true` if the state changed and a redraw is due.
    pub fn tick(&mut self) -> bool {
        self.controller.tick(&self.store)
    }

    /// Items currently shown in the item column
    #[must_use]
    pub fn visible_items(&self) -> Vec<Item> {
        self.controller.visible_items(&self.store)
    }

    /// Sidebar categories (empty for flat layouts)
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        if self.controller.config().categorized {
            self.store.categories()
        } else {
            &[]
        }
    }

    /// Title of the item column
    #[must_use]
    pub fn list_title(&self) -> String {
        self.controller.list_title(&self.store)
    }

    /// What the detail pane shows
    #[must_use]
    pub fn detail(&self) -> Detail {
        self.controller.current_detail(&self.visible_items())
    }

    /// Current selection state
    #[must_use]
    pub fn snapshot(&self) -> SelectionSnapshot {
        self.controller.snapshot()
    }

    /// Whether the delete button is enabled
    #[must_use]
    pub fn delete_enabled(&self) -> bool {
        self.controller.delete_enabled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::Mode;
    use crate::testing::{ids, names, positions, two_category_store};

    fn three_column(auto: bool) -> BrowseSession {
        let mut session = BrowseSession::new(
            two_category_store(),
            Variant::ThreeColumn.controller_config(auto),
        );
        session.appear();
        session.tick();
        session
    }

    #[test]
    fn test_for_variant_uses_seed_data() {
        let session = BrowseSession::for_variant(Variant::Simple, None, true);
        assert_eq!(session.store().total_items(), 5);
        assert!(session.categories().is_empty());

        let session = BrowseSession::for_variant(Variant::ThreeColumn, None, true);
        assert_eq!(session.categories().len(), 3);
    }

    #[test]
    fn test_flat_catalog_in_three_column_layout() {
        let catalog = Catalog::from_toml(
            r#"
            [[items]]
            name = "Tea"

            [[items]]
            name = "Milk"
            "#,
        )
        .unwrap();
        let mut session = BrowseSession::for_variant(Variant::ThreeColumn, Some(catalog), true);
        session.appear();
        session.tick();

        assert_eq!(session.categories().len(), 1);
        assert_eq!(session.list_title(), "All items");
        assert_eq!(names(&session.visible_items()), ["Tea", "Milk"]);
        assert!(matches!(session.detail(), Detail::Selected(ref item) if item.name == "Tea"));
    }

    #[test]
    fn test_two_column_hides_categories() {
        let session = BrowseSession::for_variant(Variant::TwoColumn, None, true);
        assert!(session.categories().is_empty());
        assert_eq!(session.list_title(), "All items");
        assert_eq!(names(&session.visible_items())[0], "Football");
    }

    #[test]
    fn test_delete_button_ignored_unless_enabled() {
        let mut session = three_column(true);

        assert_eq!(session.dispatch(Gesture::DeleteButtonPressed), GestureOutcome::Ignored);

        // The browsing selection carries over as the working set
        session.dispatch(Gesture::EditButtonPressed);
        assert!(session.delete_enabled());

        let outcome = session.dispatch(Gesture::DeleteButtonPressed);
        assert!(matches!(outcome, GestureOutcome::Deleted(ref items) if items.len() == 1));
        assert_eq!(names(&session.visible_items()), ["A2"]);
    }

    #[test]
    fn test_swipe_delete_reports_items() {
        let mut session = three_column(true);

        let outcome = session.dispatch(Gesture::SwipeDeleted(positions(&[0])));

        assert_eq!(outcome.summary(), Some("Deleted A1".to_string()));
        assert!(session.snapshot().selected_ids.is_empty());
        assert!(session.tick());
        let visible = session.visible_items();
        assert_eq!(session.snapshot().selected_ids, ids(&[visible[0].id]));
    }

    #[test]
    fn test_swipe_out_of_range_is_ignored() {
        let mut session = three_column(true);
        assert_eq!(
            session.dispatch(Gesture::SwipeDeleted(positions(&[42]))),
            GestureOutcome::Ignored
        );
    }

    #[test]
    fn test_retapping_selected_item_is_ignored() {
        let mut session = three_column(true);
        let first = session.visible_items()[0].id;
        assert_eq!(session.dispatch(Gesture::ItemTapped(first)), GestureOutcome::Ignored);
    }

    #[test]
    fn test_category_tap_switches_list() {
        let mut session = three_column(false);
        let cat2 = session.categories()[1].id;

        assert_eq!(session.dispatch(Gesture::CategoryTapped(Some(cat2))), GestureOutcome::Updated);
        assert_eq!(session.list_title(), "cat2");
        assert_eq!(session.detail(), Detail::Empty);
        assert_eq!(session.dispatch(Gesture::CategoryTapped(None)), GestureOutcome::Ignored);
    }

    #[test]
    fn test_edit_button_toggles_mode() {
        let mut session = three_column(true);

        session.dispatch(Gesture::EditButtonPressed);
        assert_eq!(session.snapshot().mode, Mode::Editing);
        assert_eq!(session.detail(), Detail::EditingPlaceholder);

        session.dispatch(Gesture::EditButtonPressed);
        assert_eq!(session.snapshot().mode, Mode::Browsing);
    }
}
