//! Selection controller
//!
//! Keeps the selected item ids consistent with a mutable item list. The
//! controller owns the selection set, the browse/edit mode, the selected
//! category and the search filter, and applies the auto-selection policy:
//!
//! | Trigger                         | Flat list | Categorized / filtered list     |
//! |---------------------------------|-----------|---------------------------------|
//! | Initial display                 | always    | always, if no category selected |
//! | Category changed                | n/a       | if `auto_select_on_navigate`    |
//! | Search text changed             | n/a       | if `auto_select_on_navigate`    |
//! | Edit → browse                   | always    | always                          |
//! | Deletion emptied selection      | always    | always (unless editing)         |
//!
//! Auto-selection is never applied inline. It is posted to a task queue and
//! runs on the next [`SelectionController::tick`], against the list as it
//! looks at that moment.

use super::scheduler::{DeferredTask, TaskQueue};
use super::types::{Detail, Mode, SelectionSnapshot};
use crate::model::{CategoryId, Item, ItemId};
use crate::store::ItemStore;
use std::collections::BTreeSet;
use std::fmt;

/// Options distinguishing the layout variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Items are grouped into categories chosen from a sidebar
    pub categorized: bool,
    /// The item list can be filtered by a search string
    pub search_enabled: bool,
    /// Select the first item whenever the visible list changes identity
    pub auto_select_on_navigate: bool,
}

impl ControllerConfig {
    /// Create a new controller configuration
    #[must_use]
    pub const fn new(categorized: bool, search_enabled: bool, auto_select_on_navigate: bool) -> Self {
        Self {
            categorized,
            search_enabled,
            auto_select_on_navigate,
        }
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::new(false, false, true)
    }
}

/// Callback invoked with the new state after every change
pub type Observer = Box<dyn FnMut(&SelectionSnapshot)>;

/// Owner of the selection state and its policies
pub struct SelectionController {
    config: ControllerConfig,
    selected_ids: BTreeSet<ItemId>,
    mode: Mode,
    selected_category: Option<CategoryId>,
    search_text: String,
    tasks: TaskQueue,
    observers: Vec<Observer>,
}

impl fmt::Debug for SelectionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionController")
            .field("config", &self.config)
            .field("selected_ids", &self.selected_ids)
            .field("mode", &self.mode)
            .field("selected_category", &self.selected_category)
            .field("search_text", &self.search_text)
            .field("tasks", &self.tasks)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl SelectionController {
    /// Create a controller in browsing mode with nothing selected
    #[must_use]
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            config,
            selected_ids: BTreeSet::new(),
            mode: Mode::Browsing,
            selected_category: None,
            search_text: String::new(),
            tasks: TaskQueue::new(),
            observers: Vec::new(),
        }
    }

    #[must_use]
    pub const fn config(&self) -> ControllerConfig {
        self.config
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub const fn selected_ids(&self) -> &BTreeSet<ItemId> {
        &self.selected_ids
    }

    #[must_use]
    pub const fn selected_category(&self) -> Option<CategoryId> {
        self.selected_category
    }

    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Whether a deferred task is waiting for the next tick
    #[must_use]
    pub fn has_pending_tasks(&self) -> bool {
        !self.tasks.is_empty()
    }

    /// Copy of the current state
    #[must_use]
    pub fn snapshot(&self) -> SelectionSnapshot {
        SelectionSnapshot {
            selected_ids: self.selected_ids.clone(),
            mode: self.mode,
            selected_category: self.selected_category,
            search_text: self.search_text.clone(),
        }
    }

    /// Register a callback for state changes
    pub fn subscribe(&mut self, observer: impl FnMut(&SelectionSnapshot) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// The store list the item column shows
    ///
    /// `None` addresses the flat list (or the first category).
    #[must_use]
    pub const fn list_category(&self) -> Option<CategoryId> {
        if self.config.categorized {
            self.selected_category
        } else {
            None
        }
    }

    /// The items currently shown in the item column
    ///
    /// Empty in a categorized layout while no category is selected.
    #[must_use]
    pub fn visible_items(&self, store: &ItemStore) -> Vec<Item> {
        if self.config.categorized && self.selected_category.is_none() {
            return Vec::new();
        }

        let mut items = store.list_visible(self.list_category());
        if self.config.search_enabled && !self.search_text.is_empty() {
            items.retain(|item| item.matches(&self.search_text));
        }
        items
    }

    /// Title of the item column
    #[must_use]
    pub fn list_title(&self, store: &ItemStore) -> String {
        store.title(self.list_category())
    }

    /// Initial display of the layout
    ///
    /// A categorized layout picks the first category if none is selected
    /// yet. In both cases the first item is selected on the next tick.
    pub fn appear(&mut self, store: &ItemStore) {
        let before = self.snapshot();

        if self.config.categorized {
            if self.selected_category.is_some() {
                return;
            }
            tracing::debug!("category is unset, selecting first");
            self.selected_category = store.first_category().map(|category| category.id);
        }

        self.tasks.post(DeferredTask::SelectFirst);
        self.commit(&before);
    }

    /// Select exactly the first visible item, or nothing for an empty list
    pub fn select_first(&mut self, visible: &[Item]) {
        let before = self.snapshot();
        self.apply_select_first(visible);
        self.commit(&before);
    }

    /// Flip between browsing and editing
    ///
    /// Entering edit mode keeps the selection as the multi-select working
    /// set. Leaving it schedules selection of the first item.
    pub fn toggle_mode(&mut self) {
        let before = self.snapshot();
        self.mode = self.mode.toggled();
        tracing::info!(mode = %self.mode, "mode changed");

        if self.mode == Mode::Browsing {
            self.tasks.post(DeferredTask::SelectFirst);
        }
        self.commit(&before);
    }

    /// Replace the selection verbatim, without validation
    pub fn set_selection(&mut self, ids: BTreeSet<ItemId>) {
        let before = self.snapshot();
        self.selected_ids = ids;
        self.commit(&before);
    }

    /// A row was tapped
    ///
    /// Browsing selects the row alone; editing toggles it in the working set.
    pub fn tap_item(&mut self, id: ItemId) {
        match self.mode {
            Mode::Browsing => self.set_selection(BTreeSet::from([id])),
            Mode::Editing => {
                let before = self.snapshot();
                if !self.selected_ids.remove(&id) {
                    self.selected_ids.insert(id);
                }
                self.commit(&before);
            }
        }
    }

    /// Delete every visible item that is selected
    ///
    /// Returns the removed items.
    pub fn delete_selected(&mut self, store: &mut ItemStore, visible: &[Item]) -> Vec<Item> {
        let positions: BTreeSet<usize> = visible
            .iter()
            .enumerate()
            .filter(|(_, item)| self.selected_ids.contains(&item.id))
            .map(|(index, _)| index)
            .collect();

        self.delete_at(store, visible, &positions)
    }

    /// Delete the items at `positions` of the visible list
    ///
    /// Deleted items leave the selection first. When the selection ends up
    /// empty outside edit mode, the first item is selected on the next tick.
    /// Returns the removed items.
    pub fn delete_at(
        &mut self,
        store: &mut ItemStore,
        visible: &[Item],
        positions: &BTreeSet<usize>,
    ) -> Vec<Item> {
        let before = self.snapshot();

        let doomed: BTreeSet<ItemId> = positions
            .iter()
            .filter_map(|&position| visible.get(position))
            .map(|item| item.id)
            .collect();

        for id in &doomed {
            self.selected_ids.remove(id);
        }

        // The visible list may be a filtered view; resolve against the store list.
        let category = self.list_category();
        let store_positions = store.positions_of(category, &doomed);
        let removed = store.remove_at(category, &store_positions);
        tracing::info!(count = removed.len(), ?category, "deleted items");

        if !self.mode.is_editing() && self.selected_ids.is_empty() {
            self.tasks.post(DeferredTask::SelectFirst);
        }

        self.commit(&before);
        removed
    }

    /// A sidebar category was chosen
    ///
    /// `None` is ignored, as are unknown ids and flat layouts. Switching to a
    /// different category clears the item selection; the first item of the
    /// new list is selected on the next tick if `auto_select_on_navigate`.
    pub fn select_category(&mut self, store: &ItemStore, category: Option<CategoryId>) {
        let Some(id) = category else {
            tracing::debug!("ignoring category reset to none");
            return;
        };
        if !self.config.categorized || store.category(id).is_none() {
            tracing::debug!(category = %id, "ignoring unknown category");
            return;
        }
        if self.selected_category == Some(id) {
            return;
        }

        let before = self.snapshot();
        tracing::debug!(
            from = %store.title(self.selected_category),
            to = %store.title(Some(id)),
            "category changed"
        );
        self.selected_category = Some(id);
        self.selected_ids.clear();

        if self.config.auto_select_on_navigate {
            self.tasks.post(DeferredTask::SelectFirst);
        }
        self.commit(&before);
    }

    /// The search filter changed
    ///
    /// Ignored unless search is enabled.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        if !self.config.search_enabled {
            return;
        }
        let text = text.into();
        if text == self.search_text {
            return;
        }

        let before = self.snapshot();
        self.search_text = text;

        if self.config.auto_select_on_navigate {
            self.tasks.post(DeferredTask::SelectFirst);
        }
        self.commit(&before);
    }

    /// What the detail pane shows for the given visible list
    ///
    /// With several selected ids the one listed first in `visible` wins.
    #[must_use]
    pub fn current_detail(&self, visible: &[Item]) -> Detail {
        if self.mode.is_editing() {
            return Detail::EditingPlaceholder;
        }

        visible
            .iter()
            .find(|item| self.selected_ids.contains(&item.id))
            .cloned()
            .map_or(Detail::Empty, Detail::Selected)
    }

    /// Whether the delete button is enabled
    #[must_use]
    pub fn delete_enabled(&self) -> bool {
        self.mode.is_editing() && !self.selected_ids.is_empty()
    }

    /// Run the deferred tasks against the current store
    ///
    /// Returns `true` if the state changed.
    pub fn tick(&mut self, store: &ItemStore) -> bool {
        if self.tasks.is_empty() {
            return false;
        }

        let before = self.snapshot();
        for task in self.tasks.drain() {
            match task {
                DeferredTask::SelectFirst => {
                    let visible = self.visible_items(store);
                    self.apply_select_first(&visible);
                }
            }
        }
        self.commit(&before)
    }

    fn apply_select_first(&mut self, visible: &[Item]) {
        self.selected_ids = visible.first().map(|item| item.id).into_iter().collect();
        if let Some(first) = visible.first() {
            tracing::debug!(item = %first.id, name = %first.name, "set selection to first item");
        }
    }

    fn commit(&mut self, before: &SelectionSnapshot) -> bool {
        let after = self.snapshot();
        if *before == after {
            return false;
        }

        tracing::debug!(
            from = ?before.selected_ids,
            to = ?after.selected_ids,
            mode = %after.mode,
            "selection changed"
        );
        for observer in &mut self.observers {
            observer(&after);
        }
        true
    }
}
