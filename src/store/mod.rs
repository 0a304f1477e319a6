//! In-memory item store
//!
//! Holds the ordered item lists the browser displays. A store is either
//! flat (a single anonymous list) or categorized (several named lists). In
//! both cases `None` as the category argument addresses the first list,
//! which is what the two-column layout browses.
//!
//! All operations are total: an unknown category yields an empty list and
//! removals against it do nothing; out-of-range positions are skipped.

mod catalog;
mod error;
pub mod seed;

pub use catalog::{Catalog, CatalogCategory, CatalogItem};
pub use error::CatalogError;

use crate::model::{Category, CategoryId, Item, ItemId};
use std::collections::BTreeSet;

/// Title used for the flat list and for unknown categories
pub const ALL_ITEMS_TITLE: &str = "All items";

/// Ordered, optionally categorized collection of items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemStore {
    categories: Vec<Category>,
    categorized: bool,
}

impl ItemStore {
    /// Build a store from a catalog, allocating fresh ids
    ///
    /// Ids are allocated sequentially across the whole store, so an item id
    /// is unique even between categories.
    #[must_use]
    pub fn from_catalog(catalog: Catalog) -> Self {
        let mut next_item = 1_u64;
        let mut build_items = |items: Vec<CatalogItem>| -> Vec<Item> {
            items
                .into_iter()
                .map(|entry| {
                    let id = ItemId(next_item);
                    next_item += 1;
                    Item::new(id, entry.name, entry.description)
                })
                .collect()
        };

        if catalog.is_categorized() {
            let categories = catalog
                .categories
                .into_iter()
                .zip(1_u64..)
                .map(|(entry, id)| Category::new(CategoryId(id), entry.name, build_items(entry.items)))
                .collect();
            Self {
                categories,
                categorized: true,
            }
        } else {
            let items = build_items(catalog.items);
            Self {
                categories: vec![Category::new(CategoryId(0), ALL_ITEMS_TITLE, items)],
                categorized: false,
            }
        }
    }

    /// Build a flat store from already-identified items
    #[must_use]
    pub fn flat(items: Vec<Item>) -> Self {
        Self {
            categories: vec![Category::new(CategoryId(0), ALL_ITEMS_TITLE, items)],
            categorized: false,
        }
    }

    /// Build a categorized store from already-identified categories
    #[must_use]
    pub const fn categorized(categories: Vec<Category>) -> Self {
        Self {
            categories,
            categorized: true,
        }
    }

    /// Whether the store holds named categories
    #[must_use]
    pub const fn is_categorized(&self) -> bool {
        self.categorized
    }

    /// All categories in order
    ///
    /// A flat store reports no categories.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        if self.categorized {
            &self.categories
        } else {
            &[]
        }
    }

    /// Look up a category by id
    #[must_use]
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories().iter().find(|category| category.id == id)
    }

    /// The first category, if any
    #[must_use]
    pub fn first_category(&self) -> Option<&Category> {
        self.categories().first()
    }

    /// Title for a list: the category name, or "All items"
    #[must_use]
    pub fn title(&self, category: Option<CategoryId>) -> String {
        category
            .and_then(|id| self.category(id))
            .map_or_else(|| ALL_ITEMS_TITLE.to_string(), |category| category.name.clone())
    }

    fn list(&self, category: Option<CategoryId>) -> Option<&Vec<Item>> {
        match category {
            None => self.categories.first().map(|c| &c.items),
            Some(id) => self.category(id).map(|c| &c.items),
        }
    }

    fn list_mut(&mut self, category: Option<CategoryId>) -> Option<&mut Vec<Item>> {
        let categorized = self.categorized;
        match category {
            None => self.categories.first_mut().map(|c| &mut c.items),
            Some(id) if categorized => self
                .categories
                .iter_mut()
                .find(|c| c.id == id)
                .map(|c| &mut c.items),
            Some(_) => None,
        }
    }

    /// Items of the addressed list, in insertion order
    ///
    /// Returns a copy; callers re-fetch after any mutation.
    #[must_use]
    pub fn list_visible(&self, category: Option<CategoryId>) -> Vec<Item> {
        self.list(category).cloned().unwrap_or_default()
    }

    /// Positions of the given ids within the addressed list
    #[must_use]
    pub fn positions_of(
        &self,
        category: Option<CategoryId>,
        ids: &BTreeSet<ItemId>,
    ) -> BTreeSet<usize> {
        self.list(category).map_or_else(BTreeSet::new, |items| {
            items
                .iter()
                .enumerate()
                .filter(|(_, item)| ids.contains(&item.id))
                .map(|(index, _)| index)
                .collect()
        })
    }

    /// Remove the items at `positions` from the addressed list
    ///
    /// Positions refer to the list as it was before this call; the surviving
    /// items replace the list in one step. Out-of-range positions are skipped.
    /// Returns the removed items in their original order.
    pub fn remove_at(
        &mut self,
        category: Option<CategoryId>,
        positions: &BTreeSet<usize>,
    ) -> Vec<Item> {
        let Some(items) = self.list_mut(category) else {
            tracing::debug!(?category, "remove_at on unknown category ignored");
            return Vec::new();
        };

        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(items)
            .into_iter()
            .enumerate()
            .partition(|(index, _)| positions.contains(index));

        *items = kept.into_iter().map(|(_, item)| item).collect();
        removed.into_iter().map(|(_, item)| item).collect()
    }

    /// Remove a single item by identity
    pub fn remove_by_id(&mut self, category: Option<CategoryId>, id: ItemId) -> Option<Item> {
        let items = self.list_mut(category)?;
        let index = items.iter().position(|item| item.id == id)?;
        Some(items.remove(index))
    }

    /// Total number of items across all lists
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::from_catalog(seed::inventory())
    }
}
