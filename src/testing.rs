//! Testing utilities for splitview
//!
//! Small fixture builders shared by the unit tests: stores with
//! predictable names, and shorthands for id and position sets.
//!
//! Only available when compiled with `cfg(test)`.

use crate::model::{Category, CategoryId, Item, ItemId};
use crate::store::ItemStore;
use std::collections::BTreeSet;

/// Build a set of item ids
#[must_use]
pub fn ids(ids: &[ItemId]) -> BTreeSet<ItemId> {
    ids.iter().copied().collect()
}

/// Build a set of list positions
#[must_use]
pub fn positions(positions: &[usize]) -> BTreeSet<usize> {
    positions.iter().copied().collect()
}

/// Names of the given items, in order
#[must_use]
pub fn names(items: &[Item]) -> Vec<&str> {
    items.iter().map(|item| item.name.as_str()).collect()
}

/// A flat store whose items are named after `names`
///
/// Item ids are `1..=names.len()` in order.
#[must_use]
pub fn lettered_store(names: &[&str]) -> ItemStore {
    let items = names
        .iter()
        .zip(1_u64..)
        .map(|(name, id)| Item::new(ItemId(id), *name, format!("About {name}")))
        .collect();
    ItemStore::flat(items)
}

/// A categorized store: `cat1` holds A1, A2 and `cat2` holds B1, B2, B3
#[must_use]
pub fn two_category_store() -> ItemStore {
    let item = |id, name: &str| Item::new(ItemId(id), name, format!("About {name}"));
    ItemStore::categorized(vec![
        Category::new(CategoryId(1), "cat1", vec![item(1, "A1"), item(2, "A2")]),
        Category::new(
            CategoryId(2),
            "cat2",
            vec![item(3, "B1"), item(4, "B2"), item(5, "B3")],
        ),
    ])
}
