//! Core records displayed by the browser
//!
//! Items are leaf records with a name and a description. Categories group
//! items into ordered lists for the three-column layout. Both are identified
//! by small copyable ids allocated by the store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of an [`Item`], unique within its store
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u64);

/// Identity of a [`Category`], unique within its store
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CategoryId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "category#{}", self.0)
    }
}

/// A leaf record shown in the item column and the detail pane
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    /// Stable identity
    pub id: ItemId,
    /// Display name
    pub name: String,
    /// Free-form description shown in the detail pane
    pub description: String,
}

impl Item {
    /// Create a new item
    #[must_use]
    pub fn new(id: ItemId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }

    /// Case-insensitive substring match on the item name
    ///
    /// An empty query matches every item.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        query.is_empty() || self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

/// A named, ordered group of items
///
/// A category owns its items. Removing the last item leaves an empty
/// category behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Stable identity
    pub id: CategoryId,
    /// Display name, also used as the item column title
    pub name: String,
    /// Items in insertion order
    pub items: Vec<Item>,
}

impl Category {
    /// Create a new category
    #[must_use]
    pub fn new(id: CategoryId, name: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            id,
            name: name.into(),
            items,
        }
    }
}
