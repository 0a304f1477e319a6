//! Value types exposed by the selection controller

use crate::model::{CategoryId, Item, ItemId};
use std::collections::BTreeSet;
use std::fmt;

/// Interaction mode of the item list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Single-select navigation
    #[default]
    Browsing,
    /// Multi-select for batch deletion
    Editing,
}

impl Mode {
    /// The other mode
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Browsing => Self::Editing,
            Self::Editing => Self::Browsing,
        }
    }

    /// Whether this is the editing mode
    #[must_use]
    pub const fn is_editing(self) -> bool {
        matches!(self, Self::Editing)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Browsing => f.write_str("browsing"),
            Self::Editing => f.write_str("editing"),
        }
    }
}

/// What the detail pane should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detail {
    /// A selected item that is present in the visible list
    Selected(Item),
    /// Nothing selected, or the selection is stale
    Empty,
    /// The list is in editing mode
    EditingPlaceholder,
}

/// Immutable copy of the controller state handed to observers
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionSnapshot {
    /// Currently selected item ids
    pub selected_ids: BTreeSet<ItemId>,
    /// Current interaction mode
    pub mode: Mode,
    /// Selected sidebar category (categorized layouts only)
    pub selected_category: Option<CategoryId>,
    /// Current search filter (search-enabled layouts only)
    pub search_text: String,
}

impl SelectionSnapshot {
    /// Whether the delete button should be enabled
    #[must_use]
    pub fn delete_enabled(&self) -> bool {
        self.mode.is_editing() && !self.selected_ids.is_empty()
    }
}
