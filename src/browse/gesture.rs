//! Gestures forwarded by the view layer

use crate::model::{CategoryId, Item, ItemId};
use std::collections::BTreeSet;

/// A user gesture delivered to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gesture {
    /// A row of the item list was tapped
    ItemTapped(ItemId),
    /// Rows at these positions of the visible list were swiped away
    SwipeDeleted(BTreeSet<usize>),
    /// The edit/done toolbar button
    EditButtonPressed,
    /// The delete toolbar button (only live while editing with a selection)
    DeleteButtonPressed,
    /// A sidebar row was tapped; `None` models a host resetting the sidebar
    CategoryTapped(Option<CategoryId>),
    /// The search field changed
    SearchTextChanged(String),
}

/// What a gesture did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Nothing changed
    Ignored,
    /// Selection, mode, category or search changed
    Updated,
    /// Items were removed from the store
    Deleted(Vec<Item>),
}

impl GestureOutcome {
    /// Short human-readable summary for the status bar
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        match self {
            Self::Deleted(items) => match items.as_slice() {
                [] => None,
                [item] => Some(format!("Deleted {}", item.name)),
                many => Some(format!("Deleted {} items", many.len())),
            },
            Self::Ignored | Self::Updated => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary() {
        let cat = Item::new(ItemId(1), "Cat", "Meow");
        let dog = Item::new(ItemId(2), "Dog", "Bark");

        assert_eq!(GestureOutcome::Updated.summary(), None);
        assert_eq!(GestureOutcome::Deleted(vec![]).summary(), None);
        assert_eq!(
            GestureOutcome::Deleted(vec![cat.clone()]).summary(),
            Some("Deleted Cat".to_string())
        );
        assert_eq!(
            GestureOutcome::Deleted(vec![cat, dog]).summary(),
            Some("Deleted 2 items".to_string())
        );
    }
}
