//! TOML catalog format
//!
//! A catalog describes the records a store is built from. It carries no
//! ids; the store allocates them when the catalog is loaded.
//!
//! Either categories or a flat item list may be given, not both:
//!
//! ```toml
//! [[categories]]
//! name = "Animals"
//!
//! [[categories.items]]
//! name = "Cat"
//! description = "Meow"
//! ```
//!
//! ```toml
//! [[items]]
//! name = "Henkie Test"
//! description = "Really nice guy"
//! ```

use super::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// An item entry in a catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// A category entry in a catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogCategory {
    pub name: String,
    #[serde(default)]
    pub items: Vec<CatalogItem>,
}

/// Seed records for an [`ItemStore`](super::ItemStore)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Named groups of items (three-column layout)
    #[serde(default)]
    pub categories: Vec<CatalogCategory>,

    /// Ungrouped items (used when no categories are given)
    #[serde(default)]
    pub items: Vec<CatalogItem>,
}

impl Catalog {
    /// Parse a catalog from TOML text
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` for malformed TOML,
    /// `CatalogError::Empty` when nothing was declared and
    /// `CatalogError::Mixed` when both categories and items are given.
    pub fn from_toml(text: &str) -> Result<Self, CatalogError> {
        let catalog: Self = toml::from_str(text)?;
        match (catalog.categories.is_empty(), catalog.items.is_empty()) {
            (true, true) => Err(CatalogError::Empty),
            (false, false) => Err(CatalogError::Mixed),
            _ => Ok(catalog),
        }
    }

    /// Read and parse a catalog file
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file cannot be read, otherwise the
    /// same errors as [`Catalog::from_toml`].
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Whether the catalog declares categories
    #[must_use]
    pub fn is_categorized(&self) -> bool {
        !self.categories.is_empty()
    }

    /// Move ungrouped items into a single category named `title`
    ///
    /// A catalog that already has categories is returned unchanged.
    #[must_use]
    pub fn into_grouped(self, title: &str) -> Self {
        if self.is_categorized() {
            return self;
        }
        Self {
            categories: vec![CatalogCategory {
                name: title.to_string(),
                items: self.items,
            }],
            items: Vec::new(),
        }
    }
}
