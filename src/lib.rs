//! Splitview - a terminal master/detail browser
//!
//! The core is a selection-and-deletion state machine: a
//! [`SelectionController`](selection::SelectionController) tracks which
//! items are selected in Browsing or Editing mode, keeps the selection
//! consistent across deletions, and auto-selects the first visible item one
//! tick after the list changes. A [`BrowseSession`](browse::BrowseSession)
//! pairs it with an [`ItemStore`](store::ItemStore) and is what frontends
//! drive.

use thiserror::Error;

pub mod browse;
pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod model;
pub mod selection;
pub mod store;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum SplitviewError {
    /// Catalog file could not be loaded
    #[error("Catalog error: {0}")]
    Catalog(#[from] store::CatalogError),
    /// Terminal UI failure
    #[error("UI error: {0}")]
    Ui(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
