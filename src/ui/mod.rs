//! UI layer
//!
//! Two frontends share this module: the interactive ratatui browser and
//! plain line output for the non-interactive commands.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      Commands (browse, list, config)    │
//! └────────────────┬────────────────────────┘
//!                  │
//!         ┌────────┴────────┐
//!         ▼                 ▼
//! ┌───────────────┐  ┌───────────────────┐
//! │ OutputWriter  │  │ ratatui_adapter   │
//! │ - Stdout      │  │ - BrowseApp       │
//! └───────────────┘  └───────────────────┘
//! ```
//!
//! ## Output Messages
//!
//! ```
//! use splitview::ui::output::{OutputWriter, StdoutWriter};
//!
//! let output = StdoutWriter::new();
//! output.heading("Sports");
//! output.write("Football");
//! output.info("5 items");
//! ```

mod error;

pub mod output;
pub mod ratatui_adapter;

#[cfg(test)]
pub mod mock;

pub use error::{Result, UiError};
pub use output::{MessageLevel, OutputWriter, StdoutWriter};
pub use ratatui_adapter::BrowseApp;
