//! Ratatui-based master/detail browser
//!
//! Renders a [`BrowseSession`](crate::browse::BrowseSession) as two or three
//! columns and turns key presses into gestures.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              BrowseApp                      │
//! │  (event loop: poll → dispatch → draw → tick)│
//! └────────────────────┬────────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │  AppState  │ │  Ratatui  │ │ Crossterm │
//! │ (cursors)  │ │ (widgets) │ │  (events) │
//! └────────────┘ └───────────┘ └───────────┘
//! ```

mod app;
mod events;
mod state;
mod theme;
pub mod widgets;

pub use app::BrowseApp;
pub use events::{EventResult, handle_key};
pub use state::{AppState, Focus, Mode, StatusMessage};
pub use theme::Theme;
