//! Browse module - master/detail workflows
//!
//! UI-agnostic glue between the view layer and the selection core. Any
//! frontend (the ratatui app, a test harness) drives a [`BrowseSession`]
//! with [`Gesture`]s and renders from its accessors.
//!
//! # Architecture
//!
//! - `session`: owner of store + controller, gesture dispatch, ticks
//! - `gesture`: gesture and outcome types
//! - `variant`: layout presets (simple, two-column, three-column)

pub mod gesture;
pub mod session;
pub mod variant;

pub use gesture::{Gesture, GestureOutcome};
pub use session::BrowseSession;
pub use variant::Variant;
