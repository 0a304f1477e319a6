//! Selection state machine
//!
//! The part of the browser with real invariants: the selected ids never
//! reference a deleted item, and the selection refills itself after
//! deletions, after leaving edit mode, and (optionally) after navigating to
//! a different list.
//!
//! # Architecture
//!
//! - **`SelectionController`**: owns selection, mode, category and search
//! - **`ControllerConfig`**: the per-layout differences, as plain flags
//! - **`TaskQueue`**: auto-selection deferred to the next tick
//! - **`SelectionSnapshot`**: immutable state pushed to observers

mod controller;
mod scheduler;
mod types;

pub use controller::{ControllerConfig, Observer, SelectionController};
pub use scheduler::{DeferredTask, TaskQueue};
pub use types::{Detail, Mode, SelectionSnapshot};
