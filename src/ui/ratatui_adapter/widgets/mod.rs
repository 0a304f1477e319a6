//! Ratatui widgets for the master/detail browser
//!
//! Each column and bar of the layout is its own widget.

mod category_list;
mod detail_pane;
mod help_bar;
mod help_overlay;
mod item_list;
mod search_bar;
mod status_bar;

pub use category_list::CategoryList;
pub use detail_pane::DetailPane;
pub use help_bar::{HelpBar, KeyHint};
pub use help_overlay::HelpOverlay;
pub use item_list::ItemList;
pub use search_bar::SearchBar;
pub use status_bar::StatusBar;
