//! Browse command - interactive master/detail browser

use super::{Result, load_catalog};
use crate::browse::BrowseSession;
use crate::config::SplitviewConfig;
use crate::ui::BrowseApp;

/// Execute the browse command
///
/// # Errors
///
/// Returns an error if the tick rate is zero, the catalog cannot be loaded
/// or the terminal fails.
pub fn execute(config: &SplitviewConfig) -> Result<()> {
    let app = BrowseApp::new(config.tick_rate())?;
    let catalog = load_catalog(config)?;
    let mut session =
        BrowseSession::for_variant(config.variant, catalog, config.auto_select_on_navigate);

    app.run(&mut session)?;

    let snapshot = session.snapshot();
    tracing::info!(
        remaining = session.store().total_items(),
        selected = snapshot.selected_ids.len(),
        "browse finished"
    );
    Ok(())
}
