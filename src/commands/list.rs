//! List command - print what a layout would show

use super::{Result, load_catalog};
use crate::browse::{BrowseSession, Variant};
use crate::config::SplitviewConfig;
use crate::model::Item;
use crate::ui::OutputWriter;
use serde::Serialize;

/// One titled group of items
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub title: String,
    pub items: Vec<Item>,
}

/// Everything the list command prints
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing {
    pub variant: Variant,
    pub sections: Vec<Section>,
}

impl Listing {
    /// Collect the sections a session's layout would offer
    ///
    /// Categorized layouts yield one section per category; flat ones a single
    /// section titled like the item column.
    #[must_use]
    pub fn from_session(variant: Variant, session: &BrowseSession) -> Self {
        let sections = if session.controller().config().categorized {
            session
                .categories()
                .iter()
                .map(|category| Section {
                    title: category.name.clone(),
                    items: category.items.clone(),
                })
                .collect()
        } else {
            vec![Section {
                title: session.list_title(),
                items: session.visible_items(),
            }]
        };

        Self { variant, sections }
    }
}

/// Execute the list command
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or JSON encoding fails.
pub fn execute(config: &SplitviewConfig, json: bool, output: &dyn OutputWriter) -> Result<()> {
    let catalog = load_catalog(config)?;
    let session =
        BrowseSession::for_variant(config.variant, catalog, config.auto_select_on_navigate);
    let listing = Listing::from_session(config.variant, &session);

    if json {
        output.write(&serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    for section in &listing.sections {
        output.heading(&section.title);
        if section.items.is_empty() {
            output.info("  (empty)");
        }
        for item in &section.items {
            if item.description.is_empty() {
                output.write(&format!("  {}", item.name));
            } else {
                output.write(&format!("  {} - {}", item.name, item.description));
            }
        }
    }

    let total: usize = listing.sections.iter().map(|s| s.items.len()).sum();
    let plural = if total == 1 { "" } else { "s" };
    output.info(&format!("{total} item{plural}"));
    Ok(())
}
