//! Layout presets
//!
//! The three layouts share one selection controller; they differ only in
//! the flags they pass to it and the seed data they start from.

use crate::selection::ControllerConfig;
use crate::store::{Catalog, seed};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which master/detail layout to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// A single list of people next to a detail pane
    Simple,
    /// Searchable list of the first category next to a detail pane
    TwoColumn,
    /// Category sidebar, item list and detail pane
    #[default]
    ThreeColumn,
}

impl Variant {
    /// Controller flags for this layout
    ///
    /// The simple layout always auto-selects; the others honor
    /// `auto_select_on_navigate`.
    #[must_use]
    pub const fn controller_config(self, auto_select_on_navigate: bool) -> ControllerConfig {
        match self {
            Self::Simple => ControllerConfig::new(false, false, true),
            Self::TwoColumn => ControllerConfig::new(false, true, auto_select_on_navigate),
            Self::ThreeColumn => ControllerConfig::new(true, false, auto_select_on_navigate),
        }
    }

    /// Seed data used when no catalog file is configured
    #[must_use]
    pub fn default_catalog(self) -> Catalog {
        match self {
            Self::Simple => seed::people(),
            Self::TwoColumn | Self::ThreeColumn => seed::inventory(),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple => f.write_str("simple"),
            Self::TwoColumn => f.write_str("two-column"),
            Self::ThreeColumn => f.write_str("three-column"),
        }
    }
}
