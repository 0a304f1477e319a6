//! Command implementations
//!
//! Each command is a module with an execute function that takes the
//! effective configuration (file merged with CLI flags) and runs the
//! operation.

pub mod browse;
pub mod config;
pub mod list;

use crate::SplitviewError;
use crate::config::SplitviewConfig;
use crate::store::Catalog;

// Re-export execute functions for convenience
pub use self::browse::execute as browse;
pub use self::config::execute as config;
pub use self::list::execute as list;

type Result<T> = std::result::Result<T, SplitviewError>;

/// Load the configured catalog file, if any
///
/// # Errors
///
/// Returns `SplitviewError::Catalog` if the file cannot be read or parsed.
pub fn load_catalog(config: &SplitviewConfig) -> Result<Option<Catalog>> {
    let catalog = config.catalog.as_deref().map(Catalog::load).transpose()?;
    if let (Some(path), Some(catalog)) = (&config.catalog, &catalog) {
        tracing::info!(
            path = %path.display(),
            categories = catalog.categories.len(),
            "catalog loaded"
        );
    }
    Ok(catalog)
}
