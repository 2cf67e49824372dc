//! Storage initialization
//!
//! First-run setup: creates the directories and writes the default
//! categories so the store is usable before anything is recorded.

use tracing::info;

use crate::config::paths::SpendlensPaths;
use crate::error::SpendlensError;
use crate::models::default_categories;

use super::file_io::write_json_atomic;

/// Initialize storage for a fresh installation
pub fn initialize_storage(paths: &SpendlensPaths) -> Result<(), SpendlensError> {
    paths.ensure_directories()?;

    if !paths.categories_file().exists() {
        info!("Writing default categories");
        write_json_atomic(paths.categories_file(), &default_categories())?;
    }

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &SpendlensPaths) -> bool {
    !paths.categories_file().exists()
}
