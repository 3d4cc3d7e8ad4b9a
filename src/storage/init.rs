//! Storage initialization
//!
//! Handles first-run setup: directories and empty collection files.

use std::path::Path;

use crate::config::paths::ExpensePaths;
use crate::error::ExpenseError;

use super::file_io::write_collection;

/// Initialize storage for a fresh installation
///
/// Existing collection files are left untouched.
pub fn initialize_storage(paths: &ExpensePaths, pretty: bool) -> Result<(), ExpenseError> {
    paths.ensure_directories()?;

    create_empty_collection(&paths.categories_file(), "categories", pretty)?;
    create_empty_collection(&paths.expenses_file(), "expenses", pretty)?;

    Ok(())
}

fn create_empty_collection(path: &Path, key: &str, pretty: bool) -> Result<(), ExpenseError> {
    if path.exists() {
        return Ok(());
    }

    write_collection::<serde_json::Value, _>(path, key, &[], pretty)
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &ExpensePaths) -> bool {
    !paths.categories_file().exists() || !paths.expenses_file().exists()
}
