//! Storage layer for the expense store
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. A single [`Storage`] handle is opened at startup and shared by
//! every service for the life of the process.

pub mod categories;
pub mod collection;
pub mod expenses;
pub mod file_io;
pub mod init;

pub use categories::CategoryRepository;
pub use collection::{Collection, Record};
pub use expenses::ExpenseRepository;
pub use file_io::{read_collection, write_collection};
pub use init::initialize_storage;

use crate::config::paths::ExpensePaths;
use crate::config::settings::Settings;
use crate::error::ExpenseError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: ExpensePaths,
    pub categories: CategoryRepository,
    pub expenses: ExpenseRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: ExpensePaths, settings: &Settings) -> Result<Self, ExpenseError> {
        paths.ensure_directories()?;

        Ok(Self {
            categories: CategoryRepository::new(paths.categories_file(), settings.pretty_json),
            expenses: ExpenseRepository::new(paths.expenses_file(), settings.pretty_json),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), ExpenseError> {
        self.categories.load()?;
        self.expenses.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), ExpenseError> {
        self.categories.save()?;
        self.expenses.save()?;
        Ok(())
    }
}
