//! Category service
//!
//! CRUD over category records. Categories do not know about expenses:
//! deleting one that is still referenced leaves those expenses pointing at
//! nothing, and they read back with no category attached.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::timestamp::now_millis;
use crate::models::{Category, CategoryId, CategoryInput};
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// List all categories in insertion order
    pub fn list(&self) -> ExpenseResult<Vec<Category>> {
        self.storage.categories.get_all()
    }

    /// Get a category by ID
    pub fn get(&self, id: CategoryId) -> ExpenseResult<Category> {
        self.storage
            .categories
            .get(id)?
            .ok_or_else(|| ExpenseError::category_not_found(id.to_string()))
    }

    /// Find a category by ID string or name (case-insensitive)
    pub fn find(&self, identifier: &str) -> ExpenseResult<Option<Category>> {
        if let Ok(id) = identifier.parse::<CategoryId>() {
            return self.storage.categories.get(id);
        }

        let wanted = identifier.trim().to_lowercase();
        Ok(self
            .list()?
            .into_iter()
            .find(|c| c.name.to_lowercase() == wanted))
    }

    /// Create a new category, returning its identifier
    pub fn create(&self, input: CategoryInput) -> ExpenseResult<CategoryId> {
        input
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        let created_at = now_millis();
        let id = self
            .storage
            .categories
            .insert_new(|id| Category::new(id, input, created_at))?;

        Ok(id)
    }

    /// Replace the mutable fields of a category
    ///
    /// Optional fields left out of `input` are cleared.
    pub fn update(&self, id: CategoryId, input: CategoryInput) -> ExpenseResult<()> {
        input
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        self.storage
            .categories
            .update(id, |category| category.replace_fields(input))?;

        Ok(())
    }

    /// Delete a category
    ///
    /// Expenses referencing it are left as they are.
    pub fn delete(&self, id: CategoryId) -> ExpenseResult<()> {
        self.storage.categories.delete(id)?;
        Ok(())
    }
}
