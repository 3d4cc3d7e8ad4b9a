//! Expense service
//!
//! CRUD over expense records. Listing joins every expense with its category
//! through independent point lookups that run in parallel; the result keeps
//! the stored expense order and tolerates categories that no longer exist.

use rayon::prelude::*;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::timestamp::now_millis;
use crate::models::{Category, CategoryId, Expense, ExpenseId, ExpenseInput, ExpenseWithCategory};
use crate::storage::Storage;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// List all expenses, each joined with its category
    pub fn list(&self) -> ExpenseResult<Vec<ExpenseWithCategory>> {
        let expenses = self.storage.expenses.get_all()?;
        let categories = &self.storage.categories;

        join_categories(expenses, |type_id| categories.get(type_id))
    }

    /// Get an expense by ID, without its category
    pub fn get(&self, id: ExpenseId) -> ExpenseResult<Expense> {
        self.storage
            .expenses
            .get(id)?
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))
    }

    /// Create a new expense, returning its identifier
    ///
    /// `type_id` is not checked against existing categories.
    pub fn create(&self, input: ExpenseInput) -> ExpenseResult<ExpenseId> {
        input
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        let created_at = now_millis();
        let id = self
            .storage
            .expenses
            .insert_new(|id| Expense::new(id, input, created_at))?;

        Ok(id)
    }

    /// Replace the mutable fields of an expense
    pub fn update(&self, id: ExpenseId, input: ExpenseInput) -> ExpenseResult<()> {
        input
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        self.storage
            .expenses
            .update(id, |expense| expense.replace_fields(input))?;

        Ok(())
    }

    /// Delete an expense
    pub fn delete(&self, id: ExpenseId) -> ExpenseResult<()> {
        self.storage.expenses.delete(id)?;
        Ok(())
    }
}

/// Attach categories to expenses with one lookup per expense
///
/// Lookups are scattered over the rayon pool and gathered back in input
/// order. A lookup returning `None` yields a null category; a lookup error
/// fails the whole list.
fn join_categories<F>(expenses: Vec<Expense>, lookup: F) -> ExpenseResult<Vec<ExpenseWithCategory>>
where
    F: Fn(CategoryId) -> ExpenseResult<Option<Category>> + Send + Sync,
{
    expenses
        .into_par_iter()
        .map(|expense| {
            let expense_type = lookup(expense.type_id)?;
            Ok(ExpenseWithCategory {
                expense,
                expense_type,
            })
        })
        .collect()
}
