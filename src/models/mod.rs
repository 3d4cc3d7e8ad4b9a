//! Core data models for the expense store
//!
//! Categories, expenses, the joined read view, and their identifiers.

pub mod category;
pub mod expense;
pub mod ids;
pub mod timestamp;

pub use category::{Category, CategoryInput, CategoryValidationError};
pub use expense::{Expense, ExpenseInput, ExpenseValidationError, ExpenseWithCategory};
pub use ids::{CategoryId, ExpenseId, RecordId};
