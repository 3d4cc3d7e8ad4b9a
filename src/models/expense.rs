//! Expense model
//!
//! An expense is a single monetary event referencing exactly one category
//! through `typeId`. The reference is not kept consistent by the store: a
//! category may be deleted while expenses still point at it.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::ids::{CategoryId, ExpenseId};

/// A stored expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Unique identifier, assigned by the store
    pub id: ExpenseId,

    /// The category this expense belongs to
    pub type_id: CategoryId,

    /// Amount; no sign or range constraint
    pub amount: f64,

    pub description: String,

    /// When the expense occurred, in epoch milliseconds
    pub date: i64,

    /// Creation time in epoch milliseconds, never modified
    pub created_at: i64,
}

/// The mutable field set of an expense, as accepted by create and update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExpenseInput {
    pub type_id: CategoryId,
    pub amount: f64,
    pub description: String,
    pub date: i64,
}

impl ExpenseInput {
    /// Validate the input
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_finite() {
            return Err(ExpenseValidationError::NonFiniteAmount);
        }

        Ok(())
    }
}

impl Expense {
    /// Build a new expense from validated input
    pub fn new(id: ExpenseId, input: ExpenseInput, created_at: i64) -> Self {
        Self {
            id,
            type_id: input.type_id,
            amount: input.amount,
            description: input.description,
            date: input.date,
            created_at,
        }
    }

    /// Replace every mutable field
    pub fn replace_fields(&mut self, input: ExpenseInput) {
        self.type_id = input.type_id;
        self.amount = input.amount;
        self.description = input.description;
        self.date = input.date;
    }
}

/// An expense joined with its resolved category
///
/// Built on every list read and never stored. `expenseType` is `null` when
/// the referenced category no longer exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseWithCategory {
    #[serde(flatten)]
    pub expense: Expense,
    pub expense_type: Option<Category>,
}

impl ExpenseWithCategory {
    /// Whether the expense points at a category that no longer exists
    pub fn is_dangling(&self) -> bool {
        self.expense_type.is_none()
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpenseValidationError {
    #[error("Expense amount must be a finite number")]
    NonFiniteAmount,
}
