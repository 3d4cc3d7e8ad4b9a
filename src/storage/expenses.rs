//! Expense repository for JSON storage
//!
//! Manages loading and saving expenses to expenses.json

use crate::models::{Expense, ExpenseId};

use super::collection::{Collection, Record};

impl Record for Expense {
    type Id = ExpenseId;

    const ENTITY: &'static str = "Expense";
    const COLLECTION: &'static str = "expenses";

    fn id(&self) -> ExpenseId {
        self.id
    }
}

/// Repository for expense persistence
pub type ExpenseRepository = Collection<Expense>;
