//! Category model
//!
//! A category is a named grouping for expenses. Only the name is required;
//! the descriptive fields are free text and are not validated.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;

/// A stored expense category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique identifier, assigned by the store
    pub id: CategoryId,

    /// Category name
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Creation time in epoch milliseconds, never modified
    pub created_at: i64,
}

/// The mutable field set of a category, as accepted by create and update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CategoryInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

impl CategoryInput {
    /// Create an input with just a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Validate the input
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        Ok(())
    }
}

impl Category {
    /// Build a new category from validated input
    pub fn new(id: CategoryId, input: CategoryInput, created_at: i64) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            image_url: input.image_url,
            color: input.color,
            created_at,
        }
    }

    /// Replace every mutable field; absent optional fields are cleared
    pub fn replace_fields(&mut self, input: CategoryInput) {
        self.name = input.name;
        self.description = input.description;
        self.image_url = input.image_url;
        self.color = input.color;
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CategoryValidationError {
    #[error("Category name cannot be empty")]
    EmptyName,
}
