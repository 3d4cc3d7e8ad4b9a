//! Category repository for JSON storage
//!
//! Manages loading and saving categories to categories.json

use crate::models::{Category, CategoryId};

use super::collection::{Collection, Record};

impl Record for Category {
    type Id = CategoryId;

    const ENTITY: &'static str = "Category";
    const COLLECTION: &'static str = "categories";

    fn id(&self) -> CategoryId {
        self.id
    }
}

/// Repository for category persistence
pub type CategoryRepository = Collection<Category>;
