//! Remote call names and their argument schemas
//!
//! Every call has a fixed argument shape. Arguments are checked here, before
//! any service or store access: missing required fields, wrong types,
//! malformed identifiers and unknown fields all fail as validation errors.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{CategoryId, CategoryInput, ExpenseId, ExpenseInput};

/// A validated remote call
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListCategories,
    CreateCategory(CategoryInput),
    UpdateCategory { id: CategoryId, input: CategoryInput },
    DeleteCategory(CategoryId),
    ListExpenses,
    CreateExpense(ExpenseInput),
    UpdateExpense { id: ExpenseId, input: ExpenseInput },
    DeleteExpense(ExpenseId),
}

/// Names of every supported call
pub const CALL_NAMES: [&str; 8] = [
    "listCategories",
    "createCategory",
    "updateCategory",
    "deleteCategory",
    "listExpenses",
    "createExpense",
    "updateExpense",
    "deleteExpense",
];

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct NoArgs {}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct IdArgs<I> {
    id: I,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct UpdateCategoryArgs {
    id: CategoryId,
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    color: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct UpdateExpenseArgs {
    id: ExpenseId,
    type_id: CategoryId,
    amount: f64,
    description: String,
    date: i64,
}

fn parse_args<T: DeserializeOwned>(name: &str, args: Value) -> ExpenseResult<T> {
    // A missing argument object is the same as an empty one
    let args = if args.is_null() {
        Value::Object(Default::default())
    } else {
        args
    };

    serde_json::from_value(args)
        .map_err(|e| ExpenseError::Validation(format!("Invalid arguments for {}: {}", name, e)))
}

impl Call {
    /// Parse a call from its name and JSON arguments
    pub fn parse(name: &str, args: Value) -> ExpenseResult<Self> {
        let call = match name {
            "listCategories" => {
                parse_args::<NoArgs>(name, args)?;
                Self::ListCategories
            }
            "createCategory" => Self::CreateCategory(parse_args(name, args)?),
            "updateCategory" => {
                let a: UpdateCategoryArgs = parse_args(name, args)?;
                Self::UpdateCategory {
                    id: a.id,
                    input: CategoryInput {
                        name: a.name,
                        description: a.description,
                        image_url: a.image_url,
                        color: a.color,
                    },
                }
            }
            "deleteCategory" => Self::DeleteCategory(parse_args::<IdArgs<_>>(name, args)?.id),
            "listExpenses" => {
                parse_args::<NoArgs>(name, args)?;
                Self::ListExpenses
            }
            "createExpense" => Self::CreateExpense(parse_args(name, args)?),
            "updateExpense" => {
                let a: UpdateExpenseArgs = parse_args(name, args)?;
                Self::UpdateExpense {
                    id: a.id,
                    input: ExpenseInput {
                        type_id: a.type_id,
                        amount: a.amount,
                        description: a.description,
                        date: a.date,
                    },
                }
            }
            "deleteExpense" => Self::DeleteExpense(parse_args::<IdArgs<_>>(name, args)?.id),
            other => {
                return Err(ExpenseError::Validation(format!(
                    "Unknown call '{}'; expected one of: {}",
                    other,
                    CALL_NAMES.join(", ")
                )))
            }
        };

        Ok(call)
    }

    /// The wire name of this call
    pub fn name(&self) -> &'static str {
        match self {
            Self::ListCategories => "listCategories",
            Self::CreateCategory(_) => "createCategory",
            Self::UpdateCategory { .. } => "updateCategory",
            Self::DeleteCategory(_) => "deleteCategory",
            Self::ListExpenses => "listExpenses",
            Self::CreateExpense(_) => "createExpense",
            Self::UpdateExpense { .. } => "updateExpense",
            Self::DeleteExpense(_) => "deleteExpense",
        }
    }
}
