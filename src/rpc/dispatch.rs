//! Call dispatch
//!
//! Routes validated calls to the category and expense services and shapes
//! their results for the wire.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ExpenseError, ExpenseResult};
use crate::services::{CategoryService, ExpenseService};
use crate::storage::Storage;

use super::call::Call;

/// A remote call as it arrives on the wire
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Request {
    pub call: String,
    #[serde(default)]
    pub args: Value,
}

/// Error payload of a failed call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    pub kind: &'static str,
    pub message: String,
}

/// Response to a remote call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

impl Response {
    pub fn success(value: Value) -> Self {
        Self {
            ok: true,
            value: Some(value),
            error: None,
        }
    }

    pub fn failure(err: &ExpenseError) -> Self {
        Self {
            ok: false,
            value: None,
            error: Some(ErrorBody {
                kind: err.kind(),
                message: err.to_string(),
            }),
        }
    }
}

/// Dispatches calls against one shared storage handle
pub struct Dispatcher<'a> {
    categories: CategoryService<'a>,
    expenses: ExpenseService<'a>,
}

impl<'a> Dispatcher<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            categories: CategoryService::new(storage),
            expenses: ExpenseService::new(storage),
        }
    }

    /// Execute a validated call
    ///
    /// Creates return the new identifier; updates and deletes return `null`.
    pub fn execute(&self, call: Call) -> ExpenseResult<Value> {
        let value = match call {
            Call::ListCategories => serde_json::to_value(self.categories.list()?)?,
            Call::CreateCategory(input) => Value::String(self.categories.create(input)?.to_string()),
            Call::UpdateCategory { id, input } => {
                self.categories.update(id, input)?;
                Value::Null
            }
            Call::DeleteCategory(id) => {
                self.categories.delete(id)?;
                Value::Null
            }
            Call::ListExpenses => serde_json::to_value(self.expenses.list()?)?,
            Call::CreateExpense(input) => Value::String(self.expenses.create(input)?.to_string()),
            Call::UpdateExpense { id, input } => {
                self.expenses.update(id, input)?;
                Value::Null
            }
            Call::DeleteExpense(id) => {
                self.expenses.delete(id)?;
                Value::Null
            }
        };

        Ok(value)
    }

    /// Parse and execute a named call
    pub fn call(&self, name: &str, args: Value) -> ExpenseResult<Value> {
        let call = Call::parse(name, args)?;
        self.execute(call)
    }

    /// Handle a wire request, turning every failure into an error response
    pub fn handle(&self, request: Request) -> Response {
        match self.call(&request.call, request.args) {
            Ok(value) => {
                tracing::info!(call = %request.call, "call succeeded");
                Response::success(value)
            }
            Err(err) => {
                tracing::warn!(call = %request.call, kind = err.kind(), error = %err, "call failed");
                Response::failure(&err)
            }
        }
    }

    /// Handle one JSON-encoded request and return the JSON-encoded response
    pub fn handle_json(&self, raw: &str) -> String {
        let response = match serde_json::from_str::<Request>(raw) {
            Ok(request) => self.handle(request),
            Err(e) => {
                let err = ExpenseError::Validation(format!("Malformed request: {}", e));
                tracing::warn!(error = %err, "rejected request");
                Response::failure(&err)
            }
        };

        serde_json::to_string(&response).unwrap_or_else(|e| {
            format!(
                r#"{{"ok":false,"error":{{"kind":"store_unavailable","message":"Failed to encode response: {}"}}}}"#,
                e
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ExpensePaths, Settings};
    use serde_json::json;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_food_lunch_scenario() {
        let (_temp_dir, storage) = create_test_storage();
        let dispatcher = Dispatcher::new(&storage);

        let c1 = dispatcher
            .call("createCategory", json!({"name": "Food"}))
            .unwrap();
        let c1 = c1.as_str().unwrap().to_string();

        let e1 = dispatcher
            .call(
                "createExpense",
                json!({
                    "typeId": c1,
                    "amount": 12.5,
                    "description": "Lunch",
                    "date": 1_700_000_000_000i64
                }),
            )
            .unwrap();

        let listed = dispatcher.call("listExpenses", Value::Null).unwrap();
        let listed = listed.as_array().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0]["amount"], 12.5);
        assert_eq!(listed[0]["expenseType"]["name"], "Food");

        let deleted = dispatcher.call("deleteCategory", json!({"id": c1})).unwrap();
        assert!(deleted.is_null());

        let listed = dispatcher.call("listExpenses", Value::Null).unwrap();
        let listed = listed.as_array().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0]["id"], e1);
        assert!(listed[0]["expenseType"].is_null());
    }

    #[test]
    fn test_list_categories_wire_shape() {
        let (_temp_dir, storage) = create_test_storage();
        let dispatcher = Dispatcher::new(&storage);

        dispatcher
            .call("createCategory", json!({"name": "Rent", "imageUrl": "house.png"}))
            .unwrap();

        let listed = dispatcher.call("listCategories", json!({})).unwrap();
        assert_eq!(listed[0]["name"], "Rent");
        assert_eq!(listed[0]["imageUrl"], "house.png");
        assert!(listed[0]["createdAt"].is_i64());
    }

    #[test]
    fn test_update_marker_and_not_found() {
        let (_temp_dir, storage) = create_test_storage();
        let dispatcher = Dispatcher::new(&storage);

        let id = dispatcher
            .call("createCategory", json!({"name": "Food"}))
            .unwrap();
        let updated = dispatcher
            .call("updateCategory", json!({"id": id, "name": "Groceries"}))
            .unwrap();
        assert!(updated.is_null());

        let missing = json!({"id": "550e8400-e29b-41d4-a716-446655440000"});
        let err = dispatcher.call("deleteExpense", missing).unwrap_err();
        assert_eq!(err.kind(), "not_found");
    }

    #[test]
    fn test_handle_json_success() {
        let (_temp_dir, storage) = create_test_storage();
        let dispatcher = Dispatcher::new(&storage);

        let raw = dispatcher.handle_json(r#"{"call": "listCategories"}"#);
        let response: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(response, json!({"ok": true, "value": []}));
    }

    #[test]
    fn test_handle_json_null_success_marker() {
        let (_temp_dir, storage) = create_test_storage();
        let dispatcher = Dispatcher::new(&storage);
        let id = dispatcher
            .call("createCategory", json!({"name": "Food"}))
            .unwrap();

        let request = json!({"call": "deleteCategory", "args": {"id": id}}).to_string();
        let response: Value = serde_json::from_str(&dispatcher.handle_json(&request)).unwrap();
        assert_eq!(response, json!({"ok": true, "value": null}));
    }

    #[test]
    fn test_handle_json_errors() {
        let (_temp_dir, storage) = create_test_storage();
        let dispatcher = Dispatcher::new(&storage);

        let raw = dispatcher.handle_json("{not json");
        let response: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(response["ok"], false);
        assert_eq!(response["error"]["kind"], "validation");

        let raw = dispatcher.handle_json(r#"{"call": "createCategory", "args": {}}"#);
        let response: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(response["error"]["kind"], "validation");

        let raw = dispatcher.handle_json(
            r#"{"call": "deleteCategory", "args": {"id": "550e8400-e29b-41d4-a716-446655440000"}}"#,
        );
        let response: Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(response["error"]["kind"], "not_found");
        assert!(response.get("value").is_none());
    }
}
