//! Service layer for the expense store
//!
//! The service layer validates input on top of the storage layer and stamps
//! creation times. Services are stateless: they borrow the shared storage
//! handle and keep nothing between calls.

pub mod category;
pub mod expense;

pub use category::CategoryService;
pub use expense::ExpenseService;
