//! Expense Store - expenses grouped into categories
//!
//! This library provides a small document store for two record types,
//! categories and expenses, and exposes their create/read/update/delete
//! operations as named remote calls.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (categories, expenses, the joined view)
//! - `storage`: JSON file storage layer
//! - `services`: Validation and CRUD logic
//! - `rpc`: Named call surface and JSON-lines transport
//! - `cli`, `display`: Command-line front end
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_store::config::{ExpensePaths, Settings};
//! use expense_store::rpc::Dispatcher;
//! use expense_store::storage::Storage;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths, &settings)?;
//! storage.load_all()?;
//!
//! let dispatcher = Dispatcher::new(&storage);
//! let id = dispatcher.call("createCategory", serde_json::json!({"name": "Food"}))?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod rpc;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
