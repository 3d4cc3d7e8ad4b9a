//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service and call layers.

pub mod call;
pub mod category;
pub mod expense;

pub use call::{handle_call_command, handle_serve_command};
pub use category::{handle_category_command, CategoryCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
