//! Expense CLI commands
//!
//! Implements CLI commands for expense management.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::expense::{format_expense_details, format_expense_register};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::timestamp::{now_millis, parse_date_millis};
use crate::models::{ExpenseId, ExpenseInput};
use crate::services::{CategoryService, ExpenseService};
use crate::storage::Storage;

use super::category::resolve_category;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// List all expenses with their categories
    List,

    /// Show expense details
    Show {
        /// Expense ID
        id: String,
    },

    /// Record a new expense
    Create {
        /// Category name or ID
        category: String,
        /// Amount (e.g., 12.50)
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        /// What the expense was for
        description: String,
        /// Date (YYYY-MM-DD or epoch milliseconds, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Replace every field of an expense
    Update {
        /// Expense ID
        id: String,
        /// Category name or ID
        category: String,
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        description: String,
        /// Date (YYYY-MM-DD or epoch milliseconds)
        #[arg(short, long)]
        date: String,
    },

    /// Delete an expense
    Delete {
        /// Expense ID
        id: String,
    },
}

fn parse_expense_id(s: &str) -> ExpenseResult<ExpenseId> {
    s.parse()
        .map_err(|_| ExpenseError::Validation(format!("Invalid expense ID: {}", s)))
}

fn parse_date(s: &str) -> ExpenseResult<i64> {
    parse_date_millis(s).map_err(ExpenseError::Validation)
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let service = ExpenseService::new(storage);
    let categories = CategoryService::new(storage);

    match cmd {
        ExpenseCommands::List => {
            let expenses = service.list()?;
            print!("{}", format_expense_register(&expenses, settings));
        }

        ExpenseCommands::Show { id } => {
            let expense = service.get(parse_expense_id(&id)?)?;
            let category = storage.categories.get(expense.type_id)?;
            print!(
                "{}",
                format_expense_details(&expense, category.as_ref(), settings)
            );
        }

        ExpenseCommands::Create {
            category,
            amount,
            description,
            date,
        } => {
            let cat = resolve_category(&categories, &category)?;
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => now_millis(),
            };

            let id = service.create(ExpenseInput {
                type_id: cat.id,
                amount,
                description,
                date,
            })?;

            println!("Created expense in '{}'", cat.name);
            println!("  ID: {}", id);
        }

        ExpenseCommands::Update {
            id,
            category,
            amount,
            description,
            date,
        } => {
            let id = parse_expense_id(&id)?;
            let cat = resolve_category(&categories, &category)?;

            service.update(
                id,
                ExpenseInput {
                    type_id: cat.id,
                    amount,
                    description,
                    date: parse_date(&date)?,
                },
            )?;

            println!("Updated expense: {}", id);
        }

        ExpenseCommands::Delete { id } => {
            let id = parse_expense_id(&id)?;
            service.delete(id)?;
            println!("Deleted expense: {}", id);
        }
    }

    Ok(())
}
