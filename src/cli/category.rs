//! Category CLI commands
//!
//! Implements CLI commands for category management.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::category::{format_category_details, format_category_list};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, CategoryInput};
use crate::services::CategoryService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories
    List,

    /// Show category details
    Show {
        /// Category name or ID
        category: String,
    },

    /// Create a new category
    Create {
        /// Category name
        name: String,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(long)]
        image_url: Option<String>,
        #[arg(long)]
        color: Option<String>,
    },

    /// Replace a category's fields (omitted options are cleared)
    Update {
        /// Category name or ID
        category: String,
        /// New name
        name: String,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(long)]
        image_url: Option<String>,
        #[arg(long)]
        color: Option<String>,
    },

    /// Delete a category (expenses using it are kept)
    Delete {
        /// Category name or ID
        category: String,
    },
}

/// Resolve a category by name or ID, failing when nothing matches
pub(crate) fn resolve_category(
    service: &CategoryService<'_>,
    identifier: &str,
) -> ExpenseResult<Category> {
    service
        .find(identifier)?
        .ok_or_else(|| ExpenseError::category_not_found(identifier))
}

/// Handle a category command
pub fn handle_category_command(
    storage: &Storage,
    settings: &Settings,
    cmd: CategoryCommands,
) -> ExpenseResult<()> {
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::List => {
            let categories = service.list()?;
            print!("{}", format_category_list(&categories));
        }

        CategoryCommands::Show { category } => {
            let cat = resolve_category(&service, &category)?;
            print!("{}", format_category_details(&cat, settings));
        }

        CategoryCommands::Create {
            name,
            description,
            image_url,
            color,
        } => {
            let id = service.create(CategoryInput {
                name,
                description,
                image_url,
                color,
            })?;
            let category = service.get(id)?;

            println!("Created category: {}", category.name);
            println!("  ID: {}", category.id);
        }

        CategoryCommands::Update {
            category,
            name,
            description,
            image_url,
            color,
        } => {
            let cat = resolve_category(&service, &category)?;
            service.update(
                cat.id,
                CategoryInput {
                    name,
                    description,
                    image_url,
                    color,
                },
            )?;

            println!("Updated category: {}", service.get(cat.id)?.name);
        }

        CategoryCommands::Delete { category } => {
            let cat = resolve_category(&service, &category)?;
            service.delete(cat.id)?;
            println!("Deleted category: {}", cat.name);
        }
    }

    Ok(())
}
