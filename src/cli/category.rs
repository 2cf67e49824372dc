//! Category CLI commands

use clap::Subcommand;

use crate::display::format_category_list;
use crate::error::SpendlensResult;
use crate::models::Kind;
use crate::services::{CategoryService, CreateCategoryInput};
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// List categories
    List {
        /// Only income or only expense categories
        #[arg(short, long)]
        kind: Option<Kind>,
    },

    /// Create a new category
    Add {
        /// Category name
        name: String,
        /// income or expense
        #[arg(short, long, default_value = "expense")]
        kind: Kind,
        /// Display color (#rrggbb)
        #[arg(long)]
        color: Option<String>,
        /// Display icon
        #[arg(long)]
        icon: Option<String>,
    },

    /// Delete a category
    ///
    /// Transactions and budgets that use it are kept and show up as
    /// "Unknown" in reports.
    Delete {
        /// Category name or ID
        category: String,
    },
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> SpendlensResult<()> {
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::List { kind } => {
            let categories = service.list(kind)?;
            print!("{}", format_category_list(&categories));
        }

        CategoryCommands::Add {
            name,
            kind,
            color,
            icon,
        } => {
            let category = service.create(CreateCategoryInput {
                name,
                kind,
                color,
                icon,
            })?;
            println!(
                "Created {} category: {} (ID: {})",
                category.kind.as_str(),
                category.name,
                category.id.short()
            );
        }

        CategoryCommands::Delete { category } => {
            let category = service.delete(&category)?;
            println!("Deleted category: {}", category.name);
        }
    }

    Ok(())
}
