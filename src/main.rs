use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_store::cli::{
    handle_call_command, handle_category_command, handle_expense_command, handle_serve_command,
};
use expense_store::config::{paths::ExpensePaths, settings::Settings};
use expense_store::rpc::CALL_NAMES;
use expense_store::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expenses",
    author = "Kaylee Beyene",
    version,
    about = "Expense and category store",
    long_about = "Tracks expenses grouped into categories. Records live in JSON \
                  files and are reachable through named calls, either one at a \
                  time or as a newline-delimited JSON stream."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Category management commands
    #[command(subcommand, alias = "cat")]
    Category(expense_store::cli::CategoryCommands),

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(expense_store::cli::ExpenseCommands),

    /// Run a single named call, e.g. `call createCategory '{"name":"Food"}'`
    Call {
        /// Call name
        name: String,
        /// JSON arguments
        args: Option<String>,
    },

    /// Answer newline-delimited JSON calls on stdin
    Serve,

    /// Initialize an empty store
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("expense_store=warn".parse()?),
        )
        .init();
    Ok(())
}

fn main() -> Result<()> {
    init_tracing()?;

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // One storage handle for the whole process
    let storage = Storage::new(paths.clone(), &settings)?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Category(cmd)) => {
            handle_category_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Call { name, args }) => {
            if !handle_call_command(&storage, &name, args.as_deref())? {
                std::process::exit(1);
            }
        }
        Some(Commands::Serve) => {
            handle_serve_command(&storage)?;
        }
        Some(Commands::Init) => {
            println!("Initializing expense store at: {}", paths.data_dir().display());
            expense_store::storage::init::initialize_storage(&paths, settings.pretty_json)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
        }
        Some(Commands::Config) => {
            println!("Expense Store Configuration");
            println!("===========================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Categories file: {}", paths.categories_file().display());
            println!("Expenses file:   {}", paths.expenses_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Pretty JSON:     {}", settings.pretty_json);
        }
        None => {
            println!("expenses - expense and category store");
            println!();
            println!("Run 'expenses --help' for usage information.");
            println!("Available calls: {}", CALL_NAMES.join(", "));
        }
    }

    Ok(())
}
