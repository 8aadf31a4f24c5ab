//! Pixel Haven CLI - Database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! ph-cli migrate
//!
//! # Create an employee account
//! ph-cli employee create -u clerk -p 'a long password' -r staff
//!
//! # Load the sample catalog into an empty database
//! ph-cli seed
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `employee create` - Create employee accounts
//! - `seed` - Seed the database with the sample catalog

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "ph-cli")]
#[command(author, version, about = "Pixel Haven CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Manage employee accounts
    Employee {
        #[command(subcommand)]
        action: EmployeeAction,
    },
    /// Seed the database with the sample catalog
    Seed,
}

#[derive(Subcommand)]
enum EmployeeAction {
    /// Create a new employee account
    Create {
        /// Login username
        #[arg(short, long)]
        username: String,

        /// Password (at least 8 characters)
        #[arg(short, long)]
        password: String,

        /// Employee role (`admin`, `staff`)
        #[arg(short, long, default_value = "staff")]
        role: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Employee { action } => match action {
            EmployeeAction::Create {
                username,
                password,
                role,
            } => {
                commands::employee::create(&username, &password, &role).await?;
            }
        },
        Commands::Seed => commands::seed::run().await?,
    }
    Ok(())
}
