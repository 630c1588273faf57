// SPDX-FileCopyrightText: 2026 Shelter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shelter - a local pet record store.
//!
//! This is the binary entry point: list and edit views rendered as
//! subcommands over the record-access facade.

mod commands;

use clap::{Parser, Subcommand};
use shelter_core::{Gender, PetStore, ShelterError};
use shelter_storage::SqlitePetStore;

/// Shelter - a local pet record store.
#[derive(Parser, Debug)]
#[command(name = "shelter", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List all pets.
    List,
    /// Show one pet.
    Show { id: i64 },
    /// Add a new pet.
    Add {
        /// Pet name (required).
        #[arg(long)]
        name: String,
        /// Breed; omit for "unknown breed".
        #[arg(long)]
        breed: Option<String>,
        /// Gender: unknown, male, or female.
        #[arg(long, default_value = "unknown")]
        gender: Gender,
        /// Weight in kg; defaults to 0 when omitted.
        #[arg(long, default_value_t = 0)]
        weight: i64,
    },
    /// Edit an existing pet; only the given fields change.
    Edit {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        breed: Option<String>,
        #[arg(long)]
        gender: Option<Gender>,
        #[arg(long)]
        weight: Option<i64>,
    },
    /// Delete one pet.
    Delete { id: i64 },
    /// Insert the fixed sample pet.
    Seed,
    /// Delete all pets.
    Clear,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match shelter_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            shelter_config::render_errors(&errors);
            std::process::exit(1);
        }
    };
    init_tracing(&config.app.log_level);

    let store = SqlitePetStore::new(config.storage);
    if let Err(e) = run(cli.command, &store).await {
        eprintln!("shelter: {e}");
        std::process::exit(1);
    }
}

async fn run(command: Commands, store: &SqlitePetStore) -> Result<(), ShelterError> {
    store.initialize().await?;

    let result = match command {
        Commands::List => commands::list(store).await,
        Commands::Show { id } => commands::show(store, id).await,
        Commands::Add {
            name,
            breed,
            gender,
            weight,
        } => commands::add(store, &name, breed.as_deref(), gender, weight).await,
        Commands::Edit {
            id,
            name,
            breed,
            gender,
            weight,
        } => commands::edit(store, id, name.as_deref(), breed.as_deref(), gender, weight).await,
        Commands::Delete { id } => commands::delete(store, id).await,
        Commands::Seed => commands::seed(store).await,
        Commands::Clear => commands::clear(store).await,
    };

    let closed = store.close().await;
    result.and(closed)
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "shelter={log_level},shelter_storage={log_level},shelter_config={log_level},shelter_core={log_level},warn"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
