//! wps CLI
//!
//! Admin and preview surface for product-page snippet placement

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wps_core::logging_facility::{self, Profile};

mod commands;
mod config;

use config::Config;

#[derive(Debug, Parser)]
#[command(name = "wps")]
#[command(about = "wps - snippets and placement rules for product pages", long_about = None)]
struct Cli {
    /// Option database
    #[arg(long, global = true, env = "WPS_DB", default_value = config::DEFAULT_DB_PATH)]
    db: PathBuf,

    /// Logging profile (development | production); logging is off when unset
    #[arg(long, global = true, env = "WPS_LOG_PROFILE")]
    log_profile: Option<Profile>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Manage stored snippets
    Snippet(commands::snippet::SnippetArgs),
    /// Manage placement rules
    Rules(commands::rules::RulesArgs),
    /// List the available positions
    Positions,
    /// Render the placements for a product detail page
    Render(commands::render::RenderArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Some(profile) = cli.log_profile {
        logging_facility::init(profile);
    }

    let config = Config { db_path: cli.db };
    tracing::debug!(db = %config.db_path.display(), "configuration resolved");

    let result = match cli.command {
        Commands::Snippet(args) => commands::snippet::execute(args, &config),
        Commands::Rules(args) => commands::rules::execute(args, &config),
        Commands::Positions => commands::positions::execute(),
        Commands::Render(args) => commands::render::execute(args, &config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
