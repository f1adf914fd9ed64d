//! Food Order CLI - browse the menu, fill a cart and place orders.
//!
//! # Usage
//!
//! ```bash
//! # List the menu
//! food-order menu
//!
//! # Show one menu item
//! food-order show 2
//!
//! # Start an interactive cart session
//! food-order session
//!
//! # Use a custom menu
//! food-order --catalog menu.yaml session
//! ```
//!
//! # Commands
//!
//! - `menu` - Print the menu
//! - `show` - Print one menu item
//! - `session` - Interactive add/remove/checkout session

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

mod commands;
mod config;
mod views;

#[derive(Parser)]
#[command(name = "food-order")]
#[command(author, version, about = "Food ordering from the terminal")]
struct Cli {
    /// YAML menu to serve instead of the built-in sample menu
    #[arg(long, global = true, env = "FOOD_ORDER_CATALOG")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the menu
    Menu,
    /// Print one menu item
    Show {
        /// Menu position (1-indexed)
        position: usize,
    },
    /// Start an interactive cart session on stdin
    Session,
}

fn main() {
    // .env may set FOOD_ORDER_CATALOG or RUST_LOG
    dotenvy::dotenv().ok();

    // Logs go to stderr so views on stdout stay clean
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::new(cli.catalog);
    match cli.command {
        Commands::Menu => commands::menu::list(&config)?,
        Commands::Show { position } => commands::menu::show(&config, position)?,
        Commands::Session => commands::session::run(&config)?,
    }
    Ok(())
}
