//! Non-interactive menu commands.
//!
//! # Usage
//!
//! ```bash
//! # List the menu
//! food-order menu
//!
//! # Show one item
//! food-order show 2
//! ```

use std::io::Write;

use crate::config::CliConfig;
use crate::views::{DetailView, MenuView};

/// Print the menu.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or stdout is closed.
pub fn list(config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = config.load_catalog()?;
    write!(std::io::stdout().lock(), "{}", MenuView(&catalog))?;
    Ok(())
}

/// Print the detail view of the item at 1-indexed `position`.
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, there is no item at
/// `position`, or stdout is closed.
pub fn show(config: &CliConfig, position: usize) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = config.load_catalog()?;
    let item = catalog
        .get_by_position(position)
        .ok_or_else(|| format!("No menu item at position {position} (menu has {})", catalog.len()))?;
    write!(std::io::stdout().lock(), "{}", DetailView(item))?;
    Ok(())
}
