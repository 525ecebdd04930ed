use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

use crate::app::{get_data_dir, init_config, Config};
use crate::constants::PLACEHOLDER_MARKER;
use crate::store::{export_essay, WorkspaceStore};
use crate::utils::html_to_text;

use super::Commands;

/// Handle CLI subcommands. Returns true when the command ran to completion
/// and the UI should not start.
pub fn handle_command(command: &Commands, config: &Config) -> Result<bool> {
    match command {
        Commands::Init => {
            println!("Initializing Quill configuration...");
            init_config()?;
            println!("Configuration initialized successfully!");
            Ok(true)
        }
        Commands::Export { output } => {
            export_saved_essay(config, output.clone())?;
            Ok(true)
        }
        Commands::Version => {
            show_version();
            Ok(true)
        }
    }
}

/// Export the saved essay without entering the TUI
fn export_saved_essay(config: &Config, output: Option<PathBuf>) -> Result<()> {
    let data_dir = get_data_dir(config)?;
    let store = WorkspaceStore::new(&data_dir)?;

    let workspace = match store.load()? {
        Some(workspace) => workspace,
        None => {
            println!("{}", "No saved essay found".yellow());
            return Ok(());
        }
    };

    if workspace.essay.contains(PLACEHOLDER_MARKER) {
        println!("{}", "No saved essay found".yellow());
        return Ok(());
    }

    let text = html_to_text(&workspace.essay);
    if text.trim().is_empty() {
        println!("{}", "No saved essay found".yellow());
        return Ok(());
    }

    let dir = output.unwrap_or_else(|| PathBuf::from("."));
    let path = export_essay(&text, &dir)?;
    println!("Exported essay to {}", path.display().to_string().green());

    Ok(())
}

/// Show version information
pub fn show_version() {
    println!("Quill v{}", env!("CARGO_PKG_VERSION"));
    println!("   An AI-style academic writing assistant for the terminal");
}
