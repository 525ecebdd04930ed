use anyhow::Result;
use clap::Parser;

use quill::{
    app::{get_data_dir, load_config},
    backend::create_generator,
    cli::{handle_command, Cli},
    store::{SettingsStore, WorkspaceStore},
    tui::{run_ui, App},
    utils::init_logger,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Set up logging
    init_logger(cli.verbose);

    // Load configuration
    let mut config = if let Some(config_path) = &cli.config {
        let toml_str = std::fs::read_to_string(config_path)?;
        toml::from_str(&toml_str)?
    } else {
        load_config().unwrap_or_default()
    };

    if let Some(dir) = cli.data_dir.clone() {
        config.storage.data_dir = Some(dir);
    }

    // Handle subcommands that do not need the UI
    if let Some(command) = &cli.command {
        if handle_command(command, &config)? {
            return Ok(());
        }
    }

    // Open the stores and restore the last session
    let data_dir = get_data_dir(&config)?;
    let settings_store = SettingsStore::new(&data_dir)?;
    let settings = settings_store.load();
    let workspace_store = WorkspaceStore::new(&data_dir)?;

    let generator = create_generator(&settings, &config);

    let mut app = App::new(config, settings, settings_store, workspace_store, generator);
    app.load_workspace();

    run_ui(app).await
}
