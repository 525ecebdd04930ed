use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quill")]
#[command(version)]
#[command(about = "An AI-style academic writing assistant for the terminal", long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory holding saved essays and settings
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize configuration
    Init,
    /// Write the saved essay to a text file without opening the UI
    Export {
        /// Directory to write the export into (defaults to the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show version information
    Version,
}
