use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Settings file path (defaults to captionfix.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Defaults to `replace` in the current directory
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply the replacement table to every supported file under a directory
    Replace {
        /// Directory to scan recursively (defaults to the current directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Replacement table JSON file (overrides the settings file)
        #[arg(short, long)]
        table: Option<PathBuf>,

        /// Wait for Enter before exiting
        #[arg(long)]
        pause: bool,
    },

    /// Insert one blank line before every SRT cue and end files with a blank line
    FormatSrt {
        /// Directory to scan recursively (defaults to the current directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Replace {
            dir: None,
            table: None,
            pause: false,
        }
    }
}
