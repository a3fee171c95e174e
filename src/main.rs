//! captionfix - bulk text cleanup for caption and lyric files
//!
//! Applies a replacement table to every LRC, SRT, ASS/SSA, VTT and TXT
//! file under a directory, and offers a separate SRT spacing pass.

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{error, info, Level};
use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use captionfix::cli::{Args, Commands};
use captionfix::config::{LoggingConfig, Settings};
use captionfix::format::SUPPORTED_EXTENSIONS;
use captionfix::replacements::ReplacementTable;
use captionfix::subtitle;
use captionfix::workflow::Workflow;

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = Settings::load(args.config.as_deref())?;

    // Dropping the guard flushes the file writer, so hold it until exit
    let _guard = setup_logging(args.verbose, &settings.logging)?;

    match args.command.unwrap_or_default() {
        Commands::Replace { dir, table, pause } => {
            let result = run_replace(&settings, dir, table);
            if pause {
                wait_for_enter();
            }
            result?;
        }
        Commands::FormatSrt { dir } => {
            let root = resolve_dir(dir)?;
            info!("Formatting SRT files under: {}", root.display());
            subtitle::format_directory(&root)?;
        }
    }

    Ok(())
}

fn run_replace(settings: &Settings, dir: Option<PathBuf>, table: Option<PathBuf>) -> Result<()> {
    info!("captionfix starting");

    let root = resolve_dir(dir)?;
    info!("Supported file formats:");
    for ext in SUPPORTED_EXTENSIONS {
        info!("  {} - {}", ext.extension, ext.description);
    }

    let table_path = table.unwrap_or_else(|| settings.replacements.path.clone());
    let table = match ReplacementTable::from_file(&table_path) {
        Ok(table) => table,
        Err(e) => {
            error!("Could not load replacement table, aborting: {}", e);
            return Err(e.into());
        }
    };

    let workflow = Workflow::new(table);
    let stats = workflow.process_directory(&root)?;
    stats.report();
    Ok(())
}

fn resolve_dir(dir: Option<PathBuf>) -> Result<PathBuf> {
    match dir {
        Some(dir) => Ok(dir),
        None => Ok(std::env::current_dir()?),
    }
}

fn wait_for_enter() {
    print!("Processing finished, press Enter to exit...");
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);
}

/// Setup logging to both console and a per-run file
fn setup_logging(verbose: bool, logging: &LoggingConfig) -> Result<WorkerGuard> {
    std::fs::create_dir_all(&logging.dir)?;

    let file_name = format!(
        "{}_{}.log",
        logging.file_prefix,
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    );
    let file_appender = rolling::never(&logging.dir, &file_name);
    let (non_blocking_file, guard) = non_blocking(file_appender);

    let log_level = if verbose { Level::DEBUG } else { Level::INFO };

    let console_layer = fmt::layer().with_target(false);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_target(false)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    info!(
        "Logging initialized - console: {}, file: {}",
        log_level,
        logging.dir.join(&file_name).display()
    );

    Ok(guard)
}
