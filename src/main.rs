//! beavertail - live terminal viewer for structured logs piped on stdin
//!
//! This is the binary entry point. The viewer itself lives in the
//! `beavertail-*` crates.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use beavertail_app::config::{
    init_config_file, load_settings, resolve_config_path, Settings, SettingsOverrides,
};
use beavertail_app::MAX_CAPACITY;
use beavertail_core::logging;
use beavertail_core::prelude::*;
use clap::builder::RangedU64ValueParser;
use clap::Parser;

/// beavertail - live terminal viewer for structured logs
#[derive(Parser, Debug)]
#[command(name = "beavertail")]
#[command(about = "Tail JSON log lines from stdin in a live terminal view", long_about = None)]
struct Args {
    /// Config file (default: <config_dir>/beavertail/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Number of records kept in memory
    #[arg(
        long,
        value_name = "N",
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_CAPACITY as u64)
    )]
    capacity: Option<usize>,

    /// Header title
    #[arg(long, value_name = "TEXT")]
    title: Option<String>,

    /// Show timestamps in UTC
    #[arg(long)]
    utc: bool,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

impl Args {
    fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            capacity: self.capacity,
            title: self.title.clone(),
            utc: self.utc,
        }
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    let args = Args::parse();

    color_eyre::install()?;

    // To file, since the TUI owns stdout
    logging::init()?;

    let config_path = resolve_config_path(args.config.as_deref());

    if args.init_config {
        let Some(path) = config_path else {
            eprintln!("❌ No config directory found; pass --config <PATH>");
            std::process::exit(1);
        };
        if init_config_file(&path)? {
            eprintln!("✅ Wrote default config to {}", path.display());
        } else {
            eprintln!("Config already exists at {}", path.display());
        }
        return Ok(());
    }

    if io::stdin().is_terminal() {
        eprintln!("❌ Nothing to read: stdin is a terminal.");
        eprintln!();
        eprintln!("Pipe a log stream into beavertail, for example:");
        eprintln!("      my_service 2>&1 | beavertail");
        eprintln!("      beavertail < app.log");
        std::process::exit(1);
    }

    let settings = match &config_path {
        Some(path) => {
            if args.config.is_some() && !path.exists() {
                warn!("Config file {} not found, using defaults", path.display());
            }
            load_settings(path)
        }
        None => Settings::default(),
    }
    .with_overrides(args.overrides());

    let result = beavertail_tui::run(settings).await;
    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
        if e.is_fatal() {
            eprintln!("Logs: {}", logging::log_directory().display());
        }
    }

    Ok(result?)
}
