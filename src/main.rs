// src/main.rs

use std::{fs::OpenOptions, path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use imgsift::{
    app::{App, Mode},
    config::Config,
    ui,
};

/// Browse, select, and relocate images from a directory tree.
#[derive(Debug, Parser)]
#[command(name = "imgsift", version, about)]
struct Cli {
    /// Source directory to walk.
    source: PathBuf,

    /// Destination root for move mode. Moving without it raises an alert.
    #[arg(long)]
    dest: Option<PathBuf>,

    /// Move files on toggle instead of keeping an in-memory selection.
    #[arg(long = "move")]
    move_mode: bool,

    /// Gallery columns (1-8), overriding the config file.
    #[arg(long)]
    columns: Option<u16>,

    /// Where the exported name list goes.
    #[arg(long, default_value = "imgsift-selected.txt")]
    report: PathBuf,

    /// Explicit config file path.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(columns) = cli.columns {
        config.columns = columns;
    }
    init_tracing(&config)?;

    let mode = if cli.move_mode { Mode::Move } else { Mode::Select };
    let mut app = App::new(cli.source, cli.dest, mode, &config, cli.report)?;
    ui::run(&mut app)?;

    // Terminal is back to normal; print the session summary.
    println!(
        "{} images shown, {} {}",
        app.entries.len(),
        app.marked_count(),
        match mode {
            Mode::Select => "selected",
            Mode::Move => "moved",
        },
    );
    Ok(())
}

/// Logs go to a file; the alternate screen owns stdout.
fn init_tracing(config: &Config) -> Result<()> {
    let Some(path) = config.log_path() else {
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    info!(version = env!("CARGO_PKG_VERSION"), "imgsift starting");
    Ok(())
}
