//! Command-line interface for gridmark.

use clap::Parser;
use std::path::PathBuf;

/// Gridmark - tic-tac-toe on a board of any size
#[derive(Parser, Debug)]
#[command(name = "gridmark")]
#[command(about = "Two-player connection game on a rectangular grid", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board width (at least 3). Overrides the config file.
    #[arg(short, long)]
    pub columns: Option<usize>,

    /// Board height (at least 3). Overrides the config file.
    #[arg(short, long)]
    pub rows: Option<usize>,

    /// Path to the TOML config file (missing file means defaults)
    #[arg(long, default_value = "gridmark.toml")]
    pub config: PathBuf,

    /// Where to write logs. Overrides the config file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
