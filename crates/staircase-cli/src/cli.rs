//! CLI argument definitions for staircase.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use staircase_core::config::defaults;

#[derive(Parser)]
#[command(name = "staircase")]
#[command(about = "Staircase challenge post generator", version)]
pub struct Args {
    /// Path to the challenge config file
    #[arg(
        short,
        long,
        global = true,
        env = "STAIRCASE_CONFIG",
        default_value = defaults::CONFIG_FILE
    )]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate the forum post (default)
    Render {
        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Seed for random star colors
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show progress in the terminal
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate the config without rendering
    Check,
    /// Write a sample config file
    Init {
        /// Output file path (defaults to the config path)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
