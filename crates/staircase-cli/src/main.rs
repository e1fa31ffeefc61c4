mod cli;
mod cli_utils;
mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();

    // stdout is reserved for the post.
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("staircase_cli=warn,staircase_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(cli_utils::exit_status(&err))
        }
    }
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Command::Render { output, seed }) => {
            commands::render::run(&args.config, output.as_deref(), seed)
        }
        Some(Command::Status { json }) => commands::status::run(&args.config, json),
        Some(Command::Check) => commands::check::run(&args.config),
        Some(Command::Init { output, force }) => {
            commands::init::run(output.as_deref().unwrap_or(args.config.as_path()), force)
        }
        None => commands::render::run(&args.config, None, None),
    }
}
