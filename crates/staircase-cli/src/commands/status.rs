//! Status command implementation.

use std::path::Path;

use anyhow::Result;
use staircase_core::{ProgressMetrics, ProgressReport, format_progress_console};

use crate::cli_utils;

/// Run the status command
pub fn run(config_path: &Path, json: bool) -> Result<()> {
    let config = cli_utils::load_config(config_path)?;
    let arrangement = config.arrange()?;

    if json {
        let report = ProgressReport::new(&arrangement, config.challenge.mode);
        println!("{}", report.to_json()?);
    } else {
        let metrics = ProgressMetrics::measure(&arrangement);
        println!(
            "{}",
            format_progress_console(&arrangement, config.challenge.mode, &metrics)
        );
    }

    Ok(())
}
