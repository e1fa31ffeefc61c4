//! Init command for writing a starter config.

use std::path::Path;

use anyhow::{Result, bail};
use staircase_core::config::SAMPLE_CONFIG;

/// Write the sample config to `output`
pub fn run(output: &Path, force: bool) -> Result<()> {
    if output.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            output.display()
        );
    }

    std::fs::write(output, SAMPLE_CONFIG)?;
    println!("Sample config written to {}", output.display());

    Ok(())
}
