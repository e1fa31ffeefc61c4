//! Render command for generating the forum post.

use std::path::Path;

use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use staircase_core::{ProgressMetrics, format_progress_summary, render_post};
use tracing::info;

use crate::cli_utils;

/// Generate the post and print or write it
pub fn run(config_path: &Path, output: Option<&Path>, seed: Option<u64>) -> Result<()> {
    let config = cli_utils::load_config(config_path)?;
    let arrangement = config.arrange()?;
    info!(
        "{}",
        format_progress_summary(&ProgressMetrics::measure(&arrangement))
    );

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let today = chrono::Local::now().date_naive();
    let lines = render_post(&config, &arrangement, today, &mut rng)?;

    let mut content = lines.join("\n");
    content.push('\n');

    if let Some(output_path) = output {
        std::fs::write(output_path, &content)?;
        eprintln!("Post written to: {}", output_path.display());
    } else {
        print!("{}", content);
    }

    Ok(())
}
