//! Check command for validating a challenge config.

use std::path::Path;

use anyhow::{Context, Result};
use staircase_core::export::game_name;

use crate::cli_utils;

/// Validate the config and report the arranged staircase
pub fn run(config_path: &Path) -> Result<()> {
    let config = cli_utils::load_config(config_path)?;
    let arrangement = config.arrange()?;

    for (number, slot) in arrangement.numbered() {
        if let Some(game) = slot.entry() {
            game_name(game).with_context(|| format!("Invalid game in slot {}", number))?;
        }
    }

    let occupied = arrangement.iter().filter(|slot| !slot.is_empty()).count();
    let dropped = config.games.len().saturating_sub(occupied);
    println!(
        "OK: Staircase-{} ({} mode), {} slots filled, {} empty",
        arrangement.len(),
        config.challenge.mode,
        occupied,
        arrangement.len() - occupied
    );
    if dropped > 0 {
        println!("{} games with the fewest plays do not fit and are left out", dropped);
    }

    Ok(())
}
