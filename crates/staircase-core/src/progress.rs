//! Progress metrics for an arranged staircase.

use serde::Serialize;

use crate::challenge::Arrangement;

/// Credited plays against the staircase's maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Progress {
    pub credited_plays: u64,
    pub target_plays: u64,
}

impl Progress {
    /// Completion percentage (0.0 for an empty staircase).
    pub fn percent(&self) -> f64 {
        if self.target_plays == 0 {
            return 0.0;
        }
        100.0 * self.credited_plays as f64 / self.target_plays as f64
    }

    pub fn is_complete(&self) -> bool {
        self.credited_plays == self.target_plays
    }
}

/// Sum of `min(plays, slot)` over all slots, against the triangular target.
pub fn compute_progress(arrangement: &Arrangement) -> Progress {
    let credited_plays = arrangement
        .numbered()
        .filter_map(|(slot, entry)| entry.entry().map(|game| game.credited_plays(slot) as u64))
        .sum();

    Progress {
        credited_plays,
        target_plays: triangular(arrangement.len() as u64),
    }
}

pub fn triangular(n: u64) -> u64 {
    n * (n + 1) / 2
}

/// Largest `L` such that slots 1..=L could all be satisfied by some
/// reassignment of the arranged play counts.
pub fn largest_complete_staircase(arrangement: &Arrangement) -> usize {
    let mut plays: Vec<u32> = arrangement.iter().map(|slot| slot.play_count()).collect();
    if plays.iter().all(|&p| p == 0) {
        return 0;
    }
    plays.sort_unstable();

    let mut seeking: u64 = 1;
    for &count in &plays {
        if count as u64 >= seeking {
            seeking += 1;
        }
    }
    (seeking - 1) as usize
}

/// Progress and largest complete staircase, computed together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ProgressMetrics {
    #[serde(flatten)]
    pub progress: Progress,
    pub largest_complete: usize,
}

impl ProgressMetrics {
    pub fn measure(arrangement: &Arrangement) -> Self {
        Self {
            progress: compute_progress(arrangement),
            largest_complete: largest_complete_staircase(arrangement),
        }
    }
}
