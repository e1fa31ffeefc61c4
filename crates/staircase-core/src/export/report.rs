use serde::Serialize;

use crate::challenge::{Arrangement, Mode};
use crate::error::Result;
use crate::progress::ProgressMetrics;

/// Machine-readable snapshot of a staircase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressReport {
    pub level: usize,
    pub mode: Mode,
    pub slots: Vec<SlotReport>,
    #[serde(flatten)]
    pub metrics: ProgressMetrics,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotReport {
    pub slot: usize,
    pub title: Option<String>,
    pub id: Option<u32>,
    pub plays: u32,
    pub credited: u32,
    pub complete: bool,
}

impl ProgressReport {
    pub fn new(arrangement: &Arrangement, mode: Mode) -> Self {
        let slots = arrangement
            .numbered()
            .map(|(number, slot)| {
                let game = slot.entry();
                SlotReport {
                    slot: number,
                    title: game.map(|game| game.title.clone()),
                    id: game.and_then(|game| game.external_id),
                    plays: slot.play_count(),
                    credited: game.map_or(0, |game| game.credited_plays(number)),
                    complete: game.is_some_and(|game| game.satisfies(number)),
                }
            })
            .collect();
        let metrics = ProgressMetrics::measure(arrangement);

        Self {
            level: arrangement.len(),
            mode,
            slots,
            metrics,
            percent: metrics.progress.percent(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
