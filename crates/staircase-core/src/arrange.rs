//! Slot assignment for the staircase.
//!
//! Games are sorted by play count, fitted to the challenge level, optionally
//! shifted toward the low slots, and finally pulled back under their
//! maximum-slot caps.

use tracing::{debug, warn};

use crate::challenge::{Arrangement, GameEntry, Mode, Slot};
use crate::error::{Error, Result};

/// Arrange `entries` into exactly `level` slots.
///
/// The caller's list is never modified. Fails with [`Error::Configuration`]
/// when the mode or the caps make the staircase impossible, and with
/// [`Error::InternalConsistency`] when cap reinsertion would start below
/// slot 1.
pub fn arrange(
    entries: &[GameEntry],
    level: usize,
    mode: Mode,
    shift_low: bool,
) -> Result<Arrangement> {
    validate(entries, level, mode)?;

    let mut games = entries.to_vec();
    if mode.sorts_by_plays() {
        games.sort_by(|a, b| {
            a.play_count
                .cmp(&b.play_count)
                .then_with(|| a.title.cmp(&b.title))
        });
    }

    let mut slots: Vec<Slot> = if games.len() > level {
        let dropped = games.len() - level;
        warn!(
            "{} games declared for a staircase of {}, dropping the {} with fewest plays",
            games.len(),
            level,
            dropped
        );
        games.into_iter().skip(dropped).map(Slot::from).collect()
    } else {
        let padding = level - games.len();
        let mut slots: Vec<Slot> = std::iter::repeat_with(Slot::default)
            .take(padding)
            .chain(games.into_iter().map(Slot::from))
            .collect();
        if padding > 0 && shift_low {
            shift_games_low(&mut slots);
        }
        slots
    };

    enforce_caps(&mut slots)?;

    Ok(Arrangement::new(slots))
}

/// Reject setups that can never form a valid staircase.
pub fn validate(entries: &[GameEntry], level: usize, mode: Mode) -> Result<()> {
    if level == 0 {
        return Err(Error::Configuration(
            "Challenge level must be at least 1".to_string(),
        ));
    }

    if mode.requires_exact_count() && entries.len() != level {
        return Err(Error::Configuration(format!(
            "{} mode requires all games declared up front. \
             Your challenge level is {} but you declared {} games.",
            mode.title_name(),
            level,
            entries.len()
        )));
    }

    let mut caps: Vec<u32> = entries.iter().filter_map(|e| e.max_slot).collect();
    caps.sort_unstable();
    // The i-th smallest cap (0-based) must leave room for i games below it.
    for (i, &cap) in caps.iter().enumerate() {
        if cap as usize <= i {
            return Err(Error::Configuration(
                "Your challenge list contains games with maximum play constraints \
                 that make it impossible to complete."
                    .to_string(),
            ));
        }
    }

    Ok(())
}

/// Swap games downward into empty slots until no swap applies.
///
/// A game moves into the empty slot directly below it when its play count
/// does not exceed the empty slot's 0-based index.
fn shift_games_low(slots: &mut [Slot]) {
    let mut swapping = true;
    while swapping {
        swapping = false;
        for i in 1..slots.len() {
            let empty_index = i - 1;
            let movable = slots[empty_index].is_empty()
                && matches!(&slots[i], Slot::Occupied(game) if game.play_count as usize <= empty_index);
            if movable {
                slots.swap(empty_index, i);
                debug!("Shifted game from slot {} to slot {}", i + 1, i);
                swapping = true;
            }
        }
    }
}

/// Pull capped games back under their caps.
///
/// Caps are walked from 1 upward. Games sitting above cap `m` move into a
/// block that ends at slot `m`. Games capped at `m` or lower that sit inside
/// the block's landing range join the block, which is ordered by cap.
fn enforce_caps(slots: &mut Vec<Slot>) -> Result<()> {
    for cap in 1..=slots.len() {
        let violators = slots
            .iter()
            .enumerate()
            .filter(|(i, slot)| *i >= cap && slot.max_slot() == Some(cap as u32))
            .count();
        if violators == 0 {
            continue;
        }

        let capped_within = |slot: &Slot| slot.max_slot().is_some_and(|m| m as usize <= cap);

        // Grow the block until it holds every capped game in its range.
        let mut count = violators;
        let start = loop {
            let Some(start) = cap.checked_sub(count) else {
                return Err(Error::InternalConsistency(format!(
                    "{} games capped at or below slot {} cannot fit below it: {}",
                    count,
                    cap,
                    describe(slots)
                )));
            };
            let absorbed = slots[start..].iter().filter(|s| capped_within(*s)).count();
            if absorbed == count {
                break start;
            }
            count = absorbed;
        };

        let mut block = Vec::with_capacity(count);
        let mut kept = Vec::with_capacity(slots.len());
        for (index, slot) in slots.drain(..).enumerate() {
            if index >= start && capped_within(&slot) {
                block.push(slot);
            } else {
                kept.push(slot);
            }
        }
        block.sort_by_key(Slot::max_slot);

        debug!(
            "Reinserting {} capped games at slots {}..={} ({} above cap {})",
            block.len(),
            start + 1,
            cap,
            violators,
            cap
        );
        kept.splice(start..start, block);
        *slots = kept;
    }

    Ok(())
}

fn describe(slots: &[Slot]) -> String {
    let parts: Vec<String> = slots
        .iter()
        .map(|slot| match slot {
            Slot::Occupied(game) => match game.max_slot {
                Some(cap) => format!("{}({}, max {})", game.title, game.play_count, cap),
                None => format!("{}({})", game.title, game.play_count),
            },
            Slot::Empty => "-".to_string(),
        })
        .collect();
    format!("[{}]", parts.join(", "))
}
