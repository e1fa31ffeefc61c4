use serde::Serialize;

use super::GameEntry;

/// One position in the staircase.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "kind", content = "game", rename_all = "lowercase")]
pub enum Slot {
    Occupied(GameEntry),
    #[default]
    Empty,
}

impl Slot {
    pub fn entry(&self) -> Option<&GameEntry> {
        match self {
            Self::Occupied(entry) => Some(entry),
            Self::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Play count of the occupant, 0 for an empty slot.
    pub fn play_count(&self) -> u32 {
        self.entry().map_or(0, |entry| entry.play_count)
    }

    pub fn max_slot(&self) -> Option<u32> {
        self.entry().and_then(|entry| entry.max_slot)
    }
}

impl From<GameEntry> for Slot {
    fn from(entry: GameEntry) -> Self {
        Self::Occupied(entry)
    }
}

impl From<Option<GameEntry>> for Slot {
    fn from(entry: Option<GameEntry>) -> Self {
        entry.map_or(Self::Empty, Self::Occupied)
    }
}

/// Ordered staircase slots, index 0 holding slot 1.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Arrangement {
    slots: Vec<Slot>,
}

impl Arrangement {
    pub fn new(slots: Vec<Slot>) -> Self {
        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Iterate as `(slot_number, slot)` with 1-based numbers.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &Slot)> {
        self.slots.iter().enumerate().map(|(i, slot)| (i + 1, slot))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slot> {
        self.slots.iter()
    }
}

impl<'a> IntoIterator for &'a Arrangement {
    type Item = &'a Slot;
    type IntoIter = std::slice::Iter<'a, Slot>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}
