use serde::{Deserialize, Serialize};

/// A game declared for the challenge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEntry {
    /// Display title. Empty means the site's default title for `external_id`.
    #[serde(default)]
    pub title: String,
    /// BoardGameGeek thing id; `None` lists the title without a hyperlink.
    #[serde(default, rename = "id")]
    pub external_id: Option<u32>,
    #[serde(rename = "plays")]
    pub play_count: u32,
    /// Highest 1-based slot this game may occupy.
    #[serde(default, rename = "max_plays")]
    pub max_slot: Option<u32>,
}

impl GameEntry {
    pub fn new(title: impl Into<String>, play_count: u32) -> Self {
        Self {
            title: title.into(),
            play_count,
            ..Self::default()
        }
    }

    pub fn with_id(mut self, external_id: u32) -> Self {
        self.external_id = Some(external_id);
        self
    }

    pub fn with_max_slot(mut self, max_slot: u32) -> Self {
        self.max_slot = Some(max_slot);
        self
    }

    /// Plays that count toward a 1-based slot.
    pub fn credited_plays(&self, slot: usize) -> u32 {
        self.play_count.min(slot.try_into().unwrap_or(u32::MAX))
    }

    /// Whether the game has been played at least `slot` times.
    pub fn satisfies(&self, slot: usize) -> bool {
        self.play_count as usize >= slot
    }

    /// Whether the entry can be named in a post (a title, an id, or both).
    pub fn is_nameable(&self) -> bool {
        !self.title.is_empty() || self.external_id.is_some()
    }
}
