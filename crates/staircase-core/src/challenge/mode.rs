use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// Challenge mode chosen in the challenge post.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Mode {
    #[default]
    Casual,
    Intermediate,
    Hardcore,
    Antithetical,
}

impl Mode {
    /// Modes where every game must be declared up front.
    pub fn requires_exact_count(&self) -> bool {
        matches!(self, Self::Hardcore | Self::Antithetical)
    }

    /// Antithetical keeps the declared order; all other modes sort by plays.
    pub fn sorts_by_plays(&self) -> bool {
        !matches!(self, Self::Antithetical)
    }

    /// Capitalized name for post headings (e.g., "Casual")
    pub fn title_name(&self) -> &'static str {
        match self {
            Self::Casual => "Casual",
            Self::Intermediate => "Intermediate",
            Self::Hardcore => "Hardcore",
            Self::Antithetical => "Antithetical",
        }
    }
}
