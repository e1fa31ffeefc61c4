//! Star colors and BoardGameGeek microbadges.

use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// Microbadge markup used in the staircase rows.
pub mod badges {
    pub const BLUE_STAR: &str = "[microbadge=54124]";
    pub const GREEN_STAR: &str = "[microbadge=54126]";
    pub const PINK_STAR: &str = "[microbadge=54122]";
    pub const PURPLE_STAR: &str = "[microbadge=54120]";
    pub const YELLOW_STAR: &str = "[microbadge=54118]";
    pub const EMPTY_STAR: &str = "[microbadge=54116]";

    pub const CHECKED_BOX: &str = "[microbadge=39145]";
    pub const UNCHECKED_BOX: &str = "[microbadge=39144]";

    /// Spacer for right-justified rows
    pub const BLANK: &str = "[microbadge=21088]";

    /// Stars eligible for the random schemes.
    pub const STARS: [&str; 5] = [BLUE_STAR, GREEN_STAR, PINK_STAR, PURPLE_STAR, YELLOW_STAR];
}

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
pub enum ColorScheme {
    #[default]
    #[serde(alias = "gold")]
    #[strum(to_string = "yellow", serialize = "gold")]
    Yellow,
    Blue,
    Green,
    Pink,
    Purple,
    /// Each star a random color, no two consecutive stars alike
    Random,
    /// Each row a random color, no two consecutive rows alike
    RowRandom,
}

impl ColorScheme {
    /// The single star used by fixed-color schemes.
    pub fn fixed_star(&self) -> Option<&'static str> {
        match self {
            Self::Yellow => Some(badges::YELLOW_STAR),
            Self::Blue => Some(badges::BLUE_STAR),
            Self::Green => Some(badges::GREEN_STAR),
            Self::Pink => Some(badges::PINK_STAR),
            Self::Purple => Some(badges::PURPLE_STAR),
            Self::Random | Self::RowRandom => None,
        }
    }
}

/// Random stars where no two neighbours share a color.
pub fn random_star_sequence<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<&'static str> {
    let mut sequence = Vec::with_capacity(len);
    let mut previous: Option<usize> = None;
    for _ in 0..len {
        let index = match previous {
            None => rng.gen_range(0..badges::STARS.len()),
            Some(prev) => (prev + rng.gen_range(1..badges::STARS.len())) % badges::STARS.len(),
        };
        sequence.push(badges::STARS[index]);
        previous = Some(index);
    }
    sequence
}

/// Hands out filled stars row by row.
#[derive(Debug, Clone)]
pub struct StarPainter {
    scheme: ColorScheme,
    sequence: std::vec::IntoIter<&'static str>,
}

impl StarPainter {
    /// `capacity` must cover every star (random) or row (rowrandom) painted.
    pub fn new<R: Rng + ?Sized>(scheme: ColorScheme, capacity: usize, rng: &mut R) -> Self {
        let sequence = match scheme {
            ColorScheme::Random | ColorScheme::RowRandom => random_star_sequence(capacity, rng),
            _ => Vec::new(),
        };
        Self {
            scheme,
            sequence: sequence.into_iter(),
        }
    }

    /// Filled stars for the next row.
    pub fn row(&mut self, filled: usize) -> Vec<&'static str> {
        match self.scheme.fixed_star() {
            Some(star) => vec![star; filled],
            None if self.scheme == ColorScheme::RowRandom => {
                let star = self.sequence.next().unwrap_or(badges::YELLOW_STAR);
                vec![star; filled]
            }
            None => (&mut self.sequence)
                .take(filled)
                .chain(std::iter::repeat(badges::YELLOW_STAR))
                .take(filled)
                .collect(),
        }
    }
}
