//! Challenge configuration.
//!
//! This module contains the types read from the challenge TOML file:
//! - `ChallengeConfig` - the whole file
//! - `ChallengeSettings` - level, mode, and low shifting
//! - `DisplaySettings` - layout and star colors for the post
//! - `ProfileSettings` - BoardGameGeek user name and logging window
//! - `SAMPLE_CONFIG` - starter file written by `staircase init`

mod challenge;
mod sample;

pub use challenge::*;
pub use sample::SAMPLE_CONFIG;

/// Configuration defaults.
pub mod defaults {
    /// Default config file name.
    pub const CONFIG_FILE: &str = "staircase.toml";

    /// Default challenge level.
    pub const LEVEL: usize = 10;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        assert_eq!(defaults::CONFIG_FILE, "staircase.toml");
        assert_eq!(defaults::LEVEL, 10);
    }

    #[test]
    fn test_sample_config_parses() {
        let config = ChallengeConfig::parse(SAMPLE_CONFIG).unwrap();
        assert_eq!(config.challenge.level, 10);
        assert_eq!(config.games.len(), 7);
        assert!(config.arrange().is_ok());
    }
}
