use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::defaults;
use crate::arrange::arrange;
use crate::challenge::{Arrangement, GameEntry, Mode};
use crate::error::Result;
use crate::export::ColorScheme;

/// Everything needed to arrange and render one staircase post.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChallengeConfig {
    pub challenge: ChallengeSettings,
    pub display: DisplaySettings,
    pub profile: ProfileSettings,
    pub games: Vec<GameEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChallengeSettings {
    pub level: usize,
    pub mode: Mode,
    pub shift_low: bool,
}

impl Default for ChallengeSettings {
    fn default() -> Self {
        Self {
            level: defaults::LEVEL,
            mode: Mode::default(),
            shift_low: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplaySettings {
    pub justify_right: bool,
    pub color_scheme: ColorScheme,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProfileSettings {
    pub user_name: Option<String>,
    /// Start of the logged-plays window (`YYYY-MM-DD`)
    pub start_date: Option<NaiveDate>,
}

impl ChallengeConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        info!(
            "Loaded {} games for Staircase-{} from {}",
            config.games.len(),
            config.challenge.level,
            path.display()
        );
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Arrange the configured games for the configured challenge.
    pub fn arrange(&self) -> Result<Arrangement> {
        arrange(
            &self.games,
            self.challenge.level,
            self.challenge.mode,
            self.challenge.shift_low,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Write;

    #[test]
    fn test_parse_full_config() {
        let content = r#"
[challenge]
level = 3
mode = "antithetical"
shift_low = true

[display]
justify_right = true
color_scheme = "gold"

[profile]
user_name = "meeple fan"
start_date = "2022-06-26"

[[games]]
title = "Morels"
id = 122298
plays = 2
max_plays = 2

[[games]]
plays = 1
id = 36218
"#;
        let config = ChallengeConfig::parse(content).unwrap();
        assert_eq!(config.challenge.level, 3);
        assert_eq!(config.challenge.mode, Mode::Antithetical);
        assert!(config.challenge.shift_low);
        assert!(config.display.justify_right);
        assert_eq!(config.display.color_scheme, ColorScheme::Yellow);
        assert_eq!(config.profile.user_name.as_deref(), Some("meeple fan"));
        assert_eq!(
            config.profile.start_date,
            NaiveDate::from_ymd_opt(2022, 6, 26)
        );
        assert_eq!(
            config.games[0],
            GameEntry::new("Morels", 2).with_id(122298).with_max_slot(2)
        );
        assert_eq!(config.games[1], GameEntry::new("", 1).with_id(36218));
    }

    #[test]
    fn test_defaults_for_missing_sections() {
        let config = ChallengeConfig::parse("").unwrap();
        assert_eq!(config.challenge.level, 10);
        assert_eq!(config.challenge.mode, Mode::Casual);
        assert!(!config.display.justify_right);
        assert!(config.profile.user_name.is_none());
        assert!(config.games.is_empty());
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let err = ChallengeConfig::parse("[challenge]\nmode = \"nightmare\"\n").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn test_missing_plays_rejected() {
        let err = ChallengeConfig::parse("[[games]]\ntitle = \"Azul\"\n").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn test_misspelled_field_rejected() {
        let err = ChallengeConfig::parse("[challenge]\nlevl = 4\n").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[challenge]\nlevel = 2\n\n[[games]]\ntitle = \"Azul\"\nplays = 1").unwrap();

        let config = ChallengeConfig::load(file.path()).unwrap();
        let arrangement = config.arrange().unwrap();
        assert_eq!(arrangement.len(), 2);
        assert!(arrangement.slots()[0].is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ChallengeConfig::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
