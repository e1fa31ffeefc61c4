//! Common CLI utility functions shared across commands.

use std::path::Path;

use anyhow::{Context, Result};
use staircase_core::ChallengeConfig;

/// Exit status for bad config, bad input or a refused command.
pub const EXIT_FAILURE: u8 = 1;
/// Exit status for I/O, serialization and arranger consistency failures.
pub const EXIT_SYSTEM_ERROR: u8 = 2;

/// Load the challenge config, naming the file on failure.
pub fn load_config(path: &Path) -> Result<ChallengeConfig> {
    ChallengeConfig::load(path)
        .with_context(|| format!("Failed to load config from {}", path.display()))
}

/// Pick the process exit status from the first core error in the chain.
pub fn exit_status(err: &anyhow::Error) -> u8 {
    let core_error = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<staircase_core::Error>());
    match core_error {
        Some(core_error) if !core_error.is_user_error() => EXIT_SYSTEM_ERROR,
        _ => EXIT_FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{anyhow, bail};
    use staircase_core::Error;

    fn load_missing() -> Result<()> {
        load_config(Path::new("does/not/exist.toml"))?;
        Ok(())
    }

    #[test]
    fn test_exit_status_for_user_errors() {
        let err = anyhow::Error::from(Error::Configuration("level must be positive".into()))
            .context("Failed to arrange staircase");
        assert_eq!(exit_status(&err), EXIT_FAILURE);

        let err = anyhow::Error::from(Error::ConfigParse("bad toml".into()));
        assert_eq!(exit_status(&err), EXIT_FAILURE);
    }

    #[test]
    fn test_exit_status_for_system_errors() {
        let err = anyhow::Error::from(Error::InternalConsistency("negative index".into()));
        assert_eq!(exit_status(&err), EXIT_SYSTEM_ERROR);

        // Missing file surfaces as Io under the load context.
        let err = load_missing().unwrap_err();
        assert_eq!(exit_status(&err), EXIT_SYSTEM_ERROR);
    }

    #[test]
    fn test_exit_status_without_core_error() {
        let err = anyhow!("plain failure");
        assert_eq!(exit_status(&err), EXIT_FAILURE);

        let bailed = (|| -> Result<()> { bail!("already exists") })().unwrap_err();
        assert_eq!(exit_status(&bailed), EXIT_FAILURE);
    }
}
