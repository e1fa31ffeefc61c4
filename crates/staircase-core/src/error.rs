use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The challenge setup cannot produce a valid staircase.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Cap reinsertion landed outside the staircase despite passing validation.
    #[error("Internal consistency error: {0}")]
    InternalConsistency(String),

    #[error("Config parse error: {0}")]
    ConfigParse(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::ConfigParse(e.to_string())
    }
}

impl Error {
    /// Whether the error stems from user input rather than a bug.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Error::Configuration(_) | Error::ConfigParse(_) | Error::Render(_)
        )
    }
}
