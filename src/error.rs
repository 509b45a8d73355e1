//! Error taxonomy shared by the time widgets.
//!
//! Every failure is local to the widget operation that produced it; nothing
//! here is fatal to the application.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TimeToolsError>;

#[derive(Debug, Error)]
pub enum TimeToolsError {
    /// Malformed user-entered duration or timestamp.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The formatting service does not know this zone identifier.
    #[error("unknown time zone '{0}'")]
    UnknownZone(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("bad response: {0}")]
    BadResponse(String),
}

impl TimeToolsError {
    pub fn invalid_input(details: impl Into<String>) -> Self {
        Self::InvalidInput(details.into())
    }
}
