use thiserror::Error;

/// Errors raised when parsing view parameters from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid field '{value}', expected one of date, open, high, low, close, volume")]
    InvalidField { value: String },
    #[error("invalid sort direction '{value}', expected asc or desc")]
    InvalidDirection { value: String },
}

/// Coarse classification of a [`FetchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    Configuration,
    Transport,
    UpstreamStatus,
    UnexpectedShape,
}

/// Failures produced while fetching and normalizing a daily series.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Raised before any request is built.
    #[error("{0}")]
    Configuration(String),

    #[error("{0}")]
    Transport(String),

    #[error("API request failed: {status}")]
    UpstreamStatus { status: u16 },

    /// Covers non-JSON bodies, a missing time-series object, and malformed
    /// entries. Provider rate-limit notices land here too.
    #[error("{0}")]
    UnexpectedShape(String),
}

impl FetchError {
    pub fn missing_api_key() -> Self {
        Self::Configuration(String::from("Missing Alpha Vantage API key"))
    }

    pub const fn kind(&self) -> FetchErrorKind {
        match self {
            Self::Configuration(_) => FetchErrorKind::Configuration,
            Self::Transport(_) => FetchErrorKind::Transport,
            Self::UpstreamStatus { .. } => FetchErrorKind::UpstreamStatus,
            Self::UnexpectedShape(_) => FetchErrorKind::UnexpectedShape,
        }
    }
}
