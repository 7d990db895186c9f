//! Error types for crmlink

use std::time::Duration;
use thiserror::Error;

/// Result type alias for crmlink operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// Coarse classification of failures as seen by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad or missing caller input; no remote call was made
    Validation,
    /// The CRM could not be reached or could not settle a conflict
    Unavailable,
    /// The CRM answered with a rejection other than a conflict
    RemoteRejected,
    /// Local configuration is missing or broken
    Configuration,
    /// Anything else (local I/O, prompts, serialization)
    Internal,
}

impl ErrorKind {
    /// Process exit code used by the binary for this kind of failure.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorKind::Validation => 2,
            ErrorKind::Unavailable => 3,
            ErrorKind::RemoteRejected => 4,
            ErrorKind::Configuration | ErrorKind::Internal => 1,
        }
    }
}

impl Error {
    /// Classify this error for callers.
    ///
    /// Transport and authentication problems count as `Unavailable`; every other
    /// remote status is a `RemoteRejected` pass-through.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Api(api) => api.kind(),
            Error::Resolve(ResolveError::Validation(_)) => ErrorKind::Validation,
            Error::Resolve(ResolveError::Unavailable(_)) => ErrorKind::Unavailable,
            Error::Config(_) => ErrorKind::Configuration,
            Error::Io(_) | Error::Dialoguer(_) | Error::Json(_) => {
                ErrorKind::Internal
            }
        }
    }
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed. Run `crmlink init` to set up your API token.")]
    Unauthorized,

    #[error("Access denied. The API token lacks permission for this resource.")]
    Forbidden,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Rate limit exceeded. Retry after {0:?}")]
    RateLimit(Duration),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Unauthorized
            | ApiError::Forbidden
            | ApiError::RateLimit(_)
            | ApiError::Network(_) => ErrorKind::Unavailable,
            ApiError::NotFound(_)
            | ApiError::Conflict(_)
            | ApiError::BadRequest(_)
            | ApiError::ServerError(_)
            | ApiError::InvalidResponse(_) => ErrorKind::RemoteRejected,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Errors raised by the resolution protocol itself
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("CRM unavailable: {0}")]
    Unavailable(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `crmlink init` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("API token not configured. Run `crmlink init` or set CRMLINK_API_TOKEN.")]
    MissingApiToken,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
