use std::time::Duration;

use thiserror::Error;

/// Configuration-related errors with structured variants.
///
/// All of these are fatal at startup; none can occur once the poll loop runs.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("failed to open log file {path}: {source}")]
    LogFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Reasons a review API response could not be turned into a [`FetchResult`].
///
/// [`FetchResult`]: crate::domain::FetchResult
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("malformed response body: {0}")]
    Malformed(String),

    #[error("server reported error `{code}`: {message}")]
    Server { code: String, message: String },

    #[error("response has no `homeworks` field")]
    MissingHomeworks,

    #[error("unexpected HTTP status {0}")]
    Status(u16),
}

/// Failure of a single fetch against the review API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never completed (DNS, connect, reset, timeout).
    #[error("transport error: {0}")]
    Transport(String),

    /// The request completed but the payload is unusable.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),
}

impl FetchError {
    /// Short label used as a structured log field.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Protocol(_) => "protocol",
        }
    }
}

/// A homework record that cannot be rendered into a notification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidRecord {
    #[error("invalid server response: missing `{0}`")]
    MissingField(&'static str),

    #[error("invalid server response: unrecognized status `{0}`")]
    UnknownStatus(String),
}

/// Failure to deliver a message through the messaging service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotifyError {
    #[error("message rejected: {0}")]
    Rejected(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("rate limited: {0}")]
    RateLimited(String),

    #[error("send timed out after {0:?}")]
    Timeout(Duration),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    InvalidRecord(#[from] InvalidRecord),

    #[error(transparent)]
    Notify(#[from] NotifyError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Short label used as a structured log field.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Fetch(e) => e.kind(),
            Self::InvalidRecord(_) => "invalid_record",
            Self::Notify(_) => "notify",
            Self::Io(_) => "io",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
