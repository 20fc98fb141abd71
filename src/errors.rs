//! Error types for the data-source boundary and configuration loading.
//!
//! The derivation algorithms (ranking, flattening, label resolution, the set
//! codec) never fail; they degrade to partial or empty results. Errors only
//! exist where the crate talks to the outside world.

/// Errors surfaced by a data-source request.
#[derive(Debug, thiserror::Error)]
pub enum DataSourceError {
    /// The request could not be sent or the connection failed.
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// The service answered with a non-success status code.
    #[error("GET {url} -> {status}")]
    Status { url: String, status: u16 },

    /// The response body was not the expected JSON shape.
    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// A record referenced another resource that is missing or unusable.
    #[error("missing resource reference: {0}")]
    MissingReference(String),

    /// The requested name or id is not known to the source.
    #[error("not found: {0}")]
    NotFound(String),
}

/// Errors raised while loading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable was present but could not be parsed.
    #[error("invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Errors related to team roster edits
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TeamError {
    /// The roster already holds the maximum number of sets
    #[error("team is full ({0} sets)")]
    Full(usize),
}

/// Type alias for Results using DataSourceError
pub type DataSourceResult<T> = Result<T, DataSourceError>;

/// Type alias for Results using ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
