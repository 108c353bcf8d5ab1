//! Error types for Customer List
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

/// Main error type for the application
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// Configured records endpoint is not a valid URL
    #[snafu(display("Invalid endpoint {endpoint:?}: {message}"))]
    InvalidEndpoint { endpoint: String, message: String },

    /// HTTP transport failure (connect, send, read body)
    #[snafu(display("Request failed: {source}"))]
    Request { source: reqwest::Error },

    /// Endpoint answered with a non-success status
    #[snafu(display("Unexpected HTTP status {status}"))]
    Status { status: u16 },

    /// Response body is not a customer array
    #[snafu(display("Failed to decode customers: {source}"))]
    Decode { source: serde_json::Error },

    /// IO error (file operations)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
