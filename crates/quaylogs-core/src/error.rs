//! Error types for the quay-logs toolkit.
//!
//! This module provides a unified error type with explicit variants for
//! configuration, transport, decoding and filesystem failures. Every
//! variant carries the identifier (URL, path, repository) of the
//! operation that failed.

use std::path::PathBuf;
use thiserror::Error;

/// The unified error type for quay-logs operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or invalid configuration, detected before any network activity.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The request executor only speaks GET and POST.
    #[error("unsupported http method {0:?}")]
    UnsupportedMethod(String),

    /// The request could not be sent or the response could not be received.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: TransportError,
    },

    /// A response body was not the JSON we expected.
    #[error("failed to decode {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// A page could not be written to disk.
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input that cannot be used safely (e.g. as a path segment).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// An operation scoped to one repository failed.
    #[error("repository {namespace}/{name}: {source}")]
    Repository {
        namespace: String,
        name: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Wrap this error with the repository it occurred for.
    pub fn for_repository(self, namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Error::Repository {
            namespace: namespace.into(),
            name: name.into(),
            source: Box::new(self),
        }
    }

    /// Build a decode error with a human readable context.
    pub fn decode(context: impl Into<String>, source: serde_json::Error) -> Self {
        Error::Decode {
            context: context.into(),
            source,
        }
    }

    /// Build an IO error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed (DNS, refused, TLS handshake).
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No auth token was given on the command line or in the environment.
    #[error("missing quay auth token")]
    MissingAuthToken,

    /// No namespace was given on the command line or in the environment.
    #[error("missing quay namespace")]
    MissingNamespace,

    /// The registry base URL is unusable.
    #[error("invalid registry URL '{value}': {reason}")]
    RegistryUrl { value: String, reason: String },

    /// The HTTP client could not be constructed (e.g. TLS backend failure).
    #[error("failed to build HTTP client: {message}")]
    HttpClient { message: String },
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// A name that would escape or corrupt the output directory tree.
    #[error("invalid path segment '{value}': {reason}")]
    PathSegment { value: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_names_url() {
        let err = Error::Transport {
            url: "https://quay.io/api/v1/repository".to_string(),
            source: TransportError::Timeout,
        };
        let msg = err.to_string();
        assert!(msg.contains("https://quay.io/api/v1/repository"));
        assert!(msg.contains("timed out"));
    }

    #[test]
    fn repository_wrapper_keeps_source() {
        let inner = Error::io("logs/library/alpine/x-0.json", std::io::Error::other("disk full"));
        let err = inner.for_repository("library", "alpine");

        assert_eq!(
            err.to_string(),
            "repository library/alpine: failed to write logs/library/alpine/x-0.json: disk full"
        );
        let source = std::error::Error::source(&err).unwrap();
        assert!(source.to_string().contains("disk full"));
    }

    #[test]
    fn unsupported_method_is_quoted() {
        let err = Error::UnsupportedMethod("put".to_string());
        assert_eq!(err.to_string(), "unsupported http method \"put\"");
    }
}
