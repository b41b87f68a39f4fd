//! Shared reqwest client construction.

use std::time::Duration;

use quaylogs_core::Result;
use quaylogs_core::error::{ConfigError, TransportError};

/// User agent sent with every registry request.
pub const USER_AGENT: &str = concat!("quay-logs/", env!("CARGO_PKG_VERSION"));

/// Build the HTTP client used for a whole run.
///
/// Without a timeout the reqwest default applies.
pub fn build_client(timeout: Option<Duration>) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    builder.build().map_err(|e| {
        ConfigError::HttpClient {
            message: e.to_string(),
        }
        .into()
    })
}

/// Classify a reqwest failure.
pub(crate) fn transport_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        assert!(build_client(None).is_ok());
        assert!(build_client(Some(Duration::from_secs(30))).is_ok());
    }

    #[test]
    fn user_agent_carries_version() {
        assert!(USER_AGENT.starts_with("quay-logs/"));
    }
}
