//! Registry base URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{ConfigError, Error};

/// The public Quay registry.
pub const DEFAULT_REGISTRY: &str = "https://quay.io";

/// Base URL of a registry, e.g. `https://quay.io`.
///
/// # Example
///
/// ```
/// use quaylogs_core::RegistryUrl;
///
/// let registry = RegistryUrl::new("https://quay.io").unwrap();
/// assert_eq!(registry.api_url("repository"), "https://quay.io/api/v1/repository");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RegistryUrl(Url);

impl RegistryUrl {
    /// Parse and check a registry base URL.
    ///
    /// Plain `http` is only accepted for loopback hosts, which keeps mock
    /// registries usable in tests.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let raw = s.as_ref();
        let reject = |reason: &str| -> Error {
            ConfigError::RegistryUrl {
                value: raw.to_string(),
                reason: reason.to_string(),
            }
            .into()
        };

        let url = Url::parse(raw).map_err(|e| reject(&e.to_string()))?;
        if url.cannot_be_a_base() {
            return Err(reject("must be an absolute URL"));
        }

        let Some(host) = url.host_str() else {
            return Err(reject("must have a host"));
        };
        let loopback = matches!(host, "localhost" | "127.0.0.1" | "[::1]");
        match url.scheme() {
            "https" => {}
            "http" if loopback => {}
            _ => return Err(reject("must use https (http only for loopback hosts)")),
        }

        Ok(Self(url))
    }

    /// Returns the URL of an `/api/v1/` endpoint.
    ///
    /// `path` may contain `{placeholder}` segments; they are left for the
    /// request executor to substitute.
    pub fn api_url(&self, path: &str) -> String {
        let base = self.0.as_str().trim_end_matches('/');
        format!("{}/api/v1/{}", base, path.trim_start_matches('/'))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }
}

impl Default for RegistryUrl {
    fn default() -> Self {
        Self(Url::parse(DEFAULT_REGISTRY).expect("default registry URL is valid"))
    }
}

impl fmt::Display for RegistryUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl FromStr for RegistryUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for RegistryUrl {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<RegistryUrl> for String {
    fn from(url: RegistryUrl) -> Self {
        url.0.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_quay() {
        assert_eq!(RegistryUrl::default().host(), Some("quay.io"));
    }

    #[test]
    fn valid_localhost_http() {
        let registry = RegistryUrl::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(
            registry.api_url("repository"),
            "http://127.0.0.1:8080/api/v1/repository"
        );
    }

    #[test]
    fn normalizes_trailing_slash() {
        let registry = RegistryUrl::new("https://quay.io/").unwrap();
        assert_eq!(
            registry.api_url("/repository/{namespace}/{name}/logs"),
            "https://quay.io/api/v1/repository/{namespace}/{name}/logs"
        );
    }

    #[test]
    fn invalid_http_non_localhost() {
        let err = RegistryUrl::new("http://quay.io").unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::RegistryUrl { .. })));
    }

    #[test]
    fn serde_goes_through_validation() {
        let registry: RegistryUrl = serde_json::from_str("\"https://quay.io\"").unwrap();
        assert_eq!(serde_json::to_string(&registry).unwrap(), "\"https://quay.io/\"");
        assert!(serde_json::from_str::<RegistryUrl>("\"ftp://quay.io\"").is_err());
    }

    #[test]
    fn invalid_relative_url() {
        assert!(RegistryUrl::new("/api/v1/repository").is_err());
    }
}
