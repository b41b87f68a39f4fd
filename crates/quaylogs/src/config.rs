//! Run configuration.

use std::path::Path;
use std::time::Duration;

use quaylogs_core::error::ConfigError;
use quaylogs_core::{AuthToken, RegistryUrl, Result};
use quaylogs_file::{OutputLayout, TimestampStyle};

/// Default directory for downloaded pages.
pub const DEFAULT_OUTPUT_DIR: &str = "./logs";

/// Everything a harvest run needs, threaded read-only through the lister
/// and fetcher.
#[derive(Debug, Clone)]
pub struct HarvestConfig {
    pub registry: RegistryUrl,
    pub namespace: String,
    pub auth_token: AuthToken,
    pub layout: OutputLayout,
    /// Persist repository listing pages under `<base>/<namespace>/`.
    pub write_listing: bool,
    /// Persist log pages under `<base>/<namespace>/<name>/`.
    pub write_logs: bool,
    /// Per-request timeout; `None` keeps the HTTP client default.
    pub timeout: Option<Duration>,
}

impl HarvestConfig {
    /// Configuration for `namespace` against the public registry.
    ///
    /// Log pages are saved under [`DEFAULT_OUTPUT_DIR`]; listing pages are not.
    pub fn new(namespace: impl Into<String>, auth_token: AuthToken) -> Self {
        Self {
            registry: RegistryUrl::default(),
            namespace: namespace.into(),
            auth_token,
            layout: OutputLayout::new(DEFAULT_OUTPUT_DIR),
            write_listing: false,
            write_logs: true,
            timeout: None,
        }
    }

    pub fn with_registry(mut self, registry: RegistryUrl) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.layout = OutputLayout::new(dir).with_style(self.layout.style());
        self
    }

    pub fn with_timestamp_style(mut self, style: TimestampStyle) -> Self {
        self.layout = self.layout.with_style(style);
        self
    }

    pub fn with_write_listing(mut self, write: bool) -> Self {
        self.write_listing = write;
        self
    }

    pub fn with_write_logs(mut self, write: bool) -> Self {
        self.write_logs = write;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reject configurations that cannot possibly succeed.
    pub fn validate(&self) -> Result<()> {
        if self.auth_token.is_empty() {
            return Err(ConfigError::MissingAuthToken.into());
        }
        if self.namespace.trim().is_empty() {
            return Err(ConfigError::MissingNamespace.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quaylogs_core::Error;

    #[test]
    fn defaults_mirror_the_cli() {
        let config = HarvestConfig::new("openebs", AuthToken::new("t"));
        assert_eq!(config.registry.host(), Some("quay.io"));
        assert_eq!(config.layout.base(), Path::new("./logs"));
        assert!(config.write_logs);
        assert!(!config.write_listing);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_token_is_rejected() {
        let err = HarvestConfig::new("openebs", AuthToken::default())
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::MissingAuthToken)));
    }

    #[test]
    fn missing_namespace_is_rejected() {
        let err = HarvestConfig::new(" ", AuthToken::new("t"))
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::MissingNamespace)));
    }

    #[test]
    fn output_dir_keeps_style() {
        let config = HarvestConfig::new("openebs", AuthToken::new("t"))
            .with_timestamp_style(TimestampStyle::Dash)
            .with_output_dir("/tmp/out");
        assert_eq!(config.layout.style(), TimestampStyle::Dash);
        assert_eq!(config.layout.base(), Path::new("/tmp/out"));
    }
}
