//! Per-repository log download.

use std::path::PathBuf;

use tracing::{info, instrument};

use quaylogs_core::{AggregatedLog, AuthToken, LogEntry, LogPage, RegistryUrl, Result};
use quaylogs_file::OutputLayout;
use quaylogs_http::HttpRequest;

use crate::paginate::{Endpoint, Paginator, StatusPolicy};

/// `GET /api/v1/repository/{namespace}/{name}/logs`
pub const REPOSITORY_LOGS: &str = "repository/{namespace}/{name}/logs";

/// Downloads every page of access logs for repositories of one namespace.
///
/// A non-200 response ends pagination for that repository without an
/// error: whatever was fetched before it is returned.
pub struct LogFetcher<'a> {
    paginator: Paginator<'a>,
    registry: &'a RegistryUrl,
    namespace: &'a str,
    token: &'a AuthToken,
}

impl<'a> LogFetcher<'a> {
    pub fn new(
        paginator: Paginator<'a>,
        registry: &'a RegistryUrl,
        namespace: &'a str,
        token: &'a AuthToken,
    ) -> Self {
        Self {
            paginator,
            registry,
            namespace,
            token,
        }
    }

    /// Fetch all log pages of repository `name`.
    #[instrument(skip(self), fields(namespace = %self.namespace))]
    pub async fn fetch(&self, name: &str) -> Result<AggregatedLog> {
        let endpoint = RepositoryLogs {
            fetcher: self,
            name,
        };

        let fetched = self
            .paginator
            .run(&endpoint)
            .await
            .map_err(|e| e.for_repository(self.namespace, name))?;

        info!(
            repository = name,
            pages = fetched.pages,
            entries = fetched.items.len(),
            stopped_at_status = fetched.stopped_at_status,
            "Downloaded repository logs"
        );

        Ok(AggregatedLog {
            namespace: self.namespace.to_string(),
            name: name.to_string(),
            pages: fetched.pages,
            entries: fetched.items,
            stopped_at_status: fetched.stopped_at_status,
        })
    }
}

/// The logs endpoint of a single repository.
struct RepositoryLogs<'f, 'a> {
    fetcher: &'f LogFetcher<'a>,
    name: &'f str,
}

impl Endpoint for RepositoryLogs<'_, '_> {
    type Page = LogPage;
    type Item = LogEntry;

    fn describe(&self) -> String {
        format!("logs of {}/{}", self.fetcher.namespace, self.name)
    }

    fn request(&self, token: &str) -> HttpRequest {
        HttpRequest::get(self.fetcher.registry.api_url(REPOSITORY_LOGS))
            .path_param("namespace", self.fetcher.namespace)
            .path_param("name", self.name)
            .query("next_page", token)
            .bearer(self.fetcher.token.clone())
    }

    fn page_dir(&self, layout: &OutputLayout) -> Result<PathBuf> {
        layout.logs_dir(self.fetcher.namespace, self.name)
    }

    fn next_token(page: &LogPage) -> Option<String> {
        page.next_token().map(str::to_string)
    }

    fn into_items(page: LogPage) -> Vec<LogEntry> {
        page.logs
    }

    fn status_policy(&self) -> StatusPolicy {
        StatusPolicy::EndOnError
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_targets_repository_logs() {
        let client = reqwest::Client::new();
        let layout = OutputLayout::new("./logs");
        let registry = RegistryUrl::default();
        let token = AuthToken::new("t");
        let fetcher = LogFetcher::new(
            Paginator::new(&client, &layout, None),
            &registry,
            "library",
            &token,
        );
        let endpoint = RepositoryLogs {
            fetcher: &fetcher,
            name: "alpine",
        };

        let req = endpoint.request("tok");
        assert_eq!(
            req.resolved_url(),
            "https://quay.io/api/v1/repository/library/alpine/logs"
        );
        assert_eq!(
            req.query_params,
            vec![("next_page".to_string(), "tok".to_string())]
        );
        assert_eq!(
            endpoint.page_dir(&layout).unwrap(),
            PathBuf::from("./logs/library/alpine")
        );
        assert_eq!(endpoint.status_policy(), StatusPolicy::EndOnError);
    }
}
