//! Repository listing.

use std::path::PathBuf;

use tracing::{debug, instrument};

use quaylogs_core::{AuthToken, RegistryUrl, RepositoryList, RepositorySummary, Result};
use quaylogs_file::OutputLayout;
use quaylogs_http::HttpRequest;

use crate::paginate::{Endpoint, Paginator};

/// `GET /api/v1/repository`
pub const LIST_REPOSITORIES: &str = "repository";

/// Lists the repositories of a namespace ordered by popularity.
///
/// The listing endpoint does not return a continuation token, so exactly one
/// page is fetched even if the response happens to carry one.
pub struct RepositoryLister<'a> {
    paginator: Paginator<'a>,
    registry: &'a RegistryUrl,
    namespace: &'a str,
    token: &'a AuthToken,
}

impl<'a> RepositoryLister<'a> {
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

    /// Fetch the repository list, in the order the registry returned it.
    #[instrument(skip(self), fields(namespace = %self.namespace))]
    pub async fn list(&self) -> Result<RepositoryList> {
        let fetched = self.paginator.run(self).await?;
        debug!(count = fetched.items.len(), "Listed repositories");
        Ok(RepositoryList {
            repositories: fetched.items,
        })
    }
}

impl Endpoint for RepositoryLister<'_> {
    type Page = RepositoryList;
    type Item = RepositorySummary;

    fn describe(&self) -> String {
        format!("repository list of namespace {}", self.namespace)
    }

    fn request(&self, token: &str) -> HttpRequest {
        HttpRequest::get(self.registry.api_url(LIST_REPOSITORIES))
            .query("popularity", "true")
            .query("namespace", self.namespace)
            .query("next_page", token)
            .bearer(self.token.clone())
    }

    fn page_dir(&self, layout: &OutputLayout) -> Result<PathBuf> {
        layout.listing_dir(self.namespace)
    }

    fn next_token(_page: &RepositoryList) -> Option<String> {
        None
    }

    fn into_items(page: RepositoryList) -> Vec<RepositorySummary> {
        page.repositories
    }

    fn follows_cursor(&self) -> bool {
        false
    }
}
