//! The shared fetch-and-persist loop.
//!
//! Both the repository listing and the per-repository logs are "request a
//! page, optionally save it, decode it, follow the continuation token"
//! loops. [`Endpoint`] captures what differs between them; [`Paginator`]
//! runs the loop.

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use quaylogs_core::{Error, PageSink, Result};
use quaylogs_file::OutputLayout;
use quaylogs_http::HttpRequest;

/// What to do with a response whose status is not `200`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusPolicy {
    /// Save and decode the body regardless of status.
    Decode,
    /// Log the status and stop paginating, keeping what was fetched so far.
    EndOnError,
}

/// A paged registry endpoint.
pub trait Endpoint {
    /// Decoded form of one response page.
    type Page: DeserializeOwned;
    /// Items accumulated across pages.
    type Item;

    /// Human readable name of the resource, used in logs and errors.
    fn describe(&self) -> String;

    /// The request for the page identified by `token` (empty for the first).
    fn request(&self, token: &str) -> HttpRequest;

    /// Directory that receives this endpoint's page files.
    fn page_dir(&self, layout: &OutputLayout) -> Result<PathBuf>;

    /// Continuation token carried by `page`, if there is more.
    fn next_token(page: &Self::Page) -> Option<String>;

    /// Move the items out of a decoded page.
    fn into_items(page: Self::Page) -> Vec<Self::Item>;

    fn status_policy(&self) -> StatusPolicy {
        StatusPolicy::Decode
    }

    /// Whether a returned token is honored at all.
    fn follows_cursor(&self) -> bool {
        true
    }
}

/// Items gathered by one pagination run.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    /// Pages whose items were merged.
    pub pages: usize,
    /// Set when a non-200 response ended the run early.
    pub stopped_at_status: Option<u16>,
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            pages: 0,
            stopped_at_status: None,
        }
    }
}

/// Runs [`Endpoint`]s against the registry.
///
/// With a sink every page body is written to
/// `<page_dir>/<stamp>-<index>.json` before it is decoded. The stamp is
/// taken once per run so all files of one run share a prefix.
#[derive(Clone, Copy)]
pub struct Paginator<'a> {
    client: &'a reqwest::Client,
    layout: &'a OutputLayout,
    sink: Option<&'a dyn PageSink>,
}

impl<'a> Paginator<'a> {
    pub fn new(
        client: &'a reqwest::Client,
        layout: &'a OutputLayout,
        sink: Option<&'a dyn PageSink>,
    ) -> Self {
        Self {
            client,
            layout,
            sink,
        }
    }

    /// Fetch pages until the token runs out or the status policy says stop.
    pub async fn run<E: Endpoint>(&self, endpoint: &E) -> Result<Paginated<E::Item>> {
        let what = endpoint.describe();
        let stamp = self.layout.stamp();
        let dir = match self.sink {
            Some(_) => Some(endpoint.page_dir(self.layout)?),
            None => None,
        };

        let mut out = Paginated::default();
        let mut token = String::new();
        let mut index = 0usize;

        loop {
            debug!(resource = %what, page_token = %token, index, "Requesting page");
            let response = endpoint.request(&token).invoke(self.client).await?;

            if !response.is_ok() && endpoint.status_policy() == StatusPolicy::EndOnError {
                warn!(
                    resource = %what,
                    status = response.status,
                    error = response.error_header.as_deref().unwrap_or(""),
                    "Registry returned an error status, keeping pages fetched so far"
                );
                out.stopped_at_status = Some(response.status);
                break;
            }

            if let (Some(sink), Some(dir)) = (self.sink, dir.as_ref()) {
                let path = dir.join(stamp.file_name(index));
                sink.write_page(&path, response.body()).await?;
                info!(resource = %what, path = %path.display(), "Saved page");
            }

            let page: E::Page = serde_json::from_slice(response.body())
                .map_err(|e| Error::decode(what.clone(), e))?;
            let next = E::next_token(&page);
            out.items.extend(E::into_items(page));
            out.pages += 1;
            index += 1;

            match next {
                Some(next) if endpoint.follows_cursor() => token = next,
                _ => break,
            }
        }

        debug!(resource = %what, pages = out.pages, items = out.items.len(), "Pagination done");
        Ok(out)
    }
}

