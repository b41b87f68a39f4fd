//! Namespace-wide harvest.

use tracing::{info, instrument};

use quaylogs_core::{AggregatedLog, PageSink, RepositoryList, Result};
use quaylogs_file::PageWriter;
use quaylogs_http::build_client;

use crate::config::HarvestConfig;
use crate::fetcher::LogFetcher;
use crate::lister::RepositoryLister;
use crate::paginate::Paginator;

/// Outcome for one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryReport {
    pub name: String,
    pub pages: usize,
    pub entries: usize,
    /// Set when an error status ended the repository's pagination early.
    pub stopped_at_status: Option<u16>,
}

impl From<&AggregatedLog> for RepositoryReport {
    fn from(log: &AggregatedLog) -> Self {
        Self {
            name: log.name.clone(),
            pages: log.pages,
            entries: log.entries.len(),
            stopped_at_status: log.stopped_at_status,
        }
    }
}

/// What a harvest run fetched, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HarvestReport {
    pub namespace: String,
    pub repositories: Vec<RepositoryReport>,
}

impl HarvestReport {
    pub fn total_entries(&self) -> usize {
        self.repositories.iter().map(|r| r.entries).sum()
    }

    pub fn total_pages(&self) -> usize {
        self.repositories.iter().map(|r| r.pages).sum()
    }

    /// Repositories whose logs were cut short by an error status.
    pub fn incomplete(&self) -> impl Iterator<Item = &RepositoryReport> {
        self.repositories
            .iter()
            .filter(|r| r.stopped_at_status.is_some())
    }
}

/// Lists a namespace and downloads the logs of every repository in it.
///
/// Repositories are processed one at a time, in listing order. Any error,
/// from the listing or from a single repository, aborts the run.
pub struct Harvester<S = PageWriter> {
    client: reqwest::Client,
    config: HarvestConfig,
    sink: S,
}

impl Harvester<PageWriter> {
    /// Harvester that writes pages to the local filesystem.
    pub fn new(config: HarvestConfig) -> Result<Self> {
        Self::with_sink(config, PageWriter::new())
    }
}

impl<S: PageSink> Harvester<S> {
    /// Harvester that hands pages to `sink`.
    ///
    /// Fails on invalid configuration before any request is made.
    pub fn with_sink(config: HarvestConfig, sink: S) -> Result<Self> {
        config.validate()?;
        let client = build_client(config.timeout)?;
        Ok(Self {
            client,
            config,
            sink,
        })
    }

    fn paginator(&self, write: bool) -> Paginator<'_> {
        let sink: Option<&dyn PageSink> = if write { Some(&self.sink) } else { None };
        Paginator::new(&self.client, &self.config.layout, sink)
    }

    pub fn lister(&self) -> RepositoryLister<'_> {
        RepositoryLister::new(
            self.paginator(self.config.write_listing),
            &self.config.registry,
            &self.config.namespace,
            &self.config.auth_token,
        )
    }

    pub fn fetcher(&self) -> LogFetcher<'_> {
        LogFetcher::new(
            self.paginator(self.config.write_logs),
            &self.config.registry,
            &self.config.namespace,
            &self.config.auth_token,
        )
    }

    /// List the namespace's repositories by popularity.
    pub async fn list_repositories(&self) -> Result<RepositoryList> {
        self.lister().list().await
    }

    /// Download every log page of one repository.
    pub async fn fetch_logs(&self, name: &str) -> Result<AggregatedLog> {
        self.fetcher().fetch(name).await
    }

    /// List the namespace, then fetch logs for each repository in order.
    #[instrument(skip(self), fields(namespace = %self.config.namespace))]
    pub async fn run(&self) -> Result<HarvestReport> {
        info!("Will list all repos");
        let repositories = self.list_repositories().await?;

        info!(count = repositories.len(), "Will download logs of all repos");
        let names: Vec<String> = repositories.into_iter().map(|r| r.name).collect();
        self.harvest(names).await
    }

    /// Fetch logs for the named repositories only, skipping the listing.
    #[instrument(skip(self), fields(namespace = %self.config.namespace))]
    pub async fn run_for(&self, names: &[String]) -> Result<HarvestReport> {
        self.harvest(names.to_vec()).await
    }

    async fn harvest(&self, names: Vec<String>) -> Result<HarvestReport> {
        let fetcher = self.fetcher();
        let mut report = HarvestReport {
            namespace: self.config.namespace.clone(),
            repositories: Vec::with_capacity(names.len()),
        };

        for name in &names {
            let log = fetcher.fetch(name).await?;
            report.repositories.push(RepositoryReport::from(&log));
        }

        info!(
            repositories = report.repositories.len(),
            entries = report.total_entries(),
            incomplete = report.incomplete().count(),
            "Harvest complete"
        );
        Ok(report)
    }
}
