//! quaylogs - Registry access-log harvester.
//!
//! Lists the repositories of a namespace in popularity order, then walks the
//! paginated access logs of each one, optionally saving every raw response
//! page under an output directory.
//!
//! # Example
//!
//! ```no_run
//! use quaylogs::{AuthToken, HarvestConfig, Harvester};
//!
//! # async fn example() -> Result<(), quaylogs::Error> {
//! let config = HarvestConfig::new("openebs", AuthToken::new("token"))
//!     .with_output_dir("./logs");
//! let harvester = Harvester::new(config)?;
//!
//! let report = harvester.run().await?;
//! for repo in &report.repositories {
//!     println!("{}: {} entries in {} pages", repo.name, repo.entries, repo.pages);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod fetcher;
pub mod harvest;
pub mod lister;
pub mod paginate;

pub use config::HarvestConfig;
pub use fetcher::LogFetcher;
pub use harvest::{HarvestReport, Harvester, RepositoryReport};
pub use lister::RepositoryLister;
pub use paginate::{Endpoint, Paginated, Paginator, StatusPolicy};

// Re-export primary types at crate root for convenience
pub use quaylogs_core::{
    AggregatedLog, AuthToken, DEFAULT_REGISTRY, Error, LogEntry, LogPage, PageSink, RegistryUrl,
    RepositoryList, RepositorySummary, Result,
};
pub use quaylogs_file::{OutputLayout, PageWriter, TimestampStyle, list_json_files};
