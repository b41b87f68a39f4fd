//! quaylogs-core - Core types and traits for the registry log harvester.

pub mod error;
pub mod model;
pub mod tokens;
pub mod traits;
pub mod types;

pub use error::Error;
pub use model::{
    AggregatedLog, LogEntry, LogMetadata, LogPage, RepositoryList, RepositorySummary, ResolvedIp,
};
pub use tokens::AuthToken;
pub use traits::PageSink;
pub use types::{DEFAULT_REGISTRY, RegistryUrl};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
