//! Registry API payloads.
//!
//! These mirror the upstream JSON schema. They are decoded, counted and
//! handed around; nothing here interprets the values.

mod log;
mod repository;

use serde::{Deserialize, Deserializer};

pub use log::{AggregatedLog, LogEntry, LogMetadata, LogPage, ResolvedIp};
pub use repository::{RepositoryList, RepositorySummary};

/// Decode an explicit `null` the same as a missing key.
///
/// Container-level `#[serde(default)]` only covers absent keys.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
