//! Repository access-log types.

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Geo/provider details resolved for a log entry's source address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolvedIp {
    pub country_iso_code: Option<String>,
    pub sync_token: Option<String>,
    pub service: Option<String>,
    pub provider: Option<String>,
}

/// Metadata attached to a log entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogMetadata {
    pub repo: Option<String>,
    pub tag: Option<String>,
    pub namespace: Option<String>,
    pub resolved_ip: Option<ResolvedIp>,
}

/// A single access-log record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogEntry {
    pub ip: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub datetime: String,
    #[serde(deserialize_with = "null_as_default")]
    pub metadata: LogMetadata,
}

/// One page of the per-repository logs endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogPage {
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub next_page: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub logs: Vec<LogEntry>,
}

impl LogPage {
    /// The continuation token, if there is another page.
    ///
    /// An absent and an empty `next_page` both end pagination.
    pub fn next_token(&self) -> Option<&str> {
        self.next_page.as_deref().filter(|t| !t.is_empty())
    }
}

/// Every log entry fetched for one repository, in page-fetch order.
///
/// Duplicates across pages are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatedLog {
    pub namespace: String,
    pub name: String,
    /// Number of pages whose entries were merged.
    pub pages: usize,
    pub entries: Vec<LogEntry>,
    /// Status of the response that cut pagination short, if any.
    pub stopped_at_status: Option<u16>,
}

impl AggregatedLog {
    /// Whether every page up to the last continuation token was fetched.
    pub fn is_complete(&self) -> bool {
        self.stopped_at_status.is_none()
    }
}
