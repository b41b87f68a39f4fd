//! Page file name prefixes.

use std::fmt;

use chrono::{Local, NaiveDateTime};

/// How the time of an operation is rendered into page file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampStyle {
    /// `Oct-05-2020-14:03:09`
    Colon,
    /// `Oct-05-2020-14-03-09`, for filesystems that reject `:`.
    Dash,
}

impl TimestampStyle {
    fn format(&self) -> &'static str {
        match self {
            TimestampStyle::Colon => "%b-%d-%Y-%H:%M:%S",
            TimestampStyle::Dash => "%b-%d-%Y-%H-%M-%S",
        }
    }
}

impl Default for TimestampStyle {
    fn default() -> Self {
        if cfg!(windows) {
            TimestampStyle::Dash
        } else {
            TimestampStyle::Colon
        }
    }
}

/// Timestamp prefix shared by every page file of one operation.
///
/// Captured once when a listing or log fetch starts; each page then only
/// differs by its index suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageStamp(String);

impl PageStamp {
    /// Stamp for the current local time.
    pub fn now(style: TimestampStyle) -> Self {
        Self::at(Local::now().naive_local(), style)
    }

    /// Stamp for a fixed point in time.
    pub fn at(time: NaiveDateTime, style: TimestampStyle) -> Self {
        Self(time.format(style.format()).to_string())
    }

    /// File name for the page at `index` (zero-based).
    pub fn file_name(&self, index: usize) -> String {
        format!("{}-{}.json", self.0, index)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
