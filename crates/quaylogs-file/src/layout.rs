//! Output directory layout.
//!
//! ```text
//! <base>/<namespace>/<stamp>-<index>.json          listing pages
//! <base>/<namespace>/<name>/<stamp>-<index>.json   per-repository log pages
//! ```

use std::path::{Path, PathBuf};

use quaylogs_core::Result;
use quaylogs_core::error::InvalidInputError;

use crate::stamp::{PageStamp, TimestampStyle};

/// Where downloaded pages go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    base: PathBuf,
    style: TimestampStyle,
}

impl OutputLayout {
    /// Create a layout rooted at `base` with the platform timestamp style.
    pub fn new(base: impl AsRef<Path>) -> Self {
        Self {
            base: base.as_ref().to_path_buf(),
            style: TimestampStyle::default(),
        }
    }

    pub fn with_style(mut self, style: TimestampStyle) -> Self {
        self.style = style;
        self
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn style(&self) -> TimestampStyle {
        self.style
    }

    /// A fresh stamp for an operation starting now.
    pub fn stamp(&self) -> PageStamp {
        PageStamp::now(self.style)
    }

    /// Directory holding the repository listing pages of a namespace.
    pub fn listing_dir(&self, namespace: &str) -> Result<PathBuf> {
        Ok(self.base.join(segment(namespace)?))
    }

    /// Directory holding the log pages of one repository.
    pub fn logs_dir(&self, namespace: &str, name: &str) -> Result<PathBuf> {
        Ok(self.base.join(segment(namespace)?).join(segment(name)?))
    }
}

/// Names come from the registry and end up as directory names.
fn segment(value: &str) -> Result<&str> {
    let reason = if value.is_empty() {
        Some("must not be empty")
    } else if value == "." || value == ".." {
        Some("must not be a relative directory reference")
    } else if value.contains(['/', '\\', '\0']) {
        Some("must not contain path separators")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(InvalidInputError::PathSegment {
            value: value.to_string(),
            reason: reason.to_string(),
        }
        .into()),
        None => Ok(value),
    }
}
