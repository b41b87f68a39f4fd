//! Page writer.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, instrument};

use quaylogs_core::{Error, PageSink, Result};

/// Writes raw response pages to disk.
///
/// Parent directories are created on demand and existing files are
/// truncated. Writes are not atomic: a crash mid-write leaves a partial
/// file behind.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageWriter;

impl PageWriter {
    pub fn new() -> Self {
        Self
    }

    /// Create `dir` and any missing parents. Succeeds if it already exists.
    pub async fn ensure_dir(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)
            .await
            .map_err(|e| Error::io(dir, e))
    }
}

#[async_trait]
impl PageSink for PageWriter {
    #[instrument(skip(self, body), fields(bytes = body.len()))]
    async fn write_page(&self, path: &Path, body: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            self.ensure_dir(parent).await?;
        }

        fs::write(path, body).await.map_err(|e| Error::io(path, e))?;

        debug!(path = %path.display(), "Wrote page");
        Ok(())
    }
}

/// List the `.json` page files directly inside `dir`, sorted by name.
///
/// Subdirectories are skipped, so on a namespace directory this returns the
/// listing pages without the per-repository log pages.
pub async fn list_json_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir).await.map_err(|e| Error::io(dir, e))?;

    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(|e| Error::io(dir, e))? {
        let path = entry.path();
        let file_type = entry.file_type().await.map_err(|e| Error::io(&path, e))?;
        if file_type.is_dir() {
            continue;
        }
        if path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();

    debug!(dir = %dir.display(), count = files.len(), "Found json files");
    Ok(files)
}
