//! Page persistence trait.

use std::path::Path;

use async_trait::async_trait;

use crate::Result;

/// Destination for raw response pages.
///
/// The fetch loop hands every page body to a sink before decoding it, so
/// what lands on disk is exactly what the registry sent.
#[async_trait]
pub trait PageSink: Send + Sync {
    /// Persist `body` at `path`, replacing any previous content.
    async fn write_page(&self, path: &Path, body: &[u8]) -> Result<()>;
}

#[async_trait]
impl<T: PageSink + ?Sized> PageSink for &T {
    async fn write_page(&self, path: &Path, body: &[u8]) -> Result<()> {
        (**self).write_page(path, body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recording(Mutex<Vec<(PathBuf, Vec<u8>)>>);

    #[async_trait]
    impl PageSink for Recording {
        async fn write_page(&self, path: &Path, body: &[u8]) -> Result<()> {
            self.0
                .lock()
                .unwrap()
                .push((path.to_path_buf(), body.to_vec()));
            Ok(())
        }
    }

    #[tokio::test]
    async fn reference_forwards_to_sink() {
        let sink = Recording::default();
        let by_ref: &dyn PageSink = &sink;
        by_ref
            .write_page(Path::new("a/b-0.json"), b"{}")
            .await
            .unwrap();

        let written = sink.0.lock().unwrap();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].0, PathBuf::from("a/b-0.json"));
        assert_eq!(written[0].1, b"{}");
    }
}
