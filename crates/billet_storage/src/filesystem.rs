//! Filesystem-based artifact storage.

use crate::naming::artifact_file_name;
use async_trait::async_trait;
use billet_core::StoredImage;
use billet_error::{BilletResult, StorageError, StorageErrorKind};
use billet_interface::ArtifactStore;
use chrono::{Duration, Utc};
use std::path::PathBuf;

/// Filesystem storage backend for generated images.
///
/// Stores artifacts flat under a base directory with deterministic
/// timestamp-plus-slug names, and returns `file://` URLs carrying an expiry.
/// The expiry mirrors a signed object-store URL: local files do not actually
/// vanish, but callers treat the handle as dead once it lapses.
///
/// # Features
///
/// - **Deterministic names**: timestamp + sanitized slug of the prompt
/// - **Atomic writes**: temp file + rename
pub struct FileSystemArtifactStore {
    base_path: PathBuf,
    url_ttl: Duration,
}

impl FileSystemArtifactStore {
    /// Create a filesystem store rooted at `base_path`.
    ///
    /// Creates the directory if it does not exist. Retrieval URLs default to
    /// a 60 minute lifetime.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created or accessed.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>) -> BilletResult<Self> {
        let base_path = base_path.into();

        std::fs::create_dir_all(&base_path).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                base_path.display(),
                e
            )))
        })?;

        tracing::info!(path = %base_path.display(), "Created filesystem artifact store");
        Ok(Self {
            base_path,
            url_ttl: Duration::minutes(60),
        })
    }

    /// Same store with a different retrieval-URL lifetime.
    pub fn with_url_ttl(mut self, ttl: Duration) -> Self {
        self.url_ttl = ttl;
        self
    }
}

#[async_trait]
impl ArtifactStore for FileSystemArtifactStore {
    #[tracing::instrument(skip(self, bytes, suggested_name), fields(size = bytes.len()))]
    async fn put(&self, bytes: &[u8], suggested_name: &str) -> BilletResult<StoredImage> {
        let now = Utc::now();
        let file_name = artifact_file_name(now, suggested_name);
        let path = self.base_path.join(&file_name);

        // Write to temp file first, then rename for atomicity
        let temp_path = path.with_extension("tmp");
        tokio::fs::write(&temp_path, bytes).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, &path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
        })?;

        let expires_at = now + self.url_ttl;

        tracing::info!(
            path = %path.display(),
            size = bytes.len(),
            expires_at = %expires_at,
            "Stored generated image"
        );

        Ok(StoredImage {
            url: format!("file://{}", path.display()),
            expires_at,
        })
    }
}
