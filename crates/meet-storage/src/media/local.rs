//! Local disk media storage.
//!
//! Files land flat under the configured root directory and are served
//! by the API process as static assets.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use super::{MediaStore, StorageError, StorageResult};

/// Media store backed by a local directory
#[derive(Debug, Clone)]
pub struct LocalMediaStore {
    media_root: PathBuf,
    public_base: String,
}

impl LocalMediaStore {
    /// Create a new store rooted at `media_root`, serving URLs under `public_base`
    #[must_use]
    pub fn new(media_root: impl Into<PathBuf>, public_base: impl Into<String>) -> Self {
        let public_base = public_base.into();
        Self {
            media_root: media_root.into(),
            public_base: public_base.trim_end_matches('/').to_string(),
        }
    }

    /// Create the root directory if it does not exist yet
    pub async fn ensure_root(&self) -> StorageResult<()> {
        fs::create_dir_all(&self.media_root).await?;
        Ok(())
    }

    /// Directory files are written to
    #[must_use]
    pub fn media_root(&self) -> &Path {
        &self.media_root
    }

    // Names come from our own code, but reject separators anyway so a
    // bad caller cannot write outside the root.
    fn resolve(&self, name: &str) -> StorageResult<PathBuf> {
        if name.is_empty()
            || name.contains('/')
            || name.contains('\\')
            || name.contains("..")
        {
            return Err(StorageError::InvalidName(name.to_string()));
        }
        Ok(self.media_root.join(name))
    }
}

#[async_trait]
impl MediaStore for LocalMediaStore {
    async fn store(&self, name: &str, bytes: &[u8]) -> StorageResult<String> {
        let path = self.resolve(name)?;
        fs::create_dir_all(&self.media_root).await?;
        fs::write(&path, bytes).await?;

        tracing::debug!(name = %name, size = bytes.len(), "Stored media file");

        Ok(format!("{}/{}", self.public_base, name))
    }

    async fn remove(&self, name: &str) -> StorageResult<()> {
        let path = self.resolve(name)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(e)),
        }
    }
}
