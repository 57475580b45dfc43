//! Directory-backed durable storage.
//!
//! Each key is a `<key>.json` file inside one directory. Writes replace the
//! file atomically; file I/O runs on the blocking pool.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use nubo_core::error::{NuboError, Result};
use nubo_core::session::DurableStorage;

use super::atomic_file::{AtomicFileError, AtomicTextFile};

#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn file_for(&self, key: &str) -> Result<AtomicTextFile> {
        validate_key(key)?;
        Ok(AtomicTextFile::new(self.dir.join(format!("{}.json", key))))
    }
}

/// Keys become file names, so only a conservative character set is allowed.
fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if valid {
        Ok(())
    } else {
        Err(NuboError::invalid_argument(format!(
            "storage key '{}' must be non-empty ASCII letters, digits, '_', '-' or '.'",
            key
        )))
    }
}

async fn run_blocking<T, F>(f: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| NuboError::internal(format!("Failed to join task: {}", e)))?
}

#[async_trait]
impl DurableStorage for FileStorage {
    async fn read(&self, key: &str) -> Result<Option<String>> {
        let file = self.file_for(key)?;
        let key = key.to_string();
        run_blocking(move || match file.load() {
            Ok(content) => Ok(content),
            Err(AtomicFileError::InvalidText(e)) => Err(NuboError::corrupt(key, e.to_string())),
            Err(e) => Err(e.into()),
        })
        .await
    }

    async fn write(&self, key: &str, payload: &str) -> Result<()> {
        let file = self.file_for(key)?;
        let payload = payload.to_string();
        run_blocking(move || {
            file.save(&payload)?;
            tracing::debug!(path = %file.path().display(), "Wrote storage entry");
            Ok(())
        })
        .await
    }

    async fn clear(&self, key: &str) -> Result<()> {
        let file = self.file_for(key)?;
        run_blocking(move || Ok(file.remove()?)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_read_clear() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        assert_eq!(storage.read("auth_user").await.unwrap(), None);

        storage.write("auth_user", "{\"a\":1}").await.unwrap();
        assert_eq!(
            storage.read("auth_user").await.unwrap().as_deref(),
            Some("{\"a\":1}")
        );
        assert!(temp_dir.path().join("auth_user.json").exists());

        storage.clear("auth_user").await.unwrap();
        storage.clear("auth_user").await.unwrap();
        assert_eq!(storage.read("auth_user").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_rejects_path_like_keys() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        for key in ["", "../escape", "a/b", ".hidden"] {
            let err = storage.write(key, "x").await.unwrap_err();
            assert!(matches!(err, NuboError::InvalidArgument(_)), "key {:?}", key);
        }
    }

    #[tokio::test]
    async fn test_non_utf8_entry_reads_as_corrupt() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());
        std::fs::write(temp_dir.path().join("auth_user.json"), [0xff, 0xfe, 0x00, 0x7b]).unwrap();

        let err = storage.read("auth_user").await.unwrap_err();
        assert!(err.is_corrupt());
    }
}
