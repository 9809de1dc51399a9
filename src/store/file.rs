//! JSON-file backed store that survives process restarts

use std::{
    collections::BTreeMap,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use tempfile::NamedTempFile;
use tokio::{fs, sync::Mutex};
use tracing::debug;

use super::KeyValueStore;
use crate::error::{StoreError, StoreResult};

/// Durable store holding every key in one JSON object on disk
///
/// Writes go to a uniquely named temporary file in the same directory that
/// is then renamed over the target, so a crash mid-write leaves the previous
/// contents intact and concurrent writers never share a temp file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Open a store at `path`. The file is created lazily on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> StoreResult<BTreeMap<String, String>> {
        match fs::read(&self.path).await {
            Ok(bytes) if bytes.is_empty() => Ok(BTreeMap::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn persist(&self, entries: &BTreeMap<String, String>) -> StoreResult<()> {
        let bytes = serde_json::to_vec_pretty(entries)?;
        let path = self.path.clone();

        // Unique temp file in the target directory, renamed into place
        tokio::task::spawn_blocking(move || -> std::io::Result<()> {
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            };
            std::fs::create_dir_all(&dir)?;

            let mut tmp = NamedTempFile::new_in(&dir)?;
            tmp.write_all(&bytes)?;
            tmp.as_file().sync_all()?;
            tmp.persist(&path)?;
            Ok(())
        })
        .await
        .map_err(|e| StoreError::Unavailable(format!("store write task failed: {}", e)))??;

        debug!("Persisted {} entries to {}", entries.len(), self.path.display());
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.load().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load().await?;
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries).await
    }

    async fn delete(&self, key: &str) -> StoreResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load().await?;
        if entries.remove(key).is_some() {
            self.persist(&entries).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("absent.json"));
        assert_eq!(store.get("start_time").await.unwrap(), None);
        store.delete("start_time").await.unwrap();
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn values_survive_reopening() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");

        let store = FileStore::new(&path);
        store.set("start_time", "2024-01-01T00:00:00.000Z").await.unwrap();
        store.set("other", "kept").await.unwrap();
        drop(store);

        let reopened = FileStore::new(&path);
        assert_eq!(
            reopened.get("start_time").await.unwrap().as_deref(),
            Some("2024-01-01T00:00:00.000Z")
        );

        reopened.delete("start_time").await.unwrap();
        assert_eq!(reopened.get("start_time").await.unwrap(), None);
        assert_eq!(reopened.get("other").await.unwrap().as_deref(), Some("kept"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn independent_writers_never_corrupt_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        // Separate instances stand in for separate processes
        let mut handles = Vec::new();
        for i in 0..16 {
            let store = Arc::new(FileStore::new(&path));
            handles.push(tokio::spawn(async move {
                store.set("start_time", &format!("value-{i}")).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let value = FileStore::new(&path).get("start_time").await.unwrap().unwrap();
        assert!(value.starts_with("value-"));

        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .filter(|name| name != "store.json")
            .collect();
        assert!(leftovers.is_empty(), "stray temp files: {leftovers:?}");
    }

    #[tokio::test]
    async fn corrupt_file_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, b"{not json").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(
            store.get("start_time").await,
            Err(StoreError::Serialization(_))
        ));
    }
}
