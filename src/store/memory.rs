//! In-process store used by tests and ephemeral sessions

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::KeyValueStore;
use crate::error::{StoreError, StoreResult};

/// Volatile store backed by a `HashMap`
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    failure: Mutex<Option<String>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail with `reason`.
    /// Passing `None` restores normal behaviour.
    pub async fn fail_with(&self, reason: Option<&str>) {
        *self.failure.lock().await = reason.map(str::to_string);
    }

    async fn check(&self) -> StoreResult<()> {
        match self.failure.lock().await.as_ref() {
            Some(reason) => Err(StoreError::Unavailable(reason.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.check().await?;
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.check().await?;
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> StoreResult<()> {
        self.check().await?;
        self.entries.lock().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_get_delete() {
        let store = MemoryStore::new();
        assert_eq!(store.get("start_time").await.unwrap(), None);

        store.set("start_time", "a").await.unwrap();
        store.set("start_time", "b").await.unwrap();
        assert_eq!(store.get("start_time").await.unwrap().as_deref(), Some("b"));

        store.delete("start_time").await.unwrap();
        store.delete("start_time").await.unwrap();
        assert_eq!(store.get("start_time").await.unwrap(), None);
    }

    #[tokio::test]
    async fn failure_switch() {
        let store = MemoryStore::new();
        store.fail_with(Some("disk on fire")).await;
        assert!(matches!(
            store.get("start_time").await,
            Err(StoreError::Unavailable(_))
        ));
        assert!(store.set("start_time", "x").await.is_err());

        store.fail_with(None).await;
        assert!(store.set("start_time", "x").await.is_ok());
    }
}
