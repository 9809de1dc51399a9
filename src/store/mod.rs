//! Durable key-value store module
//!
//! The engine only ever talks to the store through the `KeyValueStore`
//! trait, so tests can swap the on-disk store for an in-memory fake.

pub mod file;
pub mod memory;

use async_trait::async_trait;

use crate::error::StoreResult;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Async get/set/delete over string keys
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove `key`. Removing a missing key succeeds.
    async fn delete(&self, key: &str) -> StoreResult<()>;
}
