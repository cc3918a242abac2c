//! Seed persistence for replay.
//!
//! Seeds live in a key-value store with per-key expiry. The store is the only
//! state shared between concurrent sessions; each operation is atomic per key
//! and nothing spans keys.

mod memory;
mod repository;

use std::time::Duration;

use thiserror::Error;

pub use memory::MemoryStore;
pub use repository::{SeedRepository, DEFAULT_NAMESPACE, DEFAULT_TTL};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Minimal set-with-expiry / get / delete surface. Expiry is the store's job:
/// `get` must not return a value whose TTL has elapsed.
pub trait KeyValueStore: Send + Sync {
    fn set_with_ttl(&self, key: &str, value: &str, ttl: Duration) -> Result<(), StoreError>;
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn delete(&self, key: &str) -> Result<(), StoreError>;
}
