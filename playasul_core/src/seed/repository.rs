use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use super::{KeyValueStore, StoreError};

pub const DEFAULT_NAMESPACE: &str = "playasul:beatmap-seed";
pub const DEFAULT_TTL: Duration = Duration::from_secs(15 * 60);

/// Maps session ids to their generation seeds for a limited time.
#[derive(Clone)]
pub struct SeedRepository {
    store: Arc<dyn KeyValueStore>,
    namespace: String,
    ttl: Duration,
}

impl SeedRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_options(store, DEFAULT_NAMESPACE, DEFAULT_TTL)
    }

    pub fn with_options(
        store: Arc<dyn KeyValueStore>,
        namespace: impl Into<String>,
        ttl: Duration,
    ) -> Self {
        Self {
            store,
            namespace: namespace.into(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn persist_seed(&self, session_id: &str, seed: u32) -> Result<(), StoreError> {
        let key = self.session_key(session_id);
        self.store.set_with_ttl(&key, &seed.to_string(), self.ttl)?;
        debug!(%key, ttl_secs = self.ttl.as_secs(), "seed persisted");
        Ok(())
    }

    /// `None` when the key is absent, expired, or holds something that is not a
    /// seed.
    pub fn fetch_seed(&self, session_id: &str) -> Result<Option<u32>, StoreError> {
        let key = self.session_key(session_id);
        let Some(raw) = self.store.get(&key)? else {
            return Ok(None);
        };
        match raw.parse::<u32>() {
            Ok(seed) => Ok(Some(seed)),
            Err(err) => {
                warn!(%key, %raw, %err, "discarding unparsable seed record");
                Ok(None)
            }
        }
    }

    pub fn delete_seed(&self, session_id: &str) -> Result<(), StoreError> {
        self.store.delete(&self.session_key(session_id))
    }

    fn session_key(&self, session_id: &str) -> String {
        format!("{}:session:{}", self.namespace, session_id)
    }
}
