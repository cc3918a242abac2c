use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::RwLock;

#[derive(Debug, Clone, PartialEq)]
pub struct SessionRecord {
    pub session_id: String,
    pub url: String,
    pub color_hex: String,
    pub seed: u32,
    pub created_at: Instant,
}

/// Issued sessions, keyed by id. Replay reads the source URL from here.
///
/// Records live as long as their replay seed: once `created_at + ttl` has
/// passed they are invisible to lookups and dropped on the next `save` or
/// `purge_expired`.
pub struct SessionRepository {
    records: RwLock<HashMap<String, SessionRecord>>,
    ttl: Duration,
}

impl SessionRepository {
    pub fn new(ttl: Duration) -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn save(&self, record: SessionRecord) {
        let now = Instant::now();
        let ttl = self.ttl;
        let mut records = self.records.write();
        records.retain(|_, existing| !is_expired(existing, ttl, now));
        records.insert(record.session_id.clone(), record);
    }

    pub fn find_by_id(&self, session_id: &str) -> Option<SessionRecord> {
        let now = Instant::now();
        self.records
            .read()
            .get(session_id)
            .filter(|record| !is_expired(record, self.ttl, now))
            .cloned()
    }

    pub fn remove(&self, session_id: &str) -> Option<SessionRecord> {
        self.records.write().remove(session_id)
    }

    /// Drops expired records. Returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let ttl = self.ttl;
        let mut records = self.records.write();
        let before = records.len();
        records.retain(|_, record| !is_expired(record, ttl, now));
        before - records.len()
    }

    /// Number of unexpired records.
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.records
            .read()
            .values()
            .filter(|record| !is_expired(record, self.ttl, now))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn is_expired(record: &SessionRecord, ttl: Duration, now: Instant) -> bool {
    now.saturating_duration_since(record.created_at) >= ttl
}
