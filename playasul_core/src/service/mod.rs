//! Session creation, replay and clearing around the beatmap generator.

mod deadline;
mod sessions;
mod validate;

use std::sync::Arc;
use std::time::Instant;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use beatmap_schema::{SessionCreateRequest, SessionCreateResponse};
use rand::rngs::OsRng;
use rand::RngCore;
use tracing::{debug, info, warn};
use uuid::Uuid;

pub use deadline::run_with_deadline;
pub use sessions::{SessionRecord, SessionRepository};
pub use validate::{is_valid_color_hex, normalize_playable_url};

use crate::config::ServiceConfig;
use crate::error::SessionError;
use crate::seed::{KeyValueStore, MemoryStore, SeedRepository};

pub struct SessionService {
    config: ServiceConfig,
    seeds: SeedRepository,
    sessions: SessionRepository,
}

impl SessionService {
    pub fn new(config: ServiceConfig, store: Arc<dyn KeyValueStore>) -> Self {
        let seeds = SeedRepository::with_options(store, config.seed_namespace.clone(), config.seed_ttl());
        let sessions = SessionRepository::new(config.seed_ttl());
        Self {
            config,
            seeds,
            sessions,
        }
    }

    pub fn with_memory_store(config: ServiceConfig) -> Self {
        Self::new(config, Arc::new(MemoryStore::new()))
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn seeds(&self) -> &SeedRepository {
        &self.seeds
    }

    pub fn sessions(&self) -> &SessionRepository {
        &self.sessions
    }

    pub fn session(&self, session_id: &str) -> Option<SessionRecord> {
        self.sessions.find_by_id(session_id)
    }

    pub fn create_session(
        &self,
        request: &SessionCreateRequest,
    ) -> Result<SessionCreateResponse, SessionError> {
        let url = normalize_playable_url(&request.url)
            .ok_or_else(|| SessionError::Validation("url must be a valid http(s) URL".to_string()))?;
        if !is_valid_color_hex(&request.color_hex) {
            return Err(SessionError::Validation(
                "colorHex must match #RRGGBB".to_string(),
            ));
        }
        let seed = request.seed.unwrap_or_else(|| OsRng.next_u32());

        self.issue(url, request.color_hex.clone(), seed)
    }

    /// Regenerates a previous session's beatmap under a new session id.
    ///
    /// `Ok(None)` means the seed expired or was never stored; the caller has
    /// to resubmit the original request.
    pub fn replay(&self, session_id: &str) -> Result<Option<SessionCreateResponse>, SessionError> {
        let Some(seed) = self.seeds.fetch_seed(session_id)? else {
            debug!(session_id, "replay seed not found");
            return Ok(None);
        };
        let Some(record) = self.sessions.find_by_id(session_id) else {
            warn!(session_id, "seed present but session record missing");
            return Ok(None);
        };

        info!(session_id, seed, "replaying session");
        self.issue(record.url, record.color_hex, seed).map(Some)
    }

    /// Drops the replay seed ahead of its TTL.
    pub fn clear_session(&self, session_id: &str) -> Result<(), SessionError> {
        self.seeds.delete_seed(session_id)?;
        self.sessions.remove(session_id);
        Ok(())
    }

    fn issue(
        &self,
        url: String,
        color_hex: String,
        seed: u32,
    ) -> Result<SessionCreateResponse, SessionError> {
        let started = Instant::now();
        let source = url.clone();
        let beatmap = run_with_deadline(self.config.beatmap_timeout(), move || {
            beatmap_gen::generate(&source, seed)
        })?;
        let presets = beatmap_gen::build_presets(&color_hex, seed);

        let session_id = Uuid::new_v4().to_string();
        let audio_url = self.audio_url(&url, &session_id);

        self.seeds.persist_seed(&session_id, seed)?;
        self.sessions.save(SessionRecord {
            session_id: session_id.clone(),
            url,
            color_hex,
            seed,
            created_at: Instant::now(),
        });

        info!(
            %session_id,
            seed,
            bpm = beatmap.bpm,
            notes = beatmap.notes.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "session created"
        );

        Ok(SessionCreateResponse {
            session_id,
            seed,
            beatmap,
            audio_url,
            effects_preset: presets.selected,
            presets: presets.list,
        })
    }

    fn audio_url(&self, source_url: &str, session_id: &str) -> String {
        format!(
            "{}/{}?source={}",
            self.config.audio_base_url.trim_end_matches('/'),
            session_id,
            URL_SAFE_NO_PAD.encode(source_url)
        )
    }
}
