use std::{fs, path::Path, time::Duration};

use serde::Deserialize;
use thiserror::Error;

use crate::seed::{DEFAULT_NAMESPACE, DEFAULT_TTL};

pub const DEFAULT_BEATMAP_TIMEOUT_MS: u64 = 300_000;
pub const DEFAULT_AUDIO_BASE_URL: &str = "https://cdn.playasul.local/audio";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
    /// Hard deadline for one beatmap generation.
    pub beatmap_timeout_ms: u64,
    pub seed_ttl_secs: u64,
    pub seed_namespace: String,
    pub audio_base_url: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            beatmap_timeout_ms: DEFAULT_BEATMAP_TIMEOUT_MS,
            seed_ttl_secs: DEFAULT_TTL.as_secs(),
            seed_namespace: DEFAULT_NAMESPACE.to_string(),
            audio_base_url: DEFAULT_AUDIO_BASE_URL.to_string(),
        }
    }
}

impl ServiceConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: ServiceConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.beatmap_timeout_ms == 0 {
            return Err(ConfigError::Invalid("beatmap_timeout_ms must be > 0"));
        }
        if self.seed_ttl_secs == 0 {
            return Err(ConfigError::Invalid("seed_ttl_secs must be > 0"));
        }
        if self.seed_namespace.trim().is_empty() {
            return Err(ConfigError::Invalid("seed_namespace must not be empty"));
        }
        if !(self.audio_base_url.starts_with("http://") || self.audio_base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid("audio_base_url must be an http(s) URL"));
        }
        Ok(())
    }

    pub fn beatmap_timeout(&self) -> Duration {
        Duration::from_millis(self.beatmap_timeout_ms)
    }

    pub fn seed_ttl(&self) -> Duration {
        Duration::from_secs(self.seed_ttl_secs)
    }
}
