use serde::{Deserialize, Serialize};

pub type Milliseconds = u32;

/// Upper bound on the preset catalog returned with a session.
pub const MAX_PRESETS: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Beatmap {
    pub bpm: u32,
    pub energy_envelope: Vec<f64>,
    pub beat_timeline: Vec<Milliseconds>,
    pub spectral_centroid_seq: Vec<f64>,
    pub key_progression: Vec<String>,
    pub segments: Vec<BeatmapSegment>,
    pub notes: Vec<BeatmapNote>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BeatmapSegment {
    pub label: String,
    pub start_sec: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BeatmapNote {
    pub t: Milliseconds,
    pub lane: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VisualEffectPreset {
    pub id: String,
    pub name: String,
    pub base_color_hex: String,
    pub particle_intensity: f64,
    pub camera_shake: f64,
    pub bg_shader: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PresetSelection {
    pub selected: VisualEffectPreset,
    pub list: Vec<VisualEffectPreset>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionCreateRequest {
    pub url: String,
    pub color_hex: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionCreateResponse {
    pub session_id: String,
    pub seed: u32,
    pub beatmap: Beatmap,
    pub audio_url: String,
    pub effects_preset: VisualEffectPreset,
    pub presets: Vec<VisualEffectPreset>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ValidationError,
    Timeout,
    InternalError,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Outcome of a finished play, as handed to the result screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    pub session_id: String,
    pub seed: u32,
    pub url: String,
    pub total_notes: u32,
    pub hit_count: u32,
    pub late_count: u32,
    pub miss_count: u32,
    pub score: u32,
    pub best_combo: u32,
    pub accuracy: f64,
}
