use beatmap_schema::Milliseconds;

use crate::rng::SeededRng;
use crate::{BPM_MAX, BPM_MIN, MAX_BEATS, MIN_BEATS};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Tempo {
    pub bpm: u32,
    pub duration_sec: f64,
    pub beat_interval_ms: Milliseconds,
    pub beat_count: u32,
}

pub(crate) fn pass1_tempo(rng: &mut SeededRng) -> Tempo {
    // Broad draw over 80..160 plus a 0..30 accent; the sum centers near 135.
    let broad = 80.0 + rng.next_f64() * 80.0;
    let accent = rng.next_f64() * 30.0;
    let bpm = (broad + accent)
        .clamp(f64::from(BPM_MIN), f64::from(BPM_MAX))
        .round() as u32;

    let duration_sec = rng.range_f64(90.0, 240.0);

    let swing = rng.range_f64(0.9, 1.1);
    let beat_interval_ms = (60_000.0 / f64::from(bpm) * swing).round() as Milliseconds;

    let beat_count = ((duration_sec * 1000.0) / f64::from(beat_interval_ms))
        .round()
        .clamp(f64::from(MIN_BEATS), f64::from(MAX_BEATS)) as u32;

    Tempo {
        bpm,
        duration_sec,
        beat_interval_ms,
        beat_count,
    }
}
