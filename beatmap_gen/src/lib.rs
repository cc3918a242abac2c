use beatmap_schema::Beatmap;

mod envelope;
mod harmony;
mod notes;
pub mod preset;
pub mod rng;
mod structure;
mod tempo;


pub use preset::build_presets;
use rng::{hash_str, SeededRng};

/// Number of points in the energy envelope and centroid curves, independent of
/// track length.
pub const ENVELOPE_LEN: usize = 32;

pub const BPM_MIN: u32 = 80;
pub const BPM_MAX: u32 = 180;
pub const MIN_BEATS: u32 = 48;
pub const MAX_BEATS: u32 = 192;
pub const LANE_COUNT: u8 = 4;

/// Derives the beatmap for `identifier` under `seed`.
///
/// Pure and total: the same pair always yields the same beatmap. The stages
/// below share one PRNG stream and must keep their draw order, otherwise every
/// previously issued seed regenerates a different map.
pub fn generate(identifier: &str, seed: u32) -> Beatmap {
    let mut rng = SeededRng::new(seed ^ hash_str(identifier));

    let tempo = tempo::pass1_tempo(&mut rng);
    let energy_envelope = envelope::pass2_energy(&mut rng);
    let spectral_centroid_seq = envelope::pass3_centroid(&mut rng, &energy_envelope);
    let key_progression = harmony::pass4_keys(&mut rng);
    let segments = structure::pass5_segments(&mut rng, tempo.duration_sec);
    let (notes, beat_timeline) = notes::pass6_notes(&mut rng, &tempo, &energy_envelope);

    Beatmap {
        bpm: tempo.bpm,
        energy_envelope,
        beat_timeline,
        spectral_centroid_seq,
        key_progression,
        segments,
        notes,
    }
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
