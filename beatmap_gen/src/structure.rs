use beatmap_schema::BeatmapSegment;

use crate::rng::SeededRng;
use crate::round_to;

pub const SEGMENT_LABELS: [&str; 5] = ["intro", "verse", "bridge", "chorus", "outro"];

/// Splits the track into 4..=6 weighted spans. Weights are at least 0.5 out of
/// a total below 9, so no span is shorter than ~5s and rounding to 0.1s keeps
/// start times strictly increasing.
pub(crate) fn pass5_segments(rng: &mut SeededRng, duration_sec: f64) -> Vec<BeatmapSegment> {
    let count = 4 + rng.index(3);
    let weights: Vec<f64> = (0..count).map(|_| rng.range_f64(0.5, 1.5)).collect();
    let total: f64 = weights.iter().sum();

    let mut elapsed = 0.0;
    weights
        .iter()
        .enumerate()
        .map(|(i, weight)| {
            let segment = BeatmapSegment {
                label: SEGMENT_LABELS[i % SEGMENT_LABELS.len()].to_string(),
                start_sec: round_to(elapsed, 1),
            };
            elapsed += duration_sec * weight / total;
            segment
        })
        .collect()
}
