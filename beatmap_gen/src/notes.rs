use beatmap_schema::{BeatmapNote, Milliseconds};

use crate::rng::SeededRng;
use crate::tempo::Tempo;
use crate::LANE_COUNT;

const JITTER_RATIO: f64 = 0.125;

fn extra_note_chance(energy: f64) -> f64 {
    if energy < 0.4 {
        0.12
    } else if energy < 0.7 {
        0.30
    } else {
        0.55
    }
}

/// Returns `(notes, beat_timeline)`.
///
/// One note per beat, jittered and laned by local energy, plus an optional
/// extra note later in the same beat on a different lane. The timeline keeps
/// the unjittered beat times.
pub(crate) fn pass6_notes(
    rng: &mut SeededRng,
    tempo: &Tempo,
    energy: &[f64],
) -> (Vec<BeatmapNote>, Vec<Milliseconds>) {
    let interval = f64::from(tempo.beat_interval_ms);
    let max_lane = i64::from(LANE_COUNT - 1);
    let beat_count = tempo.beat_count as usize;

    let mut notes = Vec::with_capacity(beat_count * 2);
    let mut beat_timeline = Vec::with_capacity(beat_count);

    for beat in 0..beat_count {
        let base = beat as u64 * u64::from(tempo.beat_interval_ms);
        beat_timeline.push(base as Milliseconds);

        let local_energy = energy[(beat * energy.len() / beat_count).min(energy.len() - 1)];

        let jitter = ((rng.next_f64() - 0.5) * 2.0 * JITTER_RATIO * interval).round() as i64;
        let t = (base as i64 + jitter).max(0) as Milliseconds;

        let lane = ((local_energy * 2.5 + rng.next_f64() * 1.5).floor() as i64).clamp(0, max_lane) as u8;
        notes.push(BeatmapNote { t, lane });

        if rng.chance(extra_note_chance(local_energy)) {
            let offset = (interval * rng.range_f64(0.25, 0.75)).round() as u64;
            let extra_lane = (lane + 1 + rng.index(3) as u8) % LANE_COUNT;
            notes.push(BeatmapNote {
                t: (base + offset) as Milliseconds,
                lane: extra_lane,
            });
        }
    }

    notes.sort_by_key(|note| note.t);
    (notes, beat_timeline)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_tempo(beat_count: u32) -> Tempo {
        Tempo {
            bpm: 120,
            duration_sec: 120.0,
            beat_interval_ms: 500,
            beat_count,
        }
    }

    #[test]
    fn timeline_is_unjittered_beats() {
        let (_, timeline) = pass6_notes(&mut SeededRng::new(3), &flat_tempo(48), &[0.5; 32]);
        assert_eq!(timeline.len(), 48);
        assert_eq!(timeline[0], 0);
        assert_eq!(timeline[1], 500);
        assert_eq!(timeline[47], 47 * 500);
    }

    #[test]
    fn extra_notes_use_a_different_lane() {
        // Loud envelope: extras are frequent.
        let (notes, timeline) = pass6_notes(&mut SeededRng::new(11), &flat_tempo(192), &[1.0; 32]);
        assert!(notes.len() > timeline.len());
        for pair in notes.windows(2) {
            assert!(pair[0].t <= pair[1].t);
            if pair[0].t == pair[1].t {
                assert_ne!(pair[0].lane, pair[1].lane);
            }
        }
    }

    #[test]
    fn quiet_envelope_biases_low_lanes() {
        let (notes, _) = pass6_notes(&mut SeededRng::new(8), &flat_tempo(192), &[0.05; 32]);
        let high = notes.iter().filter(|n| n.lane == 3).count();
        let low = notes.iter().filter(|n| n.lane <= 1).count();
        assert!(low > high);
    }
}
