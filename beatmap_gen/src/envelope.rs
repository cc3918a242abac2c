use std::f64::consts::PI;

use crate::rng::SeededRng;
use crate::{round_to, ENVELOPE_LEN};

const ENERGY_FLOOR: f64 = 0.05;
const CLIMAX_CHANCE: f64 = 0.18;
const CENTROID_MIN: f64 = 0.1;
const CENTROID_MAX: f64 = 0.95;

/// Arch-shaped intensity curve with a secondary harmonic, noise and occasional
/// climax spikes.
pub(crate) fn pass2_energy(rng: &mut SeededRng) -> Vec<f64> {
    let phase = rng.next_f64() * 2.0 * PI;
    let last = (ENVELOPE_LEN - 1) as f64;

    (0..ENVELOPE_LEN)
        .map(|i| {
            let x = i as f64 / last;
            let base = 0.45 + 0.3 * (PI * x).sin();
            let harmonic = 0.12 * (4.0 * PI * x + phase).sin();
            let noise = (rng.next_f64() - 0.5) * 0.2;
            let mut value = (base + harmonic + noise).clamp(ENERGY_FLOOR, 1.0);

            if rng.chance(CLIMAX_CHANCE) {
                value = (value + rng.range_f64(0.15, 0.35)).clamp(ENERGY_FLOOR, 1.0);
            }
            round_to(value, 3)
        })
        .collect()
}

pub(crate) fn pass3_centroid(rng: &mut SeededRng, energy: &[f64]) -> Vec<f64> {
    let len = energy.len() as f64;
    energy
        .iter()
        .enumerate()
        .map(|(i, &e)| {
            let base = 0.15 + 0.6 * e;
            let drift = (rng.next_f64() - 0.5) * 0.15;
            let harmonic = 0.08 * (2.0 * PI * i as f64 / len + PI / 3.0).sin();
            round_to((base + drift + harmonic).clamp(CENTROID_MIN, CENTROID_MAX), 3)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn energy_is_fixed_length_and_bounded() {
        for seed in 0..500u32 {
            let energy = pass2_energy(&mut SeededRng::new(seed));
            assert_eq!(energy.len(), ENVELOPE_LEN);
            assert!(energy.iter().all(|&e| e > 0.0 && e <= 1.0), "seed {seed}: {energy:?}");
        }
    }

    #[test]
    fn centroid_follows_energy_length_and_bounds() {
        let mut rng = SeededRng::new(99);
        let energy = pass2_energy(&mut rng);
        let centroid = pass3_centroid(&mut rng, &energy);
        assert_eq!(centroid.len(), energy.len());
        assert!(centroid.iter().all(|&c| (CENTROID_MIN..=CENTROID_MAX).contains(&c)));
    }

    #[test]
    fn centroid_tracks_energy() {
        // Drift and harmonic add at most 0.155 either side, so a flat-out loud
        // element always sits above a near-silent one.
        let mut rng = SeededRng::new(5);
        let centroid = pass3_centroid(&mut rng, &[1.0, 0.05]);
        assert!(centroid[0] > centroid[1]);
    }
}
