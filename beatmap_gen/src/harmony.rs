use crate::rng::SeededRng;

pub const KEYS: [&str; 12] = [
    "C", "G", "D", "A", "E", "B", "F#", "C#", "F", "Bb", "Eb", "Ab",
];

const KEY_STEPS: [i32; 4] = [-2, -1, 1, 2];

pub(crate) fn pass4_keys(rng: &mut SeededRng) -> Vec<String> {
    let mut index = rng.index(KEYS.len());
    let len = 4 + rng.index(3);

    let mut progression = Vec::with_capacity(len);
    progression.push(KEYS[index].to_string());
    for _ in 1..len {
        let step = KEY_STEPS[rng.index(KEY_STEPS.len())];
        index = (index as i32 + step).rem_euclid(KEYS.len() as i32) as usize;
        progression.push(KEYS[index].to_string());
    }
    progression
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(key: &str) -> i32 {
        KEYS.iter().position(|k| *k == key).unwrap() as i32
    }

    #[test]
    fn progression_moves_by_adjacent_steps() {
        for seed in 0..500u32 {
            let keys = pass4_keys(&mut SeededRng::new(seed));
            assert!((4..=6).contains(&keys.len()));
            for pair in keys.windows(2) {
                let diff = (position(&pair[1]) - position(&pair[0])).rem_euclid(12);
                assert!(
                    matches!(diff, 1 | 2 | 10 | 11),
                    "seed {seed}: {} -> {}",
                    pair[0],
                    pair[1]
                );
            }
        }
    }
}
