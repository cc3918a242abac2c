use beatmap_schema::{PresetSelection, VisualEffectPreset, MAX_PRESETS};

use crate::rng::SeededRng;
use crate::round_to;

fn preset(
    id: &str,
    name: &str,
    color_hex: &str,
    particle_intensity: f64,
    camera_shake: f64,
    bg_shader: &str,
) -> VisualEffectPreset {
    VisualEffectPreset {
        id: id.to_string(),
        name: name.to_string(),
        base_color_hex: color_hex.to_string(),
        particle_intensity: round_to(particle_intensity, 2),
        camera_shake: round_to(camera_shake, 2),
        bg_shader: bg_shader.to_string(),
    }
}

/// Builds the preset catalog for a session and picks the most intense entry.
///
/// Seeded by `seed` alone; the source identifier plays no part here.
pub fn build_presets(color_hex: &str, seed: u32) -> PresetSelection {
    let mut rng = SeededRng::new(seed);
    let base_intensity = round_to(rng.range_f64(0.6, 0.95), 2);

    // Issued seeds depend on this draw order.
    let primary_shake = rng.range_f64(0.05, 0.2);
    let wave_intensity = base_intensity * rng.range_f64(0.8, 1.2);
    let wave_shake = rng.range_f64(0.02, 0.12);
    let spectrum_intensity = base_intensity * rng.range_f64(0.9, 1.1);
    let spectrum_shake = rng.range_f64(0.08, 0.2);

    let mut list = vec![
        preset("color-primary", "Primary Pulse", color_hex, base_intensity, primary_shake, "pulse"),
        preset("color-wave", "Wave Cascade", color_hex, wave_intensity, wave_shake, "wave"),
        preset("color-spectrum", "Spectrum Burst", color_hex, spectrum_intensity, spectrum_shake, "sparkle"),
    ];
    list.truncate(MAX_PRESETS);

    let selected = select_most_intense(&list).clone();
    PresetSelection { selected, list }
}

/// First entry with the highest particle intensity. `list` must be non-empty.
fn select_most_intense(list: &[VisualEffectPreset]) -> &VisualEffectPreset {
    let mut best = &list[0];
    for candidate in &list[1..] {
        if candidate.particle_intensity > best.particle_intensity {
            best = candidate;
        }
    }
    best
}
