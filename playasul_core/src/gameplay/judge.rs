use serde::{Deserialize, Serialize};

/// Half-width of the `Hit` window, early or late.
pub const HIT_WINDOW_MS: f64 = 90.0;
/// Late presses up to this offset still score; also the capture window for
/// matching an input to a note and the timeout after which a note is missed.
pub const LATE_WINDOW_MS: f64 = 180.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Judgement {
    Hit,
    Late,
    Miss,
}

impl Judgement {
    pub fn points(self) -> u32 {
        score_for_judgement(self)
    }

    /// Hit and Late keep the combo going.
    pub fn continues_combo(self) -> bool {
        !matches!(self, Judgement::Miss)
    }
}

/// Classifies `diff_ms = input_time - note_time`.
///
/// Early presses get no category of their own: anything earlier than the hit
/// window is a miss, while late presses have a separate band out to
/// `LATE_WINDOW_MS`.
pub fn evaluate_timing(diff_ms: f64) -> Judgement {
    if diff_ms.abs() <= HIT_WINDOW_MS {
        Judgement::Hit
    } else if diff_ms > 0.0 && diff_ms <= LATE_WINDOW_MS {
        Judgement::Late
    } else {
        Judgement::Miss
    }
}

pub fn score_for_judgement(judgement: Judgement) -> u32 {
    match judgement {
        Judgement::Hit => 100,
        Judgement::Late => 70,
        Judgement::Miss => 0,
    }
}
