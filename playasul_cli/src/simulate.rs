use beatmap_schema::{GameResult, SessionCreateResponse};
use playasul_core::gameplay::{PlaySession, LATE_WINDOW_MS};
use playasul_core::input::InputQueue;
use tracing::debug;

#[derive(Debug, Clone, Copy)]
pub struct AutoplayOptions {
    /// Added to every note time to get the press time.
    pub offset_ms: f64,
    /// Skip every n-th note (1-based), leaving it to time out.
    pub skip_every: Option<usize>,
    pub frame_ms: f64,
}

/// Plays `session` with scripted presses, one frame at a time, and returns the
/// final result.
pub fn run_autoplay(session: &SessionCreateResponse, url: &str, options: AutoplayOptions) -> GameResult {
    let notes = &session.beatmap.notes;
    let mut play = PlaySession::new(notes);
    let queue = InputQueue::new();

    let mut presses: Vec<f64> = notes
        .iter()
        .enumerate()
        .filter(|(idx, _)| match options.skip_every {
            Some(n) if n > 0 => (idx + 1) % n != 0,
            _ => true,
        })
        .map(|(_, note)| f64::from(note.t) + options.offset_ms)
        .collect();
    presses.sort_by(|a, b| a.total_cmp(b));

    let end_ms = notes.last().map_or(0.0, |n| f64::from(n.t)) + LATE_WINDOW_MS + options.frame_ms;
    let frame_ms = options.frame_ms.max(1.0);
    let mut next_press = 0;
    let mut now = 0.0;

    while !play.is_finished() && now <= end_ms + frame_ms {
        now += frame_ms;
        while next_press < presses.len() && presses[next_press] <= now {
            queue.press(presses[next_press]);
            next_press += 1;
        }
        for result in play.drive(&queue, now) {
            debug!(
                note = result.note_index,
                judgement = ?result.judgement,
                delta_ms = result.delta_ms,
                "judged"
            );
        }
    }

    play.summary(&session.session_id, session.seed, url)
}
