use beatmap_schema::{BeatmapNote, GameResult};
use serde::Serialize;

use super::judge::{evaluate_timing, Judgement, LATE_WINDOW_MS};
use crate::input::events::InputEvent;
use crate::input::InputQueue;

#[derive(Debug, Clone, PartialEq)]
pub struct JudgementResult {
    pub note_index: usize,
    pub judgement: Judgement,
    pub delta_ms: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunningStats {
    pub hit_count: u32,
    pub late_count: u32,
    pub miss_count: u32,
    pub score: u32,
    pub combo: u32,
    pub best_combo: u32,
}

impl RunningStats {
    fn record(&mut self, judgement: Judgement) {
        match judgement {
            Judgement::Hit => self.hit_count += 1,
            Judgement::Late => self.late_count += 1,
            Judgement::Miss => self.miss_count += 1,
        }
        if judgement.continues_combo() {
            self.combo += 1;
            self.best_combo = self.best_combo.max(self.combo);
        } else {
            self.combo = 0;
        }
        self.score += judgement.points();
    }
}

/// Judgement state for one play of a beatmap.
///
/// Owned by a single play loop. Inputs and ticks both go through `&mut self`,
/// so a note's judged flag is checked and set without anything in between.
pub struct PlaySession {
    notes: Vec<BeatmapNote>,
    judgements: Vec<Option<Judgement>>,
    stats: RunningStats,
    /// Every note before this index is judged.
    cursor: usize,
    judged_count: usize,
}

impl PlaySession {
    /// `notes` must be sorted by time, as the generator emits them.
    pub fn new(notes: &[BeatmapNote]) -> Self {
        Self {
            notes: notes.to_vec(),
            judgements: vec![None; notes.len()],
            stats: RunningStats::default(),
            cursor: 0,
            judged_count: 0,
        }
    }

    pub fn notes(&self) -> &[BeatmapNote] {
        &self.notes
    }

    pub fn stats(&self) -> &RunningStats {
        &self.stats
    }

    pub fn judgement(&self, note_index: usize) -> Option<Judgement> {
        self.judgements.get(note_index).copied().flatten()
    }

    pub fn total_notes(&self) -> usize {
        self.notes.len()
    }

    pub fn is_finished(&self) -> bool {
        self.judged_count == self.notes.len()
    }

    /// Judges the earliest unjudged note within `LATE_WINDOW_MS` of the press.
    /// Presses that match nothing, and presses with a non-finite timestamp,
    /// are dropped without touching any state.
    pub fn process_input(&mut self, event: InputEvent) -> Option<JudgementResult> {
        let elapsed = event.elapsed_ms;
        if !event.pressed || !elapsed.is_finite() {
            return None;
        }

        let mut target = None;
        for idx in self.cursor..self.notes.len() {
            if self.judgements[idx].is_some() {
                continue;
            }
            let delta = elapsed - f64::from(self.notes[idx].t);
            if delta > LATE_WINDOW_MS {
                // Too old to press; the next tick times it out.
                continue;
            }
            if delta < -LATE_WINDOW_MS {
                // Sorted by time, so everything after is further away.
                break;
            }
            target = Some((idx, delta));
            break;
        }

        let (idx, delta) = target?;
        self.apply(idx, evaluate_timing(delta), delta)
    }

    /// Times out every unjudged note more than `LATE_WINDOW_MS` in the past.
    pub fn check_misses(&mut self, elapsed_ms: f64) -> Vec<JudgementResult> {
        let mut results = Vec::new();
        if !elapsed_ms.is_finite() {
            return results;
        }

        for idx in self.cursor..self.notes.len() {
            let delta = elapsed_ms - f64::from(self.notes[idx].t);
            if delta <= LATE_WINDOW_MS {
                break;
            }
            if let Some(result) = self.apply(idx, Judgement::Miss, delta) {
                results.push(result);
            }
        }
        results
    }

    /// Drains queued inputs in arrival order, then runs the timeout sweep at
    /// `now_ms`. One call per frame keeps inputs and ticks serialized.
    pub fn drive(&mut self, queue: &InputQueue, now_ms: f64) -> Vec<JudgementResult> {
        let mut results: Vec<JudgementResult> = queue
            .drain()
            .into_iter()
            .filter_map(|event| self.process_input(event))
            .collect();
        results.extend(self.check_misses(now_ms));
        results
    }

    /// Records `judgement` for a note. Returns `None` and changes nothing if the
    /// note is unknown or already judged.
    pub fn apply(
        &mut self,
        note_index: usize,
        judgement: Judgement,
        delta_ms: f64,
    ) -> Option<JudgementResult> {
        let slot = self.judgements.get_mut(note_index)?;
        if slot.is_some() {
            return None;
        }
        *slot = Some(judgement);
        self.judged_count += 1;
        self.stats.record(judgement);

        while self.cursor < self.judgements.len() && self.judgements[self.cursor].is_some() {
            self.cursor += 1;
        }

        Some(JudgementResult {
            note_index,
            judgement,
            delta_ms,
        })
    }

    /// `(hit + 0.7 * late) / total`, rounded to three decimals. 0 for an empty
    /// beatmap.
    pub fn accuracy(&self) -> f64 {
        compute_accuracy(&self.stats, self.notes.len())
    }

    pub fn summary(&self, session_id: &str, seed: u32, url: &str) -> GameResult {
        GameResult {
            session_id: session_id.to_string(),
            seed,
            url: url.to_string(),
            total_notes: self.notes.len() as u32,
            hit_count: self.stats.hit_count,
            late_count: self.stats.late_count,
            miss_count: self.stats.miss_count,
            score: self.stats.score,
            best_combo: self.stats.best_combo,
            accuracy: self.accuracy(),
        }
    }
}

pub fn compute_accuracy(stats: &RunningStats, total_notes: usize) -> f64 {
    if total_notes == 0 {
        return 0.0;
    }
    let weighted = f64::from(stats.hit_count) + f64::from(stats.late_count) * 0.7;
    (1000.0 * weighted / total_notes as f64).round() / 1000.0
}
