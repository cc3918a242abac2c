pub mod judge;
pub mod session;

pub use judge::{evaluate_timing, score_for_judgement, Judgement, HIT_WINDOW_MS, LATE_WINDOW_MS};
pub use session::{compute_accuracy, JudgementResult, PlaySession, RunningStats};
