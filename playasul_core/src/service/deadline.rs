use std::thread;
use std::time::Duration;

use crossbeam_channel::{bounded, RecvTimeoutError};
use tracing::warn;

use crate::error::SessionError;

/// Runs `task` on a worker thread and waits at most `budget` for its result.
///
/// Past the deadline the worker is abandoned, not cancelled: it runs to
/// completion in the background and its result is dropped.
pub fn run_with_deadline<T, F>(budget: Duration, task: F) -> Result<T, SessionError>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let (tx, rx) = bounded(1);
    thread::Builder::new()
        .name("beatmap-gen".to_string())
        .spawn(move || {
            // The receiver is gone if the deadline already passed.
            let _ = tx.send(task());
        })
        .map_err(|err| SessionError::Internal(format!("failed to spawn generation worker: {err}")))?;

    match rx.recv_timeout(budget) {
        Ok(value) => Ok(value),
        Err(RecvTimeoutError::Timeout) => {
            let timeout_ms = budget.as_millis() as u64;
            warn!(timeout_ms, "generation exceeded deadline; abandoning worker");
            Err(SessionError::Timeout { timeout_ms })
        }
        Err(RecvTimeoutError::Disconnected) => Err(SessionError::Internal(
            "generation worker exited without a result".to_string(),
        )),
    }
}
