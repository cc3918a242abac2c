//! Press/release events travelling from the key handler to the play loop.
//!
//! Any thread may hold a [`Sender`] and stamp presses with the play clock;
//! the play loop owns the queue and empties it once per frame through
//! [`PlaySession::drive`](crate::gameplay::PlaySession::drive), so judgement
//! always sees inputs in the order they were stamped on each sender.

pub mod events;

use self::events::InputEvent;
use crossbeam_channel::{unbounded, Receiver, Sender};

pub struct InputQueue {
    sender: Sender<InputEvent>,
    receiver: Receiver<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self { sender, receiver }
    }

    pub fn push(&self, event: InputEvent) {
        // The queue owns the receiver, so the channel cannot be disconnected.
        let _ = self.sender.send(event);
    }

    /// Queues a key-down at `elapsed_ms` on the play clock.
    pub fn press(&self, elapsed_ms: f64) {
        self.push(InputEvent::press(elapsed_ms));
    }

    pub fn pop(&self) -> Option<InputEvent> {
        self.receiver.try_recv().ok()
    }

    /// Events queued since the last frame, in arrival order.
    pub fn drain(&self) -> Vec<InputEvent> {
        self.receiver.try_iter().collect()
    }

    /// Presses waiting for the next frame.
    pub fn pending(&self) -> usize {
        self.receiver.len()
    }

    /// Handle for a key-handler thread.
    pub fn sender(&self) -> Sender<InputEvent> {
        self.sender.clone()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
