#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputEvent {
    /// Milliseconds since the play session started.
    pub elapsed_ms: f64,
    pub pressed: bool,
}

impl InputEvent {
    pub fn press(elapsed_ms: f64) -> Self {
        Self {
            elapsed_ms,
            pressed: true,
        }
    }

    pub fn release(elapsed_ms: f64) -> Self {
        Self {
            elapsed_ms,
            pressed: false,
        }
    }
}
