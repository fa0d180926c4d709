//! Polled joystick/launch input seam
//!
//! The simulation samples input exactly once per tick instead of reacting
//! to DOM/touch events, which keeps event timing out of the sim. Hosts
//! implement [`InputProvider`] over whatever raw input they have.

/// Joystick-style control source
pub trait InputProvider {
    /// Current vertical control value in [-1, 1]; 0 when idle
    fn vertical_control(&self) -> f32;

    /// True exactly once per discrete launch press, then resets
    fn poll_launch(&mut self) -> bool;
}

/// No input at all (attract mode, tests)
#[derive(Debug, Clone, Copy, Default)]
pub struct IdleInput;

impl InputProvider for IdleInput {
    fn vertical_control(&self) -> f32 {
        0.0
    }

    fn poll_launch(&mut self) -> bool {
        false
    }
}

/// Scripted input for tests and the headless demo: a settable control
/// value plus queued launch presses
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    pub control: f32,
    pending_launches: u32,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one launch press for a future poll
    pub fn press_launch(&mut self) {
        self.pending_launches += 1;
    }
}

impl InputProvider for ScriptedInput {
    fn vertical_control(&self) -> f32 {
        self.control.clamp(-1.0, 1.0)
    }

    fn poll_launch(&mut self) -> bool {
        if self.pending_launches > 0 {
            self.pending_launches -= 1;
            true
        } else {
            false
        }
    }
}
