//! Host-facing game session controller
//!
//! The only surface a host driver touches: `start`, `update`,
//! `request_launch`, `stop`, plus read-only accessors for the render
//! collaborator and an event drain for the audio collaborator.

use crate::input::InputProvider;
use crate::sim::stages::{STAGES, Stage};
use crate::sim::state::{Ball, BallState, Court, GameEvent, GameState, Paddle, Side};
use crate::sim::tick::{self, TickInput};
use crate::tuning::Tuning;

/// An owned game session: authoritative state plus tick orchestration
#[derive(Debug, Clone)]
pub struct GameSession {
    state: GameState,
}

impl GameSession {
    /// Create a stopped session; call [`GameSession::start`] to begin play
    pub fn new(court: Court, tuning: Tuning, seed: u64) -> Self {
        Self {
            state: GameState::new(court, tuning, seed),
        }
    }

    /// Reset scores, stage and paddles, serve in a random direction and
    /// begin play
    pub fn start(&mut self) {
        self.state.start();
        log::info!("session started (seed {})", self.state.seed);
    }

    /// Halt the session; the next [`GameSession::start`] resets all
    /// mutable state before another tick can run
    pub fn stop(&mut self) {
        self.state.running = false;
        log::info!(
            "session stopped at {}:{}",
            self.state.player_score,
            self.state.ai_score
        );
    }

    /// One frame: sample the input provider once and advance the sim.
    /// No-op before `start`.
    pub fn update(&mut self, dt: f32, input: &mut dyn InputProvider) {
        if !self.state.running {
            return;
        }
        let tick_input = TickInput {
            control: input.vertical_control(),
            launch: input.poll_launch(),
        };

        let stage_before = self.state.stage_index;
        tick::tick(&mut self.state, &tick_input, dt);
        if self.state.stage_index != stage_before {
            log::info!(
                "stage up: {} -> {} ({})",
                stage_before,
                self.state.stage_index,
                self.stage().background
            );
        }
    }

    /// Host launch affordance (e.g. an on-screen button). No-op unless
    /// running and a serve is pending.
    pub fn request_launch(&mut self) {
        tick::try_launch(&mut self.state);
    }

    /// Events since the last drain, in emission order
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }

    // === Read-only accessors for collaborators ===

    pub fn running(&self) -> bool {
        self.state.running
    }

    pub fn player_score(&self) -> u32 {
        self.state.player_score
    }

    pub fn ai_score(&self) -> u32 {
        self.state.ai_score
    }

    pub fn stage_index(&self) -> usize {
        self.state.stage_index
    }

    /// The active stage's multipliers and appearance keys
    pub fn stage(&self) -> &'static Stage {
        &STAGES[self.state.stage_index]
    }

    pub fn ball(&self) -> &Ball {
        &self.state.ball
    }

    pub fn ball_state(&self) -> BallState {
        self.state.ball.state
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        self.state.paddle(side)
    }

    pub fn court(&self) -> &Court {
        &self.state.court
    }

    pub fn time_ticks(&self) -> u64 {
        self.state.time_ticks
    }

    /// Direct state access for save/replay hosts
    pub fn state(&self) -> &GameState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{IdleInput, ScriptedInput};

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn update_before_start_is_noop() {
        let mut session = GameSession::new(Court::default(), Tuning::default(), 1);
        let mut input = IdleInput;
        session.update(DT, &mut input);
        assert_eq!(session.time_ticks(), 0);
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn request_launch_only_fires_while_running() {
        let mut session = GameSession::new(Court::default(), Tuning::default(), 1);
        session.request_launch();
        assert!(matches!(
            session.ball_state(),
            BallState::WaitingToLaunch { .. }
        ));

        session.start();
        session.request_launch();
        assert_eq!(session.ball_state(), BallState::Live);
    }

    #[test]
    fn launch_press_reaches_the_sim() {
        let mut session = GameSession::new(Court::default(), Tuning::default(), 8);
        session.start();

        let mut input = ScriptedInput::new();
        input.press_launch();
        session.update(DT, &mut input);

        assert_eq!(session.ball_state(), BallState::Live);
        let events = session.drain_events();
        assert!(events.contains(&GameEvent::SessionStarted));
        assert!(events.contains(&GameEvent::Launched));
    }

    #[test]
    fn stop_then_start_resets_state() {
        let mut session = GameSession::new(Court::default(), Tuning::default(), 3);
        session.start();
        session.request_launch();
        session.stop();
        assert!(!session.running());

        // Frozen while stopped
        let mut input = IdleInput;
        let ticks = session.time_ticks();
        session.update(DT, &mut input);
        assert_eq!(session.time_ticks(), ticks);

        session.start();
        assert!(session.running());
        assert_eq!(session.player_score(), 0);
        assert!(matches!(
            session.ball_state(),
            BallState::WaitingToLaunch { .. }
        ));
    }

    #[test]
    fn stage_accessor_tracks_index() {
        let session = GameSession::new(Court::default(), Tuning::default(), 3);
        assert_eq!(session.stage().background, "grid");
        assert_eq!(session.stage().ball_appearance, "plain");
    }
}
