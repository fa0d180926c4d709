//! Joy Pong - a two-paddle arcade volley game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `session`: Host-facing game session controller
//! - `input`: Polled joystick/launch input seam
//! - `audio`: Sound-effect events for the host audio collaborator
//! - `tuning`: Data-driven game balance
//!
//! Rendering, audio playback and touch handling are host concerns; the
//! crate only exposes read-only state and fire-and-forget sound events.

pub mod audio;
pub mod input;
pub mod session;
pub mod sim;
pub mod tuning;

pub use audio::{AudioSink, NullAudio, RecordingAudio, SoundEffect};
pub use input::{IdleInput, InputProvider, ScriptedInput};
pub use session::GameSession;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Court dimensions in simulation units (16:9); the renderer scales
    /// this space to the viewport
    pub const COURT_WIDTH: f32 = 800.0;
    pub const COURT_HEIGHT: f32 = 450.0;

    /// Paddle defaults
    pub const PADDLE_HALF_WIDTH: f32 = 10.0;
    pub const PADDLE_HALF_HEIGHT: f32 = 45.0;
    /// Paddle center distance from its own goal edge (1.5 paddle widths)
    pub const PADDLE_INSET: f32 = 30.0;
    /// Player paddle travel speed at full joystick deflection
    pub const PLAYER_PADDLE_SPEED: f32 = 360.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_BASE_SPEED: f32 = 300.0;

    /// AI paddle base speed
    pub const AI_BASE_SPEED: f32 = 240.0;
    /// Tracking error band below which the AI paddle holds still
    pub const AI_DEAD_ZONE: f32 = 5.0;

    /// Serve cone half-angle (radians, 30 degrees)
    pub const LAUNCH_ANGLE_MAX: f32 = std::f32::consts::FRAC_PI_6;
    /// Fraction of ball speed added per unit of paddle hit offset
    pub const DEFLECT_FACTOR: f32 = 0.7;
    /// Speed cap after a paddle hit, relative to the stage ball speed
    pub const MAX_SPEED_FACTOR: f32 = 1.5;
    /// Gap left between ball and paddle face after contact correction
    pub const CONTACT_EPSILON: f32 = 0.01;

    /// Largest delta-time one update will integrate (tab-suspend guard)
    pub const MAX_DT: f32 = 0.1;
}
