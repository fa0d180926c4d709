//! Joy Pong headless demo driver
//!
//! Runs a scripted session against the AI and logs what happens. Stands
//! in for the browser host loop during native development; the web host
//! drives [`joy_pong::GameSession`] the same way from its frame callback.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use joy_pong::audio::{AudioSink, RecordingAudio, SoundEffect};
    use joy_pong::input::ScriptedInput;
    use joy_pong::session::GameSession;
    use joy_pong::sim::state::{BallState, Court, Side};
    use joy_pong::tuning::Tuning;

    env_logger::init();
    log::info!("Joy Pong (headless) starting...");

    let mut session = GameSession::new(Court::default(), Tuning::default(), 0xC0FFEE);
    let mut input = ScriptedInput::new();
    let mut audio = RecordingAudio::default();

    session.start();
    input.press_launch();

    let dt = 1.0 / 60.0;
    for frame in 0u32..60 * 60 {
        // Stand-in player: chase the ball, saturating well before full
        // deflection so the AI can still win points
        let ball_y = session.ball().pos.y;
        let paddle_y = session.paddle(Side::Player).pos.y;
        input.control = ((ball_y - paddle_y) / 30.0).clamp(-1.0, 1.0);

        session.update(dt, &mut input);
        for event in session.drain_events() {
            log::debug!("frame {frame}: {event:?}");
            audio.play(SoundEffect::from_event(&event));
        }

        // Re-serve half a second after each goal
        if matches!(session.ball_state(), BallState::WaitingToLaunch { .. })
            && frame.is_multiple_of(30)
        {
            input.press_launch();
        }
    }

    log::info!(
        "final score {} : {} on stage {} ({} sound cues)",
        session.player_score(),
        session.ai_score(),
        session.stage_index(),
        audio.played.len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The web host drives the session from its own entry point
}
