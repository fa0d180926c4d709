//! Stage table - difficulty tiers unlocked by score thresholds
//!
//! Stages are static data: the sim only stores an index into this table,
//! and the render collaborator resolves the appearance keys to assets.

/// A difficulty tier with its own speed multipliers and visual theme
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stage {
    /// Either side's score reaching this unlocks the stage
    pub score_threshold: u32,
    /// Background texture key for the render collaborator
    pub background: &'static str,
    /// Ball appearance key for the render collaborator
    pub ball_appearance: &'static str,
    pub ai_speed_multiplier: f32,
    pub ball_speed_multiplier: f32,
}

/// Ordered stage table; `GameState::stage_index` always indexes into this
pub const STAGES: &[Stage] = &[
    Stage {
        score_threshold: 0,
        background: "grid",
        ball_appearance: "plain",
        ai_speed_multiplier: 1.0,
        ball_speed_multiplier: 1.0,
    },
    Stage {
        score_threshold: 3,
        background: "space",
        ball_appearance: "metal",
        ai_speed_multiplier: 1.1,
        ball_speed_multiplier: 1.1,
    },
    Stage {
        score_threshold: 7,
        background: "circuit",
        ball_appearance: "fire",
        ai_speed_multiplier: 1.25,
        ball_speed_multiplier: 1.2,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_strictly_increasing() {
        for pair in STAGES.windows(2) {
            assert!(pair[0].score_threshold < pair[1].score_threshold);
        }
    }

    #[test]
    fn first_stage_is_unlocked_at_zero() {
        assert_eq!(STAGES[0].score_threshold, 0);
        assert_eq!(STAGES[0].ball_speed_multiplier, 1.0);
        assert_eq!(STAGES[0].ai_speed_multiplier, 1.0);
    }
}
