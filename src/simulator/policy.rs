//! Scripted jump policies for headless runs.

use crate::core::game_state::GameState;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// How the simulated player decides to press jump.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum JumpPolicy {
    /// Never press. Baseline for crash pacing.
    Never,
    /// Press whenever the nearest obstacle ahead is within `distance` px of
    /// the player's leading edge.
    Threshold { distance: f64 },
    /// Threshold with a per-step reaction wobble of up to `jitter` px in
    /// either direction. Approximates human timing error; needs an RNG,
    /// seeded by the runner for reproducibility.
    Jittered { distance: f64, jitter: f64 },
}

impl JumpPolicy {
    /// Decide whether to press jump before the next step.
    pub fn wants_jump<R: Rng>(&self, state: &GameState, rng: &mut R) -> bool {
        let reach = match self {
            Self::Never => return false,
            Self::Threshold { distance } => *distance,
            Self::Jittered { distance, jitter } => distance + rng.gen_range(-*jitter..=*jitter),
        };
        match nearest_gap(state) {
            Some(gap) => gap <= reach,
            None => false,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Never => "never".to_string(),
            Self::Threshold { distance } => format!("threshold({}px)", distance),
            Self::Jittered { distance, jitter } => {
                format!("jittered({}px +/- {}px)", distance, jitter)
            }
        }
    }
}

/// Distance from the player's leading edge to the nearest obstacle that has
/// not yet passed it. `None` when the track ahead is clear.
fn nearest_gap(state: &GameState) -> Option<f64> {
    let front = state.player.x + state.player.size;
    state
        .obstacles
        .iter()
        .filter(|o| o.x + o.width > front)
        .map(|o| o.x - front)
        .min_by(|a, b| a.partial_cmp(b).expect("gaps are finite"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use crate::core::obstacle::Obstacle;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn test_never_policy_never_presses() {
        let mut state = GameState::new(GameConfig::endless()).unwrap();
        state.obstacles.push(Obstacle::new(200.0, 40.0));
        assert!(!JumpPolicy::Never.wants_jump(&state, &mut test_rng()));
    }

    #[test]
    fn test_threshold_presses_inside_reach_only() {
        let mut state = GameState::new(GameConfig::endless()).unwrap();
        let policy = JumpPolicy::Threshold { distance: 90.0 };
        assert!(
            !policy.wants_jump(&state, &mut test_rng()),
            "clear track, no press"
        );

        let front = state.player.x + state.player.size;
        state.obstacles.push(Obstacle::new(front + 200.0, 40.0));
        assert!(!policy.wants_jump(&state, &mut test_rng()));

        state.obstacles.push(Obstacle::new(front + 60.0, 40.0));
        assert!(policy.wants_jump(&state, &mut test_rng()));
    }

    #[test]
    fn test_threshold_ignores_passed_obstacles() {
        let mut state = GameState::new(GameConfig::endless()).unwrap();
        let policy = JumpPolicy::Threshold { distance: 90.0 };
        // Behind the player entirely
        state.obstacles.push(Obstacle::new(50.0, 40.0));
        assert!(!policy.wants_jump(&state, &mut test_rng()));
    }

    #[test]
    fn test_jittered_is_deterministic_per_seed() {
        let mut state = GameState::new(GameConfig::endless()).unwrap();
        let front = state.player.x + state.player.size;
        state.obstacles.push(Obstacle::new(front + 95.0, 40.0));
        let policy = JumpPolicy::Jittered {
            distance: 90.0,
            jitter: 25.0,
        };

        let decisions_a: Vec<bool> = {
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            (0..20).map(|_| policy.wants_jump(&state, &mut rng)).collect()
        };
        let decisions_b: Vec<bool> = {
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            (0..20).map(|_| policy.wants_jump(&state, &mut rng)).collect()
        };
        assert_eq!(decisions_a, decisions_b);
    }
}
