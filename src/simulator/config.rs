//! Simulation configuration.

use super::policy::JumpPolicy;

/// Configuration for a batch of simulated runs.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of runs to perform
    pub num_runs: u32,

    /// Random seed for reproducibility (None = entropy; only the jittered
    /// policy consumes randomness)
    pub seed: Option<u64>,

    /// Maximum steps per run before the run is cut off
    pub max_steps_per_run: u64,

    /// Run the fixed-length level course instead of endless play
    pub level_mode: bool,

    /// How the simulated player presses jump
    pub policy: JumpPolicy,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per-run lines)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 50,
            seed: None,
            max_steps_per_run: 20_000,
            level_mode: false,
            policy: JumpPolicy::Threshold { distance: 90.0 },
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for endless survival pacing.
    pub fn endless_survival(num_runs: u32) -> Self {
        Self {
            num_runs,
            ..Default::default()
        }
    }

    /// Quick config for level clearance: can a well-timed press clear the
    /// full height cycle before the finish line?
    pub fn level_clearance(num_runs: u32) -> Self {
        Self {
            num_runs,
            level_mode: true,
            policy: JumpPolicy::Threshold { distance: 78.0 },
            ..Default::default()
        }
    }

    /// Quick config for human-like timing error on the level course.
    pub fn level_jitter(num_runs: u32) -> Self {
        Self {
            num_runs,
            level_mode: true,
            policy: JumpPolicy::Jittered {
                distance: 85.0,
                jitter: 25.0,
            },
            ..Default::default()
        }
    }
}
