//! The owning game state: one struct holds everything a run mutates.
//!
//! No module-level globals anywhere. Nothing is shared across runs either:
//! a reset rebuilds the player and empties the obstacle set.

use super::config::{ConfigError, GameConfig, GameMode};
use super::obstacle::Obstacle;
use super::player::Player;
use super::progress::ProgressTracker;
use super::spawner::Spawner;
use serde::{Deserialize, Serialize};

/// Terminal result of a level run. Endless runs never set one; they reset
/// transparently on collision and keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    /// Reached the end of the level.
    Cleared,
    /// Hit an obstacle (level mode only; requires an explicit restart).
    Crashed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub spawner: Spawner,
    pub progress: ProgressTracker,
    /// `None` while running. Steps are no-ops once this is set.
    pub outcome: Option<RunOutcome>,
    /// Total steps since construction. Survives resets; the UI uses it for
    /// animation phase.
    pub step_count: u64,

    /// Completed/crashed run count this session (transient).
    #[serde(skip)]
    pub crashes: u32,
    /// Longest distance reached before a crash this session (transient).
    #[serde(skip)]
    pub best_distance: f64,
    /// Sub-step time carried between frames (transient).
    #[serde(skip)]
    pub accumulated_ms: u64,
}

impl GameState {
    /// Build a fresh run. Rejects out-of-range configuration up front; the
    /// simulation itself has no failure modes after this point.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let player = Player::new(&config);
        let spawner = Spawner::new(&config);
        let progress = ProgressTracker::new(&config);
        Ok(Self {
            config,
            player,
            obstacles: Vec::new(),
            spawner,
            progress,
            outcome: None,
            step_count: 0,
            crashes: 0,
            best_distance: 0.0,
            accumulated_ms: 0,
        })
    }

    pub fn is_running(&self) -> bool {
        self.outcome.is_none()
    }

    pub fn is_level_mode(&self) -> bool {
        matches!(self.config.mode, GameMode::Level { .. })
    }

    /// Input boundary for the single discrete jump command. Ignored once a
    /// terminal outcome is set; only restart acts then.
    pub fn request_jump(&mut self) {
        if self.is_running() {
            self.player.request_jump();
        }
    }

    /// The explicit restart command: rebuild the run, clear any terminal
    /// outcome, and drop banked sub-step time so the new run does not open
    /// with catch-up steps.
    pub fn restart(&mut self) {
        self.reset_run();
        self.outcome = None;
        self.accumulated_ms = 0;
    }

    /// Reset semantics shared by restart and the endless transparent reset:
    /// player back to its defaults, obstacle set emptied, distance and
    /// spawn countdown zeroed. Idempotent, no other side effects.
    pub(crate) fn reset_run(&mut self) {
        self.player = Player::new(&self.config);
        self.obstacles.clear();
        self.spawner.reset();
        self.progress.reset();
    }

    /// Record a crash for the session tally before the run is torn down.
    pub(crate) fn note_crash(&mut self) {
        self.crashes += 1;
        if self.progress.distance() > self.best_distance {
            self.best_distance = self.progress.distance();
        }
    }
}
