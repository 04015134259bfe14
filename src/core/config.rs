//! Game configuration with construction-time validation.

use super::constants::{
    COURSE_HEIGHTS, ENDLESS_HEIGHTS, GRAVITY, JUMP_IMPULSE, LEVEL_LENGTH, SCROLL_SPEED,
    SPAWN_INTERVAL_STEPS,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a run ends.
///
/// `Endless` runs until the process exits; a collision resets the run
/// transparently. `Level` has a finish line and a terminal game-over state
/// that requires an explicit restart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameMode {
    Endless,
    Level { length: f64 },
}

/// Tunable parameters for a run. Invalid values are rejected by
/// [`GameConfig::validate`] before any state is built; the simulation has
/// no other failure modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub mode: GameMode,
    /// Horizontal displacement applied to obstacles each step (px).
    pub scroll_speed: f64,
    /// Downward acceleration per step (px/step^2).
    pub gravity: f64,
    /// Velocity set when a jump fires (negative = upward).
    pub jump_impulse: f64,
    /// Steps between obstacle spawns.
    pub spawn_interval_steps: u32,
    /// Obstacle heights, cycled in order as obstacles spawn.
    pub obstacle_heights: Vec<f64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::endless()
    }
}

impl GameConfig {
    /// Endless play: uniform obstacles, no finish line.
    pub fn endless() -> Self {
        Self {
            mode: GameMode::Endless,
            scroll_speed: SCROLL_SPEED,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            spawn_interval_steps: SPAWN_INTERVAL_STEPS,
            obstacle_heights: ENDLESS_HEIGHTS.to_vec(),
        }
    }

    /// Level play: varied course heights and a fixed finish line.
    pub fn level() -> Self {
        Self {
            mode: GameMode::Level {
                length: LEVEL_LENGTH,
            },
            obstacle_heights: COURSE_HEIGHTS.to_vec(),
            ..Self::endless()
        }
    }

    /// Check every parameter the simulation depends on. Called by
    /// `GameState::new`; callers constructing configs by hand get the same
    /// errors at the same boundary.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scroll_speed <= 0.0 {
            return Err(ConfigError::NonPositiveScrollSpeed(self.scroll_speed));
        }
        if self.gravity <= 0.0 {
            return Err(ConfigError::NonPositiveGravity(self.gravity));
        }
        if self.jump_impulse >= 0.0 {
            return Err(ConfigError::NonNegativeJumpImpulse(self.jump_impulse));
        }
        if self.spawn_interval_steps == 0 {
            return Err(ConfigError::ZeroSpawnInterval);
        }
        if self.obstacle_heights.is_empty() {
            return Err(ConfigError::EmptyHeightCycle);
        }
        if let Some(&h) = self.obstacle_heights.iter().find(|&&h| h <= 0.0) {
            return Err(ConfigError::NonPositiveObstacleHeight(h));
        }
        if let GameMode::Level { length } = self.mode {
            if length <= 0.0 {
                return Err(ConfigError::NonPositiveLevelLength(length));
            }
        }
        Ok(())
    }
}

/// Rejected configuration input.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NonPositiveScrollSpeed(f64),
    NonPositiveGravity(f64),
    NonNegativeJumpImpulse(f64),
    ZeroSpawnInterval,
    EmptyHeightCycle,
    NonPositiveObstacleHeight(f64),
    NonPositiveLevelLength(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveScrollSpeed(v) => {
                write!(f, "scroll speed must be positive, got {}", v)
            }
            Self::NonPositiveGravity(v) => write!(f, "gravity must be positive, got {}", v),
            Self::NonNegativeJumpImpulse(v) => {
                write!(f, "jump impulse must be negative (upward), got {}", v)
            }
            Self::ZeroSpawnInterval => write!(f, "spawn interval must be at least one step"),
            Self::EmptyHeightCycle => write!(f, "obstacle height cycle must not be empty"),
            Self::NonPositiveObstacleHeight(v) => {
                write!(f, "obstacle heights must be positive, got {}", v)
            }
            Self::NonPositiveLevelLength(v) => {
                write!(f, "level length must be positive, got {}", v)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
