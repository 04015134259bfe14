//! Dasher - Terminal Side-Scrolling Runner
//!
//! This module exposes the game core for testing and external use.

pub mod core;
pub mod simulator;
pub mod ui;

pub use self::core::config::{ConfigError, GameConfig, GameMode};
pub use self::core::game_state::{GameState, RunOutcome};
pub use self::core::tick::{TickEvent, TickResult};
