//! Headless balance simulator.
//!
//! Runs many scripted playthroughs of the real game core to answer pacing
//! questions: how long does an unassisted run survive, which jump timings
//! clear which obstacle heights, how often does a jittery press crash on
//! the tall course blocks. The simulator drives the exact same step
//! function as the interactive game, so its numbers match real play.

mod config;
mod policy;
mod report;
mod runner;

pub use config::SimConfig;
pub use policy::JumpPolicy;
pub use report::{RunStats, SimReport};
pub use runner::run_simulation;
