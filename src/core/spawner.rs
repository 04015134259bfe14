//! Step-counted obstacle spawning.
//!
//! The spawner runs on the same step counter as physics, not on a separate
//! wall-clock timer, so spawn order is deterministic relative to everything
//! else in the simulation. A countdown starts at the configured interval:
//! the first obstacle appears exactly `interval` steps into a run, and
//! after D steps exactly `floor(D / interval)` obstacles have been emitted.

use super::config::GameConfig;
use super::constants::SPAWN_X;
use super::obstacle::Obstacle;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spawner {
    interval: u32,
    countdown: u32,
    heights: Vec<f64>,
    spawned: u64,
}

impl Spawner {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            interval: config.spawn_interval_steps,
            countdown: config.spawn_interval_steps,
            heights: config.obstacle_heights.clone(),
            spawned: 0,
        }
    }

    /// Called once per step. Emits one obstacle each time the countdown
    /// elapses; heights cycle through the configured list in order.
    /// Spawning always succeeds.
    pub fn maybe_spawn(&mut self) -> Option<Obstacle> {
        self.countdown -= 1;
        if self.countdown > 0 {
            return None;
        }
        self.countdown = self.interval;

        let height = self.heights[self.spawned as usize % self.heights.len()];
        self.spawned += 1;
        Some(Obstacle::new(SPAWN_X, height))
    }

    /// Total obstacles emitted since the last reset.
    pub fn spawned(&self) -> u64 {
        self.spawned
    }

    /// Restart the countdown and the height cycle.
    pub fn reset(&mut self) {
        self.countdown = self.interval;
        self.spawned = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawner_with_interval(interval: u32) -> Spawner {
        Spawner::new(&GameConfig {
            spawn_interval_steps: interval,
            ..GameConfig::endless()
        })
    }

    #[test]
    fn test_first_spawn_lands_on_interval_boundary() {
        let mut spawner = spawner_with_interval(10);
        for step in 1..=9 {
            assert!(spawner.maybe_spawn().is_none(), "no spawn at step {}", step);
        }
        assert!(spawner.maybe_spawn().is_some(), "spawn exactly at step 10");
    }

    #[test]
    fn test_spawn_count_is_floor_of_steps_over_interval() {
        // Convention pinned here: first spawn at step == interval, so after
        // D steps the count is floor(D / interval).
        let mut spawner = spawner_with_interval(120);
        let mut count = 0u64;
        for _ in 0..1000 {
            if spawner.maybe_spawn().is_some() {
                count += 1;
            }
        }
        assert_eq!(count, 1000 / 120);
        assert_eq!(spawner.spawned(), count);
    }

    #[test]
    fn test_spawns_at_offscreen_x() {
        let mut spawner = spawner_with_interval(1);
        let obstacle = spawner.maybe_spawn().expect("interval 1 spawns each step");
        assert_eq!(obstacle.x, SPAWN_X);
    }

    #[test]
    fn test_heights_cycle_in_order() {
        let mut spawner = Spawner::new(&GameConfig {
            spawn_interval_steps: 1,
            obstacle_heights: vec![40.0, 60.0, 80.0],
            ..GameConfig::endless()
        });
        let heights: Vec<f64> = (0..7)
            .map(|_| spawner.maybe_spawn().unwrap().height)
            .collect();
        assert_eq!(heights, vec![40.0, 60.0, 80.0, 40.0, 60.0, 80.0, 40.0]);
    }

    #[test]
    fn test_reset_restarts_countdown_and_cycle() {
        let mut spawner = Spawner::new(&GameConfig {
            spawn_interval_steps: 5,
            obstacle_heights: vec![40.0, 60.0],
            ..GameConfig::endless()
        });
        for _ in 0..5 {
            spawner.maybe_spawn();
        }
        assert_eq!(spawner.spawned(), 1);

        spawner.reset();
        assert_eq!(spawner.spawned(), 0);
        for step in 1..=4 {
            assert!(
                spawner.maybe_spawn().is_none(),
                "countdown restarted, step {}",
                step
            );
        }
        let obstacle = spawner.maybe_spawn().expect("spawn after full interval");
        assert_eq!(obstacle.height, 40.0, "height cycle restarted");
    }
}
