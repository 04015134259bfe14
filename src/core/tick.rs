//! Per-step orchestration: physics, spawning, scrolling, collision,
//! progress.
//!
//! [`step`] runs one fixed simulation step and returns the events it
//! produced so the presentation layer can react (particle bursts, log
//! lines, overlays) without game logic depending on any UI types.
//! [`advance`] wraps it in a real-time accumulator so rendering frame rate
//! never changes physics results.

use super::constants::{MAX_FRAME_MS, STEP_MS};
use super::game_state::{GameState, RunOutcome};
use super::geometry::first_hit;
use super::obstacle::{self, Obstacle};

/// A single event produced by a simulation step, in chronological order.
#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    /// A jump fired (grounded, coyote or buffered). Carries the launch
    /// point so the UI can spawn its cosmetic particle burst there.
    Jumped { x: f64, y: f64 },

    /// The spawner emitted a new obstacle off-screen right.
    ObstacleSpawned { x: f64, height: f64 },

    /// The player overlapped an obstacle. Carries the obstacle for
    /// deterministic assertions and for the UI's crash flash.
    Crashed { obstacle: Obstacle },

    /// An endless run was torn down and rebuilt after a crash.
    RunReset,

    /// The level's completion percentage first reached 100. Emitted at
    /// most once per run.
    LevelCleared,
}

/// Everything that happened while advancing one frame's worth of time.
#[derive(Debug, Clone, Default)]
pub struct TickResult {
    /// Events across all steps run this frame, in order.
    pub events: Vec<TickEvent>,
    /// Fixed steps actually executed.
    pub steps: u32,
}

/// Advance the simulation by `dt_ms` of real time, running whole fixed
/// steps and carrying the remainder. A single frame's delta is clamped so
/// a stall (debugger, terminal suspend) cannot avalanche physics.
pub fn advance(state: &mut GameState, dt_ms: u64) -> TickResult {
    let mut result = TickResult::default();
    if !state.is_running() {
        return result;
    }

    state.accumulated_ms += dt_ms.min(MAX_FRAME_MS);
    while state.accumulated_ms >= STEP_MS {
        state.accumulated_ms -= STEP_MS;
        result.events.extend(step(state));
        result.steps += 1;

        if !state.is_running() {
            break;
        }
    }
    result
}

/// Run exactly one simulation step. No-op once a terminal outcome is set.
///
/// Order per the canonical control flow: physics body, spawner, obstacle
/// scroll + prune, collision, then progress. On a hit, endless runs reset
/// transparently and the step ends; level runs become `Crashed`.
pub fn step(state: &mut GameState) -> Vec<TickEvent> {
    if !state.is_running() {
        return Vec::new();
    }
    state.step_count += 1;
    let mut events = Vec::new();

    // 1. Physics body
    if state.player.step() {
        events.push(TickEvent::Jumped {
            x: state.player.x + state.player.size / 2.0,
            y: state.player.y + state.player.size,
        });
    }

    // 2. Spawner
    if let Some(spawned) = state.spawner.maybe_spawn() {
        events.push(TickEvent::ObstacleSpawned {
            x: spawned.x,
            height: spawned.height,
        });
        state.obstacles.push(spawned);
    }

    // 3. Scroll and prune the obstacle set
    obstacle::scroll(&mut state.obstacles, state.config.scroll_speed);
    obstacle::prune(&mut state.obstacles);

    // 4. Collision
    let body = state.player.hitbox();
    if let Some(index) = first_hit(&body, state.obstacles.iter().map(|o| o.hitbox())) {
        let hit = state.obstacles[index];
        events.push(TickEvent::Crashed { obstacle: hit });
        state.note_crash();

        if state.is_level_mode() {
            state.outcome = Some(RunOutcome::Crashed);
        } else {
            state.reset_run();
            events.push(TickEvent::RunReset);
        }
        return events;
    }

    // 5. Progress (and level completion, exactly once)
    if state.progress.update(state.config.scroll_speed) {
        state.outcome = Some(RunOutcome::Cleared);
        events.push(TickEvent::LevelCleared);
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{GameConfig, GameMode};
    use crate::core::constants::{SPAWN_INTERVAL_STEPS, SPAWN_X, STEP_MS};

    fn run_steps(state: &mut GameState, n: u32) -> Vec<TickEvent> {
        let mut events = Vec::new();
        for _ in 0..n {
            events.extend(step(state));
        }
        events
    }

    #[test]
    fn test_step_increments_counter_and_distance() {
        let mut state = GameState::new(GameConfig::endless()).unwrap();
        step(&mut state);
        assert_eq!(state.step_count, 1);
        assert_eq!(state.progress.distance(), state.config.scroll_speed);
    }

    #[test]
    fn test_first_obstacle_spawns_on_interval() {
        let mut state = GameState::new(GameConfig::endless()).unwrap();
        let events = run_steps(&mut state, SPAWN_INTERVAL_STEPS);
        let spawns: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, TickEvent::ObstacleSpawned { .. }))
            .collect();
        assert_eq!(spawns.len(), 1);
        assert_eq!(state.obstacles.len(), 1);
        // Spawned at SPAWN_X, then scrolled once on the same step
        assert_eq!(state.obstacles[0].x, SPAWN_X - state.config.scroll_speed);
    }

    #[test]
    fn test_obstacles_translate_left_each_step() {
        let mut state = GameState::new(GameConfig::endless()).unwrap();
        run_steps(&mut state, SPAWN_INTERVAL_STEPS);
        let x_before = state.obstacles[0].x;
        step(&mut state);
        assert_eq!(state.obstacles[0].x, x_before - state.config.scroll_speed);
    }

    #[test]
    fn test_endless_crash_resets_transparently() {
        let mut state = GameState::new(GameConfig::endless()).unwrap();
        // Plant an obstacle on top of the player
        state.obstacles.push(Obstacle::new(state.player.x, 40.0));

        let events = step(&mut state);

        assert!(events
            .iter()
            .any(|e| matches!(e, TickEvent::Crashed { .. })));
        assert!(events.iter().any(|e| matches!(e, TickEvent::RunReset)));
        assert!(state.is_running(), "endless mode never goes terminal");
        assert!(state.obstacles.is_empty());
        assert_eq!(state.progress.distance(), 0.0);
        assert_eq!(state.crashes, 1);
    }

    #[test]
    fn test_level_crash_is_terminal_until_restart() {
        let mut state = GameState::new(GameConfig::level()).unwrap();
        state.obstacles.push(Obstacle::new(state.player.x, 40.0));

        let events = step(&mut state);

        assert!(events
            .iter()
            .any(|e| matches!(e, TickEvent::Crashed { .. })));
        assert_eq!(state.outcome, Some(RunOutcome::Crashed));

        // Further steps are no-ops
        let snapshot = state.clone();
        assert!(step(&mut state).is_empty());
        assert_eq!(state, snapshot);

        state.restart();
        assert!(state.is_running());
    }

    #[test]
    fn test_crashed_event_reports_the_hit_obstacle() {
        let mut state = GameState::new(GameConfig::level()).unwrap();
        let planted = Obstacle::new(state.player.x, 80.0);
        state.obstacles.push(planted);

        let events = step(&mut state);

        let hit = events.iter().find_map(|e| match e {
            TickEvent::Crashed { obstacle } => Some(*obstacle),
            _ => None,
        });
        let hit = hit.expect("crash event");
        assert_eq!(hit.height, planted.height);
        // One step of scroll happened before the collision check
        assert_eq!(hit.x, planted.x - state.config.scroll_speed);
    }

    #[test]
    fn test_level_completion_emits_cleared_once() {
        let config = GameConfig {
            mode: GameMode::Level { length: 120.0 },
            // Keep the course empty so nothing interrupts the run
            spawn_interval_steps: 10_000,
            ..GameConfig::level()
        };
        let mut state = GameState::new(config).unwrap();

        let events = run_steps(&mut state, 100);
        let cleared = events
            .iter()
            .filter(|e| matches!(e, TickEvent::LevelCleared))
            .count();
        assert_eq!(cleared, 1);
        assert_eq!(state.outcome, Some(RunOutcome::Cleared));
    }

    #[test]
    fn test_advance_runs_whole_steps_and_banks_remainder() {
        let mut state = GameState::new(GameConfig::endless()).unwrap();

        let result = advance(&mut state, STEP_MS * 3 + 5);
        assert_eq!(result.steps, 3);
        assert_eq!(state.accumulated_ms, 5);

        // The banked 5ms plus 11ms completes exactly one more step
        let result = advance(&mut state, STEP_MS - 5);
        assert_eq!(result.steps, 1);
        assert_eq!(state.accumulated_ms, 0);
    }

    #[test]
    fn test_advance_clamps_runaway_frames() {
        let mut state = GameState::new(GameConfig::endless()).unwrap();
        let result = advance(&mut state, 10_000);
        assert_eq!(result.steps as u64, MAX_FRAME_MS / STEP_MS);
    }

    #[test]
    fn test_advance_stops_at_terminal_outcome() {
        let mut state = GameState::new(GameConfig::level()).unwrap();
        state.obstacles.push(Obstacle::new(state.player.x, 40.0));

        let result = advance(&mut state, MAX_FRAME_MS);

        assert_eq!(result.steps, 1, "no steps run after the crash");
        assert_eq!(state.outcome, Some(RunOutcome::Crashed));
        assert!(advance(&mut state, MAX_FRAME_MS).events.is_empty());
    }

    #[test]
    fn test_jump_event_carries_launch_point() {
        let mut state = GameState::new(GameConfig::endless()).unwrap();
        state.request_jump();
        let events = step(&mut state);
        match events.as_slice() {
            [TickEvent::Jumped { x, y }] => {
                assert_eq!(*x, state.player.x + state.player.size / 2.0);
                assert_eq!(*y, state.player.y + state.player.size);
            }
            other => panic!("expected a single Jumped event, got {:?}", other),
        }
    }
}
