//! Batch runner driving the real game core with scripted input.

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::core::config::GameConfig;
use crate::core::game_state::{GameState, RunOutcome};
use crate::core::tick::{step, TickEvent};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Run the full batch and return an aggregate report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed + run_idx as u64),
            None => ChaCha8Rng::from_entropy(),
        };

        let stats = simulate_single_run(config, &mut rng);

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - {} steps, {} crashes, {} jumps, distance {:.0}{}",
                run_idx + 1,
                config.num_runs,
                stats.steps,
                stats.crashes,
                stats.jumps,
                stats.final_distance,
                if stats.cleared { ", CLEARED" } else { "" }
            );
        }

        all_runs.push(stats);
    }

    SimReport::from_runs(all_runs, config.policy.describe(), config.level_mode)
}

/// Simulate one run to its terminal outcome or the step cutoff.
fn simulate_single_run(config: &SimConfig, rng: &mut ChaCha8Rng) -> RunStats {
    let game_config = if config.level_mode {
        GameConfig::level()
    } else {
        GameConfig::endless()
    };
    let mut state = GameState::new(game_config).expect("preset configs are valid");
    let mut stats = RunStats::default();

    while stats.steps < config.max_steps_per_run && state.is_running() {
        if config.policy.wants_jump(&state, rng) {
            state.request_jump();
        }

        let events = step(&mut state);
        stats.steps += 1;

        for event in &events {
            match event {
                TickEvent::Jumped { .. } => stats.jumps += 1,
                TickEvent::ObstacleSpawned { .. } => stats.obstacles_spawned += 1,
                TickEvent::Crashed { .. } => stats.crashes += 1,
                TickEvent::RunReset | TickEvent::LevelCleared => {}
            }
        }
    }

    stats.cleared = state.outcome == Some(RunOutcome::Cleared);
    stats.final_distance = state.progress.distance();
    stats.best_distance = state.best_distance.max(state.progress.distance());
    stats
}
