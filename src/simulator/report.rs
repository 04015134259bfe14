//! Simulation report generation.

use serde::Serialize;

/// Statistics from a single simulated run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunStats {
    /// Steps executed before the run ended or was cut off.
    pub steps: u64,
    /// Collisions (endless runs keep going; each reset counts one).
    pub crashes: u32,
    /// Jumps that actually fired.
    pub jumps: u64,
    /// Obstacles emitted by the spawner.
    pub obstacles_spawned: u64,
    /// Reached the finish line (level mode only).
    pub cleared: bool,
    /// Distance at the end of the run.
    pub final_distance: f64,
    /// Longest distance reached before any crash.
    pub best_distance: f64,
}

/// Aggregated results from a batch of runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub policy: String,
    pub level_mode: bool,

    pub total_crashes: u64,
    pub avg_crashes: f64,
    pub avg_jumps: f64,
    pub avg_steps: f64,
    pub avg_final_distance: f64,
    pub best_distance: f64,
    /// Fraction of runs that reached the finish line (level mode).
    pub clear_rate: f64,
    /// Mean steps survived per crash, over runs that crashed at all.
    pub avg_steps_per_crash: f64,

    pub runs: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>, policy: String, level_mode: bool) -> Self {
        let num_runs = runs.len() as u32;
        let denom = num_runs.max(1) as f64;

        let total_crashes: u64 = runs.iter().map(|r| r.crashes as u64).sum();
        let total_steps: u64 = runs.iter().map(|r| r.steps).sum();
        let avg_crashes = total_crashes as f64 / denom;
        let avg_jumps = runs.iter().map(|r| r.jumps as f64).sum::<f64>() / denom;
        let avg_steps = total_steps as f64 / denom;
        let avg_final_distance = runs.iter().map(|r| r.final_distance).sum::<f64>() / denom;
        let best_distance = runs.iter().map(|r| r.best_distance).fold(0.0, f64::max);
        let cleared = runs.iter().filter(|r| r.cleared).count();
        let clear_rate = cleared as f64 / denom;
        let avg_steps_per_crash = if total_crashes > 0 {
            total_steps as f64 / total_crashes as f64
        } else {
            0.0
        };

        Self {
            num_runs,
            policy,
            level_mode,
            total_crashes,
            avg_crashes,
            avg_jumps,
            avg_steps,
            avg_final_distance,
            best_distance,
            clear_rate,
            avg_steps_per_crash,
            runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════\n");
        report.push_str("              SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Mode: {}    Policy: {}\n",
            if self.level_mode { "level" } else { "endless" },
            self.policy
        ));
        report.push_str(&format!("Runs: {}\n\n", self.num_runs));

        report.push_str(&format!(
            "Crashes: {} total ({:.2} avg/run)\n",
            self.total_crashes, self.avg_crashes
        ));
        if self.total_crashes > 0 {
            report.push_str(&format!(
                "Steps per crash: {:.0}\n",
                self.avg_steps_per_crash
            ));
        }
        report.push_str(&format!("Jumps: {:.1} avg/run\n", self.avg_jumps));
        report.push_str(&format!(
            "Distance: {:.0} avg final, {:.0} session best\n",
            self.avg_final_distance, self.best_distance
        ));
        if self.level_mode {
            report.push_str(&format!(
                "Level cleared: {:.0}% of runs\n",
                self.clear_rate * 100.0
            ));
        }

        report
    }

    /// Serialize the full report, per-run stats included.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
