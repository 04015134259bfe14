//! Distance accumulation and level completion.

use super::config::{GameConfig, GameMode};
use serde::{Deserialize, Serialize};

/// Tracks how far the run has scrolled. In level mode the distance maps to
/// a 0-100 completion percentage against the level length; endless runs
/// only ever report raw distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressTracker {
    distance: f64,
    level_length: Option<f64>,
    completed: bool,
}

impl ProgressTracker {
    pub fn new(config: &GameConfig) -> Self {
        let level_length = match config.mode {
            GameMode::Level { length } => Some(length),
            GameMode::Endless => None,
        };
        Self {
            distance: 0.0,
            level_length,
            completed: false,
        }
    }

    /// Add one step of travel. Returns true exactly once, on the step the
    /// completion percentage first reaches 100 (level mode only).
    pub fn update(&mut self, scroll_speed: f64) -> bool {
        self.distance += scroll_speed;
        if self.completed {
            return false;
        }
        if let Some(percent) = self.percent() {
            if percent >= 100 {
                self.completed = true;
                return true;
            }
        }
        false
    }

    /// Cumulative distance traveled this run. Monotonically non-decreasing
    /// between resets.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Completion percentage, `floor(min(100, distance / length * 100))`.
    /// `None` in endless mode, which has no finish line.
    pub fn percent(&self) -> Option<u8> {
        self.level_length
            .map(|length| (self.distance / length * 100.0).min(100.0).floor() as u8)
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    pub fn reset(&mut self) {
        self.distance = 0.0;
        self.completed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level_tracker(length: f64) -> ProgressTracker {
        ProgressTracker::new(&GameConfig {
            mode: GameMode::Level { length },
            ..GameConfig::level()
        })
    }

    #[test]
    fn test_percent_matches_closed_form() {
        // levelLength=5000, scrollSpeed=6: after n steps the percentage is
        // floor(min(100, 6n/5000*100)).
        let mut tracker = level_tracker(5000.0);
        for n in 1..=1000u32 {
            tracker.update(6.0);
            let expected = ((6.0 * n as f64) / 5000.0 * 100.0).min(100.0).floor() as u8;
            assert_eq!(tracker.percent(), Some(expected), "step {}", n);
        }
    }

    #[test]
    fn test_completion_fires_exactly_once() {
        let mut tracker = level_tracker(5000.0);
        let mut completions = 0;
        for _ in 0..2000 {
            if tracker.update(6.0) {
                completions += 1;
            }
        }
        assert_eq!(completions, 1);
        assert!(tracker.is_complete());
        assert_eq!(tracker.percent(), Some(100));
    }

    #[test]
    fn test_completion_on_first_step_reaching_100() {
        let mut tracker = level_tracker(5000.0);
        // 5000 / 6 = 833.33..., so completion lands on step 834.
        for _ in 0..833 {
            assert!(!tracker.update(6.0));
        }
        assert!(tracker.update(6.0));
    }

    #[test]
    fn test_endless_mode_has_no_percentage() {
        let mut tracker = ProgressTracker::new(&GameConfig::endless());
        for _ in 0..100_000 {
            assert!(!tracker.update(6.0));
        }
        assert_eq!(tracker.percent(), None);
        assert!(!tracker.is_complete());
        assert_eq!(tracker.distance(), 600_000.0);
    }

    #[test]
    fn test_distance_is_monotonic() {
        let mut tracker = level_tracker(5000.0);
        let mut last = tracker.distance();
        for _ in 0..1000 {
            tracker.update(6.0);
            assert!(tracker.distance() >= last);
            last = tracker.distance();
        }
    }

    #[test]
    fn test_reset_zeroes_distance_and_completion() {
        let mut tracker = level_tracker(100.0);
        while !tracker.update(6.0) {}
        assert!(tracker.is_complete());

        tracker.reset();
        assert_eq!(tracker.distance(), 0.0);
        assert!(!tracker.is_complete());
        assert_eq!(tracker.percent(), Some(0));
    }
}
