//! Obstacles: ground-aligned blocks that scroll toward the player.

use super::constants::{GROUND_Y, OBSTACLE_WIDTH};
use super::geometry::Rect;
use serde::{Deserialize, Serialize};

/// A single obstacle. Width and height never change after creation; only
/// `x` moves, decreasing by the scroll speed every step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub x: f64,
    pub width: f64,
    pub height: f64,
}

impl Obstacle {
    /// A ground-aligned obstacle of the standard width.
    pub fn new(x: f64, height: f64) -> Self {
        Self {
            x,
            width: OBSTACLE_WIDTH,
            height,
        }
    }

    pub fn hitbox(&self) -> Rect {
        Rect::new(self.x, GROUND_Y - self.height, self.width, self.height)
    }

    /// Fully past the left edge of the world.
    pub fn is_offscreen(&self) -> bool {
        self.x + self.width < 0.0
    }
}

/// Translate every obstacle leftward by the scroll speed.
pub fn scroll(obstacles: &mut [Obstacle], scroll_speed: f64) {
    for obstacle in obstacles {
        obstacle.x -= scroll_speed;
    }
}

/// Drop obstacles that have scrolled fully off-screen. Returns how many
/// were removed. Endless play never ends, so the set must not grow without
/// bound.
pub fn prune(obstacles: &mut Vec<Obstacle>) -> usize {
    let before = obstacles.len();
    obstacles.retain(|o| !o.is_offscreen());
    before - obstacles.len()
}
