//! The player body: gravity integration plus coyote-time and jump-buffer
//! input smoothing.
//!
//! A jump request is never applied directly. It arms a buffer counter, and
//! the buffered jump fires on the first step where the body is grounded or
//! only recently airborne (the coyote window). A request pressed slightly
//! before landing is therefore honored exactly on the landing step, and one
//! pressed slightly after leaving the ground is still honored.

use super::config::GameConfig;
use super::constants::{COYOTE_FRAMES, GROUND_Y, JUMP_BUFFER_FRAMES, PLAYER_SIZE, PLAYER_X};
use super::geometry::Rect;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Fixed screen-relative column (the world scrolls underneath).
    pub x: f64,
    /// Top edge of the square body; `y + size == GROUND_Y` when resting.
    pub y: f64,
    pub size: f64,
    pub velocity_y: f64,
    pub grounded: bool,
    /// Steps of jump grace remaining after leaving the ground. Reset to the
    /// maximum on every grounded step; decremented while airborne and may go
    /// negative (only `> 0` is ever checked).
    pub coyote_frames: i32,
    /// Steps remaining in which an armed jump request is still honored.
    pub jump_buffer_frames: i32,
    pub gravity: f64,
    pub jump_impulse: f64,
}

impl Player {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: PLAYER_X,
            y: GROUND_Y - PLAYER_SIZE,
            size: PLAYER_SIZE,
            velocity_y: 0.0,
            grounded: true,
            coyote_frames: COYOTE_FRAMES,
            jump_buffer_frames: 0,
            gravity: config.gravity,
            jump_impulse: config.jump_impulse,
        }
    }

    /// Arm the jump buffer. Safe to call in any state; repeat calls refresh
    /// the window back to its maximum, they never stack.
    pub fn request_jump(&mut self) {
        self.jump_buffer_frames = JUMP_BUFFER_FRAMES;
    }

    /// Advance one step: integrate, clamp to the ground plane, then consume
    /// a buffered jump if the coyote window is open. Returns true when a
    /// jump fired this step (the caller emits the cosmetic burst event).
    pub fn step(&mut self) -> bool {
        // Semi-implicit Euler, one step per frame
        self.velocity_y += self.gravity;
        self.y += self.velocity_y;

        if self.y + self.size >= GROUND_Y {
            self.y = GROUND_Y - self.size;
            self.velocity_y = 0.0;
            self.grounded = true;
            self.coyote_frames = COYOTE_FRAMES;
        } else {
            self.grounded = false;
            self.coyote_frames -= 1;
        }

        if self.jump_buffer_frames > 0 {
            self.jump_buffer_frames -= 1;
        }
        if self.jump_buffer_frames > 0 && self.coyote_frames > 0 {
            self.velocity_y = self.jump_impulse;
            self.grounded = false;
            self.jump_buffer_frames = 0;
            return true;
        }

        false
    }

    /// Collision shape in world space.
    pub fn hitbox(&self) -> Rect {
        Rect::new(self.x, self.y, self.size, self.size)
    }
}
