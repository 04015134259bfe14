// Step timing
pub const STEP_MS: u64 = 16;
pub const MAX_FRAME_MS: u64 = 100;

// World geometry (pixels; y grows downward)
pub const WORLD_WIDTH: f64 = 900.0;
pub const WORLD_HEIGHT: f64 = 600.0;
pub const GROUND_Y: f64 = 490.0;

// Player body
pub const PLAYER_X: f64 = 150.0;
pub const PLAYER_SIZE: f64 = 40.0;

// Physics (per step)
pub const GRAVITY: f64 = 0.6;
pub const JUMP_IMPULSE: f64 = -12.0;

// Input grace windows (steps)
pub const COYOTE_FRAMES: i32 = 10;
pub const JUMP_BUFFER_FRAMES: i32 = 10;

// Scrolling and spawning
pub const SCROLL_SPEED: f64 = 6.0;
pub const SPAWN_INTERVAL_STEPS: u32 = 120;
pub const OBSTACLE_WIDTH: f64 = 40.0;
pub const SPAWN_X: f64 = WORLD_WIDTH + OBSTACLE_WIDTH;

// Obstacle height cycles. Endless play uses the uniform block; level play
// runs the varied course.
pub const ENDLESS_HEIGHTS: [f64; 1] = [40.0];
pub const COURSE_HEIGHTS: [f64; 6] = [40.0, 60.0, 40.0, 80.0, 40.0, 100.0];

// Level completion
pub const LEVEL_LENGTH: f64 = 5000.0;

// Event log
pub const EVENT_LOG_CAPACITY: usize = 8;
