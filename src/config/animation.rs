/// Bouncing ball configuration.
///
/// Physics parameters for the easter-egg animation. Distances are in CSS pixels,
/// velocities in pixels per frame.
use std::time::Duration;

pub const FRAME_INTERVAL_MS: u64 = 20; // One physics step per frame.

pub const GRAVITY: f64 = 0.5;

/// Fraction of speed kept after hitting a wall.
pub const RESTITUTION: f64 = 0.8;

/// Horizontal speed multiplier applied on each floor bounce.
pub const FLOOR_FRICTION: f64 = 0.95;

pub const BALL_SIZE: f64 = 50.0;

/// Vertical position the ball is dropped from.
pub const LAUNCH_HEIGHT: f64 = 100.0;

/// Launch horizontal speed is drawn from `[-MAX/2, MAX/2)`.
pub const LAUNCH_MAX_SPEED_X: f64 = 10.0;

/// A position line is logged every N frames.
pub const POSITION_LOG_EVERY: u64 = 30;

/// Runtime physics parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallPhysics {
    pub gravity: f64,
    pub restitution: f64,
    pub floor_friction: f64,
    pub ball_size: f64,
    pub frame_interval: Duration,
}

impl Default for BallPhysics {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            restitution: RESTITUTION,
            floor_friction: FLOOR_FRICTION,
            ball_size: BALL_SIZE,
            frame_interval: Duration::from_millis(FRAME_INTERVAL_MS),
        }
    }
}

/// Viewport assumed when the client does not report one.
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1280.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 720.0;
