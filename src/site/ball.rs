//! Bouncing ball physics.
//!
//! One `step` per animation frame: gravity, movement, then wall collisions against the
//! viewport. Collisions clamp the ball to the edge and reflect the velocity with restitution.

use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::config::animation::{BallPhysics, LAUNCH_HEIGHT, LAUNCH_MAX_SPEED_X};

/// Visible area the ball bounces in, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Wall {
    Left,
    Right,
    Ceiling,
    Floor,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ball {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

/// Rendered ball position for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Frame {
    pub left: f64,
    pub top: f64,
    /// Degrees.
    pub rotation: f64,
}

impl Ball {
    /// Drop a ball at a random horizontal position with a random sideways speed.
    pub fn launch<R: Rng + ?Sized>(viewport: Viewport, physics: &BallPhysics, rng: &mut R) -> Self {
        let span = (viewport.width - physics.ball_size).max(0.0);
        Self {
            x: rng.random::<f64>() * span,
            y: LAUNCH_HEIGHT,
            vx: (rng.random::<f64>() - 0.5) * LAUNCH_MAX_SPEED_X,
            vy: 0.0,
        }
    }

    /// Advance one frame. Returns the walls hit during this frame.
    pub fn step(&mut self, viewport: Viewport, physics: &BallPhysics) -> Vec<Wall> {
        let mut hits = Vec::new();

        self.vy += physics.gravity;
        self.x += self.vx;
        self.y += self.vy;

        let max_x = viewport.width - physics.ball_size;
        let max_y = viewport.height - physics.ball_size;

        if self.x <= 0.0 {
            self.x = 0.0;
            self.vx = self.vx.abs() * physics.restitution;
            hits.push(Wall::Left);
        } else if self.x >= max_x {
            self.x = max_x;
            self.vx = -self.vx.abs() * physics.restitution;
            hits.push(Wall::Right);
        }

        if self.y <= 0.0 {
            self.y = 0.0;
            self.vy = self.vy.abs() * physics.restitution;
            hits.push(Wall::Ceiling);
        } else if self.y >= max_y {
            self.y = max_y;
            self.vy = -self.vy.abs() * physics.restitution;
            self.vx *= physics.floor_friction;
            hits.push(Wall::Floor);
        }

        hits
    }

    pub fn frame(&self) -> Frame {
        Frame {
            left: self.x,
            top: self.y,
            rotation: self.x + self.y,
        }
    }
}
