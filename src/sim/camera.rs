//! Horizontal follow camera
//!
//! Eases toward centering the player and never shows past the world edges.

use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use crate::consts::WORLD_WIDTH;

/// Side-scrolling camera (horizontal offset only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    /// Left edge of the view in world units
    pub x: f32,
    /// Visible width in world units
    pub viewport_width: f32,
    /// Fraction of the remaining distance covered per frame (0..=1)
    pub lag: f32,
}

impl Camera {
    pub fn new(viewport_width: f32, lag: f32) -> Self {
        Self {
            x: 0.0,
            viewport_width,
            lag: lag.clamp(0.0, 1.0),
        }
    }

    /// Largest offset that keeps the view inside the world
    pub fn max_x(&self) -> f32 {
        (WORLD_WIDTH - self.viewport_width).max(0.0)
    }

    /// Ease one frame toward centering `target`
    pub fn follow(&mut self, target: &Aabb) {
        let goal = target.x - self.viewport_width / 2.0 + target.width / 2.0;
        self.x += (goal - self.x) * self.lag;
        self.x = self.x.clamp(0.0, self.max_x());
    }

    /// Whether a world x coordinate is inside the visible window
    pub fn contains_x(&self, x: f32) -> bool {
        x >= self.x && x <= self.x + self.viewport_width
    }

    pub fn reset(&mut self) {
        self.x = 0.0;
    }
}
