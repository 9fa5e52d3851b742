//! Screen-space geometry for bar slots.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned screen rectangle, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarRect {
    /// Top-left corner
    pub min: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl BarRect {
    /// Creates a rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Bottom-right corner.
    #[must_use]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Checks whether a point lies inside (edges inclusive).
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.min.x && point.x <= max.x && point.y >= self.min.y && point.y <= max.y
    }

    /// Same origin and height, different width.
    #[must_use]
    pub fn with_width(&self, width: f32) -> Self {
        Self::new(self.min, Vec2::new(width, self.size.y))
    }

    /// Moves the rectangle by `delta`.
    #[must_use]
    pub fn translated(&self, delta: Vec2) -> Self {
        Self::new(self.min + delta, self.size)
    }
}
