//! Collision response for axis-aligned boxes
//!
//! Minimum-translation resolution: a mover overlapping a static obstacle is
//! pushed out along the axis of least penetration. Player and enemies share
//! this routine and differ only in what they do to their velocity afterwards.

use glam::Vec2;

use super::aabb::Aabb;

/// Axis a collision was resolved along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Result of a resolution attempt
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    /// Whether the boxes overlapped (and the mover was moved)
    pub hit: bool,
    /// Separation axis (meaningless when `hit` is false)
    pub axis: Axis,
    /// Displacement applied to the mover
    pub push: Vec2,
    /// Mover was placed on top of the obstacle
    pub landed: bool,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            axis: Axis::Vertical,
            push: Vec2::ZERO,
            landed: false,
        }
    }
}

/// Push `mover` out of `obstacle` along the axis of least penetration.
///
/// The horizontal axis is chosen only when its depth is strictly smaller than
/// the vertical one. Vertical pushes snap the mover flush against the
/// obstacle's top or bottom edge.
pub fn resolve(mover: &mut Aabb, obstacle: &Aabb) -> CollisionResult {
    if !mover.overlaps(obstacle) {
        return CollisionResult::miss();
    }

    let offset = mover.center() - obstacle.center();
    let half_sum = mover.half_extents() + obstacle.half_extents();
    let depth_x = half_sum.x - offset.x.abs();
    let depth_y = half_sum.y - offset.y.abs();

    if depth_x < depth_y {
        let dx = if offset.x > 0.0 { depth_x } else { -depth_x };
        mover.x += dx;
        CollisionResult {
            hit: true,
            axis: Axis::Horizontal,
            push: Vec2::new(dx, 0.0),
            landed: false,
        }
    } else if offset.y > 0.0 {
        // Mover is below: bump its head on the underside
        let new_y = obstacle.bottom();
        let dy = new_y - mover.y;
        mover.y = new_y;
        CollisionResult {
            hit: true,
            axis: Axis::Vertical,
            push: Vec2::new(0.0, dy),
            landed: false,
        }
    } else {
        let new_y = obstacle.y - mover.height;
        let dy = new_y - mover.y;
        mover.y = new_y;
        CollisionResult {
            hit: true,
            axis: Axis::Vertical,
            push: Vec2::new(0.0, dy),
            landed: true,
        }
    }
}
