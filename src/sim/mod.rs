//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed update per frame
//! - Seeded RNG only
//! - Stable iteration order (generation order)
//! - No rendering or platform dependencies

pub mod aabb;
pub mod camera;
pub mod collision;
pub mod entity;
pub mod level;
pub mod session;
pub mod state;
pub mod tick;

pub use aabb::{Aabb, Bounded, overlaps};
pub use camera::Camera;
pub use collision::{Axis, CollisionResult, resolve};
pub use level::generate_level;
pub use state::{
    Bullet, BulletOwner, Checkpoint, Enemy, EnemyKind, Flag, GameEvent, GamePhase, GameState,
    Level, Platform, Player, UpdateOutcome,
};
pub use tick::{TickInput, tick};
