//! Side Scroller - A procedurally generated 2D platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (level generation, physics, collisions, session state)
//! - `renderer`: Render adapter trait and frame drawing
//! - `platform`: Input adapter (keys to per-frame intents)
//! - `ui`: Level-complete overlay and UI commands
//! - `settings`: Host configuration

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// World dimensions
    pub const WORLD_WIDTH: f32 = 4000.0;
    pub const WORLD_HEIGHT: f32 = 450.0;

    /// Per-frame physics
    pub const GRAVITY: f32 = 0.5;
    pub const FRICTION: f32 = 0.8;
    pub const BASE_SPEED: f32 = 3.0;
    pub const RUN_MULT: f32 = 1.8;
    /// Horizontal acceleration per frame while a direction is held
    pub const ACCEL: f32 = 1.0;
    pub const JUMP_POWER: f32 = 12.0;
    pub const BULLET_SPEED: f32 = 8.0;
    pub const ENEMY_SPEED: f32 = 1.5;

    /// Health and timers (frames)
    pub const MAX_HEALTH: u8 = 3;
    pub const INV_TIME: u32 = 60;
    pub const DEATH_TIME: u32 = 60;
    /// Flicker half-period for dying/invincible entities
    pub const FLICKER_FRAMES: u32 = 5;

    /// Entity sizes
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;
    pub const PLAYER_SPAWN: (f32, f32) = (100.0, 100.0);
    pub const ENEMY_WIDTH: f32 = 40.0;
    pub const ENEMY_HEIGHT: f32 = 60.0;
    pub const BULLET_SIZE: f32 = 10.0;
    pub const PLATFORM_THICKNESS: f32 = 20.0;
    pub const FLAG_SIZE: (f32, f32) = (20.0, 50.0);
    pub const CHECKPOINT_SIZE: (f32, f32) = (20.0, 40.0);

    /// Procedural generation
    pub const MIN_PLATFORM_WIDTH: i32 = 80;
    pub const MAX_PLATFORM_WIDTH: i32 = 200;
    pub const FLOOR_GAP_MIN: i32 = 20;
    pub const FLOOR_GAP_MAX: i32 = 30;
    pub const PLATFORM_Y_RANGE: (i32, i32) = (200, 350);
    pub const FLOATING_START_RANGE: (i32, i32) = (300, 600);
    pub const FLOATING_SPACING_RANGE: (i32, i32) = (100, 200);
    /// Floating platforms stop this far before the world end
    pub const FLOATING_END_MARGIN: f32 = 400.0;
    pub const BASE_ENEMY_COUNT: u32 = 3;
    /// Difficulty math runs in f64 so level scalars like 1.2 floor as expected
    pub const DIFFICULTY_INCREMENT: f64 = 0.1;
    pub const ENEMY_SPAWN_SAFE_ZONE: f32 = 200.0;
    pub const SHOOTER_MIN_X: f32 = 500.0;
    pub const SHOOTER_CHANCE_PER_DIFFICULTY: f64 = 0.3;
    /// Shooter cooldown = max(SHOOTER_MIN_COOLDOWN, SHOOTER_BASE_COOLDOWN / difficulty)
    pub const SHOOTER_BASE_COOLDOWN: f64 = 120.0;
    pub const SHOOTER_MIN_COOLDOWN: u32 = 30;
    /// Muzzle offset from the shooter's top-left corner
    pub const SHOOTER_MUZZLE: (f32, f32) = (20.0, 30.0);

    /// Scoring
    pub const KILL_REWARD: u32 = 100;
    pub const HIT_PENALTY: u32 = 200;
    pub const DEATH_PENALTY: u32 = 200;
    pub const LEVEL_BONUS_PER_INDEX: u32 = 50;

    /// Camera and viewport defaults
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 450.0;
    pub const CAMERA_LAG: f32 = 0.1;
    /// Undrained events kept before the oldest are dropped
    pub const MAX_PENDING_EVENTS: usize = 256;

    /// Nominal frame rate for the HUD timer
    pub const FRAMES_PER_SECOND: u32 = 60;
}

/// Difficulty scalar for a 1-based level index
#[inline]
pub fn difficulty_for(level_index: u32) -> f64 {
    1.0 + f64::from(level_index) * consts::DIFFICULTY_INCREMENT
}
