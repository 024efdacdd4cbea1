//! Game state and core simulation types
//!
//! Everything the render adapter reads lives here. Per-entity update logic is
//! in `entity`, the frame pass in `tick`, level lifecycle in `session`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::aabb::{Aabb, Bounded};
use super::camera::Camera;
use crate::consts::*;

/// Current phase of the level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Normal simulation
    Active,
    /// Flag reached; gameplay halted until the host restarts or advances
    Completed,
}

/// What an entity update asks of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Continue,
    /// Player health hit zero; the rest of the frame is skipped
    ResetLevel,
}

/// Notable things that happened during a frame, drained by the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    LevelStarted { level: u32 },
    EnemyKilled { x: f32, y: f32 },
    PlayerHurt { health: u8 },
    PlayerDied { respawn_at_checkpoint: bool },
    CheckpointReached { x: f32, y: f32 },
    LevelComplete { level: u32 },
}

/// A static slab of ground
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub body: Aabb,
}

impl Platform {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            body: Aabb::new(x, y, width, height),
        }
    }
}

impl Bounded for Platform {
    fn bounds(&self) -> Aabb {
        self.body
    }
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: Aabb,
    pub vel: Vec2,
    /// +1 facing right, -1 facing left
    pub facing: f32,
    pub on_ground: bool,
    pub health: u8,
    /// Invincibility frames remaining
    pub inv: u32,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// Fresh player at the level spawn point
    pub fn new() -> Self {
        Self {
            body: Aabb::new(PLAYER_SPAWN.0, PLAYER_SPAWN.1, PLAYER_WIDTH, PLAYER_HEIGHT),
            vel: Vec2::ZERO,
            facing: 1.0,
            on_ground: false,
            health: MAX_HEALTH,
            inv: 0,
        }
    }

    pub fn is_invincible(&self) -> bool {
        self.inv > 0
    }
}

impl Bounded for Player {
    fn bounds(&self) -> Aabb {
        self.body
    }
}

/// Enemy behavior variants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Walks back and forth on its platform
    Patrol,
    /// Patrols and fires at the player every `period` frames
    Shooter { cooldown: u32, period: u32 },
}

/// A walking enemy bound to one platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub kind: EnemyKind,
    pub body: Aabb,
    pub vel: Vec2,
    /// Index into the level's platform list bounding the patrol
    pub platform_index: usize,
    pub alive: bool,
    pub dying: bool,
    pub death_timer: u32,
}

impl Enemy {
    /// Enemy standing centered on `platform`
    pub fn on_platform(
        id: u32,
        kind: EnemyKind,
        platform: &Platform,
        platform_index: usize,
    ) -> Self {
        let p = platform.body;
        Self {
            id,
            kind,
            body: Aabb::new(
                p.x + (p.width - ENEMY_WIDTH) / 2.0,
                p.y - ENEMY_HEIGHT,
                ENEMY_WIDTH,
                ENEMY_HEIGHT,
            ),
            vel: Vec2::new(ENEMY_SPEED, 0.0),
            platform_index,
            alive: true,
            dying: false,
            death_timer: 0,
        }
    }

    pub fn is_shooter(&self) -> bool {
        matches!(self.kind, EnemyKind::Shooter { .. })
    }

    /// Alive and not already in its death animation
    pub fn is_hittable(&self) -> bool {
        self.alive && !self.dying
    }
}

impl Bounded for Enemy {
    fn bounds(&self) -> Aabb {
        self.body
    }
}

/// Who fired a bullet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BulletOwner {
    Player,
    Enemy,
}

/// A horizontal projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub body: Aabb,
    /// +1 or -1
    pub dir: f32,
    pub owner: BulletOwner,
    /// Cleared when the bullet hits something or leaves the view
    pub live: bool,
}

impl Bullet {
    /// Bullet centered on a muzzle point
    pub fn new(muzzle: Vec2, dir: f32, owner: BulletOwner) -> Self {
        Self {
            body: Aabb::centered(muzzle, BULLET_SIZE, BULLET_SIZE),
            dir,
            owner,
            live: true,
        }
    }
}

impl Bounded for Bullet {
    fn bounds(&self) -> Aabb {
        self.body
    }
}

/// Mid-level respawn point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Checkpoint {
    pub body: Aabb,
    /// One-way latch
    pub reached: bool,
}

impl Checkpoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            body: Aabb::new(x, y, CHECKPOINT_SIZE.0, CHECKPOINT_SIZE.1),
            reached: false,
        }
    }
}

impl Bounded for Checkpoint {
    fn bounds(&self) -> Aabb {
        self.body
    }
}

/// End-of-level marker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flag {
    pub body: Aabb,
}

impl Flag {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            body: Aabb::new(x, y, FLAG_SIZE.0, FLAG_SIZE.1),
        }
    }
}

impl Bounded for Flag {
    fn bounds(&self) -> Aabb {
        self.body
    }
}

/// One generated level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    /// Generation order; the last entry anchors flag and checkpoint
    pub platforms: Vec<Platform>,
    pub enemies: Vec<Enemy>,
    pub bullets: Vec<Bullet>,
    pub flag: Flag,
    pub checkpoint: Checkpoint,
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    /// Bumped on every level generation so restarts get a fresh layout
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(
            self.seed
                .wrapping_add(self.stream.wrapping_mul(0x9E37_79B9_7F4A_7C15)),
        )
    }

    /// RNG for the next generation, advancing the stream
    pub fn next_rng(&mut self) -> Pcg32 {
        let rng = self.to_rng();
        self.stream = self.stream.wrapping_add(1);
        rng
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng_state: RngState,
    /// Current level (1-based)
    pub level_index: u32,
    pub score: u32,
    pub phase: GamePhase,
    pub player: Player,
    pub level: Level,
    pub camera: Camera,
    /// Position saved when the checkpoint latched this level
    pub respawn: Option<Vec2>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Tick at which the HUD timer started
    pub start_tick: u64,
    /// Events since the host last called [`GameState::drain_events`].
    ///
    /// Hosts should drain once per frame. Undrained events are capped at
    /// `MAX_PENDING_EVENTS`, dropping the oldest.
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new session at level 1 with the default viewport
    pub fn new(seed: u64) -> Self {
        Self::with_camera(seed, Camera::new(VIEWPORT_WIDTH, CAMERA_LAG))
    }

    /// Create a new session with a host-configured camera
    pub fn with_camera(seed: u64, camera: Camera) -> Self {
        let mut rng_state = RngState::new(seed);
        let mut next_id = 1;
        let level = super::level::generate_level(1, &mut rng_state.next_rng(), &mut next_id);
        log::info!("Session started (seed {seed})");
        Self {
            seed,
            rng_state,
            level_index: 1,
            score: 0,
            phase: GamePhase::Active,
            player: Player::new(),
            level,
            camera,
            respawn: None,
            time_ticks: 0,
            start_tick: 0,
            events: vec![GameEvent::LevelStarted { level: 1 }],
            next_id,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub(crate) fn id_counter(&mut self) -> &mut u32 {
        &mut self.next_id
    }

    /// Whole seconds since the level timer origin
    pub fn elapsed_secs(&self, fps: u32) -> u64 {
        self.time_ticks.saturating_sub(self.start_tick) / u64::from(fps.max(1))
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Drop the oldest events beyond the pending cap
    pub(crate) fn trim_events(&mut self) {
        let excess = self.events.len().saturating_sub(MAX_PENDING_EVENTS);
        if excess > 0 {
            log::warn!("Event queue not drained; dropping {excess} oldest events");
            self.events.drain(..excess);
        }
    }

    pub fn difficulty(&self) -> f64 {
        crate::difficulty_for(self.level_index)
    }
}
