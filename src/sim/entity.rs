//! Per-entity update logic
//!
//! Player movement, enemy patrol/death, shooter fire and bullet travel. Each
//! update reports an [`UpdateOutcome`]; `ResetLevel` means the player just lost
//! their last point of health.

use glam::Vec2;

use super::aabb::Aabb;
use super::camera::Camera;
use super::collision::{Axis, resolve};
use super::state::{
    Bullet, BulletOwner, Enemy, EnemyKind, GameEvent, Platform, Player, UpdateOutcome,
};
use crate::consts::*;

impl Player {
    /// Apply held movement keys for this frame
    pub fn apply_intent(&mut self, move_left: bool, move_right: bool, running: bool) {
        let cap = BASE_SPEED * if running { RUN_MULT } else { 1.0 };
        if move_right {
            self.vel.x = (self.vel.x + ACCEL).min(cap);
            self.facing = 1.0;
        }
        if move_left {
            self.vel.x = (self.vel.x - ACCEL).max(-cap);
            self.facing = -1.0;
        }
    }

    /// Jump if standing on something
    pub fn jump(&mut self) {
        if self.on_ground {
            self.vel.y = -JUMP_POWER;
            self.on_ground = false;
        }
    }

    /// Advance one frame: timers, friction, gravity, world bounds, platforms
    pub fn tick(&mut self, platforms: &[Platform]) {
        self.inv = self.inv.saturating_sub(1);

        self.vel.x *= FRICTION;
        self.vel.y += GRAVITY;
        self.body.x += self.vel.x;
        self.body.y += self.vel.y;
        self.on_ground = false;

        self.clamp_to_world();
        if self.body.bottom() > WORLD_HEIGHT {
            self.body.y = WORLD_HEIGHT - self.body.height;
            self.vel.y = 0.0;
            self.on_ground = true;
        }

        for platform in platforms {
            let result = resolve(&mut self.body, &platform.body);
            if !result.hit {
                continue;
            }
            match result.axis {
                Axis::Horizontal => self.vel.x = 0.0,
                Axis::Vertical => {
                    self.vel.y = 0.0;
                    if result.landed {
                        self.on_ground = true;
                    }
                }
            }
        }

        // Floor segments overhang the world edge; a side push must not leave it
        self.clamp_to_world();
    }

    fn clamp_to_world(&mut self) {
        self.body.x = self.body.x.clamp(0.0, WORLD_WIDTH - self.body.width);
    }

    /// Take one point of damage unless invincible. Returns whether it landed.
    pub fn take_hit(&mut self) -> bool {
        if self.is_invincible() {
            return false;
        }
        self.health = self.health.saturating_sub(1);
        self.inv = INV_TIME;
        true
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    /// Muzzle point for player shots
    pub fn muzzle(&self) -> Vec2 {
        self.body.center()
    }

    /// Put the player back at a saved point with full health
    pub fn respawn_at(&mut self, position: Vec2) {
        self.body.x = position.x;
        self.body.y = position.y;
        self.health = MAX_HEALTH;
        self.inv = 0;
        self.vel = Vec2::ZERO;
    }
}

impl Enemy {
    /// Begin the death animation (one-way)
    pub fn start_dying(&mut self) {
        if self.dying || !self.alive {
            return;
        }
        self.dying = true;
        self.death_timer = DEATH_TIME;
        self.vel.x = 0.0;
    }

    /// Advance one frame.
    ///
    /// Shooters push new bullets into `spawned`.
    pub fn tick(
        &mut self,
        platforms: &[Platform],
        player: &mut Player,
        spawned: &mut Vec<Bullet>,
        events: &mut Vec<GameEvent>,
    ) -> UpdateOutcome {
        if !self.alive {
            return UpdateOutcome::Continue;
        }
        if self.dying {
            self.death_timer = self.death_timer.saturating_sub(1);
            if self.death_timer == 0 {
                self.alive = false;
            }
            return UpdateOutcome::Continue;
        }

        self.vel.y += GRAVITY;
        self.body.y += self.vel.y;
        for platform in platforms {
            let result = resolve(&mut self.body, &platform.body);
            if !result.hit {
                continue;
            }
            match result.axis {
                Axis::Horizontal => self.vel.x = -self.vel.x,
                Axis::Vertical => self.vel.y = 0.0,
            }
        }

        if let Some(home) = platforms.get(self.platform_index) {
            self.patrol_step(&home.body);
        }

        if self.body.overlaps(&player.body) && player.take_hit() {
            log::debug!("Enemy {} hit the player (health {})", self.id, player.health);
            events.push(GameEvent::PlayerHurt {
                health: player.health,
            });
            if player.is_dead() {
                return UpdateOutcome::ResetLevel;
            }
        }

        if let Some(bullet) = self.fire_if_ready(player) {
            spawned.push(bullet);
        }
        UpdateOutcome::Continue
    }

    /// Move horizontally, bouncing off the ends of the home platform
    fn patrol_step(&mut self, home: &Aabb) {
        let prev_x = self.body.x;
        self.body.x += self.vel.x;
        if self.body.x < home.x || self.body.right() > home.right() {
            self.vel.x = -self.vel.x;
            self.body.x = prev_x;
        }
    }

    /// Shooter cooldown; returns a bullet aimed at the player's side when it elapses
    fn fire_if_ready(&mut self, player: &Player) -> Option<Bullet> {
        let EnemyKind::Shooter { cooldown, period } = &mut self.kind else {
            return None;
        };
        *cooldown = cooldown.saturating_sub(1);
        if *cooldown > 0 {
            return None;
        }
        *cooldown = *period;

        let dir = if player.body.center().x < self.body.x {
            -1.0
        } else {
            1.0
        };
        let muzzle = self.body.position() + Vec2::new(SHOOTER_MUZZLE.0, SHOOTER_MUZZLE.1);
        Some(Bullet::new(muzzle, dir, BulletOwner::Enemy))
    }
}

impl Bullet {
    /// Advance one frame and resolve hits.
    ///
    /// Sets `live` to false when the bullet is spent or leaves the camera view.
    pub fn tick(
        &mut self,
        camera: &Camera,
        enemies: &mut [Enemy],
        player: &mut Player,
        score: &mut u32,
        events: &mut Vec<GameEvent>,
    ) -> UpdateOutcome {
        if !self.live {
            return UpdateOutcome::Continue;
        }
        self.body.x += self.dir * BULLET_SPEED;

        match self.owner {
            BulletOwner::Player => {
                if let Some(enemy) = enemies
                    .iter_mut()
                    .find(|e| e.is_hittable() && self.body.overlaps(&e.body))
                {
                    enemy.start_dying();
                    *score += KILL_REWARD;
                    self.live = false;
                    log::debug!("Enemy {} shot down (score {})", enemy.id, *score);
                    events.push(GameEvent::EnemyKilled {
                        x: enemy.body.x,
                        y: enemy.body.y,
                    });
                    return UpdateOutcome::Continue;
                }
            }
            BulletOwner::Enemy => {
                if self.body.overlaps(&player.body) && player.take_hit() {
                    *score = score.saturating_sub(HIT_PENALTY);
                    self.live = false;
                    log::debug!("Player shot (health {})", player.health);
                    events.push(GameEvent::PlayerHurt {
                        health: player.health,
                    });
                    if player.is_dead() {
                        return UpdateOutcome::ResetLevel;
                    }
                    return UpdateOutcome::Continue;
                }
            }
        }

        if !camera.contains_x(self.body.x) {
            self.live = false;
        }
        UpdateOutcome::Continue
    }
}
