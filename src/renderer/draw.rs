//! Frame drawing from a read-only game state

use glam::Vec2;

use super::surface::{Surface, colors};
use crate::consts::{
    FLICKER_FRAMES, FRAMES_PER_SECOND, MAX_HEALTH, VIEWPORT_HEIGHT, VIEWPORT_WIDTH,
};
use crate::sim::{Aabb, Bullet, Checkpoint, Enemy, Flag, GameState, Platform, Player};

/// Host-side options for drawing a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOptions {
    /// Canvas size in screen units
    pub viewport: Vec2,
    pub show_hud: bool,
    /// Frame rate used for the HUD timer
    pub fps: u32,
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self {
            viewport: Vec2::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT),
            show_hud: true,
            fps: FRAMES_PER_SECOND,
        }
    }
}

/// Something that can draw itself in world coordinates
pub trait Drawable {
    fn draw(&self, surface: &mut dyn Surface);
}

/// Whether a flickering entity is in its hidden phase for a countdown timer
#[inline]
pub fn flicker_hidden(timer: u32) -> bool {
    (timer / FLICKER_FRAMES) % 2 == 0
}

impl Drawable for Platform {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.set_fill(colors::PLATFORM);
        surface.fill_rect(self.body);
    }
}

impl Drawable for Flag {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.set_fill(colors::FLAG);
        surface.fill_rect(self.body);
    }
}

impl Drawable for Checkpoint {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.set_fill(if self.reached {
            colors::CHECKPOINT_REACHED
        } else {
            colors::CHECKPOINT
        });
        surface.fill_rect(self.body);
    }
}

impl Drawable for Player {
    fn draw(&self, surface: &mut dyn Surface) {
        if self.is_invincible() && flicker_hidden(self.inv) {
            return;
        }
        surface.set_fill(colors::PLAYER);
        surface.fill_rect(self.body);
    }
}

impl Drawable for Enemy {
    fn draw(&self, surface: &mut dyn Surface) {
        if !self.alive || (self.dying && flicker_hidden(self.death_timer)) {
            return;
        }
        surface.set_fill(colors::ENEMY);
        surface.fill_rect(self.body);
    }
}

impl Drawable for Bullet {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.set_fill(colors::BULLET);
        surface.fill_circle(self.body.center(), self.body.width / 2.0);
    }
}

/// Draw the world through the camera, then the HUD in screen space
pub fn draw_frame(state: &GameState, surface: &mut dyn Surface, options: &FrameOptions) {
    let screen = Aabb::new(0.0, 0.0, options.viewport.x, options.viewport.y);
    surface.clear(colors::BACKGROUND, screen);

    surface.push_translate_x(-state.camera.x);
    let level = &state.level;
    for platform in &level.platforms {
        platform.draw(surface);
    }
    level.flag.draw(surface);
    state.player.draw(surface);
    for enemy in &level.enemies {
        enemy.draw(surface);
    }
    for bullet in &level.bullets {
        bullet.draw(surface);
    }
    level.checkpoint.draw(surface);
    surface.pop_transform();

    if options.show_hud {
        draw_hud(state, surface, options.fps);
    }
}

fn draw_hud(state: &GameState, surface: &mut dyn Surface, fps: u32) {
    for i in 0..MAX_HEALTH {
        surface.set_fill(if i < state.player.health {
            colors::HEALTH_FULL
        } else {
            colors::HEALTH_EMPTY
        });
        let x = 10.0 + f32::from(i) * 20.0;
        surface.fill_rect(Aabb::new(x, 10.0, 15.0, 15.0));
    }

    surface.set_fill(colors::HUD_TEXT);
    surface.fill_text(&format!("Score: {}", state.score), Vec2::new(10.0, 40.0), 18.0);
    surface.fill_text(
        &format!("Time: {}s", state.elapsed_secs(fps)),
        Vec2::new(10.0, 60.0),
        18.0,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::recording::{DrawCommand, RecordingSurface};

    #[test]
    fn test_flicker_phase() {
        assert!(flicker_hidden(0));
        assert!(flicker_hidden(4));
        assert!(!flicker_hidden(5));
        assert!(!flicker_hidden(9));
        assert!(flicker_hidden(10));
    }

    #[test]
    fn test_invincible_player_flickers() {
        let mut player = Player::new();
        let mut surface = RecordingSurface::default();

        player.inv = 12; // hidden phase
        player.draw(&mut surface);
        assert_eq!(surface.rect_count(), 0);

        player.inv = 7; // visible phase
        player.draw(&mut surface);
        assert_eq!(surface.rect_count(), 1);
    }

    #[test]
    fn test_dead_enemy_not_drawn() {
        let platform = Platform::new(600.0, 300.0, 120.0, 20.0);
        let mut enemy = Enemy::on_platform(1, crate::sim::EnemyKind::Patrol, &platform, 0);
        enemy.alive = false;
        let mut surface = RecordingSurface::default();
        enemy.draw(&mut surface);
        assert!(surface.commands.is_empty());
    }

    #[test]
    fn test_frame_layout() {
        let mut state = GameState::new(8);
        state.camera.x = 250.0;
        state.score = 1300;
        state.player.health = 2;
        let mut surface = RecordingSurface::default();
        let options = FrameOptions {
            viewport: Vec2::new(640.0, 360.0),
            ..Default::default()
        };
        draw_frame(&state, &mut surface, &options);

        assert_eq!(
            surface.commands[0],
            DrawCommand::Clear(colors::BACKGROUND, Aabb::new(0.0, 0.0, 640.0, 360.0))
        );
        assert_eq!(surface.commands[1], DrawCommand::PushTranslateX(-250.0));
        assert!(surface.commands.contains(&DrawCommand::PopTransform));
        assert!(surface.texts().contains(&"Score: 1300".to_string()));
        assert!(surface.texts().contains(&"Time: 0s".to_string()));

        // Two full pips and one empty
        let pips: Vec<_> = surface
            .commands
            .windows(2)
            .filter_map(|w| match (&w[0], &w[1]) {
                (DrawCommand::SetFill(c), DrawCommand::FillRect(r)) if r.width == 15.0 => Some(*c),
                _ => None,
            })
            .collect();
        assert_eq!(
            pips,
            vec![colors::HEALTH_FULL, colors::HEALTH_FULL, colors::HEALTH_EMPTY]
        );
    }
}
