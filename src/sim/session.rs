//! Level lifecycle: checkpoint save, death reset, restart, advance, quit

use super::level::generate_level;
use super::state::{GameEvent, GamePhase, GameState, Player};
use crate::consts::*;

impl GameState {
    /// Record the player's current position as the respawn point
    pub fn save_at_checkpoint(&mut self) {
        let position = self.player.body.position();
        self.respawn = Some(position);
        log::debug!("Checkpoint reached at ({:.0}, {:.0})", position.x, position.y);
        self.events.push(GameEvent::CheckpointReached {
            x: position.x,
            y: position.y,
        });
    }

    /// Handle the player running out of health.
    ///
    /// With a latched checkpoint the player respawns there and keeps the score.
    /// Otherwise the player starts over, pays the death penalty and the timer restarts.
    pub fn reset_after_death(&mut self) {
        self.level.bullets.clear();
        let checkpoint = self
            .respawn
            .filter(|_| self.level.checkpoint.reached);

        match checkpoint {
            Some(position) => {
                self.player.respawn_at(position);
                log::info!("Player died; respawning at checkpoint");
            }
            None => {
                self.player = Player::new();
                self.score = self.score.saturating_sub(DEATH_PENALTY);
                self.start_tick = self.time_ticks;
                log::info!(
                    "Player died; restarting level {} (score {})",
                    self.level_index,
                    self.score
                );
            }
        }

        self.events.push(GameEvent::PlayerDied {
            respawn_at_checkpoint: checkpoint.is_some(),
        });
    }

    /// Replace the level snapshot with a freshly generated one at the current index
    fn regenerate_level(&mut self) {
        let mut rng = self.rng_state.next_rng();
        let index = self.level_index;
        self.level = generate_level(index, &mut rng, self.id_counter());
        self.respawn = None;
        self.phase = GamePhase::Active;
        self.events.push(GameEvent::LevelStarted { level: index });
    }

    /// Put the player, camera and timer back at the start of a level
    fn reset_run_state(&mut self) {
        self.player = Player::new();
        self.camera.reset();
        self.start_tick = self.time_ticks;
    }

    /// Start the current level over with a new layout
    pub fn restart_level(&mut self) {
        log::info!("Restarting level {}", self.level_index);
        self.reset_run_state();
        self.regenerate_level();
    }

    /// Move on to the next level and award the level bonus
    pub fn next_level(&mut self) {
        self.level_index += 1;
        self.score += self.level_index * LEVEL_BONUS_PER_INDEX;
        log::info!(
            "Advancing to level {} (difficulty {:.1}, score {})",
            self.level_index,
            self.difficulty(),
            self.score
        );
        self.reset_run_state();
        self.regenerate_level();
    }

    /// Throw away the whole run and start again from level 1
    pub fn reset_session(&mut self) {
        log::info!("Resetting session");
        let camera = super::camera::Camera::new(self.camera.viewport_width, self.camera.lag);
        *self = GameState::with_camera(self.seed, camera);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick::{TickInput, tick};
    use glam::Vec2;

    #[test]
    fn test_reset_without_checkpoint_floors_score() {
        let mut state = GameState::new(1);
        state.score = 120;
        state.player.body.x = 900.0;
        state.player.health = 0;
        state.time_ticks = 500;
        state.reset_after_death();
        assert_eq!(state.score, 0);
        assert_eq!(state.player.body.position(), Vec2::new(100.0, 100.0));
        assert_eq!(state.player.health, MAX_HEALTH);
        assert_eq!(state.start_tick, 500);
    }

    #[test]
    fn test_reset_without_checkpoint_subtracts_penalty() {
        let mut state = GameState::new(1);
        state.score = 500;
        state.player.health = 0;
        state.reset_after_death();
        assert_eq!(state.score, 300);
        assert_eq!(
            state.drain_events().last(),
            Some(&GameEvent::PlayerDied {
                respawn_at_checkpoint: false
            })
        );
    }

    #[test]
    fn test_reset_with_checkpoint_keeps_score() {
        let mut state = GameState::new(1);
        state.score = 1200;
        state.player.body.x = 1000.0;
        state.player.body.y = 300.0;
        state.level.checkpoint.reached = true;
        state.save_at_checkpoint();

        state.player.body.x = 1800.0;
        state.player.vel = Vec2::new(4.0, -3.0);
        state.player.health = 0;
        state.player.inv = 20;
        state.time_ticks = 900;
        state.reset_after_death();

        assert_eq!(state.player.body.position(), Vec2::new(1000.0, 300.0));
        assert_eq!(state.player.health, MAX_HEALTH);
        assert_eq!(state.player.inv, 0);
        assert_eq!(state.player.vel, Vec2::ZERO);
        assert_eq!(state.score, 1200);
        assert_eq!(state.start_tick, 0);
    }

    #[test]
    fn test_restart_level() {
        let mut state = GameState::new(2);
        state.level.checkpoint.reached = true;
        state.respawn = Some(Vec2::new(1.0, 2.0));
        state.phase = GamePhase::Completed;
        state.camera.x = 700.0;
        state.score = 300;
        let before = state.rng_state.stream;

        state.restart_level();
        assert_eq!(state.level_index, 1);
        assert_eq!(state.phase, GamePhase::Active);
        assert!(state.respawn.is_none());
        assert!(!state.level.checkpoint.reached);
        assert!(state.level.bullets.is_empty());
        assert_eq!(state.camera.x, 0.0);
        assert_eq!(state.score, 300);
        assert_eq!(state.rng_state.stream, before + 1);
    }

    #[test]
    fn test_next_level_bonus_and_difficulty() {
        let mut state = GameState::new(3);
        state.phase = GamePhase::Completed;
        state.score = 100;
        state.next_level();
        assert_eq!(state.level_index, 2);
        assert_eq!(state.score, 200);
        assert_eq!(state.phase, GamePhase::Active);

        // Level 5 -> difficulty 1.5 -> 4 enemies
        state.next_level();
        state.next_level();
        state.next_level();
        assert_eq!(state.level_index, 5);
        assert_eq!(state.level.enemies.len(), 4);
        assert!(
            state
                .drain_events()
                .contains(&GameEvent::LevelStarted { level: 5 })
        );
    }

    #[test]
    fn test_reset_session() {
        let mut state = GameState::new(4);
        state.next_level();
        state.score = 999;
        for _ in 0..10 {
            tick(&mut state, &TickInput::default());
        }
        state.reset_session();
        assert_eq!(state.level_index, 1);
        assert_eq!(state.score, 0);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.seed, 4);
    }
}
