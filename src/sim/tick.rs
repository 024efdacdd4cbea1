//! Per-frame simulation pass
//!
//! Fixed order: input intents, player, enemies, bullets, checkpoint and flag
//! checks, camera. A reset signal from any entity ends the pass early.

use super::aabb::Bounded;
use super::state::{Bullet, BulletOwner, GameEvent, GamePhase, GameState, UpdateOutcome};

/// Input intents for a single frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    /// Run modifier (held)
    pub run: bool,
    /// Jump (edge-triggered)
    pub jump: bool,
    /// Fire (edge-triggered, already latched by the input adapter)
    pub fire: bool,
    /// Interact (held); completes the level at the flag
    pub interact: bool,
}

/// Advance the session by one frame
pub fn tick(state: &mut GameState, input: &TickInput) -> UpdateOutcome {
    if state.phase == GamePhase::Completed {
        return UpdateOutcome::Continue;
    }

    state.time_ticks += 1;
    state.trim_events();

    // Discrete intents land before the physics step
    if input.jump {
        state.player.jump();
    }
    if input.fire {
        let bullet = Bullet::new(state.player.muzzle(), state.player.facing, BulletOwner::Player);
        state.level.bullets.push(bullet);
    }

    state
        .player
        .apply_intent(input.move_left, input.move_right, input.run);
    state.player.tick(&state.level.platforms);

    if update_enemies(state) == UpdateOutcome::ResetLevel {
        state.reset_after_death();
        return UpdateOutcome::ResetLevel;
    }

    if update_bullets(state) == UpdateOutcome::ResetLevel {
        state.reset_after_death();
        return UpdateOutcome::ResetLevel;
    }

    let checkpoint = &mut state.level.checkpoint;
    if !checkpoint.reached && checkpoint.overlaps_with(&state.player) {
        checkpoint.reached = true;
        state.save_at_checkpoint();
    }

    if input.interact && state.player.overlaps_with(&state.level.flag) {
        state.phase = GamePhase::Completed;
        log::info!(
            "Level {} complete (score {}, {}s)",
            state.level_index,
            state.score,
            state.elapsed_secs(crate::consts::FRAMES_PER_SECOND)
        );
        state.events.push(GameEvent::LevelComplete {
            level: state.level_index,
        });
    }

    state.camera.follow(&state.player.body);
    UpdateOutcome::Continue
}

/// Tick every enemy, then drop the ones whose death timer ran out.
///
/// Bullets fired this frame join the bullet list before bullets update.
fn update_enemies(state: &mut GameState) -> UpdateOutcome {
    let level = &mut state.level;
    let mut spawned = Vec::new();
    let mut outcome = UpdateOutcome::Continue;

    for enemy in level.enemies.iter_mut() {
        outcome = enemy.tick(
            &level.platforms,
            &mut state.player,
            &mut spawned,
            &mut state.events,
        );
        if outcome == UpdateOutcome::ResetLevel {
            break;
        }
    }

    level.enemies.retain(|e| e.alive);
    level.bullets.append(&mut spawned);
    outcome
}

/// Tick every bullet, then drop the spent ones
fn update_bullets(state: &mut GameState) -> UpdateOutcome {
    let level = &mut state.level;
    let mut outcome = UpdateOutcome::Continue;

    for bullet in level.bullets.iter_mut() {
        outcome = bullet.tick(
            &state.camera,
            &mut level.enemies,
            &mut state.player,
            &mut state.score,
            &mut state.events,
        );
        if outcome == UpdateOutcome::ResetLevel {
            break;
        }
    }

    level.bullets.retain(|b| b.live);
    outcome
}
