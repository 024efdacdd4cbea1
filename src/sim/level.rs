//! Procedural level generation
//!
//! A level is a gapped floor strip, a run of floating platforms, enemies
//! scattered past the spawn area and a flag + checkpoint on the last
//! generated platform. All randomness comes from the injected RNG.

use rand::Rng;

use super::aabb::Aabb;
use super::state::{Checkpoint, Enemy, EnemyKind, Flag, Level, Platform};
use crate::consts::*;
use crate::difficulty_for;

/// Number of enemies for a difficulty
pub fn enemy_count(difficulty: f64) -> usize {
    (f64::from(BASE_ENEMY_COUNT) * difficulty).floor() as usize
}

/// Probability that an eligible enemy slot becomes a shooter (clamped to 1)
pub fn shooter_chance(difficulty: f64) -> f64 {
    (SHOOTER_CHANCE_PER_DIFFICULTY * difficulty).clamp(0.0, 1.0)
}

/// Frames between shots for a difficulty
pub fn shooter_period(difficulty: f64) -> u32 {
    ((SHOOTER_BASE_COOLDOWN / difficulty).floor() as u32).max(SHOOTER_MIN_COOLDOWN)
}

/// Ground strip from x = 0 to the world end, broken by small gaps
pub fn generate_floor(rng: &mut impl Rng, platforms: &mut Vec<Platform>) {
    let y = WORLD_HEIGHT - PLATFORM_THICKNESS;
    let mut x = 0.0;
    while x < WORLD_WIDTH {
        let width = rng.random_range(MIN_PLATFORM_WIDTH * 2..=MAX_PLATFORM_WIDTH * 2) as f32;
        platforms.push(Platform::new(x, y, width, PLATFORM_THICKNESS));
        let gap = rng.random_range(FLOOR_GAP_MIN..=FLOOR_GAP_MAX) as f32;
        x += width + gap;
    }
}

/// Floating platforms in the fixed vertical band
pub fn generate_floating(rng: &mut impl Rng, platforms: &mut Vec<Platform>) {
    let mut x = rng.random_range(FLOATING_START_RANGE.0..=FLOATING_START_RANGE.1) as f32;
    while x < WORLD_WIDTH - FLOATING_END_MARGIN {
        let width = rng.random_range(MIN_PLATFORM_WIDTH..=MAX_PLATFORM_WIDTH) as f32;
        let y = rng.random_range(PLATFORM_Y_RANGE.0..=PLATFORM_Y_RANGE.1) as f32;
        platforms.push(Platform::new(x, y, width, PLATFORM_THICKNESS));
        x += width + rng.random_range(FLOATING_SPACING_RANGE.0..=FLOATING_SPACING_RANGE.1) as f32;
    }
}

/// Place enemies on platforms past the spawn safe zone.
///
/// With no eligible platform the enemy slots are skipped.
pub fn generate_enemies(
    rng: &mut impl Rng,
    platforms: &[Platform],
    difficulty: f64,
    next_id: &mut u32,
) -> Vec<Enemy> {
    let eligible: Vec<usize> = platforms
        .iter()
        .enumerate()
        .filter(|(_, p)| p.body.x > ENEMY_SPAWN_SAFE_ZONE)
        .map(|(i, _)| i)
        .collect();

    let count = enemy_count(difficulty);
    if eligible.is_empty() {
        if count > 0 {
            log::warn!("No platform past the safe zone; skipping {count} enemies");
        }
        return Vec::new();
    }

    let chance = shooter_chance(difficulty);
    let period = shooter_period(difficulty);
    let mut enemies = Vec::with_capacity(count);
    for _ in 0..count {
        let index = eligible[rng.random_range(0..eligible.len())];
        let platform = &platforms[index];
        let kind = if platform.body.x > SHOOTER_MIN_X && rng.random_bool(chance) {
            EnemyKind::Shooter {
                cooldown: rng.random_range(0..=period),
                period,
            }
        } else {
            EnemyKind::Patrol
        };
        let id = *next_id;
        *next_id += 1;
        enemies.push(Enemy::on_platform(id, kind, platform, index));
    }
    enemies
}

/// Flag near the right edge of the last generated platform, checkpoint at its middle
pub fn place_flag_and_checkpoint(platforms: &[Platform]) -> (Flag, Checkpoint) {
    // Floor generation always emits at least one platform; the fallback is the whole floor
    let anchor = platforms.last().map(|p| p.body).unwrap_or_else(|| {
        Aabb::new(
            0.0,
            WORLD_HEIGHT - PLATFORM_THICKNESS,
            WORLD_WIDTH,
            PLATFORM_THICKNESS,
        )
    });
    let flag = Flag::new(anchor.right() - FLAG_SIZE.0, anchor.y - 50.0);
    let checkpoint = Checkpoint::new(anchor.x + anchor.width / 2.0, anchor.y - 70.0);
    (flag, checkpoint)
}

/// Build a complete level for a 1-based index
pub fn generate_level(level_index: u32, rng: &mut impl Rng, next_id: &mut u32) -> Level {
    let difficulty = difficulty_for(level_index);

    let mut platforms = Vec::new();
    generate_floor(rng, &mut platforms);
    generate_floating(rng, &mut platforms);

    let enemies = generate_enemies(rng, &platforms, difficulty, next_id);
    let (flag, checkpoint) = place_flag_and_checkpoint(&platforms);

    log::debug!(
        "Level {level_index}: {} platforms, {} enemies ({} shooters), difficulty {difficulty:.1}",
        platforms.len(),
        enemies.len(),
        enemies.iter().filter(|e| e.is_shooter()).count(),
    );

    Level {
        platforms,
        enemies,
        bullets: Vec::new(),
        flag,
        checkpoint,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn floor_of(level: &Level) -> Vec<Platform> {
        level
            .platforms
            .iter()
            .copied()
            .filter(|p| p.body.y == WORLD_HEIGHT - PLATFORM_THICKNESS)
            .collect()
    }

    #[test]
    fn test_difficulty_scaling() {
        assert!((difficulty_for(5) - 1.5).abs() < 1e-6);
        assert_eq!(enemy_count(difficulty_for(5)), 4);
        assert_eq!(enemy_count(difficulty_for(1)), 3);
        assert_eq!(enemy_count(difficulty_for(10)), 6);
    }

    #[test]
    fn test_shooter_chance_clamped() {
        assert!((shooter_chance(1.5) - 0.45).abs() < 1e-6);
        assert_eq!(shooter_chance(4.0), 1.0);
    }

    #[test]
    fn test_shooter_period_floor() {
        assert_eq!(shooter_period(1.1), 109);
        assert_eq!(shooter_period(2.0), 60);
        assert_eq!(shooter_period(10.0), SHOOTER_MIN_COOLDOWN);
    }

    #[test]
    fn test_shooter_period_by_level() {
        assert_eq!(shooter_period(difficulty_for(1)), 109);
        assert_eq!(shooter_period(difficulty_for(2)), 100);
        assert_eq!(shooter_period(difficulty_for(3)), 92);
        assert_eq!(shooter_period(difficulty_for(10)), 60);
        assert_eq!(shooter_period(difficulty_for(40)), 30);
    }

    #[test]
    fn test_level_five_enemy_count() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut next_id = 1;
        let level = generate_level(5, &mut rng, &mut next_id);
        assert_eq!(level.enemies.len(), 4);
        assert_eq!(next_id, 5);
    }

    #[test]
    fn test_floor_covers_world() {
        let mut rng = Pcg32::seed_from_u64(1);
        let level = generate_level(1, &mut rng, &mut 1);
        let floor = floor_of(&level);
        assert_eq!(floor[0].body.x, 0.0);
        let last = floor.last().unwrap();
        assert!(last.body.x < WORLD_WIDTH);
        assert!(last.body.right() + FLOOR_GAP_MAX as f32 >= WORLD_WIDTH);
    }

    #[test]
    fn test_floating_platforms_in_band() {
        let mut rng = Pcg32::seed_from_u64(2);
        let level = generate_level(1, &mut rng, &mut 1);
        let floating: Vec<_> = level
            .platforms
            .iter()
            .filter(|p| p.body.y < WORLD_HEIGHT - PLATFORM_THICKNESS)
            .collect();
        assert!(!floating.is_empty());
        assert!(floating[0].body.x >= 300.0 && floating[0].body.x <= 600.0);
        for p in &floating {
            assert!(p.body.y >= 200.0 && p.body.y <= 350.0);
            assert!(p.body.x < WORLD_WIDTH - FLOATING_END_MARGIN);
            assert!(p.body.width >= 80.0 && p.body.width <= 200.0);
        }
    }

    #[test]
    fn test_flag_anchored_to_last_generated_platform() {
        let mut rng = Pcg32::seed_from_u64(3);
        let level = generate_level(2, &mut rng, &mut 1);
        let last = level.platforms.last().unwrap().body;
        assert_eq!(level.flag.body.x, last.right() - 20.0);
        assert_eq!(level.flag.body.y, last.y - 50.0);
        assert_eq!(level.checkpoint.body.x, last.x + last.width / 2.0);
        assert_eq!(level.checkpoint.body.y, last.y - 70.0);
        assert!(!level.checkpoint.reached);
    }

    #[test]
    fn test_enemies_past_safe_zone() {
        let mut rng = Pcg32::seed_from_u64(4);
        let level = generate_level(8, &mut rng, &mut 1);
        for enemy in &level.enemies {
            let platform = &level.platforms[enemy.platform_index];
            assert!(platform.body.x > ENEMY_SPAWN_SAFE_ZONE);
            if enemy.is_shooter() {
                assert!(platform.body.x > SHOOTER_MIN_X);
            }
            if let EnemyKind::Shooter { cooldown, period } = enemy.kind {
                assert!(cooldown <= period);
            }
        }
    }

    #[test]
    fn test_no_eligible_platform_skips_enemies() {
        let mut rng = Pcg32::seed_from_u64(9);
        let platforms = vec![Platform::new(0.0, 430.0, 200.0, 20.0)];
        let enemies = generate_enemies(&mut rng, &platforms, 1.5, &mut 1);
        assert!(enemies.is_empty());
    }

    #[test]
    fn test_same_seed_same_level() {
        let a = generate_level(3, &mut Pcg32::seed_from_u64(77), &mut 1);
        let b = generate_level(3, &mut Pcg32::seed_from_u64(77), &mut 1);
        assert_eq!(a.platforms, b.platforms);
        assert_eq!(a.enemies.len(), b.enemies.len());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn floor_gaps_within_bounds(seed in any::<u64>()) {
                let mut rng = Pcg32::seed_from_u64(seed);
                let mut platforms = Vec::new();
                generate_floor(&mut rng, &mut platforms);
                for pair in platforms.windows(2) {
                    let (prev, next) = (pair[0].body, pair[1].body);
                    prop_assert!(next.x >= prev.right() + FLOOR_GAP_MIN as f32);
                    prop_assert!(next.x <= prev.right() + FLOOR_GAP_MAX as f32);
                }
            }

            #[test]
            fn enemy_count_matches_difficulty(seed in any::<u64>(), level in 1u32..40) {
                let mut rng = Pcg32::seed_from_u64(seed);
                let generated = generate_level(level, &mut rng, &mut 1);
                prop_assert_eq!(generated.enemies.len(), enemy_count(difficulty_for(level)));
            }
        }
    }
}
