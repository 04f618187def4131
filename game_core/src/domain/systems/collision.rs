use crate::domain::pool::EntityPool;
use crate::domain::state::{Bullet, Enemy, EntityId, Player, SpatialEntity};

#[derive(Debug, Default, PartialEq)]
pub struct PlayerHits {
    /// Enemies destroyed by ramming the player, in the order they were found.
    pub enemies: Vec<EntityId>,
    /// Set when lives hit zero; the pass stopped at that hit.
    pub defeated: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kill {
    pub bullet: EntityId,
    pub enemy: EntityId,
}

/// Player-vs-enemy pass (naive O(E)).
///
/// Every enemy strictly inside `hit_radius` is destroyed and costs one life.
/// Once lives reach zero the pass stops; remaining enemies are left alone.
pub fn player_vs_enemies(
    player: &Player,
    enemies: &mut EntityPool<Enemy>,
    lives: &mut u32,
    hit_radius: f32,
) -> PlayerHits {
    let mut hits = PlayerHits::default();

    for i in (0..enemies.len()).rev() {
        let Some(enemy) = enemies.get(i) else {
            continue;
        };
        if enemy.distance_to(player) >= hit_radius {
            continue;
        }

        let enemy = enemies.remove_at(i);
        hits.enemies.push(enemy.id);
        debug_assert!(*lives > 0, "player hit with no lives left");
        *lives = lives.saturating_sub(1);

        if *lives == 0 {
            hits.defeated = true;
            break;
        }
    }

    hits
}

/// Bullet-vs-enemy pass (naive O(B*E)).
///
/// A bullet kills at most one enemy: the first one within `hit_radius` in
/// reverse pool order. Both are removed immediately, so neither is tested
/// again this tick.
pub fn bullets_vs_enemies(
    bullets: &mut EntityPool<Bullet>,
    enemies: &mut EntityPool<Enemy>,
    hit_radius: f32,
) -> Vec<Kill> {
    let mut kills = Vec::new();

    for i in (0..bullets.len()).rev() {
        let Some(bullet) = bullets.get(i) else {
            continue;
        };
        let bullet_pos = bullet.position();

        let target = (0..enemies.len()).rev().find(|&j| {
            enemies
                .get(j)
                .is_some_and(|e| e.position().distance_to(bullet_pos) < hit_radius)
        });

        if let Some(j) = target {
            let bullet = bullets.remove_at(i);
            let enemy = enemies.remove_at(j);
            kills.push(Kill {
                bullet: bullet.id,
                enemy: enemy.id,
            });
        }
    }

    kills
}
