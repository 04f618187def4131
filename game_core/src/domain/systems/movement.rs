use crate::domain::input::{Action, InputState};
use crate::domain::pool::EntityPool;
use crate::domain::state::{Bullet, Enemy, Player};
use crate::domain::tuning::{EnemyTuning, PlayerTuning, ProjectileTuning};

/// Applies held directions to the player, then clamps to bounds.
///
/// Opposite directions held together both apply and cancel out.
pub fn move_player(player: &mut Player, input: &InputState, cfg: &PlayerTuning) {
    let p = &mut player.position;

    if input.is_active(Action::Up) {
        p.y = (p.y + cfg.speed).min(cfg.max_y);
    }
    if input.is_active(Action::Down) {
        p.y = (p.y - cfg.speed).max(cfg.min_y);
    }
    if input.is_active(Action::Left) {
        p.x = (p.x - cfg.speed).max(cfg.min_x);
    }
    if input.is_active(Action::Right) {
        p.x = (p.x + cfg.speed).min(cfg.max_x);
    }

    // Out-of-range positions (e.g. a bad reset) are corrected, never reported.
    p.x = p.x.clamp(cfg.min_x, cfg.max_x);
    p.y = p.y.clamp(cfg.min_y, cfg.max_y);

    player.tilt = p.x * cfg.tilt_factor;
}

/// Advances every enemy toward the player and culls those that slipped past.
///
/// Culled enemies are misses, not hits; they are returned so the caller can
/// report them.
pub fn advance_enemies(enemies: &mut EntityPool<Enemy>, cfg: &EnemyTuning) -> Vec<Enemy> {
    for e in enemies.iter_mut() {
        e.position.z += cfg.speed;
        e.rotation.x += cfg.spin;
        e.rotation.y += cfg.spin;
    }

    enemies.remove_where(|e| e.position.z > cfg.pass_z)
}

/// Advances every bullet away from the player and culls off-screen ones.
pub fn advance_bullets(bullets: &mut EntityPool<Bullet>, cfg: &ProjectileTuning) -> Vec<Bullet> {
    for b in bullets.iter_mut() {
        b.position.z -= cfg.speed;
    }

    bullets.remove_where(|b| b.position.z < cfg.despawn_z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::input::KeyBindings;
    use crate::domain::state::Vec3;

    fn holding(keys: &[&str]) -> InputState {
        let bindings = KeyBindings::default();
        let mut input = InputState::default();
        for key in keys {
            input.set(bindings.resolve(key).expect("key is bound"), true);
        }
        input
    }

    #[test]
    fn when_held_for_many_ticks_then_player_never_leaves_bounds() {
        let cfg = PlayerTuning::default();
        let combos: [&[&str]; 4] = [
            &["w", "d"],
            &["s", "a"],
            &["arrowup", "w", "arrowleft"],
            &["arrowdown", "arrowright", "d"],
        ];

        for combo in combos {
            let mut player = Player::at(cfg.home);
            let input = holding(combo);
            for _ in 0..500 {
                move_player(&mut player, &input, &cfg);
                assert!((cfg.min_x..=cfg.max_x).contains(&player.position.x));
                assert!((cfg.min_y..=cfg.max_y).contains(&player.position.y));
            }
        }
    }

    #[test]
    fn when_two_aliases_of_one_direction_are_held_then_speed_is_not_doubled() {
        let cfg = PlayerTuning::default();
        let mut player = Player::at(cfg.home);

        move_player(&mut player, &holding(&["w", "arrowup"]), &cfg);

        assert!((player.position.y - cfg.speed).abs() < 1e-6);
    }

    #[test]
    fn when_opposite_directions_are_held_then_player_stays_put() {
        let cfg = PlayerTuning::default();
        let mut player = Player::at(cfg.home);

        move_player(&mut player, &holding(&["a", "d"]), &cfg);

        assert!(player.position.x.abs() < 1e-6);
    }

    #[test]
    fn when_player_moves_right_then_tilt_follows_x() {
        let cfg = PlayerTuning::default();
        let mut player = Player::at(cfg.home);

        for _ in 0..10 {
            move_player(&mut player, &holding(&["d"]), &cfg);
        }

        assert!((player.tilt - player.position.x * -0.1).abs() < 1e-6);
        assert!(player.tilt < 0.0);
    }

    #[test]
    fn when_player_starts_outside_bounds_then_it_is_clamped() {
        let cfg = PlayerTuning::default();
        let mut player = Player::at(Vec3::new(25.0, -30.0, 5.0));

        move_player(&mut player, &InputState::default(), &cfg);

        assert_eq!(player.position.x, 10.0);
        assert_eq!(player.position.y, -8.0);
    }

    #[test]
    fn when_enemy_spawns_at_minus_thirty_then_it_is_culled_just_after_reaching_twenty() {
        let cfg = EnemyTuning::default();
        let mut enemies = EntityPool::new();
        enemies.add(Enemy::new(1, Vec3::new(0.0, 0.0, cfg.spawn_z)));

        for _ in 0..625 {
            assert!(advance_enemies(&mut enemies, &cfg).is_empty());
        }
        let z = enemies.get(0).expect("enemy still live").position.z;
        assert!((z - 20.0).abs() < 1e-3);

        let culled = advance_enemies(&mut enemies, &cfg);
        assert_eq!(culled.len(), 1);
        assert!(enemies.is_empty());
    }

    #[test]
    fn when_bullet_fired_at_four_then_it_is_culled_on_tick_eighty_nine() {
        let cfg = ProjectileTuning::default();
        let mut bullets = EntityPool::new();
        bullets.add(Bullet {
            id: 1,
            position: Vec3::new(0.0, 0.0, 4.0),
        });

        for _ in 0..88 {
            assert!(advance_bullets(&mut bullets, &cfg).is_empty());
        }
        assert_eq!(bullets.get(0).expect("bullet still live").position.z, -40.0);

        let culled = advance_bullets(&mut bullets, &cfg);
        assert_eq!(culled.len(), 1);
        assert_eq!(culled[0].id, 1);
    }

    #[test]
    fn when_enemies_advance_then_spin_accumulates_on_x_and_y_only() {
        let cfg = EnemyTuning::default();
        let mut enemies = EntityPool::new();
        enemies.add(Enemy::new(1, Vec3::new(0.0, 0.0, cfg.spawn_z)));

        advance_enemies(&mut enemies, &cfg);
        advance_enemies(&mut enemies, &cfg);

        let rotation = enemies.get(0).expect("enemy live").rotation;
        assert!((rotation.x - 0.04).abs() < 1e-6);
        assert!((rotation.y - 0.04).abs() < 1e-6);
        assert_eq!(rotation.z, 0.0);
    }
}
