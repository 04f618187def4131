use crate::domain::ports::SpawnRng;
use crate::domain::state::Vec3;
use crate::domain::tuning::EnemyTuning;

/// Timer-driven enemy spawn policy.
///
/// The counter only resets when a spawn actually happens, so while the pool
/// is at capacity it keeps accumulating and the first free slot is filled on
/// the next over-threshold tick.
#[derive(Debug, Clone)]
pub struct SpawnController {
    counter: u32,
    interval_ticks: u32,
    max_live: usize,
}

impl SpawnController {
    pub fn new(cfg: &EnemyTuning) -> Self {
        Self {
            counter: 0,
            interval_ticks: cfg.spawn_interval_ticks,
            max_live: cfg.max_live,
        }
    }

    /// Advances the timer; returns true when exactly one enemy should spawn.
    pub fn tick(&mut self, live_enemies: usize) -> bool {
        self.counter = self.counter.saturating_add(1);
        if self.counter > self.interval_ticks && live_enemies < self.max_live {
            self.counter = 0;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.counter = 0;
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }
}

/// Picks a uniformly random point on the spawn plane.
pub fn spawn_position(rng: &mut dyn SpawnRng, cfg: &EnemyTuning) -> Vec3 {
    let x = rng.range(-cfg.spawn_half_width, cfg.spawn_half_width);
    let y = rng.range(-cfg.spawn_half_height, cfg.spawn_half_height);
    Vec3::new(x, y, cfg.spawn_z)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Always returns the lower bound so placement is predictable.
    struct LowRng;

    impl SpawnRng for LowRng {
        fn range(&mut self, min: f32, _max: f32) -> f32 {
            min
        }
    }

    fn controller(interval: u32, cap: usize) -> SpawnController {
        SpawnController::new(&EnemyTuning {
            spawn_interval_ticks: interval,
            max_live: cap,
            ..EnemyTuning::default()
        })
    }

    #[test]
    fn when_counter_has_not_exceeded_interval_then_nothing_spawns() {
        let mut spawner = controller(60, 10);

        for _ in 0..60 {
            assert!(!spawner.tick(0));
        }
        assert_eq!(spawner.counter(), 60);
    }

    #[test]
    fn when_counter_exceeds_interval_then_one_spawn_and_counter_resets() {
        let mut spawner = controller(60, 10);
        for _ in 0..60 {
            spawner.tick(0);
        }

        assert!(spawner.tick(0));
        assert_eq!(spawner.counter(), 0);
    }

    #[test]
    fn when_pool_is_full_then_timer_keeps_running_until_a_slot_frees() {
        let mut spawner = controller(2, 1);

        for _ in 0..10 {
            assert!(!spawner.tick(1));
        }
        assert_eq!(spawner.counter(), 10);

        // Slot frees up: spawn happens right away, not after a fresh cycle.
        assert!(spawner.tick(0));
        assert_eq!(spawner.counter(), 0);
    }

    #[test]
    fn when_spawning_then_position_lies_on_the_spawn_plane() {
        let cfg = EnemyTuning::default();

        let pos = spawn_position(&mut LowRng, &cfg);

        assert_eq!(pos, Vec3::new(-10.0, -7.5, -30.0));
    }
}
