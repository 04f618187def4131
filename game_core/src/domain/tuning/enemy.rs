/// Gameplay tuning for enemies and their spawn policy.
#[derive(Debug, Clone, Copy)]
pub struct EnemyTuning {
    /// Forward (+z) distance per tick.
    pub speed: f32,

    /// Spin added to the x and y rotation axes per tick.
    pub spin: f32,

    /// Spawn plane and half-extents of the spawn rectangle.
    pub spawn_z: f32,
    pub spawn_half_width: f32,
    pub spawn_half_height: f32,

    /// Enemies past this z have slipped by the player and are culled.
    pub pass_z: f32,

    /// Ticks that must elapse (strictly more than) before the next spawn.
    pub spawn_interval_ticks: u32,

    /// Upper bound on concurrently live enemies.
    pub max_live: usize,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            speed: 0.08,
            spin: 0.02,
            spawn_z: -30.0,
            spawn_half_width: 10.0,
            spawn_half_height: 7.5,
            pass_z: 20.0,
            spawn_interval_ticks: 60,
            max_live: 10,
        }
    }
}
