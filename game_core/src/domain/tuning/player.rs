use crate::domain::state::Vec3;

/// Gameplay tuning for the player craft.
#[derive(Debug, Clone, Copy)]
pub struct PlayerTuning {
    /// Distance moved per tick along each held direction.
    pub speed: f32,

    /// Horizontal bounds (inclusive).
    pub min_x: f32,
    pub max_x: f32,

    /// Vertical bounds (inclusive).
    pub min_y: f32,
    pub max_y: f32,

    /// Where the craft sits on start and after a restart.
    pub home: Vec3,

    /// Roll applied per unit of x; purely cosmetic.
    pub tilt_factor: f32,

    /// Enemies closer than this (strictly) hit the player.
    pub hit_radius: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            speed: 0.15,
            min_x: -10.0,
            max_x: 10.0,
            min_y: -8.0,
            max_y: 8.0,
            home: Vec3::new(0.0, 0.0, 5.0),
            tilt_factor: -0.1,
            hit_radius: 1.0,
        }
    }
}
