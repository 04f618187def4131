/// Gameplay tuning for bullets.
#[derive(Debug, Clone, Copy)]
pub struct ProjectileTuning {
    /// Distance travelled toward -z per tick.
    pub speed: f32,

    /// Offset from the player's z at which a bullet appears.
    pub spawn_offset_z: f32,

    /// Bullets below this z are off-screen and culled.
    pub despawn_z: f32,

    /// Enemies closer than this (strictly) to a bullet are destroyed.
    pub hit_radius: f32,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            speed: 0.5,
            spawn_offset_z: -1.0,
            despawn_z: -40.0,
            hit_radius: 0.8,
        }
    }
}
