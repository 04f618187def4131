/// Scoring and lives.
#[derive(Debug, Clone, Copy)]
pub struct RulesTuning {
    pub starting_lives: u32,
    pub points_per_kill: u32,

    /// Background spin per tick; keeps running in every phase.
    pub starfield_spin: f32,
}

impl Default for RulesTuning {
    fn default() -> Self {
        Self {
            starting_lives: 3,
            points_per_kill: 10,
            starfield_spin: 0.0001,
        }
    }
}
