// Gameplay tuning, kept apart from runtime configuration (tick rate, channel sizes).

pub mod enemy;
pub mod player;
pub mod projectile;
pub mod rules;

pub use enemy::EnemyTuning;
pub use player::PlayerTuning;
pub use projectile::ProjectileTuning;
pub use rules::RulesTuning;

#[derive(Debug, Clone, Copy, Default)]
pub struct GameTuning {
    pub player: PlayerTuning,
    pub enemy: EnemyTuning,
    pub projectile: ProjectileTuning,
    pub rules: RulesTuning,
}
