// Domain layer: core simulation types and rules.

pub mod input;
pub mod pool;
pub mod ports;
pub mod state;
pub mod systems;
pub mod tuning;

pub use input::{Action, InputState, KeyBindings};
pub use pool::EntityPool;
pub use ports::SpawnRng;
pub use state::{
    Bullet, Enemy, EntityId, EntityKind, EntitySnapshot, Player, SpatialEntity, Vec3,
};
pub use tuning::GameTuning;
