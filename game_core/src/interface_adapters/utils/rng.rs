use crate::domain::SpawnRng;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Spawn randomness backed by `StdRng`; seed it for reproducible runs.
pub struct StdSpawnRng {
    rng: StdRng,
}

impl StdSpawnRng {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl SpawnRng for StdSpawnRng {
    fn range(&mut self, min: f32, max: f32) -> f32 {
        // gen_range panics on an empty range.
        if min >= max {
            return min;
        }
        self.rng.gen_range(min..max)
    }
}
