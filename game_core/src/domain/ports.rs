// Ports the simulation depends on but does not implement.

/// Source of uniformly distributed values for spawn placement.
pub trait SpawnRng: Send {
    /// Returns a value in `[min, max)`.
    fn range(&mut self, min: f32, max: f32) -> f32;
}
