/// Range configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeConfig {
    /// Smallest batch a firing session may generate.
    pub batch_min: u32,
    /// Largest batch a firing session may generate (inclusive).
    pub batch_max: u32,
}

impl RangeConfig {
    // ===== compile-time constants used as type parameters =====
    /// Rounds a magazine holds when fully loaded.
    pub const MAGAZINE_CAPACITY: usize = 30;
    /// The chamber seats exactly one round. Enforced as a hard cap, not a
    /// usage convention.
    pub const CHAMBER_CAPACITY: usize = 1;
    /// Maximum number of ammo boxes a weapon can draw from.
    pub const MAX_AMMO_BOXES: usize = 8;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_BATCH_MIN: u32 = 30;
    pub const DEFAULT_BATCH_MAX: u32 = 50;

    pub fn new() -> Self {
        Self {
            batch_min: Self::DEFAULT_BATCH_MIN,
            batch_max: Self::DEFAULT_BATCH_MAX,
        }
    }

    pub fn with_batch_range(batch_min: u32, batch_max: u32) -> Self {
        Self {
            batch_min,
            batch_max,
        }
    }
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self::new()
    }
}
