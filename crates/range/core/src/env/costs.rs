//! Cost oracle for per-operation handling costs.
//!
//! The original discipline of sleeping through every load and extract is
//! replaced by a pluggable cost table: operations report their cost as
//! data and sessions accumulate it into statistics.

use crate::state::Millis;

/// Oracle supplying the abstract cost of individual bullet-handling
/// operations.
pub trait CostOracle: Send + Sync {
    /// Cost of seating one round into a container.
    fn load_cost(&self) -> Millis;

    /// Cost of extracting one round from a container.
    fn extract_cost(&self) -> Millis;
}

/// Cost table with fixed per-operation values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlatCosts {
    pub load: Millis,
    pub extract: Millis,
}

impl FlatCosts {
    pub const fn new(load: Millis, extract: Millis) -> Self {
        Self { load, extract }
    }
}

impl CostOracle for FlatCosts {
    fn load_cost(&self) -> Millis {
        self.load
    }

    fn extract_cost(&self) -> Millis {
        self.extract
    }
}
