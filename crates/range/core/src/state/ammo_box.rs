//! Bulk ammunition storage.

use bounded_vector::BoundedVec;

use crate::config::RangeConfig;
use crate::state::BulletType;

/// Bulk reservoir holding bullets of one fixed type.
///
/// Every bullet a box yields carries the box's own type, and the remaining
/// count never goes negative. Boxes are created at setup time and only ever
/// drain; there is no restock operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AmmoBox {
    kind: BulletType,
    remaining: u32,
}

/// Bounded collection of ammo boxes a weapon draws from. Owned by the
/// caller; the weapon only borrows it.
pub type AmmoStore = BoundedVec<AmmoBox, 0, { RangeConfig::MAX_AMMO_BOXES }>;

impl AmmoBox {
    pub const fn new(kind: BulletType, remaining: u32) -> Self {
        Self { kind, remaining }
    }

    /// Bullet type this box yields. Fixed for the box's lifetime.
    pub const fn kind(&self) -> BulletType {
        self.kind
    }

    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    pub const fn has_bullets(&self) -> bool {
        self.remaining > 0
    }

    /// Withdraws up to `count` bullets, best effort.
    ///
    /// Never fails: when stock runs short the box hands over whatever is
    /// left and ends up at zero. Callers that need an exact count must
    /// check the return value.
    pub fn withdraw(&mut self, count: u32) -> u32 {
        let taken = count.min(self.remaining);
        self.remaining -= taken;
        taken
    }
}
