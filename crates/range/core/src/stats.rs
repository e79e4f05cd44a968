//! Session statistics accumulation.

use std::fmt;

use crate::state::{BulletType, Millis};

/// Per-type fired-round counters. A struct with one field per variant
/// keeps the mapping total and exhaustively matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeCounts {
    pub subsonic: u32,
    pub regular: u32,
    pub tracer: u32,
}

impl TypeCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: BulletType) -> u32 {
        match kind {
            BulletType::Subsonic => self.subsonic,
            BulletType::Regular => self.regular,
            BulletType::Tracer => self.tracer,
        }
    }

    pub fn record(&mut self, kind: BulletType) {
        match kind {
            BulletType::Subsonic => self.subsonic += 1,
            BulletType::Regular => self.regular += 1,
            BulletType::Tracer => self.tracer += 1,
        }
    }

    pub fn merge(&mut self, other: &TypeCounts) {
        self.subsonic += other.subsonic;
        self.regular += other.regular;
        self.tracer += other.tracer;
    }

    pub fn total(&self) -> u32 {
        self.subsonic + self.regular + self.tracer
    }
}

/// Accumulated bookkeeping for one firing session.
///
/// Created fresh per session, mutated only by that session, and returned
/// at session end. Never shared across sessions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionStatistics {
    /// Rounds fired across the whole session.
    pub fired_count: u32,
    /// Times the magazine was stocked from the session batch.
    pub magazines_loaded: u32,
    /// Accumulated cost of seating rounds while stocking magazines.
    pub loading_cost: Millis,
    /// Accumulated cost of the shoot path (magazine extract, chamber
    /// load, chamber extract).
    pub firing_cost: Millis,
    /// Fired rounds broken down by bullet type.
    pub counts: TypeCounts,
}

impl SessionStatistics {
    pub fn new() -> Self {
        Self::default()
    }
}

impl fmt::Display for SessionStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fired {} rounds over {} magazines (subsonic {}, regular {}, tracer {}); loading {}, firing {}",
            self.fired_count,
            self.magazines_loaded,
            self.counts.subsonic,
            self.counts.regular,
            self.counts.tracer,
            self.loading_cost,
            self.firing_cost,
        )
    }
}
