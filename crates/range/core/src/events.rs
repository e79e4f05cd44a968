//! Observational events emitted by the firing protocol.
//!
//! Events are presentation feedback, never control flow: the weapon's
//! return values carry the authoritative outcome, and a host that ignores
//! every event still observes identical state transitions.

use crate::state::BulletType;

/// Notifications the core hands to the presentation collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeaponEvent {
    /// A round left the chamber and is gone from the model. Hosts use
    /// this to drive flight animation.
    Fired { kind: BulletType },

    /// A reload was requested against a box index that does not exist.
    ReloadDenied { index: usize, available: usize },

    /// The selected ammo box has no bullets left; the caller should let
    /// the user pick again.
    BoxExhausted { index: usize, kind: BulletType },
}

/// Capability that receives [`WeaponEvent`]s as they happen.
pub trait EventSink {
    fn emit(&mut self, event: WeaponEvent);
}

/// Sink that drops every event. For hosts that only care about return
/// values and statistics.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: WeaponEvent) {}
}

/// Sink that records every event in order. Used by tests and by hosts
/// that render a session after the fact.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    pub events: Vec<WeaponEvent>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded `Fired` events.
    pub fn fired(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, WeaponEvent::Fired { .. }))
            .count()
    }
}

impl EventSink for MemorySink {
    fn emit(&mut self, event: WeaponEvent) {
        self.events.push(event);
    }
}
