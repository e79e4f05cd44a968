//! Static ammunition catalog.
//!
//! Per-type ballistics data for presentation layers, the standard handling
//! cost table, and the preset armory hosts start from. Catalog data is
//! consumed by hosts and never appears in weapon state.

use range_core::{AmmoBox, AmmoStore, Bullet, BulletType, FlatCosts, Millis};

/// Presentation-facing data for one bullet type.
///
/// `trace_symbol` and `flight_millis` drive flight animation in clients
/// that render one; the core never looks at them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BallisticsProfile {
    pub name: &'static str,
    pub trace_symbol: char,
    pub flight_millis: u64,
}

/// Ballistics profile for a bullet type.
pub const fn profile(kind: BulletType) -> BallisticsProfile {
    match kind {
        BulletType::Subsonic => BallisticsProfile {
            name: "subsonic",
            trace_symbol: '.',
            flight_millis: 100,
        },
        BulletType::Regular => BallisticsProfile {
            name: "regular",
            trace_symbol: '*',
            flight_millis: 200,
        },
        BulletType::Tracer => BallisticsProfile {
            name: "tracer",
            trace_symbol: '-',
            flight_millis: 300,
        },
    }
}

/// Standard handling cost table: 10 ms to seat a round, 300 ms to
/// extract one.
pub const fn standard_costs() -> FlatCosts {
    FlatCosts::new(Millis::new(10), Millis::new(300))
}

/// The preset armory: ten subsonic, twenty regular, five tracer.
pub fn standard_ammo_store() -> AmmoStore {
    let mut store = AmmoStore::new();
    for ammo_box in [
        AmmoBox::new(BulletType::Subsonic, 10),
        AmmoBox::new(BulletType::Regular, 20),
        AmmoBox::new(BulletType::Tracer, 5),
    ] {
        store.push(ammo_box).expect("preset fits the store bound");
    }
    store
}

/// One round of each type, the traditional demo load.
pub fn starter_magazine() -> Vec<Bullet> {
    BulletType::ALL.map(Bullet::new).to_vec()
}
