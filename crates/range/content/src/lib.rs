//! Static range content and data-file loaders.
//!
//! This crate houses the data the core deliberately does not own:
//! - Ballistics profiles per bullet type (display name, trace symbol,
//!   flight time) for presentation layers
//! - The standard handling cost table
//! - Preset ammo boxes and the starter magazine
//! - A TOML loader for host-tunable parameters
//!
//! Content is consumed by hosts and oracles and never appears in weapon
//! state.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{
    BallisticsProfile, profile, standard_ammo_store, standard_costs, starter_magazine,
};

#[cfg(feature = "loaders")]
pub use loaders::{RangeTunables, TunablesLoader};
