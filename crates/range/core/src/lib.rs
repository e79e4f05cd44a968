//! Deterministic ammunition-handling logic shared across hosts.
//!
//! `range-core` defines the canonical rules of the firing range: bullets,
//! bounded containers, the weapon's reload/fire protocol, and the bulk
//! firing session. All state mutation flows through [`weapon::Weapon`],
//! randomness and operation costs come in through [`env`] oracles, and
//! observational events go out through [`events::EventSink`]. The crate
//! performs no I/O and never blocks, so every behavior is exactly
//! reproducible from a seed.
pub mod config;
pub mod env;
pub mod error;
pub mod events;
pub mod session;
pub mod state;
pub mod stats;
pub mod weapon;

pub use config::RangeConfig;
pub use env::{CostOracle, Env, FlatCosts, OracleError, PcgRng, RangeEnv, RngOracle, compute_seed};
pub use error::ErrorSeverity;
pub use events::{EventSink, MemorySink, NullSink, WeaponEvent};
pub use session::{FiringSession, SessionError};
pub use state::{
    AmmoBox, AmmoStore, Bullet, BulletStack, BulletType, Chamber, Magazine, Millis, StackError,
};
pub use stats::{SessionStatistics, TypeCounts};
pub use weapon::{
    LoadReport, ReloadError, ReloadReport, ShootError, ShotReport, VolleyReport, Weapon,
    WeaponState,
};
