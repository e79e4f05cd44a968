//! Ammunition state types.
//!
//! Everything here is a plain value: bullets, the bounded LIFO containers
//! they move through, and the bulk boxes they are drawn from. All
//! cross-container transfers are mediated by [`crate::weapon::Weapon`]; no
//! type in this module reaches into another's storage.

mod ammo_box;
mod bullet;
mod common;
mod stack;

pub use ammo_box::{AmmoBox, AmmoStore};
pub use bullet::{Bullet, BulletType};
pub use common::Millis;
pub use stack::{BulletStack, Chamber, Magazine, StackError};
