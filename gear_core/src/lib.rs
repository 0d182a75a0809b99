//! gear_core - Weapon and accessory value model for game characters
//!
//! This library provides:
//! - Weapon: a levelable item with a derived main stat
//! - Accessory: an immutable item with a named percentage effect
//! - Kind enums for routing items into character equip slots
//!
//! Stats are fully deterministic: a weapon's main stat is always
//! `base_stat + 2.5 * level`, and `upgrade()` moves both fields in
//! lockstep.

pub mod accessory;
pub mod types;
pub mod weapon;

pub use accessory::Accessory;
pub use types::{AccessoryKind, MainWeaponKind, SubWeaponKind, WeaponKind};
pub use weapon::{Weapon, STAT_PER_LEVEL};
