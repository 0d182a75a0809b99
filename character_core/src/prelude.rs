//! Prelude module for convenient imports
//!
//! ```rust
//! use character_core::prelude::*;
//! ```

// Core types
pub use crate::character::Character;
pub use crate::job::{Ability, Job};
pub use crate::types::{AbilityError, AbilityUse, EquipOutcome, LevelUp, Slot};

// Config
pub use crate::config::{
    constants, init_constants, init_constants_default, ConfigError, GameConstants,
};

// Re-exports from gear_core
pub use gear_core::{
    Accessory, AccessoryKind, MainWeaponKind, SubWeaponKind, Weapon, WeaponKind,
};
