//! character_core - Job, equip-slot, and level-up model for game characters
//!
//! This library provides:
//! - Character: the aggregate holding stats and five equip slots
//! - Job: the fixed capability bundle (name, abilities, equip policy)
//! - GameConstants: TOML-tunable growth and base-stat numbers
//! - Displayable outcome values for every state-changing operation
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use character_core::prelude::*;
//!
//! init_constants_default().unwrap();
//!
//! let mut james = Character::warrior("James");
//! println!("{}", james.equip_weapon(Weapon::sword("James's Legacy", 30, 10.0)));
//! println!("{}", james.level_up());
//! println!("{}", james.character_sheet());
//! ```

pub mod character;
pub mod config;
pub mod job;
pub mod prelude;
pub mod types;

// Core API - what most users need
pub use character::Character;
pub use job::{Ability, Job};
pub use types::{AbilityError, AbilityUse, EquipOutcome, LevelUp, Slot};

// Configuration
pub use config::{constants, init_constants, init_constants_default, GameConstants};

// Re-export commonly needed gear_core types
pub use gear_core::{Accessory, AccessoryKind, MainWeaponKind, SubWeaponKind, Weapon, WeaponKind};
