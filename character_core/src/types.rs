//! Slots and the displayable outcome values of character operations

use crate::job::{Ability, Job};
use gear_core::{MainWeaponKind, SubWeaponKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Equip slot on a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    MainHand,
    OffHand,
    Amulet,
    Ring,
    Earring,
}

impl Slot {
    /// Get all equip slots
    pub fn all() -> &'static [Slot] {
        &[
            Slot::MainHand,
            Slot::OffHand,
            Slot::Amulet,
            Slot::Ring,
            Slot::Earring,
        ]
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::MainHand => write!(f, "Main Weapon"),
            Slot::OffHand => write!(f, "Sub Weapon"),
            Slot::Amulet => write!(f, "Amulet"),
            Slot::Ring => write!(f, "Ring"),
            Slot::Earring => write!(f, "Earring"),
        }
    }
}

/// Result of an equip operation
///
/// A rejection is an expected outcome of the job policy, not an error;
/// the character's slots are untouched when it is returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EquipOutcome {
    /// The item now occupies the slot (any previous occupant is dropped)
    Equipped { slot: Slot, name: String },
    /// The job's equip policy refused the item; nothing changed
    Rejected {
        job: Job,
        allowed: (MainWeaponKind, SubWeaponKind),
    },
}

impl EquipOutcome {
    pub fn was_equipped(&self) -> bool {
        matches!(self, EquipOutcome::Equipped { .. })
    }

    /// The slot that was filled, if the item was equipped
    pub fn slot(&self) -> Option<Slot> {
        match self {
            EquipOutcome::Equipped { slot, .. } => Some(*slot),
            EquipOutcome::Rejected { .. } => None,
        }
    }
}

impl fmt::Display for EquipOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EquipOutcome::Equipped { slot, name } => {
                write!(f, "Equipped {} : {}", slot, name)
            }
            EquipOutcome::Rejected {
                job,
                allowed: (main, sub),
            } => {
                write!(f, "{} can equip only {} & {}", job, main, sub)
            }
        }
    }
}

/// Notification returned by a level-up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUp {
    pub name: String,
    pub level: u32,
}

impl fmt::Display for LevelUp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} leveled up! (Lv.{})", self.name, self.level)
    }
}

/// A performed ability, naming the acting character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityUse {
    pub actor: String,
    pub ability: Ability,
}

impl fmt::Display for AbilityUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} uses {}!", self.actor, self.ability)
    }
}

/// Error performing an ability
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AbilityError {
    #[error("{job} does not grant the {ability} ability")]
    NotGranted { job: Job, ability: Ability },
}
