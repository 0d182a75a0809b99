//! Jobs and their fixed ability lists and equip policies

use gear_core::{MainWeaponKind, SubWeaponKind, WeaponKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ability granted by exactly one job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ability {
    Slash,
    Block,
    CastSpell,
    Teleport,
    Shot,
    Dodge,
}

impl Ability {
    /// The job that grants this ability
    pub fn job(&self) -> Job {
        match self {
            Ability::Slash | Ability::Block => Job::Warrior,
            Ability::CastSpell | Ability::Teleport => Job::Mage,
            Ability::Shot | Ability::Dodge => Job::Archer,
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ability::Slash => write!(f, "Slash"),
            Ability::Block => write!(f, "Block"),
            Ability::CastSpell => write!(f, "Cast Spell"),
            Ability::Teleport => write!(f, "Teleport"),
            Ability::Shot => write!(f, "Shot"),
            Ability::Dodge => write!(f, "Dodge"),
        }
    }
}

/// A character's job - a fixed bundle of identity, abilities, and
/// the pair of weapon kinds it may equip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Job {
    Warrior,
    Mage,
    Archer,
}

impl Job {
    /// Get all jobs
    pub fn all() -> &'static [Job] {
        &[Job::Warrior, Job::Mage, Job::Archer]
    }

    /// Display name of the job
    pub fn name(&self) -> &'static str {
        match self {
            Job::Warrior => "Warrior",
            Job::Mage => "Mage",
            Job::Archer => "Archer",
        }
    }

    /// The job's abilities, in fixed order
    pub fn abilities(&self) -> &'static [Ability] {
        match self {
            Job::Warrior => &[Ability::Slash, Ability::Block],
            Job::Mage => &[Ability::CastSpell, Ability::Teleport],
            Job::Archer => &[Ability::Shot, Ability::Dodge],
        }
    }

    /// The single main-hand / off-hand weapon pair this job accepts
    pub fn allowed_weapons(&self) -> (MainWeaponKind, SubWeaponKind) {
        match self {
            Job::Warrior => (MainWeaponKind::Sword, SubWeaponKind::Shield),
            Job::Mage => (MainWeaponKind::Staff, SubWeaponKind::Charm),
            Job::Archer => (MainWeaponKind::Bow, SubWeaponKind::Dagger),
        }
    }

    /// Whether a weapon of this kind may be equipped by this job
    pub fn allows(&self, kind: WeaponKind) -> bool {
        let (main, sub) = self.allowed_weapons();
        match kind {
            WeaponKind::Main(k) => k == main,
            WeaponKind::Sub(k) => k == sub,
        }
    }

    /// Render the job name and its ability list
    pub fn ability_sheet(&self) -> String {
        let abilities: Vec<String> = self.abilities().iter().map(Ability::to_string).collect();
        format!("Job : {}\nAbilities : {}", self.name(), abilities.join(", "))
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
