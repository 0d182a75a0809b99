//! The character aggregate: stats, equip slots, and job capability

use crate::config;
use crate::job::{Ability, Job};
use crate::types::{AbilityError, AbilityUse, EquipOutcome, LevelUp, Slot};
use gear_core::{Accessory, AccessoryKind, Weapon, WeaponKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A game character: identity, level-scaled stats, and five equip slots
///
/// Equipping moves the item into the character, so an item instance can
/// only ever sit on one character; upgrading an equipped weapon goes
/// through `main_hand_mut()` / `off_hand_mut()`.
///
/// Invariant: `max_speed == base_speed + speed_per_level * (level - 1)`
/// and `speed == max_speed` (there is no damage or fatigue model).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    name: String,
    job: Job,
    level: u32,
    hp: f64,
    max_hp: f64,
    mana: f64,
    max_mana: f64,
    base_speed: f64,
    speed: f64,
    max_speed: f64,
    main_hand: Option<Weapon>,
    off_hand: Option<Weapon>,
    amulet: Option<Accessory>,
    ring: Option<Accessory>,
    earring: Option<Accessory>,
}

impl Character {
    /// Create a level-1 character with the job's base stats and empty slots
    pub fn new(name: impl Into<String>, job: Job) -> Self {
        let base = config::constants().jobs.for_job(job);
        Character {
            name: name.into(),
            job,
            level: 1,
            hp: base.max_hp,
            max_hp: base.max_hp,
            mana: base.max_mana,
            max_mana: base.max_mana,
            base_speed: base.base_speed,
            speed: base.base_speed,
            max_speed: base.base_speed,
            main_hand: None,
            off_hand: None,
            amulet: None,
            ring: None,
            earring: None,
        }
    }

    pub fn warrior(name: impl Into<String>) -> Self {
        Character::new(name, Job::Warrior)
    }

    pub fn mage(name: impl Into<String>) -> Self {
        Character::new(name, Job::Mage)
    }

    pub fn archer(name: impl Into<String>) -> Self {
        Character::new(name, Job::Archer)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn job(&self) -> Job {
        self.job
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn hp(&self) -> f64 {
        self.hp
    }

    pub fn max_hp(&self) -> f64 {
        self.max_hp
    }

    pub fn mana(&self) -> f64 {
        self.mana
    }

    pub fn max_mana(&self) -> f64 {
        self.max_mana
    }

    pub fn base_speed(&self) -> f64 {
        self.base_speed
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    /// Raise the character one level, applying the growth constants
    ///
    /// There is no level cap. Returns the notification value.
    pub fn level_up(&mut self) -> LevelUp {
        let growth = &config::constants().growth;
        self.level += 1;
        self.hp += growth.hp_per_level;
        self.max_hp += growth.hp_per_level;
        self.mana += growth.mana_per_level;
        self.max_mana += growth.mana_per_level;
        self.speed += growth.speed_per_level;
        self.max_speed += growth.speed_per_level;
        LevelUp {
            name: self.name.clone(),
            level: self.level,
        }
    }

    /// Store the accessory in its kind's slot, dropping any previous occupant
    pub fn equip_accessory(&mut self, accessory: Accessory) -> EquipOutcome {
        let (slot, target) = match accessory.kind() {
            AccessoryKind::Amulet => (Slot::Amulet, &mut self.amulet),
            AccessoryKind::Ring => (Slot::Ring, &mut self.ring),
            AccessoryKind::Earring => (Slot::Earring, &mut self.earring),
        };
        let outcome = EquipOutcome::Equipped {
            slot,
            name: accessory.name().to_string(),
        };
        *target = Some(accessory);
        outcome
    }

    /// Store the weapon in its hand's slot if the job's policy allows it
    ///
    /// A disallowed kind returns `Rejected` and leaves every slot untouched.
    pub fn equip_weapon(&mut self, weapon: Weapon) -> EquipOutcome {
        if !self.job.allows(weapon.kind()) {
            return EquipOutcome::Rejected {
                job: self.job,
                allowed: self.job.allowed_weapons(),
            };
        }
        let (slot, target) = match weapon.kind() {
            WeaponKind::Main(_) => (Slot::MainHand, &mut self.main_hand),
            WeaponKind::Sub(_) => (Slot::OffHand, &mut self.off_hand),
        };
        let outcome = EquipOutcome::Equipped {
            slot,
            name: weapon.name().to_string(),
        };
        *target = Some(weapon);
        outcome
    }

    /// Equipped accessories in slot order [amulet, ring, earring]
    pub fn equipped_accessories(&self) -> [Option<&Accessory>; 3] {
        [
            self.amulet.as_ref(),
            self.ring.as_ref(),
            self.earring.as_ref(),
        ]
    }

    /// Equipped weapons in slot order [main hand, off hand]
    pub fn equipped_weapons(&self) -> [Option<&Weapon>; 2] {
        [self.main_hand.as_ref(), self.off_hand.as_ref()]
    }

    /// Mutable access to the main-hand weapon, e.g. to upgrade it
    pub fn main_hand_mut(&mut self) -> Option<&mut Weapon> {
        self.main_hand.as_mut()
    }

    /// Mutable access to the off-hand weapon
    pub fn off_hand_mut(&mut self) -> Option<&mut Weapon> {
        self.off_hand.as_mut()
    }

    /// Perform an ability, if this character's job grants it
    pub fn use_ability(&self, ability: Ability) -> Result<AbilityUse, AbilityError> {
        if ability.job() != self.job {
            return Err(AbilityError::NotGranted {
                job: self.job,
                ability,
            });
        }
        Ok(AbilityUse {
            actor: self.name.clone(),
            ability,
        })
    }

    /// Render level, hp, mana, and speed
    pub fn stat_block(&self) -> String {
        format!(
            "Level : {}\nHp : {} / {}\nMana : {} / {}\nSpeed (Base {}) : {} / {}",
            self.level,
            self.hp,
            self.max_hp,
            self.mana,
            self.max_mana,
            self.base_speed,
            self.speed,
            self.max_speed
        )
    }

    /// Render the full sheet: identity, stats, then one line per occupied slot
    pub fn character_sheet(&self) -> String {
        let mut sheet = String::new();
        sheet.push_str(&format!("Name : {}\n", self.name));
        sheet.push_str(&format!("Job : {}\n", self.job));
        sheet.push_str(&self.stat_block());
        sheet.push_str("\nAccessory :\n");
        for accessory in self.equipped_accessories().into_iter().flatten() {
            sheet.push_str(&format!("  {} : {}\n", accessory.kind(), accessory.name()));
        }
        sheet.push_str("Equipment :");
        for (slot, weapon) in [Slot::MainHand, Slot::OffHand]
            .into_iter()
            .zip(self.equipped_weapons())
        {
            if let Some(weapon) = weapon {
                sheet.push_str(&format!(
                    "\n  {} : {} Lv.{}",
                    slot,
                    weapon.name(),
                    weapon.level()
                ));
            }
        }
        sheet
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.character_sheet())
    }
}
