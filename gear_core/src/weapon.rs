use crate::types::{MainWeaponKind, SubWeaponKind, WeaponKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Main stat gained per weapon level
pub const STAT_PER_LEVEL: f64 = 2.5;

/// A levelable weapon with a derived main stat
///
/// The main stat is `base_stat + 2.5 * level` and stays in lockstep
/// with the level through `upgrade()`. There is no level cap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weapon {
    kind: WeaponKind,
    name: String,
    level: u32,
    base_stat: f64,
    stat_value: f64,
}

impl Weapon {
    /// Create a weapon of the given kind, computing its main stat
    pub fn new(kind: WeaponKind, name: impl Into<String>, level: u32, base_stat: f64) -> Self {
        Weapon {
            kind,
            name: name.into(),
            level,
            base_stat,
            stat_value: base_stat + STAT_PER_LEVEL * level as f64,
        }
    }

    pub fn sword(name: impl Into<String>, level: u32, base_stat: f64) -> Self {
        Weapon::new(WeaponKind::Main(MainWeaponKind::Sword), name, level, base_stat)
    }

    pub fn staff(name: impl Into<String>, level: u32, base_stat: f64) -> Self {
        Weapon::new(WeaponKind::Main(MainWeaponKind::Staff), name, level, base_stat)
    }

    pub fn bow(name: impl Into<String>, level: u32, base_stat: f64) -> Self {
        Weapon::new(WeaponKind::Main(MainWeaponKind::Bow), name, level, base_stat)
    }

    pub fn shield(name: impl Into<String>, level: u32, base_stat: f64) -> Self {
        Weapon::new(WeaponKind::Sub(SubWeaponKind::Shield), name, level, base_stat)
    }

    pub fn charm(name: impl Into<String>, level: u32, base_stat: f64) -> Self {
        Weapon::new(WeaponKind::Sub(SubWeaponKind::Charm), name, level, base_stat)
    }

    pub fn dagger(name: impl Into<String>, level: u32, base_stat: f64) -> Self {
        Weapon::new(WeaponKind::Sub(SubWeaponKind::Dagger), name, level, base_stat)
    }

    pub fn kind(&self) -> WeaponKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn base_stat(&self) -> f64 {
        self.base_stat
    }

    /// Current effective main stat
    pub fn main_stat(&self) -> f64 {
        self.stat_value
    }

    /// Raise the weapon one level, adding the per-level stat bonus
    pub fn upgrade(&mut self) {
        self.level += 1;
        self.stat_value += STAT_PER_LEVEL;
    }
}

impl fmt::Display for Weapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} Lv.{}) - {}",
            self.name, self.kind, self.level, self.stat_value
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_stat_from_level() {
        let sword = Weapon::sword("Rusty Sword", 4, 12.0);
        assert_eq!(sword.level(), 4);
        assert_eq!(sword.main_stat(), 12.0 + 2.5 * 4.0);
        assert_eq!(sword.base_stat(), 12.0);
    }

    #[test]
    fn test_upgrade_moves_level_and_stat() {
        let mut bow = Weapon::bow("Longbow", 0, 7.0);
        assert_eq!(bow.main_stat(), 7.0);

        bow.upgrade();
        assert_eq!(bow.level(), 1);
        assert_eq!(bow.main_stat(), 9.5);
    }

    #[test]
    fn test_stat_invariant_after_many_upgrades() {
        let mut charm = Weapon::charm("Lucky Charm", 3, 1.0);
        for _ in 0..100 {
            charm.upgrade();
            assert_eq!(
                charm.main_stat(),
                charm.base_stat() + STAT_PER_LEVEL * charm.level() as f64
            );
        }
        assert_eq!(charm.level(), 103);
    }

    #[test]
    fn test_kind_routing_helpers() {
        assert!(Weapon::staff("Oak Staff", 0, 5.0).kind().is_main());
        assert!(Weapon::dagger("Stiletto", 0, 5.0).kind().is_sub());
    }

    #[test]
    fn test_display() {
        let shield = Weapon::shield("Tower Shield", 2, 20.0);
        assert_eq!(shield.to_string(), "Tower Shield (Shield Lv.2) - 25");
    }
}
