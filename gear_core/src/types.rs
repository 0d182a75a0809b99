use serde::{Deserialize, Serialize};
use std::fmt;

/// Main-hand weapon kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MainWeaponKind {
    Sword,
    Staff,
    Bow,
}

impl MainWeaponKind {
    /// Get all main-hand weapon kinds
    pub fn all() -> &'static [MainWeaponKind] {
        &[
            MainWeaponKind::Sword,
            MainWeaponKind::Staff,
            MainWeaponKind::Bow,
        ]
    }
}

impl fmt::Display for MainWeaponKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MainWeaponKind::Sword => write!(f, "Sword"),
            MainWeaponKind::Staff => write!(f, "Staff"),
            MainWeaponKind::Bow => write!(f, "Bow"),
        }
    }
}

/// Off-hand weapon kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubWeaponKind {
    Shield,
    Charm,
    Dagger,
}

impl SubWeaponKind {
    /// Get all off-hand weapon kinds
    pub fn all() -> &'static [SubWeaponKind] {
        &[
            SubWeaponKind::Shield,
            SubWeaponKind::Charm,
            SubWeaponKind::Dagger,
        ]
    }
}

impl fmt::Display for SubWeaponKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubWeaponKind::Shield => write!(f, "Shield"),
            SubWeaponKind::Charm => write!(f, "Charm"),
            SubWeaponKind::Dagger => write!(f, "Dagger"),
        }
    }
}

/// The hand a weapon occupies, carrying its concrete kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponKind {
    Main(MainWeaponKind),
    Sub(SubWeaponKind),
}

impl WeaponKind {
    pub fn is_main(&self) -> bool {
        matches!(self, WeaponKind::Main(_))
    }

    pub fn is_sub(&self) -> bool {
        matches!(self, WeaponKind::Sub(_))
    }
}

impl fmt::Display for WeaponKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeaponKind::Main(kind) => write!(f, "{}", kind),
            WeaponKind::Sub(kind) => write!(f, "{}", kind),
        }
    }
}

/// Accessory kinds, one per character accessory slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessoryKind {
    Amulet,
    Ring,
    Earring,
}

impl AccessoryKind {
    /// Get all accessory kinds
    pub fn all() -> &'static [AccessoryKind] {
        &[
            AccessoryKind::Amulet,
            AccessoryKind::Ring,
            AccessoryKind::Earring,
        ]
    }
}

impl fmt::Display for AccessoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessoryKind::Amulet => write!(f, "Amulet"),
            AccessoryKind::Ring => write!(f, "Ring"),
            AccessoryKind::Earring => write!(f, "Earring"),
        }
    }
}
