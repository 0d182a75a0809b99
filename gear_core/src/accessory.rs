use crate::types::AccessoryKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable accessory with a named percentage effect
///
/// `effect_value` is a fractional multiplier (0.155 = 15.5%); it is
/// only scaled to a percentage when rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Accessory {
    kind: AccessoryKind,
    name: String,
    effect_type: String,
    effect_value: f64,
}

impl Accessory {
    pub fn new(
        kind: AccessoryKind,
        name: impl Into<String>,
        effect_type: impl Into<String>,
        effect_value: f64,
    ) -> Self {
        Accessory {
            kind,
            name: name.into(),
            effect_type: effect_type.into(),
            effect_value,
        }
    }

    pub fn amulet(
        name: impl Into<String>,
        effect_type: impl Into<String>,
        effect_value: f64,
    ) -> Self {
        Accessory::new(AccessoryKind::Amulet, name, effect_type, effect_value)
    }

    pub fn ring(
        name: impl Into<String>,
        effect_type: impl Into<String>,
        effect_value: f64,
    ) -> Self {
        Accessory::new(AccessoryKind::Ring, name, effect_type, effect_value)
    }

    pub fn earring(
        name: impl Into<String>,
        effect_type: impl Into<String>,
        effect_value: f64,
    ) -> Self {
        Accessory::new(AccessoryKind::Earring, name, effect_type, effect_value)
    }

    pub fn kind(&self) -> AccessoryKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn effect_type(&self) -> &str {
        &self.effect_type
    }

    pub fn effect_value(&self) -> f64 {
        self.effect_value
    }
}

impl fmt::Display for Accessory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name : {}", self.name)?;
        write!(
            f,
            "Effect : {} {:.1}%",
            self.effect_type,
            self.effect_value * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let ring = Accessory::ring("Vampire's Ring", "Life steal", 0.155);
        assert_eq!(ring.kind(), AccessoryKind::Ring);
        assert_eq!(ring.name(), "Vampire's Ring");
        assert_eq!(ring.effect_type(), "Life steal");
        assert_eq!(ring.effect_value(), 0.155);
    }

    #[test]
    fn test_display_scales_to_percent() {
        let ring = Accessory::ring("Vampire's Ring", "Life steal", 0.155);
        assert_eq!(
            ring.to_string(),
            "Name : Vampire's Ring\nEffect : Life steal 15.5%"
        );
    }

    #[test]
    fn test_display_small_effect() {
        let earring = Accessory::earring("Cursed Stud", "Slow", 0.001);
        assert!(earring.to_string().ends_with("Slow 0.1%"));
    }
}
