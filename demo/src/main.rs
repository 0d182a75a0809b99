//! Console demo: builds a warrior and a mage, equips gear (including one
//! deliberately invalid equip), levels up, upgrades an equipped sword,
//! and performs job abilities. Model reports go to stdout; logging goes
//! to stderr.

use anyhow::Result;
use character_core::prelude::*;

const SEPARATOR: &str = "======================================";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    init_constants_default()?;
    tracing::info!("game constants installed, starting demo");

    let mut james = Character::warrior("James");
    println!("{james}");
    println!("{SEPARATOR}");

    println!(
        "{}",
        james.equip_accessory(Accessory::ring("Vampire's Ring", "Life steal", 0.155))
    );
    println!(
        "{}",
        james.equip_weapon(Weapon::sword("James's Legacy", 30, 10.0))
    );
    println!("{SEPARATOR}");
    println!("{}", james.level_up());
    println!("{SEPARATOR}");
    println!("{james}");
    println!("{SEPARATOR}");

    if let Some(sword) = james.main_hand_mut() {
        println!("Sword Damage : {}", sword.main_stat());
        sword.upgrade();
        println!("Sword Damage : {}", sword.main_stat());
    }
    println!("{SEPARATOR}");

    if let Some(ring) = james.equipped_accessories()[1] {
        println!("{ring}");
    }
    println!("{SEPARATOR}");

    let mut tent = Character::mage("tent");
    println!("{tent}");
    println!("{SEPARATOR}");
    println!(
        "{}",
        tent.equip_accessory(Accessory::amulet("Moonstone Amulet", "Mana regen", 0.12))
    );
    println!(
        "{}",
        tent.equip_accessory(Accessory::ring("Moonstone Ring", "Cooldown", 0.05))
    );
    println!(
        "{}",
        tent.equip_accessory(Accessory::earring("Moonstone Earring", "Slow", 0.001))
    );
    println!("{SEPARATOR}");
    println!("{}", tent.equip_weapon(Weapon::charm("Lucky Charm", 1000, 3000.0)));
    // A sword is warrior gear; the mage's policy turns it away.
    println!(
        "{}",
        tent.equip_weapon(Weapon::sword("James's Legacy", 30, 10.0))
    );
    println!("{}", tent.equip_weapon(Weapon::staff("Oak Staff", 100, 200.0)));
    println!("{SEPARATOR}");
    println!("{tent}");
    println!("{SEPARATOR}");

    println!("{}", james.use_ability(Ability::Slash)?);
    println!("{}", tent.use_ability(Ability::Teleport)?);
    println!("{}", james.use_ability(Ability::Block)?);
    println!("{}", tent.use_ability(Ability::CastSpell)?);
    println!("{SEPARATOR}");

    println!("{}", Job::Warrior.ability_sheet());
    println!("{}", Job::Mage.ability_sheet());
    println!("{SEPARATOR}");

    println!("{}", serde_json::to_string_pretty(&james)?);

    Ok(())
}
