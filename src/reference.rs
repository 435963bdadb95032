//! The reference tournament roster.
//!
//! Four knights whose keys match [`DEFAULT_SCHEDULE`](crate::DEFAULT_SCHEDULE).

use crate::equipment::{Armour, Potion, Weapon};
use crate::knight::KnightConfig;
use crate::roster::Roster;
use crate::stat::Stat;

/// Lancelot, Arthur, Mordred and the Red Knight, in that order.
pub fn reference_roster() -> Roster {
    Roster::new()
        .with(
            "lancelot",
            KnightConfig {
                name: "Lancelot".to_string(),
                power: 35,
                hp: 100,
                armour: vec![],
                weapon: Weapon::new("Metal Sword", 50),
                potion: None,
            },
        )
        .with(
            "arthur",
            KnightConfig {
                name: "Arthur".to_string(),
                power: 45,
                hp: 75,
                armour: vec![
                    Armour::new("helmet", 15),
                    Armour::new("breastplate", 20),
                    Armour::new("boots", 10),
                ],
                weapon: Weapon::new("Two-handed Sword", 55),
                potion: None,
            },
        )
        .with(
            "mordred",
            KnightConfig {
                name: "Mordred".to_string(),
                power: 30,
                hp: 90,
                armour: vec![Armour::new("breastplate", 15), Armour::new("boots", 10)],
                weapon: Weapon::new("Poisoned Sword", 60),
                potion: Some(Potion::new(
                    "Berserk",
                    [(Stat::Power, 15), (Stat::Hp, -5), (Stat::Protection, 10)],
                )),
            },
        )
        .with(
            "red_knight",
            KnightConfig {
                name: "Red Knight".to_string(),
                power: 40,
                hp: 70,
                armour: vec![Armour::new("breastplate", 25)],
                weapon: Weapon::new("Sword", 45),
                potion: Some(Potion::new("Blessing", [(Stat::Hp, 10), (Stat::Power, 5)])),
            },
        )
}
