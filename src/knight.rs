//! Knight module.
//!
//! A `Knight` owns its base stats and equipment and caches the derived
//! power, protection and hit points. Derived stats are computed once at
//! construction; afterwards only damage changes the knight, unless the
//! caller explicitly asks for a full reset.

use crate::breakdown::StatBreakdown;
use crate::equipment::{Armour, Potion, Weapon};
use crate::error::JoustError;
use crate::stat::Stat;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The configuration record a knight is built from.
///
/// This is the shape of one roster entry. `potion` may be `null` or
/// omitted entirely; every other field is required.
///
/// # Examples
///
/// ```rust
/// use joust::KnightConfig;
///
/// let config: KnightConfig = serde_json::from_str(r#"{
///     "name": "Lancelot",
///     "power": 35,
///     "hp": 100,
///     "armour": [],
///     "weapon": {"name": "Metal Sword", "power": 50},
///     "potion": null
/// }"#).unwrap();
///
/// assert_eq!(config.name, "Lancelot");
/// assert!(config.potion.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnightConfig {
    /// Display name, used as the key of the battle report.
    pub name: String,

    /// Base power before equipment.
    pub power: i64,

    /// Base hit points before equipment.
    pub hp: i64,

    /// Armour pieces, in the order they are worn.
    pub armour: Vec<Armour>,

    pub weapon: Weapon,

    #[serde(default)]
    pub potion: Option<Potion>,
}

impl KnightConfig {
    /// Read a configuration record from an in-memory JSON value.
    ///
    /// `key` is only used to label the error.
    pub fn from_value(key: &str, value: serde_json::Value) -> Result<Self, JoustError> {
        serde_json::from_value(value).map_err(|e| JoustError::invalid_config(key, e))
    }
}

/// A combatant with base stats, equipment and cached derived stats.
///
/// # Examples
///
/// ```rust
/// use joust::{Armour, Knight, Potion, Stat, Weapon};
///
/// let mut mordred = Knight::new(
///     "Mordred",
///     30,
///     90,
///     vec![Armour::new("breastplate", 15), Armour::new("boots", 10)],
///     Weapon::new("Poisoned Sword", 60),
///     Some(Potion::new(
///         "Berserk",
///         [(Stat::Power, 15), (Stat::Hp, -5), (Stat::Protection, 10)],
///     )),
/// );
///
/// assert_eq!(mordred.power(), 105);
/// assert_eq!(mordred.protection(), 35);
/// assert_eq!(mordred.hp(), 85);
///
/// mordred.take_damage(85);
/// assert_eq!(mordred.hp(), 35);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Knight {
    name: String,
    base_power: i64,
    base_hp: i64,
    armour: Vec<Armour>,
    weapon: Weapon,
    potion: Option<Potion>,

    power: i64,
    protection: i64,
    max_hp: i64,
    hp: i64,
}

impl Knight {
    /// Build a knight and compute its derived stats.
    pub fn new(
        name: impl Into<String>,
        base_power: i64,
        base_hp: i64,
        armour: Vec<Armour>,
        weapon: Weapon,
        potion: Option<Potion>,
    ) -> Self {
        let mut knight = Self {
            name: name.into(),
            base_power,
            base_hp,
            armour,
            weapon,
            potion,
            power: 0,
            protection: 0,
            max_hp: 0,
            hp: 0,
        };
        knight.apply_equipment();
        knight
    }

    /// Build a knight from its configuration record.
    pub fn from_config(config: KnightConfig) -> Self {
        Self::new(
            config.name,
            config.power,
            config.hp,
            config.armour,
            config.weapon,
            config.potion,
        )
    }

    /// Build a knight straight from an in-memory JSON record.
    ///
    /// Fails with [`JoustError::InvalidConfig`] when a required field is
    /// missing or malformed.
    pub fn from_value(key: &str, value: serde_json::Value) -> Result<Self, JoustError> {
        KnightConfig::from_value(key, value).map(Self::from_config)
    }

    /// Explain how a derived stat is assembled.
    ///
    /// The value always matches the stat computed at construction:
    ///
    /// - power: base + weapon + potion delta
    /// - protection: sum of armour + potion delta
    /// - hp: base + potion delta, floored at 0
    pub fn breakdown(&self, stat: Stat) -> StatBreakdown {
        let mut breakdown = StatBreakdown::new(stat);
        match stat {
            Stat::Power => {
                breakdown.add_contribution("base", self.base_power);
                breakdown.add_contribution(
                    format!("weapon: {}", self.weapon.name()),
                    self.weapon.power(),
                );
            }
            Stat::Protection => {
                for piece in &self.armour {
                    breakdown
                        .add_contribution(format!("armour: {}", piece.part()), piece.protection());
                }
            }
            Stat::Hp => {
                breakdown.add_contribution("base", self.base_hp);
            }
        }

        if let Some(potion) = &self.potion {
            let delta = potion.delta(stat);
            if delta != 0 {
                breakdown.add_contribution(format!("potion: {}", potion.name()), delta);
            }
        }

        if stat == Stat::Hp {
            breakdown.floor_at(0);
        }
        breakdown
    }

    /// Restore every derived stat from base values and equipment.
    ///
    /// This is a full reset: any damage taken so far is discarded and
    /// `hp` returns to `max_hp`.
    pub fn reset_to_full(&mut self) {
        self.apply_equipment();
    }

    fn apply_equipment(&mut self) {
        self.power = self.breakdown(Stat::Power).value;
        self.protection = self.breakdown(Stat::Protection).value;
        self.max_hp = self.breakdown(Stat::Hp).value;
        self.hp = self.max_hp;
    }

    /// Damage left after protection absorbs its share of an attack.
    ///
    /// Never negative: an attack at or below protection deals nothing.
    pub fn effective_damage(&self, attack_power: i64) -> i64 {
        attack_power.saturating_sub(self.protection).max(0)
    }

    /// Apply an attack and return the damage actually dealt.
    ///
    /// `hp` never drops below 0.
    pub fn take_damage(&mut self, attack_power: i64) -> i64 {
        let damage = self.effective_damage(attack_power);
        let before = self.hp;
        self.hp = self.hp.saturating_sub(damage).max(0);
        debug!(
            knight = %self.name,
            attack_power,
            protection = self.protection,
            damage,
            hp_before = before,
            hp_after = self.hp,
            "damage applied"
        );
        damage
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn power(&self) -> i64 {
        self.power
    }

    pub fn protection(&self) -> i64 {
        self.protection
    }

    /// Current hit points.
    pub fn hp(&self) -> i64 {
        self.hp
    }

    /// Undamaged hit points.
    pub fn max_hp(&self) -> i64 {
        self.max_hp
    }

    /// Current value of a derived stat.
    pub fn stat(&self, stat: Stat) -> i64 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Power => self.power,
            Stat::Protection => self.protection,
        }
    }

    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }

    pub fn base_power(&self) -> i64 {
        self.base_power
    }

    pub fn base_hp(&self) -> i64 {
        self.base_hp
    }

    pub fn armour(&self) -> &[Armour] {
        &self.armour
    }

    pub fn weapon(&self) -> &Weapon {
        &self.weapon
    }

    pub fn potion(&self) -> Option<&Potion> {
        self.potion.as_ref()
    }
}

impl From<KnightConfig> for Knight {
    fn from(config: KnightConfig) -> Self {
        Self::from_config(config)
    }
}
