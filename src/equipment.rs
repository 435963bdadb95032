//! Equipment module.
//!
//! Armour pieces, weapons and potions are immutable value records. Each one
//! contributes flat amounts to a knight's derived stats; the knight sums the
//! contributions once at construction.

use crate::stat::Stat;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single piece of armour.
///
/// # Examples
///
/// ```rust
/// use joust::Armour;
///
/// let helmet = Armour::new("helmet", 15);
/// assert_eq!(helmet.part(), "helmet");
/// assert_eq!(helmet.protection(), 15);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Armour {
    part: String,
    protection: i64,
}

impl Armour {
    pub fn new(part: impl Into<String>, protection: i64) -> Self {
        Self {
            part: part.into(),
            protection,
        }
    }

    pub fn part(&self) -> &str {
        &self.part
    }

    pub fn protection(&self) -> i64 {
        self.protection
    }
}

/// The weapon a knight fights with. Every knight carries exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    name: String,
    power: i64,
}

impl Weapon {
    pub fn new(name: impl Into<String>, power: i64) -> Self {
        Self {
            name: name.into(),
            power,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn power(&self) -> i64 {
        self.power
    }
}

/// A potion with signed deltas for any subset of stats.
///
/// Stats missing from the effect map contribute nothing. Deltas may be
/// negative (a berserk brew trades hit points for power).
///
/// # Examples
///
/// ```rust
/// use joust::{Potion, Stat};
///
/// let berserk = Potion::new("Berserk", [(Stat::Power, 15), (Stat::Hp, -5)]);
/// assert_eq!(berserk.delta(Stat::Power), 15);
/// assert_eq!(berserk.delta(Stat::Hp), -5);
/// assert_eq!(berserk.delta(Stat::Protection), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Potion {
    name: String,
    effect: BTreeMap<Stat, i64>,
}

impl Potion {
    pub fn new(name: impl Into<String>, effect: impl IntoIterator<Item = (Stat, i64)>) -> Self {
        Self {
            name: name.into(),
            effect: effect.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The delta this potion applies to `stat`, or 0 when it has none.
    pub fn delta(&self, stat: Stat) -> i64 {
        self.effect.get(&stat).copied().unwrap_or(0)
    }

    pub fn effect(&self) -> &BTreeMap<Stat, i64> {
        &self.effect
    }
}
