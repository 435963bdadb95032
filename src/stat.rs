//! Stat identifier module.
//!
//! A knight has exactly three derived stats. They are a closed set, so
//! `Stat` is a plain enum rather than an interned string; it serializes
//! by its lowercase name so potion effects read naturally in JSON.

use crate::error::JoustError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the derived stats of a knight.
///
/// # Examples
///
/// ```rust
/// use joust::Stat;
///
/// let hp: Stat = "hp".parse().unwrap();
/// assert_eq!(hp, Stat::Hp);
/// assert_eq!(Stat::Protection.as_str(), "protection");
/// assert!("mana".parse::<Stat>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stat {
    /// Hit points.
    Hp,
    /// Attack strength dealt to an opponent.
    Power,
    /// Mitigation subtracted from incoming attacks.
    Protection,
}

impl Stat {
    /// All stats, in declaration order.
    pub const ALL: [Stat; 3] = [Stat::Hp, Stat::Power, Stat::Protection];

    /// The lowercase name used in configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Stat::Hp => "hp",
            Stat::Power => "power",
            Stat::Protection => "protection",
        }
    }
}

impl FromStr for Stat {
    type Err = JoustError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stat::ALL
            .into_iter()
            .find(|stat| stat.as_str() == s)
            .ok_or_else(|| JoustError::UnknownStat(s.to_string()))
    }
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
