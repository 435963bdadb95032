//! Stat breakdown module.
//!
//! Contains the `StatBreakdown` type, which explains how a derived stat
//! was assembled from base values and equipment.

use crate::stat::Stat;
use serde::{Deserialize, Serialize};

/// A derived stat value with its full list of contributions.
///
/// Contributions are summed in the order they were added. Adjustments
/// (such as the hit point floor) are applied afterwards and recorded
/// with the value they produced.
///
/// # Examples
///
/// ```rust
/// use joust::{Stat, StatBreakdown};
///
/// let mut power = StatBreakdown::new(Stat::Power);
/// power.add_contribution("base", 35);
/// power.add_contribution("weapon: Metal Sword", 50);
///
/// assert_eq!(power.value, 85);
/// assert_eq!(power.contributions.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBreakdown {
    /// The stat being explained.
    pub stat: Stat,

    /// The final value.
    pub value: i64,

    /// Each entry is `(description, amount)`, in the order applied.
    pub contributions: Vec<(String, i64)>,

    /// Each entry is `(description, value_after_adjustment)`.
    pub adjustments: Vec<(String, i64)>,
}

impl StatBreakdown {
    /// Create an empty breakdown with a value of 0.
    pub fn new(stat: Stat) -> Self {
        Self {
            stat,
            value: 0,
            contributions: Vec::new(),
            adjustments: Vec::new(),
        }
    }

    /// Add a flat contribution to the value. Saturates at the `i64` bounds.
    pub fn add_contribution(&mut self, description: impl Into<String>, amount: i64) {
        self.value = self.value.saturating_add(amount);
        self.contributions.push((description.into(), amount));
    }

    /// Raise the value to `min` if it is below it.
    ///
    /// The adjustment is only recorded when it changes the value.
    pub fn floor_at(&mut self, min: i64) {
        if self.value < min {
            self.value = min;
            self.adjustments.push((format!("floor({})", min), min));
        }
    }
}
