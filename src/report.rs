//! Battle report module.
//!
//! The result of a run: each knight's final hit points keyed by display
//! name, in construction order.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Final hit points per knight, in construction order.
///
/// Serializes as a JSON object whose keys keep that order.
///
/// # Examples
///
/// ```rust
/// use joust::BattleReport;
///
/// let mut report = BattleReport::new();
/// report.record("Lancelot", 0);
/// report.record("Arthur", 30);
///
/// assert_eq!(report.get("Arthur"), Some(30));
/// assert_eq!(report.to_string(), r#"{"Lancelot": 0, "Arthur": 30}"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BattleReport {
    entries: Vec<(String, i64)>,
}

impl BattleReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a knight's hit points.
    ///
    /// Recording a name twice overwrites the earlier value in place.
    pub fn record(&mut self, name: impl Into<String>, hp: i64) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = hp,
            None => self.entries.push((name, hp)),
        }
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, hp)| *hp)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries.iter().map(|(n, hp)| (n.as_str(), *hp))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_vec(self) -> Vec<(String, i64)> {
        self.entries
    }
}

impl Serialize for BattleReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, hp) in &self.entries {
            map.serialize_entry(name, hp)?;
        }
        map.end()
    }
}

impl std::fmt::Display for BattleReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;
        for (idx, (name, hp)) in self.entries.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:?}: {}", name, hp)?;
        }
        f.write_str("}")
    }
}
