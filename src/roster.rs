//! Roster module.
//!
//! A `Roster` is an insertion-ordered mapping from roster key to knight
//! configuration. Order matters: knights are constructed, and reported,
//! in roster order.

use crate::error::JoustError;
use crate::knight::KnightConfig;
use serde_json::Value;

/// Ordered mapping from roster key to knight configuration.
///
/// # Examples
///
/// ```rust
/// use joust::Roster;
/// use serde_json::json;
///
/// let roster = Roster::from_value(json!({
///     "gawain": {
///         "name": "Gawain",
///         "power": 40,
///         "hp": 90,
///         "armour": [{"part": "helmet", "protection": 10}],
///         "weapon": {"name": "Galatine", "power": 50}
///     }
/// })).unwrap();
///
/// assert_eq!(roster.len(), 1);
/// assert_eq!(roster.get("gawain").unwrap().name, "Gawain");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    entries: Vec<(String, KnightConfig)>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a roster from an in-memory JSON object.
    ///
    /// Keys keep the order they have in the object.
    pub fn from_value(value: Value) -> Result<Self, JoustError> {
        let Value::Object(map) = value else {
            return Err(JoustError::NotAnObject);
        };

        let mut roster = Self::new();
        for (key, record) in map {
            let config = KnightConfig::from_value(&key, record)?;
            roster.insert(key, config);
        }
        Ok(roster)
    }

    /// Insert a knight under `key`.
    ///
    /// Re-inserting an existing key replaces its configuration but keeps
    /// its original position. Returns the replaced configuration, if any.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        config: KnightConfig,
    ) -> Option<KnightConfig> {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, config)),
            None => {
                self.entries.push((key, config));
                None
            }
        }
    }

    /// Builder-style [`Roster::insert`].
    pub fn with(mut self, key: impl Into<String>, config: KnightConfig) -> Self {
        self.insert(key, config);
        self
    }

    pub fn get(&self, key: &str) -> Option<&KnightConfig> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, config)| config)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &KnightConfig)> {
        self.entries.iter().map(|(k, config)| (k.as_str(), config))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
