//! Battle resolver module.
//!
//! Provides the `Battle` type, which builds knights from a roster and
//! plays a schedule of exchanges against them, and the `run` /
//! `run_schedule` entry points.
//!
//! An exchange is simultaneous and single-shot: both participants'
//! power is read before any damage lands, so the order in which the two
//! hits are applied never changes the outcome.

use crate::error::JoustError;
use crate::knight::Knight;
use crate::report::BattleReport;
use crate::roster::Roster;
use serde::Serialize;
use tracing::info;

/// One pairing of roster keys. Each knight hits the other once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Exchange<'a> {
    pub first: &'a str,
    pub second: &'a str,
}

impl<'a> Exchange<'a> {
    pub const fn new(first: &'a str, second: &'a str) -> Self {
        Self { first, second }
    }

    /// The same pairing with the participants swapped.
    pub const fn reversed(self) -> Self {
        Self {
            first: self.second,
            second: self.first,
        }
    }
}

/// The fixed tournament: Lancelot meets Mordred, then Arthur meets the
/// Red Knight.
pub const DEFAULT_SCHEDULE: &[Exchange<'static>] = &[
    Exchange::new("lancelot", "mordred"),
    Exchange::new("arthur", "red_knight"),
];

/// What happened in one exchange, by display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExchangeOutcome {
    pub first: String,
    pub second: String,
    /// Damage the first knight received.
    pub damage_to_first: i64,
    /// Damage the second knight received.
    pub damage_to_second: i64,
}

/// A set of constructed knights, keyed by roster key.
///
/// # Examples
///
/// ```rust
/// use joust::{reference_roster, Battle, Exchange};
///
/// let mut battle = Battle::new(&reference_roster());
/// let outcome = battle.exchange(Exchange::new("lancelot", "mordred")).unwrap();
///
/// assert_eq!(outcome.damage_to_first, 105);
/// assert_eq!(outcome.damage_to_second, 50);
/// assert_eq!(battle.knight("mordred").unwrap().hp(), 35);
/// ```
#[derive(Debug, Clone)]
pub struct Battle {
    knights: Vec<(String, Knight)>,
}

impl Battle {
    /// Construct every knight in roster order.
    pub fn new(roster: &Roster) -> Self {
        let knights = roster
            .iter()
            .map(|(key, config)| (key.to_string(), Knight::from(config.clone())))
            .collect();
        Self { knights }
    }

    /// Look up a knight by roster key.
    pub fn knight(&self, key: &str) -> Option<&Knight> {
        self.position(key).ok().map(|idx| &self.knights[idx].1)
    }

    /// Iterate `(key, knight)` pairs in construction order.
    pub fn knights(&self) -> impl Iterator<Item = (&str, &Knight)> {
        self.knights.iter().map(|(key, knight)| (key.as_str(), knight))
    }

    /// Resolve a single exchange.
    ///
    /// Both powers are read before either hit is applied. Fails with
    /// [`JoustError::UnknownKnight`] if either key is not in the battle.
    pub fn exchange(&mut self, exchange: Exchange<'_>) -> Result<ExchangeOutcome, JoustError> {
        let first = self.position(exchange.first)?;
        let second = self.position(exchange.second)?;

        let first_power = self.knights[first].1.power();
        let second_power = self.knights[second].1.power();

        let damage_to_first = self.knights[first].1.take_damage(second_power);
        let damage_to_second = self.knights[second].1.take_damage(first_power);

        let outcome = ExchangeOutcome {
            first: self.knights[first].1.name().to_string(),
            second: self.knights[second].1.name().to_string(),
            damage_to_first,
            damage_to_second,
        };
        info!(
            first = %outcome.first,
            second = %outcome.second,
            damage_to_first,
            damage_to_second,
            first_hp = self.knights[first].1.hp(),
            second_hp = self.knights[second].1.hp(),
            "exchange resolved"
        );
        Ok(outcome)
    }

    /// Resolve a whole schedule, in order.
    ///
    /// Every key is checked before the first exchange, so an unknown key
    /// leaves all knights untouched.
    pub fn play(&mut self, schedule: &[Exchange<'_>]) -> Result<Vec<ExchangeOutcome>, JoustError> {
        for exchange in schedule {
            self.position(exchange.first)?;
            self.position(exchange.second)?;
        }

        schedule
            .iter()
            .map(|exchange| self.exchange(*exchange))
            .collect()
    }

    /// Current hit points of every knight, keyed by display name.
    pub fn report(&self) -> BattleReport {
        let mut report = BattleReport::new();
        for (_, knight) in &self.knights {
            report.record(knight.name(), knight.hp());
        }
        report
    }

    fn position(&self, key: &str) -> Result<usize, JoustError> {
        self.knights
            .iter()
            .position(|(k, _)| k == key)
            .ok_or_else(|| JoustError::UnknownKnight(key.to_string()))
    }
}

/// Run the default tournament against a roster.
///
/// # Examples
///
/// ```rust
/// use joust::{reference_roster, run};
///
/// let report = run(&reference_roster()).unwrap();
/// assert_eq!(
///     report.to_string(),
///     r#"{"Lancelot": 0, "Arthur": 30, "Mordred": 35, "Red Knight": 5}"#
/// );
/// ```
pub fn run(roster: &Roster) -> Result<BattleReport, JoustError> {
    run_schedule(roster, DEFAULT_SCHEDULE)
}

/// Run an arbitrary schedule against a roster.
pub fn run_schedule(
    roster: &Roster,
    schedule: &[Exchange<'_>],
) -> Result<BattleReport, JoustError> {
    let mut battle = Battle::new(roster);
    battle.play(schedule)?;
    let report = battle.report();
    info!(knights = report.len(), exchanges = schedule.len(), "battle finished");
    Ok(report)
}
