//! # joust - Deterministic Knight Tournament Engine
//!
//! Knights derive their fighting stats from equipment and meet in
//! scripted, one-shot exchanges:
//! - **Deterministic** resolution (same roster → same report)
//! - **Equipment-driven** stats (armour, weapon, optional potion)
//! - **Schedule as data** (exchanges are a table, not code)
//!
//! ## Core Concepts
//!
//! ### Stat Model
//!
//! ```text
//! power      = base power + weapon + potion
//! protection = sum of armour + potion
//! hp         = max(0, base hp + potion)
//! ```
//!
//! Derived stats are computed once, when the knight is built. After that
//! only damage changes a knight:
//!
//! ```text
//! damage = max(0, attack power - protection)
//! hp     = max(0, hp - damage)
//! ```
//!
//! ### Exchanges
//!
//! An exchange pairs two roster keys. Each knight hits the other once,
//! with power read before either hit lands.
//!
//! ## Example
//!
//! ```rust
//! use joust::*;
//!
//! let report = run(&reference_roster()).unwrap();
//! assert_eq!(report.get("Lancelot"), Some(0));
//! assert_eq!(report.get("Arthur"), Some(30));
//! assert_eq!(report.get("Mordred"), Some(35));
//! assert_eq!(report.get("Red Knight"), Some(5));
//! ```
//!
//! ## Modules
//!
//! - [`stat`] - Stat identifiers
//! - [`equipment`] - Armour, weapons and potions
//! - [`knight`] - Knights and their configuration records
//! - [`breakdown`] - Explanations of derived stats
//! - [`roster`] - Ordered knight configurations
//! - [`battle`] - Exchange resolution
//! - [`report`] - Final hit points
//! - [`reference`] - The reference tournament roster
//! - [`error`] - Error types

pub mod battle;
pub mod breakdown;
pub mod equipment;
pub mod error;
pub mod knight;
pub mod reference;
pub mod report;
pub mod roster;
pub mod stat;

// Re-export main types for convenience
pub use battle::{run, run_schedule, Battle, Exchange, ExchangeOutcome, DEFAULT_SCHEDULE};
pub use breakdown::StatBreakdown;
pub use equipment::{Armour, Potion, Weapon};
pub use error::JoustError;
pub use knight::{Knight, KnightConfig};
pub use reference::reference_roster;
pub use report::BattleReport;
pub use roster::Roster;
pub use stat::Stat;
