//! Deterministic battle rules shared by the arena binary and its tests.
//!
//! `arena-core` defines the combatants, the two-combatant battle loop and the
//! notifier seam through which rounds are reported. All battle state mutation
//! flows through [`Arena::battle`], and the client depends on the types
//! re-exported here.
pub mod arena;
pub mod combat;
pub mod combatant;
pub mod notifier;

pub use arena::Arena;
pub use combatant::{Combatant, HeroClass};
pub use notifier::{BattleNotifier, RoundEvent, RoundLog, format_round};
