//! Per-round battle notifications.
//!
//! Notifiers observe a battle; they are invoked after each round's damage has
//! been applied and never influence the outcome.

use crate::combatant::Combatant;

/// Observer invoked once per round by [`crate::Arena::battle`].
///
/// Calls happen synchronously on the battle loop's stack, after the defender
/// has taken `damage`, so `defender` reflects post-hit health.
/// Implementations must not fail; anything that can go wrong (I/O, etc.)
/// is handled inside the notifier.
pub trait BattleNotifier {
    fn on_round(&mut self, attacker: &Combatant, defender: &Combatant, damage: i32);
}

/// Renders a round as a single human-readable line.
///
/// ```
/// use arena_core::{Combatant, format_round};
///
/// let mage = Combatant::mage("Elsa");
/// let mut berserker = Combatant::berserker("Olaf");
/// mage.attack(&mut berserker);
///
/// assert_eq!(
///     format_round(&mage, &berserker, 30),
///     "Elsa attacked Olaf for 30 points but Olaf survived."
/// );
/// ```
pub fn format_round(attacker: &Combatant, defender: &Combatant, damage: i32) -> String {
    let mut message = format!(
        "{} attacked {} for {} points",
        attacker.name(),
        defender.name(),
        damage
    );
    if defender.is_alive() {
        message.push_str(&format!(" but {} survived.", defender.name()));
    } else {
        message.push_str(&format!(" and {} died.", defender.name()));
    }
    message
}

/// Owned snapshot of a single round.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundEvent {
    /// 1-based round number.
    pub round: u32,
    pub attacker: String,
    pub defender: String,
    pub damage: i32,
    /// Defender health after the hit.
    pub defender_health: i32,
    pub defender_died: bool,
}

/// Notifier that keeps every round in memory.
#[derive(Clone, Debug, Default)]
pub struct RoundLog {
    events: Vec<RoundEvent>,
}

impl RoundLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[RoundEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The last recorded round, if any.
    pub fn last(&self) -> Option<&RoundEvent> {
        self.events.last()
    }
}

impl BattleNotifier for RoundLog {
    fn on_round(&mut self, attacker: &Combatant, defender: &Combatant, damage: i32) {
        let round = u32::try_from(self.events.len())
            .unwrap_or(u32::MAX)
            .saturating_add(1);
        self.events.push(RoundEvent {
            round,
            attacker: attacker.name().to_owned(),
            defender: defender.name().to_owned(),
            damage,
            defender_health: defender.health(),
            defender_died: !defender.is_alive(),
        });
    }
}
