//! Two-combatant battle loop.

use std::fmt;

use crate::combatant::Combatant;
use crate::notifier::BattleNotifier;

/// Borrows two combatants and fights them to the death.
///
/// The first combatant passed to [`Arena::new`] strikes first. The arena keeps
/// no state of its own between battles; attacker/defender roles live only
/// inside [`Arena::battle`].
///
/// ```
/// use arena_core::{Arena, Combatant, RoundLog};
///
/// let mut mage = Combatant::mage("Elsa");
/// let mut berserker = Combatant::berserker("Olaf");
/// let mut log = RoundLog::new();
///
/// let winner = Arena::new(&mut mage, &mut berserker)
///     .with_notifier(&mut log)
///     .battle()
///     .name()
///     .to_owned();
///
/// assert_eq!(winner, "Elsa");
/// assert_eq!(log.len(), 7);
/// ```
pub struct Arena<'a> {
    first: &'a mut Combatant,
    second: &'a mut Combatant,
    notifier: Option<&'a mut dyn BattleNotifier>,
}

impl<'a> Arena<'a> {
    pub fn new(first: &'a mut Combatant, second: &'a mut Combatant) -> Self {
        Self {
            first,
            second,
            notifier: None,
        }
    }

    /// Attaches a notifier that is called after every round.
    pub fn with_notifier(mut self, notifier: &'a mut dyn BattleNotifier) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Runs rounds until one combatant is no longer alive and returns the survivor.
    ///
    /// Each round the attacker deals its attack power to the defender, the
    /// notifier (if any) observes the post-hit state, then roles swap. The
    /// loop checks liveness before every round, so a defeated combatant is
    /// never hit or reported again.
    ///
    /// If a combatant enters the battle already dead no round is fought and
    /// the living one is returned; if both are dead the second is returned.
    pub fn battle(&mut self) -> &Combatant {
        let mut attacker: &mut Combatant = &mut *self.first;
        let mut defender: &mut Combatant = &mut *self.second;
        let mut rounds: u32 = 0;

        tracing::info!(
            first = attacker.name(),
            second = defender.name(),
            "Battle started"
        );

        while attacker.is_alive() && defender.is_alive() {
            rounds += 1;
            let damage = attacker.attack_power();
            defender.take_damage(damage);

            tracing::debug!(
                round = rounds,
                attacker = attacker.name(),
                defender = defender.name(),
                damage,
                defender_health = defender.health(),
                "Round resolved"
            );

            if let Some(notifier) = self.notifier.as_deref_mut() {
                notifier.on_round(attacker, defender, damage);
            }

            std::mem::swap(&mut attacker, &mut defender);
        }

        let winner: &Combatant = if attacker.is_alive() {
            &*attacker
        } else {
            &*defender
        };

        tracing::info!(winner = winner.name(), rounds, "Battle ended");
        winner
    }
}

impl fmt::Debug for Arena<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("first", &self.first)
            .field("second", &self.second)
            .field("has_notifier", &self.notifier.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifier::RoundLog;

    #[test]
    fn first_listed_strikes_first() {
        let mut mage = Combatant::mage("Elsa");
        let mut berserker = Combatant::berserker("Olaf");
        let mut log = RoundLog::new();

        Arena::new(&mut berserker, &mut mage)
            .with_notifier(&mut log)
            .battle();

        let first = &log.events()[0];
        assert_eq!(first.attacker, "Olaf");
        assert_eq!(first.defender, "Elsa");
        assert_eq!(first.damage, 20);
        assert_eq!(first.defender_health, 60);
    }

    #[test]
    fn roles_alternate_every_round() {
        let mut mage = Combatant::mage("Elsa");
        let mut berserker = Combatant::berserker("Olaf");
        let mut log = RoundLog::new();

        Arena::new(&mut mage, &mut berserker)
            .with_notifier(&mut log)
            .battle();

        for pair in log.events().windows(2) {
            assert_eq!(pair[0].attacker, pair[1].defender);
            assert_eq!(pair[0].defender, pair[1].attacker);
        }
    }

    #[test]
    fn runs_without_notifier() {
        let mut mage = Combatant::mage("Elsa");
        let mut berserker = Combatant::berserker("Olaf");

        let mut arena = Arena::new(&mut mage, &mut berserker);
        assert_eq!(arena.battle().name(), "Elsa");
        drop(arena);

        assert_eq!(mage.health(), 20);
        assert_eq!(berserker.health(), -20);
    }

    #[test]
    fn dead_entrant_fights_no_rounds() {
        let mut mage = Combatant::mage("Elsa");
        let mut berserker = Combatant::berserker("Olaf");
        mage.take_damage(80);
        let mut log = RoundLog::new();

        let winner = Arena::new(&mut mage, &mut berserker)
            .with_notifier(&mut log)
            .battle()
            .name()
            .to_owned();

        assert_eq!(winner, "Olaf");
        assert!(log.is_empty());
    }

    #[test]
    fn debug_hides_notifier_internals() {
        let mut mage = Combatant::mage("Elsa");
        let mut berserker = Combatant::berserker("Olaf");
        let arena = Arena::new(&mut mage, &mut berserker);

        let rendered = format!("{arena:?}");
        assert!(rendered.contains("has_notifier: false"));
    }
}
