//! Combatant state and hero classes.
//!
//! A [`Combatant`] carries an identity, a mutable health pool and a
//! [`HeroClass`]. Starting health comes from the class at construction;
//! attack power is always read from the class, so only health changes.

use strum::{Display, EnumIter, EnumString};

use crate::combat::apply_damage;

/// Closed set of hero classes a combatant can be built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeroClass {
    /// Fragile caster that hits hard.
    Mage,
    /// Durable fighter with a lighter hit.
    Berserker,
}

impl HeroClass {
    /// Health a combatant of this class starts a battle with.
    pub const fn base_health(self) -> i32 {
        match self {
            Self::Mage => 80,
            Self::Berserker => 100,
        }
    }

    /// Damage a combatant of this class deals per round.
    pub const fn attack_power(self) -> i32 {
        match self {
            Self::Mage => 30,
            Self::Berserker => 20,
        }
    }
}

/// A participant in a battle.
///
/// # Invariants
///
/// - Attack power is `class.attack_power()`; it is not stored, so no
///   constructor or deserialized payload can make it disagree with the class.
/// - `health` only changes through [`Combatant::take_damage`] and is never
///   clamped, so it may end below zero.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    name: String,
    class: HeroClass,
    health: i32,
}

impl Combatant {
    pub fn new(name: impl Into<String>, class: HeroClass) -> Self {
        Self {
            name: name.into(),
            class,
            health: class.base_health(),
        }
    }

    pub fn mage(name: impl Into<String>) -> Self {
        Self::new(name, HeroClass::Mage)
    }

    pub fn berserker(name: impl Into<String>) -> Self {
        Self::new(name, HeroClass::Berserker)
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn class(&self) -> HeroClass {
        self.class
    }

    #[inline]
    pub fn health(&self) -> i32 {
        self.health
    }

    #[inline]
    pub fn attack_power(&self) -> i32 {
        self.class.attack_power()
    }

    /// Health this combatant had when it was created.
    pub fn starting_health(&self) -> i32 {
        self.class.base_health()
    }

    /// Quick liveness check: a combatant is alive while its health is positive.
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Subtracts `amount` from health. Never fails and never clamps.
    pub fn take_damage(&mut self, amount: i32) {
        self.health = apply_damage(self.health, amount);
    }

    /// Hits `target` with this combatant's attack power.
    ///
    /// The arena reads [`Combatant::attack_power`] directly and does not route
    /// rounds through this method.
    pub fn attack(&self, target: &mut Combatant) {
        target.take_damage(self.attack_power());
    }
}
