//! Combat arithmetic shared by combatants and the arena.
//!
//! All functions are pure and side-effect free.

pub mod damage;

pub use damage::apply_damage;
