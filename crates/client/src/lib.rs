//! Arena client: wires the battle rules to the terminal.
//!
//! The binary is the composition root. It loads [`config::ClientConfig`],
//! installs file logging, then runs a single battle through [`run_battle`]
//! with a [`console::ConsoleNotifier`] printing each round.

pub mod config;
pub mod console;
pub mod logging;

use std::io::{self, Write};

use arena_core::{Arena, Combatant};

pub use config::{ClientConfig, ConfigError};
pub use console::ConsoleNotifier;

/// Name of the mage, who strikes first.
pub const MAGE_NAME: &str = "Elsa";
/// Name of the berserker.
pub const BERSERKER_NAME: &str = "Olaf";

/// Runs the fixed Mage-vs-Berserker battle, writing the transcript to `out`.
///
/// Returns the winner's name.
pub fn run_battle<W: Write>(out: &mut W) -> io::Result<String> {
    let mut mage = Combatant::mage(MAGE_NAME);
    let mut berserker = Combatant::berserker(BERSERKER_NAME);

    writeln!(out, "Battle begins.")?;

    let mut notifier = ConsoleNotifier::with_writer(&mut *out);
    let winner = Arena::new(&mut mage, &mut berserker)
        .with_notifier(&mut notifier)
        .battle()
        .name()
        .to_owned();

    writeln!(out, "Battle ended. Winner is: {winner}")?;
    out.flush()?;

    Ok(winner)
}
