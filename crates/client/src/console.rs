//! Stdout battle transcript.
use std::io::Write;

use arena_core::{BattleNotifier, Combatant, format_round};

/// Notifier that prints one line per round.
///
/// Write failures are logged and dropped; a broken pipe never interrupts the
/// battle.
#[derive(Debug)]
pub struct ConsoleNotifier<W: Write> {
    out: W,
}

impl<W: Write> ConsoleNotifier<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> BattleNotifier for ConsoleNotifier<W> {
    fn on_round(&mut self, attacker: &Combatant, defender: &Combatant, damage: i32) {
        let line = format_round(attacker, defender, damage);
        if let Err(e) = writeln!(self.out, "{line}") {
            tracing::warn!("Failed to write round to console: {}", e);
        }
    }
}
