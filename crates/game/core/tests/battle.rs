use arena_core::{Arena, BattleNotifier, Combatant, HeroClass, RoundLog};

#[test]
fn mage_first_beats_berserker_in_seven_rounds() {
    let mut mage = Combatant::mage("Elsa");
    let mut berserker = Combatant::berserker("Olaf");
    let mut log = RoundLog::new();

    let winner = Arena::new(&mut mage, &mut berserker)
        .with_notifier(&mut log)
        .battle()
        .name()
        .to_owned();

    assert_eq!(winner, "Elsa");
    assert_eq!(log.len(), 7);

    // Defender health after each round: Olaf, Elsa, Olaf, ...
    let healths: Vec<i32> = log.events().iter().map(|e| e.defender_health).collect();
    assert_eq!(healths, vec![70, 60, 40, 40, 10, 20, -20]);

    let last = log.last().unwrap();
    assert_eq!(last.attacker, "Elsa");
    assert_eq!(last.defender, "Olaf");
    assert!(last.defender_died);
    assert!(log.events()[..6].iter().all(|e| !e.defender_died));

    assert_eq!(mage.health(), 20);
    assert_eq!(berserker.health(), -20);
}

#[test]
fn berserker_first_wins_by_striking_first() {
    let mut berserker = Combatant::berserker("Olaf");
    let mut mage = Combatant::mage("Elsa");
    let mut log = RoundLog::new();

    let winner = Arena::new(&mut berserker, &mut mage)
        .with_notifier(&mut log)
        .battle()
        .name()
        .to_owned();

    assert_eq!(winner, "Olaf");
    assert_eq!(log.len(), 7);
    assert_eq!(mage.health(), 0);
    assert_eq!(berserker.health(), 10);
}

#[test]
fn notifier_is_optional() {
    let mut with_log = (Combatant::mage("Elsa"), Combatant::berserker("Olaf"));
    let mut without_log = with_log.clone();
    let mut log = RoundLog::new();

    let observed = Arena::new(&mut with_log.0, &mut with_log.1)
        .with_notifier(&mut log)
        .battle()
        .name()
        .to_owned();
    let silent = Arena::new(&mut without_log.0, &mut without_log.1)
        .battle()
        .name()
        .to_owned();

    assert_eq!(observed, silent);
    assert_eq!(with_log, without_log);
}

/// Tallies rounds and flags any round reported for an already-dead attacker.
#[derive(Default)]
struct AfterDeathProbe {
    rounds: usize,
    calls_with_dead_attacker: usize,
    deaths: usize,
}

impl BattleNotifier for AfterDeathProbe {
    fn on_round(&mut self, attacker: &Combatant, defender: &Combatant, _damage: i32) {
        self.rounds += 1;
        if !attacker.is_alive() {
            self.calls_with_dead_attacker += 1;
        }
        if !defender.is_alive() {
            self.deaths += 1;
        }
    }
}

#[test]
fn no_round_after_a_death() {
    let mut probe = AfterDeathProbe::default();
    let mut first = Combatant::new("A", HeroClass::Mage);
    let mut second = Combatant::new("B", HeroClass::Mage);

    let winner = Arena::new(&mut first, &mut second)
        .with_notifier(&mut probe)
        .battle()
        .name()
        .to_owned();

    // 80 health, 30 per hit: B falls on the fifth round (A's third hit).
    assert_eq!(winner, "A");
    assert_eq!(probe.rounds, 5);
    assert_eq!(probe.deaths, 1);
    assert_eq!(probe.calls_with_dead_attacker, 0);
}

#[test]
fn every_pairing_terminates_with_one_survivor() {
    use strum::IntoEnumIterator;

    for first_class in HeroClass::iter() {
        for second_class in HeroClass::iter() {
            let mut first = Combatant::new("first", first_class);
            let mut second = Combatant::new("second", second_class);
            let mut log = RoundLog::new();

            let winner = Arena::new(&mut first, &mut second)
                .with_notifier(&mut log)
                .battle()
                .name()
                .to_owned();

            assert!(first.is_alive() != second.is_alive());
            let survivor = if first.is_alive() { &first } else { &second };
            assert_eq!(survivor.name(), winner);
            assert!(log.last().unwrap().defender_died);
        }
    }
}

#[cfg(feature = "serde")]
#[test]
fn round_events_serialize_to_json() {
    let mut mage = Combatant::mage("Elsa");
    let mut berserker = Combatant::berserker("Olaf");
    let mut log = RoundLog::new();
    Arena::new(&mut mage, &mut berserker)
        .with_notifier(&mut log)
        .battle();

    let json = serde_json::to_value(log.events()).unwrap();
    assert_eq!(json[0]["attacker"], "Elsa");
    assert_eq!(json[0]["damage"], 30);
    assert_eq!(json[6]["defender_died"], true);
}
