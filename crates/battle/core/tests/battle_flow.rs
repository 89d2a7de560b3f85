//! Full battle scenarios driven through the session state machine.

use std::sync::Arc;

use battle_core::{
    ActionRejected, AttributeSet, BattleAction, BattleConfig, BattleEvent, BattleOutcome,
    BattleSession, BattleState, Catalogs, Combatant, CombatantId, ItemRegistry, PcgRng, Roster,
    SpellRegistry, StatusDefinition, StatusRegistry, StatusTick, TargetSpec,
};

fn catalogs() -> Catalogs {
    Catalogs::new(
        Arc::new(SpellRegistry::default()),
        Arc::new(ItemRegistry::default()),
        Arc::new(StatusRegistry::new([StatusDefinition::new(
            "Poison",
            "is poisoned!",
            "shakes off the poison.",
        )
        .with_tick(StatusTick::damage(10))])),
    )
}

fn hero() -> Combatant {
    Combatant::new("Hero", AttributeSet::new(10, 20, 15, 8, 10, 8, 12), 80, 20)
}

fn slime() -> Combatant {
    Combatant::new("Slime", AttributeSet::new(4, 9, 7, 2, 6, 4, 5), 35, 0).with_reward(15, 10)
}

fn ogre() -> Combatant {
    Combatant::new("Ogre", AttributeSet::new(10, 30, 20, 3, 12, 6, 8), 120, 0).with_reward(60, 45)
}

const HERO: CombatantId = CombatantId(0);

/// Ticks the session, acknowledging presentation holds, until it reaches
/// `target` or the tick budget runs out.
fn run_until(session: &mut BattleSession, target: BattleState, budget: usize) {
    for _ in 0..budget {
        if session.state() == target {
            return;
        }
        if session.effect_in_progress() {
            session.acknowledge_effect();
        }
        session.update();
    }
    panic!(
        "session never reached {target:?}; stuck in {:?}",
        session.state()
    );
}

/// Drives one full round where the player commits the given intents.
fn play_round(session: &mut BattleSession, intents: Vec<BattleAction>) {
    run_until(session, BattleState::SelectActions, 64);
    for intent in intents {
        session.set_action(intent).unwrap();
    }
    session.done_selecting_actions();
}

#[test]
fn start_arms_the_intro_and_reaches_selection() {
    let roster = Roster::new(vec![hero()], vec![slime()]).unwrap();
    let mut session = BattleSession::with_seed(roster, catalogs(), BattleConfig::default(), 1);

    // Before start, ticking is inert.
    session.update();
    assert_eq!(session.state(), BattleState::Begin);

    session.start(true);
    assert!(session.effect_in_progress());
    assert_eq!(
        session.drain_events(),
        vec![BattleEvent::EncounterStarted]
    );

    // Held until the intro is acknowledged.
    session.update();
    assert_eq!(session.state(), BattleState::Begin);
    session.acknowledge_effect();
    session.update();
    assert_eq!(session.state(), BattleState::SelectActions);
}

#[test]
fn lone_monster_at_one_hp_dies_and_victory_follows_the_status_pass() {
    let mut monster = slime();
    monster.hp.apply_damage(34); // 1 hp left
    let roster = Roster::new(vec![hero()], vec![monster]).unwrap();
    let mut session = BattleSession::with_seed(roster, catalogs(), BattleConfig::default(), 7);

    session.start(true);
    play_round(
        &mut session,
        vec![BattleAction::attack(HERO, TargetSpec::Single(CombatantId(1)))],
    );

    run_until(&mut session, BattleState::VictoryPost, 128);
    assert_eq!(session.outcome(), Some(BattleOutcome::Victory));

    let events = session.drain_events();
    assert!(events.iter().any(|e| matches!(e, BattleEvent::Defeated { .. })));
    assert!(events.contains(&BattleEvent::Victory { exp: 15, gold: 10 }));
    assert_eq!(session.combatant(CombatantId(1)).unwrap().hp.current(), 0);
}

#[test]
fn wiped_party_reaches_defeat() {
    let mut weakling = hero();
    weakling.hp.apply_damage(79); // 1 hp left
    let roster = Roster::new(vec![weakling], vec![ogre()]).unwrap();
    let mut session = BattleSession::with_seed(roster, catalogs(), BattleConfig::default(), 3);

    session.start(true);
    play_round(&mut session, vec![BattleAction::defend(HERO)]);

    run_until(&mut session, BattleState::Defeat, 128);
    assert_eq!(session.outcome(), Some(BattleOutcome::Defeat));
    assert!(session.drain_events().contains(&BattleEvent::PartyFallen));
    assert!(session.is_over());
}

#[test]
fn successful_flee_ends_in_escape() {
    let roster = Roster::new(vec![hero()], vec![slime()]).unwrap();
    // Escape always succeeds with a 100% escape chance.
    let config = BattleConfig::with_escape_chance(100);
    let mut session = BattleSession::with_seed(roster, catalogs(), config, 11);

    session.start(true);
    play_round(&mut session, vec![BattleAction::flee(HERO)]);

    run_until(&mut session, BattleState::Escape, 64);
    assert_eq!(session.outcome(), Some(BattleOutcome::Escaped));
    assert!(session.drain_events().contains(&BattleEvent::Escaped));
}

#[test]
fn flee_cannot_succeed_when_escape_is_forbidden() {
    let roster = Roster::new(vec![hero()], vec![slime()]).unwrap();
    let config = BattleConfig::with_escape_chance(100);
    let mut session = BattleSession::with_seed(roster, catalogs(), config, 11);

    session.start(false);
    play_round(&mut session, vec![BattleAction::flee(HERO)]);

    // The failed attempt consumes the turn; the battle rolls on into the
    // next round's selection.
    run_until(&mut session, BattleState::SelectActions, 128);
    assert_eq!(session.outcome(), None);
    assert!(
        session
            .drain_events()
            .iter()
            .any(|e| matches!(e, BattleEvent::FleeFailed { .. }))
    );
    assert_eq!(session.round(), 2);
}

#[test]
fn queue_rejections_cover_the_invalid_action_taxonomy() {
    let roster = Roster::new(vec![hero()], vec![slime()]).unwrap();
    let mut session = BattleSession::with_seed(roster, catalogs(), BattleConfig::default(), 5);
    session.start(true);
    run_until(&mut session, BattleState::SelectActions, 16);

    assert_eq!(
        session.set_action(BattleAction::defend(CombatantId(42))),
        Err(ActionRejected::UnknownCombatant(CombatantId(42)))
    );

    session
        .set_action(BattleAction::attack(HERO, TargetSpec::Single(CombatantId(1))))
        .unwrap();
    assert_eq!(
        session.set_action(BattleAction::defend(HERO)),
        Err(ActionRejected::AlreadyQueued(HERO))
    );

    session.done_selecting_actions();
    assert_eq!(
        session.set_action(BattleAction::defend(HERO)),
        Err(ActionRejected::NotSelectingActions)
    );
}

#[test]
fn dead_combatants_cannot_queue_actions() {
    let mut fallen = hero();
    fallen.hp.apply_damage(1000);
    let roster = Roster::new(vec![hero(), fallen], vec![slime()]).unwrap();
    let mut session = BattleSession::with_seed(roster, catalogs(), BattleConfig::default(), 5);
    session.start(true);
    run_until(&mut session, BattleState::SelectActions, 16);

    assert_eq!(
        session.set_action(BattleAction::defend(CombatantId(1))),
        Err(ActionRejected::Defeated(CombatantId(1)))
    );
}

#[test]
fn presentation_states_hold_until_acknowledged() {
    let roster = Roster::new(vec![hero()], vec![slime()]).unwrap();
    let mut session = BattleSession::with_seed(roster, catalogs(), BattleConfig::default(), 9);
    session.start(true);
    play_round(
        &mut session,
        vec![BattleAction::attack(HERO, TargetSpec::Single(CombatantId(1)))],
    );

    // The hero is faster, so the first resolution is the hero's attack.
    session.update();
    assert_eq!(session.state(), BattleState::ShowAction);
    assert_eq!(session.current_actor(), Some(HERO));
    assert_eq!(session.current_targets(), &[CombatantId(1)]);
    assert!(session.effect_in_progress());

    // Ticking without acknowledgement does not advance.
    for _ in 0..5 {
        session.update();
    }
    assert_eq!(session.state(), BattleState::ShowAction);

    session.acknowledge_effect();
    session.update();
    assert_eq!(session.state(), BattleState::ActionEffect);
    session.acknowledge_effect();
    session.update();
    assert_eq!(session.state(), BattleState::EffectMessage);
    session.acknowledge_effect();
    session.update();
    assert_eq!(session.state(), BattleState::ExecuteActions);
    assert_eq!(session.current_actor(), None);
}

#[test]
fn end_battle_forces_the_terminal_state() {
    let roster = Roster::new(vec![hero()], vec![slime()]).unwrap();
    let mut session = BattleSession::with_seed(roster, catalogs(), BattleConfig::default(), 13);
    session.start(true);
    run_until(&mut session, BattleState::SelectActions, 16);

    session.end_battle();
    assert!(session.is_over());
    assert_eq!(session.outcome(), Some(BattleOutcome::Victory));
    // Further ticks are inert.
    session.update();
    assert_eq!(session.state(), BattleState::VictoryPost);
}

#[test]
fn poison_ticks_at_round_end_and_can_decide_the_battle() {
    let mut monster = slime();
    monster.status = Some("Poison".into());
    monster.hp.apply_damage(32); // 3 hp left; the 10% tick (3 hp) kills
    let roster = Roster::new(vec![hero()], vec![monster]).unwrap();
    let mut session = BattleSession::with_seed(roster, catalogs(), BattleConfig::default(), 17);

    session.start(true);
    // The hero just guards; the poison does the work.
    play_round(&mut session, vec![BattleAction::defend(HERO)]);

    run_until(&mut session, BattleState::VictoryPost, 128);
    let events = session.drain_events();
    assert!(
        events
            .iter()
            .any(|e| matches!(e, BattleEvent::StatusDamage { amount: 3, .. }))
    );
    assert_eq!(session.outcome(), Some(BattleOutcome::Victory));
}

#[test]
fn guard_flags_expire_with_the_round() {
    let roster = Roster::new(vec![hero()], vec![ogre()]).unwrap();
    let mut session = BattleSession::with_seed(roster, catalogs(), BattleConfig::default(), 19);
    session.start(true);
    play_round(&mut session, vec![BattleAction::defend(HERO)]);

    run_until(&mut session, BattleState::SelectActions, 128);
    assert_eq!(session.round(), 2);
    assert!(!session.combatant(HERO).unwrap().guarding);
}

#[test]
fn identical_seeds_replay_identical_battles() {
    let build = || {
        let roster = Roster::new(vec![hero()], vec![slime(), slime()]).unwrap();
        BattleSession::new(
            roster,
            catalogs(),
            BattleConfig::default(),
            Box::new(PcgRng::from_seed(1234)),
        )
    };

    let mut logs: Vec<Vec<String>> = Vec::new();
    for _ in 0..2 {
        let mut session = build();
        session.start(true);
        let mut log = Vec::new();
        for _ in 0..512 {
            if session.is_over() {
                break;
            }
            if session.state() == BattleState::SelectActions {
                session
                    .set_action(BattleAction::attack(HERO, TargetSpec::RandomEnemy))
                    .unwrap();
                session.done_selecting_actions();
            }
            if session.effect_in_progress() {
                session.acknowledge_effect();
            }
            session.update();
            log.extend(session.drain_events().iter().map(|e| e.to_string()));
        }
        assert!(session.is_over(), "battle should finish within the budget");
        logs.push(log);
    }

    assert_eq!(logs[0], logs[1]);
    assert!(!logs[0].is_empty());
}
