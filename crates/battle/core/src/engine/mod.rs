//! The battle state machine.
//!
//! [`BattleSession`] owns everything for one battle: the roster, the catalog
//! handles, the RNG, the per-round action queue, and the event outbox. The
//! embedding layer drives it cooperatively: one [`BattleSession::update`]
//! call per frame advances at most one transition-worth of work, and the
//! machine holds whenever an effect is still being presented.
//!
//! A round:
//!
//! ```text
//! SelectActions ── done_selecting_actions() ──► ExecuteActions
//!     ▲                                             │ per actor:
//!     │                                             ▼
//!     │                          ShowAction → ActionEffect → EffectMessage
//!     │                                             │
//!     │              all acted                      ▼
//!     └────────── ProcessStatusEffects ◄───── ExecuteActions
//!                        │
//!                        ├─ troop wiped  → VictoryPre → VictoryPost (end)
//!                        ├─ party wiped  → DefeatPre  → Defeat      (end)
//!                        └─ otherwise    → next round
//! ```
//!
//! Escape is only reachable through a successful flee and is terminal.

mod errors;
pub mod scheduler;

pub use errors::ActionRejected;

use std::collections::HashMap;

use arrayvec::ArrayVec;
use tracing::debug;

use crate::action::{BattleAction, resolve_action};
use crate::catalog::Catalogs;
use crate::combat::{TargetSpec, status};
use crate::config::BattleConfig;
use crate::events::BattleEvent;
use crate::rng::{BattleRng, PcgRng};
use crate::state::{Combatant, CombatantId, Roster};

/// The machine's states. `VictoryPost`, `Defeat`, and `Escape` are terminal.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum BattleState {
    Begin,
    SelectActions,
    ExecuteActions,
    ShowAction,
    ActionEffect,
    EffectMessage,
    ProcessStatusEffects,
    VictoryPre,
    VictoryPost,
    DefeatPre,
    Defeat,
    Escape,
}

/// How a finished battle ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BattleOutcome {
    Victory,
    Defeat,
    Escaped,
}

/// One battle from start to outcome.
pub struct BattleSession {
    config: BattleConfig,
    state: BattleState,
    roster: Roster,
    catalogs: Catalogs,
    rng: Box<dyn BattleRng>,

    /// This round's acting order and the position within it.
    order: ArrayVec<CombatantId, { BattleConfig::MAX_COMBATANTS }>,
    cursor: usize,

    /// Queued intents for the current round, one per actor.
    pending: HashMap<CombatantId, BattleAction>,

    round: u32,
    /// True between `done_selecting_actions()` and the status pass; lets
    /// ExecuteActions distinguish "round finished" from "round not begun".
    round_in_flight: bool,

    can_escape: bool,
    started: bool,

    /// Armed whenever events were just posted; the machine holds until the
    /// presentation layer acknowledges.
    effect_in_progress: bool,

    current_actor: Option<CombatantId>,
    current_targets: Vec<CombatantId>,

    events: Vec<BattleEvent>,
}

impl BattleSession {
    pub fn new(
        roster: Roster,
        catalogs: Catalogs,
        config: BattleConfig,
        rng: Box<dyn BattleRng>,
    ) -> Self {
        Self {
            config,
            state: BattleState::Begin,
            roster,
            catalogs,
            rng,
            order: ArrayVec::new(),
            cursor: 0,
            pending: HashMap::new(),
            round: 0,
            round_in_flight: false,
            can_escape: true,
            started: false,
            effect_in_progress: false,
            current_actor: None,
            current_targets: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Convenience constructor with the standard PCG generator.
    pub fn with_seed(roster: Roster, catalogs: Catalogs, config: BattleConfig, seed: u64) -> Self {
        Self::new(roster, catalogs, config, Box::new(PcgRng::from_seed(seed)))
    }

    // ========================================================================
    // Commands
    // ========================================================================

    /// Begins the battle. `can_escape` gates whether flee attempts may ever
    /// succeed. The intro transition counts as an effect: the machine holds
    /// in `Begin` until acknowledged.
    pub fn start(&mut self, can_escape: bool) {
        if self.started {
            return;
        }
        self.started = true;
        self.can_escape = can_escape;
        self.round = 1;
        self.order = scheduler::battle_order(&self.roster);
        self.events.push(BattleEvent::EncounterStarted);
        self.effect_in_progress = true;
        self.state = BattleState::Begin;
    }

    /// Advances the machine by at most one transition. Call once per frame.
    ///
    /// Does nothing before `start()`, after a terminal state, or while an
    /// effect is still being presented.
    pub fn update(&mut self) {
        if !self.started || self.is_over() || self.effect_in_progress {
            return;
        }

        match self.state {
            BattleState::Begin => self.state = BattleState::SelectActions,
            BattleState::SelectActions => {} // waiting on intents
            BattleState::ExecuteActions => self.execute_next_action(),
            BattleState::ShowAction => {
                self.effect_in_progress = true;
                self.state = BattleState::ActionEffect;
            }
            BattleState::ActionEffect => {
                self.effect_in_progress = true;
                self.state = BattleState::EffectMessage;
            }
            BattleState::EffectMessage => {
                self.current_actor = None;
                self.current_targets.clear();
                self.state = BattleState::ExecuteActions;
            }
            BattleState::ProcessStatusEffects => self.process_status_effects(),
            BattleState::VictoryPre => {
                let (exp, gold) = self.victory_spoils();
                self.events.push(BattleEvent::Victory { exp, gold });
                self.effect_in_progress = true;
                self.state = BattleState::VictoryPost;
            }
            BattleState::DefeatPre => {
                self.events.push(BattleEvent::PartyFallen);
                self.effect_in_progress = true;
                self.state = BattleState::Defeat;
            }
            BattleState::VictoryPost | BattleState::Defeat | BattleState::Escape => {}
        }
    }

    /// Queues one intent for a living combatant.
    ///
    /// # Errors
    ///
    /// Rejected (state untouched) when the actor is unknown, defeated, has
    /// already queued this round, or when intents are not being collected.
    pub fn set_action(&mut self, action: BattleAction) -> Result<(), ActionRejected> {
        if !matches!(
            self.state,
            BattleState::Begin | BattleState::SelectActions
        ) {
            return Err(ActionRejected::NotSelectingActions);
        }

        let actor = action.actor;
        let Some(combatant) = self.roster.combatant(actor) else {
            return Err(ActionRejected::UnknownCombatant(actor));
        };
        if !combatant.is_alive() {
            return Err(ActionRejected::Defeated(actor));
        }
        if self.pending.contains_key(&actor) {
            return Err(ActionRejected::AlreadyQueued(actor));
        }

        self.pending.insert(actor, action);
        Ok(())
    }

    /// Signals that every player intent is committed. Picks intents for the
    /// monsters, rebuilds the round order, and starts executing.
    ///
    /// Ignored outside the selection state.
    pub fn done_selecting_actions(&mut self) {
        if self.state != BattleState::SelectActions {
            debug!(state = %self.state, "done_selecting_actions ignored");
            return;
        }

        self.queue_monster_intents();
        self.order = scheduler::battle_order(&self.roster);
        self.cursor = 0;
        self.round_in_flight = true;
        self.state = BattleState::ExecuteActions;
    }

    /// Acknowledges that the presentation layer finished the current effect,
    /// releasing the machine to advance.
    pub fn acknowledge_effect(&mut self) {
        self.effect_in_progress = false;
    }

    /// Forces the battle to end immediately in the victory outcome (scripted
    /// force-win).
    pub fn end_battle(&mut self) {
        self.state = BattleState::VictoryPost;
        self.effect_in_progress = false;
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn state(&self) -> BattleState {
        self.state
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    /// The combatant whose action is currently being presented.
    pub fn current_actor(&self) -> Option<CombatantId> {
        self.current_actor
    }

    /// The resolved target set of the action being presented.
    pub fn current_targets(&self) -> &[CombatantId] {
        &self.current_targets
    }

    /// True while the presentation layer still owes an acknowledgement.
    pub fn effect_in_progress(&self) -> bool {
        self.effect_in_progress
    }

    pub fn is_over(&self) -> bool {
        self.outcome().is_some()
    }

    pub fn outcome(&self) -> Option<BattleOutcome> {
        match self.state {
            BattleState::VictoryPost => Some(BattleOutcome::Victory),
            BattleState::Defeat => Some(BattleOutcome::Defeat),
            BattleState::Escape => Some(BattleOutcome::Escaped),
            _ => None,
        }
    }

    /// Takes all posted battle-log events, oldest first.
    pub fn drain_events(&mut self) -> Vec<BattleEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn combatant(&self, id: CombatantId) -> Option<&Combatant> {
        self.roster.combatant(id)
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Monsters without an intent attack a random living player. Kept
    /// deliberately simple; anything smarter is an embedder concern routed
    /// through the same public queue.
    fn queue_monster_intents(&mut self) {
        let monsters: Vec<CombatantId> = self
            .roster
            .monsters()
            .filter(|monster| monster.is_alive())
            .map(|monster| monster.id())
            .collect();

        for id in monsters {
            self.pending
                .entry(id)
                .or_insert_with(|| BattleAction::attack(id, TargetSpec::RandomEnemy));
        }
    }

    /// Pops the next scheduled actor with a pending intent and resolves it.
    /// Dead actors are skipped without consuming a presentation cycle.
    fn execute_next_action(&mut self) {
        if !self.round_in_flight {
            self.state = BattleState::SelectActions;
            return;
        }

        while self.cursor < self.order.len() {
            let id = self.order[self.cursor];
            self.cursor += 1;

            let Some(action) = self.pending.remove(&id) else {
                continue;
            };

            let blocked = match self.roster.combatant(id) {
                None => continue,
                Some(combatant) if !combatant.is_alive() => continue,
                Some(combatant) => status::action_blocked_by(combatant, &self.catalogs),
            };

            if let Some(definition) = blocked {
                let actor_name = self
                    .roster
                    .combatant(id)
                    .map(|combatant| combatant.name.clone())
                    .unwrap_or_default();
                self.events.push(BattleEvent::ActionPrevented {
                    actor: id,
                    actor_name,
                    status: definition.name,
                });
                self.current_actor = Some(id);
                self.current_targets.clear();
                self.effect_in_progress = true;
                self.state = BattleState::EffectMessage;
                return;
            }

            let outcome = resolve_action(
                &action,
                &mut self.roster,
                &self.catalogs,
                &self.config,
                self.can_escape,
                self.rng.as_mut(),
            );

            self.current_actor = Some(id);
            self.current_targets = outcome.targets;
            self.events.extend(outcome.events);

            if outcome.escaped {
                self.state = BattleState::Escape;
            } else {
                self.effect_in_progress = true;
                self.state = BattleState::ShowAction;
            }
            return;
        }

        // Every scheduled actor has acted.
        self.state = BattleState::ProcessStatusEffects;
    }

    /// End-of-round pass: status ticks for every living combatant, guard
    /// expiry, then the victory/defeat check that gates the next round.
    fn process_status_effects(&mut self) {
        let living: Vec<CombatantId> = self
            .roster
            .all()
            .filter(|combatant| combatant.is_alive())
            .map(|combatant| combatant.id())
            .collect();

        let mut events = Vec::new();
        for id in living {
            let Some(combatant) = self.roster.combatant_mut(id) else {
                continue;
            };
            events.extend(status::process_round_end(
                combatant,
                &self.catalogs,
                self.rng.as_mut(),
            ));
        }

        self.roster.clear_guards();
        self.pending.clear();
        self.round_in_flight = false;
        self.round += 1;

        if !events.is_empty() {
            self.effect_in_progress = true;
        }
        self.events.extend(events);

        if self.roster.all_monsters_defeated() {
            self.state = BattleState::VictoryPre;
        } else if self.roster.all_players_defeated() {
            self.state = BattleState::DefeatPre;
        } else {
            self.state = BattleState::ExecuteActions;
        }
    }

    /// Experience and gold summed over the defeated troop.
    fn victory_spoils(&self) -> (u32, u32) {
        self.roster
            .monsters()
            .filter(|monster| !monster.is_alive())
            .fold((0, 0), |(exp, gold), monster| {
                (exp + monster.reward.exp, gold + monster.reward.gold)
            })
    }
}

impl std::fmt::Debug for BattleSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BattleSession")
            .field("state", &self.state)
            .field("round", &self.round)
            .field("can_escape", &self.can_escape)
            .field("effect_in_progress", &self.effect_in_progress)
            .finish_non_exhaustive()
    }
}
