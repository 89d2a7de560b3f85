//! Execution of one queued action against its resolved targets.
//!
//! Resolution is atomic: all combatant mutations for an action happen inside
//! one call, and every outcome, including every recovered failure, is
//! reported as events. A malformed action (unknown spell name, no living
//! target) degrades to "no effect"; it never aborts the battle.

use tracing::{debug, warn};

use crate::catalog::{Catalogs, ItemUse, SpellDefinition, SpellKinds};
use crate::combat::{
    self, TargetSpec, item_damage, magical_damage, physical_damage, resolve_targets,
};
use crate::config::BattleConfig;
use crate::events::BattleEvent;
use crate::rng::BattleRng;
use crate::state::{Combatant, CombatantId, Roster};

use super::{BattleAction, BattleActionKind};

/// Everything the state machine needs to know after resolving one action.
#[derive(Clone, Debug, Default)]
pub struct ResolutionOutcome {
    /// Battle-log events, in resolution order.
    pub events: Vec<BattleEvent>,

    /// The concrete combatants the action affected (for the presentation
    /// layer's target query).
    pub targets: Vec<CombatantId>,

    /// A flee attempt succeeded; the session must end in the escape outcome.
    pub escaped: bool,
}

impl ResolutionOutcome {
    fn no_effect() -> Self {
        Self {
            events: vec![BattleEvent::NoEffect],
            ..Self::default()
        }
    }
}

/// Selection-time check: a spell cannot be chosen if its cost exceeds the
/// caster's current mp. The resolver re-validates this at execution time.
pub fn can_cast_spell(spell: &SpellDefinition, caster: &Combatant) -> bool {
    spell.mp_cost <= caster.mp.current()
}

/// Executes one action, mutating the roster and producing battle-log events.
pub fn resolve_action(
    action: &BattleAction,
    roster: &mut Roster,
    catalogs: &Catalogs,
    config: &BattleConfig,
    can_escape: bool,
    rng: &mut dyn BattleRng,
) -> ResolutionOutcome {
    let actor = action.actor;
    match roster.combatant(actor) {
        Some(acting) if acting.is_alive() => {}
        Some(_) => {
            debug!(%actor, "dropping action queued by a defeated combatant");
            return ResolutionOutcome::no_effect();
        }
        None => {
            warn!(%actor, "dropping action queued by an unknown combatant");
            return ResolutionOutcome::no_effect();
        }
    }

    match &action.kind {
        BattleActionKind::Attack { target } => resolve_attack(actor, *target, roster, rng),
        BattleActionKind::Spell { name, target } => {
            resolve_spell(actor, name, *target, roster, catalogs, rng)
        }
        BattleActionKind::Item { name, target } => {
            resolve_item(actor, name, *target, roster, catalogs, rng)
        }
        BattleActionKind::Defend => resolve_defend(actor, roster),
        BattleActionKind::Flee => resolve_flee(actor, roster, config, can_escape, rng),
    }
}

fn resolve_attack(
    actor: CombatantId,
    target_spec: TargetSpec,
    roster: &mut Roster,
    rng: &mut dyn BattleRng,
) -> ResolutionOutcome {
    let targets = resolve_targets(actor, target_spec, roster, rng);
    if targets.is_empty() {
        return ResolutionOutcome::no_effect();
    }

    let mut outcome = ResolutionOutcome {
        targets: targets.clone(),
        ..ResolutionOutcome::default()
    };

    if let Some(attacker) = roster.combatant(actor) {
        outcome.events.push(BattleEvent::Attacked {
            attacker: actor,
            attacker_name: attacker.name.clone(),
        });
    }

    for target_id in targets {
        let damage = {
            let (Some(attacker), Some(target)) =
                (roster.combatant(actor), roster.combatant(target_id))
            else {
                continue;
            };
            let mut damage = physical_damage(attacker, target, rng);
            if target.guarding {
                damage /= 2;
            }
            damage
        };
        apply_hp_damage(target_id, damage, roster, &mut outcome.events);
    }

    outcome
}

fn resolve_spell(
    actor: CombatantId,
    name: &str,
    target_spec: TargetSpec,
    roster: &mut Roster,
    catalogs: &Catalogs,
    rng: &mut dyn BattleRng,
) -> ResolutionOutcome {
    let spell = match catalogs.spell(name) {
        Ok(spell) => spell,
        Err(error) => {
            warn!(%actor, %error, "spell lookup failed during resolution");
            return ResolutionOutcome::no_effect();
        }
    };

    // Selection should have filtered this, but the queue contents are
    // caller-supplied; re-validate before any mutation.
    let Some(caster) = roster.combatant(actor) else {
        return ResolutionOutcome::no_effect();
    };
    if !can_cast_spell(&spell, caster) {
        debug!(%actor, spell = %spell.name, "insufficient mp at resolution time");
        return ResolutionOutcome::no_effect();
    }

    let targets = resolve_targets(actor, target_spec, roster, rng);
    if targets.is_empty() {
        return ResolutionOutcome::no_effect();
    }

    // The cast itself succeeds from here on: pay the cost exactly once,
    // however many targets and capability bits follow.
    let caster_name = caster.name.clone();
    if let Some(caster) = roster.combatant_mut(actor) {
        caster.mp.spend(spell.mp_cost);
    }

    let mut outcome = ResolutionOutcome {
        targets: targets.clone(),
        ..ResolutionOutcome::default()
    };
    outcome.events.push(BattleEvent::SpellCast {
        caster: actor,
        caster_name,
        spell: spell.name.clone(),
    });

    for target_id in targets {
        apply_spell_to_target(actor, &spell, target_id, roster, catalogs, rng, &mut outcome.events);
    }

    outcome
}

/// Applies every matching capability of a spell to one target, in the fixed
/// order damage/heal → cause-status → remove-status → buff. The order is
/// part of the log contract.
fn apply_spell_to_target(
    actor: CombatantId,
    spell: &SpellDefinition,
    target_id: CombatantId,
    roster: &mut Roster,
    catalogs: &Catalogs,
    rng: &mut dyn BattleRng,
    events: &mut Vec<BattleEvent>,
) {
    if spell.kinds.intersects(SpellKinds::DAMAGE | SpellKinds::HEAL) {
        let damage = {
            let (Some(caster), Some(target)) =
                (roster.combatant(actor), roster.combatant(target_id))
            else {
                return;
            };
            magical_damage(caster, target, spell, rng)
        };
        apply_hp_damage(target_id, damage, roster, events);
    }

    if spell.kinds.contains(SpellKinds::CAUSE_STATUS) {
        for (status_name, chance) in &spell.status_effects {
            let hit = rng.percent(*chance);
            if !hit {
                events.push(BattleEvent::NoEffect);
                continue;
            }
            match catalogs.status(status_name) {
                Ok(definition) => {
                    if let Some(target) = roster.combatant_mut(target_id) {
                        events.push(combat::afflict(target, &definition));
                    }
                }
                Err(error) => {
                    warn!(spell = %spell.name, %error, "status lookup failed during cast");
                    events.push(BattleEvent::NoEffect);
                }
            }
        }
    }

    if spell.kinds.contains(SpellKinds::REMOVE_STATUS) {
        for status_name in spell.status_effects.keys() {
            match catalogs.status(status_name) {
                Ok(definition) => {
                    if let Some(target) = roster.combatant_mut(target_id) {
                        events.push(combat::cure(target, &definition));
                    }
                }
                Err(error) => {
                    warn!(spell = %spell.name, %error, "status lookup failed during cure");
                    events.push(BattleEvent::NoEffect);
                }
            }
        }
    }

    if spell.kinds.contains(SpellKinds::BUFF) {
        for attribute in &spell.buff_attributes {
            if let Some(target) = roster.combatant_mut(target_id) {
                events.push(combat::buff(target, *attribute, spell.power));
            }
        }
    }

    if spell.kinds.contains(SpellKinds::CUSTOM) {
        // Scripted spell behavior belongs to the embedding game.
        debug!(spell = %spell.name, "custom spell capability left to the embedder");
        events.push(BattleEvent::NoEffect);
    }
}

fn resolve_item(
    actor: CombatantId,
    name: &str,
    target_spec: TargetSpec,
    roster: &mut Roster,
    catalogs: &Catalogs,
    rng: &mut dyn BattleRng,
) -> ResolutionOutcome {
    let item = match catalogs.item(name) {
        Ok(item) => item,
        Err(error) => {
            warn!(%actor, %error, "item lookup failed during resolution");
            return ResolutionOutcome::no_effect();
        }
    };

    let targets = resolve_targets(actor, target_spec, roster, rng);
    if targets.is_empty() {
        return ResolutionOutcome::no_effect();
    }

    let mut outcome = ResolutionOutcome {
        targets: targets.clone(),
        ..ResolutionOutcome::default()
    };

    if let Some(user) = roster.combatant(actor) {
        outcome.events.push(BattleEvent::ItemUsed {
            user: actor,
            user_name: user.name.clone(),
            item: item.name.clone(),
        });
    }

    for target_id in targets {
        let damage = {
            let (Some(user), Some(target)) =
                (roster.combatant(actor), roster.combatant(target_id))
            else {
                continue;
            };
            item_damage(user, target, &item, rng)
        };

        match item.use_kind {
            ItemUse::RestoreMpFixed { .. } => {
                if let Some(target) = roster.combatant_mut(target_id) {
                    let restored = target.mp.restore((-damage).max(0) as u32);
                    outcome.events.push(BattleEvent::MpRestored {
                        target: target_id,
                        target_name: target.name.clone(),
                        amount: restored,
                    });
                }
            }
            ItemUse::Custom(_) => {
                outcome.events.push(BattleEvent::NoEffect);
            }
            _ => apply_hp_damage(target_id, damage, roster, &mut outcome.events),
        }
    }

    outcome
}

fn resolve_defend(actor: CombatantId, roster: &mut Roster) -> ResolutionOutcome {
    let Some(acting) = roster.combatant_mut(actor) else {
        return ResolutionOutcome::no_effect();
    };
    acting.guarding = true;
    ResolutionOutcome {
        events: vec![BattleEvent::Guarding {
            actor,
            actor_name: acting.name.clone(),
        }],
        targets: vec![actor],
        escaped: false,
    }
}

fn resolve_flee(
    actor: CombatantId,
    roster: &Roster,
    config: &BattleConfig,
    can_escape: bool,
    rng: &mut dyn BattleRng,
) -> ResolutionOutcome {
    let Some(acting) = roster.combatant(actor) else {
        return ResolutionOutcome::no_effect();
    };
    let actor_name = acting.name.clone();

    if !can_escape {
        debug!(%actor, "flee attempted in a battle that forbids escaping");
        return ResolutionOutcome {
            events: vec![BattleEvent::FleeFailed { actor, actor_name }],
            ..ResolutionOutcome::default()
        };
    }

    if rng.percent(config.escape_chance) {
        ResolutionOutcome {
            events: vec![BattleEvent::Escaped],
            targets: Vec::new(),
            escaped: true,
        }
    } else {
        ResolutionOutcome {
            events: vec![BattleEvent::FleeFailed { actor, actor_name }],
            ..ResolutionOutcome::default()
        }
    }
}

/// Applies a signed hp magnitude to one combatant and records the outcome.
///
/// Damage log lines show the computed magnitude (overkill included); heal
/// lines show the hp actually restored.
fn apply_hp_damage(
    target_id: CombatantId,
    damage: i32,
    roster: &mut Roster,
    events: &mut Vec<BattleEvent>,
) {
    let Some(target) = roster.combatant_mut(target_id) else {
        return;
    };
    let applied = target.hp.apply_damage(damage);

    if damage >= 0 {
        events.push(BattleEvent::DamageTaken {
            target: target_id,
            target_name: target.name.clone(),
            amount: damage as u32,
        });
        if !target.is_alive() {
            events.push(BattleEvent::Defeated {
                target: target_id,
                target_name: target.name.clone(),
            });
        }
    } else {
        events.push(BattleEvent::Healed {
            target: target_id,
            target_name: target.name.clone(),
            amount: applied.max(0) as u32,
        });
    }
}
