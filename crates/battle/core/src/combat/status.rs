//! Status condition affliction, recovery, buffs, and the end-of-round tick.
//!
//! A combatant holds at most one status condition. Affliction refuses a
//! second condition (and refuses the dead); recovery requires the exact
//! condition. Both refusals still produce a log event so the UI is never
//! silent.

use tracing::warn;

use crate::catalog::{Catalogs, StatusDefinition};
use crate::events::BattleEvent;
use crate::rng::BattleRng;
use crate::state::{AttributeKind, Combatant};

/// Applies a status condition to the target.
///
/// No-op (with a `NoEffect` event) when the target is dead or already holds
/// any condition.
pub fn afflict(target: &mut Combatant, status: &StatusDefinition) -> BattleEvent {
    if !target.is_alive() || target.status.is_some() {
        return BattleEvent::NoEffect;
    }

    target.status = Some(status.name.clone());
    BattleEvent::StatusInflicted {
        target: target.id(),
        target_name: target.name.clone(),
        status: status.name.clone(),
        verb: status.verb.clone(),
    }
}

/// Lifts a status condition from the target.
///
/// No-op (with a `NoEffect` event) unless the target holds exactly this
/// condition.
pub fn cure(target: &mut Combatant, status: &StatusDefinition) -> BattleEvent {
    if !target.has_status(&status.name) {
        return BattleEvent::NoEffect;
    }

    target.status = None;
    BattleEvent::StatusRecovered {
        target: target.id(),
        target_name: target.name.clone(),
        status: status.name.clone(),
        verb: status.recover_verb.clone(),
    }
}

/// Rescales an attribute from its baseline: `current = max * (100 + pct) / 100`.
///
/// The baseline `max` is untouched, so repeated buffs do not compound. A
/// negative percent lowers the stat; a zero delta reports no effect.
pub fn buff(target: &mut Combatant, attribute: AttributeKind, percent: i32) -> BattleEvent {
    let slot = target.attributes.get_mut(attribute);
    let base = slot.max;
    let scaled = base * (100 + percent) / 100;
    slot.current = scaled;

    let delta = scaled - base;
    if delta > 0 {
        BattleEvent::AttributeRaised {
            target: target.id(),
            target_name: target.name.clone(),
            attribute,
            delta,
        }
    } else if delta < 0 {
        BattleEvent::AttributeLowered {
            target: target.id(),
            target_name: target.name.clone(),
            attribute,
            delta,
        }
    } else {
        BattleEvent::NoEffect
    }
}

/// Returns the status definition blocking the combatant's turn, if any.
///
/// Unknown status names in state are logged and treated as non-blocking.
pub fn action_blocked_by(target: &Combatant, catalogs: &Catalogs) -> Option<StatusDefinition> {
    let name = target.status.as_deref()?;
    match catalogs.status(name) {
        Ok(definition) if definition.prevents_action => Some(definition),
        Ok(_) => None,
        Err(error) => {
            warn!(combatant = %target.id(), %error, "active status missing from catalog");
            None
        }
    }
}

/// Runs the end-of-round tick for one living combatant.
///
/// Applies the condition's damage-over-time first (this percent of max hp,
/// at least 1 when nonzero), then rolls spontaneous recovery: one `[0, 100)`
/// draw, only when the condition has a recovery chance and the holder
/// survived the tick.
pub fn process_round_end(
    target: &mut Combatant,
    catalogs: &Catalogs,
    rng: &mut dyn BattleRng,
) -> Vec<BattleEvent> {
    let Some(name) = target.status.clone() else {
        return Vec::new();
    };

    let definition = match catalogs.status(&name) {
        Ok(definition) => definition,
        Err(error) => {
            warn!(combatant = %target.id(), %error, "active status missing from catalog");
            return Vec::new();
        }
    };

    let mut events = Vec::new();

    if definition.tick.damage_percent > 0 {
        let damage = (target.hp.max() * definition.tick.damage_percent / 100).max(1);
        target.hp.apply_damage(damage as i32);
        events.push(BattleEvent::StatusDamage {
            target: target.id(),
            target_name: target.name.clone(),
            status: definition.name.clone(),
            amount: damage,
        });
        if !target.is_alive() {
            events.push(BattleEvent::Defeated {
                target: target.id(),
                target_name: target.name.clone(),
            });
            return events;
        }
    }

    if definition.tick.recover_chance > 0 && rng.percent(definition.tick.recover_chance) {
        events.push(cure(target, &definition));
    }

    events
}
