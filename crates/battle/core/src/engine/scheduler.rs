//! Round scheduling: who acts, in what order.

use arrayvec::ArrayVec;

use crate::config::BattleConfig;
use crate::state::{CombatantId, Roster};

/// Builds the acting order for one round.
///
/// Living combatants, fastest first by *current* speed (buffs count). The
/// sort is stable over registration order, so ties resolve players before
/// monsters, each in list order. Dead combatants never enter the order; a
/// combatant that dies mid-round is skipped when its slot comes up.
pub fn battle_order(roster: &Roster) -> ArrayVec<CombatantId, { BattleConfig::MAX_COMBATANTS }> {
    let mut order: ArrayVec<(i32, CombatantId), { BattleConfig::MAX_COMBATANTS }> = roster
        .all()
        .filter(|combatant| combatant.is_alive())
        .map(|combatant| (combatant.attributes.speed.value(), combatant.id()))
        .collect();

    order.sort_by(|a, b| b.0.cmp(&a.0));

    order.into_iter().map(|(_, id)| id).collect()
}
