//! Resolution of logical target specifiers into living combatants.

use tracing::{debug, warn};

use crate::rng::BattleRng;
use crate::state::{CombatantId, Roster};

/// Logical description of who an action affects, resolved against the
/// current roster at execution time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetSpec {
    /// A specific combatant picked when the intent was queued. If it has
    /// died since, the first living combatant on its side stands in.
    Single(CombatantId),

    /// Every living opponent of the actor.
    AllEnemies,

    /// Every living combatant on the actor's own side (the actor included).
    AllAllies,

    /// One uniformly-picked living opponent (one draw).
    RandomEnemy,

    /// One uniformly-picked living combatant on the actor's side (one draw).
    RandomAlly,

    /// The actor itself.
    User,
}

/// Resolves a target specifier to concrete living combatants.
///
/// The returned set contains only combatants alive at resolution time; an
/// empty set means the action should degrade to "no effect". Random picks
/// consume exactly one draw.
pub fn resolve_targets(
    actor: CombatantId,
    spec: TargetSpec,
    roster: &Roster,
    rng: &mut dyn BattleRng,
) -> Vec<CombatantId> {
    let Some(acting) = roster.combatant(actor) else {
        warn!(%actor, "cannot resolve targets for unknown actor");
        return Vec::new();
    };
    let side = acting.side();

    match spec {
        TargetSpec::Single(id) => {
            let Some(target) = roster.combatant(id) else {
                warn!(target = %id, "queued target is not part of this battle");
                return Vec::new();
            };
            if target.is_alive() {
                return vec![id];
            }
            // The picked target died before the action resolved; fall back
            // to the first living combatant on the side that was aimed at.
            match roster.living_on(target.side()).next() {
                Some(fallback) => {
                    debug!(target = %id, fallback = %fallback.id(), "redirecting dead target");
                    vec![fallback.id()]
                }
                None => Vec::new(),
            }
        }
        TargetSpec::AllEnemies => roster
            .living_opponents_of(side)
            .map(|combatant| combatant.id())
            .collect(),
        TargetSpec::AllAllies => roster
            .living_on(side)
            .map(|combatant| combatant.id())
            .collect(),
        TargetSpec::RandomEnemy => pick_random(
            roster
                .living_opponents_of(side)
                .map(|combatant| combatant.id())
                .collect(),
            rng,
        ),
        TargetSpec::RandomAlly => pick_random(
            roster
                .living_on(side)
                .map(|combatant| combatant.id())
                .collect(),
            rng,
        ),
        TargetSpec::User => {
            if acting.is_alive() {
                vec![actor]
            } else {
                Vec::new()
            }
        }
    }
}

fn pick_random(candidates: Vec<CombatantId>, rng: &mut dyn BattleRng) -> Vec<CombatantId> {
    if candidates.is_empty() {
        return Vec::new();
    }
    let index = rng.below(candidates.len() as u32) as usize;
    vec![candidates[index]]
}
