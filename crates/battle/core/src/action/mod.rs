//! Queued battle intents.
//!
//! An action is created when a participant commits an intent (menu input for
//! players, the intent picker for monsters), queued on the session keyed by
//! actor, and consumed exactly once by the resolver.

mod resolve;

pub use resolve::{ResolutionOutcome, can_cast_spell, resolve_action};

use crate::combat::TargetSpec;
use crate::state::CombatantId;

/// One queued intent: who acts, and what they do.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleAction {
    pub actor: CombatantId,
    pub kind: BattleActionKind,
}

/// The five battle verbs. Spell and item intents carry the object name,
/// resolved against the catalogs at execution time.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleActionKind {
    Attack { target: TargetSpec },
    Spell { name: String, target: TargetSpec },
    Item { name: String, target: TargetSpec },
    Defend,
    Flee,
}

impl BattleAction {
    pub fn attack(actor: CombatantId, target: TargetSpec) -> Self {
        Self {
            actor,
            kind: BattleActionKind::Attack { target },
        }
    }

    pub fn spell(actor: CombatantId, name: impl Into<String>, target: TargetSpec) -> Self {
        Self {
            actor,
            kind: BattleActionKind::Spell {
                name: name.into(),
                target,
            },
        }
    }

    pub fn item(actor: CombatantId, name: impl Into<String>, target: TargetSpec) -> Self {
        Self {
            actor,
            kind: BattleActionKind::Item {
                name: name.into(),
                target,
            },
        }
    }

    pub fn defend(actor: CombatantId) -> Self {
        Self {
            actor,
            kind: BattleActionKind::Defend,
        }
    }

    pub fn flee(actor: CombatantId) -> Self {
        Self {
            actor,
            kind: BattleActionKind::Flee,
        }
    }
}
