//! Error types surfaced at the session API boundary.

use crate::state::CombatantId;

/// An intent was refused at queue time.
///
/// Queue-time rejections are the caller's signal that the menu offered an
/// invalid choice; the session state is untouched. Failures discovered later,
/// at resolution time, are recovered as "no effect" events instead.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionRejected {
    #[error("combatant {0} is not part of this battle")]
    UnknownCombatant(CombatantId),

    #[error("combatant {0} is defeated and cannot act")]
    Defeated(CombatantId),

    #[error("combatant {0} already has an action queued this round")]
    AlreadyQueued(CombatantId),

    #[error("actions can only be queued while intents are being selected")]
    NotSelectingActions,
}
