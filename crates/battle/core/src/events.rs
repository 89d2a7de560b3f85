//! Battle-log events.
//!
//! Every observable outcome of resolution is posted as a [`BattleEvent`].
//! The embedding layer drains them from the session, plays the matching
//! animation or sound, and shows the `Display` rendering as the log line.
//! Events carry combatant ids so the presentation can locate sprites, and
//! names so the log renders without a roster lookup.

use std::fmt;

use crate::state::{AttributeKind, CombatantId};

/// One entry of the battle log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BattleEvent {
    /// The battle intro: the troop has appeared.
    EncounterStarted,

    /// An attack is being performed.
    Attacked { attacker: CombatantId, attacker_name: String },

    /// A spell is being cast.
    SpellCast {
        caster: CombatantId,
        caster_name: String,
        spell: String,
    },

    /// An item is being used. The external inventory collaborator consumes
    /// the item when it sees this event.
    ItemUsed {
        user: CombatantId,
        user_name: String,
        item: String,
    },

    /// Hp was lost.
    DamageTaken {
        target: CombatantId,
        target_name: String,
        amount: u32,
    },

    /// Hp was restored.
    Healed {
        target: CombatantId,
        target_name: String,
        amount: u32,
    },

    /// Mp was restored.
    MpRestored {
        target: CombatantId,
        target_name: String,
        amount: u32,
    },

    /// A status condition took hold; `verb` comes from the status catalog.
    StatusInflicted {
        target: CombatantId,
        target_name: String,
        status: String,
        verb: String,
    },

    /// A status condition was lifted; `verb` is the recovery verb.
    StatusRecovered {
        target: CombatantId,
        target_name: String,
        status: String,
        verb: String,
    },

    /// End-of-round damage from a status condition.
    StatusDamage {
        target: CombatantId,
        target_name: String,
        status: String,
        amount: u32,
    },

    /// The actor's turn was skipped by its status condition.
    ActionPrevented {
        actor: CombatantId,
        actor_name: String,
        status: String,
    },

    /// A buff raised an attribute.
    AttributeRaised {
        target: CombatantId,
        target_name: String,
        attribute: AttributeKind,
        delta: i32,
    },

    /// A buff lowered an attribute. `delta` is negative.
    AttributeLowered {
        target: CombatantId,
        target_name: String,
        attribute: AttributeKind,
        delta: i32,
    },

    /// The actor is guarding for the rest of the round.
    Guarding { actor: CombatantId, actor_name: String },

    /// A flee attempt failed (or escaping is forbidden here).
    FleeFailed { actor: CombatantId, actor_name: String },

    /// A flee attempt succeeded; the battle ends in the escape outcome.
    Escaped,

    /// A combatant's hp reached zero.
    Defeated {
        target: CombatantId,
        target_name: String,
    },

    /// The troop was wiped out; `exp`/`gold` sum over defeated monsters.
    Victory { exp: u32, gold: u32 },

    /// The party was wiped out.
    PartyFallen,

    /// The canonical no-effect log line. Emitted on every recovered failure
    /// path so the log is never silent.
    NoEffect,
}

impl fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleEvent::EncounterStarted => write!(f, "Monsters draw near!"),
            BattleEvent::Attacked { attacker_name, .. } => write!(f, "{attacker_name} attacks!"),
            BattleEvent::SpellCast {
                caster_name, spell, ..
            } => write!(f, "{caster_name} casts {spell}!"),
            BattleEvent::ItemUsed {
                user_name, item, ..
            } => write!(f, "{user_name} uses the {item}!"),
            BattleEvent::DamageTaken {
                target_name, amount, ..
            } => write!(f, "{target_name} takes {amount} damage!"),
            BattleEvent::Healed {
                target_name, amount, ..
            } => write!(f, "{target_name} recovers {amount} HP!"),
            BattleEvent::MpRestored {
                target_name, amount, ..
            } => write!(f, "{target_name} recovers {amount} MP!"),
            BattleEvent::StatusInflicted {
                target_name, verb, ..
            } => write!(f, "{target_name} {verb}"),
            BattleEvent::StatusRecovered {
                target_name, verb, ..
            } => write!(f, "{target_name} {verb}"),
            BattleEvent::StatusDamage {
                target_name,
                status,
                amount,
                ..
            } => write!(f, "{target_name} takes {amount} damage from {status}!"),
            BattleEvent::ActionPrevented { actor_name, .. } => {
                write!(f, "{actor_name} is unable to act!")
            }
            BattleEvent::AttributeRaised {
                target_name,
                attribute,
                delta,
                ..
            } => write!(f, "{target_name}'s {attribute} increased by {delta}"),
            BattleEvent::AttributeLowered {
                target_name,
                attribute,
                delta,
                ..
            } => write!(f, "{target_name}'s {attribute} decreased by {}", delta.abs()),
            BattleEvent::Guarding { actor_name, .. } => write!(f, "{actor_name} guards."),
            BattleEvent::FleeFailed { actor_name, .. } => {
                write!(f, "{actor_name} couldn't escape!")
            }
            BattleEvent::Escaped => write!(f, "The party escaped!"),
            BattleEvent::Defeated { target_name, .. } => write!(f, "{target_name} is defeated!"),
            BattleEvent::Victory { exp, gold } => {
                write!(f, "Victory! Got {exp} experience and {gold} gold.")
            }
            BattleEvent::PartyFallen => write!(f, "The party has fallen..."),
            BattleEvent::NoEffect => write!(f, "No effect..."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_effect_renders_canonical_line() {
        assert_eq!(BattleEvent::NoEffect.to_string(), "No effect...");
    }

    #[test]
    fn lowered_attribute_renders_magnitude() {
        let event = BattleEvent::AttributeLowered {
            target: CombatantId(3),
            target_name: "Slime".into(),
            attribute: AttributeKind::Defense,
            delta: -4,
        };
        assert_eq!(event.to_string(), "Slime's defense decreased by 4");
    }
}
