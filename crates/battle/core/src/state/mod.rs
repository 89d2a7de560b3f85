//! Combatant state: attributes, resource meters, and the battle roster.

mod attributes;
mod combatant;
mod roster;

pub use attributes::{Attribute, AttributeKind, AttributeSet, ResourceMeter};
pub use combatant::{Combatant, CombatantId, Reward, Side};
pub use roster::{Roster, RosterError};
