//! Combatant identity and in-battle state.

use std::collections::HashMap;
use std::fmt;

use crate::catalog::Element;

use super::attributes::{AttributeSet, ResourceMeter};

/// Unique identifier for a battle participant.
///
/// Ids are assigned by the roster in registration order (players first, then
/// monsters) and double as the scheduler tie-break.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantId(pub u32);

impl fmt::Display for CombatantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which side of the battle a combatant fights on.
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
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Side {
    /// Player-controlled combatants.
    Party,
    /// Monsters.
    Troop,
}

impl Side {
    /// The opposing side.
    pub fn opponent(self) -> Side {
        match self {
            Side::Party => Side::Troop,
            Side::Troop => Side::Party,
        }
    }
}

/// Experience and gold paid out when this combatant is defeated.
///
/// Zero for players; the victory payout sums over defeated monsters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reward {
    pub exp: u32,
    pub gold: u32,
}

impl Reward {
    pub fn new(exp: u32, gold: u32) -> Self {
        Self { exp, gold }
    }
}

/// One battle participant.
///
/// Owned by the session for the battle's duration; attributes and meters are
/// mutated in place by damage, healing, and buffs. A combatant is dead
/// exactly when its hp meter is depleted.
#[derive(Clone, Debug, PartialEq)]
pub struct Combatant {
    pub(crate) id: CombatantId,
    pub(crate) side: Side,
    pub name: String,
    pub attributes: AttributeSet,
    pub hp: ResourceMeter,
    pub mp: ResourceMeter,

    /// Active status condition, at most one at a time.
    pub status: Option<String>,

    /// Elemental resistance percent multipliers; absent entries are neutral
    /// (100). Below 100 resists, above 100 is a weakness, 0 is immunity.
    resistances: HashMap<Element, u32>,

    /// Set by the defend action; halves incoming physical damage until the
    /// end of the round.
    pub guarding: bool,

    pub reward: Reward,
}

impl Combatant {
    pub fn new(name: impl Into<String>, attributes: AttributeSet, max_hp: u32, max_mp: u32) -> Self {
        Self {
            id: CombatantId::default(),
            side: Side::Party,
            name: name.into(),
            attributes,
            hp: ResourceMeter::full(max_hp),
            mp: ResourceMeter::full(max_mp),
            status: None,
            resistances: HashMap::new(),
            guarding: false,
            reward: Reward::default(),
        }
    }

    pub fn with_resistance(mut self, element: Element, percent: u32) -> Self {
        self.resistances.insert(element, percent);
        self
    }

    pub fn with_reward(mut self, exp: u32, gold: u32) -> Self {
        self.reward = Reward::new(exp, gold);
        self
    }

    #[inline]
    pub fn id(&self) -> CombatantId {
        self.id
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        !self.hp.is_depleted()
    }

    /// True if the named status is currently active.
    pub fn has_status(&self, name: &str) -> bool {
        self.status.as_deref() == Some(name)
    }

    /// Resistance multiplier (percent) against the given element.
    pub fn resistance(&self, element: Element) -> u32 {
        self.resistances.get(&element).copied().unwrap_or(100)
    }
}
