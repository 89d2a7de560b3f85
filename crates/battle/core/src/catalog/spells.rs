//! Spell definitions and the spell catalog trait.

use std::collections::BTreeMap;

use bitflags::bitflags;

use crate::state::AttributeKind;

/// Elemental affinity of a spell, matched against combatant resistances.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Element {
    /// No elemental interaction; resistance lookups default to neutral.
    #[default]
    Neutral,
    Fire,
    Ice,
    Lightning,
    Earth,
    Holy,
    Shadow,
}

bitflags! {
    /// Capability set of a spell.
    ///
    /// A spell may combine several kinds (damage plus cause-status, for
    /// example). The resolver applies matching capabilities in a fixed
    /// order: damage/heal, cause-status, remove-status, buff.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct SpellKinds: u8 {
        const DAMAGE        = 1 << 0;
        const HEAL          = 1 << 1;
        const BUFF          = 1 << 2;
        const CAUSE_STATUS  = 1 << 3;
        const REMOVE_STATUS = 1 << 4;
        const CUSTOM        = 1 << 5;
    }
}

/// Which combatants a spell may be aimed at when an intent is queued.
///
/// The menu layer turns this into a concrete [`crate::combat::TargetSpec`]
/// on the queued action; the engine re-validates liveness at resolution.
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
pub enum SpellTarget {
    SingleEnemy,
    SingleAlly,
    AllEnemies,
    AllAllies,
    User,
}

/// Immutable spell definition, loaded once at startup and read-only during
/// battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellDefinition {
    pub name: String,
    pub mp_cost: u32,
    /// Formula power for damage/heal kinds; buff percent for the buff kind.
    pub power: i32,
    pub target: SpellTarget,
    pub kinds: SpellKinds,
    /// Status name → percent chance. Cause-status rolls each entry once;
    /// remove-status cures each entry unconditionally. Sorted iteration
    /// keeps multi-status logs reproducible.
    pub status_effects: BTreeMap<String, u32>,
    /// Attributes rescaled by the buff kind, at `power` percent.
    pub buff_attributes: Vec<AttributeKind>,
    pub element: Element,
}

impl SpellDefinition {
    pub fn new(name: impl Into<String>, kinds: SpellKinds, target: SpellTarget) -> Self {
        Self {
            name: name.into(),
            mp_cost: 0,
            power: 0,
            target,
            kinds,
            status_effects: BTreeMap::new(),
            buff_attributes: Vec::new(),
            element: Element::Neutral,
        }
    }

    pub fn with_mp_cost(mut self, mp_cost: u32) -> Self {
        self.mp_cost = mp_cost;
        self
    }

    pub fn with_power(mut self, power: i32) -> Self {
        self.power = power;
        self
    }

    pub fn with_element(mut self, element: Element) -> Self {
        self.element = element;
        self
    }

    pub fn with_status(mut self, status: impl Into<String>, chance: u32) -> Self {
        self.status_effects.insert(status.into(), chance);
        self
    }

    pub fn with_buff(mut self, attribute: AttributeKind) -> Self {
        self.buff_attributes.push(attribute);
        self
    }

    /// True when the spell's magnitude is restorative rather than harmful.
    pub fn is_heal(&self) -> bool {
        self.kinds.contains(SpellKinds::HEAL)
    }
}

/// Read-only lookup of spell definitions by name.
pub trait SpellCatalog: Send + Sync {
    fn spell(&self, name: &str) -> Option<SpellDefinition>;

    /// All definitions, for menu listings and content validation.
    fn all_spells(&self) -> Vec<SpellDefinition>;
}
