//! Battle-usable item definitions and the item catalog trait.

/// Immutable definition of a battle-usable item.
///
/// Display data beyond the name, shop pricing, and inventory bookkeeping are
/// the embedding game's concern; the engine only needs the formula inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub name: String,
    pub use_kind: ItemUse,
}

impl ItemDefinition {
    pub fn new(name: impl Into<String>, use_kind: ItemUse) -> Self {
        Self {
            name: name.into(),
            use_kind,
        }
    }
}

/// How an item resolves when used in battle.
///
/// Scaling variants feed the item's own strength/power values into the
/// physical damage formula in place of the user's attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemUse {
    /// Restore a fixed amount of hp.
    HealFixed { hp: u32 },

    /// Heal by the scaling formula.
    HealScaling { strength: i32, power: i32 },

    /// Damage by the scaling formula.
    DamageScaling { strength: i32, power: i32 },

    /// Restore a fixed amount of mp.
    RestoreMpFixed { mp: u32 },

    /// Game-specific item the engine does not interpret; resolves to zero
    /// effect.
    Custom(u16),
}

/// Read-only lookup of item definitions by name.
pub trait ItemCatalog: Send + Sync {
    fn item(&self, name: &str) -> Option<ItemDefinition>;

    /// All definitions, for menu listings and content validation.
    fn all_items(&self) -> Vec<ItemDefinition>;
}
