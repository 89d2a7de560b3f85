//! In-memory catalog implementations backed by plain maps.
//!
//! These are the standard way to hand parsed content to a battle session:
//! build the registries from definition lists (hand-written or produced by
//! the content loaders) and wrap them in [`Catalogs`](super::Catalogs).

use std::collections::BTreeMap;

use super::items::{ItemCatalog, ItemDefinition};
use super::spells::{SpellCatalog, SpellDefinition};
use super::status::{StatusCatalog, StatusDefinition};

/// Map-backed [`SpellCatalog`].
#[derive(Clone, Debug, Default)]
pub struct SpellRegistry {
    spells: BTreeMap<String, SpellDefinition>,
}

impl SpellRegistry {
    pub fn new(definitions: impl IntoIterator<Item = SpellDefinition>) -> Self {
        Self {
            spells: definitions
                .into_iter()
                .map(|spell| (spell.name.clone(), spell))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.spells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spells.is_empty()
    }
}

impl SpellCatalog for SpellRegistry {
    fn spell(&self, name: &str) -> Option<SpellDefinition> {
        self.spells.get(name).cloned()
    }

    fn all_spells(&self) -> Vec<SpellDefinition> {
        self.spells.values().cloned().collect()
    }
}

/// Map-backed [`ItemCatalog`].
#[derive(Clone, Debug, Default)]
pub struct ItemRegistry {
    items: BTreeMap<String, ItemDefinition>,
}

impl ItemRegistry {
    pub fn new(definitions: impl IntoIterator<Item = ItemDefinition>) -> Self {
        Self {
            items: definitions
                .into_iter()
                .map(|item| (item.name.clone(), item))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ItemCatalog for ItemRegistry {
    fn item(&self, name: &str) -> Option<ItemDefinition> {
        self.items.get(name).cloned()
    }

    fn all_items(&self) -> Vec<ItemDefinition> {
        self.items.values().cloned().collect()
    }
}

/// Map-backed [`StatusCatalog`].
#[derive(Clone, Debug, Default)]
pub struct StatusRegistry {
    statuses: BTreeMap<String, StatusDefinition>,
}

impl StatusRegistry {
    pub fn new(definitions: impl IntoIterator<Item = StatusDefinition>) -> Self {
        Self {
            statuses: definitions
                .into_iter()
                .map(|status| (status.name.clone(), status))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }
}

impl StatusCatalog for StatusRegistry {
    fn status(&self, name: &str) -> Option<StatusDefinition> {
        self.statuses.get(name).cloned()
    }

    fn all_statuses(&self) -> Vec<StatusDefinition> {
        self.statuses.values().cloned().collect()
    }
}
