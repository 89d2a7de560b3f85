//! Read-only battle content consumed as already-parsed records.
//!
//! Catalogs expose spell, item, and status definitions behind lookup traits
//! so the engine never couples to a data format. The [`Catalogs`] aggregate
//! bundles shared handles and is passed to the session at construction;
//! there is no process-wide registry state.

mod items;
mod registry;
mod spells;
mod status;

use std::sync::Arc;

pub use items::{ItemCatalog, ItemDefinition, ItemUse};
pub use registry::{ItemRegistry, SpellRegistry, StatusRegistry};
pub use spells::{Element, SpellCatalog, SpellDefinition, SpellKinds, SpellTarget};
pub use status::{StatusCatalog, StatusDefinition, StatusTick};

/// A failed catalog lookup.
///
/// Lookup failures are never fatal during battle: the resolver logs them and
/// degrades the action to "no effect".
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("unknown spell '{0}'")]
    UnknownSpell(String),

    #[error("unknown item '{0}'")]
    UnknownItem(String),

    #[error("unknown status effect '{0}'")]
    UnknownStatus(String),
}

/// Aggregates the read-only catalogs a battle session needs.
///
/// Handles are shared (`Arc`) so one loaded content set can feed any number
/// of concurrent sessions.
#[derive(Clone)]
pub struct Catalogs {
    spells: Arc<dyn SpellCatalog>,
    items: Arc<dyn ItemCatalog>,
    statuses: Arc<dyn StatusCatalog>,
}

impl Catalogs {
    pub fn new(
        spells: Arc<dyn SpellCatalog>,
        items: Arc<dyn ItemCatalog>,
        statuses: Arc<dyn StatusCatalog>,
    ) -> Self {
        Self {
            spells,
            items,
            statuses,
        }
    }

    /// Looks up a spell definition by name.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownSpell`] if no such spell exists.
    pub fn spell(&self, name: &str) -> Result<SpellDefinition, CatalogError> {
        self.spells
            .spell(name)
            .ok_or_else(|| CatalogError::UnknownSpell(name.to_string()))
    }

    /// Looks up an item definition by name.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownItem`] if no such item exists.
    pub fn item(&self, name: &str) -> Result<ItemDefinition, CatalogError> {
        self.items
            .item(name)
            .ok_or_else(|| CatalogError::UnknownItem(name.to_string()))
    }

    /// Looks up a status definition by name.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownStatus`] if no such status exists.
    pub fn status(&self, name: &str) -> Result<StatusDefinition, CatalogError> {
        self.statuses
            .status(name)
            .ok_or_else(|| CatalogError::UnknownStatus(name.to_string()))
    }
}

impl std::fmt::Debug for Catalogs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalogs").finish_non_exhaustive()
    }
}
