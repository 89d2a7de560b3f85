//! Content loaders for reading battle data from RON files.
//!
//! Each catalog lives in its own file (`spells.ron`, `items.ron`,
//! `statuses.ron`); [`load_catalogs`] assembles a complete [`Catalogs`]
//! bundle from a content directory.

mod items;
mod spells;
mod status;

pub use items::{ItemLoader, ItemManifest};
pub use spells::{SpellLoader, SpellManifest};
pub use status::{StatusLoader, StatusManifest};

use std::path::Path;
use std::sync::Arc;

use battle_core::{Catalogs, ItemRegistry, SpellRegistry, StatusRegistry};

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Loads all three catalogs from a content directory.
///
/// Expects `spells.ron`, `items.ron`, and `statuses.ron` inside `dir`.
pub fn load_catalogs(dir: &Path) -> LoadResult<Catalogs> {
    let spells = SpellLoader::load(&dir.join("spells.ron"))?;
    let items = ItemLoader::load(&dir.join("items.ron"))?;
    let statuses = StatusLoader::load(&dir.join("statuses.ron"))?;

    Ok(Catalogs::new(
        Arc::new(SpellRegistry::new(spells)),
        Arc::new(ItemRegistry::new(items)),
        Arc::new(StatusRegistry::new(statuses)),
    ))
}
