//! Spell catalog loader.

use std::path::Path;

use battle_core::SpellDefinition;
use serde::{Deserialize, Serialize};

use super::{LoadResult, read_file};

/// Spell catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpellManifest {
    pub spells: Vec<SpellDefinition>,
}

/// Loader for spell catalogs from RON files.
pub struct SpellLoader;

impl SpellLoader {
    /// Load a spell catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<SpellDefinition>> {
        Self::parse(&read_file(path)?)
    }

    /// Parse a spell catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<SpellDefinition>> {
        let manifest: SpellManifest = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse spell catalog RON: {}", e))?;

        Ok(manifest.spells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::{Element, SpellKinds, SpellTarget};

    #[test]
    fn parses_a_spell_catalog() {
        let spells = SpellLoader::parse(
            r#"(
                spells: [
                    (
                        name: "Fire",
                        mp_cost: 4,
                        power: 30,
                        target: SingleEnemy,
                        kinds: "DAMAGE",
                        status_effects: {},
                        buff_attributes: [],
                        element: Fire,
                    ),
                    (
                        name: "Venom",
                        mp_cost: 6,
                        power: 15,
                        target: SingleEnemy,
                        kinds: "DAMAGE | CAUSE_STATUS",
                        status_effects: { "Poison": 60 },
                        buff_attributes: [],
                        element: Neutral,
                    ),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(spells.len(), 2);
        assert_eq!(spells[0].name, "Fire");
        assert_eq!(spells[0].element, Element::Fire);
        assert_eq!(spells[0].target, SpellTarget::SingleEnemy);
        assert!(spells[1].kinds.contains(SpellKinds::CAUSE_STATUS));
        assert_eq!(spells[1].status_effects.get("Poison"), Some(&60));
    }

    #[test]
    fn malformed_ron_is_a_load_error() {
        assert!(SpellLoader::parse("(spells: [oops").is_err());
    }
}
