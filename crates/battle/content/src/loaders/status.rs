//! Status effect catalog loader.

use std::path::Path;

use battle_core::StatusDefinition;
use serde::{Deserialize, Serialize};

use super::{LoadResult, read_file};

/// Status catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusManifest {
    pub statuses: Vec<StatusDefinition>,
}

/// Loader for status effect catalogs from RON files.
pub struct StatusLoader;

impl StatusLoader {
    /// Load a status catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<StatusDefinition>> {
        Self::parse(&read_file(path)?)
    }

    /// Parse a status catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<StatusDefinition>> {
        let manifest: StatusManifest = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse status catalog RON: {}", e))?;

        Ok(manifest.statuses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_status_catalog() {
        let statuses = StatusLoader::parse(
            r#"(
                statuses: [
                    (
                        name: "Poison",
                        verb: "is poisoned!",
                        recover_verb: "shakes off the poison.",
                        prevents_action: false,
                        tick: ( damage_percent: 10, recover_chance: 0 ),
                    ),
                    (
                        name: "Sleep",
                        verb: "falls asleep!",
                        recover_verb: "wakes up.",
                        prevents_action: true,
                        tick: ( damage_percent: 0, recover_chance: 50 ),
                    ),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(statuses.len(), 2);
        assert_eq!(statuses[0].tick.damage_percent, 10);
        assert!(statuses[1].prevents_action);
    }
}
