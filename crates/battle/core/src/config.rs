/// Battle configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleConfig {
    /// Percent chance in `[0, 100]` that a flee attempt succeeds, rolled once
    /// per attempt. Only consulted when the session permits escaping.
    pub escape_chance: u32,
}

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of player-side combatants in one battle.
    pub const MAX_PARTY: usize = 4;
    /// Maximum number of monster-side combatants in one battle.
    pub const MAX_TROOP: usize = 8;
    /// Maximum combatants overall (party + troop), sizing the round order.
    pub const MAX_COMBATANTS: usize = Self::MAX_PARTY + Self::MAX_TROOP;

    // ===== damage formula constants =====
    /// Variance floor: every scaling damage roll is at least 85% of base.
    pub const VARIANCE_BASE: u32 = 85;
    /// Variance spread: one `[0, VARIANCE_SPREAD)` draw per scaling roll.
    pub const VARIANCE_SPREAD: u32 = 16;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ESCAPE_CHANCE: u32 = 50;

    pub fn new() -> Self {
        Self {
            escape_chance: Self::DEFAULT_ESCAPE_CHANCE,
        }
    }

    pub fn with_escape_chance(escape_chance: u32) -> Self {
        Self { escape_chance }
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
