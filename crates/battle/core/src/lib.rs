//! Deterministic turn-based battle engine.
//!
//! `battle-core` defines the canonical battle rules (actions, damage and
//! status formulas, turn scheduling, the battle state machine) and exposes
//! pure APIs the surrounding menu/rendering layer drives one tick at a time.
//! All state mutation flows through [`engine::BattleSession`]; content is
//! consumed through read-only [`catalog`] traits, and every random outcome
//! comes from one seedable [`rng`] stream so battles replay exactly.
pub mod action;
pub mod catalog;
pub mod combat;
pub mod config;
pub mod engine;
pub mod events;
pub mod rng;
pub mod state;

pub use action::{BattleAction, BattleActionKind, ResolutionOutcome, can_cast_spell, resolve_action};
pub use catalog::{
    CatalogError, Catalogs, Element, ItemCatalog, ItemDefinition, ItemRegistry, ItemUse,
    SpellCatalog, SpellDefinition, SpellKinds, SpellRegistry, SpellTarget, StatusCatalog,
    StatusDefinition, StatusRegistry, StatusTick,
};
pub use combat::{TargetSpec, item_damage, magical_damage, physical_damage, resolve_targets};
pub use config::BattleConfig;
pub use engine::{ActionRejected, BattleOutcome, BattleSession, BattleState};
pub use events::BattleEvent;
pub use rng::{BattleRng, PcgRng, SequenceRng};
pub use state::{
    Attribute, AttributeKind, AttributeSet, Combatant, CombatantId, ResourceMeter, Reward, Roster,
    RosterError, Side,
};
