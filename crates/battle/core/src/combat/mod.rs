//! Combat mechanics: damage formulas, status processing, and targeting.

pub mod damage;
pub mod status;
pub mod targeting;

pub use damage::{item_damage, magical_damage, physical_damage};
pub use status::{afflict, buff, cure, process_round_end};
pub use targeting::{TargetSpec, resolve_targets};
