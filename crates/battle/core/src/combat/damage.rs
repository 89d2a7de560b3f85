//! Damage and healing magnitude calculation.
//!
//! All three entry points are pure given their inputs plus at most one
//! variance draw, and all arithmetic is integer-only: every division
//! truncates toward zero at its own step, so results are bit-for-bit
//! reproducible (no floating point anywhere).
//!
//! # Formula
//!
//! ```text
//! base   = (((2 * level / 5 + 2) * str * pow / def) / 50) + 2
//! damage = base * stab * type_percent / 100 * (85 + draw) / 100
//! ```
//!
//! where `draw` is one uniform `[0, 16)` draw and `type_percent` is the
//! elemental resistance multiplier (100 = neutral). Healing is expressed as
//! negative damage.

use crate::catalog::{ItemDefinition, ItemUse, SpellDefinition};
use crate::config::BattleConfig;
use crate::rng::BattleRng;
use crate::state::Combatant;

/// Same-type attack bonus. Present in the formula but fixed at neutral; a
/// future type chart would make this live.
const STAB: i32 = 1;

/// Type multiplier for physical hits, which have no element.
const TYPE_NEUTRAL: i32 = 100;

/// Shared scaling formula. `type_percent` is a percent multiplier and
/// `variance` the already-rolled `85 + [0, 16)` term.
fn scaling_damage(
    level: i32,
    str_: i32,
    pow: i32,
    def: i32,
    type_percent: i32,
    variance: i32,
) -> i32 {
    // Defense is the divisor; never let it reach zero.
    let def = def.max(1);
    let base = ((2 * level / 5 + 2) * str_ * pow / def) / 50 + 2;
    base * STAB * type_percent / 100 * variance / 100
}

/// Rolls the `85 + [0, 16)` variance term, consuming exactly one draw.
fn variance_roll(rng: &mut dyn BattleRng) -> i32 {
    (BattleConfig::VARIANCE_BASE + rng.below(BattleConfig::VARIANCE_SPREAD)) as i32
}

/// Physical damage from an ordinary attack.
///
/// Inputs: attacker's strength and power against the target's defense.
/// Consumes one variance draw.
pub fn physical_damage(attacker: &Combatant, target: &Combatant, rng: &mut dyn BattleRng) -> i32 {
    scaling_damage(
        attacker.attributes.level.value(),
        attacker.attributes.strength.value(),
        attacker.attributes.power.value(),
        target.attributes.defense.value(),
        TYPE_NEUTRAL,
        variance_roll(rng),
    )
}

/// Magical damage (or healing, as a negative magnitude) from a spell.
///
/// Inputs: caster's magic and the spell's power against the target's magic
/// defense, scaled by the target's resistance to the spell's element.
/// Consumes one variance draw.
pub fn magical_damage(
    caster: &Combatant,
    target: &Combatant,
    spell: &SpellDefinition,
    rng: &mut dyn BattleRng,
) -> i32 {
    let damage = scaling_damage(
        caster.attributes.level.value(),
        caster.attributes.magic.value(),
        spell.power,
        target.attributes.magic_defense.value(),
        target.resistance(spell.element) as i32,
        variance_roll(rng),
    );

    if spell.is_heal() { -damage } else { damage }
}

/// Damage or restoration from using an item.
///
/// Scaling variants substitute the item's strength/power for the user's
/// attributes and consume one variance draw; fixed variants consume none.
/// An uninterpreted item resolves to zero effect.
pub fn item_damage(
    user: &Combatant,
    target: &Combatant,
    item: &ItemDefinition,
    rng: &mut dyn BattleRng,
) -> i32 {
    match item.use_kind {
        ItemUse::HealFixed { hp } => -(hp as i32),
        ItemUse::HealScaling { strength, power } => -scaling_damage(
            user.attributes.level.value(),
            strength,
            power,
            target.attributes.defense.value(),
            TYPE_NEUTRAL,
            variance_roll(rng),
        ),
        ItemUse::DamageScaling { strength, power } => scaling_damage(
            user.attributes.level.value(),
            strength,
            power,
            target.attributes.defense.value(),
            TYPE_NEUTRAL,
            variance_roll(rng),
        ),
        ItemUse::RestoreMpFixed { mp } => -(mp as i32),
        ItemUse::Custom(_) => 0,
    }
}
