//! Combat attributes and resource meters.
//!
//! Attributes are the formula inputs (strength, defense, speed, ...). Each
//! tracks a `max` baseline and a `current` working value: buffs rescale
//! `current` from `max`, so a combatant can temporarily sit above or below
//! its baseline. Hp/mp are different: they are [`ResourceMeter`]s whose
//! current value is always clamped to `0..=max`.

use std::fmt;

/// Named combat attributes that formulas and buffs can reference.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AttributeKind {
    Level,
    Strength,
    Power,
    Magic,
    Defense,
    MagicDefense,
    Speed,
}

/// One attribute: a baseline `max` and the buffable `current` value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attribute {
    pub current: i32,
    pub max: i32,
}

impl Attribute {
    /// Creates an attribute at its baseline.
    pub const fn new(value: i32) -> Self {
        Self {
            current: value,
            max: value,
        }
    }

    /// The value formulas read.
    #[inline]
    pub const fn value(&self) -> i32 {
        self.current
    }

    /// Resets the working value to the baseline (end-of-battle cleanup).
    pub fn reset(&mut self) {
        self.current = self.max;
    }
}

/// The full attribute block of a combatant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeSet {
    pub level: Attribute,
    pub strength: Attribute,
    pub power: Attribute,
    pub magic: Attribute,
    pub defense: Attribute,
    pub magic_defense: Attribute,
    pub speed: Attribute,
}

impl AttributeSet {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        level: i32,
        strength: i32,
        power: i32,
        magic: i32,
        defense: i32,
        magic_defense: i32,
        speed: i32,
    ) -> Self {
        Self {
            level: Attribute::new(level),
            strength: Attribute::new(strength),
            power: Attribute::new(power),
            magic: Attribute::new(magic),
            defense: Attribute::new(defense),
            magic_defense: Attribute::new(magic_defense),
            speed: Attribute::new(speed),
        }
    }

    pub fn get(&self, kind: AttributeKind) -> &Attribute {
        match kind {
            AttributeKind::Level => &self.level,
            AttributeKind::Strength => &self.strength,
            AttributeKind::Power => &self.power,
            AttributeKind::Magic => &self.magic,
            AttributeKind::Defense => &self.defense,
            AttributeKind::MagicDefense => &self.magic_defense,
            AttributeKind::Speed => &self.speed,
        }
    }

    pub fn get_mut(&mut self, kind: AttributeKind) -> &mut Attribute {
        match kind {
            AttributeKind::Level => &mut self.level,
            AttributeKind::Strength => &mut self.strength,
            AttributeKind::Power => &mut self.power,
            AttributeKind::Magic => &mut self.magic,
            AttributeKind::Defense => &mut self.defense,
            AttributeKind::MagicDefense => &mut self.magic_defense,
            AttributeKind::Speed => &mut self.speed,
        }
    }
}

/// Integer resource meter (hp, mp) with `current` clamped to `0..=max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    current: u32,
    max: u32,
}

impl ResourceMeter {
    /// Creates a full meter.
    pub const fn full(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn new(current: u32, max: u32) -> Self {
        Self {
            current: current.min(max),
            max,
        }
    }

    #[inline]
    pub const fn current(&self) -> u32 {
        self.current
    }

    #[inline]
    pub const fn max(&self) -> u32 {
        self.max
    }

    #[inline]
    pub const fn is_depleted(&self) -> bool {
        self.current == 0
    }

    /// Applies signed damage (negative heals) and returns the actual change
    /// to `current`; healing past the ceiling and overkill are both clamped.
    pub fn apply_damage(&mut self, damage: i32) -> i32 {
        let before = self.current as i64;
        let after = (before - damage as i64).clamp(0, self.max as i64);
        self.current = after as u32;
        (after - before) as i32
    }

    /// Deducts `cost` if available. Returns false (and leaves the meter
    /// untouched) when the balance is insufficient.
    pub fn spend(&mut self, cost: u32) -> bool {
        if cost > self.current {
            return false;
        }
        self.current -= cost;
        true
    }

    /// Restores up to `amount`, clamped at the ceiling; returns the amount
    /// actually restored.
    pub fn restore(&mut self, amount: u32) -> u32 {
        let restored = amount.min(self.max - self.current);
        self.current += restored;
        restored
    }
}

impl fmt::Display for ResourceMeter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.current, self.max)
    }
}
