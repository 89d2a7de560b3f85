//! Status effect definitions and the status catalog trait.

/// Immutable definition of a status condition.
///
/// The engine stores only the status *name* on an afflicted combatant; all
/// behavior comes from this catalog entry, so content can add conditions
/// without engine changes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusDefinition {
    pub name: String,

    /// Affliction log line, appended after the victim's name
    /// ("is poisoned!").
    pub verb: String,

    /// Recovery log line, appended after the name ("shakes off the poison.").
    pub recover_verb: String,

    /// The holder's turn is skipped while this status is active.
    pub prevents_action: bool,

    /// End-of-round behavior.
    pub tick: StatusTick,
}

impl StatusDefinition {
    pub fn new(
        name: impl Into<String>,
        verb: impl Into<String>,
        recover_verb: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            verb: verb.into(),
            recover_verb: recover_verb.into(),
            prevents_action: false,
            tick: StatusTick::default(),
        }
    }

    pub fn with_prevents_action(mut self) -> Self {
        self.prevents_action = true;
        self
    }

    pub fn with_tick(mut self, tick: StatusTick) -> Self {
        self.tick = tick;
        self
    }
}

/// Passive behavior applied once per round to every living holder.
///
/// Draw accounting: the recovery roll consumes one `[0, 100)` draw, and only
/// when `recover_chance` is nonzero; the damage tick consumes none.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusTick {
    /// Damage-over-time: this percent of max hp (at least 1 when nonzero)
    /// is lost at the end of each round.
    pub damage_percent: u32,

    /// Percent chance to spontaneously recover at the end of each round.
    pub recover_chance: u32,
}

impl StatusTick {
    pub fn damage(percent: u32) -> Self {
        Self {
            damage_percent: percent,
            recover_chance: 0,
        }
    }

    pub fn recover(chance: u32) -> Self {
        Self {
            damage_percent: 0,
            recover_chance: chance,
        }
    }

    pub fn new(damage_percent: u32, recover_chance: u32) -> Self {
        Self {
            damage_percent,
            recover_chance,
        }
    }
}

/// Read-only lookup of status definitions by name.
pub trait StatusCatalog: Send + Sync {
    fn status(&self, name: &str) -> Option<StatusDefinition>;

    /// All definitions, for content validation.
    fn all_statuses(&self) -> Vec<StatusDefinition>;
}
