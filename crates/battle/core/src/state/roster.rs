//! The session-owned container of battle participants.

use bounded_vector::BoundedVec;

use crate::config::BattleConfig;

use super::combatant::{Combatant, CombatantId, Side};

/// A roster could not be assembled.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("the {0} side has no combatants")]
    EmptySide(Side),

    #[error("too many combatants on the {0} side")]
    SideFull(Side),
}

/// All combatants in one battle, players before monsters.
///
/// The roster assigns ids on construction; registration order is the
/// scheduler tie-break, so it is part of battle semantics, not an
/// implementation detail.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    players: BoundedVec<Combatant, 0, { BattleConfig::MAX_PARTY }>,
    monsters: BoundedVec<Combatant, 0, { BattleConfig::MAX_TROOP }>,
}

impl Roster {
    /// Builds a roster, assigning sequential ids (players first).
    ///
    /// # Errors
    ///
    /// Returns [`RosterError`] when either side is empty or over capacity.
    pub fn new(players: Vec<Combatant>, monsters: Vec<Combatant>) -> Result<Self, RosterError> {
        if players.is_empty() {
            return Err(RosterError::EmptySide(Side::Party));
        }
        if monsters.is_empty() {
            return Err(RosterError::EmptySide(Side::Troop));
        }

        let mut roster = Roster::default();
        let mut next_id = 0u32;

        for mut combatant in players {
            combatant.id = CombatantId(next_id);
            combatant.side = Side::Party;
            next_id += 1;
            roster
                .players
                .push(combatant)
                .map_err(|_| RosterError::SideFull(Side::Party))?;
        }

        for mut combatant in monsters {
            combatant.id = CombatantId(next_id);
            combatant.side = Side::Troop;
            next_id += 1;
            roster
                .monsters
                .push(combatant)
                .map_err(|_| RosterError::SideFull(Side::Troop))?;
        }

        Ok(roster)
    }

    /// Returns a combatant by id.
    pub fn combatant(&self, id: CombatantId) -> Option<&Combatant> {
        self.all().find(|combatant| combatant.id == id)
    }

    /// Returns a mutable combatant by id.
    pub fn combatant_mut(&mut self, id: CombatantId) -> Option<&mut Combatant> {
        self.players
            .iter_mut()
            .chain(self.monsters.iter_mut())
            .find(|combatant| combatant.id == id)
    }

    /// All combatants in registration order (players, then monsters).
    pub fn all(&self) -> impl Iterator<Item = &Combatant> {
        self.players.iter().chain(self.monsters.iter())
    }

    pub fn players(&self) -> impl Iterator<Item = &Combatant> {
        self.players.iter()
    }

    pub fn monsters(&self) -> impl Iterator<Item = &Combatant> {
        self.monsters.iter()
    }

    /// Living combatants on one side, in registration order.
    pub fn living_on(&self, side: Side) -> impl Iterator<Item = &Combatant> {
        self.all()
            .filter(move |combatant| combatant.side == side && combatant.is_alive())
    }

    /// Living opponents of the given side.
    pub fn living_opponents_of(&self, side: Side) -> impl Iterator<Item = &Combatant> {
        self.living_on(side.opponent())
    }

    pub fn all_players_defeated(&self) -> bool {
        self.players.iter().all(|combatant| !combatant.is_alive())
    }

    pub fn all_monsters_defeated(&self) -> bool {
        self.monsters.iter().all(|combatant| !combatant.is_alive())
    }

    /// Clears every guard flag; called when a round ends.
    pub fn clear_guards(&mut self) {
        for combatant in self
            .players
            .iter_mut()
            .chain(self.monsters.iter_mut())
        {
            combatant.guarding = false;
        }
    }
}
