//! Status lattice - Escalation by damage, decay by turn, per-turn action gates
//!
//! ```text
//!   Intact --hit--> Dazed / Stunned / Defeated
//!   Stunned --turn--> Dazed --turn--> Intact
//!   Defeated is absorbing
//! ```
//!
//! Decay keys off the status a combatant *started* its turn with, so a
//! condition inflicted mid-turn is never decayed in that same turn.

use crate::types::Status;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status after a hit that inflicts `inflicted`
///
/// The inflicted value replaces the current one, whatever it was, except
/// that nothing leaves `Defeated`. A hit that inflicts nothing leaves the
/// status unchanged.
pub fn escalate(current: Status, inflicted: Option<Status>) -> Status {
    if current == Status::Defeated {
        return Status::Defeated;
    }
    inflicted.unwrap_or(current)
}

/// Status after a completed turn
///
/// `prior` is what the combatant entered the turn with, `current` what it
/// has now.
pub fn decay(prior: Status, current: Status) -> Status {
    if current == Status::Defeated {
        return Status::Defeated;
    }
    match prior {
        Status::Stunned => Status::Dazed,
        Status::Dazed => Status::Intact,
        _ => current,
    }
}

/// Why an action was refused this turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateRefusal {
    Stunned,
    /// Dazed and already moved this turn
    DazedAfterMove,
    /// Dazed and already attacked this turn
    DazedAfterAttack,
    Defeated,
}

impl fmt::Display for GateRefusal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            GateRefusal::Stunned => "is STUNNED and cannot move or attack this turn",
            GateRefusal::DazedAfterMove => "is DAZED and already moved this turn",
            GateRefusal::DazedAfterAttack => "is DAZED and already attacked this turn",
            GateRefusal::Defeated => "is defeated",
        };
        f.write_str(reason)
    }
}

/// Tracks what a combatant has done this turn against what its status allows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionGate {
    status: Status,
    moved: bool,
    attacked: bool,
}

impl ActionGate {
    /// Gate for a turn entered with `status`
    pub fn new(status: Status) -> Self {
        ActionGate {
            status,
            moved: false,
            attacked: false,
        }
    }

    pub fn check_move(&self) -> Result<(), GateRefusal> {
        match self.status {
            Status::Defeated => Err(GateRefusal::Defeated),
            Status::Stunned => Err(GateRefusal::Stunned),
            Status::Dazed if self.attacked => Err(GateRefusal::DazedAfterAttack),
            _ => Ok(()),
        }
    }

    pub fn check_attack(&self) -> Result<(), GateRefusal> {
        match self.status {
            Status::Defeated => Err(GateRefusal::Defeated),
            Status::Stunned => Err(GateRefusal::Stunned),
            Status::Dazed if self.moved => Err(GateRefusal::DazedAfterMove),
            _ => Ok(()),
        }
    }

    pub fn record_move(&mut self) {
        self.moved = true;
    }

    pub fn record_attack(&mut self) {
        self.attacked = true;
    }

    pub fn moved(&self) -> bool {
        self.moved
    }

    pub fn attacked(&self) -> bool {
        self.attacked
    }
}
