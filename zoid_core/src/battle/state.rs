//! Battle state, setup and per-turn reports

use crate::combat::AttackOutcome;
use crate::types::{Side, Status, Terrain};
use serde::{Deserialize, Serialize};

/// Shared battle state visible to both sides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleState {
    pub terrain: Terrain,
    /// Distance between the combatants in meters, never negative
    pub distance: f64,
    /// Completed turns
    pub turn: u32,
    /// Side two is piloted by the AI
    pub ai_mode: bool,
    /// Side whose turn is next
    pub active: Side,
}

/// Parameters for a new battle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleSetup {
    pub terrain: Terrain,
    pub distance: f64,
    #[serde(default)]
    pub ai_mode: bool,
    /// End in a draw after this many turns
    #[serde(default)]
    pub max_turns: Option<u32>,
}

impl BattleSetup {
    pub fn new(terrain: Terrain, distance: f64) -> Self {
        BattleSetup {
            terrain,
            distance,
            ai_mode: false,
            max_turns: None,
        }
    }

    pub fn with_ai_mode(mut self, ai_mode: bool) -> Self {
        self.ai_mode = ai_mode;
        self
    }

    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = Some(max_turns);
        self
    }
}

/// What happened during one turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnReport {
    /// 1-based number of this turn
    pub turn: u32,
    pub active: Side,
    pub prior_status: Status,
    /// Status after decay
    pub status_after: Status,
    pub distance_before: f64,
    pub distance_after: f64,
    /// Whether the active side could see its enemy when the turn ended
    pub enemy_detected: bool,
    pub attack: Option<AttackOutcome>,
}

impl TurnReport {
    pub fn summary(&self) -> String {
        let mut parts = vec![format!("Turn {}: player {}", self.turn, self.active.number())];
        if (self.distance_after - self.distance_before).abs() > f64::EPSILON {
            parts.push(format!(
                "{:.1}m -> {:.1}m",
                self.distance_before, self.distance_after
            ));
        }
        if let Some(attack) = &self.attack {
            parts.push(attack.summary());
        }
        if self.status_after != self.prior_status {
            parts.push(format!("{} -> {}", self.prior_status, self.status_after));
        }
        parts.join(", ")
    }
}

/// Final result of a battle
///
/// Captured before both combatants return to their base state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleOutcome {
    /// `None` when the turn limit ran out
    pub winner: Option<Side>,
    pub winner_name: Option<String>,
    pub turns: u32,
    pub final_distance: f64,
    /// Dents per side, indexed by `Side::index`
    pub dents: [u32; 2],
    pub statuses: [Status; 2],
}

impl BattleOutcome {
    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }

    pub fn summary(&self) -> String {
        match &self.winner_name {
            Some(name) => format!("{} wins after {} turns", name, self.turns),
            None => format!("Draw after {} turns", self.turns),
        }
    }
}
