//! Intent - One combatant's ordered plan for a single turn

use crate::movement::Maneuver;
use serde::{Deserialize, Serialize};

/// Kind of action within an intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Move,
    Attack,
    ToggleShield,
    ToggleStealth,
}

/// Ordered actions plus the movement they refer to
///
/// Actions run in list order; `Move` carries out `maneuver`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Intent {
    pub actions: Vec<Action>,
    #[serde(default)]
    pub maneuver: Maneuver,
}

impl Intent {
    /// An intent that does nothing
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then_move(mut self, maneuver: Maneuver) -> Self {
        self.actions.push(Action::Move);
        self.maneuver = maneuver;
        self
    }

    pub fn then_attack(mut self) -> Self {
        self.actions.push(Action::Attack);
        self
    }

    pub fn then_toggle_shield(mut self) -> Self {
        self.actions.push(Action::ToggleShield);
        self
    }

    pub fn then_toggle_stealth(mut self) -> Self {
        self.actions.push(Action::ToggleStealth);
        self
    }

    pub fn requests_attack(&self) -> bool {
        self.actions.contains(&Action::Attack)
    }

    pub fn requests_move(&self) -> bool {
        self.actions.contains(&Action::Move)
    }

    pub fn toggles_shield(&self) -> bool {
        self.actions.contains(&Action::ToggleShield)
    }

    pub fn toggles_stealth(&self) -> bool {
        self.actions.contains(&Action::ToggleStealth)
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
