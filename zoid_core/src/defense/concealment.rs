//! Concealment - Detection checks and the flat miss chance against hidden targets

use crate::combatant::Combatant;
use crate::config::DetectionConstants;
use crate::dice::Dice;
use serde::{Deserialize, Serialize};

/// Result of a search (detection) check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionCheck {
    /// Natural d20
    pub roll: i32,
    /// Roll plus the searcher's awareness
    pub total: i32,
    pub dc: i32,
    pub detected: bool,
}

/// DC to spot the target: base + stealth rank while concealed, otherwise 0
pub fn detection_dc(target: &Combatant, rules: &DetectionConstants) -> i32 {
    if target.stealth_active() {
        rules.stealth_base_dc + target.stealth_rank
    } else {
        0
    }
}

/// Roll `d20 + awareness` against the target's detection DC
pub fn detect(
    searcher: &Combatant,
    target: &Combatant,
    rules: &DetectionConstants,
    dice: &mut impl Dice,
) -> DetectionCheck {
    let roll = dice.d20();
    let total = roll + searcher.stats.awareness;
    let dc = detection_dc(target, rules);
    DetectionCheck {
        roll,
        total,
        dc,
        detected: total >= dc,
    }
}

/// Detection as used at turn start and after searching
///
/// A target that is not concealed is always seen and no die is rolled.
pub fn spot(
    searcher: &Combatant,
    target: &Combatant,
    rules: &DetectionConstants,
    dice: &mut impl Dice,
) -> Option<DetectionCheck> {
    if target.stealth_active() {
        Some(detect(searcher, target, rules, dice))
    } else {
        None
    }
}

/// What concealment did to an incoming attack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConcealmentGate {
    /// Defender not concealed, or already detected
    Open,
    /// Defender hidden but the coin came up in the attacker's favor
    Pierced,
    /// Attack struck the target's last known location
    Missed,
}

impl ConcealmentGate {
    pub fn blocks_attack(self) -> bool {
        self == ConcealmentGate::Missed
    }
}

/// Flat 50% miss chance against an undetected, concealed defender
pub fn concealment_gate(
    defender: &Combatant,
    defender_detected: bool,
    dice: &mut impl Dice,
) -> ConcealmentGate {
    if !defender.stealth_active() || defender_detected {
        return ConcealmentGate::Open;
    }
    if dice.coin_flip() {
        ConcealmentGate::Pierced
    } else {
        ConcealmentGate::Missed
    }
}
