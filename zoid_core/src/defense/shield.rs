//! Energy shield - Frontal arc test and the shield check
//!
//! A shield only covers a cone in front of its bearer. An attack from inside
//! the cone never reaches the toughness roll: the shield absorbs it, and a
//! strong enough hit knocks the shield out for the rest of the battle.

use crate::combatant::Combatant;
use crate::config::AttackConstants;
use crate::dice::Dice;
use serde::{Deserialize, Serialize};

/// Angle between two facings, folded into [0, 180]
pub fn relative_bearing(attacker_angle: f64, defender_angle: f64) -> f64 {
    let rel = (attacker_angle - defender_angle).rem_euclid(360.0);
    if rel > 180.0 {
        360.0 - rel
    } else {
        rel
    }
}

/// Whether the attacker stands inside the defender's shield cone
pub fn in_shield_arc(attacker: &Combatant, defender: &Combatant, rules: &AttackConstants) -> bool {
    relative_bearing(attacker.angle, defender.angle) <= rules.shield_arc_degrees
}

/// Whether an active shield takes this attack instead of the hull
pub fn shield_intercepts(attacker: &Combatant, defender: &Combatant, rules: &AttackConstants) -> bool {
    defender.shield_active() && in_shield_arc(attacker, defender, rules)
}

/// Result of a shield check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShieldCheck {
    /// Natural d20
    pub roll: i32,
    /// Roll plus shield rank
    pub total: i32,
    /// damage + offset
    pub target: i32,
    /// The shield was knocked out
    pub disabled: bool,
}

/// Roll `d20 + shield rank` against `damage + offset`
///
/// Meeting the target disables the shield. Either way the attack is absorbed.
pub fn shield_check(
    defender: &mut Combatant,
    damage: i32,
    rules: &AttackConstants,
    dice: &mut impl Dice,
) -> ShieldCheck {
    let roll = dice.d20();
    let total = roll + defender.shield_rank;
    let target = damage + rules.damage_offset;
    let disabled = total >= target;
    if disabled {
        defender.disable_shield();
    }
    ShieldCheck {
        roll,
        total,
        target,
        disabled,
    }
}
