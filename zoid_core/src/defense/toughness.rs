//! Toughness - Hull resistance roll and hit severity tiers
//!
//! The defender rolls `d20 + toughness - dents` against `damage + 15`.
//! Every dent already taken makes the next roll harder. The margin of
//! failure picks the severity:
//!
//! | margin        | severity | dents | status   |
//! |---------------|----------|-------|----------|
//! | <= 0          | absorbed | 0     | -        |
//! | 1 ..= 4       | minor    | 1     | -        |
//! | 5 ..= 9       | moderate | 1     | dazed    |
//! | 10 ..= 14     | heavy    | 1     | stunned  |
//! | >= 15         | critical | 1     | defeated |

use crate::combatant::Combatant;
use crate::config::AttackConstants;
use crate::dice::Dice;
use crate::types::Status;
use serde::{Deserialize, Serialize};

/// How badly a hit got through the hull
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitSeverity {
    Absorbed,
    Minor,
    Moderate,
    Heavy,
    Critical,
}

impl HitSeverity {
    /// Classify a failure margin (`damage + offset - toughness roll`)
    pub fn classify(margin: i32, tier_width: i32) -> Self {
        if margin <= 0 {
            HitSeverity::Absorbed
        } else if margin < tier_width {
            HitSeverity::Minor
        } else if margin < tier_width * 2 {
            HitSeverity::Moderate
        } else if margin < tier_width * 3 {
            HitSeverity::Heavy
        } else {
            HitSeverity::Critical
        }
    }

    /// Dents this severity adds (never more than one)
    pub fn dents(self) -> u32 {
        match self {
            HitSeverity::Absorbed => 0,
            _ => 1,
        }
    }

    /// Status the defender is forced into, if any
    pub fn inflicted_status(self) -> Option<Status> {
        match self {
            HitSeverity::Absorbed | HitSeverity::Minor => None,
            HitSeverity::Moderate => Some(Status::Dazed),
            HitSeverity::Heavy => Some(Status::Stunned),
            HitSeverity::Critical => Some(Status::Defeated),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HitSeverity::Absorbed => "absorbed",
            HitSeverity::Minor => "minor",
            HitSeverity::Moderate => "moderate",
            HitSeverity::Heavy => "heavy",
            HitSeverity::Critical => "critical",
        }
    }
}

/// Result of a toughness check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToughnessCheck {
    /// Natural d20
    pub roll: i32,
    /// Roll + toughness - dents
    pub total: i32,
    /// damage + offset
    pub target: i32,
    /// target - total
    pub margin: i32,
    pub severity: HitSeverity,
}

/// Roll the defender's toughness against a hit of `damage`
///
/// Only rolls; applying dents and status is the caller's job.
pub fn toughness_check(
    defender: &Combatant,
    damage: i32,
    rules: &AttackConstants,
    dice: &mut impl Dice,
) -> ToughnessCheck {
    let roll = dice.d20();
    let dents = i32::try_from(defender.dents).unwrap_or(i32::MAX);
    let total = (roll + defender.defenses.toughness).saturating_sub(dents);
    let target = damage + rules.damage_offset;
    let margin = target.saturating_sub(total);
    ToughnessCheck {
        roll,
        total,
        target,
        margin,
        severity: HitSeverity::classify(margin, rules.tier_width),
    }
}
