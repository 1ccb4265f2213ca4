//! AttackOutcome - Outcome of attack resolution

use crate::defense::{ConcealmentGate, HitSeverity, ShieldCheck, ToughnessCheck};
use crate::types::{RangeBand, Status};
use serde::{Deserialize, Serialize};

/// Attack roll against the defender's defense target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackRoll {
    /// Natural d20
    pub roll: i32,
    /// Roll plus accuracy bonus
    pub total: i32,
    /// Defense base plus parry or dodge
    pub defense_target: i32,
}

impl AttackRoll {
    pub fn hit(&self) -> bool {
        self.total >= self.defense_target
    }
}

/// How the attack was finally settled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// Struck the last known location of a hidden target; no roll made
    ConcealedMiss,
    /// Attack roll fell short of the defense target
    Miss,
    /// Hit landed in the shield cone and the shield took it
    Shielded(ShieldCheck),
    /// Hit reached the hull
    Hull(ToughnessCheck),
}

/// Result of one attack against a defender
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackOutcome {
    pub band: RangeBand,
    /// Attacker's rank at the band
    pub damage: i32,
    pub concealment: ConcealmentGate,
    /// Absent when concealment made the attack miss outright
    pub attack_roll: Option<AttackRoll>,
    pub resolution: Resolution,

    // === State Changes ===
    pub dents_before: u32,
    pub dents_after: u32,
    pub status_before: Status,
    pub status_after: Status,
}

impl AttackOutcome {
    /// Whether the attack roll connected
    pub fn is_hit(&self) -> bool {
        matches!(self.resolution, Resolution::Shielded(_) | Resolution::Hull(_))
    }

    /// Severity of a hull hit
    pub fn severity(&self) -> Option<HitSeverity> {
        match self.resolution {
            Resolution::Hull(check) => Some(check.severity),
            _ => None,
        }
    }

    /// Dents added by this attack (0 or 1)
    pub fn dents_inflicted(&self) -> u32 {
        self.dents_after - self.dents_before
    }

    pub fn shield_disabled(&self) -> bool {
        matches!(self.resolution, Resolution::Shielded(check) if check.disabled)
    }

    pub fn is_defeating_blow(&self) -> bool {
        self.status_after == Status::Defeated && self.status_before != Status::Defeated
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        match self.resolution {
            Resolution::ConcealedMiss => "Missed a concealed target".to_string(),
            Resolution::Miss => match self.attack_roll {
                Some(roll) => format!("Miss ({} vs {})", roll.total, roll.defense_target),
                None => "Miss".to_string(),
            },
            Resolution::Shielded(check) => {
                if check.disabled {
                    "Absorbed by shield, shield disabled".to_string()
                } else {
                    "Absorbed by shield".to_string()
                }
            }
            Resolution::Hull(check) => {
                let mut parts = vec![format!("{} hit", check.severity.label())];
                if self.dents_inflicted() > 0 {
                    parts.push(format!("{} dents", self.dents_after));
                }
                if self.status_after != self.status_before {
                    parts.push(format!("now {}", self.status_after));
                }
                if self.is_defeating_blow() {
                    parts.push("FATAL".to_string());
                }
                parts.join(", ")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hull_outcome(severity: HitSeverity, status_after: Status) -> AttackOutcome {
        AttackOutcome {
            band: RangeBand::Close,
            damage: 6,
            concealment: ConcealmentGate::Open,
            attack_roll: Some(AttackRoll {
                roll: 12,
                total: 18,
                defense_target: 15,
            }),
            resolution: Resolution::Hull(ToughnessCheck {
                roll: 5,
                total: 10,
                target: 21,
                margin: 11,
                severity,
            }),
            dents_before: 0,
            dents_after: severity.dents(),
            status_before: Status::Intact,
            status_after,
        }
    }

    #[test]
    fn test_attack_roll_hit_on_equal() {
        let roll = AttackRoll {
            roll: 3,
            total: 13,
            defense_target: 13,
        };
        assert!(roll.hit());
    }

    #[test]
    fn test_hull_summary() {
        let outcome = hull_outcome(HitSeverity::Heavy, Status::Stunned);
        assert!(outcome.is_hit());
        assert_eq!(outcome.dents_inflicted(), 1);
        let summary = outcome.summary();
        assert!(summary.contains("heavy hit"));
        assert!(summary.contains("stunned"));
    }

    #[test]
    fn test_defeating_blow_summary() {
        let outcome = hull_outcome(HitSeverity::Critical, Status::Defeated);
        assert!(outcome.is_defeating_blow());
        assert!(outcome.summary().contains("FATAL"));
    }

    #[test]
    fn test_concealed_miss_is_not_hit() {
        let mut outcome = hull_outcome(HitSeverity::Absorbed, Status::Intact);
        outcome.resolution = Resolution::ConcealedMiss;
        outcome.attack_roll = None;
        assert!(!outcome.is_hit());
        assert_eq!(outcome.severity(), None);
    }
}
