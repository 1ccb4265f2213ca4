//! Combatant - The mutable state of one Zoid during a battle

mod template;

pub use template::{power_kind, Defenses, MovementSpeeds, Power, Stats, ZoidTemplate};

use crate::types::{RangeBand, Status, Terrain};
use serde::{Deserialize, Serialize};

/// Attack rank per range band (0 = no capability at that band)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackRanks {
    pub melee: i32,
    pub close: i32,
    pub mid: i32,
    pub long: i32,
}

impl AttackRanks {
    pub fn new(melee: i32, close: i32, mid: i32, long: i32) -> Self {
        AttackRanks {
            melee,
            close,
            mid,
            long,
        }
    }

    /// Rank at a band
    pub fn at(&self, band: RangeBand) -> i32 {
        match band {
            RangeBand::Melee => self.melee,
            RangeBand::Close => self.close,
            RangeBand::Mid => self.mid,
            RangeBand::Long => self.long,
        }
    }

    /// Band with the highest rank; ties go to the nearer band
    pub fn best_band(&self) -> RangeBand {
        let mut best = RangeBand::Melee;
        for &band in RangeBand::all() {
            if self.at(band) > self.at(best) {
                best = band;
            }
        }
        best
    }

    /// Band with the lowest rank; ties go to the nearer band
    pub fn worst_band(&self) -> RangeBand {
        let mut worst = RangeBand::Melee;
        for &band in RangeBand::all() {
            if self.at(band) < self.at(worst) {
                worst = band;
            }
        }
        worst
    }

    /// Highest rank across all bands
    pub fn max_rank(&self) -> i32 {
        self.melee.max(self.close).max(self.mid).max(self.long)
    }
}

/// One Zoid in a battle
///
/// Static fields come from the roster template. The battle-state block is
/// mutated by the engine and cleared by [`Combatant::return_to_base_state`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    // === Identity ===
    pub name: String,
    pub power_level: i32,
    /// Carried for the economy layer; combat never reads it
    pub cost: f64,

    // === Static ratings ===
    pub stats: Stats,
    pub defenses: Defenses,
    pub speeds: MovementSpeeds,
    pub ranks: AttackRanks,
    /// Accuracy bonus for melee attacks
    pub close_combat: i32,
    /// Accuracy bonus for ranged attacks
    pub ranged_combat: i32,
    pub armor: i32,
    pub shield_rank: i32,
    pub stealth_rank: i32,

    // === Battle state ===
    pub dents: u32,
    pub status: Status,
    pub shield_on: bool,
    pub shield_disabled: bool,
    pub stealth_on: bool,
    /// Facing in degrees, kept in [0, 360)
    pub angle: f64,
    /// Last maneuver, descriptive only
    pub position: String,
}

impl Combatant {
    /// A combatant with zeroed ratings, for building up by hand
    pub fn new(name: impl Into<String>) -> Self {
        Combatant {
            name: name.into(),
            power_level: 0,
            cost: 0.0,
            stats: Stats::default(),
            defenses: Defenses::default(),
            speeds: MovementSpeeds::default(),
            ranks: AttackRanks::default(),
            close_combat: 0,
            ranged_combat: 0,
            armor: 0,
            shield_rank: 0,
            stealth_rank: 0,
            dents: 0,
            status: Status::Intact,
            shield_on: false,
            shield_disabled: false,
            stealth_on: false,
            angle: 0.0,
            position: "neutral".to_string(),
        }
    }

    /// Build a fresh combatant from roster data
    pub fn from_template(template: &ZoidTemplate) -> Self {
        let rank = |kind: &str| template.power_rank(kind);
        let mut combatant = Combatant::new(template.name.clone());
        combatant.power_level = template.power_level;
        combatant.cost = template.cost;
        combatant.stats = template.stats;
        combatant.defenses = template.defenses;
        combatant.speeds = template.movement;
        combatant.ranks = AttackRanks::new(
            rank(power_kind::MELEE),
            rank(power_kind::CLOSE_RANGE),
            rank(power_kind::MID_RANGE),
            rank(power_kind::LONG_RANGE),
        );
        combatant.close_combat = rank(power_kind::CLOSE_COMBAT);
        combatant.ranged_combat = rank(power_kind::RANGED_COMBAT);
        combatant.armor = rank(power_kind::ARMOR);
        combatant.shield_rank = rank(power_kind::SHIELD);
        combatant.stealth_rank = rank(power_kind::CONCEALMENT);
        combatant
    }

    // === Derived queries ===

    /// Speed on the battle terrain
    pub fn speed(&self, terrain: Terrain) -> f64 {
        self.speeds.on(terrain)
    }

    /// Attack rank (damage value) at a band
    pub fn rank_at(&self, band: RangeBand) -> i32 {
        self.ranks.at(band)
    }

    /// Whether this combatant has any attack at the band
    pub fn can_attack_at(&self, band: RangeBand) -> bool {
        self.rank_at(band) > 0
    }

    pub fn best_band(&self) -> RangeBand {
        self.ranks.best_band()
    }

    pub fn worst_band(&self) -> RangeBand {
        self.ranks.worst_band()
    }

    /// Bonus added to the attack roll: fighting + close combat for melee,
    /// dexterity + ranged combat otherwise
    pub fn accuracy_bonus(&self, band: RangeBand) -> i32 {
        match band {
            RangeBand::Melee => self.stats.fighting + self.close_combat,
            _ => self.stats.dexterity + self.ranged_combat,
        }
    }

    /// Defense used against an attack from the band: parry in melee, dodge otherwise
    pub fn active_defense(&self, band: RangeBand) -> i32 {
        match band {
            RangeBand::Melee => self.defenses.parry,
            _ => self.defenses.dodge,
        }
    }

    /// Shield capability that has not been knocked out
    pub fn has_shield(&self) -> bool {
        self.shield_rank > 0 && !self.shield_disabled
    }

    pub fn has_stealth(&self) -> bool {
        self.stealth_rank > 0
    }

    /// Shield is switched on and able to intercept
    pub fn shield_active(&self) -> bool {
        self.shield_on && self.has_shield()
    }

    /// Concealment is switched on and backed by a rank
    pub fn stealth_active(&self) -> bool {
        self.stealth_on && self.has_stealth()
    }

    pub fn is_defeated(&self) -> bool {
        self.status == Status::Defeated
    }

    // === Mutation ===

    /// Record one point of damage
    pub fn add_dent(&mut self) {
        self.dents = self.dents.saturating_add(1);
    }

    /// Knock the shield out for the rest of the battle
    pub fn disable_shield(&mut self) {
        self.shield_disabled = true;
        self.shield_on = false;
    }

    /// Turn to a new facing, normalized into [0, 360)
    pub fn turn_by(&mut self, degrees: f64) {
        let angle = (self.angle + degrees).rem_euclid(360.0);
        // rem_euclid can round up to exactly 360 for tiny negative inputs
        self.angle = if angle >= 360.0 { 0.0 } else { angle };
    }

    /// Clear all battle state between battles
    pub fn return_to_base_state(&mut self) {
        self.dents = 0;
        self.status = Status::Intact;
        self.shield_on = false;
        self.shield_disabled = false;
        self.stealth_on = false;
        self.angle = 0.0;
        self.position = "neutral".to_string();
    }

    // === Display helpers ===

    /// One-line battle status
    pub fn status_line(&self, distance: f64) -> String {
        format!(
            "{} | Distance: {:.1}m | Shield: {} | Stealth: {} | Dents: {} | Status: {}",
            self.name,
            distance,
            if self.shield_active() { "ON" } else { "OFF" },
            if self.stealth_active() { "ON" } else { "OFF" },
            self.dents,
            self.status
        )
    }

    /// One-line primary stat summary
    pub fn stats_line(&self) -> String {
        format!(
            "Fighting: {} | Strength: {} | Dexterity: {} | Agility: {} | Awareness: {}",
            self.stats.fighting,
            self.stats.strength,
            self.stats.dexterity,
            self.stats.agility,
            self.stats.awareness
        )
    }

    /// One-line attack rank summary, `-` for missing bands
    pub fn attacks_line(&self) -> String {
        let show = |rank: i32| {
            if rank > 0 {
                rank.to_string()
            } else {
                "-".to_string()
            }
        };
        format!(
            "Melee: {} | Close: {} | Mid: {} | Long: {}",
            show(self.ranks.melee),
            show(self.ranks.close),
            show(self.ranks.mid),
            show(self.ranks.long)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shielded_template() -> ZoidTemplate {
        ZoidTemplate {
            name: "Shield Liger".to_string(),
            stats: Stats {
                fighting: 6,
                dexterity: 4,
                awareness: 3,
                ..Default::default()
            },
            defenses: Defenses {
                toughness: 9,
                parry: 6,
                dodge: 5,
            },
            movement: MovementSpeeds {
                land: 250.0,
                water: 0.0,
                air: 0.0,
            },
            powers: vec![
                Power::new(power_kind::MELEE, 8),
                Power::new(power_kind::CLOSE_RANGE, 5),
                Power::new(power_kind::SHIELD, 6),
                Power::new(power_kind::CLOSE_COMBAT, 2),
            ],
            power_level: 10,
            cost: 120_000.0,
        }
    }

    #[test]
    fn test_from_template() {
        let zoid = Combatant::from_template(&shielded_template());
        assert_eq!(zoid.name, "Shield Liger");
        assert_eq!(zoid.ranks, AttackRanks::new(8, 5, 0, 0));
        assert_eq!(zoid.shield_rank, 6);
        assert_eq!(zoid.stealth_rank, 0);
        assert_eq!(zoid.close_combat, 2);
        assert_eq!(zoid.status, Status::Intact);
        assert_eq!(zoid.dents, 0);
    }

    #[test]
    fn test_best_and_worst_band() {
        let zoid = Combatant::from_template(&shielded_template());
        assert_eq!(zoid.best_band(), RangeBand::Melee);
        assert_eq!(zoid.worst_band(), RangeBand::Mid);

        let ranks = AttackRanks::new(0, 4, 7, 7);
        assert_eq!(ranks.best_band(), RangeBand::Mid);
        assert_eq!(ranks.worst_band(), RangeBand::Melee);
        assert_eq!(ranks.max_rank(), 7);
    }

    #[test]
    fn test_accuracy_and_defense_by_band() {
        let mut zoid = Combatant::from_template(&shielded_template());
        zoid.ranged_combat = 1;
        assert_eq!(zoid.accuracy_bonus(RangeBand::Melee), 8);
        assert_eq!(zoid.accuracy_bonus(RangeBand::Long), 5);
        assert_eq!(zoid.active_defense(RangeBand::Melee), 6);
        assert_eq!(zoid.active_defense(RangeBand::Close), 5);
    }

    #[test]
    fn test_shield_flags() {
        let mut zoid = Combatant::from_template(&shielded_template());
        assert!(zoid.has_shield());
        assert!(!zoid.shield_active());

        zoid.shield_on = true;
        assert!(zoid.shield_active());

        zoid.disable_shield();
        assert!(!zoid.has_shield());
        assert!(!zoid.shield_on);
        assert!(!zoid.shield_active());
    }

    #[test]
    fn test_shield_on_without_rank_has_no_effect() {
        let mut zoid = Combatant::new("Bare");
        zoid.shield_on = true;
        assert!(!zoid.shield_active());
    }

    #[test]
    fn test_turn_by_wraps() {
        let mut zoid = Combatant::new("Spinner");
        zoid.turn_by(300.0);
        zoid.turn_by(90.0);
        assert!((zoid.angle - 30.0).abs() < 1e-9);
        zoid.turn_by(-60.0);
        assert!((zoid.angle - 330.0).abs() < 1e-9);
    }

    #[test]
    fn test_return_to_base_state() {
        let mut zoid = Combatant::from_template(&shielded_template());
        zoid.dents = 4;
        zoid.status = Status::Defeated;
        zoid.stealth_on = true;
        zoid.angle = 120.0;
        zoid.disable_shield();
        zoid.position = "retreat".to_string();

        zoid.return_to_base_state();

        assert_eq!(zoid.dents, 0);
        assert_eq!(zoid.status, Status::Intact);
        assert!(!zoid.shield_on);
        assert!(!zoid.shield_disabled);
        assert!(!zoid.stealth_on);
        assert!(zoid.angle.abs() < f64::EPSILON);
        assert!(zoid.has_shield());
    }

    #[test]
    fn test_display_lines() {
        let zoid = Combatant::from_template(&shielded_template());
        let status = zoid.status_line(350.0);
        assert!(status.contains("350.0m"));
        assert!(status.contains("Status: intact"));
        assert_eq!(zoid.attacks_line(), "Melee: 8 | Close: 5 | Mid: - | Long: -");
        assert!(zoid.stats_line().starts_with("Fighting: 6"));
    }
}
