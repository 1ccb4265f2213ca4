//! Battle rule constants

use serde::{Deserialize, Serialize};

/// Tunable battle rules
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BattleConstants {
    #[serde(default)]
    pub range: RangeConstants,
    #[serde(default)]
    pub attack: AttackConstants,
    #[serde(default)]
    pub movement: MovementConstants,
    #[serde(default)]
    pub detection: DetectionConstants,
    #[serde(default)]
    pub ai: AiConstants,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeConstants {
    /// Upper bound (inclusive) of the close band
    #[serde(default = "default_close_max")]
    pub close_max: f64,
    /// Upper bound (inclusive) of the mid band
    #[serde(default = "default_mid_max")]
    pub mid_max: f64,
    /// Representative distance of each band, used by AI targeting
    #[serde(default = "default_band_distances")]
    pub band_distances: BandDistances,
}

impl Default for RangeConstants {
    fn default() -> Self {
        RangeConstants {
            close_max: 500.0,
            mid_max: 1000.0,
            band_distances: BandDistances::default(),
        }
    }
}

fn default_close_max() -> f64 {
    500.0
}
fn default_mid_max() -> f64 {
    1000.0
}
fn default_band_distances() -> BandDistances {
    BandDistances::default()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandDistances {
    pub melee: f64,
    pub close: f64,
    pub mid: f64,
    pub long: f64,
}

impl Default for BandDistances {
    fn default() -> Self {
        BandDistances {
            melee: 0.0,
            close: 500.0,
            mid: 1000.0,
            long: 1500.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackConstants {
    /// Defense target = base + parry/dodge
    #[serde(default = "default_defense_base")]
    pub defense_base: i32,
    /// Resistance target = damage + offset (toughness and shield checks)
    #[serde(default = "default_damage_offset")]
    pub damage_offset: i32,
    /// Width of each hit severity tier
    #[serde(default = "default_tier_width")]
    pub tier_width: i32,
    /// Half-width of the frontal shield cone in degrees
    #[serde(default = "default_shield_arc")]
    pub shield_arc_degrees: f64,
}

impl Default for AttackConstants {
    fn default() -> Self {
        AttackConstants {
            defense_base: 10,
            damage_offset: 15,
            tier_width: 5,
            shield_arc_degrees: 45.0,
        }
    }
}

fn default_defense_base() -> i32 {
    10
}
fn default_damage_offset() -> i32 {
    15
}
fn default_tier_width() -> i32 {
    5
}
fn default_shield_arc() -> f64 {
    45.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementConstants {
    /// Fraction of terrain speed covered by a search sweep
    #[serde(default = "default_search_fraction")]
    pub search_speed_fraction: f64,
    /// At or below this distance a combatant may circle a full turn
    #[serde(default = "default_full_circle_distance")]
    pub full_circle_distance: f64,
    /// Upper bound on a single circling maneuver in degrees
    #[serde(default = "default_max_circle_degrees")]
    pub max_circle_degrees: f64,
}

impl Default for MovementConstants {
    fn default() -> Self {
        MovementConstants {
            search_speed_fraction: 0.5,
            full_circle_distance: 0.1,
            max_circle_degrees: 360.0,
        }
    }
}

fn default_search_fraction() -> f64 {
    0.5
}
fn default_full_circle_distance() -> f64 {
    0.1
}
fn default_max_circle_degrees() -> f64 {
    360.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionConstants {
    /// Search DC against an active concealment = base + stealth rank
    #[serde(default = "default_stealth_base_dc")]
    pub stealth_base_dc: i32,
}

impl Default for DetectionConstants {
    fn default() -> Self {
        DetectionConstants { stealth_base_dc: 5 }
    }
}

fn default_stealth_base_dc() -> i32 {
    5
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiConstants {
    /// AI pilots do not move when within this distance of their target
    #[serde(default = "default_deadband")]
    pub deadband: f64,
}

impl Default for AiConstants {
    fn default() -> Self {
        AiConstants { deadband: 50.0 }
    }
}

fn default_deadband() -> f64 {
    50.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let constants = BattleConstants::default();
        assert!((constants.range.close_max - 500.0).abs() < f64::EPSILON);
        assert!((constants.range.band_distances.long - 1500.0).abs() < f64::EPSILON);
        assert_eq!(constants.attack.damage_offset, 15);
        assert_eq!(constants.detection.stealth_base_dc, 5);
        assert!((constants.ai.deadband - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_constants() {
        let toml = r#"
[range]
close_max = 400
mid_max = 900

[attack]
defense_base = 12
"#;

        let constants: BattleConstants = toml::from_str(toml).unwrap();
        assert!((constants.range.close_max - 400.0).abs() < f64::EPSILON);
        assert_eq!(constants.attack.defense_base, 12);
        // Unspecified keys keep their defaults
        assert_eq!(constants.attack.damage_offset, 15);
        assert!((constants.movement.search_speed_fraction - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bundled_constants_match_defaults() {
        let toml = include_str!("../../config/constants.toml");
        let constants: BattleConstants = toml::from_str(toml).unwrap();
        assert_eq!(constants, BattleConstants::default());
    }
}
