//! Maneuvers - Closing, retreating, circling, searching
//!
//! Magnitudes are the caller's responsibility. Requests beyond a bound are
//! logged and applied as given; the AI pilot clamps its own requests.

use crate::combatant::Combatant;
use crate::config::{BattleConstants, MovementConstants};
use crate::defense::spot;
use crate::dice::Dice;
use crate::narration::NarrationSink;
use crate::types::Terrain;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Movement sub-type with its magnitude
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Maneuver {
    /// No movement chosen
    #[default]
    None,
    /// Move toward the enemy by this many meters, in [0, speed]
    Close(f64),
    /// Move away from the enemy by this many meters, in [0, speed]
    Retreat(f64),
    /// Turn by this many degrees; the sign picks the direction
    Circle(f64),
    /// Sweep half-speed in a random direction, then search again
    Search,
    /// Hold position; an undetected enemy may still be spotted
    StandStill,
}

impl Maneuver {
    /// Whether carrying this out changes position or facing
    pub fn is_displacement(&self) -> bool {
        matches!(
            self,
            Maneuver::Close(_) | Maneuver::Retreat(_) | Maneuver::Circle(_) | Maneuver::Search
        )
    }

    /// Descriptive position label left on the mover
    pub fn position_label(&self) -> &'static str {
        match self {
            Maneuver::None => "neutral",
            Maneuver::Close(_) => "close",
            Maneuver::Retreat(_) => "retreat",
            Maneuver::Circle(_) => "circle",
            Maneuver::Search => "search",
            Maneuver::StandStill => "stand still",
        }
    }
}

/// Largest circling angle allowed this turn, with standard constants
///
/// 360 at (near) contact, otherwise the arc a mover of `speed` can cover
/// around a target at `distance`: `speed * 180 / (pi * distance)`, capped at 360.
pub fn max_circle_angle(speed: f64, distance: f64) -> f64 {
    max_circle_angle_with(speed, distance, &MovementConstants::default())
}

/// Largest circling angle allowed this turn under the given constants
pub fn max_circle_angle_with(speed: f64, distance: f64, rules: &MovementConstants) -> f64 {
    if distance <= rules.full_circle_distance {
        return rules.max_circle_degrees;
    }
    rules
        .max_circle_degrees
        .min(speed * 180.0 / (PI * distance))
}

/// Result of resolving a maneuver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovementOutcome {
    pub distance_before: f64,
    pub distance_after: f64,
    /// Detection state after the maneuver (searching can change it)
    pub enemy_detected: bool,
    /// Whether the mover actually changed position or facing
    pub moved: bool,
}

/// Apply a maneuver for `mover`, returning the new distance and detection state
#[allow(clippy::too_many_arguments)]
pub fn resolve_maneuver(
    mover: &mut Combatant,
    enemy: &Combatant,
    maneuver: Maneuver,
    distance: f64,
    enemy_detected: bool,
    terrain: Terrain,
    rules: &BattleConstants,
    dice: &mut impl Dice,
    sink: &mut impl NarrationSink,
) -> MovementOutcome {
    // Searching only makes sense for a hidden enemy
    let maneuver = if maneuver == Maneuver::Search && enemy_detected {
        tracing::warn!(zoid = %mover.name, "search requested with the enemy in sight");
        Maneuver::StandStill
    } else {
        maneuver
    };
    let speed = mover.speed(terrain);
    let mut new_distance = distance;
    let mut detected = enemy_detected;

    match maneuver {
        Maneuver::None => {
            sink.emit(&format!("{} holds position at {:.1}m.", mover.name, distance));
        }
        Maneuver::Close(amount) => {
            warn_if_over_speed(mover, amount, speed);
            new_distance = (distance - amount).max(0.0);
            sink.emit(&format!("{} moves closer by {:.1} meters.", mover.name, amount));
        }
        Maneuver::Retreat(amount) => {
            warn_if_over_speed(mover, amount, speed);
            new_distance = distance + amount;
            sink.emit(&format!("{} retreats by {:.1} meters.", mover.name, amount));
        }
        Maneuver::Circle(degrees) => {
            let limit = max_circle_angle_with(speed, distance, &rules.movement);
            if degrees.abs() > limit {
                tracing::warn!(
                    zoid = %mover.name,
                    requested = degrees,
                    limit,
                    "circling angle exceeds the turn limit"
                );
            }
            mover.turn_by(degrees);
            let direction = if degrees >= 0.0 { "left" } else { "right" };
            sink.emit(&format!(
                "{} circles {} by {:.1} degrees (facing {:.1}).",
                mover.name,
                direction,
                degrees.abs(),
                mover.angle
            ));
        }
        Maneuver::Search => {
            let sweep = speed * rules.movement.search_speed_fraction;
            if dice.coin_flip() {
                new_distance = (distance - sweep).max(0.0);
                sink.emit(&format!("{} sweeps closer searching for the enemy.", mover.name));
            } else {
                new_distance = distance + sweep;
                sink.emit(&format!("{} sweeps wide searching for the enemy.", mover.name));
            }
            detected = search(mover, enemy, rules, dice, sink);
        }
        Maneuver::StandStill => {
            sink.emit(&format!("{} stands still at {:.1}m.", mover.name, distance));
            if !detected {
                detected = search(mover, enemy, rules, dice, sink);
            }
        }
    }

    if maneuver != Maneuver::None {
        mover.position = maneuver.position_label().to_string();
    }
    if (new_distance - distance).abs() > f64::EPSILON {
        sink.emit(&format!("Distance: {:.1}m -> {:.1}m", distance, new_distance));
    }

    MovementOutcome {
        distance_before: distance,
        distance_after: new_distance,
        enemy_detected: detected,
        moved: maneuver.is_displacement(),
    }
}

/// Search check with narration; a visible enemy is found without a roll
pub(crate) fn search(
    searcher: &Combatant,
    target: &Combatant,
    rules: &BattleConstants,
    dice: &mut impl Dice,
    sink: &mut impl NarrationSink,
) -> bool {
    match spot(searcher, target, &rules.detection, dice) {
        None => true,
        Some(check) => {
            sink.emit(&format!(
                "Search check: d20({}) + Awareness({}) = {} vs DC {}",
                check.roll, searcher.stats.awareness, check.total, check.dc
            ));
            if check.detected {
                sink.emit(&format!("{} detects {}!", searcher.name, target.name));
            } else {
                sink.emit(&format!("{} cannot locate {}!", searcher.name, target.name));
            }
            check.detected
        }
    }
}

fn warn_if_over_speed(mover: &Combatant, amount: f64, speed: f64) {
    if amount < 0.0 || amount > speed {
        tracing::warn!(
            zoid = %mover.name,
            requested = amount,
            speed,
            "movement magnitude outside [0, speed]"
        );
    }
}
