//! Intent selection for AI pilots

use crate::combatant::Combatant;
use crate::config::BattleConstants;
use crate::intent::Intent;
use crate::movement::{band_distance, band_for_distance, can_attack_from, Maneuver};
use crate::types::{Personality, RangeBand, Status, Terrain};

/// Everything the AI looks at when planning a turn
#[derive(Debug, Clone, Copy)]
pub struct Situation<'a> {
    pub me: &'a Combatant,
    pub enemy: &'a Combatant,
    pub distance: f64,
    pub enemy_detected: bool,
    pub terrain: Terrain,
}

/// Plan a turn for `situation.me`
///
/// Actions come out as stealth toggle, shield toggle, move, attack. The
/// shield decision uses the current distance; the attack decision uses the
/// distance and shield state the plan itself produces.
pub fn decide_intent(
    situation: &Situation<'_>,
    personality: Personality,
    rules: &BattleConstants,
) -> Intent {
    let me = situation.me;
    let mut intent = Intent::new();

    if me.has_stealth() && !me.stealth_on {
        intent = intent.then_toggle_stealth();
    }

    let shield_up = me.has_shield() && wants_shield(situation, personality, rules);
    if shield_up != me.shield_active() {
        intent = intent.then_toggle_shield();
    }

    match me.status {
        Status::Stunned | Status::Defeated => return intent,
        Status::Dazed => {
            // One action only: swing if a swing is possible here, otherwise move
            if !shield_up && can_attack_from(me, situation.distance, &rules.range) {
                return intent.then_attack();
            }
            return intent.then_move(plan_maneuver(situation, personality, rules));
        }
        Status::Intact => {}
    }

    let maneuver = plan_maneuver(situation, personality, rules);
    let projected = projected_distance(situation.distance, maneuver);
    intent = intent.then_move(maneuver);

    if !shield_up && can_attack_from(me, projected, &rules.range) {
        intent = intent.then_attack();
    }
    intent
}

/// Whether the pilot wants its shield up this turn
fn wants_shield(situation: &Situation<'_>, personality: Personality, rules: &BattleConstants) -> bool {
    match personality {
        Personality::Aggressive => !can_attack_from(situation.me, situation.distance, &rules.range),
        Personality::Defensive => {
            let band = band_for_distance(situation.distance, &rules.range);
            situation.me.rank_at(band) <= situation.enemy.rank_at(band)
        }
    }
}

/// Movement for this turn: search for a hidden enemy, otherwise head for
/// the preferred distance
pub fn plan_maneuver(
    situation: &Situation<'_>,
    personality: Personality,
    rules: &BattleConstants,
) -> Maneuver {
    if !situation.enemy_detected {
        return Maneuver::Search;
    }
    let target = target_distance(situation.me, situation.enemy, personality, rules);
    approach(
        situation.distance,
        target,
        situation.me.speed(situation.terrain),
        rules.ai.deadband,
    )
}

/// Distance the pilot tries to hold
///
/// Aggressive pilots go for their own best band. Defensive pilots go for the
/// enemy's worst band, or the attackable band nearest to it.
pub fn target_distance(
    me: &Combatant,
    enemy: &Combatant,
    personality: Personality,
    rules: &BattleConstants,
) -> f64 {
    let anchor = |band: RangeBand| band_distance(band, &rules.range);
    match personality {
        Personality::Aggressive => anchor(me.best_band()),
        Personality::Defensive => {
            let preferred = anchor(enemy.worst_band());
            if can_attack_from(me, preferred, &rules.range) {
                return preferred;
            }
            RangeBand::all()
                .iter()
                .map(|&band| anchor(band))
                .filter(|&distance| can_attack_from(me, distance, &rules.range))
                .min_by(|a, b| (a - preferred).abs().total_cmp(&(b - preferred).abs()))
                .unwrap_or_else(|| anchor(RangeBand::Melee))
        }
    }
}

/// Step toward `target`, at most `speed`, standing still inside the deadband
pub fn approach(distance: f64, target: f64, speed: f64, deadband: f64) -> Maneuver {
    let gap = distance - target;
    if gap.abs() <= deadband {
        Maneuver::StandStill
    } else if gap > 0.0 {
        Maneuver::Close(speed.min(gap))
    } else {
        Maneuver::Retreat(speed.min(-gap))
    }
}

fn projected_distance(distance: f64, maneuver: Maneuver) -> f64 {
    match maneuver {
        Maneuver::Close(amount) => (distance - amount).max(0.0),
        Maneuver::Retreat(amount) => distance + amount,
        // Search direction is a coin flip; plan from where we stand
        _ => distance,
    }
}
