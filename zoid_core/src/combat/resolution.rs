//! Attack resolution - Apply one attack from a combatant to its target

use super::result::{AttackOutcome, AttackRoll, Resolution};
use crate::combatant::Combatant;
use crate::config::BattleConstants;
use crate::defense::{
    concealment_gate, shield_check, shield_intercepts, toughness_check, ConcealmentGate,
};
use crate::dice::Dice;
use crate::narration::NarrationSink;
use crate::status::escalate;
use crate::types::RangeBand;

/// Resolve an attack from `attacker` against `defender` at `band`
///
/// Legality (attack rank at the band, attacker's own shield) is the
/// caller's concern. This function runs the pipeline:
/// 1. Concealment: an undetected, hidden defender is missed on a lost coin flip
/// 2. Attack roll: `d20 + accuracy` against `10 + parry/dodge`
/// 3. Shield: an active shield in the frontal arc absorbs the hit
/// 4. Toughness: `d20 + toughness - dents` against `damage + 15`
/// 5. Apply dents and escalate status by the margin of failure
#[allow(clippy::too_many_arguments)]
pub fn resolve_attack(
    attacker: &Combatant,
    defender: &mut Combatant,
    band: RangeBand,
    defender_detected: bool,
    rules: &BattleConstants,
    dice: &mut impl Dice,
    sink: &mut impl NarrationSink,
) -> AttackOutcome {
    let damage = attacker.rank_at(band);
    let dents_before = defender.dents;
    let status_before = defender.status;

    let outcome = |concealment: ConcealmentGate,
                   attack_roll: Option<AttackRoll>,
                   resolution: Resolution,
                   defender: &Combatant| AttackOutcome {
        band,
        damage,
        concealment,
        attack_roll,
        resolution,
        dents_before,
        dents_after: defender.dents,
        status_before,
        status_after: defender.status,
    };

    sink.emit(&format!(
        "{} attacks {} with a {} attack (rank {}).",
        attacker.name, defender.name, band, damage
    ));

    // Step 1: Concealment
    let concealment = concealment_gate(defender, defender_detected, dice);
    if concealment.blocks_attack() {
        sink.emit(&format!(
            "{} strikes at {}'s last known location and misses!",
            attacker.name, defender.name
        ));
        return outcome(concealment, None, Resolution::ConcealedMiss, &*defender);
    }

    // Step 2: Attack roll
    let roll = dice.d20();
    let attack_roll = AttackRoll {
        roll,
        total: roll + attacker.accuracy_bonus(band),
        defense_target: rules.attack.defense_base + defender.active_defense(band),
    };
    sink.emit(&format!(
        "Attack roll: d20({}) + {} = {} vs {}",
        roll,
        attacker.accuracy_bonus(band),
        attack_roll.total,
        attack_roll.defense_target
    ));
    if !attack_roll.hit() {
        sink.emit(&format!("{} misses {}.", attacker.name, defender.name));
        return outcome(concealment, Some(attack_roll), Resolution::Miss, &*defender);
    }
    sink.emit("Hit!");

    // Step 3: Shield
    if shield_intercepts(attacker, defender, &rules.attack) {
        let check = shield_check(defender, damage, &rules.attack, dice);
        sink.emit(&format!(
            "{}'s shield absorbs the attack. Shield check: d20({}) + {} = {} vs {}",
            defender.name, check.roll, defender.shield_rank, check.total, check.target
        ));
        if check.disabled {
            sink.emit(&format!("{}'s shield has been disabled!", defender.name));
        }
        return outcome(
            concealment,
            Some(attack_roll),
            Resolution::Shielded(check),
            &*defender,
        );
    }

    // Step 4: Toughness
    let check = toughness_check(defender, damage, &rules.attack, dice);
    sink.emit(&format!(
        "Toughness check: d20({}) + {} - {} dents = {} vs {}",
        check.roll, defender.defenses.toughness, defender.dents, check.total, check.target
    ));

    // Step 5: Dents and status
    for _ in 0..check.severity.dents() {
        defender.add_dent();
    }
    defender.status = escalate(defender.status, check.severity.inflicted_status());

    match check.severity.inflicted_status() {
        _ if check.severity.dents() == 0 => {
            sink.emit(&format!("{} shrugs off the hit.", defender.name));
        }
        None => {
            sink.emit(&format!(
                "{} takes a {} hit and is dented ({} dents).",
                defender.name,
                check.severity.label(),
                defender.dents
            ));
        }
        Some(_) => {
            sink.emit(&format!(
                "{} takes a {} hit and is now {}! ({} dents)",
                defender.name,
                check.severity.label(),
                defender.status,
                defender.dents
            ));
        }
    }

    tracing::debug!(
        attacker = %attacker.name,
        defender = %defender.name,
        margin = check.margin,
        severity = check.severity.label(),
        "attack resolved"
    );

    outcome(concealment, Some(attack_roll), Resolution::Hull(check), &*defender)
}
