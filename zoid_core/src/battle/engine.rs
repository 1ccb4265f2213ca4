//! Battle - One battle between two combatants, played turn by turn

use super::state::{BattleOutcome, BattleSetup, BattleState, TurnReport};
use super::BattleError;
use crate::combat::resolve_attack;
use crate::combatant::Combatant;
use crate::config::BattleConstants;
use crate::dice::Dice;
use crate::intent::{Action, Intent};
use crate::movement::{band_for_distance, resolve_maneuver, search};
use crate::narration::NarrationSink;
use crate::status::{decay, ActionGate};
use crate::types::Side;
use std::collections::VecDeque;

/// What an intent source sees when asked for a turn's plan
#[derive(Debug, Clone, Copy)]
pub struct TurnContext<'a> {
    pub side: Side,
    pub active: &'a Combatant,
    pub enemy: &'a Combatant,
    pub distance: f64,
    /// Result of this turn's detection check
    pub enemy_detected: bool,
    pub state: &'a BattleState,
    pub rules: &'a BattleConstants,
}

/// Supplies one intent per turn for a side
///
/// Implemented by AI pilots and by whatever collects player input.
pub trait IntentSource {
    fn next_intent(&mut self, ctx: &TurnContext<'_>) -> Intent;
}

/// Replays a fixed list of intents, then idles
#[derive(Debug, Clone, Default)]
pub struct ScriptedIntents {
    queue: VecDeque<Intent>,
}

impl ScriptedIntents {
    pub fn new(intents: impl IntoIterator<Item = Intent>) -> Self {
        ScriptedIntents {
            queue: intents.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl IntentSource for ScriptedIntents {
    fn next_intent(&mut self, _ctx: &TurnContext<'_>) -> Intent {
        self.queue.pop_front().unwrap_or_default()
    }
}

/// A battle in progress
///
/// Owns both combatants, the rules and the dice. Sides alternate strictly
/// after a coin flip picks who goes first.
#[derive(Debug)]
pub struct Battle<D: Dice> {
    combatants: [Combatant; 2],
    state: BattleState,
    rules: BattleConstants,
    dice: D,
    first: Side,
    max_turns: Option<u32>,
    finished: bool,
}

impl<D: Dice> Battle<D> {
    /// Set up a battle; both combatants start from their base state
    pub fn new(
        one: Combatant,
        two: Combatant,
        setup: BattleSetup,
        rules: BattleConstants,
        mut dice: D,
    ) -> Result<Self, BattleError> {
        if !setup.distance.is_finite() || setup.distance < 0.0 {
            return Err(BattleError::InvalidDistance(setup.distance));
        }

        let mut combatants = [one, two];
        for combatant in combatants.iter_mut() {
            if combatant.speed(setup.terrain) <= 0.0 {
                return Err(BattleError::NoMovement {
                    name: combatant.name.clone(),
                    terrain: setup.terrain,
                });
            }
            combatant.return_to_base_state();
        }

        let first = if dice.coin_flip() { Side::One } else { Side::Two };
        tracing::debug!(
            one = %combatants[0].name,
            two = %combatants[1].name,
            terrain = %setup.terrain,
            distance = setup.distance,
            first = first.number(),
            "battle set up"
        );

        Ok(Battle {
            combatants,
            state: BattleState {
                terrain: setup.terrain,
                distance: setup.distance,
                turn: 0,
                ai_mode: setup.ai_mode,
                active: first,
            },
            rules,
            dice,
            first,
            max_turns: setup.max_turns,
            finished: false,
        })
    }

    // === Accessors ===

    pub fn state(&self) -> &BattleState {
        &self.state
    }

    pub fn rules(&self) -> &BattleConstants {
        &self.rules
    }

    pub fn dice(&self) -> &D {
        &self.dice
    }

    pub fn first_mover(&self) -> Side {
        self.first
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        &self.combatants[side.index()]
    }

    pub fn combatant_mut(&mut self, side: Side) -> &mut Combatant {
        &mut self.combatants[side.index()]
    }

    pub fn into_combatants(self) -> [Combatant; 2] {
        self.combatants
    }

    /// A side is defeated, the turn limit is reached, or `run` completed
    pub fn is_over(&self) -> bool {
        self.finished
            || self.combatants.iter().any(Combatant::is_defeated)
            || self.max_turns.is_some_and(|limit| self.state.turn >= limit)
    }

    /// The side still standing once the other is defeated
    pub fn winner(&self) -> Option<Side> {
        match (
            self.combatants[0].is_defeated(),
            self.combatants[1].is_defeated(),
        ) {
            (false, true) => Some(Side::One),
            (true, false) => Some(Side::Two),
            _ => None,
        }
    }

    // === Turn loop ===

    /// Play one turn for the active side
    ///
    /// `one` and `two` supply intents for their respective sides. The first
    /// turn also narrates the battle start, and the turn that ends the
    /// battle narrates the winner or the draw.
    pub fn play_turn(
        &mut self,
        one: &mut impl IntentSource,
        two: &mut impl IntentSource,
        sink: &mut impl NarrationSink,
    ) -> Result<TurnReport, BattleError> {
        if self.is_over() {
            return Err(BattleError::AlreadyFinished);
        }

        if self.state.turn == 0 {
            self.announce(sink);
        }

        let side = self.state.active;
        let Battle {
            combatants,
            state,
            rules,
            dice,
            ..
        } = self;
        let (active, enemy) = pair_mut(combatants, side);

        let turn = state.turn + 1;
        let distance_before = state.distance;
        let prior_status = active.status;

        tracing::debug!(
            turn,
            side = side.number(),
            zoid = %active.name,
            status = %prior_status,
            distance = state.distance,
            "turn start"
        );
        sink.emit(&format!(
            "--- Turn {}: {} (player {}) ---",
            turn,
            active.name,
            side.number()
        ));
        sink.emit(&active.status_line(state.distance));

        let mut enemy_detected = if enemy.stealth_active() {
            search(active, enemy, rules, dice, sink)
        } else {
            true
        };

        let intent = {
            let ctx = TurnContext {
                side,
                active,
                enemy,
                distance: state.distance,
                enemy_detected,
                state,
                rules,
            };
            match side {
                Side::One => one.next_intent(&ctx),
                Side::Two => two.next_intent(&ctx),
            }
        };

        let mut gate = ActionGate::new(prior_status);
        let mut attack = None;

        for &action in &intent.actions {
            if enemy.is_defeated() {
                break;
            }
            match action {
                Action::Move => {
                    if let Err(refusal) = gate.check_move() {
                        sink.emit(&format!("{} {}.", active.name, refusal));
                        continue;
                    }
                    if gate.moved() {
                        sink.emit(&format!("{} has already moved this turn.", active.name));
                        continue;
                    }
                    let outcome = resolve_maneuver(
                        active,
                        enemy,
                        intent.maneuver,
                        state.distance,
                        enemy_detected,
                        state.terrain,
                        rules,
                        dice,
                        sink,
                    );
                    // Any Move action uses the turn's move, standing still included
                    gate.record_move();
                    state.distance = outcome.distance_after;
                    enemy_detected = outcome.enemy_detected;
                }
                Action::Attack => {
                    if let Err(refusal) = gate.check_attack() {
                        sink.emit(&format!("{} {}.", active.name, refusal));
                        continue;
                    }
                    if gate.attacked() {
                        sink.emit(&format!(
                            "{} has already attacked this turn.",
                            active.name
                        ));
                        continue;
                    }
                    let band = band_for_distance(state.distance, &rules.range);
                    if active.shield_active() {
                        tracing::debug!(zoid = %active.name, "attack skipped: shield up");
                        sink.emit(&format!(
                            "{} cannot attack while its shield is up.",
                            active.name
                        ));
                        continue;
                    }
                    if !active.can_attack_at(band) {
                        tracing::debug!(zoid = %active.name, %band, "attack skipped: no rank");
                        sink.emit(&format!(
                            "{} has no weapon that reaches {} range.",
                            active.name, band
                        ));
                        continue;
                    }
                    let outcome =
                        resolve_attack(active, enemy, band, enemy_detected, rules, dice, sink);
                    gate.record_attack();
                    if outcome.is_defeating_blow() {
                        sink.emit(&format!("{} has been defeated!", enemy.name));
                    }
                    attack = Some(outcome);
                }
                Action::ToggleShield => {
                    if active.has_shield() {
                        active.shield_on = !active.shield_on;
                        let verb = if active.shield_on { "raises" } else { "lowers" };
                        sink.emit(&format!("{} {} its energy shield.", active.name, verb));
                    } else {
                        sink.emit(&format!("{} has no usable shield. No effect.", active.name));
                    }
                }
                Action::ToggleStealth => {
                    if active.has_stealth() {
                        active.stealth_on = !active.stealth_on;
                        let verb = if active.stealth_on {
                            "activates"
                        } else {
                            "drops"
                        };
                        sink.emit(&format!("{} {} its concealment.", active.name, verb));
                    } else {
                        sink.emit(&format!("{} has no concealment. No effect.", active.name));
                    }
                }
            }
        }

        let before_decay = active.status;
        active.status = decay(prior_status, active.status);
        if active.status != before_decay {
            sink.emit(&format!(
                "{} recovers and is now {}.",
                active.name, active.status
            ));
        }

        state.turn = turn;
        state.active = side.opponent();

        let report = TurnReport {
            turn,
            active: side,
            prior_status,
            status_after: active.status,
            distance_before,
            distance_after: state.distance,
            enemy_detected,
            attack,
        };
        if self.is_over() {
            self.announce_result(sink);
        }
        Ok(report)
    }

    /// Play turns until a side is defeated or the turn limit is hit
    ///
    /// The outcome is recorded before both combatants return to their base
    /// state; the battle cannot be continued afterwards.
    pub fn run(
        &mut self,
        one: &mut impl IntentSource,
        two: &mut impl IntentSource,
        sink: &mut impl NarrationSink,
    ) -> Result<BattleOutcome, BattleError> {
        if self.is_over() {
            return Err(BattleError::AlreadyFinished);
        }

        while !self.is_over() {
            self.play_turn(one, two, sink)?;
        }

        let outcome = self.outcome();
        tracing::debug!(
            winner = ?outcome.winner,
            turns = outcome.turns,
            "battle finished"
        );

        for combatant in self.combatants.iter_mut() {
            combatant.return_to_base_state();
        }
        self.finished = true;
        Ok(outcome)
    }

    /// Snapshot of the current result
    pub fn outcome(&self) -> BattleOutcome {
        let winner = self.winner();
        BattleOutcome {
            winner,
            winner_name: winner.map(|side| self.combatant(side).name.clone()),
            turns: self.state.turn,
            final_distance: self.state.distance,
            dents: [self.combatants[0].dents, self.combatants[1].dents],
            statuses: [self.combatants[0].status, self.combatants[1].status],
        }
    }

    fn announce(&self, sink: &mut impl NarrationSink) {
        let [one, two] = &self.combatants;
        sink.emit(&format!(
            "Battle begins on {} terrain at {:.1}m: {} vs {}.",
            self.state.terrain, self.state.distance, one.name, two.name
        ));
        sink.emit(&format!("{} moves first.", self.combatant(self.first).name));
    }

    fn announce_result(&self, sink: &mut impl NarrationSink) {
        match self.winner() {
            Some(side) => sink.emit(&format!("{} wins the battle!", self.combatant(side).name)),
            None => sink.emit(&format!(
                "The battle ends in a draw after {} turns.",
                self.state.turn
            )),
        }
    }
}

/// Split the pair into (active, enemy)
fn pair_mut(combatants: &mut [Combatant; 2], active: Side) -> (&mut Combatant, &mut Combatant) {
    let [one, two] = combatants;
    match active {
        Side::One => (one, two),
        Side::Two => (two, one),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::{RngDice, ScriptedDice};
    use crate::movement::Maneuver;
    use crate::types::{RangeBand, Status, Terrain};

    fn fighter(name: &str) -> Combatant {
        let mut zoid = Combatant::new(name);
        zoid.speeds.land = 300.0;
        zoid.stats.fighting = 5;
        zoid.close_combat = 2;
        zoid.stats.dexterity = 4;
        zoid.defenses.parry = 3;
        zoid.defenses.dodge = 3;
        zoid.defenses.toughness = 6;
        zoid.ranks.melee = 6;
        zoid.ranks.close = 5;
        zoid
    }

    fn battle_at(
        distance: f64,
        one: Combatant,
        two: Combatant,
        dice: ScriptedDice,
    ) -> Battle<ScriptedDice> {
        Battle::new(
            one,
            two,
            BattleSetup::new(Terrain::Land, distance),
            BattleConstants::default(),
            dice,
        )
        .unwrap()
    }

    /// Always closes to melee and swings
    struct Charger;

    impl IntentSource for Charger {
        fn next_intent(&mut self, ctx: &TurnContext<'_>) -> Intent {
            let step = ctx.distance.min(ctx.active.speed(ctx.state.terrain));
            Intent::new().then_move(Maneuver::Close(step)).then_attack()
        }
    }

    #[test]
    fn test_first_mover_from_coin() {
        let battle = battle_at(
            500.0,
            fighter("A"),
            fighter("B"),
            ScriptedDice::new().with_flips([false]),
        );
        assert_eq!(battle.first_mover(), Side::Two);
        assert_eq!(battle.state().active, Side::Two);
        assert_eq!(battle.state().turn, 0);
    }

    #[test]
    fn test_setup_errors() {
        let result = Battle::new(
            fighter("A"),
            fighter("B"),
            BattleSetup::new(Terrain::Land, -1.0),
            BattleConstants::default(),
            ScriptedDice::new(),
        );
        assert!(matches!(result, Err(BattleError::InvalidDistance(_))));

        let result = Battle::new(
            fighter("A"),
            fighter("B"),
            BattleSetup::new(Terrain::Air, 500.0),
            BattleConstants::default(),
            ScriptedDice::new(),
        );
        assert!(matches!(result, Err(BattleError::NoMovement { .. })));
    }

    #[test]
    fn test_zero_rank_attack_skipped_without_dice() {
        let mut one = fighter("Unarmed");
        one.ranks.melee = 0;
        let mut battle = battle_at(0.0, one, fighter("Target"), ScriptedDice::new());
        let mut log: Vec<String> = Vec::new();

        let report = battle
            .play_turn(
                &mut ScriptedIntents::new([Intent::new().then_attack()]),
                &mut ScriptedIntents::default(),
                &mut log,
            )
            .unwrap();

        assert!(report.attack.is_none());
        assert_eq!(battle.dice().rolls_consumed(), 0);
        assert_eq!(battle.combatant(Side::Two).dents, 0);
        assert_eq!(battle.combatant(Side::Two).status, Status::Intact);
        assert!(log.iter().any(|line| line.contains("no weapon")));
    }

    #[test]
    fn test_stunned_recovers_to_dazed() {
        let mut battle = battle_at(400.0, fighter("A"), fighter("B"), ScriptedDice::new());
        battle.combatant_mut(Side::One).status = Status::Stunned;
        let mut log: Vec<String> = Vec::new();
        let mut one = ScriptedIntents::new([
            Intent::new().then_move(Maneuver::Close(100.0)).then_attack(),
            Intent::new().then_move(Maneuver::Close(100.0)).then_attack(),
        ]);
        let mut two = ScriptedIntents::default();

        let report = battle.play_turn(&mut one, &mut two, &mut log).unwrap();
        assert_eq!(report.prior_status, Status::Stunned);
        assert_eq!(report.status_after, Status::Dazed);
        assert!(report.attack.is_none());
        assert!((report.distance_after - 400.0).abs() < f64::EPSILON);
        assert_eq!(battle.dice().rolls_consumed(), 0);

        battle.play_turn(&mut one, &mut two, &mut log).unwrap();

        // Dazed: the move goes through, the attack after it does not
        let report = battle.play_turn(&mut one, &mut two, &mut log).unwrap();
        assert_eq!(report.prior_status, Status::Dazed);
        assert!((report.distance_after - 300.0).abs() < f64::EPSILON);
        assert!(report.attack.is_none());
        assert_eq!(report.status_after, Status::Intact);
        assert!(log.iter().any(|line| line.contains("already moved")));
    }

    #[test]
    fn test_dazed_stand_still_uses_the_move() {
        let mut two = fighter("Ghost");
        two.stealth_rank = 1;
        let mut battle = battle_at(
            300.0,
            fighter("A"),
            two,
            ScriptedDice::new().with_flips([true]).with_rolls([1, 20, 20, 1]),
        );
        battle.combatant_mut(Side::One).status = Status::Dazed;
        battle.combatant_mut(Side::Two).stealth_on = true;
        let mut log: Vec<String> = Vec::new();

        // Turn-start search fails, standing still spots the enemy
        let report = battle
            .play_turn(
                &mut ScriptedIntents::new([Intent::new()
                    .then_move(Maneuver::StandStill)
                    .then_attack()]),
                &mut ScriptedIntents::default(),
                &mut log,
            )
            .unwrap();

        assert!(report.enemy_detected);
        assert!(report.attack.is_none());
        assert_eq!(battle.dice().rolls_consumed(), 2);
        assert_eq!(battle.combatant(Side::Two).dents, 0);
        assert_eq!(battle.combatant(Side::Two).status, Status::Intact);
        assert!(log.iter().any(|line| line.contains("DAZED and already moved")));
    }

    #[test]
    fn test_stunned_may_still_toggle() {
        let mut one = fighter("Liger");
        one.shield_rank = 4;
        one.stealth_rank = 3;
        let mut battle = battle_at(
            400.0,
            one,
            fighter("B"),
            ScriptedDice::new().with_flips([true]),
        );
        battle.combatant_mut(Side::One).status = Status::Stunned;
        let mut log: Vec<String> = Vec::new();

        let report = battle
            .play_turn(
                &mut ScriptedIntents::new([Intent::new()
                    .then_toggle_shield()
                    .then_toggle_stealth()
                    .then_move(Maneuver::Close(100.0))
                    .then_attack()]),
                &mut ScriptedIntents::default(),
                &mut log,
            )
            .unwrap();

        let one = battle.combatant(Side::One);
        assert!(one.shield_on);
        assert!(one.stealth_on);
        assert!((report.distance_after - 400.0).abs() < f64::EPSILON);
        assert!(report.attack.is_none());
        assert_eq!(report.status_after, Status::Dazed);
        assert_eq!(battle.dice().rolls_consumed(), 0);
        assert_eq!(battle.dice().flips_consumed(), 1);
    }

    #[test]
    fn test_dazed_attack_blocks_later_move() {
        let mut battle = battle_at(
            400.0,
            fighter("A"),
            fighter("B"),
            ScriptedDice::new().with_rolls([2]),
        );
        battle.combatant_mut(Side::One).status = Status::Dazed;
        let mut log: Vec<String> = Vec::new();

        let report = battle
            .play_turn(
                &mut ScriptedIntents::new([Intent::new()
                    .then_attack()
                    .then_move(Maneuver::Retreat(200.0))]),
                &mut ScriptedIntents::default(),
                &mut log,
            )
            .unwrap();

        assert!(report.attack.is_some());
        assert!((report.distance_after - 400.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_actions_run_in_given_order() {
        // Attack at close range first, then close to contact
        let mut battle = battle_at(
            400.0,
            fighter("A"),
            fighter("B"),
            ScriptedDice::new().with_rolls([15, 20]),
        );
        let mut log: Vec<String> = Vec::new();

        let report = battle
            .play_turn(
                &mut ScriptedIntents::new([Intent::new()
                    .then_attack()
                    .then_move(Maneuver::Close(300.0))]),
                &mut ScriptedIntents::default(),
                &mut log,
            )
            .unwrap();

        let attack = report.attack.expect("attack resolved");
        assert_eq!(attack.band, RangeBand::Close);
        assert!((report.distance_after - 100.0).abs() < f64::EPSILON);
        assert_eq!(battle.state().active, Side::Two);
        assert_eq!(battle.state().turn, 1);
    }

    #[test]
    fn test_own_shield_blocks_attack() {
        let mut one = fighter("Turtle");
        one.shield_rank = 4;
        let mut battle = battle_at(0.0, one, fighter("B"), ScriptedDice::new());
        let mut log: Vec<String> = Vec::new();

        let report = battle
            .play_turn(
                &mut ScriptedIntents::new([Intent::new().then_toggle_shield().then_attack()]),
                &mut ScriptedIntents::default(),
                &mut log,
            )
            .unwrap();

        assert!(battle.combatant(Side::One).shield_on);
        assert!(report.attack.is_none());
        assert_eq!(battle.dice().rolls_consumed(), 0);
    }

    #[test]
    fn test_toggle_without_capability_is_noop() {
        let mut battle = battle_at(300.0, fighter("A"), fighter("B"), ScriptedDice::new());
        let mut log: Vec<String> = Vec::new();

        battle
            .play_turn(
                &mut ScriptedIntents::new([Intent::new()
                    .then_toggle_shield()
                    .then_toggle_stealth()]),
                &mut ScriptedIntents::default(),
                &mut log,
            )
            .unwrap();

        let one = battle.combatant(Side::One);
        assert!(!one.shield_on);
        assert!(!one.stealth_on);
        assert!(log.iter().any(|line| line.contains("No effect")));
    }

    #[test]
    fn test_hidden_enemy_checked_at_turn_start() {
        let mut two = fighter("Ghost");
        two.stealth_rank = 6;
        let mut battle = battle_at(
            300.0,
            fighter("A"),
            two,
            ScriptedDice::new().with_rolls([1]),
        );
        battle.combatant_mut(Side::Two).stealth_on = true;
        let mut log: Vec<String> = Vec::new();

        let report = battle
            .play_turn(
                &mut ScriptedIntents::default(),
                &mut ScriptedIntents::default(),
                &mut log,
            )
            .unwrap();

        assert!(!report.enemy_detected);
        assert_eq!(battle.dice().rolls_consumed(), 1);
    }

    #[test]
    fn test_no_turns_after_defeat() {
        let mut battle = battle_at(300.0, fighter("A"), fighter("B"), ScriptedDice::new());
        battle.combatant_mut(Side::Two).status = Status::Defeated;
        let mut log: Vec<String> = Vec::new();

        assert!(battle.is_over());
        assert_eq!(battle.winner(), Some(Side::One));
        let result = battle.play_turn(
            &mut ScriptedIntents::default(),
            &mut ScriptedIntents::default(),
            &mut log,
        );
        assert_eq!(result, Err(BattleError::AlreadyFinished));
    }

    #[test]
    fn test_stepping_narrates_start_and_winner() {
        let mut two = fighter("Glass");
        two.defenses.toughness = 0;
        // Attack 10 + 7 vs 13, toughness 1 + 0 vs 6 + 15
        let mut battle = battle_at(
            0.0,
            fighter("A"),
            two,
            ScriptedDice::new().with_flips([true]).with_rolls([10, 1]),
        );
        let mut log: Vec<String> = Vec::new();

        let report = battle
            .play_turn(
                &mut ScriptedIntents::new([Intent::new().then_attack()]),
                &mut ScriptedIntents::default(),
                &mut log,
            )
            .unwrap();

        assert!(report.attack.expect("attack resolved").is_defeating_blow());
        assert!(log[0].starts_with("Battle begins"));
        assert_eq!(log[1], "A moves first.");
        assert_eq!(log.last().map(String::as_str), Some("A wins the battle!"));
        assert!(battle.is_over());
    }

    #[test]
    fn test_stepping_to_turn_limit_narrates_draw() {
        let mut battle = Battle::new(
            fighter("A"),
            fighter("B"),
            BattleSetup::new(Terrain::Land, 800.0).with_max_turns(2),
            BattleConstants::default(),
            ScriptedDice::new(),
        )
        .unwrap();
        let mut one = ScriptedIntents::default();
        let mut two = ScriptedIntents::default();
        let mut log: Vec<String> = Vec::new();

        battle.play_turn(&mut one, &mut two, &mut log).unwrap();
        assert!(!log.iter().any(|line| line.contains("draw")));
        battle.play_turn(&mut one, &mut two, &mut log).unwrap();

        assert_eq!(
            log.iter().filter(|l| l.starts_with("Battle begins")).count(),
            1
        );
        assert_eq!(
            log.last().map(String::as_str),
            Some("The battle ends in a draw after 2 turns.")
        );
    }

    #[test]
    fn test_turn_limit_draw() {
        let mut battle = Battle::new(
            fighter("A"),
            fighter("B"),
            BattleSetup::new(Terrain::Land, 800.0).with_max_turns(4),
            BattleConstants::default(),
            ScriptedDice::new(),
        )
        .unwrap();
        let mut log: Vec<String> = Vec::new();

        let outcome = battle
            .run(
                &mut ScriptedIntents::default(),
                &mut ScriptedIntents::default(),
                &mut log,
            )
            .unwrap();

        assert!(outcome.is_draw());
        assert_eq!(outcome.turns, 4);
        assert!(battle.is_over());
    }

    #[test]
    fn test_run_to_defeat_then_reset() {
        let mut battle = Battle::new(
            fighter("A"),
            fighter("B"),
            BattleSetup::new(Terrain::Land, 600.0).with_max_turns(500),
            BattleConstants::default(),
            RngDice::seeded(11),
        )
        .unwrap();
        let mut log: Vec<String> = Vec::new();

        let outcome = battle.run(&mut Charger, &mut Charger, &mut log).unwrap();

        if let Some(winner) = outcome.winner {
            assert_eq!(outcome.statuses[winner.opponent().index()], Status::Defeated);
        }
        for combatant in battle.into_combatants() {
            assert_eq!(combatant.dents, 0);
            assert_eq!(combatant.status, Status::Intact);
        }
    }

    #[test]
    fn test_seeded_battles_replay_identically() {
        let play = |seed: u64| {
            let mut battle = Battle::new(
                fighter("A"),
                fighter("B"),
                BattleSetup::new(Terrain::Land, 900.0).with_max_turns(300),
                BattleConstants::default(),
                RngDice::seeded(seed),
            )
            .unwrap();
            let mut log: Vec<String> = Vec::new();
            let outcome = battle.run(&mut Charger, &mut Charger, &mut log).unwrap();
            (outcome, log)
        };

        let (first, first_log) = play(42);
        let (second, second_log) = play(42);
        assert_eq!(first, second);
        assert_eq!(first_log, second_log);
    }
}
