//! Battle series - Repeated AI-vs-AI battles between the same two Zoids

use serde::Serialize;
use zoid_core::{
    AiPilot, Battle, BattleConstants, BattleError, BattleOutcome, BattleSetup, Combatant,
    NarrationSink, RngDice, Side,
};

/// Aggregate results of a battle series
#[derive(Debug, Clone, Serialize)]
pub struct BattleSeries {
    pub names: [String; 2],
    pub battles: u32,
    /// Wins per side, indexed by `Side::index`
    pub wins: [u32; 2],
    pub draws: u32,
    pub total_turns: u64,
    pub seed: u64,
    pub outcomes: Vec<BattleOutcome>,
}

impl BattleSeries {
    /// Run `battles` battles, seeding battle `i` with `seed + i`
    ///
    /// The same two combatants are reused; each battle hands them back in
    /// their base state.
    #[allow(clippy::too_many_arguments)]
    pub fn run(
        one: Combatant,
        two: Combatant,
        pilots: [AiPilot; 2],
        setup: &BattleSetup,
        rules: &BattleConstants,
        battles: u32,
        seed: u64,
        sink: &mut impl NarrationSink,
    ) -> Result<Self, BattleError> {
        let mut result = BattleSeries {
            names: [one.name.clone(), two.name.clone()],
            battles: 0,
            wins: [0, 0],
            draws: 0,
            total_turns: 0,
            seed,
            outcomes: Vec::with_capacity(battles as usize),
        };
        let [mut pilot_one, mut pilot_two] = pilots;
        let mut pair = [one, two];

        for index in 0..battles {
            let [one, two] = pair;
            let dice = RngDice::seeded(seed.wrapping_add(u64::from(index)));
            let mut battle = Battle::new(one, two, setup.clone(), rules.clone(), dice)?;
            let outcome = battle.run(&mut pilot_one, &mut pilot_two, sink)?;

            result.battles += 1;
            result.total_turns += u64::from(outcome.turns);
            match outcome.winner {
                Some(side) => result.wins[side.index()] += 1,
                None => result.draws += 1,
            }
            tracing::debug!(battle = index + 1, summary = %outcome.summary(), "battle complete");
            result.outcomes.push(outcome);

            pair = battle.into_combatants();
        }

        Ok(result)
    }

    /// Average battle length in turns
    pub fn avg_turns(&self) -> f64 {
        if self.battles > 0 {
            self.total_turns as f64 / self.battles as f64
        } else {
            0.0
        }
    }

    /// Share of battles won by a side, in percent
    pub fn win_rate(&self, side: Side) -> f64 {
        if self.battles > 0 {
            self.wins[side.index()] as f64 / self.battles as f64 * 100.0
        } else {
            0.0
        }
    }

    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            format!("Battles: {} (seed {})", self.battles, self.seed),
            format!(
                "{}: {} wins ({:.1}%)",
                self.names[0],
                self.wins[0],
                self.win_rate(Side::One)
            ),
            format!(
                "{}: {} wins ({:.1}%)",
                self.names[1],
                self.wins[1],
                self.win_rate(Side::Two)
            ),
            format!("Draws: {}", self.draws),
            format!("Average turns: {:.1}", self.avg_turns()),
        ]
    }
}
