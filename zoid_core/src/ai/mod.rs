//! AI pilots - Personality-driven intents and opponent selection

mod decision;
mod selection;

pub use decision::{approach, decide_intent, plan_maneuver, target_distance, Situation};
pub use selection::select_opponent;

use crate::battle::{IntentSource, TurnContext};
use crate::dice::Dice;
use crate::intent::Intent;
use crate::types::Personality;

/// An AI pilot with a personality fixed for the whole battle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiPilot {
    personality: Personality,
}

impl AiPilot {
    pub fn new(personality: Personality) -> Self {
        AiPilot { personality }
    }

    /// Roll the personality once
    pub fn random(dice: &mut impl Dice) -> Self {
        let personality = if dice.coin_flip() {
            Personality::Aggressive
        } else {
            Personality::Defensive
        };
        AiPilot::new(personality)
    }

    pub fn personality(&self) -> Personality {
        self.personality
    }
}

impl IntentSource for AiPilot {
    fn next_intent(&mut self, ctx: &TurnContext<'_>) -> Intent {
        let situation = Situation {
            me: ctx.active,
            enemy: ctx.enemy,
            distance: ctx.distance,
            enemy_detected: ctx.enemy_detected,
            terrain: ctx.state.terrain,
        };
        let intent = decide_intent(&situation, self.personality, ctx.rules);
        tracing::trace!(
            zoid = %ctx.active.name,
            personality = %self.personality,
            actions = ?intent.actions,
            maneuver = ?intent.maneuver,
            "ai intent"
        );
        intent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::{Battle, BattleSetup};
    use crate::combatant::Combatant;
    use crate::config::BattleConstants;
    use crate::dice::{RngDice, ScriptedDice};
    use crate::types::Terrain;

    fn zoid(name: &str) -> Combatant {
        let mut zoid = Combatant::new(name);
        zoid.speeds.land = 350.0;
        zoid.stats.fighting = 5;
        zoid.stats.dexterity = 5;
        zoid.stats.awareness = 4;
        zoid.defenses.parry = 4;
        zoid.defenses.dodge = 4;
        zoid.defenses.toughness = 5;
        zoid.ranks.melee = 6;
        zoid.ranks.close = 5;
        zoid
    }

    #[test]
    fn test_random_personality() {
        let mut dice = ScriptedDice::new().with_flips([true, false]);
        assert_eq!(AiPilot::random(&mut dice).personality(), Personality::Aggressive);
        assert_eq!(AiPilot::random(&mut dice).personality(), Personality::Defensive);
    }

    #[test]
    fn test_ai_battle_finishes() {
        let mut shielded = zoid("Liger");
        shielded.shield_rank = 5;
        let mut hidden = zoid("Helcat");
        hidden.stealth_rank = 4;

        let mut battle = Battle::new(
            shielded,
            hidden,
            BattleSetup::new(Terrain::Land, 1200.0)
                .with_ai_mode(true)
                .with_max_turns(400),
            BattleConstants::default(),
            RngDice::seeded(7),
        )
        .unwrap();
        let mut log: Vec<String> = Vec::new();

        let outcome = battle
            .run(
                &mut AiPilot::new(Personality::Aggressive),
                &mut AiPilot::new(Personality::Defensive),
                &mut log,
            )
            .unwrap();

        assert!(outcome.turns > 0);
        assert!(outcome.turns <= 400);
        assert!(!log.is_empty());
    }
}
