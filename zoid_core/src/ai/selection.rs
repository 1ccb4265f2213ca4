//! Opponent selection - The AI picks its Zoid before the battle

use crate::combatant::ZoidTemplate;
use crate::dice::Dice;
use crate::types::Personality;

/// Pick the AI's Zoid from `roster`
///
/// Candidates are the templates within one power level of the player's
/// pick, or the whole roster when none are. Defensive pilots prefer a
/// shield, aggressive pilots the highest single attack rank. Ties are
/// broken with the dice. Returns `None` only for an empty roster.
pub fn select_opponent<'a>(
    roster: &'a [ZoidTemplate],
    player_power_level: i32,
    personality: Personality,
    dice: &mut impl Dice,
) -> Option<&'a ZoidTemplate> {
    let mut candidates: Vec<&ZoidTemplate> = roster
        .iter()
        .filter(|z| (z.power_level - player_power_level).abs() <= 1)
        .collect();
    if candidates.is_empty() {
        tracing::debug!(player_power_level, "no zoid within one power level, using full roster");
        candidates = roster.iter().collect();
    }

    let best: Vec<&ZoidTemplate> = match personality {
        Personality::Defensive => {
            let shielded: Vec<&ZoidTemplate> =
                candidates.iter().copied().filter(|z| z.has_shield()).collect();
            if shielded.is_empty() {
                candidates
            } else {
                shielded
            }
        }
        Personality::Aggressive => {
            let top = candidates
                .iter()
                .map(|z| z.best_attack_rank())
                .max()
                .unwrap_or(0);
            candidates
                .into_iter()
                .filter(|z| z.best_attack_rank() == top)
                .collect()
        }
    };

    if best.is_empty() {
        return None;
    }
    let pick = best[dice.pick(best.len()).min(best.len() - 1)];
    tracing::debug!(%personality, zoid = %pick.name, "opponent selected");
    Some(pick)
}
