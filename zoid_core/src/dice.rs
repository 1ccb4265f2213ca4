//! Dice - the single source of randomness for battles
//!
//! Every roll the engine makes goes through a [`Dice`] value that the caller
//! owns and passes in. Seed it for deterministic replays, or script it in
//! tests to force exact rolls.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

/// Source of dice rolls and coin flips
pub trait Dice {
    /// Roll a twenty-sided die (1..=20)
    fn d20(&mut self) -> i32;

    /// Flip a fair coin
    fn coin_flip(&mut self) -> bool;

    /// Uniform index in `0..n` (returns 0 when `n <= 1`)
    fn pick(&mut self, n: usize) -> usize;
}

impl<D: Dice + ?Sized> Dice for &mut D {
    fn d20(&mut self) -> i32 {
        (**self).d20()
    }

    fn coin_flip(&mut self) -> bool {
        (**self).coin_flip()
    }

    fn pick(&mut self, n: usize) -> usize {
        (**self).pick(n)
    }
}

/// Dice backed by any `rand` RNG
#[derive(Debug, Clone)]
pub struct RngDice<R: Rng> {
    rng: R,
}

impl<R: Rng> RngDice<R> {
    /// Wrap an existing RNG
    pub fn new(rng: R) -> Self {
        RngDice { rng }
    }

    /// Access the wrapped RNG
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}

impl RngDice<ChaCha8Rng> {
    /// Reproducible dice from a seed
    pub fn seeded(seed: u64) -> Self {
        RngDice::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Dice seeded from OS entropy
    pub fn from_entropy() -> Self {
        RngDice::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> Dice for RngDice<R> {
    fn d20(&mut self) -> i32 {
        self.rng.gen_range(1..=20)
    }

    fn coin_flip(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    fn pick(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }
}

/// Queue-backed dice for replays and tests
///
/// Values are consumed in order. Once a queue runs dry the matching
/// fallback is returned (10 for d20, `true` for coins, 0 for picks).
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    rolls: VecDeque<i32>,
    flips: VecDeque<bool>,
    picks: VecDeque<usize>,
    fallback_roll: i32,
    fallback_flip: bool,
    rolls_consumed: usize,
    flips_consumed: usize,
}

impl Default for ScriptedDice {
    fn default() -> Self {
        ScriptedDice {
            rolls: VecDeque::new(),
            flips: VecDeque::new(),
            picks: VecDeque::new(),
            fallback_roll: 10,
            fallback_flip: true,
            rolls_consumed: 0,
            flips_consumed: 0,
        }
    }
}

impl ScriptedDice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue d20 results; each is clamped into 1..=20
    pub fn with_rolls(mut self, rolls: impl IntoIterator<Item = i32>) -> Self {
        self.rolls.extend(rolls.into_iter().map(|r| r.clamp(1, 20)));
        self
    }

    /// Queue coin flip results
    pub fn with_flips(mut self, flips: impl IntoIterator<Item = bool>) -> Self {
        self.flips.extend(flips);
        self
    }

    /// Queue tie-break picks
    pub fn with_picks(mut self, picks: impl IntoIterator<Item = usize>) -> Self {
        self.picks.extend(picks);
        self
    }

    /// Value returned by `d20` once the queue is empty
    pub fn with_fallback_roll(mut self, roll: i32) -> Self {
        self.fallback_roll = roll.clamp(1, 20);
        self
    }

    /// Value returned by `coin_flip` once the queue is empty
    pub fn with_fallback_flip(mut self, flip: bool) -> Self {
        self.fallback_flip = flip;
        self
    }

    /// Number of d20 rolls made so far
    pub fn rolls_consumed(&self) -> usize {
        self.rolls_consumed
    }

    /// Number of coin flips made so far
    pub fn flips_consumed(&self) -> usize {
        self.flips_consumed
    }

    /// Rolls still queued
    pub fn remaining_rolls(&self) -> usize {
        self.rolls.len()
    }
}

impl Dice for ScriptedDice {
    fn d20(&mut self) -> i32 {
        self.rolls_consumed += 1;
        self.rolls.pop_front().unwrap_or(self.fallback_roll)
    }

    fn coin_flip(&mut self) -> bool {
        self.flips_consumed += 1;
        self.flips.pop_front().unwrap_or(self.fallback_flip)
    }

    fn pick(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        self.picks.pop_front().unwrap_or(0).min(n - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_d20_stays_in_range() {
        let mut dice = RngDice::seeded(7);
        for _ in 0..1000 {
            let roll = dice.d20();
            assert!((1..=20).contains(&roll));
        }
    }

    #[test]
    fn test_seeded_dice_replay() {
        let mut a = RngDice::seeded(42);
        let mut b = RngDice::seeded(42);
        let seq_a: Vec<i32> = (0..32).map(|_| a.d20()).collect();
        let seq_b: Vec<i32> = (0..32).map(|_| b.d20()).collect();
        assert_eq!(seq_a, seq_b);
    }

    #[test]
    fn test_pick_bounds() {
        let mut dice = RngDice::seeded(3);
        assert_eq!(dice.pick(0), 0);
        assert_eq!(dice.pick(1), 0);
        for _ in 0..100 {
            assert!(dice.pick(4) < 4);
        }
    }

    #[test]
    fn test_scripted_dice_order_and_fallback() {
        let mut dice = ScriptedDice::new()
            .with_rolls([15, 3])
            .with_flips([false])
            .with_fallback_roll(20);

        assert_eq!(dice.d20(), 15);
        assert_eq!(dice.d20(), 3);
        assert_eq!(dice.d20(), 20);
        assert!(!dice.coin_flip());
        assert!(dice.coin_flip());
        assert_eq!(dice.rolls_consumed(), 3);
        assert_eq!(dice.flips_consumed(), 2);
    }

    #[test]
    fn test_scripted_rolls_are_clamped() {
        let mut dice = ScriptedDice::new().with_rolls([0, 25]);
        assert_eq!(dice.d20(), 1);
        assert_eq!(dice.d20(), 20);
    }

    #[test]
    fn test_scripted_pick_clamped_to_len() {
        let mut dice = ScriptedDice::new().with_picks([5]);
        assert_eq!(dice.pick(3), 2);
    }
}
