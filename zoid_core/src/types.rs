//! Core enums shared by every part of the engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Terrain a battle is fought on; selects which movement speed applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Terrain {
    Land,
    Water,
    Air,
}

impl Terrain {
    /// Get all terrains
    pub fn all() -> &'static [Terrain] {
        &[Terrain::Land, Terrain::Water, Terrain::Air]
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Terrain::Land => "land",
            Terrain::Water => "water",
            Terrain::Air => "air",
        };
        f.write_str(name)
    }
}

/// Distance band between the two combatants
///
/// Ordered from nearest to farthest, so `Melee < Close < Mid < Long`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeBand {
    Melee,
    Close,
    Mid,
    Long,
}

impl RangeBand {
    /// All bands, nearest first
    pub fn all() -> &'static [RangeBand] {
        &[RangeBand::Melee, RangeBand::Close, RangeBand::Mid, RangeBand::Long]
    }
}

impl fmt::Display for RangeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RangeBand::Melee => "melee",
            RangeBand::Close => "close",
            RangeBand::Mid => "mid",
            RangeBand::Long => "long",
        };
        f.write_str(name)
    }
}

/// Condition of a combatant during a battle
///
/// Ordered by severity: `Intact < Dazed < Stunned < Defeated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Intact,
    Dazed,
    Stunned,
    Defeated,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Intact => "intact",
            Status::Dazed => "dazed",
            Status::Stunned => "stunned",
            Status::Defeated => "defeated",
        };
        f.write_str(name)
    }
}

/// Behavioral policy of an AI pilot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Personality {
    Aggressive,
    Defensive,
}

impl fmt::Display for Personality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Personality::Aggressive => f.write_str("Aggressive"),
            Personality::Defensive => f.write_str("Defensive"),
        }
    }
}

/// One of the two combatant slots in a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    One,
    Two,
}

impl Side {
    /// Array index of this slot
    pub fn index(self) -> usize {
        match self {
            Side::One => 0,
            Side::Two => 1,
        }
    }

    /// The other slot
    pub fn opponent(self) -> Side {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }

    /// Player number as shown to users (1 or 2)
    pub fn number(self) -> u8 {
        match self {
            Side::One => 1,
            Side::Two => 2,
        }
    }
}
