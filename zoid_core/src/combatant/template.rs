//! ZoidTemplate - Static roster data for one Zoid
//!
//! Mirrors the JSON shape of the roster file: capitalized keys, a flat
//! `Powers` list where each entry names its kind in `Type`.

use crate::types::Terrain;
use serde::{Deserialize, Serialize};

/// Primary stats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Stats {
    pub fighting: i32,
    pub strength: i32,
    pub dexterity: i32,
    pub agility: i32,
    pub awareness: i32,
}

/// Passive defenses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Defenses {
    pub toughness: i32,
    pub parry: i32,
    pub dodge: i32,
}

/// Movement speed per terrain, in meters per turn
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MovementSpeeds {
    pub land: f64,
    pub water: f64,
    pub air: f64,
}

impl MovementSpeeds {
    /// Speed on the given terrain
    pub fn on(&self, terrain: Terrain) -> f64 {
        match terrain {
            Terrain::Land => self.land,
            Terrain::Water => self.water,
            Terrain::Air => self.air,
        }
    }
}

/// A single power entry from the roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Power {
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub senses: Vec<String>,
}

impl Power {
    pub fn new(kind: &str, rank: i32) -> Self {
        Power {
            kind: kind.to_string(),
            rank: Some(rank),
            damage: None,
            senses: Vec::new(),
        }
    }

    /// Effective rank: `Rank` when present, otherwise `Damage`
    pub fn effective_rank(&self) -> Option<i32> {
        self.rank.or(self.damage)
    }
}

/// Power type names used by the roster file
pub mod power_kind {
    pub const MELEE: &str = "Melee";
    pub const CLOSE_RANGE: &str = "Close-Range";
    pub const MID_RANGE: &str = "Mid-Range";
    pub const LONG_RANGE: &str = "Long-Range";
    pub const SHIELD: &str = "E-Shield";
    pub const CONCEALMENT: &str = "Concealment";
    pub const CLOSE_COMBAT: &str = "Close Combat";
    pub const RANGED_COMBAT: &str = "Ranged Combat";
    pub const ARMOR: &str = "Armor";

    /// Kinds that carry an attack rank for a range band
    pub const BAND_ATTACKS: [&str; 4] = [MELEE, CLOSE_RANGE, MID_RANGE, LONG_RANGE];
}

/// Roster entry for one Zoid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoidTemplate {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Stats", default)]
    pub stats: Stats,
    #[serde(rename = "Defenses", default)]
    pub defenses: Defenses,
    #[serde(rename = "Movement", default)]
    pub movement: MovementSpeeds,
    #[serde(rename = "Powers", default)]
    pub powers: Vec<Power>,
    #[serde(rename = "Power Level", default)]
    pub power_level: i32,
    #[serde(rename = "Cost", default)]
    pub cost: f64,
}

impl ZoidTemplate {
    /// Rank of the first power of the given kind (0 if absent)
    pub fn power_rank(&self, kind: &str) -> i32 {
        self.powers
            .iter()
            .find(|p| p.kind == kind)
            .and_then(Power::effective_rank)
            .unwrap_or(0)
    }

    /// Whether this Zoid carries a working energy shield
    pub fn has_shield(&self) -> bool {
        self.power_rank(power_kind::SHIELD) > 0
    }

    /// Highest rank among the four band attacks
    pub fn best_attack_rank(&self) -> i32 {
        power_kind::BAND_ATTACKS
            .iter()
            .map(|kind| self.power_rank(kind))
            .max()
            .unwrap_or(0)
    }

    /// Whether this Zoid can move at all on the terrain
    pub fn fights_on(&self, terrain: Terrain) -> bool {
        self.movement.on(terrain) > 0.0
    }
}
