//! zoid_core - Turn-based combat engine for one-on-one Zoid battles
//!
//! This library provides:
//! - Combatant: Roster template turned into mutable battle state
//! - Range & movement: Distance bands, maneuvers, circling limits
//! - Attack resolution: Concealment, attack roll, shield arc, toughness tiers
//! - Status lattice: Escalation by damage, decay by turn, action gates
//! - Battle: The turn engine, driven by pluggable intent sources
//! - AI: Personality-driven pilots and opponent selection

pub mod ai;
pub mod battle;
pub mod combat;
pub mod combatant;
pub mod config;
pub mod defense;
pub mod dice;
pub mod intent;
pub mod movement;
pub mod narration;
pub mod prelude;
pub mod status;
pub mod types;

// Re-export core types for convenience
pub use ai::{select_opponent, AiPilot};
pub use battle::{
    Battle, BattleError, BattleOutcome, BattleSetup, BattleState, IntentSource, ScriptedIntents,
    TurnContext, TurnReport,
};
pub use combat::{resolve_attack, AttackOutcome};
pub use combatant::{AttackRanks, Combatant, ZoidTemplate};
pub use config::{default_roster, filter_for_terrain, BattleConstants, ConfigError};
pub use dice::{Dice, RngDice, ScriptedDice};
pub use intent::{Action, Intent};
pub use movement::{range_band, Maneuver};
pub use narration::{NarrationSink, SilentNarrator, TracingNarrator};
pub use types::{Personality, RangeBand, Side, Status, Terrain};
