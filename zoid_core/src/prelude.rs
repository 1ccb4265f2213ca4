//! Prelude module for convenient imports
//!
//! ```rust
//! use zoid_core::prelude::*;
//! ```

// Core types
pub use crate::combatant::{Combatant, ZoidTemplate};
pub use crate::types::{Personality, RangeBand, Side, Status, Terrain};

// Turn engine
pub use crate::battle::{Battle, BattleOutcome, BattleSetup, IntentSource, TurnContext, TurnReport};
pub use crate::intent::{Action, Intent};
pub use crate::movement::Maneuver;

// AI
pub use crate::ai::{select_opponent, AiPilot};

// Randomness & narration
pub use crate::dice::{Dice, RngDice, ScriptedDice};
pub use crate::narration::{NarrationSink, TracingNarrator};

// Config
pub use crate::config::{default_roster, filter_for_terrain, BattleConstants};
