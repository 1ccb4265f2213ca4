//! Turn engine - Battle lifecycle, turn order and intent execution

mod engine;
mod state;

pub use engine::{Battle, IntentSource, ScriptedIntents, TurnContext};
pub use state::{BattleOutcome, BattleSetup, BattleState, TurnReport};

use crate::types::Terrain;
use thiserror::Error;

/// Battle setup and lifecycle errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BattleError {
    #[error("Battle is already over")]
    AlreadyFinished,
    #[error("Invalid starting distance: {0}")]
    InvalidDistance(f64),
    #[error("{name} cannot move on {terrain} terrain")]
    NoMovement { name: String, terrain: Terrain },
}
