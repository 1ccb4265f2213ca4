//! Combat resolution - Apply one attack to a defending combatant

mod resolution;
mod result;

pub use resolution::resolve_attack;
pub use result::{AttackOutcome, AttackRoll, Resolution};
