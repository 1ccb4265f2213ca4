//! Defense system - Concealment, Energy shield, Toughness

mod concealment;
mod shield;
mod toughness;

pub use concealment::{
    concealment_gate, detect, detection_dc, spot, ConcealmentGate, DetectionCheck,
};
pub use shield::{in_shield_arc, relative_bearing, shield_check, shield_intercepts, ShieldCheck};
pub use toughness::{toughness_check, HitSeverity, ToughnessCheck};
