//! Range & movement - Distance banding and maneuver resolution

mod maneuver;
mod range;

pub use maneuver::{
    max_circle_angle, max_circle_angle_with, resolve_maneuver, Maneuver, MovementOutcome,
};
pub(crate) use maneuver::search;
pub use range::{band_distance, band_for_distance, can_attack_from, range_band};
