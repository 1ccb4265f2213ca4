//! Range banding - distance to band and back

use crate::combatant::Combatant;
use crate::config::RangeConstants;
use crate::types::RangeBand;

/// Band for a distance using the standard thresholds (500 / 1000)
///
/// Melee only at exactly 0, Close up to 500, Mid up to 1000, Long beyond.
pub fn range_band(distance: f64) -> RangeBand {
    band_for_distance(distance, &RangeConstants::default())
}

/// Band for a distance under the given thresholds
pub fn band_for_distance(distance: f64, rules: &RangeConstants) -> RangeBand {
    if distance <= 0.0 {
        RangeBand::Melee
    } else if distance <= rules.close_max {
        RangeBand::Close
    } else if distance <= rules.mid_max {
        RangeBand::Mid
    } else {
        RangeBand::Long
    }
}

/// Representative distance for a band (AI target distance)
pub fn band_distance(band: RangeBand, rules: &RangeConstants) -> f64 {
    let anchors = &rules.band_distances;
    match band {
        RangeBand::Melee => anchors.melee,
        RangeBand::Close => anchors.close,
        RangeBand::Mid => anchors.mid,
        RangeBand::Long => anchors.long,
    }
}

/// Whether the combatant has a non-zero rank at the band this distance falls in
pub fn can_attack_from(combatant: &Combatant, distance: f64, rules: &RangeConstants) -> bool {
    combatant.can_attack_at(band_for_distance(distance, rules))
}
