//! Water-cement ratio selection.

use mix_core::units::{Strength, in_mpa};

use crate::category::CementBand;

/// (upper bound on target strength [N/mm²], w/c) tiers, checked in order.
/// Strengths above the last bound use the band's floor ratio.
const HIGH_BAND: [(f64, f64); 4] = [(30.0, 0.50), (40.0, 0.45), (50.0, 0.40), (60.0, 0.35)];
const HIGH_FLOOR: f64 = 0.30;

const MID_BAND: [(f64, f64); 3] = [(25.0, 0.50), (35.0, 0.45), (45.0, 0.40)];
const MID_FLOOR: f64 = 0.35;

const BASE_BAND: [(f64, f64); 3] = [(20.0, 0.55), (30.0, 0.50), (40.0, 0.45)];
const BASE_FLOOR: f64 = 0.40;

impl CementBand {
    /// Strength-derived w/c before the durability cap.
    pub fn ratio_for(self, target_mpa: f64) -> f64 {
        let (tiers, floor): (&[(f64, f64)], f64) = match self {
            CementBand::High => (&HIGH_BAND, HIGH_FLOOR),
            CementBand::Mid => (&MID_BAND, MID_FLOOR),
            CementBand::Base => (&BASE_BAND, BASE_FLOOR),
        };
        tiers
            .iter()
            .find(|(limit, _)| target_mpa <= *limit)
            .map(|(_, wc)| *wc)
            .unwrap_or(floor)
    }
}

/// Pick w/c from the cement band, then cap it at the exposure maximum.
pub fn select_wc_ratio(target: Strength, band: CementBand, max_wc_ratio: f64) -> f64 {
    let from_strength = band.ratio_for(in_mpa(target));
    let wc_ratio = from_strength.min(max_wc_ratio);

    tracing::debug!(
        ?band,
        from_strength,
        max_wc_ratio,
        wc_ratio,
        "Water-cement ratio"
    );

    wc_ratio
}
