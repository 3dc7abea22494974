//! Coarse and fine aggregate proportioning by volume.

use mix_catalog::{AggregateSize, FineAggregateZone};

use crate::category::PlacingMethod;

/// w/c the base coarse volumes are tabulated for.
pub const REFERENCE_WC_RATIO: f64 = 0.50;

/// Coarse volume fraction gained per `WC_STEP` decrease in w/c.
pub const VOLUME_PER_WC_STEP: f64 = 0.01;
pub const WC_STEP: f64 = 0.05;

/// Multiplicative cut to coarse volume for pumped concrete.
pub const PUMP_REDUCTION: f64 = 0.10;

/// Coarse aggregate volume per unit total aggregate volume at w/c 0.50,
/// indexed by zone I..IV.
const BASE_COARSE_VOLUME: [[f64; 4]; 3] = [
    [0.48, 0.50, 0.52, 0.54],
    [0.60, 0.62, 0.64, 0.66],
    [0.69, 0.71, 0.72, 0.73],
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateVolumes {
    pub coarse: f64,
    pub fine: f64,
}

pub fn base_coarse_volume(size: AggregateSize, zone: FineAggregateZone) -> f64 {
    let row = match size {
        AggregateSize::Mm10 => 0,
        AggregateSize::Mm20 => 1,
        AggregateSize::Mm40 => 2,
    };
    BASE_COARSE_VOLUME[row][zone.index()]
}

pub fn wc_adjustment(wc_ratio: f64) -> f64 {
    ((REFERENCE_WC_RATIO - wc_ratio) / WC_STEP) * VOLUME_PER_WC_STEP
}

pub fn proportion_aggregates(
    size: AggregateSize,
    zone: FineAggregateZone,
    wc_ratio: f64,
    placing: PlacingMethod,
) -> AggregateVolumes {
    let base = base_coarse_volume(size, zone);
    let adjusted = base + wc_adjustment(wc_ratio);
    let coarse = match placing {
        PlacingMethod::Pumped => adjusted * (1.0 - PUMP_REDUCTION),
        PlacingMethod::NonPumped => adjusted,
    };
    let fine = 1.0 - coarse;

    tracing::debug!(
        size_mm = size.mm(),
        zone = zone.label(),
        wc_ratio,
        ?placing,
        base,
        coarse,
        fine,
        "Aggregate proportions"
    );

    AggregateVolumes { coarse, fine }
}
