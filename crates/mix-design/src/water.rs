//! Mixing water content.
//!
//! ```text
//! W50   = base(size) - shape_reduction          at 50 mm slump
//! Ws    = W50 * (1 + ((slump - 50) / 25) * 0.03)
//! W     = round(Ws * (1 - admixture_reduction))
//! ```
//!
//! This is the only stage that rounds; downstream stages consume the whole
//! kilogram value and keep full precision themselves.

use mix_catalog::AggregateSize;
use mix_core::numeric::round_whole;
use mix_core::units::{Content, Length, in_mm, kg_per_m3};

use crate::category::{AdmixtureKind, AggregateShape};

/// Slump at which the base water table applies [mm].
pub const REFERENCE_SLUMP_MM: f64 = 50.0;

/// Water changes by this fraction per [`SLUMP_STEP_MM`] of slump.
pub const WATER_PER_SLUMP_STEP: f64 = 0.03;
pub const SLUMP_STEP_MM: f64 = 25.0;

/// Water demand at the reference slump for angular aggregate [kg/m³].
pub fn base_water_kg_m3(size: AggregateSize) -> f64 {
    match size {
        AggregateSize::Mm10 => 208.0,
        AggregateSize::Mm20 => 186.0,
        AggregateSize::Mm40 => 165.0,
    }
}

/// Water saved by smoother particle shapes [kg/m³].
pub fn shape_reduction_kg_m3(shape: AggregateShape) -> f64 {
    match shape {
        AggregateShape::CrushedAngular => 0.0,
        AggregateShape::SubAngular => 10.0,
        AggregateShape::GravelWithCrushed => 15.0,
        AggregateShape::Rounded => 20.0,
    }
}

/// Multiplier applied for slumps away from the reference, linear in slump.
pub fn slump_factor(slump: Length) -> f64 {
    1.0 + ((in_mm(slump) - REFERENCE_SLUMP_MM) / SLUMP_STEP_MM) * WATER_PER_SLUMP_STEP
}

pub fn admixture_reduction(admixture: Option<AdmixtureKind>) -> f64 {
    admixture.map(AdmixtureKind::water_reduction).unwrap_or(0.0)
}

pub fn estimate_water_content(
    size: AggregateSize,
    slump: Length,
    shape: AggregateShape,
    admixture: Option<AdmixtureKind>,
) -> Content {
    let at_reference = base_water_kg_m3(size) - shape_reduction_kg_m3(shape);
    let for_slump = at_reference * slump_factor(slump);
    let reduction = admixture_reduction(admixture);
    let water = round_whole(for_slump * (1.0 - reduction));

    tracing::debug!(
        size_mm = size.mm(),
        slump_mm = in_mm(slump),
        ?shape,
        ?admixture,
        at_reference,
        for_slump,
        reduction,
        water,
        "Water content"
    );

    kg_per_m3(water)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mix_core::units::{in_kg_per_m3, mm};

    fn water(size: AggregateSize, slump: f64, shape: AggregateShape, admix: Option<AdmixtureKind>) -> f64 {
        in_kg_per_m3(estimate_water_content(size, mm(slump), shape, admix))
    }

    #[test]
    fn reference_slump_returns_table_value() {
        assert_eq!(water(AggregateSize::Mm10, 50.0, AggregateShape::CrushedAngular, None), 208.0);
        assert_eq!(water(AggregateSize::Mm20, 50.0, AggregateShape::CrushedAngular, None), 186.0);
        assert_eq!(water(AggregateSize::Mm40, 50.0, AggregateShape::CrushedAngular, None), 165.0);
    }

    #[test]
    fn slump_adjustment_is_three_percent_per_25mm() {
        // 186 * 1.03 = 191.58
        assert_eq!(water(AggregateSize::Mm20, 75.0, AggregateShape::CrushedAngular, None), 192.0);
        // 186 * 0.97 = 180.42
        assert_eq!(water(AggregateSize::Mm20, 25.0, AggregateShape::CrushedAngular, None), 180.0);
        // 186 * 1.12 = 208.32
        assert_eq!(water(AggregateSize::Mm20, 150.0, AggregateShape::CrushedAngular, None), 208.0);
    }

    #[test]
    fn shape_reduction_applies_before_slump() {
        // (186 - 20) * 1.03 = 170.98
        assert_eq!(water(AggregateSize::Mm20, 75.0, AggregateShape::Rounded, None), 171.0);
        // (186 - 10) * 1.03 = 181.28
        assert_eq!(water(AggregateSize::Mm20, 75.0, AggregateShape::SubAngular, None), 181.0);
    }

    #[test]
    fn exact_half_kilogram_rounds_to_even() {
        // (165 - 15) * 1.03 = 154.5
        assert_eq!(
            water(AggregateSize::Mm40, 75.0, AggregateShape::GravelWithCrushed, None),
            154.0
        );
    }

    #[test]
    fn admixture_reduces_water() {
        // 191.58 * 0.77 = 147.5166
        assert_eq!(
            water(
                AggregateSize::Mm20,
                75.0,
                AggregateShape::CrushedAngular,
                Some(AdmixtureKind::Superplasticizer)
            ),
            148.0
        );
        // 191.58 * 0.70 = 134.106
        assert_eq!(
            water(
                AggregateSize::Mm20,
                75.0,
                AggregateShape::CrushedAngular,
                Some(AdmixtureKind::PceSuperplasticizer)
            ),
            134.0
        );
    }

    #[test]
    fn slump_factor_values() {
        assert!((slump_factor(mm(50.0)) - 1.0).abs() < 1e-12);
        assert!((slump_factor(mm(100.0)) - 1.06).abs() < 1e-12);
        assert!((slump_factor(mm(25.0)) - 0.97).abs() < 1e-12);
    }
}
