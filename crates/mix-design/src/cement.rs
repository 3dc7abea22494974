//! Cement content and the durability minimum.

use mix_core::units::{Content, in_kg_per_m3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CementCorrection {
    /// Unrounded cement content [kg/m³]
    pub cement: Content,
    /// w/c after correction; lower than the selected ratio when clamped
    pub wc_ratio: f64,
    /// True when the exposure minimum governed
    pub clamped: bool,
}

impl CementCorrection {
    pub fn cement_kg_m3(&self) -> f64 {
        in_kg_per_m3(self.cement)
    }
}

/// Cement = water / (w/c), raised to `min_cement` if below it. When raised,
/// the w/c ratio is recomputed from the new cement content.
pub fn correct_cement_content(water: Content, wc_ratio: f64, min_cement: Content) -> CementCorrection {
    let cement = water / wc_ratio;

    let correction = if cement < min_cement {
        CementCorrection {
            cement: min_cement,
            wc_ratio: in_kg_per_m3(water) / in_kg_per_m3(min_cement),
            clamped: true,
        }
    } else {
        CementCorrection {
            cement,
            wc_ratio,
            clamped: false,
        }
    };

    tracing::debug!(
        water_kg_m3 = in_kg_per_m3(water),
        selected_wc = wc_ratio,
        cement_kg_m3 = correction.cement_kg_m3(),
        corrected_wc = correction.wc_ratio,
        clamped = correction.clamped,
        "Cement content"
    );

    correction
}

#[cfg(test)]
mod tests {
    use super::*;
    use mix_core::units::kg_per_m3;

    #[test]
    fn unclamped_cement() {
        let c = correct_cement_content(kg_per_m3(192.0), 0.45, kg_per_m3(240.0));
        assert!(!c.clamped);
        assert!((c.cement_kg_m3() - 426.666_666).abs() < 1e-3);
        assert_eq!(c.wc_ratio, 0.45);
    }

    #[test]
    fn minimum_cement_lowers_ratio() {
        // 134 / 0.45 = 297.8 < 320
        let c = correct_cement_content(kg_per_m3(134.0), 0.45, kg_per_m3(320.0));
        assert!(c.clamped);
        assert!((c.cement_kg_m3() - 320.0).abs() < 1e-9);
        assert!((c.wc_ratio - 134.0 / 320.0).abs() < 1e-12);
        assert!(c.wc_ratio < 0.45);
    }

    #[test]
    fn exact_minimum_is_not_clamped() {
        let c = correct_cement_content(kg_per_m3(144.0), 0.45, kg_per_m3(320.0));
        assert!(!c.clamped);
    }
}
