//! Target mean strength.
//!
//! ```text
//! S     = S_grade + 1.0     (Fair site control)
//! f'ck  = max(fck + 1.65 S, fck + X)
//! ```

use mix_catalog::GradeSpec;
use mix_core::units::{Strength, in_mpa, mpa};

use crate::category::SiteControl;

/// Statistical factor for 5% defectives.
pub const TOLERANCE_FACTOR: f64 = 1.65;

/// Standard deviation allowance added for fair site control [N/mm²].
pub const FAIR_CONTROL_ALLOWANCE_MPA: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetStrength {
    pub strength: Strength,
    /// Standard deviation after the site control allowance
    pub std_dev: Strength,
}

impl TargetStrength {
    pub fn strength_mpa(&self) -> f64 {
        in_mpa(self.strength)
    }

    pub fn std_dev_mpa(&self) -> f64 {
        in_mpa(self.std_dev)
    }
}

pub fn target_strength(grade: &GradeSpec, site_control: SiteControl) -> TargetStrength {
    let allowance = match site_control {
        SiteControl::Good => 0.0,
        SiteControl::Fair => FAIR_CONTROL_ALLOWANCE_MPA,
    };
    let std_dev = grade.std_dev_mpa + allowance;

    let statistical = grade.fck_mpa + TOLERANCE_FACTOR * std_dev;
    let margin_floor = grade.fck_mpa + grade.margin_mpa;
    let target = statistical.max(margin_floor);

    tracing::debug!(
        grade = grade.name,
        std_dev,
        statistical,
        margin_floor,
        target,
        "Target strength"
    );

    TargetStrength {
        strength: mpa(target),
        std_dev: mpa(std_dev),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mix_catalog::{grade_catalog, lookup_grade};

    #[test]
    fn m25_good_control() {
        let t = target_strength(lookup_grade("M25").unwrap(), SiteControl::Good);
        assert!((t.strength_mpa() - 31.6).abs() < 1e-9);
        assert!((t.std_dev_mpa() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn m25_fair_control() {
        let t = target_strength(lookup_grade("M25").unwrap(), SiteControl::Fair);
        assert!((t.std_dev_mpa() - 5.0).abs() < 1e-9);
        assert!((t.strength_mpa() - 33.25).abs() < 1e-9);
    }

    #[test]
    fn margin_floor_governs_low_grades() {
        // M10: 10 + 1.65 * 3.5 = 15.775 > 10 + 5.0, statistical still wins
        let t = target_strength(lookup_grade("M10").unwrap(), SiteControl::Good);
        assert!((t.strength_mpa() - 15.775).abs() < 1e-9);

        // Floor wins when the margin exceeds 1.65 S
        let custom = GradeSpec {
            name: "test",
            fck_mpa: 20.0,
            std_dev_mpa: 2.0,
            margin_mpa: 5.5,
        };
        let t = target_strength(&custom, SiteControl::Good);
        assert!((t.strength_mpa() - 25.5).abs() < 1e-9);
    }

    #[test]
    fn target_always_exceeds_fck() {
        for grade in grade_catalog() {
            for control in [SiteControl::Good, SiteControl::Fair] {
                let t = target_strength(grade, control);
                assert!(t.strength_mpa() >= grade.fck_mpa + grade.margin_mpa);
            }
        }
    }
}
