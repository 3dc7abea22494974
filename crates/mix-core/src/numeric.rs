use crate::CoreError;

/// Floating point type used throughout the engine
pub type Real = f64;

#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, CoreError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(CoreError::NonPositive { what, value: v })
    }
}

/// Inclusive range check.
pub fn ensure_in_range(v: Real, min: Real, max: Real, what: &'static str) -> Result<Real, CoreError> {
    let v = ensure_finite(v, what)?;
    if v < min || v > max {
        return Err(CoreError::OutOfRange {
            what,
            value: v,
            min,
            max,
        });
    }
    Ok(v)
}

/// Round to a fixed number of decimal places.
///
/// Works on the exact binary value, so 15.775 (stored just below) becomes
/// 15.77. Exact halves go to the even neighbour.
pub fn round_to(v: Real, decimals: u32) -> Real {
    format!("{v:.prec$}", prec = decimals as usize)
        .parse()
        .unwrap_or(v)
}

/// Round to the nearest whole unit, halves to even.
pub fn round_whole(v: Real) -> Real {
    v.round_ties_even()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn rounding_is_idempotent(v in -1.0e4_f64..1.0e4, decimals in 0_u32..4) {
            let once = round_to(v, decimals);
            prop_assert_eq!(round_to(once, decimals), once);
        }

        #[test]
        fn rounding_stays_within_half_step(v in -1.0e4_f64..1.0e4, decimals in 0_u32..4) {
            let step = 10f64.powi(-(decimals as i32));
            prop_assert!((round_to(v, decimals) - v).abs() <= 0.5 * step + 1e-9);
        }
    }
}
