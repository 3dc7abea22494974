//! Result records handed back to frontends.

use mix_core::numeric::{round_to, round_whole};
use mix_core::units::in_kg_per_m3;
use serde::{Deserialize, Serialize};

use crate::error::{DesignError, DesignResult, ErrorKind};
use crate::state::MixState;

/// Derived mix quantities at reporting precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixReport {
    pub grade: String,
    pub exposure: String,
    pub target_strength_mpa: f64,
    pub std_dev_mpa: f64,
    pub wc_ratio: f64,
    pub water_content_kg_m3: f64,
    pub cement_content_kg_m3: f64,
    /// The exposure minimum cement content governed
    pub min_cement_governs: bool,
    /// Fraction of total aggregate volume
    pub vol_coarse: f64,
    pub vol_fine: f64,
    /// Fraction of concrete volume
    pub air_content: f64,
}

impl MixReport {
    pub fn from_state(state: &MixState) -> DesignResult<Self> {
        let inputs = state.inputs();
        let target = state.target_strength()?;
        let water = state.water_content()?;
        let cement = state.cement()?;
        let volumes = state.aggregates()?;
        let air = state.air_content()?;

        // Fine is the complement of the rounded coarse so the pair still sums to one.
        let vol_coarse = round_to(volumes.coarse, 3);

        Ok(Self {
            grade: inputs.grade.name.to_string(),
            exposure: inputs.exposure.name.clone(),
            target_strength_mpa: round_to(target.strength_mpa(), 2),
            std_dev_mpa: round_to(target.std_dev_mpa(), 2),
            wc_ratio: round_to(cement.wc_ratio, 3),
            water_content_kg_m3: round_whole(in_kg_per_m3(water)),
            cement_content_kg_m3: round_whole(cement.cement_kg_m3()),
            min_cement_governs: cement.clamped,
            vol_coarse,
            vol_fine: round_to(1.0 - vol_coarse, 3),
            air_content: round_to(air, 3),
        })
    }
}

/// Outcome of one design run: every quantity, or a single error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MixResult {
    Success(MixReport),
    Failure { kind: ErrorKind, message: String },
}

impl MixResult {
    pub fn is_success(&self) -> bool {
        matches!(self, MixResult::Success(_))
    }

    pub fn report(&self) -> Option<&MixReport> {
        match self {
            MixResult::Success(report) => Some(report),
            MixResult::Failure { .. } => None,
        }
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            MixResult::Success(_) => None,
            MixResult::Failure { kind, .. } => Some(*kind),
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            MixResult::Success(_) => None,
            MixResult::Failure { message, .. } => Some(message),
        }
    }
}

impl From<DesignError> for MixResult {
    fn from(err: DesignError) -> Self {
        MixResult::Failure {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl From<DesignResult<MixReport>> for MixResult {
    fn from(result: DesignResult<MixReport>) -> Self {
        match result {
            Ok(report) => MixResult::Success(report),
            Err(err) => err.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> MixReport {
        MixReport {
            grade: "M20".into(),
            exposure: "Moderate".into(),
            target_strength_mpa: 26.6,
            std_dev_mpa: 4.0,
            wc_ratio: 0.45,
            water_content_kg_m3: 192.0,
            cement_content_kg_m3: 427.0,
            min_cement_governs: false,
            vol_coarse: 0.63,
            vol_fine: 0.37,
            air_content: 0.01,
        }
    }

    #[test]
    fn success_serializes_with_status_tag() {
        let json = serde_json::to_value(MixResult::Success(sample_report())).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["grade"], "M20");
        assert_eq!(json["water_content_kg_m3"], 192.0);
    }

    #[test]
    fn failure_carries_kind_and_message() {
        let result: MixResult = DesignError::UnknownGrade { name: "M27".into() }.into();
        assert!(!result.is_success());
        assert_eq!(result.error_kind(), Some(ErrorKind::UnknownGrade));
        assert!(result.error_message().unwrap().contains("M27"));

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "failure");
        assert_eq!(json["kind"], "unknown_grade");
    }

    #[test]
    fn result_round_trips_through_json() {
        let result = MixResult::Success(sample_report());
        let text = serde_json::to_string(&result).unwrap();
        let back: MixResult = serde_json::from_str(&text).unwrap();
        assert_eq!(back, result);
    }
}
