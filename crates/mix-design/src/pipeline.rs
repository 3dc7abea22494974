//! Orchestrates the design stages in their fixed order.

use mix_catalog::air_content;

use crate::aggregate::proportion_aggregates;
use crate::cement::correct_cement_content;
use crate::error::DesignResult;
use crate::report::{MixReport, MixResult};
use crate::request::{DesignOptions, MixInputs, MixRequest};
use crate::state::MixState;
use crate::strength::target_strength;
use crate::water::estimate_water_content;
use crate::wc_ratio::select_wc_ratio;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DesignStage {
    TargetStrength,
    WaterCementRatio,
    WaterContent,
    CementContent,
    AggregateProportion,
    AirContent,
    Completed,
}

impl DesignStage {
    /// Stages that derive a quantity, in execution order.
    pub const SEQUENCE: [DesignStage; 6] = [
        DesignStage::TargetStrength,
        DesignStage::WaterCementRatio,
        DesignStage::WaterContent,
        DesignStage::CementContent,
        DesignStage::AggregateProportion,
        DesignStage::AirContent,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DesignStage::TargetStrength => "Target strength",
            DesignStage::WaterCementRatio => "Water-cement ratio",
            DesignStage::WaterContent => "Water content",
            DesignStage::CementContent => "Cement content",
            DesignStage::AggregateProportion => "Aggregate proportion",
            DesignStage::AirContent => "Air content",
            DesignStage::Completed => "Completed",
        }
    }
}

/// Called after each stage with the state so far.
pub type ProgressCallback<'a> = Option<&'a mut dyn FnMut(DesignStage, &MixState)>;

fn emit_progress(progress_cb: &mut ProgressCallback<'_>, stage: DesignStage, state: &MixState) {
    if let Some(cb) = progress_cb.as_deref_mut() {
        cb(stage, state);
    }
}

/// Run one stage, returning the state with its result filled in.
fn advance(state: MixState, stage: DesignStage) -> DesignResult<MixState> {
    let next = match stage {
        DesignStage::TargetStrength => {
            let inputs = state.inputs();
            let target = target_strength(inputs.grade, inputs.site_control);
            state.with_target_strength(target)
        }
        DesignStage::WaterCementRatio => {
            let inputs = state.inputs();
            let wc = select_wc_ratio(
                state.target_strength()?.strength,
                inputs.cement_band,
                inputs.exposure.max_wc_ratio,
            );
            state.with_selected_wc_ratio(wc)
        }
        DesignStage::WaterContent => {
            let inputs = state.inputs();
            let water = estimate_water_content(
                inputs.max_aggregate_size,
                inputs.slump,
                inputs.aggregate_shape,
                inputs.admixture,
            );
            state.with_water_content(water)
        }
        DesignStage::CementContent => {
            let cement = correct_cement_content(
                state.water_content()?,
                state.selected_wc_ratio()?,
                state.inputs().exposure.min_cement(),
            );
            state.with_cement(cement)
        }
        DesignStage::AggregateProportion => {
            let inputs = state.inputs();
            // Corrected ratio, not the selected one
            let volumes = proportion_aggregates(
                inputs.max_aggregate_size,
                inputs.zone,
                state.wc_ratio()?,
                inputs.placing_method,
            );
            state.with_aggregates(volumes)
        }
        DesignStage::AirContent => {
            let air = air_content(state.inputs().max_aggregate_size);
            state.with_air_content(air)
        }
        DesignStage::Completed => state,
    };
    Ok(next)
}

/// Run every stage on validated inputs.
pub fn run_design(inputs: &MixInputs) -> DesignResult<MixReport> {
    run_design_with_progress(inputs, None)
}

/// Run every stage, reporting the state after each one.
pub fn run_design_with_progress(
    inputs: &MixInputs,
    mut progress_cb: ProgressCallback<'_>,
) -> DesignResult<MixReport> {
    tracing::info!(
        grade = inputs.grade.name,
        exposure = %inputs.exposure.name,
        "Starting mix design"
    );

    let mut state = MixState::new(inputs.clone());
    for stage in DesignStage::SEQUENCE {
        state = advance(state, stage)?;
        emit_progress(&mut progress_cb, stage, &state);
    }

    let report = MixReport::from_state(&state)?;
    emit_progress(&mut progress_cb, DesignStage::Completed, &state);

    tracing::info!(
        target_strength_mpa = report.target_strength_mpa,
        wc_ratio = report.wc_ratio,
        water_kg_m3 = report.water_content_kg_m3,
        cement_kg_m3 = report.cement_content_kg_m3,
        "Mix design completed"
    );
    Ok(report)
}

/// Validate a raw request and run the full design. Any failure, whether in
/// validation or in a stage, becomes a single `MixResult::Failure`.
pub fn perform_full_design(request: &MixRequest, options: &DesignOptions) -> MixResult {
    perform_full_design_with_progress(request, options, None)
}

pub fn perform_full_design_with_progress(
    request: &MixRequest,
    options: &DesignOptions,
    progress_cb: ProgressCallback<'_>,
) -> MixResult {
    let outcome = MixInputs::from_request(request, options)
        .and_then(|inputs| run_design_with_progress(&inputs, progress_cb));
    if let Err(err) = &outcome {
        tracing::warn!(kind = ?err.kind(), error = %err, "Mix design failed");
    }
    outcome.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn m20_moderate() -> MixRequest {
        MixRequest {
            grade: Some("M20".into()),
            exposure: Some("Moderate".into()),
            max_wc_ratio: Some(0.50),
            min_cement_kg_m3: Some(240.0),
            cement_type: Some("OPC 43 Grade".into()),
            max_aggregate_size_mm: Some(20.0),
            fine_aggregate_zone: Some("II".into()),
            slump_mm: Some(75.0),
            aggregate_shape: Some("Crushed angular aggregate".into()),
            site_control: Some("Good".into()),
            use_admixture: Some(false),
            ..MixRequest::default()
        }
    }

    #[test]
    fn stages_run_in_order() {
        let inputs = MixInputs::from_request(&m20_moderate(), &DesignOptions::default()).unwrap();
        let mut seen = Vec::new();
        let mut cb = |stage: DesignStage, _state: &MixState| seen.push(stage);
        run_design_with_progress(&inputs, Some(&mut cb)).unwrap();

        let mut expected = DesignStage::SEQUENCE.to_vec();
        expected.push(DesignStage::Completed);
        assert_eq!(seen, expected);
    }

    #[test]
    fn progress_state_accumulates() {
        let inputs = MixInputs::from_request(&m20_moderate(), &DesignOptions::default()).unwrap();
        let mut water_known_at = Vec::new();
        let mut cb = |stage: DesignStage, state: &MixState| {
            water_known_at.push((stage, state.water_content().is_ok()));
        };
        run_design_with_progress(&inputs, Some(&mut cb)).unwrap();

        assert_eq!(water_known_at[1], (DesignStage::WaterCementRatio, false));
        assert_eq!(water_known_at[2], (DesignStage::WaterContent, true));
    }

    #[test]
    fn reading_ahead_of_a_stage_is_an_internal_error() {
        let inputs = MixInputs::from_request(&m20_moderate(), &DesignOptions::default()).unwrap();
        let err = advance(MixState::new(inputs), DesignStage::CementContent).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Internal);
    }

    #[test]
    fn validation_failure_becomes_failure_result() {
        let mut request = m20_moderate();
        request.max_aggregate_size_mm = Some(25.0);
        let result = perform_full_design(&request, &DesignOptions::default());
        assert_eq!(
            result.error_kind(),
            Some(ErrorKind::UnsupportedAggregateConfiguration)
        );
        assert!(result.report().is_none());
    }
}
