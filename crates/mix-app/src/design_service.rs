//! Turns design files into engine requests and runs them.

use std::path::Path;

use mix_catalog::{ExposureClass, GradeSpec, exposure_catalog, filter_grades, lookup_exposure};
use mix_design::{
    DesignOptions, DesignStage, MixInputs, MixReport, MixRequest, MixResult, MixState,
    perform_full_design_with_progress,
};
use mix_project::schema::DesignFile;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::project_service;

/// A design file's request together with the engine's answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignOutcome {
    pub name: String,
    pub request: MixRequest,
    pub result: MixResult,
}

impl DesignOutcome {
    /// The report, or the design failure as an error.
    pub fn report(&self) -> AppResult<&MixReport> {
        match &self.result {
            MixResult::Success(report) => Ok(report),
            MixResult::Failure { kind, message } => Err(AppError::Design {
                kind: *kind,
                message: message.clone(),
            }),
        }
    }
}

/// Exposure limits for the design: classes defined in the file win over the
/// built-in catalog, and explicit limits on the design override both.
pub fn resolve_exposure(file: &DesignFile) -> AppResult<ExposureClass> {
    let wanted = file.design.exposure.trim();
    let mut exposure = match file
        .exposures
        .iter()
        .find(|e| e.name.trim().eq_ignore_ascii_case(wanted))
    {
        Some(def) => ExposureClass::new(def.name.clone(), def.max_wc_ratio, def.min_cement_kg_m3),
        None => lookup_exposure(wanted)
            .map_err(|_| AppError::UnknownExposure(file.design.exposure.clone()))?,
    };

    if let Some(max_wc) = file.design.max_wc_ratio {
        exposure.max_wc_ratio = max_wc;
    }
    if let Some(min_cement) = file.design.min_cement_kg_m3 {
        exposure.min_cement_kg_m3 = min_cement;
    }
    Ok(exposure)
}

pub fn build_request(file: &DesignFile) -> AppResult<MixRequest> {
    let exposure = resolve_exposure(file)?;
    let design = &file.design;
    let admixture = design.admixture.as_ref();

    Ok(MixRequest {
        grade: Some(design.grade.clone()),
        exposure: Some(exposure.name),
        max_wc_ratio: Some(exposure.max_wc_ratio),
        min_cement_kg_m3: Some(exposure.min_cement_kg_m3),
        cement_type: Some(design.cement_type.clone()),
        max_aggregate_size_mm: Some(design.max_aggregate_size_mm),
        fine_aggregate_zone: Some(design.fine_aggregate_zone.clone()),
        slump_mm: Some(design.slump_mm),
        specific_gravity_cement: design.specific_gravity.cement,
        specific_gravity_coarse: design.specific_gravity.coarse_aggregate,
        specific_gravity_fine: design.specific_gravity.fine_aggregate,
        site_control: design.site_control.clone(),
        aggregate_shape: design.aggregate_shape.clone(),
        placing_method: design.placing_method.clone(),
        use_admixture: Some(admixture.is_some()),
        admixture_type: admixture.map(|a| a.kind.clone()),
        admixture_dosage_percent: admixture.and_then(|a| a.dosage_percent),
        specific_gravity_admixture: admixture.and_then(|a| a.specific_gravity),
    })
}

/// Check that the engine would accept the file without running the design.
/// Catches what the schema cannot see: unknown grades, unsupported aggregate
/// sizes, out-of-range slumps and unrecognized categories.
pub fn check_design_file(file: &DesignFile, options: &DesignOptions) -> AppResult<MixRequest> {
    let request = build_request(file)?;
    MixInputs::from_request(&request, options)?;
    Ok(request)
}

/// Design an already loaded file.
pub fn design_file(
    file: &DesignFile,
    options: &DesignOptions,
    progress_cb: Option<&mut dyn FnMut(DesignStage, &MixState)>,
) -> AppResult<DesignOutcome> {
    let request = build_request(file)?;
    let result = perform_full_design_with_progress(&request, options, progress_cb);
    Ok(DesignOutcome {
        name: file.name.clone(),
        request,
        result,
    })
}

/// Load a design file and run it. Only file problems are errors here; a
/// failed design comes back inside the outcome.
pub fn run_design_file(path: &Path, options: &DesignOptions) -> AppResult<DesignOutcome> {
    run_design_file_with_progress(path, options, None)
}

pub fn run_design_file_with_progress(
    path: &Path,
    options: &DesignOptions,
    progress_cb: Option<&mut dyn FnMut(DesignStage, &MixState)>,
) -> AppResult<DesignOutcome> {
    let file = project_service::load_design_file(path)?;
    design_file(&file, options, progress_cb)
}

/// Grades whose name contains `query`; an empty query lists all of them.
pub fn list_grades(query: &str) -> Vec<GradeSpec> {
    filter_grades(query)
}

pub fn list_exposures() -> Vec<ExposureClass> {
    exposure_catalog().iter().map(|e| e.to_class()).collect()
}
