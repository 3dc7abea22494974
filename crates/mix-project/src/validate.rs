//! Design file validation.

use std::collections::HashSet;

use mix_catalog::lookup_exposure;

use crate::schema::{DesignDef, DesignFile, ExposureDef, FORMAT_VERSION};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate name: {name} in {context}")]
    DuplicateName { name: String, context: String },

    #[error("Missing reference: {name} in {context}")]
    MissingReference { name: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

fn invalid(field: &str, value: impl ToString, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

pub fn validate_design_file(file: &DesignFile) -> Result<(), ValidationError> {
    if file.version == 0 || file.version > FORMAT_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: file.version,
        });
    }

    let mut names = HashSet::new();
    for exposure in &file.exposures {
        validate_exposure(exposure)?;
        if !names.insert(exposure.name.trim().to_ascii_lowercase()) {
            return Err(ValidationError::DuplicateName {
                name: exposure.name.clone(),
                context: "exposures".to_string(),
            });
        }
    }

    validate_design(&file.design)?;

    let exposure_key = file.design.exposure.trim().to_ascii_lowercase();
    if !names.contains(&exposure_key) && lookup_exposure(&file.design.exposure).is_err() {
        return Err(ValidationError::MissingReference {
            name: file.design.exposure.clone(),
            context: "design exposure".to_string(),
        });
    }

    Ok(())
}

fn validate_exposure(exposure: &ExposureDef) -> Result<(), ValidationError> {
    if exposure.name.trim().is_empty() {
        return Err(invalid("exposures.name", "", "must not be empty"));
    }
    validate_max_wc(exposure.max_wc_ratio, "exposures.max_wc_ratio")?;
    validate_min_cement(exposure.min_cement_kg_m3, "exposures.min_cement_kg_m3")
}

fn validate_design(design: &DesignDef) -> Result<(), ValidationError> {
    if design.grade.trim().is_empty() {
        return Err(invalid("design.grade", "", "must not be empty"));
    }
    if design.exposure.trim().is_empty() {
        return Err(invalid("design.exposure", "", "must not be empty"));
    }
    if let Some(wc) = design.max_wc_ratio {
        validate_max_wc(wc, "design.max_wc_ratio")?;
    }
    if let Some(cement) = design.min_cement_kg_m3 {
        validate_min_cement(cement, "design.min_cement_kg_m3")?;
    }
    if !design.slump_mm.is_finite() || design.slump_mm <= 0.0 {
        return Err(invalid("design.slump_mm", design.slump_mm, "must be positive"));
    }
    Ok(())
}

fn validate_max_wc(value: f64, field: &str) -> Result<(), ValidationError> {
    if !(value > 0.0 && value <= 1.0) {
        return Err(invalid(field, value, "must be in (0, 1]"));
    }
    Ok(())
}

fn validate_min_cement(value: f64, field: &str) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(invalid(field, value, "must not be negative"));
    }
    Ok(())
}
