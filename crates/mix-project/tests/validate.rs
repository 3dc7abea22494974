use mix_project::schema::*;
use mix_project::{ValidationError, validate_design_file};

fn base_file() -> DesignFile {
    DesignFile {
        version: FORMAT_VERSION,
        name: "Slab".to_string(),
        exposures: vec![],
        design: DesignDef {
            grade: "M25".to_string(),
            exposure: "Moderate".to_string(),
            max_wc_ratio: None,
            min_cement_kg_m3: None,
            cement_type: "OPC 53 Grade".to_string(),
            max_aggregate_size_mm: 20.0,
            fine_aggregate_zone: "II".to_string(),
            slump_mm: 100.0,
            site_control: None,
            aggregate_shape: None,
            placing_method: None,
            specific_gravity: SpecificGravityDef::default(),
            admixture: None,
        },
    }
}

fn exposure(name: &str, max_wc_ratio: f64, min_cement_kg_m3: f64) -> ExposureDef {
    ExposureDef {
        name: name.to_string(),
        max_wc_ratio,
        min_cement_kg_m3,
    }
}

#[test]
fn builtin_exposure_reference_is_valid() {
    validate_design_file(&base_file()).unwrap();
}

#[test]
fn exposure_reference_ignores_case() {
    let mut file = base_file();
    file.design.exposure = "very severe".to_string();
    validate_design_file(&file).unwrap();
}

#[test]
fn future_version_rejected() {
    let mut file = base_file();
    file.version = FORMAT_VERSION + 1;
    assert!(matches!(
        validate_design_file(&file),
        Err(ValidationError::UnsupportedVersion { .. })
    ));
}

#[test]
fn duplicate_exposure_rejected() {
    let mut file = base_file();
    file.exposures = vec![exposure("Coastal", 0.45, 320.0), exposure("coastal", 0.40, 340.0)];
    assert!(matches!(
        validate_design_file(&file),
        Err(ValidationError::DuplicateName { .. })
    ));
}

#[test]
fn unknown_exposure_rejected() {
    let mut file = base_file();
    file.design.exposure = "Lunar".to_string();
    let err = validate_design_file(&file).unwrap_err();
    assert!(matches!(err, ValidationError::MissingReference { .. }));
    assert!(err.to_string().contains("Lunar"));
}

#[test]
fn file_exposure_satisfies_reference() {
    let mut file = base_file();
    file.exposures = vec![exposure("Lunar", 0.40, 350.0)];
    file.design.exposure = "Lunar".to_string();
    validate_design_file(&file).unwrap();
}

#[test]
fn exposure_limits_checked() {
    for bad in [exposure("A", 0.0, 300.0), exposure("B", 1.2, 300.0), exposure("C", 0.5, -1.0)] {
        let mut file = base_file();
        file.exposures = vec![bad];
        assert!(matches!(
            validate_design_file(&file),
            Err(ValidationError::InvalidValue { .. })
        ));
    }

    let mut file = base_file();
    file.exposures = vec![exposure(" ", 0.5, 300.0)];
    assert!(validate_design_file(&file).is_err());
}

#[test]
fn design_overrides_checked() {
    let mut file = base_file();
    file.design.max_wc_ratio = Some(f64::NAN);
    assert!(validate_design_file(&file).is_err());

    let mut file = base_file();
    file.design.min_cement_kg_m3 = Some(-10.0);
    assert!(validate_design_file(&file).is_err());

    let mut file = base_file();
    file.design.slump_mm = 0.0;
    assert!(validate_design_file(&file).is_err());
}
