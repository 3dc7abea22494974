//! Design file loading, saving and validation.

use std::path::Path;

use mix_project::ProjectError;
use mix_project::schema::{
    AdmixtureDef, DesignDef, DesignFile, FORMAT_VERSION, SpecificGravityDef,
};

use crate::error::{AppError, AppResult};

/// On-disk encoding, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Yaml,
    Json,
}

impl FileFormat {
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(AppError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Load and validate a design file.
pub fn load_design_file(path: &Path) -> AppResult<DesignFile> {
    let loaded = match FileFormat::from_path(path)? {
        FileFormat::Yaml => mix_project::load_yaml(path),
        FileFormat::Json => mix_project::load_json(path),
    };
    let file = loaded.map_err(|err| match err {
        ProjectError::Io(source) => AppError::DesignFileRead {
            path: path.to_path_buf(),
            source,
        },
        other => other.into(),
    })?;

    tracing::debug!(path = %path.display(), name = %file.name, "Loaded design file");
    Ok(file)
}

/// Validate and write a design file in the format its extension names.
pub fn save_design_file(path: &Path, file: &DesignFile) -> AppResult<()> {
    let saved = match FileFormat::from_path(path)? {
        FileFormat::Yaml => mix_project::save_yaml(path, file),
        FileFormat::Json => mix_project::save_json(path, file),
    };
    saved.map_err(|err| match err {
        ProjectError::Io(source) => AppError::DesignFileWrite {
            path: path.to_path_buf(),
            source,
        },
        other => other.into(),
    })
}

/// Starter file written by `template`: an M20 footing for moderate exposure.
pub fn template_design_file() -> DesignFile {
    DesignFile {
        version: FORMAT_VERSION,
        name: "M20 footing".to_string(),
        exposures: Vec::new(),
        design: DesignDef {
            grade: "M20".to_string(),
            exposure: "Moderate".to_string(),
            max_wc_ratio: None,
            min_cement_kg_m3: None,
            cement_type: "OPC 43 Grade".to_string(),
            max_aggregate_size_mm: 20.0,
            fine_aggregate_zone: "II".to_string(),
            slump_mm: 75.0,
            site_control: Some("Good".to_string()),
            aggregate_shape: Some("Crushed angular aggregate".to_string()),
            placing_method: Some("Chute (Non pumpable)".to_string()),
            specific_gravity: SpecificGravityDef {
                cement: Some(3.15),
                coarse_aggregate: Some(2.74),
                fine_aggregate: Some(2.65),
            },
            admixture: None,
        },
    }
}

/// Same as [`template_design_file`] with a superplasticizer and pumped placing.
pub fn template_admixture_design_file() -> DesignFile {
    let mut file = template_design_file();
    file.name = "M20 footing, pumped".to_string();
    file.design.placing_method = Some("Pumped".to_string());
    file.design.admixture = Some(AdmixtureDef {
        kind: "Superplasticizer - normal".to_string(),
        dosage_percent: Some(1.0),
        specific_gravity: Some(1.145),
    });
    file
}
