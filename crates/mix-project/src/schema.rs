//! Design file schema.

use serde::{Deserialize, Serialize};

/// Highest file format version this crate reads and writes.
pub const FORMAT_VERSION: u32 = 1;

/// One design job: optional extra exposure classes plus the mix to design.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DesignFile {
    pub version: u32,
    pub name: String,
    /// Classes added to (or overriding) the built-in exposure catalog
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exposures: Vec<ExposureDef>,
    pub design: DesignDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExposureDef {
    pub name: String,
    pub max_wc_ratio: f64,
    pub min_cement_kg_m3: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DesignDef {
    pub grade: String,
    /// Name of an exposure class in `exposures` or the built-in catalog
    pub exposure: String,
    /// Overrides the named class's limit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_wc_ratio: Option<f64>,
    /// Overrides the named class's limit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_cement_kg_m3: Option<f64>,
    pub cement_type: String,
    pub max_aggregate_size_mm: f64,
    pub fine_aggregate_zone: String,
    pub slump_mm: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_control: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregate_shape: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placing_method: Option<String>,
    #[serde(default, skip_serializing_if = "SpecificGravityDef::is_empty")]
    pub specific_gravity: SpecificGravityDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admixture: Option<AdmixtureDef>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct SpecificGravityDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cement: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coarse_aggregate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fine_aggregate: Option<f64>,
}

impl SpecificGravityDef {
    pub fn is_empty(&self) -> bool {
        self.cement.is_none() && self.coarse_aggregate.is_none() && self.fine_aggregate.is_none()
    }
}

/// Present only when an admixture is used.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdmixtureDef {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dosage_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_gravity: Option<f64>,
}
