//! Exposure conditions and the durability limits they impose.
//!
//! The engine never resolves exposure names itself; a frontend picks an
//! [`ExposureClass`] (from this catalog or its own table) and passes the
//! limits in with each design request.

use mix_core::units::{Content, kg_per_m3};

use crate::error::{CatalogError, CatalogResult};

/// Durability limits for one exposure condition.
#[derive(Debug, Clone, PartialEq)]
pub struct ExposureClass {
    pub name: String,
    /// Maximum permitted free water-cement ratio
    pub max_wc_ratio: f64,
    /// Minimum cement content [kg/m³]
    pub min_cement_kg_m3: f64,
}

impl ExposureClass {
    pub fn new(name: impl Into<String>, max_wc_ratio: f64, min_cement_kg_m3: f64) -> Self {
        Self {
            name: name.into(),
            max_wc_ratio,
            min_cement_kg_m3,
        }
    }

    pub fn min_cement(&self) -> Content {
        kg_per_m3(self.min_cement_kg_m3)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExposureCatalogEntry {
    pub name: &'static str,
    pub max_wc_ratio: f64,
    pub min_cement_kg_m3: f64,
}

impl ExposureCatalogEntry {
    pub fn to_class(&self) -> ExposureClass {
        ExposureClass::new(self.name, self.max_wc_ratio, self.min_cement_kg_m3)
    }
}

const EXPOSURE_CATALOG: [ExposureCatalogEntry; 5] = [
    ExposureCatalogEntry {
        name: "Mild",
        max_wc_ratio: 0.55,
        min_cement_kg_m3: 220.0,
    },
    ExposureCatalogEntry {
        name: "Moderate",
        max_wc_ratio: 0.50,
        min_cement_kg_m3: 240.0,
    },
    ExposureCatalogEntry {
        name: "Severe",
        max_wc_ratio: 0.45,
        min_cement_kg_m3: 320.0,
    },
    ExposureCatalogEntry {
        name: "Very Severe",
        max_wc_ratio: 0.40,
        min_cement_kg_m3: 340.0,
    },
    ExposureCatalogEntry {
        name: "Extreme",
        max_wc_ratio: 0.35,
        min_cement_kg_m3: 360.0,
    },
];

pub fn exposure_catalog() -> &'static [ExposureCatalogEntry] {
    &EXPOSURE_CATALOG
}

pub fn lookup_exposure(name: &str) -> CatalogResult<ExposureClass> {
    let wanted = name.trim();
    exposure_catalog()
        .iter()
        .find(|e| e.name.eq_ignore_ascii_case(wanted))
        .map(ExposureCatalogEntry::to_class)
        .ok_or_else(|| CatalogError::UnknownExposure {
            name: name.to_string(),
        })
}
